use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{DailyHumidity, DailyPrecipitation, DailyTemperature, TemperatureKind};
use crate::utils::constants::{
    PRECIP_MAX_HUNDREDTHS, SHOULDER_HUMIDITY_RANGE, SHOULDER_TMAX_RANGE, SHOULDER_TMIN_RANGE,
    SUMMER_HUMIDITY_RANGE, SUMMER_TMAX_RANGE, SUMMER_TMIN_RANGE, SYNTHETIC_DAYS_PER_MONTH,
    SYNTHETIC_DAYS_PER_YEAR, SYNTHETIC_MONTHS, WINTER_HUMIDITY_RANGE, WINTER_TMAX_RANGE,
    WINTER_TMIN_RANGE,
};

/// Seasonal band a month falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
    Shoulder,
}

impl Season {
    pub fn for_month(month: u32) -> Self {
        match month {
            6..=8 => Season::Summer,
            12 | 1 | 2 => Season::Winter,
            _ => Season::Shoulder,
        }
    }

    fn tmax_range(&self) -> (i32, i32) {
        match self {
            Season::Summer => SUMMER_TMAX_RANGE,
            Season::Winter => WINTER_TMAX_RANGE,
            Season::Shoulder => SHOULDER_TMAX_RANGE,
        }
    }

    fn tmin_range(&self) -> (i32, i32) {
        match self {
            Season::Summer => SUMMER_TMIN_RANGE,
            Season::Winter => WINTER_TMIN_RANGE,
            Season::Shoulder => SHOULDER_TMIN_RANGE,
        }
    }

    pub fn humidity_range(&self) -> (u8, u8) {
        match self {
            Season::Summer => SUMMER_HUMIDITY_RANGE,
            Season::Winter => WINTER_HUMIDITY_RANGE,
            Season::Shoulder => SHOULDER_HUMIDITY_RANGE,
        }
    }
}

/// Generates plausible placeholder series over a simplified calendar of
/// 12 months x 28 days.
///
/// Values are drawn from a generator seeded by (year, series), so a rerun for
/// the same year reproduces the same series byte for byte, and no series
/// depends on which of the others fell back to synthetic data.
pub struct SyntheticGenerator {
    year: i32,
}

// Per-series salts for the seeded RNG streams
const TEMPERATURE_STREAM: u64 = 1;
const PRECIPITATION_STREAM: u64 = 2;
const HUMIDITY_STREAM: u64 = 3;

impl SyntheticGenerator {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    fn seeded_rng(&self, stream: u64) -> StdRng {
        let seed = (self.year as i64 as u64)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(stream);
        StdRng::seed_from_u64(seed)
    }

    /// One Max and one Min entry per simplified day, drawn from the month's
    /// seasonal band. The winter max and min bands overlap, so a drawn pair
    /// can invert; swapping restores max >= min while keeping both values
    /// inside their own bands.
    pub fn temperature_series(&self) -> Vec<DailyTemperature> {
        let mut rng = self.seeded_rng(TEMPERATURE_STREAM);
        let mut series = Vec::with_capacity(SYNTHETIC_DAYS_PER_YEAR * 2);

        for date in simplified_calendar(self.year) {
            let season = Season::for_month(date.month());
            let (max_lo, max_hi) = season.tmax_range();
            let (min_lo, min_hi) = season.tmin_range();

            let mut max = rng.random_range(max_lo..=max_hi);
            let mut min = rng.random_range(min_lo..=min_hi);
            if max < min {
                std::mem::swap(&mut max, &mut min);
            }

            series.push(DailyTemperature {
                date,
                fahrenheit: max as f64,
                kind: TemperatureKind::Max,
            });
            series.push(DailyTemperature {
                date,
                fahrenheit: min as f64,
                kind: TemperatureKind::Min,
            });
        }

        series
    }

    /// Uniform in [0, 0.5) inches, drawn as hundredths for exact two-decimal
    /// values.
    pub fn precipitation_series(&self) -> Vec<DailyPrecipitation> {
        let mut rng = self.seeded_rng(PRECIPITATION_STREAM);

        simplified_calendar(self.year)
            .map(|date| DailyPrecipitation {
                date,
                inches: rng.random_range(0..PRECIP_MAX_HUNDREDTHS) as f64 / 100.0,
            })
            .collect()
    }

    /// Independent per-day draw from the month's seasonal humidity band.
    pub fn humidity_series(&self) -> Vec<DailyHumidity> {
        let mut rng = self.seeded_rng(HUMIDITY_STREAM);

        simplified_calendar(self.year)
            .map(|date| {
                let (lo, hi) = Season::for_month(date.month()).humidity_range();
                DailyHumidity {
                    date,
                    percent: rng.random_range(lo..=hi),
                }
            })
            .collect()
    }
}

/// The 336 days of the simplified synthetic calendar, in date order.
fn simplified_calendar(year: i32) -> impl Iterator<Item = NaiveDate> {
    (1..=SYNTHETIC_MONTHS).flat_map(move |month| {
        (1..=SYNTHETIC_DAYS_PER_MONTH).map(move |day| {
            // month in 1..=12 and day in 1..=28 is a valid date in any year
            NaiveDate::from_ymd_opt(year, month, day).expect("simplified calendar date")
        })
    })
}
