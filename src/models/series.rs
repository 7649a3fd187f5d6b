use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;

/// Tag distinguishing the two daily temperature readings.
///
/// `Max` sorts before `Min` so a day's pair always appears in TMAX, TMIN
/// order in the output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemperatureKind {
    Max,
    Min,
}

impl TemperatureKind {
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureKind::Max => "TMAX",
            TemperatureKind::Min => "TMIN",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DailyTemperature {
    pub date: NaiveDate,
    #[validate(range(min = -60.0, max = 130.0))]
    pub fahrenheit: f64,
    pub kind: TemperatureKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DailyPrecipitation {
    pub date: NaiveDate,
    #[validate(range(min = 0.0))]
    pub inches: f64,
}

/// Relative humidity as of noon. There is no raw source field for this, so
/// every entry is generated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DailyHumidity {
    pub date: NaiveDate,
    #[validate(range(min = 0, max = 100))]
    pub percent: u8,
}

/// Where a series' values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesSource {
    Observed,
    Synthetic,
}

impl SeriesSource {
    pub fn describe(&self) -> &'static str {
        match self {
            SeriesSource::Observed => "observed",
            SeriesSource::Synthetic => "synthetic",
        }
    }
}

/// The three processed series for one station-year, ready for the renderer.
///
/// Humidity carries no source marker: it is always synthetic.
#[derive(Debug, Clone)]
pub struct YearSeries {
    pub year: i32,
    pub temperature: Vec<DailyTemperature>,
    pub temperature_source: SeriesSource,
    pub precipitation: Vec<DailyPrecipitation>,
    pub precipitation_source: SeriesSource,
    pub humidity: Vec<DailyHumidity>,
}

impl YearSeries {
    /// Range-check every record in all three series.
    pub fn validate_records(&self) -> Result<()> {
        for record in &self.temperature {
            record.validate()?;
        }
        for record in &self.precipitation {
            record.validate()?;
        }
        for record in &self.humidity {
            record.validate()?;
        }
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "temperature: {} entries ({}), precipitation: {} entries ({}), humidity: {} entries (synthetic)",
            self.temperature.len(),
            self.temperature_source.describe(),
            self.precipitation.len(),
            self.precipitation_source.describe(),
            self.humidity.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(TemperatureKind::Max.label(), "TMAX");
        assert_eq!(TemperatureKind::Min.label(), "TMIN");
    }

    #[test]
    fn test_kind_ordering_puts_max_first() {
        assert!(TemperatureKind::Max < TemperatureKind::Min);
    }

    #[test]
    fn test_temperature_range_validation() {
        let date = NaiveDate::from_ymd_opt(1980, 7, 15).unwrap();

        let valid = DailyTemperature {
            date,
            fahrenheit: 68.0,
            kind: TemperatureKind::Max,
        };
        assert!(valid.validate().is_ok());

        let invalid = DailyTemperature {
            date,
            fahrenheit: 200.0,
            kind: TemperatureKind::Max,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_negative_precipitation_rejected() {
        let date = NaiveDate::from_ymd_opt(1980, 7, 15).unwrap();

        let invalid = DailyPrecipitation { date, inches: -0.1 };
        assert!(invalid.validate().is_err());

        let valid = DailyPrecipitation { date, inches: 0.0 };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_humidity_bounds() {
        let date = NaiveDate::from_ymd_opt(1980, 7, 15).unwrap();

        let valid = DailyHumidity { date, percent: 100 };
        assert!(valid.validate().is_ok());

        let invalid = DailyHumidity { date, percent: 101 };
        assert!(invalid.validate().is_err());
    }
}
