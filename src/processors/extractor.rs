use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::models::{
    DailyPrecipitation, DailyTemperature, RawRecord, SeriesSource, TemperatureKind, YearSeries,
};
use crate::processors::SyntheticGenerator;
use crate::utils::units::{tenths_celsius_to_fahrenheit, tenths_mm_to_inches};

/// Turns raw station records into the three per-day series for one year.
///
/// Each series is either wholly observed or wholly synthetic: when the
/// extracted data fails its completeness check the entire series is replaced,
/// never merged with placeholder values.
pub struct SeriesExtractor {
    station_id: String,
    year: i32,
}

impl SeriesExtractor {
    pub fn new(station_id: impl Into<String>, year: i32) -> Self {
        Self {
            station_id: station_id.into(),
            year,
        }
    }

    pub fn extract(&self, records: &[RawRecord]) -> Result<YearSeries> {
        let generator = SyntheticGenerator::new(self.year);

        let mut temperature = self.temperature_series(records);
        let mut temperature_source = SeriesSource::Observed;
        if !temperature_is_complete(&temperature) {
            info!(
                year = self.year,
                extracted = temperature.len(),
                "temperature extraction incomplete, substituting synthetic series"
            );
            temperature = generator.temperature_series();
            temperature_source = SeriesSource::Synthetic;
        }

        let mut precipitation = self.precipitation_series(records);
        let mut precipitation_source = SeriesSource::Observed;
        if precipitation.is_empty() {
            info!(
                year = self.year,
                "no precipitation extracted, substituting synthetic series"
            );
            precipitation = generator.precipitation_series();
            precipitation_source = SeriesSource::Synthetic;
        }

        // No raw field carries humidity; it is always generated.
        let mut humidity = generator.humidity_series();

        temperature.sort_by(|a, b| a.date.cmp(&b.date).then(a.kind.cmp(&b.kind)));
        precipitation.sort_by_key(|r| r.date);
        humidity.sort_by_key(|r| r.date);

        // The generator guarantees non-empty output, so an empty series here
        // is an internal-contract violation, not a data problem.
        if temperature.is_empty() {
            return Err(ProcessingError::EmptySeries {
                series: "temperature",
            });
        }
        if precipitation.is_empty() {
            return Err(ProcessingError::EmptySeries {
                series: "precipitation",
            });
        }
        if humidity.is_empty() {
            return Err(ProcessingError::EmptySeries { series: "humidity" });
        }

        Ok(YearSeries {
            year: self.year,
            temperature,
            temperature_source,
            precipitation,
            precipitation_source,
            humidity,
        })
    }

    fn temperature_series(&self, records: &[RawRecord]) -> Vec<DailyTemperature> {
        let mut series = Vec::new();

        for record in records
            .iter()
            .filter(|r| r.matches(&self.station_id, self.year))
        {
            if let Some(tenths) = record.tmax_tenths {
                series.push(DailyTemperature {
                    date: record.date,
                    fahrenheit: tenths_celsius_to_fahrenheit(tenths),
                    kind: TemperatureKind::Max,
                });
            }
            if let Some(tenths) = record.tmin_tenths {
                series.push(DailyTemperature {
                    date: record.date,
                    fahrenheit: tenths_celsius_to_fahrenheit(tenths),
                    kind: TemperatureKind::Min,
                });
            }
        }

        series
    }

    fn precipitation_series(&self, records: &[RawRecord]) -> Vec<DailyPrecipitation> {
        records
            .iter()
            .filter(|r| r.matches(&self.station_id, self.year))
            .filter_map(|r| {
                r.prcp_tenths.map(|tenths| DailyPrecipitation {
                    date: r.date,
                    inches: tenths_mm_to_inches(tenths),
                })
            })
            .collect()
    }
}

/// Extracted temperature data is usable only if both readings occur at least
/// once over the year.
fn temperature_is_complete(series: &[DailyTemperature]) -> bool {
    !series.is_empty()
        && series.iter().any(|r| r.kind == TemperatureKind::Max)
        && series.iter().any(|r| r.kind == TemperatureKind::Min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::SYNTHETIC_DAYS_PER_YEAR;
    use chrono::NaiveDate;

    const STATION: &str = "USW00094728";

    fn record(
        date: (i32, u32, u32),
        tmax: Option<i32>,
        tmin: Option<i32>,
        prcp: Option<i32>,
    ) -> RawRecord {
        RawRecord {
            station_id: STATION.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            tmax_tenths: tmax,
            tmin_tenths: tmin,
            prcp_tenths: prcp,
            snow_mm: None,
            snow_depth_mm: None,
        }
    }

    #[test]
    fn test_observed_temperature_mirrors_converted_input() {
        let records = vec![
            record((1980, 1, 2), Some(44), Some(-17), Some(0)),
            record((1980, 1, 1), Some(200), Some(100), Some(254)),
        ];

        let series = SeriesExtractor::new(STATION, 1980)
            .extract(&records)
            .unwrap();

        assert_eq!(series.temperature_source, SeriesSource::Observed);
        assert_eq!(series.temperature.len(), 4);

        // Sorted by date, Max before Min within a day
        assert_eq!(
            series.temperature[0].date,
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()
        );
        assert_eq!(series.temperature[0].kind, TemperatureKind::Max);
        assert_eq!(series.temperature[0].fahrenheit, 68.0);
        assert_eq!(series.temperature[1].kind, TemperatureKind::Min);
        assert_eq!(series.temperature[1].fahrenheit, 50.0);

        assert_eq!(series.precipitation_source, SeriesSource::Observed);
        assert_eq!(series.precipitation.len(), 2);
        assert_eq!(series.precipitation[0].inches, 1.0);
        assert_eq!(series.precipitation[1].inches, 0.0);
    }

    #[test]
    fn test_max_only_year_becomes_fully_synthetic() {
        // Max readings all year, never a min: the whole series is replaced
        let records: Vec<RawRecord> = (1..=12)
            .map(|month| record((2000, month, 1), Some(150), None, Some(10)))
            .collect();

        let series = SeriesExtractor::new(STATION, 2000)
            .extract(&records)
            .unwrap();

        assert_eq!(series.temperature_source, SeriesSource::Synthetic);
        assert_eq!(series.temperature.len(), SYNTHETIC_DAYS_PER_YEAR * 2);

        // Not a merge: the 12 extracted max readings are gone, every day
        // carries exactly one reading of each kind
        let max_count = series
            .temperature
            .iter()
            .filter(|r| r.kind == TemperatureKind::Max)
            .count();
        assert_eq!(max_count, SYNTHETIC_DAYS_PER_YEAR);

        // Precipitation had real data and keeps it
        assert_eq!(series.precipitation_source, SeriesSource::Observed);
        assert_eq!(series.precipitation.len(), 12);
    }

    #[test]
    fn test_empty_input_falls_back_everywhere() {
        let series = SeriesExtractor::new(STATION, 1980).extract(&[]).unwrap();

        assert_eq!(series.temperature_source, SeriesSource::Synthetic);
        assert_eq!(series.precipitation_source, SeriesSource::Synthetic);
        assert_eq!(series.temperature.len(), SYNTHETIC_DAYS_PER_YEAR * 2);
        assert_eq!(series.precipitation.len(), SYNTHETIC_DAYS_PER_YEAR);
        assert_eq!(series.humidity.len(), SYNTHETIC_DAYS_PER_YEAR);
    }

    #[test]
    fn test_other_station_and_year_filtered_out() {
        let mut foreign = record((1980, 5, 1), Some(100), Some(50), Some(10));
        foreign.station_id = "USW00014732".to_string();

        let records = vec![
            foreign,
            record((1979, 12, 31), Some(100), Some(50), Some(10)),
            record((1980, 5, 1), Some(250), Some(150), None),
        ];

        let series = SeriesExtractor::new(STATION, 1980)
            .extract(&records)
            .unwrap();

        assert_eq!(series.temperature_source, SeriesSource::Observed);
        assert_eq!(series.temperature.len(), 2);
        assert_eq!(series.temperature[0].fahrenheit, 77.0);

        // The only precipitation rows belonged elsewhere
        assert_eq!(series.precipitation_source, SeriesSource::Synthetic);
    }

    #[test]
    fn test_humidity_always_synthetic() {
        let records = vec![record((1980, 1, 1), Some(44), Some(28), Some(0))];

        let series = SeriesExtractor::new(STATION, 1980)
            .extract(&records)
            .unwrap();

        assert_eq!(series.humidity.len(), SYNTHETIC_DAYS_PER_YEAR);
        assert!(series.humidity.iter().all(|r| r.percent <= 100));
    }

    #[test]
    fn test_completeness_check() {
        let date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        let max = DailyTemperature {
            date,
            fahrenheit: 68.0,
            kind: TemperatureKind::Max,
        };
        let min = DailyTemperature {
            date,
            fahrenheit: 50.0,
            kind: TemperatureKind::Min,
        };

        assert!(!temperature_is_complete(&[]));
        assert!(!temperature_is_complete(&[max.clone()]));
        assert!(!temperature_is_complete(&[min.clone()]));
        assert!(temperature_is_complete(&[max, min]));
    }
}
