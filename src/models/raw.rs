use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the raw GHCN-Daily station file.
///
/// Numeric fields keep the source's tenths encoding; a field absent from the
/// row is `None`, never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub station_id: String,
    pub date: NaiveDate,
    /// Maximum temperature, tenths of a degree Celsius
    pub tmax_tenths: Option<i32>,
    /// Minimum temperature, tenths of a degree Celsius
    pub tmin_tenths: Option<i32>,
    /// Precipitation, tenths of a millimetre
    pub prcp_tenths: Option<i32>,
    /// Snowfall, millimetres
    pub snow_mm: Option<i32>,
    /// Snow depth, millimetres
    pub snow_depth_mm: Option<i32>,
}

impl RawRecord {
    /// True when this row belongs to the given station and calendar year.
    pub fn matches(&self, station_id: &str, year: i32) -> bool {
        self.station_id == station_id && self.date.year() == year
    }

    pub fn has_temperature_data(&self) -> bool {
        self.tmax_tenths.is_some() || self.tmin_tenths.is_some()
    }

    pub fn has_precipitation(&self) -> bool {
        self.prcp_tenths.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(station: &str, date: (i32, u32, u32)) -> RawRecord {
        RawRecord {
            station_id: station.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            tmax_tenths: None,
            tmin_tenths: None,
            prcp_tenths: None,
            snow_mm: None,
            snow_depth_mm: None,
        }
    }

    #[test]
    fn test_matches_station_and_year() {
        let rec = record("USW00094728", (1980, 6, 15));

        assert!(rec.matches("USW00094728", 1980));
        assert!(!rec.matches("USW00094728", 1981));
        assert!(!rec.matches("USW00014732", 1980));
    }

    #[test]
    fn test_field_presence() {
        let mut rec = record("USW00094728", (1980, 1, 1));
        assert!(!rec.has_temperature_data());
        assert!(!rec.has_precipitation());

        rec.tmin_tenths = Some(-50);
        assert!(rec.has_temperature_data());

        rec.prcp_tenths = Some(0);
        assert!(rec.has_precipitation());
    }
}
