use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{ProcessingError, Result};
use crate::models::RawRecord;
use crate::utils::constants::{
    COL_DATE, COL_PRCP, COL_SNOW, COL_SNWD, COL_STATION, COL_TMAX, COL_TMIN, MIN_RAW_COLUMNS,
    MISSING_SENTINEL,
};

/// Reads a raw GHCN-Daily station file into typed records.
///
/// Rows that do not look like station-day data (the header row, truncated
/// lines) are skipped rather than treated as fatal. Unparsable numeric fields
/// become missing values, never zero.
pub struct RecordReader;

impl RecordReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_records(&self, path: &Path) -> Result<Vec<RawRecord>> {
        if !path.exists() {
            return Err(ProcessingError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut records = Vec::new();
        for row_result in reader.records() {
            let row = row_result?;
            if let Some(record) = self.parse_row(&row) {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Parse one CSV row; `None` for header or malformed rows.
    fn parse_row(&self, row: &StringRecord) -> Option<RawRecord> {
        if row.len() < MIN_RAW_COLUMNS {
            return None;
        }

        let station_id = row.get(COL_STATION)?.trim();
        if station_id.is_empty() {
            return None;
        }

        // The header row fails the date parse and drops out here.
        let date = parse_date(row.get(COL_DATE)?)?;

        Some(RawRecord {
            station_id: station_id.to_string(),
            date,
            tmax_tenths: parse_numeric_field(row.get(COL_TMAX)),
            tmin_tenths: parse_numeric_field(row.get(COL_TMIN)),
            prcp_tenths: parse_precipitation_field(row.get(COL_PRCP)),
            snow_mm: parse_numeric_field(row.get(COL_SNOW)),
            snow_depth_mm: parse_numeric_field(row.get(COL_SNWD)),
        })
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Dates arrive as 8-digit `YYYYMMDD`; NOAA's access endpoint serves the same
/// column dashed, so both are accepted.
fn parse_date(field: &str) -> Option<NaiveDate> {
    let value = field.trim();
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// Tenths-encoded integer field: empty, sentinel, or unparsable means missing.
fn parse_numeric_field(field: Option<&str>) -> Option<i32> {
    let value = field?.trim();
    if value.is_empty() {
        return None;
    }
    let parsed = value.parse::<i32>().ok()?;
    (parsed != MISSING_SENTINEL).then_some(parsed)
}

/// Precipitation field: trace markers annotate the value with non-numeric
/// characters, so everything but digits is stripped before parsing.
fn parse_precipitation_field(field: Option<&str>) -> Option<i32> {
    let value = field?.trim();
    if value.is_empty() || value == "-9999" {
        return None;
    }
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i32>().ok()
}
