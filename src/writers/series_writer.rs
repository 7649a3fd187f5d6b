use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ProcessingError, Result};
use crate::models::YearSeries;
use crate::utils::filename::{
    humidity_series_path, precipitation_series_path, processed_dir, temperature_series_path,
};

/// Writes the three series files for a year under `{data_dir}/processed/`.
///
/// Every file is a full rewrite through a same-directory temp file renamed
/// into place, so a fallback transition can never leave stale lines from an
/// earlier run behind.
pub struct SeriesWriter {
    data_dir: PathBuf,
}

impl SeriesWriter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Write all three files, returning their paths in temperature,
    /// precipitation, humidity order.
    pub fn write_year(&self, series: &YearSeries) -> Result<Vec<PathBuf>> {
        if series.temperature.is_empty() {
            return Err(ProcessingError::EmptySeries {
                series: "temperature",
            });
        }
        if series.precipitation.is_empty() {
            return Err(ProcessingError::EmptySeries {
                series: "precipitation",
            });
        }
        if series.humidity.is_empty() {
            return Err(ProcessingError::EmptySeries { series: "humidity" });
        }

        series.validate_records()?;

        fs::create_dir_all(processed_dir(&self.data_dir))?;

        let temperature_path = temperature_series_path(&self.data_dir, series.year);
        write_atomic(&temperature_path, &render_temperature(series))?;

        let precipitation_path = precipitation_series_path(&self.data_dir, series.year);
        write_atomic(&precipitation_path, &render_precipitation(series))?;

        let humidity_path = humidity_series_path(&self.data_dir, series.year);
        write_atomic(&humidity_path, &render_humidity(series))?;

        Ok(vec![temperature_path, precipitation_path, humidity_path])
    }
}

fn render_temperature(series: &YearSeries) -> String {
    let mut out = String::new();
    for record in &series.temperature {
        out.push_str(&format!(
            "{},{:.1},{}\n",
            record.date.format("%Y-%m-%d"),
            record.fahrenheit,
            record.kind.label()
        ));
    }
    out
}

fn render_precipitation(series: &YearSeries) -> String {
    let mut out = String::new();
    for record in &series.precipitation {
        out.push_str(&format!(
            "{},{:.2}\n",
            record.date.format("%Y-%m-%d"),
            record.inches
        ));
    }
    out
}

fn render_humidity(series: &YearSeries) -> String {
    let mut out = String::new();
    for record in &series.humidity {
        out.push_str(&format!(
            "{},{}\n",
            record.date.format("%Y-%m-%d"),
            record.percent
        ));
    }
    out
}

/// Replace `path` with `contents` via a temp file in the same directory.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| ProcessingError::Io(e.error))?;
    Ok(())
}
