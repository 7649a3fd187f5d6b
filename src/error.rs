use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Raw station file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Download failed for station {station}, year {year}: all source URLs exhausted")]
    DownloadFailed { station: String, year: i32 },

    #[error("{series} series is empty after synthetic fallback")]
    EmptySeries { series: &'static str },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
