pub mod constants;
pub mod filename;
pub mod progress;
pub mod units;

pub use constants::*;
pub use filename::{
    humidity_series_path, precipitation_series_path, raw_data_path, temperature_series_path,
};
pub use progress::ProgressReporter;
pub use units::{tenths_celsius_to_fahrenheit, tenths_mm_to_inches};
