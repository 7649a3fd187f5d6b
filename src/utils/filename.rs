use std::path::{Path, PathBuf};

use crate::utils::constants::{
    HUMIDITY_FILE_PREFIX, PRECIPITATION_FILE_PREFIX, PROCESSED_DATA_DIR, RAW_DATA_DIR,
    TEMPERATURE_FILE_PREFIX,
};

/// Path of the raw station file for a year: {data_dir}/raw/{station}_{year}.csv
pub fn raw_data_path(data_dir: &Path, station_id: &str, year: i32) -> PathBuf {
    data_dir
        .join(RAW_DATA_DIR)
        .join(format!("{}_{}.csv", station_id, year))
}

/// Directory holding the processed series files
pub fn processed_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(PROCESSED_DATA_DIR)
}

pub fn temperature_series_path(data_dir: &Path, year: i32) -> PathBuf {
    processed_dir(data_dir).join(format!("{}_{}.txt", TEMPERATURE_FILE_PREFIX, year))
}

pub fn precipitation_series_path(data_dir: &Path, year: i32) -> PathBuf {
    processed_dir(data_dir).join(format!("{}_{}.txt", PRECIPITATION_FILE_PREFIX, year))
}

pub fn humidity_series_path(data_dir: &Path, year: i32) -> PathBuf {
    processed_dir(data_dir).join(format!("{}_{}.txt", HUMIDITY_FILE_PREFIX, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_data_path() {
        let path = raw_data_path(Path::new("data"), "USW00094728", 1980);
        assert_eq!(path, PathBuf::from("data/raw/USW00094728_1980.csv"));
    }

    #[test]
    fn test_series_paths_are_year_scoped() {
        let dir = Path::new("data");
        assert_eq!(
            temperature_series_path(dir, 1980),
            PathBuf::from("data/processed/temperatures_1980.txt")
        );
        assert_eq!(
            precipitation_series_path(dir, 1980),
            PathBuf::from("data/processed/precipitation_1980.txt")
        );
        assert_eq!(
            humidity_series_path(dir, 2000),
            PathBuf::from("data/processed/humidity_2000.txt")
        );
    }
}
