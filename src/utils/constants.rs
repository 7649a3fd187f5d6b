/// Target station: New York City, Central Park (GHCN-Daily identifier)
pub const DEFAULT_STATION_ID: &str = "USW00094728";

/// Default year to process
pub const DEFAULT_YEAR: i32 = 1980;

/// Download endpoints, tried in order. The first serves the full station
/// history; the second is the year-bounded data service.
pub const GHCN_ACCESS_URL: &str =
    "https://www.ncei.noaa.gov/data/global-historical-climatology-network-daily/access";
pub const NCEI_DATA_SERVICE_URL: &str = "https://www.ncei.noaa.gov/access/services/data/v1";

/// Fixed column positions in the raw daily-summaries CSV
pub const COL_STATION: usize = 0;
pub const COL_DATE: usize = 1;
pub const COL_TMAX: usize = 2;
pub const COL_TMIN: usize = 3;
pub const COL_PRCP: usize = 4;
pub const COL_SNOW: usize = 5;
pub const COL_SNWD: usize = 6;

/// Minimum number of columns for a row to be considered data
pub const MIN_RAW_COLUMNS: usize = 5;

/// Sentinel for missing numeric fields in raw records
pub const MISSING_SENTINEL: i32 = -9999;

/// Simplified calendar used for synthetic series: 12 months x 28 days
pub const SYNTHETIC_MONTHS: u32 = 12;
pub const SYNTHETIC_DAYS_PER_MONTH: u32 = 28;
pub const SYNTHETIC_DAYS_PER_YEAR: usize =
    (SYNTHETIC_MONTHS * SYNTHETIC_DAYS_PER_MONTH) as usize;

/// Seasonal synthetic temperature bands, degrees Fahrenheit (inclusive)
pub const SUMMER_TMAX_RANGE: (i32, i32) = (75, 94);
pub const SUMMER_TMIN_RANGE: (i32, i32) = (55, 69);
pub const WINTER_TMAX_RANGE: (i32, i32) = (30, 49);
pub const WINTER_TMIN_RANGE: (i32, i32) = (10, 34);
pub const SHOULDER_TMAX_RANGE: (i32, i32) = (55, 79);
pub const SHOULDER_TMIN_RANGE: (i32, i32) = (35, 54);

/// Seasonal synthetic humidity bands, percent (inclusive)
pub const SUMMER_HUMIDITY_RANGE: (u8, u8) = (60, 89);
pub const WINTER_HUMIDITY_RANGE: (u8, u8) = (40, 69);
pub const SHOULDER_HUMIDITY_RANGE: (u8, u8) = (50, 79);

/// Synthetic precipitation: uniform in [0, 0.5) inches, drawn as hundredths
pub const PRECIP_MAX_HUNDREDTHS: u32 = 50;

/// Directory names under the data directory
pub const RAW_DATA_DIR: &str = "raw";
pub const PROCESSED_DATA_DIR: &str = "processed";

/// Output file name prefixes (the renderer loads these by name)
pub const TEMPERATURE_FILE_PREFIX: &str = "temperatures";
pub const PRECIPITATION_FILE_PREFIX: &str = "precipitation";
pub const HUMIDITY_FILE_PREFIX: &str = "humidity";
