pub mod raw;
pub mod series;

pub use raw::RawRecord;
pub use series::{
    DailyHumidity, DailyPrecipitation, DailyTemperature, SeriesSource, TemperatureKind, YearSeries,
};
