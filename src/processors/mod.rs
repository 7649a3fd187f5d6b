pub mod extractor;
pub mod synthetic;

pub use extractor::SeriesExtractor;
pub use synthetic::{Season, SyntheticGenerator};
