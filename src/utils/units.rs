//! Unit conversions for raw GHCN tenths-encoded values.

pub const MM_PER_INCH: f64 = 25.4;

/// GHCN stores temperatures as integer tenths of a degree Celsius.
pub fn tenths_celsius_to_fahrenheit(tenths: i32) -> f64 {
    tenths as f64 / 10.0 * 9.0 / 5.0 + 32.0
}

/// GHCN stores precipitation as integer tenths of a millimetre.
pub fn tenths_mm_to_inches(tenths: i32) -> f64 {
    tenths as f64 / 10.0 / MM_PER_INCH
}
