//! Numeric precision functions for output formatting
//!
//! Statistics are computed at full precision and only rounded when placed
//! into an output record.

/// Number of decimal places shown for aggregated statistics
pub const DISPLAY_DECIMALS: usize = 3;

/// Round a statistic to [`DISPLAY_DECIMALS`] places for clean output
///
/// Rounds the exact decimal value of the double, ties to even, so 0.0045
/// (stored as 0.00449...) gives 0.004 and 0.0625 gives 0.062. Going through
/// the formatter instead of scaling by 1000 keeps large values finite.
pub fn round_stat(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", DISPLAY_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}
