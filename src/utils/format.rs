use log::{debug, warn};

use crate::utils::errors::UtilsError;

pub const MAX_FRACTION_DIGITS: usize = 5;

/// Fixed-point text with at most five fractional digits, trailing zeros
/// trimmed, `.` as separator and no digit grouping.
///
/// # Errors
///
/// Returns an error for infinite or NaN values, which have no numeral form.
pub fn format_number(value: f64) -> Result<String, UtilsError> {
    if !value.is_finite() {
        warn!("Cannot format non-finite value: {}", value);
        return Err(UtilsError::NonFinite(value));
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    let text = match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    };
    debug!("Formatted {} as '{}'", value, text);
    Ok(text)
}
