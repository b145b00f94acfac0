//! Explicit numeric form-field parsing
//!
//! Distinguishes "absent or blank" (the caller applies its default) from
//! "present but invalid" (an error), instead of coercing both to a
//! fallback value.

use crate::error::{Error, Result};

/// Parse an optional numeric field
///
/// Returns `Ok(None)` for an empty or whitespace-only string and
/// `Ok(Some(value))` for a parseable number.
///
/// # Errors
///
/// [`Error::InvalidNumber`] when the field contains something that is not
/// a number.
pub fn parse_optional_f64(input: &str) -> Result<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| Error::InvalidNumber(input.to_string()))
}

/// Parse a row of weight input fields
///
/// Blank fields come back as `None` so the weight-and-balance state keeps
/// its defaults for them. Fails fast on the first invalid field.
pub fn parse_weight_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Option<f64>>> {
    inputs
        .iter()
        .map(|s| parse_optional_f64(s.as_ref()))
        .collect()
}
