//! Validation of raw form text into the search core's input contract.
//!
//! Pure functions: text in, validated numbers or [`InputError`] out.

use crate::model::InputError;

/// Default upper bound on the number of elements a user may enter.
pub const DEFAULT_MAX_ELEMENTS: usize = 20;

/// Parse the element count field.
///
/// Accepts an integer in `1..=max`, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::InvalidCount`] for anything else, including
/// fractional input such as `"2.5"`.
pub fn parse_count(raw: &str, max: usize) -> Result<usize, InputError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| InputError::InvalidCount { max })
        .and_then(|count| check_count(count, max))
}

/// Check an element count that did not come from the form, such as values
/// given on the command line.
///
/// # Errors
///
/// Returns [`InputError::InvalidCount`] unless `count` is in `1..=max`.
pub fn check_count(count: usize, max: usize) -> Result<usize, InputError> {
    if (1..=max).contains(&count) {
        Ok(count)
    } else {
        Err(InputError::InvalidCount { max })
    }
}

/// Parse a single numeric field.
///
/// `field` identifies the element for error reporting; `None` is the target.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] for empty text, text that is not a
/// decimal number, and the non-finite spellings (`inf`, `NaN`).
pub fn parse_number(raw: &str, field: Option<usize>) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(InputError::NotANumber { field })
}

/// Parse every element field in order.
///
/// # Errors
///
/// Fails on the first field that is not a finite number, reporting its index.
pub fn parse_values<S: AsRef<str>>(fields: &[S]) -> Result<Vec<f64>, InputError> {
    fields
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_number(raw.as_ref(), Some(index)))
        .collect()
}
