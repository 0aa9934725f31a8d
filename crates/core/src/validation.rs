//! Client-side field validation helpers.
//!
//! Tower enforces its own limits server-side; these checks exist so that an
//! obviously bad value is rejected before a request is issued.

use crate::error::TowerError;

/// Whether `value` is at most `max_len` characters long.
///
/// Length is measured in Unicode scalar values, not bytes.
pub fn validate_max_length(value: &str, max_len: usize) -> bool {
    value.chars().count() <= max_len
}

/// Reject `value` with [`TowerError::InvalidValue`] if it exceeds `max_len`.
pub fn ensure_max_length(value: &str, max_len: usize) -> Result<(), TowerError> {
    if validate_max_length(value, max_len) {
        Ok(())
    } else {
        Err(TowerError::InvalidValue(format!(
            "{value} is invalid. Condition max_characters must be less or equal to {max_len}"
        )))
    }
}
