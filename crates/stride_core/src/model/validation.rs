//! Create-input validation errors.
//!
//! Validation runs in the service layer before the record store is called;
//! the store itself never rejects a create.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a create input is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    /// Required text field is empty after trimming.
    BlankField(&'static str),
    /// Numeric field is below its allowed minimum.
    BelowMinimum {
        field: &'static str,
        min: u32,
        actual: u32,
    },
}

impl Display for InputValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::BelowMinimum { field, min, actual } => {
                write!(f, "{field} must be >= {min}, got {actual}")
            }
        }
    }
}

impl Error for InputValidationError {}

pub(crate) fn require_non_blank(
    field: &'static str,
    value: &str,
) -> Result<(), InputValidationError> {
    if value.trim().is_empty() {
        return Err(InputValidationError::BlankField(field));
    }
    Ok(())
}

pub(crate) fn require_at_least(
    field: &'static str,
    min: u32,
    actual: u32,
) -> Result<(), InputValidationError> {
    if actual < min {
        return Err(InputValidationError::BelowMinimum { field, min, actual });
    }
    Ok(())
}
