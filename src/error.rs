//! Errors for the few fallible entry points of the picker.

use thiserror::Error;

/// Hex color strings that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color must have 3, 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
