//! Core error types (deterministic only)

use core::fmt;

/// Core codec errors (no I/O, no external failures)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Token does not start with a decimal integer
    NotNumeric,
    /// Integer is not a Unicode scalar or surrogate value (0..=0x10FFFF)
    InvalidCodePoint(i64),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::NotNumeric => write!(f, "token does not start with a decimal integer"),
            CoreError::InvalidCodePoint(value) => {
                write!(f, "{value} is not a valid code point")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
