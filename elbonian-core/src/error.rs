//! Validation error taxonomy.

use thiserror::Error;

/// Errors produced while classifying and validating an input string.
///
/// Exactly two kinds exist: syntactic failures in either notation
/// (`Malformed`) and syntactically valid decimals whose magnitude falls
/// outside `1..=9999` (`OutOfBounds`). Once validation succeeds,
/// conversions cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Input is not well formed in either notation.
    #[error("malformed number: {0}")]
    Malformed(String),

    /// Input is a decimal number outside the representable range.
    #[error("value out of bounds: {0} is not in 1..=9999")]
    OutOfBounds(String),
}

/// Result type for validation.
pub type Result<T> = core::result::Result<T, NumberError>;
