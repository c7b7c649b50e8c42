//! Public API for Elbonian/Arabic numeral conversion
//!
//! This crate provides the stable external interface over the
//! `elbonian-core` engine: validate one input string, then read its
//! value back in either notation.

#![warn(missing_docs)]

pub mod dto;
pub mod error;

use elbonian_core::ValidatedNumber;
use std::fmt;
use std::str::FromStr;

// Re-export key types
pub use dto::Conversion;
pub use error::{ApiError, Result};
pub use elbonian_core::{NumberError, MAX_VALUE, MIN_VALUE};

/// A validated number accepted in either notation
///
/// Construction performs the full classification and validation pass;
/// afterwards both accessors are total and side-effect free. The value
/// never changes once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElbonianNumber {
    inner: ValidatedNumber,
}

impl ElbonianNumber {
    /// Validate a raw input string in either notation
    ///
    /// Leading and trailing whitespace is accepted and ignored; any
    /// other irregularity is reported as a typed error.
    pub fn new(raw: &str) -> Result<Self> {
        let inner = elbonian_core::validate(raw)?;
        Ok(Self { inner })
    }

    /// The value as a decimal integer in `1..=9999`
    pub fn to_arabic(&self) -> u16 {
        self.inner.to_arabic()
    }

    /// The value as an Elbonian numeral
    ///
    /// Numeral input is returned exactly as validated; decimal input
    /// yields the canonical numeral.
    pub fn to_elbonian(&self) -> String {
        self.inner.to_elbonian()
    }

    /// Both notations at once, as a serializable DTO
    pub fn to_conversion(&self, input: &str) -> Conversion {
        Conversion {
            input: input.trim().to_owned(),
            arabic: self.to_arabic(),
            elbonian: self.to_elbonian(),
        }
    }
}

impl FromStr for ElbonianNumber {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ElbonianNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_elbonian())
    }
}

// Convenience functions

/// Validate `raw` and return its value in both notations
pub fn convert(raw: &str) -> Result<Conversion> {
    let number = ElbonianNumber::new(raw)?;
    Ok(number.to_conversion(raw))
}

/// Validate `raw` and return its decimal value
pub fn to_arabic(raw: &str) -> Result<u16> {
    Ok(ElbonianNumber::new(raw)?.to_arabic())
}

/// Validate `raw` and return its Elbonian numeral form
pub fn to_elbonian(raw: &str) -> Result<String> {
    Ok(ElbonianNumber::new(raw)?.to_elbonian())
}
