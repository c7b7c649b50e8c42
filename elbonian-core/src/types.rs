//! The validated number representation.

use crate::codec;

/// Outcome of successful validation: either a decimal integer in
/// `1..=9999` or an Elbonian numeral string confirmed well formed.
///
/// Immutable once constructed. Both conversions are total and
/// idempotent; results are recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedNumber {
    /// Input was a decimal integer.
    Arabic(u16),
    /// Input was a well-formed Elbonian numeral.
    Elbonian(String),
}

impl ValidatedNumber {
    /// The value in Arabic (decimal) form.
    pub fn to_arabic(&self) -> u16 {
        match self {
            ValidatedNumber::Arabic(value) => *value,
            ValidatedNumber::Elbonian(numeral) => codec::numeral_value(numeral),
        }
    }

    /// The value in Elbonian form.
    ///
    /// A numeral input is returned unchanged, without canonicalization;
    /// an integer input yields the canonical greedy numeral.
    pub fn to_elbonian(&self) -> String {
        match self {
            ValidatedNumber::Arabic(value) => codec::canonical_numeral(*value),
            ValidatedNumber::Elbonian(numeral) => numeral.clone(),
        }
    }
}
