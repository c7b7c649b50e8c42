//! Input classification and validation.
//!
//! [`validate`] decides whether a trimmed input denotes a decimal
//! integer or an Elbonian numeral and rejects everything else with a
//! typed reason. Checks run in strict precedence order; for decimal
//! literals the bounds check runs before the fractional-format check,
//! so an out-of-range fractional like `"-2.3"` reports `OutOfBounds`
//! rather than `Malformed`.

use crate::error::{NumberError, Result};
use crate::grammar;
use crate::symbol::{MAX_VALUE, MIN_VALUE};
use crate::types::ValidatedNumber;

/// Classify and validate a raw input string.
///
/// Leading and trailing whitespace is ignored; any interior whitespace
/// is rejected.
pub fn validate(raw: &str) -> Result<ValidatedNumber> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(NumberError::Malformed("empty input".into()));
    }
    if input.chars().any(char::is_whitespace) {
        return Err(NumberError::Malformed("embedded whitespace".into()));
    }

    if let Some(value) = parse_decimal_literal(input) {
        if value < f64::from(MIN_VALUE) || value > f64::from(MAX_VALUE) {
            return Err(NumberError::OutOfBounds(input.to_owned()));
        }
        if input.contains('.') {
            return Err(NumberError::Malformed("fractional value".into()));
        }
        // In range and integral, so the cast is exact; leading zeros
        // drop out here.
        return Ok(ValidatedNumber::Arabic(value as u16));
    }

    if let Some(bad) = input.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(NumberError::Malformed(format!("illegal character '{bad}'")));
    }
    let has_digit = input.chars().any(|c| c.is_ascii_digit());
    let has_letter = input.chars().any(|c| c.is_ascii_alphabetic());
    if has_digit && has_letter {
        return Err(NumberError::Malformed("mixed digits and letters".into()));
    }

    // All-digit strings always take the literal path above, so only
    // letter-only candidates reach the numeral checks.
    if let Some((subtractive, base)) = grammar::find_conflict(input) {
        return Err(NumberError::Malformed(format!(
            "symbols '{subtractive}' and '{base}' cannot appear in the same numeral"
        )));
    }
    if !grammar::matches_structure(input) {
        return Err(NumberError::Malformed("invalid numeral structure".into()));
    }
    Ok(ValidatedNumber::Elbonian(input.to_owned()))
}

/// Parse `s` as a signed decimal literal: optional leading `-`, digits,
/// at most one `.`, at least one digit. Returns the parsed value, or
/// `None` when `s` is not a literal (letters, exponents, stray signs).
fn parse_decimal_literal(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let mut seen_dot = false;
    let mut seen_digit = false;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }
    // Overlong digit runs saturate toward infinity and fail the bounds
    // check as out of range rather than malformed.
    s.parse().ok()
}
