//! Data Transfer Objects for API

/// A number expressed in both notations at once
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    /// The trimmed input as supplied by the caller
    pub input: String,
    /// Decimal value in `1..=9999`
    pub arabic: u16,
    /// Elbonian numeral form
    pub elbonian: String,
}

impl Conversion {
    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string(self).map_err(crate::error::ApiError::Serde)
    }
}
