//! Classification, validation, and conversion engine for the Elbonian
//! numeral system.
//!
//! Elbonian is an additive/subtractive notation built from twelve
//! fixed-value symbols (`N n M D d C L l X V v I`). This crate takes a
//! single raw input string, decides whether it denotes a decimal integer
//! or an Elbonian numeral, rejects every malformed or out-of-range form
//! with a typed reason, and converts between the two notations.
//!
//! Validation happens once, up front; the resulting [`ValidatedNumber`]
//! is immutable and both conversions on it are total.
//!
//! # Example
//!
//! ```rust
//! use elbonian_core::validate;
//!
//! let number = validate("2120").unwrap();
//! assert_eq!(number.to_elbonian(), "MMCXX");
//!
//! let numeral = validate("MMCXX").unwrap();
//! assert_eq!(numeral.to_arabic(), 2120);
//! ```

pub mod classifier;
pub mod codec;
pub mod error;
pub mod grammar;
pub mod symbol;
pub mod types;

pub use classifier::validate;
pub use error::{NumberError, Result};
pub use symbol::{MAX_VALUE, MIN_VALUE, SYMBOL_TABLE};
pub use types::ValidatedNumber;
