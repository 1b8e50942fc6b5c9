//! Construction-time errors.
//!
//! Scanning text never fails; everything that can go wrong happens while a
//! [`Dictionary`](crate::Dictionary) or [`Parser`](crate::Parser) is being
//! built.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No embedded dictionary exists for the requested locale.
    #[error("unknown dictionary locale \"{0}\"")]
    UnknownLocale(String),

    /// A locale row does not have exactly four columns.
    #[error("invalid line {line_number} in {locale} dictionary: \"{line}\" (expected 4 columns, found {columns})")]
    MalformedEntry { locale: String, line_number: usize, line: String, columns: usize },

    /// A locale row has a column that is neither `-` nor a number in range.
    #[error("invalid {field} value \"{value}\" on line {line_number} of {locale} dictionary")]
    InvalidValue { locale: String, line_number: usize, field: &'static str, value: String },

    /// A dictionary token that the tokenizer splits into several tokens can
    /// never be looked up.
    #[error("the token \"{token}\" is made up of {count} sub-tokens")]
    MultiTokenEntry { token: String, count: usize },

    #[error("minimum date {min} is after maximum date {max}")]
    InvalidRange { min: NaiveDate, max: NaiveDate },
}
