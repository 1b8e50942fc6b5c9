//! Find calendar dates in free-form text.
//!
//! `datescan` tokenizes text into runs of digits, letters, whitespace and
//! punctuation, looks every run up in a dictionary of date-field hints (plain
//! numbers, month names, ordinal suffixes, separators) and accumulates the
//! hints into candidate dates. Ambiguous input is never guessed: every valid
//! interpretation is reported.
//!
//! ```
//! use datescan::{Options, Parser};
//! use chrono::NaiveDate;
//!
//! let parser = Parser::new(Options::default()).unwrap();
//! let found: Vec<_> = parser.parse("Released on October 9, 2017.").collect();
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].date, NaiveDate::from_ymd_opt(2017, 10, 9).unwrap());
//! assert_eq!(found[0].offset, 12);
//! assert_eq!(found[0].text, "October 9, 2017");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod locales;

#[cfg(test)]
mod tests;

pub use api::{DEFAULT_LOCALE, Match, Options, Parser, parse};
pub use engine::{Dictionary, DictionaryEntry, Fields, Matches, Tokens, tokenize};
pub use error::{Error, Result};
pub use locales::available_locales;

// --- Token types -------------------------------------------------------------

/// Character class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Digits,
    Letters,
    Whitespace,
    /// Punctuation and anything else, including whitespace that touches it.
    Other,
}

impl TokenKind {
    /// Classify a single character.
    pub fn of(c: char) -> Self {
        if c.is_numeric() {
            TokenKind::Digits
        } else if c.is_alphabetic() {
            TokenKind::Letters
        } else if matches!(c, ' ' | '\t' | '\r' | '\n') {
            TokenKind::Whitespace
        } else {
            TokenKind::Other
        }
    }

    /// The kind of a token that continues with a character of kind `next`,
    /// or `None` when the token has to end before it.
    ///
    /// ```text
    /// Digits + Digits         -> Digits
    /// Whitespace + Other      -> Other
    /// Other + Whitespace      -> Other
    /// Letters + Digits        -> None (split)
    /// ```
    pub(crate) fn join(self, next: TokenKind) -> Option<TokenKind> {
        match (self, next) {
            (a, b) if a == b => Some(a),
            (TokenKind::Whitespace, TokenKind::Other) | (TokenKind::Other, TokenKind::Whitespace) => {
                Some(TokenKind::Other)
            }
            _ => None,
        }
    }
}

/// A maximal run of same-class characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
    pub kind: TokenKind,
}

impl Token {
    /// Slice of `input` covered by this token.
    ///
    /// `input` must be the text the token was produced from.
    pub fn text<'t>(&self, input: &'t str) -> &'t str {
        &input[self.start..self.end]
    }
}
