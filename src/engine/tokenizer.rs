//! Tokenizer.
//!
//! Breaks text into consecutive [`Token`]s. A token is a maximal run of
//! characters of one [`TokenKind`], except that whitespace touching
//! punctuation is folded into a single `Other` token:
//!
//! ```text
//! "ready - - set... go! "
//!  ready| - - |set|... |go|!
//!  L    |O    |L  |O   |L |O
//! ```
//!
//! Folding lets a separator such as `" - "` be looked up as one dictionary
//! entry. The tokenizer knows nothing about dates.

use crate::{Token, TokenKind};
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

/// Lazily tokenize `input`.
///
/// Every call starts a fresh scan; the iterator holds no state shared with
/// other scans.
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens { chars: input.char_indices().peekable() }
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    chars: Peekable<CharIndices<'t>>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (start, first) = self.chars.next()?;
        let mut kind = TokenKind::of(first);
        let mut end = start + first.len_utf8();

        while let Some(&(idx, c)) = self.chars.peek() {
            let Some(joined) = kind.join(TokenKind::of(c)) else {
                break;
            };
            kind = joined;
            end = idx + c.len_utf8();
            self.chars.next();
        }

        Some(Token { start, end, kind })
    }
}

impl FusedIterator for Tokens<'_> {}
