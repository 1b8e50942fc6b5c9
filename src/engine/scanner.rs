//! The scanning state machine.
//!
//! [`Matches`] walks the token stream once. Its state is either `Idle` or an
//! open [`Sequence`]: a run of recognized tokens whose hints are being
//! accumulated into candidates.
//!
//! ```text
//!               unknown token / separator
//!             ┌──────────────┐
//!             v              │
//!          ┌──────┐  hint  ┌─┴──────────┐  hint, separator
//!          │ Idle │ ─────> │ Open(seq)  │ ───────┐
//!          └──────┘        └────────────┘ <──────┘
//!             ^               │  │
//!             │  unknown      │  │ complete date, or three hints
//!             └───────────────┘  └──> emit matches, back to Idle
//! ```
//!
//! Unknown tokens bound a date expression: they close any open sequence.
//! Separators (recognized but empty entries) pass through an open sequence
//! and are ignored otherwise.
//!
//! All state lives in the iterator, so a [`Parser`] can run any number of
//! scans concurrently and a scan can be dropped half-way.

use super::candidate::{Candidate, extend};
use super::dictionary::DictionaryEntry;
use super::numeric;
use super::tokenizer::{Tokens, tokenize};
use crate::api::{Match, Parser};
use crate::{Token, TokenKind};
use chrono::NaiveDate;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::trace;

/// A date has three fields; a sequence with this many hints is done.
const MAX_HINTS: usize = 3;

/// An open run of recognized tokens.
#[derive(Debug, Clone)]
struct Sequence<'t> {
    /// Byte index of the first hint.
    start: usize,
    /// Character index of the first hint.
    offset: usize,
    /// Byte index just past the last token consumed.
    end: usize,
    candidates: Vec<Candidate>,
    /// Text of each hint token, in order.
    hints: Vec<&'t str>,
    all_digits: bool,
}

impl<'t> Sequence<'t> {
    fn open(token: &Token, offset: usize) -> Self {
        Sequence {
            start: token.start,
            offset,
            end: token.end,
            candidates: vec![Candidate::default()],
            hints: Vec::with_capacity(MAX_HINTS),
            all_digits: true,
        }
    }

    fn push(&mut self, token: &Token, text: &'t str, entry: &DictionaryEntry, month_before_day: bool) {
        self.candidates = extend(&self.candidates, entry, month_before_day);
        self.hints.push(text);
        self.all_digits &= token.kind == TokenKind::Digits;
        self.end = token.end;
    }

    fn is_full(&self) -> bool {
        self.hints.len() >= MAX_HINTS
    }
}

#[derive(Debug, Clone, Default)]
enum ScanState<'t> {
    #[default]
    Idle,
    Open(Sequence<'t>),
}

/// Lazy iterator over the dates found in one text; see [`Parser::parse`].
#[derive(Debug)]
pub struct Matches<'p, 't> {
    parser: &'p Parser,
    input: &'t str,
    tokens: Tokens<'t>,
    state: ScanState<'t>,
    /// Character index of the next token.
    position: usize,
    pending: VecDeque<Match>,
    finished: bool,
}

impl<'p, 't> Matches<'p, 't> {
    pub(crate) fn new(parser: &'p Parser, input: &'t str) -> Self {
        Matches {
            parser,
            input,
            tokens: tokenize(input),
            state: ScanState::Idle,
            position: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Advance the state machine by one token.
    fn feed(&mut self, token: Token) {
        let parser = self.parser;
        let text = token.text(self.input);
        let offset = self.position;
        self.position += text.chars().count();

        let entry = parser.dictionary.get(&normalize(text, token.kind));

        self.state = match (std::mem::take(&mut self.state), entry) {
            (state, None) => {
                self.close(state);
                ScanState::Idle
            }
            (ScanState::Idle, Some(entry)) if entry.is_empty() => ScanState::Idle,
            (ScanState::Open(mut seq), Some(entry)) if entry.is_empty() => {
                seq.end = token.end;
                ScanState::Open(seq)
            }
            (state, Some(entry)) => {
                let mut seq = match state {
                    ScanState::Open(seq) => seq,
                    ScanState::Idle => {
                        trace!(offset, token = text, "sequence opened");
                        Sequence::open(&token, offset)
                    }
                };
                seq.push(&token, text, entry, parser.options.month_before_day);

                let found = self.resolve(&seq);
                if found.is_empty() && !seq.is_full() {
                    ScanState::Open(seq)
                } else {
                    self.emit(&seq, found);
                    ScanState::Idle
                }
            }
        };
    }

    /// Run the final emission check on `state` if it holds a sequence.
    fn close(&mut self, state: ScanState<'t>) {
        if let ScanState::Open(seq) = state {
            let found = self.resolve(&seq);
            self.emit(&seq, found);
        }
    }

    /// Dates the sequence resolves to right now, deduplicated and in range.
    fn resolve(&self, seq: &Sequence<'t>) -> Vec<NaiveDate> {
        let options = &self.parser.options;
        let dates = if seq.is_full() && seq.all_digits {
            numeric::resolve(&seq.hints, options.month_before_day, &self.parser.dictionary)
        } else {
            seq.candidates.iter().filter_map(|c| c.to_date()).collect()
        };

        let mut found: Vec<NaiveDate> = Vec::with_capacity(dates.len());
        for date in dates {
            if (options.min_date..=options.max_date).contains(&date) && !found.contains(&date) {
                found.push(date);
            }
        }
        found
    }

    fn emit(&mut self, seq: &Sequence<'t>, dates: Vec<NaiveDate>) {
        let text = &self.input[seq.start..seq.end];
        trace!(offset = seq.offset, text, hints = seq.hints.len(), found = dates.len(), "sequence closed");

        self.pending.extend(dates.into_iter().map(|date| Match { date, offset: seq.offset, text: text.to_string() }));
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                return Some(found);
            }
            if self.finished {
                return None;
            }
            match self.tokens.next() {
                Some(token) => self.feed(token),
                None => {
                    self.finished = true;
                    let state = std::mem::take(&mut self.state);
                    self.close(state);
                }
            }
        }
    }
}

impl FusedIterator for Matches<'_, '_> {}

/// Dictionary key for a token:
///
/// ```text
/// Digits      unchanged            "07"       -> "07"
/// Letters     lowercased           "October"  -> "october"
/// Whitespace  one blank per char   "\t\n"     -> "  "
/// Other       trimmed              ", "       -> ","
/// ```
pub(crate) fn normalize(text: &str, kind: TokenKind) -> Cow<'_, str> {
    match kind {
        TokenKind::Digits => Cow::Borrowed(text),
        TokenKind::Letters => Cow::Owned(text.to_lowercase()),
        TokenKind::Whitespace => Cow::Owned(" ".repeat(text.chars().count())),
        TokenKind::Other => Cow::Borrowed(text.trim()),
    }
}
