//! Scanning engine.
//!
//! The engine is split into small submodules under `src/engine/`; this file
//! only wires them together and re-exports the public pieces.
//!
//! ## How the parts work together
//!
//! ```text
//! locales (embedded) ──┐
//!                      │  Dictionary::for_range + load  (dictionary.rs)
//!                      └─────────────┬─────────────
//!                                    │
//! input ── tokenize ─────────────────┼─ normalize + look up each token
//!          (tokenizer.rs)            │
//!                                    v
//!                         Matches::feed (scanner.rs)
//!                           - Idle / Open(Sequence)
//!                           - extend candidates      (candidate.rs)
//!                           - all-digit sequences    (numeric.rs)
//!                                    │
//!                                    v
//!                            Iterator<Item = Match>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: character classification and the lazy token iterator.
//! - `dictionary.rs`: token text → date-field hints, with fill-if-absent
//!   merging and locale table loading.
//! - `candidate.rs`: partially resolved dates and the extension rule that
//!   turns one dictionary entry into the next candidate set.
//! - `numeric.rs`: fixed numeric layouts tried on sequences made only of
//!   digits.
//! - `scanner.rs`: the per-call state machine that opens, extends and closes
//!   sequences and yields matches.
//!
//! ## Debugging
//!
//! Every module logs through `tracing`. Dictionary loading logs at `debug`,
//! sequence transitions and emissions at `trace`.

#[path = "engine/candidate.rs"]
mod candidate;
#[path = "engine/dictionary.rs"]
mod dictionary;
#[path = "engine/numeric.rs"]
mod numeric;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub use dictionary::{Dictionary, DictionaryEntry, Fields};
pub use scanner::Matches;
pub use tokenizer::{Tokens, tokenize};
