//! Candidate dates and the extension rule.
//!
//! While a sequence is open the scanner keeps a set of candidates: partially
//! filled `(year, month, day)` triples. Each recognized token turns the
//! current set into the next one through [`extend`]. Several live candidates
//! mean the input is still ambiguous.
//!
//! ```text
//! "9 October, 2017" (day before month)
//!
//! "9"        [(-, -, -)]          -> [(-, -, 9)]      bare month/day, day wins
//! "october"  [(-, -, 9)]          -> [(-, 10, 9)]
//! "2017"     [(-, 10, 9)]         -> [(2017, 10, 9)]  complete
//! ```

use super::dictionary::{DictionaryEntry, Fields};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct Candidate {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl Candidate {
    pub fn fields(&self) -> Fields {
        Fields::from_options(&self.year, &self.month, &self.day)
    }

    /// The calendar date this candidate spells, if it is complete and valid.
    pub fn to_date(self) -> Option<NaiveDate> {
        let (year, month, day) = (self.year?, self.month?, self.day?);
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
    }
}

/// Apply `entry` to every candidate and return the next candidate set.
///
/// Rules, in order:
///
/// 1. A year fills candidates that have no year.
/// 2. An entry that is both a month and a day, arriving while the set is
///    still the single empty candidate, fills only the month
///    (`month_before_day`) or only the day. Rules 3 and 4 are skipped.
/// 3. A month fills candidates that have no month.
/// 4. A day fills candidates that have no day, except those that have a year
///    but no month yet.
///
/// Each rule derives its offspring from the input set, not from the
/// offspring of earlier rules. When no offspring exist the input set is
/// returned unchanged.
pub(crate) fn extend(candidates: &[Candidate], entry: &DictionaryEntry, month_before_day: bool) -> Vec<Candidate> {
    let mut next = Vec::with_capacity(candidates.len() * 2);

    if let Some(year) = entry.year {
        next.extend(candidates.iter().filter(|c| c.year.is_none()).map(|c| Candidate { year: Some(year), ..*c }));
    }

    let opening = matches!(candidates, [only] if only.fields().is_empty());
    match (entry.month, entry.day) {
        (Some(month), Some(day)) if opening => {
            let resolved = if month_before_day {
                Candidate { month: Some(month), ..Candidate::default() }
            } else {
                Candidate { day: Some(day), ..Candidate::default() }
            };
            next.push(resolved);
        }
        (month, day) => {
            if let Some(month) = month {
                next.extend(
                    candidates.iter().filter(|c| c.month.is_none()).map(|c| Candidate { month: Some(month), ..*c }),
                );
            }
            if let Some(day) = day {
                next.extend(
                    candidates
                        .iter()
                        .filter(|c| c.day.is_none() && !(c.year.is_some() && c.month.is_none()))
                        .map(|c| Candidate { day: Some(day), ..*c }),
                );
            }
        }
    }

    if next.is_empty() { candidates.to_vec() } else { next }
}
