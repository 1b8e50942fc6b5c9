//! Dictionary of date-field hints.
//!
//! Maps the normalized text of a single token to what it can contribute to a
//! date: a year, a month, a day, any combination, or nothing at all (pure
//! separators such as `,` or a couple of blanks).
//!
//! ## Merging
//!
//! Tables are layered: the numeric table derived from the configured date
//! range comes first, locale tables are loaded on top. Adding a hint for a
//! token that already has an entry only fills the fields that are still
//! absent, so `"9"` can be both month 9 and day 9 while a later locale that
//! also maps `"9"` to a month cannot overwrite it.
//!
//! ## Invariants
//!
//! - Keys are lowercased and tokenize to exactly one token.
//! - Field values are never zero.

use super::tokenizer::tokenize;
use crate::error::{Error, Result};
use crate::locales;
use std::collections::HashMap;
use tracing::debug;

bitflags::bitflags! {
    /// Date fields carried by an entry or filled in a candidate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fields: u8 {
        const YEAR  = 1 << 0;
        const MONTH = 1 << 1;
        const DAY   = 1 << 2;
    }
}

impl Fields {
    pub(crate) fn from_options<Y, M, D>(year: &Option<Y>, month: &Option<M>, day: &Option<D>) -> Self {
        let mut fields = Fields::empty();
        if year.is_some() {
            fields |= Fields::YEAR;
        }
        if month.is_some() {
            fields |= Fields::MONTH;
        }
        if day.is_some() {
            fields |= Fields::DAY;
        }
        fields
    }
}

/// What a token can contribute to a date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    /// Canonical (lowercased) token text.
    pub token: String,
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl DictionaryEntry {
    pub fn fields(&self) -> Fields {
        Fields::from_options(&self.year, &self.month, &self.day)
    }

    /// True for separators: the token is recognized but carries no field.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Fill the fields that are still absent; present fields are kept.
    fn merge(&mut self, year: Option<u16>, month: Option<u8>, day: Option<u8>) {
        fill(&mut self.year, year);
        fill(&mut self.month, month);
        fill(&mut self.day, day);
    }
}

fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

/// Token text → [`DictionaryEntry`] lookup table.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default table for years `min_year..=max_year`:
    ///
    /// ```text
    /// , . / \ -         -> separators
    /// " " "  " "   "     -> separators
    /// 2017 17            -> year 2017
    /// 1..12  01..09      -> month
    /// 1..31  01..09      -> day
    /// ```
    ///
    /// Two-digit years resolve to the earliest year of the window that ends
    /// with those digits.
    pub fn for_range(min_year: u16, max_year: u16) -> Result<Self> {
        let mut dictionary = Self::new();

        for token in [",", ".", "/", "\\", "-"] {
            dictionary.insert(token, None, None, None)?;
        }
        for width in 1..=3 {
            dictionary.insert(&" ".repeat(width), None, None, None)?;
        }

        for year in min_year..=max_year {
            dictionary.insert(&year.to_string(), Some(year), None, None)?;
            dictionary.insert(&format!("{:02}", year % 100), Some(year), None, None)?;
        }
        for month in 1..=12u8 {
            dictionary.insert(&month.to_string(), None, Some(month), None)?;
            if month < 10 {
                dictionary.insert(&format!("0{month}"), None, Some(month), None)?;
            }
        }
        for day in 1..=31u8 {
            dictionary.insert(&day.to_string(), None, None, Some(day))?;
            if day < 10 {
                dictionary.insert(&format!("0{day}"), None, None, Some(day))?;
            }
        }

        debug!(min_year, max_year, entries = dictionary.len(), "built numeric dictionary");
        Ok(dictionary)
    }

    /// Add hints for `token`, merging with any existing entry.
    ///
    /// Fails if `token` is not exactly one token, since it could then never
    /// be looked up.
    pub fn insert(&mut self, token: &str, year: Option<u16>, month: Option<u8>, day: Option<u8>) -> Result<()> {
        let count = tokenize(token).count();
        if count != 1 {
            return Err(Error::MultiTokenEntry { token: token.to_string(), count });
        }

        let key = token.to_lowercase();
        self.entries
            .entry(key)
            .or_insert_with_key(|key| DictionaryEntry { token: key.clone(), year: None, month: None, day: None })
            .merge(year, month, day);
        Ok(())
    }

    /// Load a locale table from `source`, returning the number of rows read.
    ///
    /// Each non-comment line holds four whitespace-separated columns,
    /// `token year month day`, with `-` for an absent field:
    ///
    /// ```text
    /// # month names
    /// october  -  10  -
    /// th       -  -   -
    /// ```
    pub fn load(&mut self, locale: &str, source: &str) -> Result<usize> {
        let mut rows = 0;
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_number = idx + 1;
            let columns: Vec<&str> = line.split_whitespace().collect();
            let &[token, year, month, day] = columns.as_slice() else {
                return Err(Error::MalformedEntry {
                    locale: locale.to_string(),
                    line_number,
                    line: line.to_string(),
                    columns: columns.len(),
                });
            };

            let column = |field: &'static str, value: &str| Error::InvalidValue {
                locale: locale.to_string(),
                line_number,
                field,
                value: value.to_string(),
            };
            let year = parse_column::<u16>(year).ok_or_else(|| column("year", year))?;
            let month = parse_column::<u8>(month).ok_or_else(|| column("month", month))?;
            let day = parse_column::<u8>(day).ok_or_else(|| column("day", day))?;

            self.insert(token, year, month, day)?;
            rows += 1;
        }

        debug!(locale, rows, entries = self.len(), "loaded dictionary");
        Ok(rows)
    }

    /// Load one of the embedded locale tables (see [`available_locales`]).
    ///
    /// [`available_locales`]: crate::available_locales
    pub fn load_builtin(&mut self, locale: &str) -> Result<usize> {
        let source = locales::source(locale).ok_or_else(|| Error::UnknownLocale(locale.to_string()))?;
        self.load(locale, source)
    }

    /// Look up an already normalized token.
    pub fn get(&self, token: &str) -> Option<&DictionaryEntry> {
        self.entries.get(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.values()
    }
}

/// `-` → `Some(None)`, a positive number → `Some(Some(n))`, anything else
/// → `None`.
fn parse_column<T>(value: &str) -> Option<Option<T>>
where
    T: std::str::FromStr + Default + PartialEq,
{
    if value == "-" {
        return Some(None);
    }
    value.parse::<T>().ok().filter(|n| *n != T::default()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(dictionary: &Dictionary, token: &str) -> (Option<u16>, Option<u8>, Option<u8>) {
        let entry = dictionary.get(token).unwrap();
        (entry.year, entry.month, entry.day)
    }

    #[test]
    fn numeric_table_overlaps_fields() {
        let dictionary = Dictionary::for_range(1950, 2049).unwrap();

        assert_eq!(hints(&dictionary, "2017"), (Some(2017), None, None));
        assert_eq!(hints(&dictionary, "17"), (Some(2017), None, Some(17)));
        assert_eq!(hints(&dictionary, "9"), (None, Some(9), Some(9)));
        assert_eq!(hints(&dictionary, "09"), (Some(2009), Some(9), Some(9)));
        assert_eq!(hints(&dictionary, "12"), (Some(2012), Some(12), Some(12)));
        assert_eq!(hints(&dictionary, "31"), (Some(2031), None, Some(31)));
        assert_eq!(hints(&dictionary, "50"), (Some(1950), None, None));
        assert!(dictionary.get("32").is_some());
        assert!(dictionary.get("1949").is_none());
        assert!(dictionary.get("2050").is_none());
    }

    #[test]
    fn separators_are_empty_entries() {
        let dictionary = Dictionary::for_range(1950, 2049).unwrap();
        for token in [",", ".", "/", "\\", "-", " ", "  ", "   "] {
            assert!(dictionary.get(token).unwrap().is_empty(), "{token:?}");
        }
        assert!(dictionary.get("    ").is_none());
    }

    #[test]
    fn two_digit_years_take_the_earliest_year_in_the_window() {
        let dictionary = Dictionary::for_range(1900, 2099).unwrap();
        assert_eq!(dictionary.get("03").unwrap().year, Some(1903));
        assert_eq!(dictionary.get("2003").unwrap().year, Some(2003));
    }

    #[test]
    fn first_writer_wins_per_field() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("Mar", None, Some(3), None).unwrap();
        dictionary.insert("mar", None, Some(5), Some(2)).unwrap();

        let entry = dictionary.get("mar").unwrap();
        assert_eq!(entry.token, "mar");
        assert_eq!((entry.year, entry.month, entry.day), (None, Some(3), Some(2)));
        assert_eq!(entry.fields(), Fields::MONTH | Fields::DAY);
    }

    #[test]
    fn rejects_multi_token_entries() {
        let mut dictionary = Dictionary::new();
        assert_eq!(
            dictionary.insert("9th", None, None, Some(9)),
            Err(Error::MultiTokenEntry { token: "9th".to_string(), count: 2 })
        );
        assert!(matches!(dictionary.insert("", None, None, None), Err(Error::MultiTokenEntry { count: 0, .. })));
        assert!(dictionary.insert(" - ", None, None, None).is_ok());
    }

    #[test]
    fn loads_locale_rows() {
        let source = "# comment\n\noctober - 10 -\n  th - - -  \nsylvester - 12 31\n";
        let mut dictionary = Dictionary::new();

        assert_eq!(dictionary.load("test", source), Ok(3));
        assert_eq!(hints(&dictionary, "october"), (None, Some(10), None));
        assert_eq!(hints(&dictionary, "sylvester"), (None, Some(12), Some(31)));
        assert!(dictionary.get("th").unwrap().is_empty());
    }

    #[test]
    fn malformed_rows_name_the_locale_and_line() {
        let mut dictionary = Dictionary::new();
        let err = dictionary.load("xx", "may - 5 -\njune 6\n").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedEntry { locale: "xx".to_string(), line_number: 2, line: "june 6".to_string(), columns: 2 }
        );
        assert!(err.to_string().contains("xx dictionary"));

        let err = dictionary.load("xx", "june - six -").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "month", line_number: 1, .. }));

        let err = dictionary.load("xx", "june - 0 -").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "month", .. }));
    }

    #[test]
    fn unknown_builtin_locale() {
        let mut dictionary = Dictionary::new();
        assert_eq!(dictionary.load_builtin("tlh"), Err(Error::UnknownLocale("tlh".to_string())));
    }

    #[test]
    fn builtin_locales_load() {
        for locale in crate::available_locales() {
            let mut dictionary = Dictionary::new();
            let rows = dictionary.load_builtin(locale).unwrap();
            assert!(rows > 12, "{locale}");
        }
    }
}
