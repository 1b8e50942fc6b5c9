use crate::engine::{Dictionary, Matches};
use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use tracing::debug;

/// Locale loaded when [`Options::dictionaries`] is left at its default.
pub const DEFAULT_LOCALE: &str = "en";

static DEFAULT_PARSER: Lazy<Parser> =
    Lazy::new(|| Parser::new(Options::default()).expect("embedded default dictionaries are valid"));

/// Options that affect dictionary construction and date resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Embedded locale tables to load on top of the numeric table.
    pub dictionaries: Vec<String>,
    /// Prefer month/day/year (American) over day/month/year when a bare
    /// number could be either.
    pub month_before_day: bool,
    /// Earliest date that is reported (inclusive).
    pub min_date: NaiveDate,
    /// Latest date that is reported (inclusive).
    pub max_date: NaiveDate,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dictionaries: vec![DEFAULT_LOCALE.to_string()],
            month_before_day: false,
            min_date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            max_date: NaiveDate::from_ymd_opt(2049, 12, 31).unwrap(),
        }
    }
}

/// A date found in text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    pub date: NaiveDate,
    /// Character (not byte) index of the match in the scanned text.
    pub offset: usize,
    /// Slice of the scanned text that spelled the date.
    pub text: String,
}

/// Date finder.
///
/// Building a parser loads its dictionaries; scanning is then read-only, so
/// one parser can be shared across threads and reused for any number of
/// texts.
///
/// ```
/// use datescan::{Options, Parser};
///
/// let parser = Parser::new(Options::default()).unwrap();
/// let mut dates: Vec<String> = parser.parse("01/02/03").map(|m| m.date.to_string()).collect();
/// dates.sort();
///
/// assert_eq!(dates, ["2001-02-03", "2003-02-01"]);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    pub(crate) options: Options,
    pub(crate) dictionary: Dictionary,
}

impl Parser {
    /// Build the numeric table for the configured range and load every
    /// locale listed in `options.dictionaries`.
    pub fn new(options: Options) -> Result<Self> {
        let (min_year, max_year) = year_window(&options)?;
        let mut dictionary = Dictionary::for_range(min_year, max_year)?;
        for locale in &options.dictionaries {
            dictionary.load_builtin(locale)?;
        }

        debug!(
            locales = ?options.dictionaries,
            month_before_day = options.month_before_day,
            min_date = %options.min_date,
            max_date = %options.max_date,
            entries = dictionary.len(),
            "parser ready"
        );
        Ok(Parser { options, dictionary })
    }

    /// Use a caller-built `dictionary` as is.
    ///
    /// `options.dictionaries` is ignored; the dictionary should normally
    /// start from [`Dictionary::for_range`] so plain numbers are recognized.
    pub fn with_dictionary(options: Options, dictionary: Dictionary) -> Result<Self> {
        year_window(&options)?;
        Ok(Parser { options, dictionary })
    }

    /// Lazily scan `text` for dates.
    ///
    /// Matches from different parts of the text come in reading order; the
    /// interpretations of one ambiguous date come together, in no particular
    /// order.
    pub fn parse<'p, 't>(&'p self, text: &'t str) -> Matches<'p, 't> {
        Matches::new(self, text)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

/// Scan `text` with the default [`Options`].
///
/// # Example
/// ```
/// let found = datescan::parse("Deadline: 2017-07-01.");
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].text, "2017-07-01");
/// ```
pub fn parse(text: &str) -> Vec<Match> {
    DEFAULT_PARSER.parse(text).collect()
}

fn year_window(options: &Options) -> Result<(u16, u16)> {
    let (min, max) = (options.min_date, options.max_date);
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    let year = |date: NaiveDate| u16::try_from(date.year()).map_err(|_| Error::InvalidRange { min, max });
    Ok((year(min)?, year(max)?))
}
