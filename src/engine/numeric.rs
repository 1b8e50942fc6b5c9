//! Numeric layouts for all-digit sequences.
//!
//! A sequence of three digit runs ("01/02/03", "2017-07-01", "1.7.2017") is
//! joined with `/` and tried against a fixed list of layouts. Every layout
//! that yields a calendar date is kept, which is how "01/02/03" ends up with
//! both 2003-02-01 and 2001-02-03.
//!
//! ```text
//! day before month:    Y/m/d  y/m/d  d/m/Y  d/m/y
//! month before day:    Y/m/d  y/m/d  m/d/Y  m/d/y
//!
//! Y = four digits   y = two digits   m, d = one or two digits
//! ```
//!
//! Two-digit years are looked up in the dictionary's year table so they
//! resolve to the same century window as everywhere else.

use super::dictionary::Dictionary;
use chrono::NaiveDate;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    YearMonthDay,
    ShortYearMonthDay,
    DayMonthYear,
    DayMonthShortYear,
    MonthDayYear,
    MonthDayShortYear,
}

static DAY_FIRST: [Layout; 4] =
    [Layout::YearMonthDay, Layout::ShortYearMonthDay, Layout::DayMonthYear, Layout::DayMonthShortYear];

static MONTH_FIRST: [Layout; 4] =
    [Layout::YearMonthDay, Layout::ShortYearMonthDay, Layout::MonthDayYear, Layout::MonthDayShortYear];

impl Layout {
    pub(crate) fn all(month_before_day: bool) -> &'static [Layout] {
        if month_before_day { &MONTH_FIRST } else { &DAY_FIRST }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Layout::YearMonthDay => regex!(r"^(?P<year>[0-9]{4})/(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})$"),
            Layout::ShortYearMonthDay => {
                regex!(r"^(?P<year>[0-9]{2})/(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})$")
            }
            Layout::DayMonthYear => regex!(r"^(?P<day>[0-9]{1,2})/(?P<month>[0-9]{1,2})/(?P<year>[0-9]{4})$"),
            Layout::DayMonthShortYear => {
                regex!(r"^(?P<day>[0-9]{1,2})/(?P<month>[0-9]{1,2})/(?P<year>[0-9]{2})$")
            }
            Layout::MonthDayYear => regex!(r"^(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})/(?P<year>[0-9]{4})$"),
            Layout::MonthDayShortYear => {
                regex!(r"^(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})/(?P<year>[0-9]{2})$")
            }
        }
    }

    fn short_year(self) -> bool {
        matches!(self, Layout::ShortYearMonthDay | Layout::DayMonthShortYear | Layout::MonthDayShortYear)
    }

    /// Read `text` with this layout. `None` if it does not fit the layout or
    /// is not a calendar date.
    pub(crate) fn apply(self, text: &str, dictionary: &Dictionary) -> Option<NaiveDate> {
        let caps = self.pattern().captures(text)?;
        let year = &caps["year"];
        let year = if self.short_year() { i32::from(dictionary.get(year)?.year?) } else { year.parse().ok()? };
        let month = caps["month"].parse().ok()?;
        let day = caps["day"].parse().ok()?;

        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Every date `parts` can spell under the configured layouts, in layout
/// order.
pub(crate) fn resolve(parts: &[&str], month_before_day: bool, dictionary: &Dictionary) -> Vec<NaiveDate> {
    let joined = parts.join("/");
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(2);
    for date in Layout::all(month_before_day).iter().filter_map(|layout| layout.apply(&joined, dictionary)) {
        if !dates.contains(&date) {
            dates.push(date);
        }
    }
    dates
}
