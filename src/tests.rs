use crate::{Match, Options, Parser};
use std::collections::BTreeSet;

fn parser(month_before_day: bool) -> Parser {
    Parser::new(Options { month_before_day, ..Options::default() }).unwrap()
}

fn dates(parser: &Parser, text: &str) -> BTreeSet<String> {
    parser.parse(text).map(|m| m.date.format("%Y-%m-%d").to_string()).collect()
}

fn check(parser: &Parser, text: &str, expected: &[&str]) {
    let expected: BTreeSet<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(dates(parser, text), expected, "input: {text:?}");
}

#[test]
fn year_month_day() {
    for month_before_day in [true, false] {
        let p = parser(month_before_day);
        check(&p, "2017-07-01", &["2017-07-01"]);
        check(&p, "2017-12-01", &["2017-12-01"]);
        check(&p, "2017/7/1", &["2017-07-01"]);
    }
}

#[test]
fn day_month_year() {
    let p = parser(false);
    check(&p, "1/7/2017", &["2017-07-01"]);
    check(&p, "01/07/2017", &["2017-07-01"]);
    check(&p, "21/7/2017", &["2017-07-21"]);
    check(&p, "7/21/2017", &[]);
    check(&p, "01/02/03", &["2003-02-01", "2001-02-03"]);
    check(&p, "1.7.2017", &["2017-07-01"]);
    check(&p, "31-12-49", &["2049-12-31"]);
}

#[test]
fn month_day_year() {
    let p = parser(true);
    check(&p, "1/7/2017", &["2017-01-07"]);
    check(&p, "01/07/2017", &["2017-01-07"]);
    check(&p, "21/7/2017", &[]);
    check(&p, "7/21/2017", &["2017-07-21"]);
    check(&p, "01/02/03", &["2003-01-02", "2001-02-03"]);
}

#[test]
fn english() {
    for month_before_day in [true, false] {
        let p = parser(month_before_day);
        check(&p, "October 9, 2017", &["2017-10-09"]);
        check(&p, "October 9th, 2017", &["2017-10-09"]);
        check(&p, "Oct. 9, 2017", &["2017-10-09"]);
        check(&p, "2017 October 9", &["2017-10-09"]);
        check(&p, "OCTOBER 9 2017", &["2017-10-09"]);
    }

    let p = parser(false);
    check(&p, "9 October, 2017", &["2017-10-09"]);
    check(&p, "9th of October 2017", &["2017-10-09"]);
}

#[test]
fn bare_opening_number_follows_the_preference() {
    // "9" opening the sequence is read as a month, so "October" has nothing
    // left to fill.
    check(&parser(true), "9 October, 2017", &[]);
    check(&parser(true), "10 9, 2017", &["2017-10-09"]);
    check(&parser(false), "10 9, 2017", &["2017-09-10"]);
}

#[test]
fn hebrew() {
    let p = Parser::new(Options { dictionaries: vec!["en".into(), "he".into()], ..Options::default() }).unwrap();
    check(&p, "אוקטובר 9, 2017", &["2017-10-09"]);
    check(&p, "9 אוקטובר 2017", &["2017-10-09"]);
    check(&p, "ה-9 לאוקטובר, 2017", &["2017-10-09"]);
    check(&p, "ה-9 באוקטובר, 2017", &["2017-10-09"]);
    check(&p, "2017-אוק-09", &["2017-10-09"]);
    check(&p, "2017 אוקטובר 9", &["2017-10-09"]);
}

#[test]
fn other_locales() {
    let p = Parser::new(Options { dictionaries: vec!["es".into(), "fr".into(), "de".into()], ..Options::default() })
        .unwrap();
    check(&p, "9 de octubre de 2017", &["2017-10-09"]);
    check(&p, "1er août 2017", &["2017-08-01"]);
    check(&p, "9. Oktober 2017", &["2017-10-09"]);
    check(&p, "3 März 2017", &["2017-03-03"]);
}

#[test]
fn invalid_dates() {
    for month_before_day in [true, false] {
        let p = parser(month_before_day);
        for text in ["29/2/2017", "2/29/2017", "May 35, 1970", "20/30/40", "June 1985"] {
            check(&p, text, &[]);
        }
    }
}

#[test]
fn leap_days() {
    check(&parser(false), "29/2/2016", &["2016-02-29"]);
    check(&parser(true), "2/29/2016", &["2016-02-29"]);
    check(&parser(false), "February 29, 2016", &["2016-02-29"]);
    check(&parser(false), "February 29, 2017", &[]);
}

#[test]
fn out_of_range() {
    let p = parser(false);
    check(&p, "2049-12-31", &["2049-12-31"]);
    check(&p, "2050-01-01", &[]);
    check(&p, "1950-01-01", &["1950-01-01"]);
    check(&p, "1949-12-31", &[]);
}

#[test]
fn range_is_checked_by_date_not_year() {
    let options = Options {
        min_date: chrono::NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(),
        max_date: chrono::NaiveDate::from_ymd_opt(2017, 6, 30).unwrap(),
        ..Options::default()
    };
    let p = Parser::new(options).unwrap();
    check(&p, "June 15, 2017", &["2017-06-15"]);
    check(&p, "July 15, 2017", &[]);
    check(&p, "15/6/2017", &["2017-06-15"]);
    check(&p, "15/7/2017", &[]);
}

#[test]
fn text_without_dates() {
    let p = parser(false);
    for text in ["", "   ", "the temperature is 23 degrees, but it's a bit chilly.", "hello, world!", "10:30"] {
        check(&p, text, &[]);
    }
}

#[test]
fn several_dates_in_reading_order() {
    let p = parser(false);
    let found: Vec<Match> =
        p.parse("Signed 1/7/2017, amended on October 9th, 2017 and again 2018-03-04.").collect();
    let summary: Vec<(String, usize, &str)> =
        found.iter().map(|m| (m.date.to_string(), m.offset, m.text.as_str())).collect();

    assert_eq!(
        summary,
        vec![
            ("2017-07-01".to_string(), 7, "1/7/2017"),
            ("2017-10-09".to_string(), 28, "October 9th, 2017"),
            ("2018-03-04".to_string(), 56, "2018-03-04"),
        ]
    );
}

#[test]
fn ambiguous_matches_share_offset_and_text() {
    let p = parser(false);
    let found: Vec<Match> = p.parse("on 01/02/03").collect();

    assert_eq!(found.len(), 2);
    for m in &found {
        assert_eq!(m.offset, 3);
        assert_eq!(m.text, "01/02/03");
    }
}

#[test]
fn fresh_parsers_agree() {
    let text = "Dates: 01/02/03, October 9, 2017 and 2049-12-31.";
    let first: Vec<Match> = parser(false).parse(text).collect();
    let second: Vec<Match> = parser(false).parse(text).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}
