//! Fuzzy date/time parsing.
//!
//! Dates are searched anywhere inside the value, so surrounding text such as
//! `"shipped on 2024-03-04"` is tolerated. Shapes are tried in a fixed
//! priority and a match must not be glued to further digits on either side.
//! There are no "today" defaults: a value without a full date fails.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

use super::text::collapse_whitespace;

/// Reading order for ambiguous numeric dates such as `03/04/2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    MonthFirst,
    DayFirst,
}

/// Content pattern used to decide whether an unforced column looks date-like.
static DATE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:[0-9]{4}[-/\.][0-9]{1,2}[-/\.][0-9]{1,2})|(?:[0-9]{1,2}[-/\.][0-9]{1,2}[-/\.][0-9]{2,4})|(?:[A-Za-z]{3,9}\s+[0-9]{1,2},\s*[0-9]{4})",
    )
    .expect("Invalid date-like regex")
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})").expect("Invalid iso date regex")
});

static MONTH_NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([a-z]{3,9})\.?\s+([0-9]{1,2})(?:st|nd|rd|th)?(?:,\s*|\s+)([0-9]{4})")
        .expect("Invalid month-name regex")
});

static DAY_MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2})(?:st|nd|rd|th)?\s+([a-z]{3,9})\.?(?:,\s*|\s+)([0-9]{4})")
        .expect("Invalid day-month-name regex")
});

static DAY_MONTH_DASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2})-([a-z]{3,9})-([0-9]{4}|[0-9]{2})").expect("Invalid dashed date regex")
});

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})[-/.]([0-9]{1,2})[-/.]([0-9]{4}|[0-9]{2})").expect("Invalid numeric date regex")
});

static COMPACT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})$").expect("Invalid compact date regex"));

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\s*(?:T|,|at)?\s*)([0-9]{1,2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,9}))?)?(?:\s*([ap])\.?m\.?)?",
    )
    .expect("Invalid time regex")
});

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// True when the text contains something shaped like a date.
pub fn looks_like_date(value: &str) -> bool {
    DATE_LIKE.is_match(value)
}

/// Parses a timestamp from free text using the given reading order.
///
/// Only ambiguous `A/B/Y` dates depend on the order; ISO and month-name
/// shapes read the same either way. A time of day directly after the date
/// is attached, otherwise the result is at midnight.
pub fn parse_timestamp(value: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let text = collapse_whitespace(value);
    if text.is_empty() {
        return None;
    }
    let (date, end) = find_date(&text, order)?;
    let time = parse_time_of_day(&text[end..]).unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}

/// Month-first attempt, then day-first.
pub fn parse_timestamp_fallback(value: &str) -> Option<NaiveDateTime> {
    parse_timestamp(value, DateOrder::MonthFirst)
        .or_else(|| parse_timestamp(value, DateOrder::DayFirst))
}

fn find_date(text: &str, order: DateOrder) -> Option<(NaiveDate, usize)> {
    first_bounded(&ISO_DATE, text, |caps| {
        ymd(number(caps, 1)?, number(caps, 2)?, number(caps, 3)?)
    })
    .or_else(|| {
        first_bounded(&MONTH_NAME_FIRST, text, |caps| {
            ymd(number(caps, 3)?, month_from_name(&caps[1])?, number(caps, 2)?)
        })
    })
    .or_else(|| {
        first_bounded(&DAY_MONTH_NAME, text, |caps| {
            ymd(number(caps, 3)?, month_from_name(&caps[2])?, number(caps, 1)?)
        })
    })
    .or_else(|| {
        first_bounded(&DAY_MONTH_DASHED, text, |caps| {
            ymd(year(&caps[3])?, month_from_name(&caps[2])?, number(caps, 1)?)
        })
    })
    .or_else(|| {
        first_bounded(&NUMERIC_DATE, text, |caps| {
            let (first, second) = (number(caps, 1)?, number(caps, 2)?);
            let (month, day) = match order {
                DateOrder::MonthFirst => (first, second),
                DateOrder::DayFirst => (second, first),
            };
            ymd(year(&caps[3])?, month, day)
        })
    })
    .or_else(|| {
        first_bounded(&COMPACT_DATE, text, |caps| {
            ymd(number(caps, 1)?, number(caps, 2)?, number(caps, 3)?)
        })
    })
}

/// First match that is not glued to surrounding digits and builds a valid
/// date. Returns the date and the byte offset just past the match.
fn first_bounded<'t>(
    pattern: &Regex,
    text: &'t str,
    build: impl Fn(&Captures<'t>) -> Option<NaiveDate>,
) -> Option<(NaiveDate, usize)> {
    pattern.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        if !digit_bounded(text, whole.start(), whole.end()) {
            return None;
        }
        build(&caps).map(|date| (date, whole.end()))
    })
}

fn digit_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|ch| ch.is_ascii_digit()) && !after.is_some_and(|ch| ch.is_ascii_digit())
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn ymd(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Two-digit years pivot: `00`-`68` are 20xx, `69`-`99` are 19xx.
fn year(text: &str) -> Option<u32> {
    let value: u32 = text.parse().ok()?;
    if text.len() == 2 {
        Some(if value <= 68 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}

/// Full month names and any prefix of at least three letters (`Mar`, `Sept`).
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|month| month.starts_with(&lower))
        .and_then(|idx| u32::try_from(idx + 1).ok())
}

fn parse_time_of_day(rest: &str) -> Option<NaiveTime> {
    let caps = TIME_OF_DAY.captures(rest)?;
    let mut hour = number(&caps, 1)?;
    let minute = number(&caps, 2)?;
    let second = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let nanos = caps.get(4).map_or(0, |m| fraction_nanos(m.as_str()));
    if let Some(meridiem) = caps.get(5) {
        if hour == 0 || hour > 12 {
            return None;
        }
        let pm = meridiem.as_str().eq_ignore_ascii_case("p");
        hour = match (pm, hour) {
            (false, 12) => 0,
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, h) => h,
        };
    }
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
}

fn fraction_nanos(digits: &str) -> u32 {
    let padded: String = digits.chars().chain(std::iter::repeat('0')).take(9).collect();
    padded.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_iso_dates() {
        let expected = date(2024, 3, 4);
        for value in ["2024-03-04", "2024/3/4", "2024.03.04", " 2024-03-04 "] {
            assert_eq!(parse_timestamp(value, DateOrder::MonthFirst), Some(expected));
        }
    }

    #[test]
    fn test_iso_with_time() {
        assert_eq!(
            parse_timestamp("2024-03-04T10:30:15", DateOrder::MonthFirst),
            Some(datetime(2024, 3, 4, 10, 30, 15))
        );
        assert_eq!(
            parse_timestamp("2024-03-04 2:05 PM", DateOrder::MonthFirst),
            Some(datetime(2024, 3, 4, 14, 5, 0))
        );
        assert_eq!(
            parse_timestamp("2024-03-04 12:00 am", DateOrder::MonthFirst),
            Some(date(2024, 3, 4))
        );
    }

    #[test]
    fn test_fractional_seconds() {
        let parsed = parse_timestamp("2024-03-04 10:30:15.25", DateOrder::MonthFirst).unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 3, 4)
                .unwrap()
                .and_hms_milli_opt(10, 30, 15, 250)
                .unwrap()
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_date_digits() {
        assert_eq!(
            parse_timestamp_fallback("2024-03-04 10:30:15.\u{661}\u{661}\u{661}\u{661}\u{661}"),
            Some(datetime(2024, 3, 4, 10, 30, 15))
        );
        assert_eq!(parse_timestamp_fallback("\u{662}\u{660}\u{662}\u{664}-03-04"), None);
        assert_eq!(fraction_nanos("5"), 500_000_000);
        assert_eq!(fraction_nanos("123456789"), 123_456_789);
    }

    #[test]
    fn test_ambiguous_numeric_order() {
        assert_eq!(
            parse_timestamp("03/04/2024", DateOrder::MonthFirst),
            Some(date(2024, 3, 4))
        );
        assert_eq!(
            parse_timestamp("03/04/2024", DateOrder::DayFirst),
            Some(date(2024, 4, 3))
        );
        assert_eq!(parse_timestamp("13/04/2024", DateOrder::MonthFirst), None);
        assert_eq!(
            parse_timestamp("13/04/2024", DateOrder::DayFirst),
            Some(date(2024, 4, 13))
        );
    }

    #[test]
    fn test_fallback_prefers_month_first() {
        assert_eq!(parse_timestamp_fallback("03/04/2024"), Some(date(2024, 3, 4)));
        assert_eq!(parse_timestamp_fallback("25.12.2023"), Some(date(2023, 12, 25)));
    }

    #[test]
    fn test_calendar_invalid_fails_both_orders() {
        assert_eq!(parse_timestamp_fallback("31/04/2024"), None);
        assert_eq!(parse_timestamp_fallback("2023-02-29"), None);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse_timestamp_fallback("March 4, 2024"), Some(date(2024, 3, 4)));
        assert_eq!(parse_timestamp_fallback("Mar 4th 2024"), Some(date(2024, 3, 4)));
        assert_eq!(parse_timestamp_fallback("4 Sept 2024"), Some(date(2024, 9, 4)));
        assert_eq!(parse_timestamp_fallback("04-Mar-24"), Some(date(2024, 3, 4)));
        assert_eq!(parse_timestamp_fallback("Monday 4, 2024"), None);
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_timestamp_fallback("1/2/68"), Some(date(2068, 1, 2)));
        assert_eq!(parse_timestamp_fallback("1/2/69"), Some(date(1969, 1, 2)));
    }

    #[test]
    fn test_compact_and_embedded() {
        assert_eq!(parse_timestamp_fallback("20240304"), Some(date(2024, 3, 4)));
        assert_eq!(
            parse_timestamp_fallback("shipped on 2024-03-04 (late)"),
            Some(date(2024, 3, 4))
        );
    }

    #[test]
    fn test_rejects_non_dates() {
        for value in ["", "yesterday", "12345", "1.5", "2024", "v1.2.3456789", "ORD-1001"] {
            assert_eq!(parse_timestamp_fallback(value), None, "{value:?}");
        }
    }

    #[test]
    fn test_looks_like_date() {
        assert!(looks_like_date("2024-03-04"));
        assert!(looks_like_date("on 3/4/24"));
        assert!(looks_like_date("March 4, 2024"));
        assert!(!looks_like_date("12.50"));
        assert!(!looks_like_date("hello"));
    }
}
