// src/dates/host.rs
//
// Lenient parsing of dates as a rendered view shows them. Tries RFC 3339 first,
// then a fixed list of common layouts. Offsets are dropped: the wall-clock
// time as written is what the user saw.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::DateError;
use super::DateValue;

const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m-%d-%Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %I:%M %p",
];

const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Parse a displayed date/time string. Date-only inputs land at midnight.
pub fn parse_lenient(input: &str) -> Result<NaiveDateTime, DateError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateError::Unparsable(input.to_string()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(dt);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, layout) {
            return Ok(d.and_time(chrono::NaiveTime::MIN));
        }
    }
    Err(DateError::Unparsable(input.to_string()))
}

/// `parse_lenient` narrowed to whole seconds, as a `DateValue`.
pub fn parse_value(input: &str) -> Result<DateValue, DateError> {
    parse_lenient(input).map(DateValue::from_naive)
}
