// src/dates/tokenizer.rs
//
// Token date grammar.
//
// A format is scanned left to right; at each position the longest token that
// matches wins, so `MMM` is never read as `MM` + `M` and `ss` never as `s` + `s`.
// Letters that start no token are literal words. A date string splits into
// words at every boundary between digits, letters and anything else.
// Parsing pairs format items with value words positionally.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::DateError;

/// Recognised tokens, longest first within each family.
pub const TOKENS: [&str; 8] = ["yyyy", "MMM", "MM", "dd", "HH", "mm", "ss", "s"];

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar instant with second precision. Always a real date and time.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue {
    year: i32,
    month0: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Default for DateValue {
    fn default() -> Self {
        Self { year: 1970, month0: 0, day: 1, hour: 0, minute: 0, second: 0 }
    }
}

impl DateValue {
    /// `month0` is 0-based (0 = January).
    pub fn new(year: i32, month0: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self, DateError> {
        let v = Self { year, month0, day, hour, minute, second };
        v.checked().ok_or_else(|| DateError::OutOfRange(format!(
            "{year:04}-{:02}-{day:02} {hour:02}:{minute:02}:{second:02}",
            month0.saturating_add(1)
        )))
    }

    fn checked(self) -> Option<Self> {
        NaiveDate::from_ymd_opt(self.year, self.month0.checked_add(1)?, self.day)?;
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)?;
        Some(self)
    }

    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month0: dt.month0(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }

    pub fn to_naive(&self) -> NaiveDateTime {
        // fields are validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
            .unwrap_or_default()
    }

    pub fn date(&self) -> NaiveDate { self.to_naive().date() }

    pub fn year(&self) -> i32 { self.year }
    pub fn month0(&self) -> u32 { self.month0 }
    pub fn day(&self) -> u32 { self.day }
    pub fn hour(&self) -> u32 { self.hour }
    pub fn minute(&self) -> u32 { self.minute }
    pub fn second(&self) -> u32 { self.second }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Item<'f> {
    Token(&'static str),
    Literal(&'f str),
    Other(&'f str),
}

/// Split a format into tokens, literal letter words, and separators.
fn scan_format(fmt: &str) -> Vec<Item<'_>> {
    let mut items = Vec::new();
    let mut i = 0usize;
    let mut lit_start: Option<usize> = None;
    let mut other_start: Option<usize> = None;

    while i < fmt.len() {
        let rest = &fmt[i..];
        if let Some(tok) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            flush(fmt, &mut items, &mut lit_start, &mut other_start, i);
            items.push(Item::Token(tok));
            i += tok.len();
            continue;
        }
        let ch = rest.chars().next().unwrap_or(' ');
        if ch.is_alphabetic() {
            if other_start.is_some() {
                flush(fmt, &mut items, &mut lit_start, &mut other_start, i);
            }
            lit_start.get_or_insert(i);
        } else {
            if lit_start.is_some() {
                flush(fmt, &mut items, &mut lit_start, &mut other_start, i);
            }
            other_start.get_or_insert(i);
        }
        i += ch.len_utf8();
    }
    flush(fmt, &mut items, &mut lit_start, &mut other_start, fmt.len());
    items
}

fn flush<'f>(
    fmt: &'f str,
    items: &mut Vec<Item<'f>>,
    lit_start: &mut Option<usize>,
    other_start: &mut Option<usize>,
    end: usize,
) {
    if let Some(s) = lit_start.take() {
        items.push(Item::Literal(&fmt[s..end]));
    }
    if let Some(s) = other_start.take() {
        items.push(Item::Other(&fmt[s..end]));
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class { Digit, Letter, Other }

fn class_of(c: char) -> Class {
    if c.is_ascii_digit() { Class::Digit }
    else if c.is_alphabetic() { Class::Letter }
    else { Class::Other }
}

/// Maximal digit runs and letter runs of `s`, in order.
fn value_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<(usize, Class)> = None;
    for (i, c) in s.char_indices() {
        let class = class_of(c);
        match start {
            Some((_, cur)) if cur == class => {}
            Some((b, cur)) => {
                if cur != Class::Other { words.push(&s[b..i]); }
                start = Some((i, class));
            }
            None => start = Some((i, class)),
        }
    }
    if let Some((b, cur)) = start {
        if cur != Class::Other { words.push(&s[b..]); }
    }
    words
}

fn number<T: std::str::FromStr>(token: &'static str, word: &str) -> Result<T, DateError> {
    if !word.chars().all(|c| c.is_ascii_digit()) {
        return Err(DateError::InvalidField { token, value: word.to_string() });
    }
    word.parse().map_err(|_| DateError::InvalidField { token, value: word.to_string() })
}

fn month_from_name(word: &str) -> Result<u32, DateError> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(word))
        .map(|i| i as u32)
        .ok_or_else(|| DateError::UnknownMonth(word.to_string()))
}

/// Parse `input` according to the token format `fmt`.
///
/// Fields the format does not mention default to 1970-01-01 00:00:00.
pub fn parse(input: &str, fmt: &str) -> Result<DateValue, DateError> {
    let items: Vec<Item<'_>> = scan_format(fmt)
        .into_iter()
        .filter(|it| !matches!(it, Item::Other(_)))
        .collect();
    let words = value_words(input);

    if items.len() != words.len() {
        return Err(DateError::FormatMismatch {
            input: input.to_string(),
            format: fmt.to_string(),
            tokens: items.len(),
            values: words.len(),
        });
    }

    let mut v = DateValue::default();
    for (item, word) in items.iter().zip(words) {
        match *item {
            Item::Token("yyyy") => v.year = number("yyyy", word)?,
            Item::Token("MM") => {
                let m: u32 = number("MM", word)?;
                v.month0 = m.checked_sub(1).ok_or_else(|| DateError::InvalidField { token: "MM", value: word.to_string() })?;
            }
            Item::Token("MMM") => v.month0 = month_from_name(word)?,
            Item::Token("dd") => v.day = number("dd", word)?,
            Item::Token("HH") => v.hour = number("HH", word)?,
            Item::Token("mm") => v.minute = number("mm", word)?,
            Item::Token(t @ ("ss" | "s")) => v.second = number(t, word)?,
            Item::Token(t) => return Err(DateError::InvalidField { token: t, value: word.to_string() }),
            Item::Literal(lit) => {
                if !lit.eq_ignore_ascii_case(word) {
                    return Err(DateError::InvalidField { token: "literal", value: word.to_string() });
                }
            }
            Item::Other(_) => {}
        }
    }

    v.checked().ok_or_else(|| DateError::OutOfRange(input.to_string()))
}

/// Render `date` through `fmt`. Unrecognised text is copied as is.
pub fn format(date: &DateValue, fmt: &str) -> String {
    let mut out = String::with_capacity(fmt.len() + 8);
    for item in scan_format(fmt) {
        match item {
            Item::Token(t) => out.push_str(&render_token(date, t)),
            Item::Literal(s) | Item::Other(s) => out.push_str(s),
        }
    }
    out
}

fn render_token(d: &DateValue, token: &str) -> String {
    match token {
        "yyyy" => format!("{:04}", d.year),
        "MMM" => s!(MONTH_NAMES[d.month0 as usize % 12]),
        "MM" => format!("{:02}", d.month0 + 1),
        "dd" => format!("{:02}", d.day),
        "HH" => format!("{:02}", d.hour),
        "mm" => format!("{:02}", d.minute),
        "ss" => format!("{:02}", d.second),
        "s" => d.second.to_string(),
        other => s!(other),
    }
}

fn sort_by<S: AsRef<str>>(values: &[S], fmt: &str, newest_first: bool) -> Result<Vec<String>, DateError> {
    let mut parsed = values
        .iter()
        .map(|v| parse(v.as_ref(), fmt))
        .collect::<Result<Vec<_>, _>>()?;
    if newest_first {
        parsed.sort_by(|a, b| b.cmp(a));
    } else {
        parsed.sort();
    }
    Ok(parsed.iter().map(|d| format(d, fmt)).collect())
}

/// Parse every value, order newest first, re-render. One bad value fails all.
pub fn sort_newest_to_oldest<S: AsRef<str>>(values: &[S], fmt: &str) -> Result<Vec<String>, DateError> {
    sort_by(values, fmt, true)
}

/// Parse every value, order oldest first, re-render. One bad value fails all.
pub fn sort_oldest_to_newest<S: AsRef<str>>(values: &[S], fmt: &str) -> Result<Vec<String>, DateError> {
    sort_by(values, fmt, false)
}
