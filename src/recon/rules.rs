// src/recon/rules.rs
//
// Per-field comparison strategies. Every field of a record pair is checked
// with an explicit rule; there is no generic deep equality.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::sanitize::alnum_lower;
use crate::dates::{host, tokenizer};

/// A nested item that can be projected into a comparable shape.
pub trait ListItem {
    /// Identity within its list, when it has one. Items with unique keys are
    /// paired by them; otherwise lists are compared position by position.
    fn natural_key(&self) -> Option<String>;

    /// Canonical text of the item; two items match when these are equal.
    fn describe(&self) -> String;
}

/// Rules that only need the two cell texts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRule {
    Direct,
    Normalized,
    /// Side A in the configured wire format, side B as displayed.
    Date,
    /// Order-independent list split on the separator.
    List(char),
}

/// Collects mismatch lines for one keyed record pair.
pub struct FieldDiff<'r> {
    key: &'r str,
    label_a: &'r str,
    label_b: &'r str,
    date_format: &'r str,
    out: &'r mut Vec<String>,
}

impl<'r> FieldDiff<'r> {
    pub fn new(key: &'r str, label_a: &'r str, label_b: &'r str, date_format: &'r str, out: &'r mut Vec<String>) -> Self {
        Self { key, label_a, label_b, date_format, out }
    }

    fn mismatch(&mut self, field: &str, a: &str, b: &str) {
        self.out.push(format!(
            "{}: {field} mismatch ({} '{a}' vs {} '{b}')",
            self.key, self.label_a, self.label_b
        ));
    }

    /// Free-form note about this record.
    pub fn note(&mut self, field: &str, msg: impl AsRef<str>) {
        self.out.push(format!("{}: {field} {}", self.key, msg.as_ref()));
    }

    /// Exact string equality.
    pub fn direct(&mut self, field: &str, a: &str, b: &str) {
        if a != b {
            self.mismatch(field, a, b);
        }
    }

    /// Map side A's coded value through `table` before comparing.
    /// A code missing from the table is itself reported.
    pub fn translated(&mut self, field: &str, a_code: &str, table: &[(&str, &str)], b: &str) {
        match translate(a_code, table) {
            Some(label) => self.direct(field, label, b),
            None => self.note(field, format!("has no translation for {} code '{a_code}'", self.label_a)),
        }
    }

    /// Map a boolean flag to one of two labels before comparing.
    pub fn flag(&mut self, field: &str, a: bool, labels: (&str, &str), b: &str) {
        let label = if a { labels.0 } else { labels.1 };
        self.direct(field, label, b);
    }

    /// Compare after `alnum_lower` on both sides.
    pub fn normalized(&mut self, field: &str, a: &str, b: &str) {
        if alnum_lower(a) != alnum_lower(b) {
            self.mismatch(field, a, b);
        }
    }

    /// Side A's raw value rebuilt into side B's display shape by `render`.
    pub fn composite(&mut self, field: &str, a_raw: &str, render: impl FnOnce(&str) -> String, b: &str) {
        let rendered = render(a_raw);
        self.direct(field, &rendered, b);
    }

    /// Set equality; order and duplicates are ignored.
    pub fn scalar_set<S: AsRef<str>, T: AsRef<str>>(&mut self, field: &str, a: &[S], b: &[T]) {
        let sa: BTreeSet<&str> = a.iter().map(AsRef::as_ref).collect();
        let sb: BTreeSet<&str> = b.iter().map(AsRef::as_ref).collect();
        if sa != sb {
            let only_a: Vec<&str> = sa.difference(&sb).copied().collect();
            let only_b: Vec<&str> = sb.difference(&sa).copied().collect();
            self.note(field, format!(
                "differ (only in {}: {only_a:?}, only in {}: {only_b:?})",
                self.label_a, self.label_b
            ));
        }
    }

    /// Nested items. Paired by natural key when every item has a distinct
    /// one, otherwise compared in order.
    pub fn object_list<T: ListItem>(&mut self, field: &str, a: &[T], b: &[T]) {
        let keyed_a = keyed(a);
        let keyed_b = keyed(b);
        match (keyed_a, keyed_b) {
            (Some(ma), Some(mb)) => {
                for (k, da) in &ma {
                    match mb.get(k) {
                        None => self.note(field, format!("item '{k}' missing in {}", self.label_b)),
                        Some(db) if db != da => self.mismatch(&format!("{field}[{k}]"), da, db),
                        Some(_) => {}
                    }
                }
                for k in mb.keys().filter(|k| !ma.contains_key(*k)) {
                    self.note(field, format!("item '{k}' missing in {}", self.label_a));
                }
            }
            _ => {
                let da: Vec<String> = a.iter().map(ListItem::describe).collect();
                let db: Vec<String> = b.iter().map(ListItem::describe).collect();
                if da != db {
                    self.mismatch(field, &da.join("; "), &db.join("; "));
                }
            }
        }
    }

    /// Calendar-day equality. Side A is read with the wire format, side B with
    /// the lenient parser; time of day is ignored. Unreadable values produce a
    /// parse-error line instead of a mismatch.
    pub fn date(&mut self, field: &str, a_wire: &str, b_display: &str) {
        if a_wire.trim().is_empty() && b_display.trim().is_empty() {
            return;
        }
        let pa = tokenizer::parse(a_wire.trim(), self.date_format);
        let pb = host::parse_lenient(b_display);
        match (pa, pb) {
            (Ok(da), Ok(db)) => {
                if da.date() != db.date() {
                    self.mismatch(field, a_wire, b_display);
                }
            }
            (ra, rb) => {
                let mut errs = Vec::new();
                if let Err(e) = ra { errs.push(format!("{}: {e}", self.label_a)); }
                if let Err(e) = rb { errs.push(format!("{}: {e}", self.label_b)); }
                let msg = format!("date parse error ({})", errs.join("; "));
                logw!("{}: {field} {msg}", self.key);
                self.note(field, msg);
            }
        }
    }

    /// Dispatch a `TextRule` over two cell texts.
    pub fn text(&mut self, field: &str, rule: TextRule, a: &str, b: &str) {
        match rule {
            TextRule::Direct => self.direct(field, a, b),
            TextRule::Normalized => self.normalized(field, a, b),
            TextRule::Date => self.date(field, a, b),
            TextRule::List(sep) => self.scalar_set(field, &split_list(a, sep), &split_list(b, sep)),
        }
    }
}

pub fn translate<'t>(code: &str, table: &[(&str, &'t str)]) -> Option<&'t str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

/// Split a rendered list cell, dropping blanks.
pub fn split_list(s: &str, sep: char) -> Vec<String> {
    s.split(sep)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// `None` if any item lacks a key or two items share one.
fn keyed<T: ListItem>(items: &[T]) -> Option<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for item in items {
        let k = item.natural_key()?;
        if map.insert(k, item.describe()).is_some() {
            return None;
        }
    }
    Some(map)
}
