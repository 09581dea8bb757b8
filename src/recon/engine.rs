// src/recon/engine.rs

use std::collections::{HashMap, HashSet};

use crate::config::ReconOptions;
use crate::table::RowRecord;
use super::rules::{FieldDiff, TextRule};
use super::Envelope;

/// Exposes the business identifier used to pair records across sides.
pub trait Keyed {
    fn key(&self, field: &str) -> Option<String>;
}

impl Keyed for RowRecord {
    fn key(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_string)
    }
}

/// Field rules for one pair of record types.
pub trait RecordComparator<A, B> {
    fn compare_fields(&self, a: &A, b: &B, diff: &mut FieldDiff<'_>);
}

impl<A, B, F> RecordComparator<A, B> for F
where
    F: Fn(&A, &B, &mut FieldDiff<'_>),
{
    fn compare_fields(&self, a: &A, b: &B, diff: &mut FieldDiff<'_>) {
        self(a, b, diff)
    }
}

pub struct Reconciler {
    opts: ReconOptions,
}

impl Reconciler {
    pub fn new(opts: ReconOptions) -> Self { Self { opts } }

    pub fn options(&self) -> &ReconOptions { &self.opts }

    /// Compare side A (retrieved) against side B (rendered).
    ///
    /// Order of the report:
    /// 1. a single structural line, and nothing else, if either side has no records
    /// 2. a count line when the sides differ in size (comparison continues)
    /// 3. per side-B record, in side-B order: "not found" or field mismatches
    /// 4. per side-A record absent from side B, in side-A order
    pub fn compare<A, B, C>(&self, side_a: &Envelope<A>, side_b: &Envelope<B>, comparator: &C) -> Vec<String>
    where
        A: Keyed,
        B: Keyed,
        C: RecordComparator<A, B> + ?Sized,
    {
        let ReconOptions { label_a, label_b, key_field, api_date_format } = &self.opts;
        let mut out = Vec::new();

        let (Some(recs_a), Some(recs_b)) = (side_a.records(), side_b.records()) else {
            let missing: Vec<&str> = [(label_a, side_a.records.is_none()), (label_b, side_b.records.is_none())]
                .into_iter()
                .filter(|(_, none)| *none)
                .map(|(l, _)| l.as_str())
                .collect();
            out.push(format!("Structural error: no records field in {} response", missing.join(" and ")));
            loge!("{}", out[0]);
            return out;
        };

        if recs_a.len() != recs_b.len() {
            out.push(format!(
                "Record count mismatch: {label_a} has {}, {label_b} has {}",
                recs_a.len(),
                recs_b.len()
            ));
        }

        let map_a = index_by_key(recs_a, key_field, label_a, &mut out);
        let keys_b = key_order(recs_b, key_field, label_b, &mut out);
        let set_b: HashSet<&str> = keys_b.iter().map(|(k, _)| k.as_str()).collect();

        for (key, rec_b) in &keys_b {
            let Some(rec_a) = map_a.get(key.as_str()) else {
                out.push(format!("{key} not found in {label_a}"));
                continue;
            };
            let mut diff = FieldDiff::new(key, label_a, label_b, api_date_format, &mut out);
            comparator.compare_fields(rec_a, rec_b, &mut diff);
        }

        for (key, _) in key_order(recs_a, key_field, label_a, &mut Vec::new()) {
            if !set_b.contains(key.as_str()) {
                out.push(format!("{key} present in {label_a} but missing in {label_b}"));
            }
        }

        logf!(
            "reconciled {} {label_a} vs {} {label_b} record(s): {} mismatch line(s)",
            recs_a.len(),
            recs_b.len(),
            out.len()
        );
        out
    }
}

/// `(key, record)` in collection order. Records without the key field are
/// reported and skipped.
fn key_order<'r, T: Keyed>(records: &'r [T], field: &str, label: &str, out: &mut Vec<String>) -> Vec<(String, &'r T)> {
    let mut keyed = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        match r.key(field) {
            Some(k) => keyed.push((k, r)),
            None => out.push(format!("record #{} in {label} has no {field}", i + 1)),
        }
    }
    keyed
}

fn index_by_key<'r, T: Keyed>(records: &'r [T], field: &str, label: &str, out: &mut Vec<String>) -> HashMap<String, &'r T> {
    let mut map = HashMap::with_capacity(records.len());
    for (k, r) in key_order(records, field, label, out) {
        if map.insert(k.clone(), r).is_some() {
            logw!("duplicate {field} '{k}' in {label}; last one wins");
        }
    }
    map
}

/// Compare with default labels and options, keyed on `key_field`.
pub fn compare<A, B, C>(side_a: &Envelope<A>, side_b: &Envelope<B>, key_field: &str, comparator: &C) -> Vec<String>
where
    A: Keyed,
    B: Keyed,
    C: RecordComparator<A, B> + ?Sized,
{
    let opts = ReconOptions { key_field: key_field.to_string(), ..ReconOptions::default() };
    Reconciler::new(opts).compare(side_a, side_b, comparator)
}

/// Column-driven comparator for two `RowRecord` collections.
///
/// Columns without an explicit rule use `TextRule::Direct`. A column present
/// on only one side is reported once per record pair.
#[derive(Clone, Debug, Default)]
pub struct RowComparator {
    rules: Vec<(String, TextRule)>,
    skip: Vec<String>,
}

impl RowComparator {
    pub fn new() -> Self { Self::default() }

    pub fn rule(mut self, column: impl Into<String>, rule: TextRule) -> Self {
        self.rules.push((column.into(), rule));
        self
    }

    /// Leave a column out of the comparison entirely.
    pub fn skip(mut self, column: impl Into<String>) -> Self {
        self.skip.push(column.into());
        self
    }

    fn rule_for(&self, column: &str) -> TextRule {
        self.rules
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, r)| *r)
            .unwrap_or(TextRule::Direct)
    }
}

impl RecordComparator<RowRecord, RowRecord> for RowComparator {
    fn compare_fields(&self, a: &RowRecord, b: &RowRecord, diff: &mut FieldDiff<'_>) {
        for (column, va) in a.iter() {
            if self.skip.iter().any(|s| s == column) { continue; }
            match b.get(column) {
                Some(vb) => diff.text(column, self.rule_for(column), va, vb),
                None => diff.note(column, "column absent on rendered side"),
            }
        }
        for (column, _) in b.iter() {
            if self.skip.iter().any(|s| s == column) { continue; }
            if a.get(column).is_none() {
                diff.note(column, "column absent on retrieved side");
            }
        }
    }
}
