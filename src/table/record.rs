// src/table/record.rs

use std::sync::Arc;

/// One body row: header text → trimmed cell value, in column order.
///
/// Rows from one extraction share a single header list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowRecord {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl RowRecord {
    /// `values` is padded with empty strings (or truncated) to the header count.
    pub fn new(headers: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.resize(headers.len(), s!());
        Self { headers, values }
    }

    /// Convenience for tests and hand-built records.
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: Vec<(K, V)>) -> Self {
        let (headers, values): (Vec<String>, Vec<String>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).unzip();
        Self { headers: headers.into(), values }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == header)
            .map(|i| self.values[i].as_str())
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn values(&self) -> &[String] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(String::as_str).zip(self.values.iter().map(String::as_str))
    }
}
