// src/recon/envelope.rs

use serde::{Deserialize, Serialize};

/// Uniform wrapper both sides are normalised into before comparison.
///
/// `records` is optional so a malformed payload can still be represented and
/// reported instead of failing deserialisation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub records: Option<Vec<T>>,
    #[serde(default)]
    pub record_count: usize,
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub is_failure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(records: Vec<T>) -> Self {
        Self {
            record_count: records.len(),
            records: Some(records),
            is_success: true,
            is_failure: false,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            records: None,
            record_count: 0,
            is_success: false,
            is_failure: true,
            error: Some(error.into()),
        }
    }

    pub fn records(&self) -> Option<&[T]> {
        self.records.as_deref()
    }

    /// Convert the records, keeping the envelope flags.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Envelope<U> {
        Envelope {
            records: self.records.map(|r| r.into_iter().map(f).collect()),
            record_count: self.record_count,
            is_success: self.is_success,
            is_failure: self.is_failure,
            error: self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_camel_case_and_missing_records() {
        let ok: Envelope<u32> = serde_json::from_str(r#"{"records":[1,2],"recordCount":2,"isSuccess":true,"isFailure":false}"#).unwrap();
        assert_eq!(ok.records(), Some(&[1, 2][..]));
        assert!(ok.is_success && ok.error.is_none());

        let bad: Envelope<u32> = serde_json::from_str(r#"{"isFailure":true,"error":"timeout"}"#).unwrap();
        assert_eq!(bad.records(), None);
        assert_eq!(bad.error.as_deref(), Some("timeout"));
    }

    #[derive(Debug, PartialEq, Eq, Deserialize)]
    struct Row {
        id: String,
    }

    fn load<T: serde::de::DeserializeOwned>(json: &str) -> Envelope<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn record_type_needs_no_default() {
        let e: Envelope<Row> = load(r#"{"records":[{"id":"P-1"}],"recordCount":1}"#);
        assert_eq!(e.records(), Some(&[Row { id: s!("P-1") }][..]));
        let e: Envelope<Row> = load(r#"{"isSuccess":false}"#);
        assert!(e.records.is_none());
    }

    #[test]
    fn constructors_set_flags() {
        let e = Envelope::success(vec!["a", "b"]);
        assert_eq!((e.record_count, e.is_success, e.is_failure), (2, true, false));
        let f: Envelope<()> = Envelope::failure("boom");
        assert!(f.is_failure && f.records().is_none());
        assert_eq!(e.map(str::len).records(), Some(&[1, 1][..]));
    }
}
