// tests/reconcile_pages.rs
//
// Captured pages → sweep → typed rows → reconciliation against a JSON envelope.
use std::fs;
use std::path::PathBuf;

use table_recon::config::{PaginationOptions, ReconOptions};
use table_recon::domain::policy::{self, ApiPolicy, PolicyComparator, UiPolicy};
use table_recon::file::{export_records, read_envelope};
use table_recon::recon::{Envelope, Reconciler};
use table_recon::sort;
use table_recon::table::{self, HtmlPages, Termination};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("table_recon_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn swept_policies() -> (Vec<table_recon::table::RowRecord>, Termination) {
    let mut pages = HtmlPages::from_dir(&fixture("pages"), "active").unwrap();
    assert_eq!(pages.page_count(), 2);
    let mut columns = policy::REQUIRED_COLUMNS.to_vec();
    columns.extend([policy::COL_RISK_STATES, policy::COL_SUB_PLANS]);
    let sweep = table::sweep_columns(&mut pages, &columns, &PaginationOptions::immediate(), None).unwrap();
    (sweep.records, sweep.termination)
}

#[test]
fn captured_pages_sweep_in_order() {
    let (records, termination) = swept_policies();
    assert_eq!(termination, Termination::NextDisabled);
    let ids: Vec<&str> = records.iter().map(|r| r.get(policy::COL_EXTERNAL_ID).unwrap()).collect();
    assert_eq!(ids, vec!["P-1001", "P-1002", "P-1003", "P-1004"]);
    assert_eq!(records[1].get(policy::COL_INSURED), Some("Jane Doe"));
    assert_eq!(records[2].get(policy::COL_INSURED), Some("O'Brien & Sons"));
}

#[test]
fn reconciliation_reports_every_kind_of_difference_once() {
    let (records, _) = swept_policies();
    let side_b = Envelope::success(UiPolicy::from_rows(&records).unwrap());
    let side_a: Envelope<ApiPolicy> = read_envelope(&fixture("api.json")).unwrap();

    let report = Reconciler::new(ReconOptions::default()).compare(&side_a, &side_b, &PolicyComparator);
    assert_eq!(
        report,
        vec![
            "P-1003: Status mismatch (API 'Active' vs UI 'Lapsed')",
            "P-1004 not found in API",
            "P-0999 present in API but missing in UI",
        ]
    );
}

#[test]
fn envelope_without_records_is_structural() {
    let dir = tmp_dir("structural");
    let path = dir.join("api.json");
    fs::write(&path, r#"{"isSuccess":false,"isFailure":true,"error":"HTTP 503"}"#).unwrap();

    let side_a: Envelope<ApiPolicy> = read_envelope(&path).unwrap();
    let (records, _) = swept_policies();
    let side_b = Envelope::success(UiPolicy::from_rows(&records).unwrap());
    let report = Reconciler::new(ReconOptions::default()).compare(&side_a, &side_b, &PolicyComparator);
    assert_eq!(report.len(), 1);
    assert!(report[0].starts_with("Structural error"));
}

#[test]
fn bad_json_is_a_load_error() {
    let dir = tmp_dir("bad_json");
    let path = dir.join("api.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(read_envelope::<ApiPolicy>(&path).is_err());
    assert!(read_envelope::<ApiPolicy>(&dir.join("missing.json")).is_err());
}

#[test]
fn extracted_columns_validate_sort_order() {
    let (records, _) = swept_policies();
    let created: Vec<&str> = records.iter().map(|r| r.get(policy::COL_CREATED).unwrap()).collect();
    assert!(sort::is_ascending_dates(&created).unwrap());
    assert!(!sort::is_descending_dates(&created).unwrap());

    let ids: Vec<&str> = records.iter().map(|r| r.get(policy::COL_EXTERNAL_ID).unwrap()).collect();
    assert!(sort::is_ascending(&ids));
}

#[test]
fn dump_writes_header_and_rows() {
    let (records, _) = swept_policies();
    let dir = tmp_dir("dump");
    let path = export_records(&dir.join("nested").join("rows.csv"), &records).unwrap();
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("External Id,Insured,Type,Line,Status,Premium,Created,Risk States,Sub Plans"));
    assert_eq!(text.lines().count(), 5);
    assert!(text.contains("\"Acme Freight, Inc.\""));
}
