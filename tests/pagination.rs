// tests/pagination.rs
//
// Sweeps over a scripted surface: termination signals, ordering, safety cap.
mod common;

use std::time::Duration;

use common::ScriptedTable;
use table_recon::config::PaginationOptions;
use table_recon::progress::Tally;
use table_recon::table::{self, NavState, Navigator, Termination};
use table_recon::{PaginationError, TableError};

fn fast() -> PaginationOptions {
    PaginationOptions {
        label_wait: Duration::from_millis(20),
        poll_interval: Duration::from_millis(2),
        ..PaginationOptions::default()
    }
}

#[test]
fn sweep_keeps_page_and_row_order() {
    let mut t = ScriptedTable::numbered(3, 4);
    let mut tally = Tally::default();
    let sweep = table::sweep(&mut t, &fast(), Some(&mut tally)).unwrap();

    assert_eq!(sweep.termination, Termination::NextDisabled);
    assert_eq!(sweep.page_rows, vec![4, 4, 4]);
    assert_eq!(sweep.page_rows.iter().sum::<usize>(), sweep.records.len());
    let ids: Vec<&str> = sweep.records.iter().map(|r| r.get("Id").unwrap()).collect();
    let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);

    assert_eq!(tally.pages, 3);
    assert_eq!(tally.rows, 12);
    assert_eq!(tally.max_pages, 100);
    assert_eq!(tally.lines, vec!["3 page(s), 12 row(s), stopped: NextDisabled"]);
    assert!(tally.finished);
}

#[test]
fn single_page_view_stops_immediately() {
    let mut t = ScriptedTable::numbered(1, 2);
    let sweep = table::sweep(&mut t, &fast(), None).unwrap();
    assert_eq!(sweep.pages(), 1);
    assert_eq!(sweep.records.len(), 2);
    assert_eq!(t.clicks, 0);
}

#[test]
fn unchanged_indicator_counts_as_exhausted() {
    let mut t = ScriptedTable::numbered(3, 2);
    t.frozen = true;
    let sweep = table::sweep(&mut t, &fast(), None).unwrap();
    assert_eq!(sweep.termination, Termination::LabelUnchanged);
    assert_eq!(sweep.records.len(), 2);
    // the bounded wait polled more than once before giving up
    assert!(t.label_reads.get() > 2);
}

#[test]
fn cycling_indicator_hits_the_safety_cap() {
    let mut t = ScriptedTable::numbered(2, 1);
    t.honest_disabled = false;
    t.labels = vec!["1".into(), "2".into()];

    let mut tally = Tally::default();
    let err = table::sweep(&mut t, &PaginationOptions::immediate(), Some(&mut tally)).unwrap_err();
    assert_eq!(tally.pages, 100);
    assert_eq!(tally.lines, vec![err.to_string()]);
    assert!(tally.finished);
    match err {
        PaginationError::SafetyCapExceeded { cap, rows, .. } => {
            assert_eq!(cap, 100);
            assert_eq!(rows, 100);
        }
        other => panic!("expected safety cap, got {other:?}"),
    }
    assert_eq!(t.clicks, 99);
}

#[test]
fn navigator_reports_aborted_state() {
    let mut t = ScriptedTable::numbered(2, 1);
    t.honest_disabled = false;
    let opts = PaginationOptions { safety_cap: 3, ..PaginationOptions::immediate() };
    let mut nav = Navigator::new(&mut t, opts);

    assert_eq!(nav.advance().unwrap(), NavState::OnPage(2));
    assert_eq!(nav.advance().unwrap(), NavState::OnPage(3));
    assert!(matches!(nav.advance(), Err(PaginationError::SafetyCapExceeded { cap: 3, .. })));
    assert_eq!(nav.state(), NavState::Aborted);
    // terminal states are sticky
    assert_eq!(nav.advance().unwrap(), NavState::Aborted);
}

#[test]
fn exactly_cap_pages_still_completes() {
    let mut t = ScriptedTable::numbered(5, 1);
    let opts = PaginationOptions { safety_cap: 5, ..PaginationOptions::immediate() };
    let sweep = table::sweep(&mut t, &opts, None).unwrap();
    assert_eq!(sweep.pages(), 5);
}

#[test]
fn sweep_columns_resolves_by_prefix() {
    let mut t = ScriptedTable::numbered(2, 2);
    t.headers = vec!["Id ▲".into(), "Name (filter)".into()];
    let sweep = table::sweep_columns(&mut t, &["Name", "Id"], &fast(), None).unwrap();
    assert_eq!(sweep.records[3].get("Id"), Some("4"));
    assert_eq!(sweep.records[3].headers(), &["Name".to_string(), "Id".to_string()]);

    let mut t = ScriptedTable::numbered(2, 2);
    let err = table::sweep_columns(&mut t, &["Premium"], &fast(), None).unwrap_err();
    assert!(matches!(err, PaginationError::Table(TableError::HeaderNotFound { .. })));
}

#[test]
fn column_values_on_current_page() {
    let t = ScriptedTable::numbered(2, 3);
    assert_eq!(table::column_values(&t, "name").unwrap(), vec!["name 1", "name 2", "name 3"]);

    let empty = ScriptedTable::new(&["Id"], vec![vec![]]);
    assert!(table::column_values(&empty, "Id").unwrap().is_empty());
}
