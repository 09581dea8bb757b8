// src/progress.rs
/// Lightweight progress reporting for pagination sweeps.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once at the start with the most pages the sweep may visit.
    fn begin(&mut self, _max_pages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been read (1-based page index, rows read).
    fn item_done(&mut self, _page: usize, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Counts pages and rows; handy for callers that only want totals.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub pages: usize,
    pub rows: usize,
    pub max_pages: usize,
    /// Status lines, in order.
    pub lines: Vec<String>,
    pub finished: bool,
}

impl Progress for Tally {
    fn begin(&mut self, max_pages: usize) {
        self.max_pages = max_pages;
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, _page: usize, rows: usize) {
        self.pages += 1;
        self.rows += rows;
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
