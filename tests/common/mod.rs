// tests/common/mod.rs
//
// Scripted in-memory table surface.
#![allow(dead_code)]

use std::cell::Cell;

use table_recon::table::TableSurface;
use table_recon::TableError;

/// Pages of rows plus a scripted indicator.
pub struct ScriptedTable {
    pub headers: Vec<String>,
    pub pages: Vec<Vec<Vec<String>>>,
    /// Label for each click count; wraps around when exhausted.
    pub labels: Vec<String>,
    /// When false, the next control never reports disabled.
    pub honest_disabled: bool,
    /// When true, clicks are accepted but nothing re-renders.
    pub frozen: bool,
    pub page: usize,
    pub clicks: usize,
    pub label_reads: Cell<usize>,
}

impl ScriptedTable {
    pub fn new(headers: &[&str], pages: Vec<Vec<Vec<&str>>>) -> Self {
        let labels = (1..=pages.len()).map(|n| n.to_string()).collect();
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            pages: pages
                .into_iter()
                .map(|p| p.into_iter().map(|r| r.into_iter().map(str::to_string).collect()).collect())
                .collect(),
            labels,
            honest_disabled: true,
            frozen: false,
            page: 0,
            clicks: 0,
            label_reads: Cell::new(0),
        }
    }

    /// `n` pages of `rows` rows each, ids numbered from 1.
    pub fn numbered(n: usize, rows: usize) -> Self {
        let mut id = 0;
        let pages = (0..n)
            .map(|_| {
                (0..rows)
                    .map(|_| {
                        id += 1;
                        vec![id.to_string(), format!("name {id}")]
                    })
                    .collect()
            })
            .collect::<Vec<Vec<Vec<String>>>>();
        let mut t = Self::new(&["Id", "Name"], Vec::new());
        t.labels = (1..=n).map(|p| p.to_string()).collect();
        t.pages = pages;
        t
    }

    fn current(&self) -> &[Vec<String>] {
        &self.pages[self.page % self.pages.len()]
    }
}

impl TableSurface for ScriptedTable {
    fn header_texts(&self) -> Result<Vec<String>, TableError> {
        Ok(self.headers.clone())
    }

    fn row_cells(&self, row: usize) -> Result<Vec<String>, TableError> {
        self.current()
            .get(row)
            .cloned()
            .ok_or_else(|| TableError::Surface(format!("row {row}")))
    }

    fn row_count(&self) -> Result<usize, TableError> {
        Ok(self.current().len())
    }

    fn active_page_label(&self) -> Result<String, TableError> {
        self.label_reads.set(self.label_reads.get() + 1);
        Ok(self.labels[self.clicks % self.labels.len()].clone())
    }

    fn click_next(&mut self) -> Result<(), TableError> {
        if self.frozen {
            return Ok(());
        }
        if self.honest_disabled && self.page + 1 >= self.pages.len() {
            return Ok(());
        }
        self.page += 1;
        self.clicks += 1;
        Ok(())
    }

    fn is_next_disabled(&self) -> Result<bool, TableError> {
        Ok(self.honest_disabled && self.page + 1 >= self.pages.len())
    }
}
