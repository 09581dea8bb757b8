// src/table/html_pages.rs
//
// A `TableSurface` over captured page markup, one document per page.
// Lets sweeps and reconciliations run offline against saved views.
//
// Assumptions:
// - the first <table> in each document is the data table
// - header cells are <th>; body rows are <tr> blocks with at least one <td>
// - the active page indicator carries the configured class marker (default "active")

use std::{fs, io, path::Path};

use crate::core::html;
use crate::error::TableError;
use super::TableSurface;

#[derive(Clone, Debug)]
struct ParsedPage {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    label: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HtmlPages {
    pages: Vec<ParsedPage>,
    cursor: usize,
}

impl HtmlPages {
    pub fn from_documents<S: AsRef<str>>(docs: &[S], active_marker: &str) -> Result<Self, TableError> {
        let pages = docs
            .iter()
            .enumerate()
            .map(|(i, d)| parse_page(d.as_ref(), active_marker).ok_or_else(|| {
                TableError::Surface(format!("page {}: no <table> found", i + 1))
            }))
            .collect::<Result<Vec<_>, _>>()?;
        if pages.is_empty() {
            return Err(TableError::Surface(s!("no pages captured")));
        }
        Ok(Self { pages, cursor: 0 })
    }

    /// Load every `.html`/`.htm` file in `dir`, ordered by file name.
    pub fn from_dir(dir: &Path, active_marker: &str) -> io::Result<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() { continue; }
            let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
            if ext == "html" || ext == "htm" {
                paths.push(path);
            }
        }
        paths.sort();
        logd!("loading {} captured page(s) from {}", paths.len(), dir.display());

        let docs = paths
            .iter()
            .map(fs::read_to_string)
            .collect::<io::Result<Vec<_>>>()?;
        Self::from_documents(&docs, active_marker)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn page_count(&self) -> usize { self.pages.len() }

    fn current(&self) -> &ParsedPage { &self.pages[self.cursor] }
}

fn parse_page(doc: &str, active_marker: &str) -> Option<ParsedPage> {
    let table = html::slice_between_ci(doc, "<table", "</table>")?;

    let headers = html::tag_blocks(table, "<th", "</th>")
        .into_iter()
        .map(html::cell_text)
        .collect();

    let rows = html::tag_blocks(table, "<tr", "</tr>")
        .into_iter()
        .map(|tr| html::tag_blocks(tr, "<td", "</td>").into_iter().map(html::cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    // The pager lives outside the grid; rows may carry the same class.
    let (tb, te) = html::next_tag_block_ci(doc, "<table", "</table>", 0)?;
    let label = html::text_of_first_with_class(&doc[te..], active_marker)
        .or_else(|| html::text_of_first_with_class(&doc[..tb], active_marker));
    Some(ParsedPage { headers, rows, label })
}

impl TableSurface for HtmlPages {
    fn header_texts(&self) -> Result<Vec<String>, TableError> {
        Ok(self.current().headers.clone())
    }

    fn row_cells(&self, row: usize) -> Result<Vec<String>, TableError> {
        self.current()
            .rows
            .get(row)
            .cloned()
            .ok_or_else(|| TableError::Surface(format!("row {row} out of range on page {}", self.cursor + 1)))
    }

    fn row_count(&self) -> Result<usize, TableError> {
        Ok(self.current().rows.len())
    }

    fn active_page_label(&self) -> Result<String, TableError> {
        Ok(self.current().label.clone().unwrap_or_else(|| (self.cursor + 1).to_string()))
    }

    fn click_next(&mut self) -> Result<(), TableError> {
        if self.cursor + 1 < self.pages.len() {
            self.cursor += 1;
        }
        Ok(())
    }

    fn is_next_disabled(&self) -> Result<bool, TableError> {
        Ok(self.cursor + 1 >= self.pages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_1: &str = r#"
        <html><body>
        <table class="grid">
          <thead><tr><th>External Id <i class="sort"></i></th><th>Insured&nbsp;Name</th></tr></thead>
          <tbody>
            <tr><td> 101 </td><td><a href="/p/101">Alpha &amp; Sons</a></td></tr>
            <tr><td>102</td><td>Beta</td></tr>
          </tbody>
        </table>
        <ul class="pager"><li class="page-item active"><span>1</span></li><li class="page-item">2</li></ul>
        </body></html>
    "#;

    const PAGE_2: &str = r#"
        <table><tr><th>External Id</th><th>Insured Name</th></tr>
        <tr><td>103</td><td>Gamma</td></tr></table>
        <ul><li>1</li><li class="active">2</li></ul>
    "#;

    #[test]
    fn parses_headers_rows_and_label() {
        let pages = HtmlPages::from_documents(&[PAGE_1, PAGE_2], "active").unwrap();
        assert_eq!(pages.header_texts().unwrap(), vec!["External Id", "Insured Name"]);
        assert_eq!(pages.row_count().unwrap(), 2);
        assert_eq!(pages.row_cells(0).unwrap(), vec!["101", "Alpha & Sons"]);
        assert_eq!(pages.active_page_label().unwrap(), "1");
        assert!(!pages.is_next_disabled().unwrap());
    }

    #[test]
    fn next_moves_until_last_page_then_noops() {
        let mut pages = HtmlPages::from_documents(&[PAGE_1, PAGE_2], "active").unwrap();
        pages.click_next().unwrap();
        assert_eq!(pages.active_page_label().unwrap(), "2");
        assert!(pages.is_next_disabled().unwrap());
        pages.click_next().unwrap();
        assert_eq!(pages.row_cells(0).unwrap(), vec!["103", "Gamma"]);
    }

    #[test]
    fn selected_row_does_not_become_page_label() {
        let doc = r#"
            <table><tr><th>External Id</th></tr>
            <tr class="active"><td>101</td></tr><tr><td>102</td></tr></table>
            <ul><li>1</li><li class="active">2</li></ul>
        "#;
        let pages = HtmlPages::from_documents(&[doc], "active").unwrap();
        assert_eq!(pages.active_page_label().unwrap(), "2");

        let pager_first = r#"<div class="active">7</div><table><tr><th>Id</th></tr><tr class="active"><td>1</td></tr></table>"#;
        let pages = HtmlPages::from_documents(&[pager_first], "active").unwrap();
        assert_eq!(pages.active_page_label().unwrap(), "7");
    }

    #[test]
    fn document_without_table_is_rejected() {
        assert!(HtmlPages::from_documents(&["<p>nothing</p>"], "active").is_err());
        assert!(HtmlPages::from_documents::<&str>(&[], "active").is_err());
    }
}
