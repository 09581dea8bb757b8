// src/table/extractor.rs
//
// Column resolution and single-page reads. Pure reads against the current
// render; nothing here clicks or waits.

use std::sync::Arc;

use crate::core::sanitize::header_key;
use crate::error::TableError;
use super::{RowRecord, TableSurface};

/// Position of the first header whose normalised text *starts with* `header`.
///
/// Prefix matching tolerates trailing sort arrows or filter buttons rendered
/// inside the header cell.
pub fn column_index<S: TableSurface + ?Sized>(surface: &S, header: &str) -> Result<usize, TableError> {
    let headers = surface.header_texts()?;
    resolve(&headers, header)
}

fn resolve(headers: &[String], header: &str) -> Result<usize, TableError> {
    let wanted = header_key(header);
    // an empty key would prefix-match the first column
    let found = if wanted.is_empty() {
        None
    } else {
        headers.iter().position(|h| header_key(h).starts_with(&wanted))
    };
    match found {
        Some(i) => {
            logd!("column '{header}' resolved to index {i}");
            Ok(i)
        }
        None => Err(TableError::HeaderNotFound {
            header: header.to_string(),
            available: headers.to_vec(),
        }),
    }
}

/// Every body cell of one column on the current page, trimmed, in row order.
/// An empty table yields an empty list.
pub fn column_values<S: TableSurface + ?Sized>(surface: &S, header: &str) -> Result<Vec<String>, TableError> {
    let idx = column_index(surface, header)?;
    let rows = surface.row_count()?;
    let mut out = Vec::with_capacity(rows);
    for r in 0..rows {
        let cells = surface.row_cells(r)?;
        out.push(cell_at(&cells, idx));
    }
    Ok(out)
}

/// All rows of the current page keyed by the rendered header texts (trimmed).
pub fn read_page<S: TableSurface + ?Sized>(surface: &S) -> Result<Vec<RowRecord>, TableError> {
    let headers: Vec<String> = surface.header_texts()?.iter().map(|h| h.trim().to_string()).collect();
    let positions: Vec<usize> = (0..headers.len()).collect();
    read_rows(surface, headers.into(), &positions)
}

/// Rows of the current page restricted to `columns`, keyed by the names as
/// given (not as rendered). Each name is resolved by prefix like `column_index`.
pub fn read_columns<S: TableSurface + ?Sized>(surface: &S, columns: &[&str]) -> Result<Vec<RowRecord>, TableError> {
    let rendered = surface.header_texts()?;
    let positions = columns
        .iter()
        .map(|c| resolve(&rendered, c))
        .collect::<Result<Vec<_>, _>>()?;
    let headers: Arc<[String]> = columns.iter().map(|c| c.to_string()).collect();
    read_rows(surface, headers, &positions)
}

fn read_rows<S: TableSurface + ?Sized>(
    surface: &S,
    headers: Arc<[String]>,
    positions: &[usize],
) -> Result<Vec<RowRecord>, TableError> {
    let rows = surface.row_count()?;
    let mut out = Vec::with_capacity(rows);
    for r in 0..rows {
        let cells = surface.row_cells(r)?;
        let values = positions.iter().map(|&i| cell_at(&cells, i)).collect();
        out.push(RowRecord::new(Arc::clone(&headers), values));
    }
    Ok(out)
}

fn cell_at(cells: &[String], idx: usize) -> String {
    cells.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}
