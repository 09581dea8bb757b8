// src/table/surface.rs

use crate::error::TableError;

/// The narrow slice of a rendered table view the extractor and paginator use.
///
/// Implementors wrap whatever actually drives the page. Reads reflect the
/// *current* render; `click_next` mutates it.
pub trait TableSurface {
    /// Header cell texts, left to right. May include sort/filter affordance text.
    fn header_texts(&self) -> Result<Vec<String>, TableError>;

    /// Body cell texts of one row on the current page.
    fn row_cells(&self, row: usize) -> Result<Vec<String>, TableError>;

    /// Body rows on the current page.
    fn row_count(&self) -> Result<usize, TableError>;

    /// Text of the active-page indicator.
    fn active_page_label(&self) -> Result<String, TableError>;

    /// Activate the next-page control. A no-op on the last page.
    fn click_next(&mut self) -> Result<(), TableError>;

    fn is_next_disabled(&self) -> Result<bool, TableError>;
}

impl<S: TableSurface + ?Sized> TableSurface for &mut S {
    fn header_texts(&self) -> Result<Vec<String>, TableError> { (**self).header_texts() }
    fn row_cells(&self, row: usize) -> Result<Vec<String>, TableError> { (**self).row_cells(row) }
    fn row_count(&self) -> Result<usize, TableError> { (**self).row_count() }
    fn active_page_label(&self) -> Result<String, TableError> { (**self).active_page_label() }
    fn click_next(&mut self) -> Result<(), TableError> { (**self).click_next() }
    fn is_next_disabled(&self) -> Result<bool, TableError> { (**self).is_next_disabled() }
}
