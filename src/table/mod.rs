// src/table/mod.rs
//! Reading a rendered, paginated table into one logical record set.
//!
//! The live render surface is owned by an outer browser-automation layer and
//! reaches this module only through [`TableSurface`]. Everything here is a
//! blocking read or a single click against that surface, so calls must never
//! overlap on the same view.
//!
//! ```text
//! TableSurface → extractor (one page) → paginator (all pages) → Vec<RowRecord>
//! ```

pub mod surface;
pub mod record;
pub mod extractor;
pub mod paginator;
pub mod html_pages;

pub use surface::TableSurface;
pub use record::RowRecord;
pub use extractor::{column_index, column_values, read_page, read_columns};
pub use paginator::{Navigator, NavState, Sweep, Termination, sweep, sweep_columns};
pub use html_pages::HtmlPages;
