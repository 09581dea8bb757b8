// src/lib.rs
//! Extract a paginated table view into one record set, validate its sort
//! order, and reconcile it field by field against independently retrieved
//! backend records.

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod dates;
pub mod domain;
pub mod file;
pub mod progress;
pub mod recon;
pub mod sort;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{DateError, LoadError, PaginationError, TableError};
