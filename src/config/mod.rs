// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod file;

pub use options::{Options, PaginationOptions, ReconOptions};
