// src/dates/mod.rs
//! Date handling for sort checks and cross-side comparison.
//!
//! - [`tokenizer`] is the strict, format-driven grammar (`yyyy`, `MM`, `MMM`,
//!   `dd`, `HH`, `mm`, `ss`, `s`). Backend values with a known wire format go
//!   through it.
//! - [`host`] is the lenient parser for whatever a rendered view displays.
//!   Sort validation and reconciliation both use this one parser.

pub mod tokenizer;
pub mod host;

pub use tokenizer::{DateValue, parse, format, sort_newest_to_oldest, sort_oldest_to_newest};
pub use host::parse_lenient;
