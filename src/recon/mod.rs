// src/recon/mod.rs
//! Field-by-field reconciliation of two keyed record collections.
//!
//! Side A is the independently retrieved collection (the backend); side B is
//! what the view rendered. Both arrive in an [`Envelope`]. The output is a
//! list of human-readable mismatch lines; an empty list means reconciled.
//! Nothing here fails to signal "not reconciled".

pub mod envelope;
pub mod rules;
pub mod engine;

pub use envelope::Envelope;
pub use rules::{FieldDiff, ListItem, TextRule};
pub use engine::{compare, Keyed, RecordComparator, Reconciler, RowComparator};
