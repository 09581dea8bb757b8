// src/domain/mod.rs
//! Concrete record models for the policy listing view and its backend API.

pub mod policy;

pub use policy::{ApiPolicy, PolicyComparator, SubPlan, UiPolicy};
