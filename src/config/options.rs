// src/config/options.rs
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Options {
    pub pagination: PaginationOptions,
    pub recon: ReconOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Pages visited before a sweep is aborted.
    pub safety_cap: usize,
    /// How long to wait for the page indicator to change after clicking next.
    pub label_wait: Duration,
    pub poll_interval: Duration,
    /// Class marking the active page indicator in captured markup.
    pub active_marker: String,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            safety_cap: PAGE_SAFETY_CAP,
            label_wait: Duration::from_millis(LABEL_WAIT_MS),
            poll_interval: Duration::from_millis(LABEL_POLL_MS),
            active_marker: s!(ACTIVE_PAGE_MARKER),
        }
    }
}

impl PaginationOptions {
    /// Same cap, no waiting. For surfaces whose label updates synchronously.
    pub fn immediate() -> Self {
        Self {
            label_wait: Duration::ZERO,
            poll_interval: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconOptions {
    /// Name of side A (backend) in report lines.
    pub label_a: String,
    /// Name of side B (rendered view) in report lines.
    pub label_b: String,
    pub key_field: String,
    /// Token format of side A's date fields.
    pub api_date_format: String,
}

impl Default for ReconOptions {
    fn default() -> Self {
        Self {
            label_a: s!(DEFAULT_LABEL_A),
            label_b: s!(DEFAULT_LABEL_B),
            key_field: s!(DEFAULT_KEY_FIELD),
            api_date_format: s!(API_DATE_FORMAT),
        }
    }
}
