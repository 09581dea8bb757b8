// src/config/consts.rs

// Pagination
pub const PAGE_SAFETY_CAP: usize = 100;
pub const LABEL_WAIT_MS: u64 = 5_000;
pub const LABEL_POLL_MS: u64 = 100;

// Captured pages
pub const ACTIVE_PAGE_MARKER: &str = "active";

// Reconciliation
pub const API_DATE_FORMAT: &str = "MM-dd-yyyy HH:mm:ss";
pub const DEFAULT_LABEL_A: &str = "API";
pub const DEFAULT_LABEL_B: &str = "UI";
pub const DEFAULT_KEY_FIELD: &str = "External Id";

// Config file
pub const DEFAULT_CONFIG_FILE: &str = "table_recon.cfg";
