// src/log.rs
//
// Thin macro layer over `tracing`. Library code only emits events; the binary
// decides where they go by calling `init`.

/// Environment variable consulted for a filter directive (e.g. `debug`,
/// `table_recon=trace`).
pub const LOG_ENV: &str = "TABLE_RECON_LOG";

/// Target every crate event is emitted under.
pub const TARGET: &str = "table_recon";

/// Install a stderr `fmt` subscriber. `TABLE_RECON_LOG` wins over `level`.
/// A second call is a no-op.
#[cfg(feature = "cli")]
pub fn init(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!(target: $crate::log::TARGET, $($arg)*)
    };
}
