//! Console logging: a small [`Logger`] facade emitting through
//! [`tracing`], plus subscriber setup.
//!
//! Messages go to stderr via a compact `tracing-subscriber` formatter.
//! Verbosity comes from the CLI (`--verbose`); the `TOPGEN_LOG`
//! environment variable overrides the filter for debugging.

use tracing_subscriber::EnvFilter;

/// Structured logger with dry-run awareness.
///
/// All methods delegate to `tracing` events, so output honors whatever
/// subscriber [`init_subscriber`] installed. Command handlers receive a
/// `&Logger` rather than calling the macros directly, keeping the output
/// surface in one place.
#[derive(Debug, Default)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!("==> {msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!("[dry-run] {msg}");
    }
}

/// Install the global console subscriber.
///
/// `--verbose` lowers the default filter from `info` to `debug`; the
/// `TOPGEN_LOG` environment variable takes precedence over both.
/// Installing twice is harmless (the second call is a no-op).
pub fn init_subscriber(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env("TOPGEN_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
