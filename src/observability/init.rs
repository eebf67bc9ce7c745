//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "marquee.log";

/// Default filter directive when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with rotating file output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by `RUST_LOG`, else the configured trace level
/// 2. Formats them as plain text lines (no ANSI colors)
/// 3. Writes to `<data_dir>/marquee.log`, rotated at 10 MB with 3 backups
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```rust,no_run
/// use marquee::observability::init_tracing;
/// use marquee::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = Arc::new(FileWriter::new(config.data_dir.join(LOG_FILE_NAME)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
