//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with an env-filtered `fmt` layer whose
//! output goes to a rotating file. Stdout is the rendering surface, so logs
//! must never touch it.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with rotating-file output.
///
/// The filter directive comes from `config.trace_level` (default `"info"`).
/// Log lines are written without ANSI styling to
/// `<data dir>/bookstand.log`, rotated by size.
///
/// Silently does nothing if the data directory cannot be created —
/// observability is optional and must never take the plugin down. Idempotent:
/// only the first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join("bookstand.log"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(move || writer.clone());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
