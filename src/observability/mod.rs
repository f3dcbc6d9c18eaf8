//! File-based logging for the plugin.
//!
//! The plugin's stdout is the rendering surface, so `tracing` output is
//! written to a size-rotated file under the Zellij data directory instead:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → bookstand.log
//! ```
//!
//! The log level is controlled by the `trace_level` plugin configuration
//! option (default `"info"`). Files rotate at 5 MB with two backups kept.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
