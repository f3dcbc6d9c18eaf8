//! Error types for the Bookstand plugin.
//!
//! This module defines the centralized error type [`BookstandError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! User-facing input paths (search fields, preview ids, theme names) never
//! produce errors — they use permissive fallbacks instead. The variants below
//! cover the startup-time surfaces that can genuinely fail: parsing the
//! embedded catalog document, loading a custom theme file, and plain I/O.

use thiserror::Error;

/// The main error type for Bookstand plugin operations.
#[derive(Debug, Error)]
pub enum BookstandError {
    /// The catalog document could not be parsed.
    ///
    /// Occurs when the embedded (or test-supplied) catalog JSON is malformed
    /// or missing required fields.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme TOML document cannot be read or parsed. Built-in
    /// themes fall back to the default instead of surfacing this.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Bookstand operations.
///
/// This is a type alias for `std::result::Result<T, BookstandError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, BookstandError>;
