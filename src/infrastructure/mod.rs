//! Infrastructure utilities for the Zellij plugin sandbox.
//!
//! # Organization
//!
//! - [`paths`]: Data directory location inside the sandbox

pub mod paths;

pub use paths::get_data_dir;
