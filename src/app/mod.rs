//! Application layer coordinating state, events, and actions.
//!
//! This module is the core of the plugin: the filter and pagination engines,
//! the session state container, and the event handler that ties them
//! together. It sits between the plugin shim (`main.rs`) and the domain and
//! catalog layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Intent commands emitted by the event handler
//! - [`filter`]: Pure filter engine and criteria construction
//! - [`pager`]: Pure pagination arithmetic
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod pager;
pub mod state;

pub use actions::{Action, BookDetail, SelectorOption};
pub use filter::{FilterCriteria, SelectorChoice};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchField};
pub use state::AppState;
