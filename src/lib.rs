//! Bookstand: a Zellij plugin for browsing a book catalog.
//!
//! Bookstand renders a paginated grid of book previews from a built-in
//! catalog inside a Zellij pane. It provides:
//! - Filtering by title substring, author, and genre via a search panel
//! - Cumulative "show more" pagination with a remaining-count affordance
//! - A detail overlay for the activated book
//! - Day and night themes, plus custom themes from TOML files
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter engine
//! │  - Action emission                                  │  ← Pagination
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Store │
//! │ (ui/)         │   │ (catalog/)    │
//! │ - Rendering   │   │ - Book list   │
//! │ - Theming     │   │ - Lookups     │
//! │ - Components  │   │ - Embedded    │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Book model, errors (domain/)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Env-filtered tracing                             │
//! │  - Rotating file output                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Embedded catalog store with author/genre lookups
//! - [`domain`]: Core domain types (Book, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: File-based tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/bookstand.wasm" {
//!         page_size "12"
//!         theme "night"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Event flow
//!
//! One key press maps to exactly one [`Event`], which [`handle_event`]
//! processes to completion: it mutates [`AppState`] and returns
//! `(should_render, Vec<Action>)`. The actions are the controller's intents
//! — render-replace, render-append, open-detail, apply-theme, and so on —
//! interpreted by the shim and asserted on directly in tests. No event can
//! fail: unknown preview ids, unknown theme names, and stray calls all
//! degrade to no-ops.
//!
//! # Example
//!
//! ```rust
//! use bookstand::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Initialize).unwrap();
//! assert!(should_render);
//! assert!(!actions.is_empty());
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FilterCriteria, InputMode, SearchField};
pub use catalog::Catalog;
pub use domain::{Book, BookstandError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Records revealed per page when the configuration does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records revealed per page. Default: 12. Values below 1 are rejected
    /// at parse time.
    pub page_size: usize,

    /// Built-in theme name to use (`day` or `night`). Ignored if
    /// `theme_file` is set. Default: `day`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Typed values are extracted with fallback
    /// defaults: a missing, unparseable, or zero `page_size` falls back to
    /// [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            page_size,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Loads the theme (from file, name, or default — unknown names and broken
/// files fall back to day) and the embedded catalog, and returns an
/// [`AppState`] ready for event processing with the full catalog matched and
/// one page revealed.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookstand plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(Catalog::embedded(), config.page_size, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_zellij_parses_typed_values() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "6".to_string());
        map.insert("theme".to_string(), "night".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.page_size, 6);
        assert_eq!(config.theme_name.as_deref(), Some("night"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn from_zellij_falls_back_on_bad_page_size() {
        for junk in ["0", "-3", "dozen", ""] {
            let mut map = BTreeMap::new();
            map.insert("page_size".to_string(), junk.to_string());
            assert_eq!(Config::from_zellij(&map).page_size, DEFAULT_PAGE_SIZE);
        }
        assert_eq!(Config::from_zellij(&BTreeMap::new()).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn initialize_honors_the_configured_theme() {
        let config = Config {
            theme_name: Some("night".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "night");
        assert_eq!(state.page_count, 1);
        assert_eq!(state.matches.len(), state.catalog.books().len());
    }

    #[test]
    fn initialize_falls_back_to_day_for_unknown_theme() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "day");
    }
}
