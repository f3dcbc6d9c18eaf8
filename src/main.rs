//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Bookstand library
//! and the Zellij plugin system: it implements the `ZellijPlugin` trait,
//! maps key events to library events by input mode, and interprets the
//! actions the handler emits. All logic lives in the library; the shim only
//! translates.
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open the selected book's detail view
//! - `m`: Show more (reveal the next page)
//! - `/`: Open the search panel
//! - `t`: Open the theme settings
//! - `q`: Close the plugin pane
//!
//! Search panel:
//! - `Tab`/`Down`: Next field, `Shift+Tab`/`Up`: previous field
//! - `Left`/`Right`: Cycle the focused selector
//! - Characters/`Backspace`: Edit the title field
//! - `Enter`: Apply filters, `Esc`: cancel
//!
//! Settings panel:
//! - `j`/`k`: Choose theme, `Enter`: apply, `Esc`: cancel
//!
//! Detail view:
//! - `Esc`/`Enter`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookstand::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState`; there is nothing host-side to track
/// beyond it (no workers, no storage, no permissions).
struct State {
    /// Core application state from the library layer.
    app: bookstand::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: bookstand::initialize(&default_config),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, creates the application
    /// state, subscribes to key events, and runs the `Initialize` event so
    /// the first frame carries the initial render intents.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookstand::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(page_size = config.page_size, "parsed configuration");
        self.app = bookstand::initialize(&config);

        subscribe(&[EventType::Key]);

        match handle_event(&mut self.app, &Event::Initialize) {
            Ok((_, actions)) => {
                for a in actions {
                    self.execute_action(&a);
                }
            }
            Err(e) => tracing::debug!(error = %e, "initialize failed"),
        }

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates key events to library events, delegates to `handle_event`,
    /// and executes the resulting actions. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update");
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI by delegating to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        bookstand::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events based on the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.input_mode {
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::ActivatePreview,
                BareKey::Char('m') => Event::RevealNextPage,
                BareKey::Char('/') => Event::OpenSearch,
                BareKey::Char('t') => Event::OpenSettings,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Esc => Event::Escape,
                _ => return None,
            }),
            InputMode::Search(_) => Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Up => Event::PrevField,
                BareKey::Left => Event::SelectorPrev,
                BareKey::Right => Event::SelectorNext,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::CancelSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Settings => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::SubmitSettings,
                BareKey::Esc | BareKey::Char('q') => Event::CancelSettings,
                _ => return None,
            }),
            InputMode::Detail => Some(match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Event::CloseDetail,
                _ => return None,
            }),
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Rendering intents need no host-side work — the renderer draws from
    /// the same state the transition produced — so only pane control touches
    /// the Zellij API. Intents are logged for traceability.
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::RenderReplace { count } => {
                tracing::debug!(count = count, "render: replace list");
            }
            Action::RenderAppend { start, count } => {
                tracing::debug!(start = start, count = count, "render: append to list");
            }
            Action::UpdateShowMore { remaining, enabled } => {
                tracing::debug!(remaining = remaining, enabled = enabled, "render: show-more state");
            }
            Action::SetEmptyIndicator { shown } => {
                tracing::debug!(shown = shown, "render: empty indicator");
            }
            Action::PopulateSelectors { authors, genres } => {
                tracing::debug!(
                    author_options = authors.len(),
                    genre_options = genres.len(),
                    "render: selectors populated"
                );
            }
            Action::OpenDetail(detail) => {
                tracing::debug!(title = %detail.title, "render: detail opened");
            }
            Action::CloseDetail => {
                tracing::debug!("render: detail closed");
            }
            Action::ApplyTheme { name } => {
                tracing::debug!(theme = %name, "render: theme applied");
            }
            Action::ScrollToTop => {
                tracing::debug!("render: scroll to top");
            }
            Action::CloseSearchPanel => {
                tracing::debug!("render: search panel closed");
            }
        }
    }
}
