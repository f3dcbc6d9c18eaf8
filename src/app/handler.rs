//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user-intent
//! events, translating them into state changes and action sequences. Events
//! arrive one at a time from the plugin shim; each runs to completion before
//! the next is processed, so no locking is involved anywhere.
//!
//! # Event categories
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Browsing**: `ActivatePreview`, `RevealNextPage`, `CloseDetail`
//! - **Search panel**: `OpenSearch`, `NextField`, `PrevField`,
//!   `SelectorNext`, `SelectorPrev`, `Char`, `Backspace`, `SubmitSearch`,
//!   `CancelSearch`
//! - **Settings**: `OpenSettings`, `SubmitSettings`, `CancelSettings`,
//!   `SetTheme`
//! - **Lifecycle**: `Initialize`, `CloseFocus`, `Escape`
//!
//! No event can fail: unmatched ids, unknown theme names, and stray calls
//! all degrade to no-ops by design.

use crate::app::filter::FilterCriteria;
use crate::app::modes::{InputMode, SearchField};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::ui::theme::BUILT_IN_THEMES;

/// Events triggered by user input or the plugin lifecycle.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Resets session state and emits the initial render intents.
    Initialize,
    /// Moves the grid cursor down (browse) or the theme cursor down (settings).
    KeyDown,
    /// Moves the grid cursor up (browse) or the theme cursor up (settings).
    KeyUp,
    /// Closes the plugin pane.
    CloseFocus,
    /// Opens the detail overlay for the book under the cursor.
    ActivatePreview,
    /// Reveals the next page of matches (no-op when none remain).
    RevealNextPage,
    /// Opens the search panel with the title field focused.
    OpenSearch,
    /// Focuses the next search panel field.
    NextField,
    /// Focuses the previous search panel field.
    PrevField,
    /// Cycles the focused selector forward.
    SelectorNext,
    /// Cycles the focused selector backward.
    SelectorPrev,
    /// Appends a character to the title field.
    Char(char),
    /// Removes the last character of the title field.
    Backspace,
    /// Builds criteria from the panel fields and applies the filter.
    SubmitSearch,
    /// Closes the search panel without filtering.
    CancelSearch,
    /// Opens the settings panel (theme chooser).
    OpenSettings,
    /// Applies the theme under the settings cursor and closes the panel.
    SubmitSettings,
    /// Closes the settings panel without applying.
    CancelSettings,
    /// Applies a theme by name (unknown names fall back to day).
    SetTheme(String),
    /// Dismisses the detail overlay.
    CloseDetail,
    /// No-op outside panels; panels map their own Esc to cancel events.
    Escape,
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: the flag tells the plugin runtime
/// whether the UI needs a repaint, the actions are the controller's emitted
/// intents in order.
///
/// # Errors
///
/// Never returns an error today; the `Result` keeps the signature open for
/// fallible transitions without touching every caller.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Initialize => {
            let actions = state.initialize();
            Ok((true, actions))
        }
        Event::KeyDown => match state.input_mode {
            InputMode::Settings => {
                state.settings_down();
                Ok((true, vec![]))
            }
            _ => {
                state.move_selection_down();
                Ok((true, vec![]))
            }
        },
        Event::KeyUp => match state.input_mode {
            InputMode::Settings => {
                state.settings_up();
                Ok((true, vec![]))
            }
            _ => {
                state.move_selection_up();
                Ok((true, vec![]))
            }
        },
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ActivatePreview => {
            let Some(id) = state.selected_book().map(|b| b.id.clone()) else {
                tracing::debug!("no book under cursor");
                return Ok((false, vec![]));
            };
            let actions = state.select_preview(&id);
            Ok((!actions.is_empty(), actions))
        }
        Event::RevealNextPage => {
            let actions = state.reveal_next_page();
            Ok((!actions.is_empty(), actions))
        }
        Event::OpenSearch => {
            tracing::debug!("opening search panel");
            state.input_mode = InputMode::Search(SearchField::Title);
            Ok((true, vec![]))
        }
        Event::NextField => {
            if let InputMode::Search(field) = state.input_mode {
                state.input_mode = InputMode::Search(field.next());
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::PrevField => {
            if let InputMode::Search(field) = state.input_mode {
                state.input_mode = InputMode::Search(field.prev());
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::SelectorNext => {
            if let InputMode::Search(field) = state.input_mode {
                if field != SearchField::Title {
                    state.cycle_selector_next(field);
                    return Ok((true, vec![]));
                }
            }
            Ok((false, vec![]))
        }
        Event::SelectorPrev => {
            if let InputMode::Search(field) = state.input_mode {
                if field != SearchField::Title {
                    state.cycle_selector_prev(field);
                    return Ok((true, vec![]));
                }
            }
            Ok((false, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchField::Title) {
                return Ok((false, vec![]));
            }
            state.title_input.push(*c);
            tracing::trace!(query = %state.title_input, "title input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchField::Title) {
                return Ok((false, vec![]));
            }
            state.title_input.pop();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            // The single permissive construction point: raw form values in,
            // typed criteria out.
            let criteria = FilterCriteria::from_form(
                &state.title_input,
                &state.author_form_value(),
                &state.genre_form_value(),
            );

            let actions = state.apply_filter(&criteria);
            state.input_mode = InputMode::Normal;
            Ok((true, actions))
        }
        Event::CancelSearch => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![Action::CloseSearchPanel]))
        }
        Event::OpenSettings => {
            tracing::debug!("opening settings panel");
            state.settings_cursor = BUILT_IN_THEMES
                .iter()
                .position(|name| *name == state.theme.name)
                .unwrap_or(0);
            state.input_mode = InputMode::Settings;
            Ok((true, vec![]))
        }
        Event::SubmitSettings => {
            if state.input_mode != InputMode::Settings {
                return Ok((false, vec![]));
            }
            let name = BUILT_IN_THEMES
                .get(state.settings_cursor)
                .copied()
                .unwrap_or("day");
            let actions = state.set_theme(name);
            state.input_mode = InputMode::Normal;
            Ok((true, actions))
        }
        Event::CancelSettings => {
            if state.input_mode != InputMode::Settings {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::SetTheme(name) => {
            let actions = state.set_theme(name);
            Ok((true, actions))
        }
        Event::CloseDetail => {
            let actions = state.close_detail();
            Ok((!actions.is_empty(), actions))
        }
        Event::Escape => Ok((false, vec![])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ui::theme::Theme;

    fn five_book_state(page_size: usize) -> AppState {
        let books: Vec<String> = (0..5)
            .map(|i| {
                format!(
                    r#"{{
                        "id": "b{i}",
                        "title": "Book {i}",
                        "author": "a1",
                        "genres": ["g1"],
                        "image": "https://example.com/b{i}.jpg",
                        "published": "1950-01-01T00:00:00+00:00",
                        "description": "Volume {i}."
                    }}"#
                )
            })
            .collect();
        let json = format!(
            r#"{{
                "authors": [{{"id": "a1", "name": "An Author"}}],
                "genres": [{{"id": "g1", "name": "A Genre"}}],
                "books": [{}]
            }}"#,
            books.join(",")
        );
        AppState::new(
            Catalog::from_json_str(&json).unwrap(),
            page_size,
            Theme::default(),
        )
    }

    #[test]
    fn full_reveal_scenario_via_events() {
        let mut st = five_book_state(2);
        handle_event(&mut st, &Event::Initialize).unwrap();

        let (render, actions) = handle_event(&mut st, &Event::RevealNextPage).unwrap();
        assert!(render);
        assert_eq!(actions[0], Action::RenderAppend { start: 2, count: 2 });

        handle_event(&mut st, &Event::RevealNextPage).unwrap();
        assert_eq!(st.page_count, 3);

        let (render, actions) = handle_event(&mut st, &Event::RevealNextPage).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(st.page_count, 3);
    }

    #[test]
    fn search_flow_types_submits_and_closes_the_panel() {
        let mut st = five_book_state(2);
        handle_event(&mut st, &Event::Initialize).unwrap();
        handle_event(&mut st, &Event::RevealNextPage).unwrap();

        handle_event(&mut st, &Event::OpenSearch).unwrap();
        assert_eq!(st.input_mode, InputMode::Search(SearchField::Title));

        for c in "book 3".chars() {
            handle_event(&mut st, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(&mut st, &Event::SubmitSearch).unwrap();

        assert_eq!(st.input_mode, InputMode::Normal);
        assert_eq!(st.matches.len(), 1);
        assert_eq!(st.page_count, 1);
        assert!(actions.contains(&Action::CloseSearchPanel));
        assert!(actions.contains(&Action::ScrollToTop));
    }

    #[test]
    fn selector_events_only_apply_to_selector_fields() {
        let mut st = five_book_state(2);
        handle_event(&mut st, &Event::OpenSearch).unwrap();

        let (render, _) = handle_event(&mut st, &Event::SelectorNext).unwrap();
        assert!(!render);
        assert_eq!(st.author_cursor, 0);

        handle_event(&mut st, &Event::NextField).unwrap();
        assert_eq!(st.input_mode, InputMode::Search(SearchField::Author));
        handle_event(&mut st, &Event::SelectorNext).unwrap();
        assert_eq!(st.author_form_value(), "a1");
    }

    #[test]
    fn typing_outside_the_title_field_is_ignored() {
        let mut st = five_book_state(2);
        let (render, _) = handle_event(&mut st, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(st.title_input.is_empty());

        handle_event(&mut st, &Event::OpenSearch).unwrap();
        handle_event(&mut st, &Event::NextField).unwrap();
        handle_event(&mut st, &Event::Char('x')).unwrap();
        assert!(st.title_input.is_empty());
    }

    #[test]
    fn enter_opens_detail_and_escape_path_closes_it() {
        let mut st = five_book_state(2);
        handle_event(&mut st, &Event::Initialize).unwrap();
        handle_event(&mut st, &Event::KeyDown).unwrap();

        let (_, actions) = handle_event(&mut st, &Event::ActivatePreview).unwrap();
        assert_eq!(st.input_mode, InputMode::Detail);
        assert!(matches!(actions[0], Action::OpenDetail(_)));

        let (_, actions) = handle_event(&mut st, &Event::CloseDetail).unwrap();
        assert_eq!(actions, vec![Action::CloseDetail]);
        assert_eq!(st.input_mode, InputMode::Normal);

        let (render, actions) = handle_event(&mut st, &Event::CloseDetail).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn settings_flow_applies_the_chosen_theme() {
        let mut st = five_book_state(2);
        handle_event(&mut st, &Event::OpenSettings).unwrap();
        assert_eq!(st.input_mode, InputMode::Settings);
        assert_eq!(st.settings_cursor, 0);

        handle_event(&mut st, &Event::KeyDown).unwrap();
        let (_, actions) = handle_event(&mut st, &Event::SubmitSettings).unwrap();

        assert_eq!(st.theme.name, "night");
        assert_eq!(
            actions,
            vec![Action::ApplyTheme {
                name: "night".to_string()
            }]
        );
        assert_eq!(st.input_mode, InputMode::Normal);
    }

    #[test]
    fn stray_panel_events_outside_their_mode_are_no_ops() {
        let mut st = five_book_state(2);
        for event in [
            Event::SubmitSearch,
            Event::CancelSearch,
            Event::SubmitSettings,
            Event::CancelSettings,
            Event::NextField,
            Event::Backspace,
        ] {
            let (render, actions) = handle_event(&mut st, &event).unwrap();
            assert!(!render, "{event:?} should not render");
            assert!(actions.is_empty(), "{event:?} should emit nothing");
        }
        assert_eq!(st.input_mode, InputMode::Normal);
    }
}
