//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: windowed grid rows, header and
//! footer text, the show-more affordance, and whichever panel is open.

use crate::app::actions::BookDetail;
use crate::app::modes::SearchField;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Grid rows to display (already windowed to the pane height).
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Header information.
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// State of the "show more" affordance.
    pub show_more: ShowMoreInfo,

    /// Empty-results message, when the match set is empty.
    pub empty_state: Option<EmptyState>,

    /// Search panel contents, when the panel is open.
    pub search_panel: Option<SearchPanelInfo>,

    /// Settings panel contents, when the panel is open.
    pub settings_panel: Option<SettingsPanelInfo>,

    /// Detail overlay contents, when one is open.
    pub detail: Option<BookDetail>,
}

/// One row of the book grid.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Title, truncated to the column width.
    pub title: String,

    /// Resolved author display name.
    pub author: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Character ranges of the title matching the active title filter,
    /// `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, e.g. `" Bookstand (12 of 15 books) "`.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// State of the "show more" affordance.
#[derive(Debug, Clone)]
pub struct ShowMoreInfo {
    /// Records not yet revealed.
    pub remaining: usize,

    /// False iff `remaining` is 0; a disabled affordance is drawn dimmed.
    pub enabled: bool,
}

/// Empty-results message.
///
/// A UI state, not an error: shown whenever the active filter matches
/// nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search panel contents.
#[derive(Debug, Clone)]
pub struct SearchPanelInfo {
    /// Current title field text.
    pub title_query: String,

    /// Label of the author selector's current position.
    pub author_label: String,

    /// Label of the genre selector's current position.
    pub genre_label: String,

    /// Which field is focused.
    pub focused: SearchField,
}

/// Settings panel contents (theme chooser).
#[derive(Debug, Clone)]
pub struct SettingsPanelInfo {
    /// Available theme names, in display order.
    pub options: Vec<String>,

    /// Index of the option under the cursor.
    pub selected: usize,
}
