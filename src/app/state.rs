//! Application state and view model computation.
//!
//! This module defines [`AppState`], the single owner of all mutable session
//! state: the current match set, the revealed page count, the grid selection,
//! the search/settings form state, and the active theme. The controller
//! operations (`initialize`, `apply_filter`, `reveal_next_page`,
//! `select_preview`, `set_theme`) live here as methods that mutate state and
//! return the [`Action`] intents the transition produced.
//!
//! # State components
//!
//! - **Catalog**: immutable book list and lookup tables, read-only
//! - **Matches**: ordered result of the last filter application
//! - **Page count**: number of pages revealed so far (always ≥ 1)
//! - **Selection**: cursor position within the revealed window
//! - **Form state**: search panel fields and settings cursor
//!
//! Invariants: `page_count >= 1`; the number of rendered records equals
//! `min(matches.len(), page_count * page_size)`; `matches` is always an
//! order-preserving subsequence of the catalog.

use crate::app::actions::{Action, BookDetail, SelectorOption};
use crate::app::filter::{self, FilterCriteria};
use crate::app::modes::{InputMode, SearchField};
use crate::app::pager;
use crate::catalog::Catalog;
use crate::domain::Book;
use crate::ui::theme::{Theme, BUILT_IN_THEMES};
use crate::ui::viewmodel;

/// Width of the TITLE column in the grid.
const TITLE_COLUMN_WIDTH: usize = 44;

/// Sentinel label for the author selector.
const ALL_AUTHORS_LABEL: &str = "All Authors";

/// Sentinel label for the genre selector.
const ALL_GENRES_LABEL: &str = "All Genres";

/// Central application state container.
///
/// Mutated only by the event handler in response to user input; view models
/// are computed on demand from state snapshots. There is exactly one writer
/// at a time by construction (the plugin's single-threaded event dispatch).
#[derive(Debug, Clone)]
pub struct AppState {
    /// The immutable catalog: books plus author/genre tables.
    pub catalog: Catalog,

    /// Records revealed per page. Fixed at startup, always ≥ 1.
    pub page_size: usize,

    /// Result of the last filter application, in catalog order.
    ///
    /// Initialized to the full catalog. Always an order-preserving
    /// subsequence of it.
    pub matches: Vec<Book>,

    /// Number of pages revealed so far. Reset to 1 on every filter.
    pub page_count: usize,

    /// Zero-based cursor within the revealed window.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Search panel: title field contents (kept across submissions, like a
    /// form that retains its values).
    pub title_input: String,

    /// Search panel: author selector cursor. 0 is the "All Authors" sentinel;
    /// `n` is entry `n - 1` of the author table.
    pub author_cursor: usize,

    /// Search panel: genre selector cursor, same convention.
    pub genre_cursor: usize,

    /// Settings panel: cursor into [`BUILT_IN_THEMES`].
    pub settings_cursor: usize,

    /// The title query of the last applied filter. Drives match highlighting
    /// in the grid; empty when no title filter is active.
    pub active_title_query: String,

    /// Detail overlay contents, when one is open.
    ///
    /// Recomputed by catalog lookup on every activation, never carried over.
    pub detail: Option<BookDetail>,

    /// Active color theme.
    pub theme: Theme,
}

impl AppState {
    /// Creates application state over a catalog.
    ///
    /// Matches start as the full catalog in its original order with one page
    /// revealed. `page_size` is clamped to at least 1.
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize, theme: Theme) -> Self {
        let matches = catalog.books().to_vec();
        Self {
            catalog,
            page_size: page_size.max(1),
            matches,
            page_count: 1,
            selected_index: 0,
            input_mode: InputMode::Normal,
            title_input: String::new(),
            author_cursor: 0,
            genre_cursor: 0,
            settings_cursor: 0,
            active_title_query: String::new(),
            detail: None,
            theme,
        }
    }

    // ----- controller operations -------------------------------------------

    /// Resets session state and returns the initial render intents.
    ///
    /// Emits selector population (sentinel entry first, then table order),
    /// a full render of the first page, and a show-more update.
    pub fn initialize(&mut self) -> Vec<Action> {
        let _span = tracing::debug_span!("initialize", book_count = self.catalog.books().len()).entered();

        self.matches = self.catalog.books().to_vec();
        self.page_count = 1;
        self.selected_index = 0;
        self.active_title_query = String::new();
        self.detail = None;

        vec![
            Action::PopulateSelectors {
                authors: self.author_options(),
                genres: self.genre_options(),
            },
            Action::RenderReplace {
                count: self.visible_books().len(),
            },
            self.show_more_action(),
        ]
    }

    /// Applies a new filter: recomputes matches and resets pagination.
    ///
    /// `page_count` goes back to 1 regardless of how many pages were revealed
    /// before. Emits a full replace, the empty indicator, the show-more
    /// update, and the scroll-to-top / close-panel intents.
    pub fn apply_filter(&mut self, criteria: &FilterCriteria) -> Vec<Action> {
        let _span = tracing::debug_span!(
            "apply_filter",
            title_query = %criteria.title_query,
            total_books = self.catalog.books().len(),
        )
        .entered();

        self.matches = filter::filter(self.catalog.books(), criteria);
        self.page_count = 1;
        self.selected_index = 0;
        self.active_title_query = criteria.title_query.clone();

        tracing::debug!(match_count = self.matches.len(), "filter applied");

        vec![
            Action::RenderReplace {
                count: self.visible_books().len(),
            },
            Action::SetEmptyIndicator {
                shown: self.matches.is_empty(),
            },
            self.show_more_action(),
            Action::ScrollToTop,
            Action::CloseSearchPanel,
        ]
    }

    /// Reveals the next page of matches.
    ///
    /// No-op when nothing remains: the affordance should be disabled then,
    /// but a stray call is tolerated rather than treated as an error.
    pub fn reveal_next_page(&mut self) -> Vec<Action> {
        if self.remaining() == 0 {
            tracing::debug!("reveal requested with nothing left to show");
            return vec![];
        }

        let start = self.page_count.saturating_mul(self.page_size);
        let count = pager::next_page_slice(&self.matches, self.page_size, self.page_count).len();
        self.page_count += 1;

        tracing::debug!(start, count, page_count = self.page_count, "page revealed");

        vec![Action::RenderAppend { start, count }, self.show_more_action()]
    }

    /// Opens the detail overlay for the book with the given id.
    ///
    /// Looks the id up in the full catalog (first match in catalog order).
    /// An unknown id is a silent no-op: state stays untouched and nothing is
    /// emitted.
    pub fn select_preview(&mut self, id: &str) -> Vec<Action> {
        let Some(book) = self.catalog.find_by_id(id) else {
            tracing::debug!(id = %id, "preview id not in catalog");
            return vec![];
        };

        let detail = BookDetail {
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: self.catalog.subtitle_for(book),
            description: book.description.clone(),
        };

        tracing::debug!(id = %id, title = %detail.title, "preview activated");

        self.detail = Some(detail.clone());
        self.input_mode = InputMode::Detail;
        vec![Action::OpenDetail(detail)]
    }

    /// Applies a theme by name, falling back to "day" for unknown names.
    pub fn set_theme(&mut self, name: &str) -> Vec<Action> {
        self.theme = Theme::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme name, falling back to day");
            Theme::default()
        });

        tracing::debug!(theme = %self.theme.name, "theme applied");
        vec![Action::ApplyTheme {
            name: self.theme.name.clone(),
        }]
    }

    /// Dismisses the detail overlay, if one is open.
    pub fn close_detail(&mut self) -> Vec<Action> {
        if self.detail.take().is_some() {
            self.input_mode = InputMode::Normal;
            vec![Action::CloseDetail]
        } else {
            vec![]
        }
    }

    // ----- derived state ---------------------------------------------------

    /// The records currently revealed.
    #[must_use]
    pub fn visible_books(&self) -> &[Book] {
        pager::visible_slice(&self.matches, self.page_size, self.page_count)
    }

    /// Records not yet revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        pager::remaining_count(&self.matches, self.page_size, self.page_count)
    }

    /// The book under the grid cursor, if any.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.visible_books().get(self.selected_index)
    }

    fn show_more_action(&self) -> Action {
        let remaining = self.remaining();
        Action::UpdateShowMore {
            remaining,
            enabled: remaining > 0,
        }
    }

    // ----- selection and form movement -------------------------------------

    /// Moves the grid cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_books().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the grid cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_books().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Cycles the focused selector forward (search panel).
    pub fn cycle_selector_next(&mut self, field: SearchField) {
        match field {
            SearchField::Author => {
                let count = self.catalog.authors().len() + 1;
                self.author_cursor = (self.author_cursor + 1) % count;
            }
            SearchField::Genre => {
                let count = self.catalog.genres().len() + 1;
                self.genre_cursor = (self.genre_cursor + 1) % count;
            }
            SearchField::Title => {}
        }
    }

    /// Cycles the focused selector backward (search panel).
    pub fn cycle_selector_prev(&mut self, field: SearchField) {
        match field {
            SearchField::Author => {
                let count = self.catalog.authors().len() + 1;
                self.author_cursor = (self.author_cursor + count - 1) % count;
            }
            SearchField::Genre => {
                let count = self.catalog.genres().len() + 1;
                self.genre_cursor = (self.genre_cursor + count - 1) % count;
            }
            SearchField::Title => {}
        }
    }

    /// Moves the settings cursor down, wrapping.
    pub fn settings_down(&mut self) {
        self.settings_cursor = (self.settings_cursor + 1) % BUILT_IN_THEMES.len();
    }

    /// Moves the settings cursor up, wrapping.
    pub fn settings_up(&mut self) {
        let count = BUILT_IN_THEMES.len();
        self.settings_cursor = (self.settings_cursor + count - 1) % count;
    }

    // ----- form values -----------------------------------------------------

    /// Selector option list for the author table, sentinel entry first.
    #[must_use]
    pub fn author_options(&self) -> Vec<SelectorOption> {
        let mut options = vec![SelectorOption {
            value: "any".to_string(),
            label: ALL_AUTHORS_LABEL.to_string(),
        }];
        options.extend(self.catalog.authors().iter().map(|e| SelectorOption {
            value: e.id.clone(),
            label: e.name.clone(),
        }));
        options
    }

    /// Selector option list for the genre table, sentinel entry first.
    #[must_use]
    pub fn genre_options(&self) -> Vec<SelectorOption> {
        let mut options = vec![SelectorOption {
            value: "any".to_string(),
            label: ALL_GENRES_LABEL.to_string(),
        }];
        options.extend(self.catalog.genres().iter().map(|e| SelectorOption {
            value: e.id.clone(),
            label: e.name.clone(),
        }));
        options
    }

    /// Display label for the author selector's current position.
    #[must_use]
    pub fn author_label(&self) -> String {
        if self.author_cursor == 0 {
            ALL_AUTHORS_LABEL.to_string()
        } else {
            self.catalog.authors()[self.author_cursor - 1].name.clone()
        }
    }

    /// Display label for the genre selector's current position.
    #[must_use]
    pub fn genre_label(&self) -> String {
        if self.genre_cursor == 0 {
            ALL_GENRES_LABEL.to_string()
        } else {
            self.catalog.genres()[self.genre_cursor - 1].name.clone()
        }
    }

    /// Form value for the author selector (`"any"` or an author id).
    #[must_use]
    pub fn author_form_value(&self) -> String {
        if self.author_cursor == 0 {
            "any".to_string()
        } else {
            self.catalog.authors()[self.author_cursor - 1].id.clone()
        }
    }

    /// Form value for the genre selector (`"any"` or a genre id).
    #[must_use]
    pub fn genre_form_value(&self) -> String {
        if self.genre_cursor == 0 {
            "any".to_string()
        } else {
            self.catalog.genres()[self.genre_cursor - 1].id.clone()
        }
    }

    // ----- view model computation ------------------------------------------

    /// Computes a renderable view model for the given pane dimensions.
    ///
    /// The revealed list is windowed around the selection so it fits the pane
    /// height; windowing affects only what is drawn, never which records
    /// count as revealed.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> viewmodel::UIViewModel {
        let visible = self.visible_books();
        let available_rows = self.calculate_available_rows(rows);

        let mut window_start = self.selected_index.saturating_sub(available_rows / 2);
        let window_end = (window_start + available_rows).min(visible.len());
        let actual_count = window_end - window_start;
        if actual_count < available_rows && visible.len() >= available_rows {
            window_start = window_end.saturating_sub(available_rows);
        }

        let display_items: Vec<viewmodel::DisplayItem> = visible[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                self.compute_display_item(book, window_start + relative_idx, cols)
            })
            .collect();

        let remaining = self.remaining();

        viewmodel::UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(window_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            show_more: viewmodel::ShowMoreInfo {
                remaining,
                enabled: remaining > 0,
            },
            empty_state: if self.matches.is_empty() {
                Some(viewmodel::EmptyState {
                    message: "No results found".to_string(),
                    subtitle: "Your filters might be too narrow".to_string(),
                })
            } else {
                None
            },
            search_panel: match self.input_mode {
                InputMode::Search(field) => Some(viewmodel::SearchPanelInfo {
                    title_query: self.title_input.clone(),
                    author_label: self.author_label(),
                    genre_label: self.genre_label(),
                    focused: field,
                }),
                _ => None,
            },
            settings_panel: if self.input_mode == InputMode::Settings {
                Some(viewmodel::SettingsPanelInfo {
                    options: BUILT_IN_THEMES.iter().map(ToString::to_string).collect(),
                    selected: self.settings_cursor,
                })
            } else {
                None
            },
            detail: self.detail.clone(),
        }
    }

    fn compute_display_item(
        &self,
        book: &Book,
        absolute_idx: usize,
        cols: usize,
    ) -> viewmodel::DisplayItem {
        const SAFETY_MARGIN: usize = 2;

        let title: String = if book.title.chars().count() > TITLE_COLUMN_WIDTH - 2 {
            let kept: String = book.title.chars().take(TITLE_COLUMN_WIDTH - 5).collect();
            format!("{kept}...")
        } else {
            book.title.clone()
        };

        let highlight_ranges = substring_match_ranges(&title, &self.active_title_query);

        let max_author_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + SAFETY_MARGIN);
        let author = self.catalog.author_name(&book.author).unwrap_or("Unknown");
        let author = if author.chars().count() > max_author_width {
            author.chars().take(max_author_width).collect()
        } else {
            author.to_string()
        };

        viewmodel::DisplayItem {
            title,
            author,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> viewmodel::HeaderInfo {
        let total = self.catalog.books().len();
        let matched = self.matches.len();
        let title = if matched == total {
            format!(" Bookstand ({total} books) ")
        } else {
            format!(" Bookstand ({matched} of {total} books) ")
        };
        viewmodel::HeaderInfo { title }
    }

    fn compute_footer(&self) -> viewmodel::FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: navigate  Enter: open  m: show more  /: search  t: theme  q: quit".to_string()
            }
            InputMode::Search(SearchField::Title) => {
                "Type to edit title  Tab: next field  Enter: apply  Esc: cancel".to_string()
            }
            InputMode::Search(_) => {
                "Left/Right: change selection  Tab: next field  Enter: apply  Esc: cancel".to_string()
            }
            InputMode::Settings => "j/k: choose theme  Enter: apply  Esc: cancel".to_string(),
            InputMode::Detail => "Esc: close".to_string(),
        };
        viewmodel::FooterInfo { keybindings }
    }

    /// Rows left for grid items after subtracting UI chrome.
    ///
    /// Chrome is 7 rows in browse mode (blank, header, border, column
    /// headers, show-more line, border, footer); the search panel adds 5 and
    /// the settings panel 4.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal | InputMode::Detail => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(12),
            InputMode::Settings => total_rows.saturating_sub(11),
        }
    }
}

/// Finds all non-overlapping case-insensitive occurrences of `query` in
/// `text`, as `(start, end)` character index ranges.
///
/// Case folding is per-character, which keeps indices aligned between the
/// folded and original text.
#[must_use]
pub fn substring_match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    fn fold(s: &str) -> Vec<char> {
        s.chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect()
    }

    let needle = fold(query);
    if needle.is_empty() {
        return vec![];
    }
    let hay = fold(text);

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::FilterCriteria;

    fn catalog(n: usize) -> Catalog {
        let books: Vec<String> = (0..n)
            .map(|i| {
                format!(
                    r#"{{
                        "id": "b{i}",
                        "title": "Book {i}",
                        "author": "a1",
                        "genres": ["g1"],
                        "image": "https://example.com/b{i}.jpg",
                        "published": "19{:02}-01-01T00:00:00+00:00",
                        "description": "Volume {i}."
                    }}"#,
                    i + 1
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
        Catalog::from_json_str(&json).unwrap()
    }

    fn state(n: usize, page_size: usize) -> AppState {
        AppState::new(catalog(n), page_size, Theme::default())
    }

    #[test]
    fn initialize_reveals_first_page_and_populates_selectors() {
        let mut st = state(5, 2);
        let actions = st.initialize();

        assert_eq!(st.page_count, 1);
        assert_eq!(st.visible_books().len(), 2);

        match &actions[0] {
            Action::PopulateSelectors { authors, genres } => {
                assert_eq!(authors[0].value, "any");
                assert_eq!(authors[0].label, "All Authors");
                assert_eq!(authors[1].value, "a1");
                assert_eq!(genres[0].label, "All Genres");
            }
            other => panic!("expected PopulateSelectors, got {other:?}"),
        }
        assert_eq!(actions[1], Action::RenderReplace { count: 2 });
        assert_eq!(
            actions[2],
            Action::UpdateShowMore {
                remaining: 3,
                enabled: true
            }
        );
    }

    #[test]
    fn reveal_walks_pages_then_becomes_a_no_op() {
        let mut st = state(5, 2);

        let first = st.reveal_next_page();
        assert_eq!(st.page_count, 2);
        assert_eq!(first[0], Action::RenderAppend { start: 2, count: 2 });
        assert_eq!(
            first[1],
            Action::UpdateShowMore {
                remaining: 1,
                enabled: true
            }
        );

        let second = st.reveal_next_page();
        assert_eq!(st.page_count, 3);
        assert_eq!(second[0], Action::RenderAppend { start: 4, count: 1 });
        assert_eq!(
            second[1],
            Action::UpdateShowMore {
                remaining: 0,
                enabled: false
            }
        );

        let third = st.reveal_next_page();
        assert!(third.is_empty());
        assert_eq!(st.page_count, 3);
        assert_eq!(st.visible_books().len(), 5);
    }

    #[test]
    fn apply_filter_always_resets_page_count() {
        let mut st = state(10, 2);
        st.reveal_next_page();
        st.reveal_next_page();
        assert_eq!(st.page_count, 3);

        let actions = st.apply_filter(&FilterCriteria::match_all());
        assert_eq!(st.page_count, 1);
        assert_eq!(st.matches.len(), 10);
        assert_eq!(actions[0], Action::RenderReplace { count: 2 });
        assert!(actions.contains(&Action::ScrollToTop));
        assert!(actions.contains(&Action::CloseSearchPanel));
    }

    #[test]
    fn filter_hit_and_miss_drive_the_empty_indicator() {
        let mut st = AppState::new(
            Catalog::from_json_str(
                r#"{
                    "authors": [{"id": "a1", "name": "Frank Herbert"}],
                    "genres": [{"id": "g1", "name": "Science Fiction"}],
                    "books": [{
                        "id": "b1",
                        "title": "Dune",
                        "author": "a1",
                        "genres": ["g1"],
                        "image": "https://example.com/b1.jpg",
                        "published": "1965-08-01T00:00:00+00:00",
                        "description": "Spice."
                    }]
                }"#,
            )
            .unwrap(),
            4,
            Theme::default(),
        );

        let hit = st.apply_filter(&FilterCriteria::from_form("dune", "any", "any"));
        assert_eq!(st.matches.len(), 1);
        assert!(hit.contains(&Action::SetEmptyIndicator { shown: false }));

        let miss = st.apply_filter(&FilterCriteria::from_form("galaxy", "any", "any"));
        assert!(st.matches.is_empty());
        assert!(miss.contains(&Action::SetEmptyIndicator { shown: true }));
        assert_eq!(
            miss[0],
            Action::RenderReplace { count: 0 },
        );
    }

    #[test]
    fn select_preview_of_unknown_id_changes_nothing() {
        let mut st = state(3, 2);
        let before_matches = st.matches.clone();
        let before_pages = st.page_count;

        let actions = st.select_preview("nonexistent-id");

        assert!(actions.is_empty());
        assert!(st.detail.is_none());
        assert_eq!(st.input_mode, InputMode::Normal);
        assert_eq!(st.matches, before_matches);
        assert_eq!(st.page_count, before_pages);
    }

    #[test]
    fn select_preview_opens_detail_with_subtitle() {
        let mut st = state(3, 2);
        let actions = st.select_preview("b1");

        assert_eq!(st.input_mode, InputMode::Detail);
        match &actions[0] {
            Action::OpenDetail(detail) => {
                assert_eq!(detail.title, "Book 1");
                assert_eq!(detail.subtitle, "An Author (1902)");
            }
            other => panic!("expected OpenDetail, got {other:?}"),
        }

        let closed = st.close_detail();
        assert_eq!(closed, vec![Action::CloseDetail]);
        assert_eq!(st.input_mode, InputMode::Normal);
        assert!(st.close_detail().is_empty());
    }

    #[test]
    fn unknown_theme_name_falls_back_to_day() {
        let mut st = state(1, 2);
        let actions = st.set_theme("solarized");
        assert_eq!(st.theme.name, "day");
        assert_eq!(
            actions,
            vec![Action::ApplyTheme {
                name: "day".to_string()
            }]
        );

        st.set_theme("night");
        assert_eq!(st.theme.name, "night");
    }

    #[test]
    fn selection_wraps_within_the_revealed_window() {
        let mut st = state(5, 2);
        assert_eq!(st.visible_books().len(), 2);

        st.move_selection_down();
        assert_eq!(st.selected_index, 1);
        st.move_selection_down();
        assert_eq!(st.selected_index, 0);
        st.move_selection_up();
        assert_eq!(st.selected_index, 1);
    }

    #[test]
    fn selector_cycling_covers_sentinel_and_entries() {
        let mut st = state(1, 2);
        assert_eq!(st.author_form_value(), "any");

        st.cycle_selector_next(SearchField::Author);
        assert_eq!(st.author_form_value(), "a1");
        assert_eq!(st.author_label(), "An Author");

        st.cycle_selector_next(SearchField::Author);
        assert_eq!(st.author_form_value(), "any");

        st.cycle_selector_prev(SearchField::Genre);
        assert_eq!(st.genre_form_value(), "g1");
    }

    #[test]
    fn viewmodel_windows_around_the_selection() {
        let mut st = state(30, 30);
        for _ in 0..15 {
            st.move_selection_down();
        }
        let vm = st.compute_viewmodel(17, 80);

        // 17 rows minus 7 rows of chrome leaves a 10-row window.
        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_reports_empty_state_when_no_matches() {
        let mut st = state(3, 2);
        st.apply_filter(&FilterCriteria::from_form("zzz", "any", "any"));
        let vm = st.compute_viewmodel(24, 80);

        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(!vm.show_more.enabled);
    }

    #[test]
    fn substring_ranges_are_case_insensitive_and_non_overlapping() {
        assert_eq!(substring_match_ranges("Dune", "dune"), vec![(0, 4)]);
        assert_eq!(substring_match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
        assert!(substring_match_ranges("Dune", "").is_empty());
        assert!(substring_match_ranges("Dune", "messiah").is_empty());
    }
}
