//! Composable UI component renderers.
//!
//! Each component renders one part of the interface; this module composes
//! them into the four full-pane layouts, one per input mode.
//!
//! # Components
//!
//! - [`header`]: title bar
//! - [`footer`]: keybinding hints
//! - [`grid`]: book list with TITLE/AUTHOR columns and the show-more line
//! - [`search`]: three-field search panel
//! - [`settings`]: theme chooser panel
//! - [`detail`]: activated book overlay
//! - [`empty`]: empty-results message
//!
//! # Layout modes
//!
//! - [`render_browse_mode`]: header + grid + footer
//! - [`render_search_mode`]: header + search panel + grid + footer
//! - [`render_settings_mode`]: header + settings panel + grid + footer
//! - [`render_detail_mode`]: header + detail + footer

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod search;
mod settings;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use grid::{render_grid_headers, render_grid_rows, render_show_more};
use header::render_header;
use search::render_search_panel;
use settings::render_settings_panel;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the bottom chrome shared by every mode: the show-more line, a
/// border, and the footer, pinned to the last three rows of the pane.
fn render_bottom_chrome(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let show_more_row = border_row.saturating_sub(1);

    render_show_more(show_more_row, &vm.show_more, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the grid area: column headers plus rows, or the empty state.
fn render_grid_area(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        render_empty_state(row, empty, theme, cols);
        return;
    }

    let next = render_grid_headers(row, theme);
    let _ = render_grid_rows(next, &vm.display_items, theme, cols);
}

/// Renders the default browsing layout.
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_grid_area(current_row, vm, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the layout with the search panel open above the grid.
pub fn render_search_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let Some(panel) = &vm.search_panel else {
        return render_browse_mode(vm, theme, cols, rows);
    };

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_panel(current_row, panel, theme, cols);
    render_grid_area(current_row, vm, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the layout with the settings panel open above the grid.
pub fn render_settings_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let Some(panel) = &vm.settings_panel else {
        return render_browse_mode(vm, theme, cols, rows);
    };

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_settings_panel(current_row, panel, theme, cols);
    render_grid_area(current_row, vm, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the detail overlay layout (grid hidden).
pub fn render_detail_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let Some(book_detail) = &vm.detail else {
        return render_browse_mode(vm, theme, cols, rows);
    };

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let max_row = rows.saturating_sub(4);
    let _ = render_detail(current_row, book_detail, theme, cols, max_row);

    render_bottom_chrome(vm, theme, cols, rows);
}
