//! Book grid component renderer.
//!
//! Renders the revealed books as a two-column grid with TITLE and AUTHOR
//! columns, plus the "show more" affordance line. Supports selection
//! highlighting and title match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ShowMoreInfo};

/// Width of the TITLE column, including inter-column spacing.
const TITLE_COLUMN_WIDTH: usize = 44;

/// Renders the grid column headers at the specified row.
///
/// Returns the next available row.
pub fn render_grid_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<44} {:<}", "TITLE", "AUTHOR");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all grid rows starting at the specified row.
///
/// Returns the next available row.
pub fn render_grid_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_grid_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single grid row.
///
/// Layout: TITLE (fixed width, left-aligned) then AUTHOR, with the row padded
/// to the full pane width so the selection background covers the whole line.
/// Styling precedence: selection background first, then match highlights,
/// then normal text.
fn render_grid_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.title);
    } else {
        helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    }

    let title_len = item.title.chars().count().min(TITLE_COLUMN_WIDTH);
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len) + 1));

    print!("{}", item.author);

    let line_len = TITLE_COLUMN_WIDTH + 1 + item.author.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the "show more" affordance line.
///
/// Centered, accent-colored while more pages remain, dimmed once everything
/// is revealed (the disabled state). Returns the next available row.
pub fn render_show_more(row: usize, info: &ShowMoreInfo, theme: &Theme, cols: usize) -> usize {
    let label = format!("Show more ({})", info.remaining);
    let label_len = label.chars().count();
    let padding = (cols.saturating_sub(label_len)) / 2;

    position_cursor(row, 1);
    if info.enabled {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", " ".repeat(padding));
    print!("{label}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + label_len)));
    print!("{}", Theme::reset());
    row + 1
}
