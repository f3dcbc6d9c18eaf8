//! Detail overlay component renderer.
//!
//! Renders the activated book's detail view in the grid area: title,
//! subtitle, wrapped description, and the cover image URL.

use crate::app::actions::BookDetail;
use crate::ui::helpers::{position_cursor, wrap_text};
use crate::ui::theme::Theme;

/// Left margin for the detail text block.
const DETAIL_MARGIN: usize = 3;

/// Renders the detail overlay starting at the specified row.
///
/// The description is word-wrapped to the pane width and clamped to
/// `max_row` so it never collides with the bottom chrome. Returns the next
/// available row.
pub fn render_detail(
    row: usize,
    detail: &BookDetail,
    theme: &Theme,
    cols: usize,
    max_row: usize,
) -> usize {
    let text_width = cols.saturating_sub(DETAIL_MARGIN * 2);
    let mut current_row = row + 1;

    position_cursor(current_row, DETAIL_MARGIN + 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", detail.title);
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, DETAIL_MARGIN + 1);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", detail.subtitle);
    print!("{}", Theme::reset());
    current_row += 2;

    for line in wrap_text(&detail.description, text_width) {
        if current_row > max_row {
            break;
        }
        position_cursor(current_row, DETAIL_MARGIN + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if current_row + 1 <= max_row {
        current_row += 1;
        position_cursor(current_row, DETAIL_MARGIN + 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("Cover: {}", detail.image);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
