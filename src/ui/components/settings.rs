//! Settings panel component renderer.
//!
//! Renders the theme chooser: one line per built-in theme inside a bordered
//! box, with the cursor row highlighted.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsPanelInfo;

/// Horizontal margin for the panel (spaces on left and right).
const PANEL_MARGIN: usize = 5;

/// Renders the settings panel at the specified row.
///
/// Occupies `options.len() + 2` lines (borders plus one line per theme).
/// Returns the next available row.
pub fn render_settings_panel(
    row: usize,
    panel: &SettingsPanelInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(PANEL_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    for (idx, option) in panel.options.iter().enumerate() {
        let selected = idx == panel.selected;
        let marker = if selected { "▸" } else { " " };
        let text = format!(" {marker} {option}");
        let padding = inner_width.saturating_sub(text.chars().count());

        position_cursor(row + 1 + idx, 1);
        print!("{}", " ".repeat(PANEL_MARGIN));
        print!("{}", Theme::fg(&theme.colors.panel_border));
        print!("│");
        if selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{text}");
        print!("{}", " ".repeat(padding));
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.panel_border));
        print!("│");
        print!("{}", Theme::reset());
    }

    let bottom = row + 1 + panel.options.len();
    position_cursor(bottom, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    bottom + 1
}
