//! Search panel component renderer.
//!
//! Renders the three-field search panel: a free-text title input and the
//! author and genre selectors, inside a bordered box. The focused field is
//! marked and colored; selector fields show cycling arrows while focused.

use crate::app::modes::SearchField;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchPanelInfo;

/// Horizontal margin for the panel (spaces on left and right).
const PANEL_MARGIN: usize = 5;

/// Renders the search panel at the specified row.
///
/// The panel occupies 5 lines: a top border, one line per field, and a
/// bottom border. Returns the next available row.
pub fn render_search_panel(row: usize, panel: &SearchPanelInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(PANEL_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    render_panel_border(row, inner_width, theme, true);

    let title_value = if panel.focused == SearchField::Title {
        format!("{}_", panel.title_query)
    } else {
        panel.title_query.clone()
    };
    render_field_line(
        row + 1,
        "Title",
        &title_value,
        panel.focused == SearchField::Title,
        theme,
        inner_width,
    );

    let author_value = selector_value(&panel.author_label, panel.focused == SearchField::Author);
    render_field_line(
        row + 2,
        "Author",
        &author_value,
        panel.focused == SearchField::Author,
        theme,
        inner_width,
    );

    let genre_value = selector_value(&panel.genre_label, panel.focused == SearchField::Genre);
    render_field_line(
        row + 3,
        "Genre",
        &genre_value,
        panel.focused == SearchField::Genre,
        theme,
        inner_width,
    );

    render_panel_border(row + 4, inner_width, theme, false);

    row + 5
}

fn selector_value(label: &str, focused: bool) -> String {
    if focused {
        format!("◂ {label} ▸")
    } else {
        label.to_string()
    }
}

fn render_panel_border(row: usize, inner_width: usize, theme: &Theme, top: bool) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.panel_border));
    if top {
        print!("┌{}┐", "─".repeat(inner_width));
    } else {
        print!("└{}┘", "─".repeat(inner_width));
    }
    print!("{}", Theme::reset());
}

fn render_field_line(
    row: usize,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    inner_width: usize,
) {
    let marker = if focused { "▸" } else { " " };
    let text = format!(" {marker} {label:<7} {value}");
    let padding = inner_width.saturating_sub(text.chars().count());

    position_cursor(row, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("│");
    if focused {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.panel_border));
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
