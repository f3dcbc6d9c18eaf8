//! Top-level rendering coordinator.
//!
//! The main rendering entry point: computes a view model from application
//! state and delegates to the layout matching the open panel (browse, search,
//! settings, or detail).

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output via `print!`; the Zellij runtime owns screen
/// clearing and cursor management around each frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Dispatches a view model to the mode-specific layout.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if vm.detail.is_some() {
        components::render_detail_mode(vm, theme, cols, rows);
    } else if vm.search_panel.is_some() {
        components::render_search_mode(vm, theme, cols, rows);
    } else if vm.settings_panel.is_some() {
        components::render_settings_mode(vm, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }
}
