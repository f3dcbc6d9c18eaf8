//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting the
//! two built-in themes (day and night) and custom themes loaded from TOML
//! files. It provides utilities for converting hex colors to ANSI escape
//! sequences.
//!
//! # Built-in themes
//!
//! - `day`: dark ink on a light surface (default)
//! - `night`: light ink on a dark surface
//!
//! # TOML format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#0a0a14"
//! selection_fg = "#ffffff"
//! selection_bg = "#2a4f8f"
//! text_normal = "#0a0a14"
//! text_dim = "#6b6b76"
//! border = "#c9c9d1"
//! panel_border = "#2a4f8f"
//! match_highlight_fg = "#0a0a14"
//! match_highlight_bg = "#f2d024"
//! empty_state_fg = "#2a4f8f"
//! accent_fg = "#2a4f8f"
//! ```

use crate::domain::error::{BookstandError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names of the built-in themes, in settings-panel display order.
pub const BUILT_IN_THEMES: [&str; 2] = ["day", "night"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Theme name; for built-ins this is `"day"` or `"night"`.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#0a0a14"`). Optional fields default to
/// `None`, letting themes opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, disabled show-more, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search and settings panel border color.
    pub panel_border: String,
    /// Title match highlight foreground.
    pub match_highlight_fg: String,
    /// Title match highlight background.
    pub match_highlight_bg: String,

    /// Empty-results message color.
    pub empty_state_fg: String,

    /// Accent color (detail subtitle, enabled show-more affordance).
    pub accent_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of [`BUILT_IN_THEMES`]; callers
    /// decide whether that falls back to the default or surfaces elsewhere.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "day" => include_str!("../../themes/day.toml"),
            "night" => include_str!("../../themes/night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookstandError::Theme`] if the file cannot be read or the
    /// TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BookstandError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| BookstandError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present, validates length, and parses hex
    /// digits. Returns white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// The ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// The ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// The ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (day).
    ///
    /// # Panics
    ///
    /// Panics if the built-in day theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("day").expect("built-in day theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_load_by_name() {
        for name in BUILT_IN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_theme_is_day() {
        assert_eq!(Theme::default().name, "day");
    }

    #[test]
    fn day_and_night_swap_ink_and_surface() {
        let day = Theme::from_name("day").unwrap();
        let night = Theme::from_name("night").unwrap();
        assert_eq!(day.colors.text_normal, "#0a0a14");
        assert_eq!(night.colors.text_normal, "#ffffff");
    }

    #[test]
    fn from_file_round_trips_a_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            include_str!("../../themes/night.toml").replace("night", "custom-night")
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom-night");
    }

    #[test]
    fn from_file_reports_missing_and_malformed_files() {
        assert!(Theme::from_file("/nonexistent/theme.toml").is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"").unwrap();
        assert!(Theme::from_file(file.path()).is_err());
    }

    #[test]
    fn fg_emits_truecolor_sequences_and_tolerates_junk() {
        assert_eq!(Theme::fg("#000000"), "\u{001b}[38;2;0;0;0m");
        assert_eq!(Theme::fg("ff0000"), "\u{001b}[38;2;255;0;0m");
        // Malformed input falls back to white rather than erroring.
        assert_eq!(Theme::fg("#zz"), "\u{001b}[38;2;255;255;255m");
    }
}
