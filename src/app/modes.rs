//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control how user input is
//! interpreted: normal browsing, the search panel (with one of three fields
//! focused), the settings panel, and the detail overlay. The active mode
//! determines keybindings, UI layout, and the footer help text.

/// Field focus within the search panel.
///
/// The panel has a free-text title field and two selector fields. Focus
/// cycles Title → Author → Genre → Title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Free-text title substring input.
    Title,
    /// Author selector ("All Authors" plus one entry per table row).
    Author,
    /// Genre selector ("All Genres" plus one entry per table row).
    Genre,
}

impl SearchField {
    /// The field after this one in cycling order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    /// The field before this one in cycling order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}

/// Current input handling mode.
///
/// Controls which keybindings are active and which panel (if any) is drawn
/// over the book grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default browsing mode: navigate the grid, reveal pages, open panels.
    Normal,

    /// Search panel open, with the contained field focused.
    Search(SearchField),

    /// Settings panel open (theme chooser).
    Settings,

    /// Detail overlay open for the activated book.
    Detail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_field_cycling_is_a_ring() {
        let mut field = SearchField::Title;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, SearchField::Title);
        assert_eq!(SearchField::Title.prev(), SearchField::Genre);
        assert_eq!(SearchField::Genre.next().prev(), SearchField::Genre);
    }
}
