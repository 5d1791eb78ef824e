//! UI symbols (icons, markers, spinner)
//!
//! Single-width Unicode glyphs.

use crate::model::IconCategory;

/// Resource icons by decoration category
pub mod icons {
    pub const UNVERSIONED: char = '?';
    pub const ADDED: char = '+';
    pub const DELETED: char = '−';
    pub const MODIFIED: char = '●';
    pub const RENAMED: char = '⇄';
    pub const IGNORED: char = '·';
    pub const NONE: char = ' ';
}

/// Row markers in the changes view
pub mod markers {
    /// Selected row
    pub const CURSOR: &str = "▶ ";
    /// Unselected row
    pub const BLANK: &str = "  ";
    /// Group header prefix
    pub const GROUP: &str = "▾ ";
}

/// Frames of the Syncing indicator
pub const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Icon glyph for a decoration category
pub fn icon(category: IconCategory) -> char {
    match category {
        IconCategory::Unversioned => icons::UNVERSIONED,
        IconCategory::Added => icons::ADDED,
        IconCategory::Deleted => icons::DELETED,
        IconCategory::Modified => icons::MODIFIED,
        IconCategory::Renamed => icons::RENAMED,
        IconCategory::Ignored => icons::IGNORED,
        IconCategory::None => icons::NONE,
    }
}

/// Spinner frame for a tick counter
pub fn spinner_frame(tick: usize) -> char {
    SPINNER[tick % SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_are_single_char_width() {
        for c in [
            icons::UNVERSIONED,
            icons::ADDED,
            icons::DELETED,
            icons::MODIFIED,
            icons::RENAMED,
            icons::IGNORED,
        ] {
            assert!(c.len_utf8() <= 3);
        }
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_icon_for_none_is_blank() {
        assert_eq!(icon(IconCategory::None), ' ');
        assert_eq!(icon(IconCategory::Modified), icons::MODIFIED);
    }
}
