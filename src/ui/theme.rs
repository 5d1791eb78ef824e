//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::model::IconCategory;

/// Colors for the changes view
pub mod changes_view {
    use super::*;

    /// Group header color
    pub const GROUP_HEADER: Color = Color::Cyan;
    /// Resource count next to a header
    pub const GROUP_COUNT: Color = Color::DarkGray;
    /// Added file icon
    pub const ADDED: Color = Color::Green;
    /// Modified file icon
    pub const MODIFIED: Color = Color::Yellow;
    /// Deleted or missing file icon
    pub const DELETED: Color = Color::Red;
    /// Replaced file icon
    pub const RENAMED: Color = Color::Cyan;
    /// Unversioned file icon
    pub const UNVERSIONED: Color = Color::Magenta;
    /// Ignored file icon
    pub const IGNORED: Color = Color::DarkGray;
    /// Status codes without an icon
    pub const PLAIN: Color = Color::Reset;
}

/// Colors for text views (diff, info)
pub mod text_view {
    use super::*;

    /// Added line color
    pub const ADDED: Color = Color::Green;
    /// Removed line color
    pub const REMOVED: Color = Color::Red;
    /// Hunk header color
    pub const HUNK_HEADER: Color = Color::Cyan;
    /// `---`/`+++` header color
    pub const FILE_HEADER: Color = Color::Yellow;
}

/// Colors for the output log
pub mod output_view {
    use super::*;

    /// `> svn ...` command lines
    pub const COMMAND: Color = Color::Cyan;
    /// Failure messages
    pub const FAILURE: Color = Color::Red;
    /// Command output
    pub const OUTPUT: Color = Color::Reset;
}

/// Selected row
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}

/// Status bar badges
pub mod status_bar {
    use super::*;

    /// `svn` with a clean working copy
    pub const CLEAN: Color = Color::Green;
    /// `svn*` with local changes
    pub const DIRTY: Color = Color::Yellow;
    /// Shown while a command runs
    pub const SYNCING: Color = Color::Magenta;
}

/// Icon color for a decoration category
pub fn icon_color(icon: IconCategory) -> Color {
    match icon {
        IconCategory::Added => changes_view::ADDED,
        IconCategory::Modified => changes_view::MODIFIED,
        IconCategory::Deleted => changes_view::DELETED,
        IconCategory::Renamed => changes_view::RENAMED,
        IconCategory::Unversioned => changes_view::UNVERSIONED,
        IconCategory::Ignored => changes_view::IGNORED,
        IconCategory::None => changes_view::PLAIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_colors_are_distinct_for_common_codes() {
        assert_ne!(
            icon_color(IconCategory::Added),
            icon_color(IconCategory::Modified)
        );
        assert_ne!(
            icon_color(IconCategory::Deleted),
            icon_color(IconCategory::Unversioned)
        );
    }

    #[test]
    fn test_no_icon_uses_plain_color() {
        assert_eq!(icon_color(IconCategory::None), changes_view::PLAIN);
    }
}
