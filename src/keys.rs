//! Keybinding definitions for svn-panel
//!
//! All keybindings are defined here so that views, the status bar and the
//! help panel agree on them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+S (submit a multi-line input)
pub fn is_submit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (always quits)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between the changes and output views
pub const TAB: KeyCode = KeyCode::Tab;

/// Go back
pub const ESC: KeyCode = KeyCode::Esc;

/// Re-run `svn status`
pub const REFRESH: KeyCode = KeyCode::Char('r');

/// Open the output log
pub const OUTPUT_VIEW: KeyCode = KeyCode::Char('o');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Jump to the next group header
pub const NEXT_GROUP: KeyCode = KeyCode::Char(']');

/// Jump to the previous group header
pub const PREV_GROUP: KeyCode = KeyCode::Char('[');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Changes view keys
// =============================================================================

/// Open the selected resource (diff, file, or nothing depending on status)
pub const OPEN: KeyCode = KeyCode::Enter;

/// Compare the selected file with HEAD
pub const DIFF_HEAD: KeyCode = KeyCode::Char('d');

/// Pick a revision to compare the selected file with
pub const DIFF_REVISION: KeyCode = KeyCode::Char('h');

/// Commit the selected file or group
pub const COMMIT: KeyCode = KeyCode::Char('c');

/// Commit a changelist chosen from a picker
pub const COMMIT_CHANGELIST: KeyCode = KeyCode::Char('C');

/// Schedule the selection for addition
pub const ADD: KeyCode = KeyCode::Char('a');

/// Revert the selected file or group
pub const REVERT: KeyCode = KeyCode::Char('u');

/// Revert the whole working copy
pub const REVERT_ALL: KeyCode = KeyCode::Char('U');

/// Move the selected file to a changelist
pub const MOVE_TO_CHANGELIST: KeyCode = KeyCode::Char('m');

/// Dissolve the selected changelist
pub const DELETE_CHANGELIST: KeyCode = KeyCode::Char('D');

/// Show `svn info`
pub const INFO: KeyCode = KeyCode::Char('i');

/// Update the working copy
pub const UPDATE: KeyCode = KeyCode::Char('p');

/// Update the selected path only
pub const UPDATE_PATH: KeyCode = KeyCode::Char('P');

// =============================================================================
// Text view keys (diff, info, output)
// =============================================================================

/// Half page down
pub const HALF_PAGE_DOWN: KeyCode = KeyCode::Char(' ');

/// Half page up
pub const HALF_PAGE_UP: KeyCode = KeyCode::Char('b');

/// Clear the output log
pub const CLEAR_OUTPUT: KeyCode = KeyCode::Char('x');

// =============================================================================
// Help panel entries
// =============================================================================

/// One row of the help panel
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / back",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch changes / output",
    },
    KeyBindEntry {
        key: "o",
        description: "Output log",
    },
    KeyBindEntry {
        key: "r / ^L",
        description: "Refresh status",
    },
    KeyBindEntry {
        key: "^C",
        description: "Quit immediately",
    },
];

pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j / ↓",
        description: "Move down",
    },
    KeyBindEntry {
        key: "k / ↑",
        description: "Move up",
    },
    KeyBindEntry {
        key: "g / G",
        description: "Top / bottom",
    },
    KeyBindEntry {
        key: "[ / ]",
        description: "Previous / next group",
    },
];

pub const CHANGES_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Open changes",
    },
    KeyBindEntry {
        key: "d",
        description: "Compare with HEAD",
    },
    KeyBindEntry {
        key: "h",
        description: "Compare with a revision",
    },
    KeyBindEntry {
        key: "c",
        description: "Commit file or group",
    },
    KeyBindEntry {
        key: "C",
        description: "Commit a changelist",
    },
    KeyBindEntry {
        key: "a",
        description: "Add to version control",
    },
    KeyBindEntry {
        key: "u",
        description: "Revert file or group",
    },
    KeyBindEntry {
        key: "U",
        description: "Revert working copy",
    },
    KeyBindEntry {
        key: "m",
        description: "Move to changelist",
    },
    KeyBindEntry {
        key: "D",
        description: "Delete changelist",
    },
    KeyBindEntry {
        key: "p",
        description: "Update working copy",
    },
    KeyBindEntry {
        key: "P",
        description: "Update selected path",
    },
    KeyBindEntry {
        key: "i",
        description: "Working copy info",
    },
];

pub const INPUT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "^S",
        description: "Commit message: submit",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Name: submit / message: newline",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel",
    },
];

pub const TEXT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j / k",
        description: "Scroll",
    },
    KeyBindEntry {
        key: "Space / b",
        description: "Half page down / up",
    },
    KeyBindEntry {
        key: "x",
        description: "Clear output log",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_COMMIT: KeyHint = KeyHint {
    key: "c",
    label: "Commit",
    color: Color::Green,
};
pub const HINT_ADD: KeyHint = KeyHint {
    key: "a",
    label: "Add",
    color: Color::Green,
};
pub const HINT_REVERT: KeyHint = KeyHint {
    key: "u",
    label: "Revert",
    color: Color::Red,
};
pub const HINT_MOVE: KeyHint = KeyHint {
    key: "m",
    label: "Changelist",
    color: Color::Magenta,
};
pub const HINT_DELETE_CL: KeyHint = KeyHint {
    key: "D",
    label: "Del CL",
    color: Color::Red,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "r",
    label: "Refresh",
    color: Color::Blue,
};
pub const HINT_OUTPUT: KeyHint = KeyHint {
    key: "o",
    label: "Output",
    color: Color::Blue,
};
pub const HINT_CLEAR: KeyHint = KeyHint {
    key: "x",
    label: "Clear",
    color: Color::Yellow,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Cyan,
};

/// Hints while a file row is selected
pub const FILE_HINTS: &[KeyHint] = &[
    HINT_OPEN,
    HINT_COMMIT,
    HINT_ADD,
    HINT_REVERT,
    HINT_MOVE,
    HINT_REFRESH,
    HINT_OUTPUT,
    HINT_HELP,
    HINT_QUIT,
];

/// Hints while a changelist header is selected
pub const CHANGELIST_HINTS: &[KeyHint] = &[
    HINT_COMMIT,
    HINT_REVERT,
    HINT_DELETE_CL,
    HINT_REFRESH,
    HINT_OUTPUT,
    HINT_HELP,
    HINT_QUIT,
];

/// Hints while the default or unversioned header is selected
pub const GROUP_HINTS: &[KeyHint] = &[
    HINT_COMMIT,
    HINT_ADD,
    HINT_REVERT,
    HINT_REFRESH,
    HINT_OUTPUT,
    HINT_HELP,
    HINT_QUIT,
];

pub const TEXT_VIEW_HINTS: &[KeyHint] = &[HINT_SCROLL, HINT_HELP, HINT_BACK];

pub const OUTPUT_VIEW_HINTS: &[KeyHint] = &[HINT_SCROLL, HINT_CLEAR, HINT_HELP, HINT_BACK];

/// What the changes view cursor points at, for hint selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Nothing,
    File,
    Changelist,
    OtherGroup,
}

/// Status bar hints for the current view
pub fn current_hints(view: View, selection: SelectionKind) -> &'static [KeyHint] {
    match view {
        View::Changes => match selection {
            SelectionKind::File => FILE_HINTS,
            SelectionKind::Changelist => CHANGELIST_HINTS,
            SelectionKind::OtherGroup => GROUP_HINTS,
            SelectionKind::Nothing => &[HINT_REFRESH, HINT_OUTPUT, HINT_HELP, HINT_QUIT],
        },
        View::Output => OUTPUT_VIEW_HINTS,
        View::Text => TEXT_VIEW_HINTS,
        View::Help => &[HINT_BACK],
    }
}
