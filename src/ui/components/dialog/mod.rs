//! Dialog components
//!
//! - Confirm dialog: Yes/No confirmation
//! - Select dialog: pick one item (or check several)
//! - Input dialog: free text (commit message, changelist name)

mod confirm;
mod input;
mod select;

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tui_textarea::{CursorMove, TextArea};

use crate::keys;
use crate::scm::{ChangelistChoice, CommitTarget};

/// What to do with a dialog result
///
/// Variants carry the context captured when the dialog was opened, so the
/// result is applied to the selection the user saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCallback {
    /// Commit message for a target (Input dialog)
    CommitMessage(CommitTarget),
    /// Changelist to commit (Select dialog, values index `choices`)
    CommitChangelist(Vec<ChangelistChoice>),
    /// Destination changelist for a file (Select dialog, values index `choices`)
    MoveToChangelist {
        path: PathBuf,
        choices: Vec<ChangelistChoice>,
    },
    /// Name of a new changelist for a file (Input dialog)
    NewChangelistName(PathBuf),
    /// Revert files (Confirm dialog)
    RevertPaths(Vec<PathBuf>),
    /// Revert every file in a changelist (Confirm dialog)
    RevertChangelist(String),
    /// Revert the whole working copy (Confirm dialog)
    RevertWorkingCopy,
    /// Unversioned files to add (Select dialog)
    AddPaths,
    /// Dissolve a changelist (Confirm dialog)
    DeleteChangelist(String),
    /// Revision to compare a file with (Select dialog)
    PickRevision(PathBuf),
}

/// Selection item for Select dialog
#[derive(Debug, Clone)]
pub struct SelectItem {
    /// Display label
    pub label: String,
    /// Internal value (returned on confirm)
    pub value: String,
    /// Whether this item is checked (multi-select only)
    pub selected: bool,
}

impl SelectItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            selected: false,
        }
    }

    pub fn checked(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Simple Yes/No confirmation
    Confirm {
        title: String,
        message: String,
        /// Optional detail text (warning, etc.)
        detail: Option<String>,
    },
    /// List selection
    Select {
        title: String,
        message: String,
        items: Vec<SelectItem>,
        /// Enter returns the item under the cursor instead of checked items
        single_select: bool,
    },
    /// Free text
    Input {
        title: String,
        textarea: TextArea<'static>,
        /// Enter inserts a newline and Ctrl+S submits
        multiline: bool,
    },
}

/// Dialog result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Confirmed with values (empty for Confirm, the text for Input)
    Confirmed(Vec<String>),
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    pub kind: DialogKind,
    /// Cursor position (Select dialog)
    pub cursor: usize,
    pub callback_id: DialogCallback,
}

impl Dialog {
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
                detail,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Single-select list
    pub fn select_one(
        title: impl Into<String>,
        message: impl Into<String>,
        items: Vec<SelectItem>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Select {
                title: title.into(),
                message: message.into(),
                items,
                single_select: true,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Checkbox list; items keep their initial `selected` flag
    pub fn select_many(
        title: impl Into<String>,
        message: impl Into<String>,
        items: Vec<SelectItem>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Select {
                title: title.into(),
                message: message.into(),
                items,
                single_select: false,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Text input, optionally pre-filled
    pub fn input(
        title: impl Into<String>,
        initial: &str,
        multiline: bool,
        callback_id: DialogCallback,
    ) -> Self {
        let mut textarea = if initial.is_empty() {
            TextArea::default()
        } else {
            TextArea::new(initial.lines().map(str::to_string).collect())
        };
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        Self {
            kind: DialogKind::Input {
                title: title.into(),
                textarea,
                multiline,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Handle key input, returns Some(result) when dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match &self.kind {
            DialogKind::Confirm { .. } => self.handle_confirm_key(key),
            DialogKind::Select { .. } => self.handle_select_key(key),
            DialogKind::Input { .. } => self.handle_input_key(key),
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm {
                title,
                message,
                detail,
            } => self.render_confirm(frame, area, title, message, detail.as_deref()),
            DialogKind::Select {
                title,
                message,
                items,
                single_select,
            } => self.render_select(frame, area, title, message, items, *single_select),
            DialogKind::Input {
                title,
                textarea,
                multiline,
            } => self.render_input(frame, area, title, textarea, *multiline),
        }
    }
}

/// Calculate a centered rectangle within the given area
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
