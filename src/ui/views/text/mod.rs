//! Text view
//!
//! Scrollable read-only text: diff output, file content, `svn info`.

mod render;

use crossterm::event::KeyEvent;

use crate::keys;
use crate::ui::navigation;

/// How lines are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Unified diff
    Diff,
    Plain,
}

/// Text view state
#[derive(Debug)]
pub struct TextView {
    pub title: String,
    pub kind: TextKind,
    lines: Vec<String>,
    pub scroll_offset: usize,
}

impl TextView {
    /// Default visible count for navigation before the first render
    pub(crate) const DEFAULT_VISIBLE_COUNT: usize = 20;

    pub fn new(title: impl Into<String>, content: &str, kind: TextKind) -> Self {
        Self {
            title: title.into(),
            kind,
            lines: content.lines().map(str::to_string).collect(),
            scroll_offset: 0,
        }
    }

    pub fn diff(title: impl Into<String>, content: &str) -> Self {
        Self::new(title, content, TextKind::Diff)
    }

    pub fn plain(title: impl Into<String>, content: &str) -> Self {
        Self::new(title, content, TextKind::Plain)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_COUNT);
    }

    /// Handle key event with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_count: usize) {
        let max = navigation::max_scroll(self.lines.len(), visible_count);
        match key.code {
            code if keys::is_move_down(code) => {
                self.scroll_offset = navigation::select_next(self.scroll_offset, max);
            }
            code if keys::is_move_up(code) => {
                self.scroll_offset = navigation::select_prev(self.scroll_offset);
            }
            keys::GO_TOP => self.scroll_offset = 0,
            keys::GO_BOTTOM => self.scroll_offset = max,
            keys::HALF_PAGE_DOWN => {
                self.scroll_offset =
                    navigation::half_page(self.scroll_offset, self.lines.len(), visible_count, true);
            }
            keys::HALF_PAGE_UP => {
                self.scroll_offset = navigation::half_page(
                    self.scroll_offset,
                    self.lines.len(),
                    visible_count,
                    false,
                );
            }
            _ => {}
        }
    }
}
