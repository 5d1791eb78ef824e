//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::svn::CommandRunner;
use crate::ui::navigation;
use crate::ui::widgets::{STATUS_BAR_HEIGHT, build_help_lines};

impl<R: CommandRunner> App<R> {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // An open dialog takes every key
        if let Some(ref mut dialog) = self.active_dialog {
            if let Some(result) = dialog.handle_key(key) {
                self.handle_dialog_result(result);
            }
            self.sync_with_scm();
            return;
        }

        if keys::is_refresh_key(&key) {
            self.refresh();
            return;
        }

        if !self.handle_global_key(key) {
            self.handle_view_key(key);
        }
        self.sync_with_scm();
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            keys::OUTPUT_VIEW if self.current_view != View::Output => {
                self.go_to_view(View::Output);
                true
            }
            keys::REFRESH => {
                self.refresh();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Changes {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::Changes {
            self.go_back();
        }
    }

    /// Rows available to a bordered list above the status bar
    fn visible_count(&self) -> usize {
        self.last_frame_height
            .get()
            .saturating_sub(STATUS_BAR_HEIGHT + 2) as usize
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        let visible_count = self.visible_count();
        match self.current_view {
            View::Changes => {
                let action = self
                    .changes_view
                    .handle_key_with_height(key, visible_count);
                self.handle_changes_action(action);
            }
            View::Output => self.output_view.handle_key_with_height(key, visible_count),
            View::Text => {
                if let Some(ref mut text_view) = self.text_view {
                    text_view.handle_key_with_height(key, visible_count);
                }
            }
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let scroll = self.help_scroll as usize;
        let next = if keys::is_move_down(key.code) {
            navigation::select_next(scroll, build_help_lines().len().saturating_sub(1))
        } else if keys::is_move_up(key.code) {
            navigation::select_prev(scroll)
        } else if key.code == keys::GO_TOP {
            0
        } else {
            return;
        };
        self.help_scroll = next as u16;
    }
}
