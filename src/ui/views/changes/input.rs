//! Changes view key handling

use crossterm::event::KeyEvent;

use super::{ChangesAction, ChangesView, Row};
use crate::keys;
use crate::scm::ScmTarget;

impl ChangesView {
    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> ChangesAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_COUNT)
    }

    /// Handle key event with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_count: usize) -> ChangesAction {
        match key.code {
            code if keys::is_move_down(code) => {
                self.move_down(visible_count);
                ChangesAction::None
            }
            code if keys::is_move_up(code) => {
                self.move_up(visible_count);
                ChangesAction::None
            }
            keys::GO_TOP => {
                self.jump_to_top();
                ChangesAction::None
            }
            keys::GO_BOTTOM => {
                self.jump_to_bottom(visible_count);
                ChangesAction::None
            }
            keys::NEXT_GROUP => {
                self.next_group(visible_count);
                ChangesAction::None
            }
            keys::PREV_GROUP => {
                self.prev_group(visible_count);
                ChangesAction::None
            }
            keys::OPEN => match self.selected_resource() {
                Some(resource) => ChangesAction::Open(resource.clone()),
                None => ChangesAction::None,
            },
            keys::DIFF_HEAD => self.file_action(ChangesAction::DiffHead),
            keys::DIFF_REVISION => self.file_action(ChangesAction::PickRevision),
            keys::UPDATE_PATH => self.file_action(ChangesAction::UpdatePath),
            keys::MOVE_TO_CHANGELIST => self.file_action(ChangesAction::MoveToChangelist),
            keys::COMMIT => self.target_action(ChangesAction::Commit),
            keys::ADD => self.target_action(ChangesAction::Add),
            keys::REVERT => self.target_action(ChangesAction::Revert),
            keys::DELETE_CHANGELIST => self.target_action(ChangesAction::DeleteChangelist),
            keys::COMMIT_CHANGELIST => ChangesAction::CommitChangelist,
            keys::REVERT_ALL => ChangesAction::RevertWorkingCopy,
            keys::INFO => ChangesAction::Info,
            keys::UPDATE => ChangesAction::UpdateWorkingCopy,
            _ => ChangesAction::None,
        }
    }

    /// Action on the selected file; headers do not qualify
    fn file_action(&self, make: fn(std::path::PathBuf) -> ChangesAction) -> ChangesAction {
        match self.selected_row() {
            Some(Row::Resource { resource, .. }) => make(resource.path().to_path_buf()),
            _ => ChangesAction::NoSelection,
        }
    }

    /// Action on the selected file or group
    fn target_action(&self, make: fn(ScmTarget) -> ChangesAction) -> ChangesAction {
        self.selected_target()
            .map(make)
            .unwrap_or(ChangesAction::NoSelection)
    }
}
