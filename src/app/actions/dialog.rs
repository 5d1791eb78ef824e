//! Dialog result handling (dispatch confirmed/cancelled dialog results)

use std::path::PathBuf;

use crate::scm::{ChangelistChoice, ChangelistTarget, CommitTarget};
use crate::svn::{CommandRunner, Revision};
use crate::ui::components::{DialogCallback, DialogResult};

use super::changelist::picked_choice;
use crate::app::state::App;

impl<R: CommandRunner> App<R> {
    /// Handle dialog result
    ///
    /// Called when a dialog is closed.
    ///
    /// Implementation order (important):
    /// 1. Clone callback_id from active_dialog
    /// 2. Set active_dialog to None
    /// 3. Match on callback and result
    pub(crate) fn handle_dialog_result(&mut self, result: DialogResult) {
        let callback = self.active_dialog.as_ref().map(|d| d.callback_id.clone());
        self.active_dialog = None;

        let Some(callback) = callback else { return };

        let DialogResult::Confirmed(values) = result else {
            return;
        };

        match callback {
            DialogCallback::CommitMessage(target) => {
                let message = values.first().map(String::as_str).unwrap_or_default();
                self.execute_commit(target, message);
            }
            DialogCallback::CommitChangelist(choices) => {
                let target = match picked_choice(&choices, &values) {
                    Some(ChangelistChoice::Existing(name)) => CommitTarget::Changelist(name),
                    Some(ChangelistChoice::Default) => CommitTarget::DefaultGroup,
                    Some(ChangelistChoice::New) | None => return,
                };
                self.open_commit_message(target);
            }
            DialogCallback::MoveToChangelist { path, choices } => {
                if let Some(choice) = picked_choice(&choices, &values) {
                    self.apply_changelist_choice(path, choice);
                }
            }
            DialogCallback::NewChangelistName(path) => {
                let name = values.first().cloned().unwrap_or_default();
                self.execute_move_to_changelist(path, ChangelistTarget::Named(name));
            }
            DialogCallback::RevertPaths(paths) => self.execute_revert_paths(paths),
            DialogCallback::RevertChangelist(name) => self.execute_revert_changelist(&name),
            DialogCallback::RevertWorkingCopy => self.execute_revert_working_copy(),
            DialogCallback::AddPaths => {
                let paths: Vec<PathBuf> = values.into_iter().map(PathBuf::from).collect();
                self.execute_add(paths);
            }
            DialogCallback::DeleteChangelist(name) => self.execute_delete_changelist(&name),
            DialogCallback::PickRevision(path) => {
                match values.first().and_then(|v| v.parse::<u64>().ok()) {
                    Some(number) => self.show_diff(&path, Revision::Number(number)),
                    None => self.notify_warning("No revision selected"),
                }
            }
        }
    }
}
