//! Commit and changelist operations

use std::path::PathBuf;

use crate::model::GroupId;
use crate::scm::{ChangelistChoice, ChangelistTarget, CommitTarget, ScmTarget};
use crate::svn::CommandRunner;
use crate::ui::components::{Dialog, DialogCallback, SelectItem};

use crate::app::state::App;

/// Select items for changelist choices; the value is the choice index
fn choice_items(choices: &[ChangelistChoice]) -> Vec<SelectItem> {
    choices
        .iter()
        .enumerate()
        .map(|(i, choice)| SelectItem::new(choice.label(), i.to_string()))
        .collect()
}

/// Choice picked in a Select dialog
pub(super) fn picked_choice(
    choices: &[ChangelistChoice],
    values: &[String],
) -> Option<ChangelistChoice> {
    let index: usize = values.first()?.parse().ok()?;
    choices.get(index).cloned()
}

impl<R: CommandRunner> App<R> {
    // ── Commit ────────────────────────────────────────────────────────

    /// Ask for a commit message for a file or group
    pub(crate) fn start_commit(&mut self, target: ScmTarget) {
        let commit_target = match target {
            ScmTarget::File(path) => {
                let unversioned = self
                    .scm
                    .current()
                    .find_resource(&path)
                    .is_some_and(|(group, _)| group.id == GroupId::Unversioned);
                if unversioned {
                    self.notify_warning("Unversioned files cannot be committed; add them first");
                    return;
                }
                CommitTarget::Paths(vec![path])
            }
            ScmTarget::Group(GroupId::Default) => CommitTarget::DefaultGroup,
            ScmTarget::Group(GroupId::Pending(name)) => CommitTarget::Changelist(name),
            ScmTarget::Group(GroupId::Unversioned) => {
                self.notify_warning("Unversioned files cannot be committed; add them first");
                return;
            }
        };
        self.open_commit_message(commit_target);
    }

    /// Pick a changelist to commit
    pub(crate) fn start_commit_changelist(&mut self) {
        let choices = self.scm.changelist_choices(false);
        self.active_dialog = Some(Dialog::select_one(
            "Commit changelist",
            "Changelist to commit:",
            choice_items(&choices),
            DialogCallback::CommitChangelist(choices),
        ));
    }

    pub(crate) fn open_commit_message(&mut self, target: CommitTarget) {
        let title = match target {
            CommitTarget::Paths(ref paths) => match paths.as_slice() {
                [single] => format!("Commit {}", self.display_path(single)),
                _ => format!("Commit {} files", paths.len()),
            },
            CommitTarget::Changelist(ref name) => format!("Commit changelist '{}'", name),
            CommitTarget::DefaultGroup => "Commit default changes".to_string(),
        };
        self.active_dialog = Some(Dialog::input(
            title,
            "",
            true,
            DialogCallback::CommitMessage(target),
        ));
    }

    pub(crate) fn execute_commit(&mut self, target: CommitTarget, message: &str) {
        match self.runtime.block_on(self.scm.commit(target, message)) {
            Ok(output) => self.notify_command_output(&output, "Committed"),
            Err(e) => self.report_error("Commit failed", e),
        }
    }

    // ── Move to changelist ────────────────────────────────────────────

    pub(crate) fn start_move_to_changelist(&mut self, path: PathBuf) {
        let choices = self.scm.changelist_choices(true);
        self.active_dialog = Some(Dialog::select_one(
            "Move to changelist",
            self.display_path(&path),
            choice_items(&choices),
            DialogCallback::MoveToChangelist { path, choices },
        ));
    }

    /// Apply a picked destination; "new" asks for a name first
    pub(crate) fn apply_changelist_choice(&mut self, path: PathBuf, choice: ChangelistChoice) {
        let target = match choice {
            ChangelistChoice::Default => ChangelistTarget::Default,
            ChangelistChoice::Existing(name) => ChangelistTarget::Named(name),
            ChangelistChoice::New => {
                self.active_dialog = Some(Dialog::input(
                    "New changelist",
                    "",
                    false,
                    DialogCallback::NewChangelistName(path),
                ));
                return;
            }
        };
        self.execute_move_to_changelist(path, target);
    }

    pub(crate) fn execute_move_to_changelist(&mut self, path: PathBuf, target: ChangelistTarget) {
        let label = match target {
            ChangelistTarget::Default => "default".to_string(),
            ChangelistTarget::Named(ref name) => name.clone(),
        };
        match self
            .runtime
            .block_on(self.scm.move_to_changelist(&path, target))
        {
            Ok(_) => self.notify_success(format!(
                "Moved {} to '{}'",
                self.display_path(&path),
                label.trim()
            )),
            Err(e) => self.report_error("Move to changelist failed", e),
        }
    }

    // ── Delete changelist ─────────────────────────────────────────────

    pub(crate) fn start_delete_changelist(&mut self, target: ScmTarget) {
        let name = match self.scm.resolve_changelist(Some(&target)) {
            Ok(name) => name,
            Err(e) => {
                self.report_error("Delete changelist failed", e);
                return;
            }
        };
        self.active_dialog = Some(Dialog::confirm(
            "Delete changelist",
            format!("Delete changelist '{}'?", name),
            Some("Files keep their changes and move to default.".to_string()),
            DialogCallback::DeleteChangelist(name),
        ));
    }

    pub(crate) fn execute_delete_changelist(&mut self, name: &str) {
        match self.runtime.block_on(self.scm.delete_changelist(name)) {
            Ok(_) => self.notify_success(format!("Deleted changelist '{}'", name)),
            Err(e) => self.report_error("Delete changelist failed", e),
        }
    }
}
