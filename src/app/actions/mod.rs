//! svn operations triggered from the changes view

mod changelist;
mod dialog;
mod open;

use std::path::PathBuf;

use crate::model::{GroupId, Notification};
use crate::scm::{ScmError, ScmTarget};
use crate::svn::{CommandRunner, Revision};
use crate::ui::components::{Dialog, DialogCallback, SelectItem};
use crate::ui::views::{ChangesAction, TextView};

use super::state::{App, View};

/// Suspend TUI mode (raw mode off, leave alternate screen).
///
/// Returns a scope guard that restores TUI mode on drop.
/// Use this before running an interactive program (the configured editor).
fn suspend_tui() -> impl Drop {
    use crossterm::execute;
    use crossterm::terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    };
    use std::io::stdout;

    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, Clear(ClearType::All));

    scopeguard::guard((), |_| {
        let _ = enable_raw_mode();
        let _ = execute!(stdout(), EnterAlternateScreen);
    })
}

/// Last non-empty line of svn output (e.g. `Committed revision 12.`)
fn summary_line(output: &str) -> Option<&str> {
    output.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

impl<R: CommandRunner> App<R> {
    // ── Notification / error helpers ──────────────────────────────────

    /// Set a success notification (green)
    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    /// Set an info notification (blue)
    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    /// Set a warning notification (yellow)
    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }

    /// Set an error message (displayed in error area)
    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Show a facade error
    ///
    /// Input problems are warnings; svn failures go to the error banner.
    pub(crate) fn report_error(&mut self, context: &str, err: ScmError) {
        if err.is_validation() {
            self.notify_warning(err.to_string());
        } else {
            self.set_error(format!("{}: {}", context, err));
        }
    }

    /// Notify with the svn summary line, or `fallback` when svn printed nothing
    fn notify_command_output(&mut self, output: &str, fallback: &str) {
        let message = summary_line(output).unwrap_or(fallback).to_string();
        self.notify_success(message);
    }

    // ── Changes view dispatch ─────────────────────────────────────────

    pub(crate) fn handle_changes_action(&mut self, action: ChangesAction) {
        match action {
            ChangesAction::None => {}
            ChangesAction::NoSelection => self.report_error("", ScmError::NoActiveSelection),
            ChangesAction::Open(resource) => self.open_resource(&resource),
            ChangesAction::DiffHead(path) => self.show_diff(&path, Revision::Head),
            ChangesAction::PickRevision(path) => self.start_pick_revision(path),
            ChangesAction::Commit(target) => self.start_commit(target),
            ChangesAction::CommitChangelist => self.start_commit_changelist(),
            ChangesAction::Add(target) => self.start_add(target),
            ChangesAction::Revert(target) => self.start_revert(target),
            ChangesAction::RevertWorkingCopy => self.start_revert_working_copy(),
            ChangesAction::MoveToChangelist(path) => self.start_move_to_changelist(path),
            ChangesAction::DeleteChangelist(target) => self.start_delete_changelist(target),
            ChangesAction::Info => self.show_info(),
            ChangesAction::UpdateWorkingCopy => self.execute_update(None),
            ChangesAction::UpdatePath(path) => self.execute_update(Some(path)),
        }
    }

    // ── Add ───────────────────────────────────────────────────────────

    /// Add a file, or pick files from the unversioned group
    pub(crate) fn start_add(&mut self, target: ScmTarget) {
        match target {
            ScmTarget::File(path) => self.execute_add(vec![path]),
            ScmTarget::Group(GroupId::Unversioned) => {
                let current = self.scm.current();
                let Some(group) = current.unversioned_group() else {
                    self.notify_info("No unversioned files");
                    return;
                };
                let items = group
                    .resources
                    .iter()
                    .map(|r| {
                        SelectItem::new(r.relative(), r.path().to_string_lossy()).checked()
                    })
                    .collect();
                self.active_dialog = Some(Dialog::select_many(
                    "Add",
                    "Unversioned files to add:",
                    items,
                    DialogCallback::AddPaths,
                ));
            }
            ScmTarget::Group(id) => {
                self.notify_warning(format!("Files in '{}' are already versioned", id.label()));
            }
        }
    }

    pub(crate) fn execute_add(&mut self, paths: Vec<PathBuf>) {
        match self.runtime.block_on(self.scm.add(&paths)) {
            Ok(_) => {
                let msg = match paths.as_slice() {
                    [single] => format!("Added {}", self.display_path(single)),
                    _ => format!("Added {} files", paths.len()),
                };
                self.notify_success(msg);
            }
            Err(e) => self.report_error("Add failed", e),
        }
    }

    // ── Revert ────────────────────────────────────────────────────────

    pub(crate) fn start_revert(&mut self, target: ScmTarget) {
        if let ScmTarget::Group(GroupId::Pending(ref name)) = target {
            let count = self
                .scm
                .current()
                .group(&GroupId::pending(name.as_str()))
                .map_or(0, |g| g.len());
            self.active_dialog = Some(Dialog::confirm(
                "Revert changelist",
                format!("Revert {} file(s) in changelist '{}'?", count, name),
                Some("Local changes will be lost.".to_string()),
                DialogCallback::RevertChangelist(name.clone()),
            ));
            return;
        }
        if target == ScmTarget::Group(GroupId::Unversioned) {
            self.notify_warning("Unversioned files have nothing to revert");
            return;
        }

        let paths = match self.scm.resolve_paths(Some(&target)) {
            Ok(paths) => paths,
            Err(e) => {
                self.report_error("Revert failed", e);
                return;
            }
        };
        let mut message = format!("Revert {} file(s)?", paths.len());
        for path in &paths {
            message.push('\n');
            message.push_str(&self.display_path(path));
        }
        self.active_dialog = Some(Dialog::confirm(
            "Revert",
            message,
            Some("Local changes will be lost.".to_string()),
            DialogCallback::RevertPaths(paths),
        ));
    }

    pub(crate) fn start_revert_working_copy(&mut self) {
        self.active_dialog = Some(Dialog::confirm(
            "Revert all",
            "Revert every change in the working copy?",
            Some("Local changes will be lost.".to_string()),
            DialogCallback::RevertWorkingCopy,
        ));
    }

    pub(crate) fn execute_revert_paths(&mut self, paths: Vec<PathBuf>) {
        match self.runtime.block_on(self.scm.revert_paths(&paths)) {
            Ok(_) => self.notify_success(format!("Reverted {} file(s)", paths.len())),
            Err(e) => self.report_error("Revert failed", e),
        }
    }

    pub(crate) fn execute_revert_changelist(&mut self, name: &str) {
        match self.runtime.block_on(self.scm.revert_changelist(name)) {
            Ok(_) => self.notify_success(format!("Reverted changelist '{}'", name)),
            Err(e) => self.report_error("Revert failed", e),
        }
    }

    pub(crate) fn execute_revert_working_copy(&mut self) {
        match self.runtime.block_on(self.scm.revert_working_copy()) {
            Ok(_) => self.notify_success("Reverted working copy"),
            Err(e) => self.report_error("Revert failed", e),
        }
    }

    // ── Update / info ─────────────────────────────────────────────────

    pub(crate) fn execute_update(&mut self, path: Option<PathBuf>) {
        let result = match path {
            Some(ref path) => self.runtime.block_on(self.scm.update_path(path)),
            None => self.runtime.block_on(self.scm.update_working_copy()),
        };
        match result {
            Ok(output) => self.notify_command_output(&output, "Updated"),
            Err(e) => self.report_error("Update failed", e),
        }
    }

    pub(crate) fn show_info(&mut self) {
        match self.runtime.block_on(self.scm.info()) {
            Ok(info) => {
                if let Some(name) = info.repository_name() {
                    self.repository_name = Some(name.to_string());
                }
                self.open_text_view(TextView::plain("svn info", &info.raw));
            }
            Err(e) => self.report_error("svn info failed", e),
        }
    }

    pub(crate) fn open_text_view(&mut self, view: TextView) {
        self.text_view = Some(view);
        self.go_to_view(View::Text);
    }

    /// Path relative to the working copy root, for messages
    pub(crate) fn display_path(&self, path: &std::path::Path) -> String {
        path.strip_prefix(self.scm.root())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
