//! Opening resources: diffs, file content and the external editor

use std::io;
use std::path::Path;
use std::process::Command;

use tokio::process::Command as AsyncCommand;
use tracing::{debug, info};

use crate::model::{OpenAction, Resource};
use crate::svn::{CommandRunner, Revision};
use crate::ui::components::{Dialog, DialogCallback, SelectItem};
use crate::ui::views::TextView;

use super::suspend_tui;
use crate::app::state::App;

/// Run a diff program and capture its output
///
/// Exit status 1 means "files differ" for diff-like tools.
async fn run_diff_program(program: &str, args: &[String]) -> io::Result<String> {
    let output = AsyncCommand::new(program).args(args).output().await?;
    match output.status.code() {
        Some(0) | Some(1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        _ => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(io::Error::other(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )))
        }
    }
}

impl<R: CommandRunner> App<R> {
    /// Primary action of a resource (Enter)
    pub(crate) fn open_resource(&mut self, resource: &Resource) {
        match resource.open_action() {
            OpenAction::DiffAgainstHead => self.show_diff(resource.path(), Revision::Head),
            OpenAction::OpenFile => self.open_file(resource),
            OpenAction::Nothing => {
                self.notify_info(format!("{} is not on disk", resource.relative()));
            }
        }
    }

    fn open_file(&mut self, resource: &Resource) {
        if let Some(editor) = self.config.editor.clone() {
            self.open_in_editor(&editor, resource.path());
            return;
        }

        let path = resource.path();
        if path.is_dir() {
            self.notify_info(format!("{} is a directory", resource.relative()));
            return;
        }
        match std::fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                self.open_text_view(TextView::plain(resource.relative(), &content));
            }
            Err(e) => self.set_error(format!("Failed to read {}: {}", resource.relative(), e)),
        }
    }

    /// Run the configured editor on `path`
    ///
    /// Temporarily exits TUI mode to allow the editor to run.
    fn open_in_editor(&mut self, editor: &str, path: &Path) {
        let mut parts = editor.split_whitespace();
        let Some(program) = parts.next() else {
            self.set_error("Editor command is empty");
            return;
        };
        let args: Vec<&str> = parts.collect();
        info!(program, path = %path.display(), "opening editor");

        let status = {
            let _guard = suspend_tui();
            Command::new(program).args(&args).arg(path).status()
        };

        match status {
            Ok(status) if status.success() => self.refresh(),
            Ok(status) => self.set_error(format!("{} exited with {}", program, status)),
            Err(e) => self.set_error(format!("Failed to start {}: {}", program, e)),
        }
    }

    /// Compare the working file with `revision`
    pub(crate) fn show_diff(&mut self, path: &Path, revision: Revision) {
        let target = match self.runtime.block_on(self.scm.diff(path, revision)) {
            Ok(target) => target,
            Err(e) => {
                self.report_error("Diff failed", e);
                return;
            }
        };

        let Some((program, args)) = self.config.diff_argv(target.base_path(), &target.working)
        else {
            // No diff program: show the revision content itself
            let content = std::fs::read_to_string(target.base_path()).unwrap_or_default();
            self.open_text_view(TextView::plain(target.title, &content));
            return;
        };

        debug!(program = %program, "running diff program");
        match self.runtime.block_on(run_diff_program(&program, &args)) {
            Ok(output) if output.trim().is_empty() => {
                self.notify_info(format!("No differences: {}", self.display_path(path)));
            }
            Ok(output) => self.open_text_view(TextView::diff(target.title, &output)),
            Err(e) => self.set_error(format!("Diff failed: {}", e)),
        }
    }

    /// Offer the revisions that touched `path` for comparison
    pub(crate) fn start_pick_revision(&mut self, path: std::path::PathBuf) {
        let revisions = match self.runtime.block_on(self.scm.path_revisions(&path)) {
            Ok(revisions) => revisions,
            Err(e) => {
                self.report_error("svn log failed", e);
                return;
            }
        };
        if revisions.is_empty() {
            self.notify_info(format!("No history for {}", self.display_path(&path)));
            return;
        }

        let items = revisions
            .iter()
            .map(|entry| SelectItem::new(entry.label(), entry.number.to_string()))
            .collect();
        self.active_dialog = Some(Dialog::select_one(
            "Compare with revision",
            self.display_path(&path),
            items,
            DialogCallback::PickRevision(path),
        ));
    }
}
