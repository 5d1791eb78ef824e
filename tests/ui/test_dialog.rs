//! Snapshot tests for Dialog components
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use svn_panel::scm::CommitTarget;
use svn_panel::ui::components::{Dialog, DialogCallback, SelectItem};

use crate::screen_lines;

fn render(dialog: &Dialog, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();
    screen_lines(terminal.backend())
}

/// Non-empty text between the dialog's side borders
fn dialog_body(lines: &[String]) -> String {
    lines
        .iter()
        .filter_map(|l| {
            let start = l.find('│')? + '│'.len_utf8();
            let end = l.rfind('│')?;
            (end >= start).then(|| l[start..end].trim_end().to_string())
        })
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_add_dialog_lists_checked_files() {
    let items = vec![
        SelectItem::new("notes.txt", "/wc/notes.txt").checked(),
        SelectItem::new("scratch.log", "/wc/scratch.log"),
        SelectItem::new("docs/readme.md", "/wc/docs/readme.md").checked(),
    ];
    let dialog = Dialog::select_many(
        "Add",
        "Unversioned files to add:",
        items,
        DialogCallback::AddPaths,
    );

    let lines = render(&dialog, 60, 20);
    assert!(lines.iter().any(|l| l.contains(" Add ")));
    assert_snapshot!(dialog_body(&lines), @r"
    Unversioned files to add:
    > [x] notes.txt
      [ ] scratch.log
      [x] docs/readme.md
    [j/k] Move [Space] Toggle [Enter] Select [Esc] Cancel
    ");
}

#[test]
fn test_changelist_picker_has_no_checkboxes() {
    let items = vec![
        SelectItem::new("default", "0"),
        SelectItem::new("feature", "1"),
        SelectItem::new("new changelist...", "2"),
    ];
    let dialog = Dialog::select_one(
        "Move to changelist",
        "src/a.rs",
        items,
        DialogCallback::MoveToChangelist {
            path: "/wc/src/a.rs".into(),
            choices: vec![],
        },
    );

    let lines = render(&dialog, 60, 20);
    assert_snapshot!(dialog_body(&lines), @r"
    src/a.rs
    > default
      feature
      new changelist...
    [j/k] Move [Enter] Select [Esc] Cancel
    ");
}

#[test]
fn test_revert_confirm_dialog() {
    let dialog = Dialog::confirm(
        "Revert",
        "Revert 1 file(s)?\nsrc/a.rs",
        Some("Local changes will be lost.".to_string()),
        DialogCallback::RevertPaths(vec!["/wc/src/a.rs".into()]),
    );

    let body = dialog_body(&render(&dialog, 60, 16));
    assert!(body.contains("Revert 1 file(s)?"));
    assert!(body.contains("src/a.rs"));
    assert!(body.contains("Local changes will be lost."));
    assert!(body.contains("[Y]es"));
}

#[test]
fn test_commit_message_dialog() {
    let dialog = Dialog::input(
        "Commit changelist 'feature'",
        "",
        true,
        DialogCallback::CommitMessage(CommitTarget::Changelist("feature".to_string())),
    );

    let lines = render(&dialog, 70, 20);
    assert!(lines.iter().any(|l| l.contains(" Commit changelist 'feature' ")));
    assert!(lines.iter().any(|l| l.contains("[^S] OK")));
}
