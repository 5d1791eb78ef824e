//! Snapshot tests for the Changes View
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use std::path::Path;

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use svn_panel::model::{Notification, ResourceOrder};
use svn_panel::svn::parser::Parser;
use svn_panel::ui::views::ChangesView;

use crate::screen_lines;

const STATUS: &str = "\
M       src/a.rs
D       old.rs
?       notes.txt
--- Changelist 'feature':
A       src/new.rs
";

fn loaded_view(status: &str) -> ChangesView {
    let mut view = ChangesView::new();
    view.set_reconciliation(&Parser::reconcile(
        status,
        Path::new("/wc"),
        ResourceOrder::Scan,
    ));
    view
}

fn render(view: &mut ChangesView, notification: Option<&Notification>) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), notification))
        .unwrap();
    screen_lines(terminal.backend())
}

/// Text inside the border, without empty rows
fn body(lines: &[String]) -> String {
    lines[1..lines.len() - 1]
        .iter()
        .map(|l| {
            let inner: String = l.chars().skip(1).collect();
            inner.trim_end_matches(['│', ' ']).to_string()
        })
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_changes_view_groups() {
    let mut view = loaded_view(STATUS);
    let lines = render(&mut view, None);

    assert!(lines[0].contains("svn-panel - Changes"));
    assert_snapshot!(body(&lines), @r"
    ▶ ▾ default (2)
        ● M src/a.rs
        − D old.rs
      ▾ feature (1)
        + A src/new.rs
      ▾ unversioned (1)
        ? ? notes.txt
    ");
}

#[test]
fn test_changes_view_loading() {
    let mut view = ChangesView::new();
    let lines = render(&mut view, None);
    assert_snapshot!(body(&lines).trim(), @"Loading...");
}

#[test]
fn test_changes_view_clean() {
    let mut view = loaded_view("");
    let lines = render(&mut view, None);
    let text = body(&lines);
    assert!(text.contains("No local changes."));
    assert!(text.contains("press r to refresh"));
}

#[test]
fn test_changes_view_notification_in_title() {
    let mut view = loaded_view(STATUS);
    let notification = Notification::success("Added notes.txt");
    let lines = render(&mut view, Some(&notification));
    assert!(lines[0].contains("Added notes.txt"));
}

#[test]
fn test_changes_view_scrolls_to_selection() {
    let mut view = loaded_view(STATUS);
    view.selected_index = view.rows().len() - 1;
    let mut terminal = Terminal::new(TestBackend::new(50, 5)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let lines = screen_lines(terminal.backend());
    assert_snapshot!(body(&lines), @r"
        + A src/new.rs
      ▾ unversioned (1)
    ▶   ? ? notes.txt
    ");
}
