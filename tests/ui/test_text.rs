//! Snapshot tests for the Text View (diffs, file content, info)
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use crossterm::event::{KeyCode, KeyEvent};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use svn_panel::ui::views::TextView;

use crate::screen_lines;

fn render(view: &mut TextView, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
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
fn test_diff_output() {
    let mut view = TextView::diff(
        "src/a.rs (r7) ↔ working copy",
        "--- src/a.rs\n+++ src/a.rs\n@@ -1 +1 @@\n-old line\n+new line\n",
    );
    let lines = render(&mut view, 50, 9);

    assert!(lines[0].contains(" src/a.rs (r7) ↔ working copy "));
    assert_snapshot!(body(&lines), @r"
    --- src/a.rs
    +++ src/a.rs
    @@ -1 +1 @@
    -old line
    +new line
    ");
}

#[test]
fn test_empty_diff() {
    let mut view = TextView::diff("a.txt", "");
    let lines = render(&mut view, 40, 6);
    assert!(lines.iter().any(|l| l.contains("No differences.")));
}

#[test]
fn test_scrolled_to_bottom() {
    let content: String = (1..=10).map(|i| format!("line {i}\n")).collect();
    let mut view = TextView::plain("svn info", &content);
    // 6 rows minus borders
    view.handle_key_with_height(KeyEvent::from(KeyCode::Char('G')), 4);

    let lines = render(&mut view, 30, 6);
    assert_snapshot!(body(&lines), @r"
    line 7
    line 8
    line 9
    line 10
    ");
}
