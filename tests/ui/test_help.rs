//! Snapshot tests for the Help panel
//!
//! Uses ratatui TestBackend for visual regression testing.

use ratatui::{Terminal, backend::TestBackend};

use svn_panel::ui::widgets::render_help_panel;

use crate::screen_lines;

fn render(scroll: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), scroll))
        .unwrap();
    screen_lines(terminal.backend())
}

#[test]
fn test_help_panel_header() {
    let lines = render(0);
    assert!(lines[0].contains("svn-panel - Help"));
    assert!(lines[1].contains("Key bindings:"));
    assert!(lines[3].contains("Global:"));
}

#[test]
fn test_help_panel_scrolls() {
    let lines = render(2);
    assert!(lines[1].contains("Global:"));
    assert!(!lines.iter().any(|l| l.contains("Key bindings:")));
}

#[test]
fn test_help_panel_entry_layout() {
    let lines = render(0);
    assert!(lines[4].contains("  q         Quit / back"));
}
