//! Help panel widget
//!
//! Key binding reference built from the tables in [`crate::keys`].

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// All help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Changes", keys::CHANGES_KEYS);
    push_section(&mut lines, "Text input", keys::INPUT_KEYS);
    push_section(&mut lines, "Diff / Output", keys::TEXT_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render help content
///
/// `scroll` is the first line shown.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" svn-panel - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
