//! Status bar widget
//!
//! Left: `svn`/`svn*` badge, change counter, Syncing spinner and repository.
//! Right of that: key hints for the current view.

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;
use crate::ui::theme;

/// Rows used by the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Working copy summary shown at the start of the status bar
#[derive(Debug, Clone, Default)]
pub struct StatusSummary {
    pub repository: Option<String>,
    pub has_changes: bool,
    /// Change counter; `None` hides it
    pub count: Option<usize>,
    /// Spinner frame while a command runs
    pub syncing: Option<char>,
}

/// Build the working copy badges
pub fn build_status_prefix(summary: &StatusSummary) -> Vec<Span<'static>> {
    let (label, color) = if summary.has_changes {
        (" svn* ", theme::status_bar::DIRTY)
    } else {
        (" svn ", theme::status_bar::CLEAN)
    };
    let mut spans = vec![Span::styled(
        label,
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(count) = summary.count.filter(|c| *c > 0) {
        spans.push(Span::styled(
            format!(" {} ", count),
            Style::default().fg(color),
        ));
    }

    if let Some(frame) = summary.syncing {
        spans.push(Span::styled(
            format!(" {} Syncing ", frame),
            Style::default().fg(theme::status_bar::SYNCING),
        ));
    }

    if let Some(ref repository) = summary.repository {
        spans.push(Span::styled(
            format!(" {} ", repository),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans
}

/// Build a status bar line from badges and key hints
pub fn build_status_bar(prefix: Vec<Span<'static>>, hints: &[KeyHint]) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - STATUS_BAR_HEIGHT,
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    })
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, summary: &StatusSummary, hints: &[KeyHint]) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let line = build_status_bar(build_status_prefix(summary), hints);
    frame.render_widget(Paragraph::new(line), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{HINT_HELP, HINT_QUIT};

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_clean_badge() {
        let prefix = build_status_prefix(&StatusSummary::default());
        assert_eq!(text(&prefix), " svn ");
    }

    #[test]
    fn test_dirty_badge_with_count_and_spinner() {
        let summary = StatusSummary {
            repository: Some("proj".to_string()),
            has_changes: true,
            count: Some(3),
            syncing: Some('◐'),
        };
        assert_eq!(
            text(&build_status_prefix(&summary)),
            " svn*  3  ◐ Syncing  proj "
        );
    }

    #[test]
    fn test_zero_count_is_hidden() {
        let summary = StatusSummary {
            count: Some(0),
            ..StatusSummary::default()
        };
        assert_eq!(text(&build_status_prefix(&summary)), " svn ");
    }

    #[test]
    fn test_build_status_bar_appends_hints() {
        let line = build_status_bar(vec![Span::raw("X")], &[HINT_HELP, HINT_QUIT]);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "X  [?] Help   [q] Quit ");
    }
}
