//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use super::STATUS_BAR_HEIGHT;
use crate::ui::components;

/// Render an error message just above the status bar
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let area = frame.area();
    if area.height < STATUS_BAR_HEIGHT + 2 {
        return;
    }
    let error_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - STATUS_BAR_HEIGHT - 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    // Multi-line stderr: the first line is the useful one
    let first_line = error.lines().next().unwrap_or_default();
    let error_line = components::build_error_line(first_line);
    frame.render_widget(Paragraph::new(error_line), error_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_error_banner_shows_first_line_above_status_bar() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render_error_banner(frame, "svn: E155007: not a working copy\nmore"))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = (0..60).map(|x| buffer[(x, 8)].symbol().to_string()).collect();
        assert!(row.contains("Error:"));
        assert!(row.contains("E155007"));
        assert!(!row.contains("more"));
    }

    #[test]
    fn test_error_banner_skipped_on_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        terminal
            .draw(|frame| render_error_banner(frame, "boom"))
            .unwrap();
    }
}
