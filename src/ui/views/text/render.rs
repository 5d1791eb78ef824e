//! Text view rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::{TextKind, TextView};
use crate::ui::{components, navigation, theme};

impl TextView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(format!(" {} ", self.title))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )
            .centered();
        let block = components::bordered_block(title);

        if self.lines.is_empty() {
            let message = match self.kind {
                TextKind::Diff => "No differences.",
                TextKind::Plain => "Empty.",
            };
            let content = components::empty_state(message, None).block(block);
            frame.render_widget(content, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        self.scroll_offset = self
            .scroll_offset
            .min(navigation::max_scroll(self.lines.len(), visible));

        let lines: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible)
            .map(|text| styled_line(text, self.kind))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Color a line according to the view kind
pub(crate) fn styled_line(text: &str, kind: TextKind) -> Line<'static> {
    let line = Line::from(text.to_string());
    if kind == TextKind::Plain {
        return line;
    }

    let color = if text.starts_with("+++") || text.starts_with("---") {
        Some(theme::text_view::FILE_HEADER)
    } else if text.starts_with("@@") {
        Some(theme::text_view::HUNK_HEADER)
    } else if text.starts_with('+') {
        Some(theme::text_view::ADDED)
    } else if text.starts_with('-') {
        Some(theme::text_view::REMOVED)
    } else {
        None
    };

    match color {
        Some(color) => line.style(Style::default().fg(color)),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_line_colors() {
        let fg = |text: &str| styled_line(text, TextKind::Diff).style.fg;
        assert_eq!(fg("+added"), Some(theme::text_view::ADDED));
        assert_eq!(fg("-removed"), Some(theme::text_view::REMOVED));
        assert_eq!(fg("@@ -1,2 +1,2 @@"), Some(theme::text_view::HUNK_HEADER));
        assert_eq!(fg("--- base"), Some(theme::text_view::FILE_HEADER));
        assert_eq!(fg(" context"), None);
    }

    #[test]
    fn test_plain_lines_are_uncolored() {
        assert_eq!(styled_line("+not a diff", TextKind::Plain).style.fg, None);
    }
}
