//! Input dialog key handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_textarea::TextArea;

use super::{Dialog, DialogKind, DialogResult, centered_rect, keys};

impl Dialog {
    pub(super) fn handle_input_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        let DialogKind::Input {
            textarea,
            multiline,
            ..
        } = &mut self.kind
        else {
            return None;
        };

        let submit = keys::is_submit_key(&key) || (!*multiline && key.code == KeyCode::Enter);
        if submit {
            let text = textarea.lines().join("\n");
            // Empty input = cancel
            return if text.trim().is_empty() {
                Some(DialogResult::Cancelled)
            } else {
                Some(DialogResult::Confirmed(vec![text]))
            };
        }

        if key.code == KeyCode::Esc {
            return Some(DialogResult::Cancelled);
        }

        // Everything else edits the text (Enter = newline in multi-line mode)
        textarea.input(key);
        None
    }

    pub(super) fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        textarea: &TextArea<'static>,
        multiline: bool,
    ) {
        let width = 64.min(area.width.saturating_sub(4));
        let text_height: u16 = if multiline { 8 } else { 1 };
        // borders + text + hint line
        let height = (text_height + 4).min(area.height.saturating_sub(2));

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(inner);
        frame.render_widget(textarea, chunks[0]);

        let submit_key = if multiline { "[^S]" } else { "[Enter]" };
        let hints = Line::from(vec![
            Span::styled(submit_key, Style::default().fg(Color::Green)),
            Span::raw(" OK  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]);
        let hint_area = Rect {
            y: chunks[1].y + 1,
            height: 1,
            ..chunks[1]
        }
        .intersection(inner);
        frame.render_widget(Paragraph::new(hints), hint_area);
    }
}
