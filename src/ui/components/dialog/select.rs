//! Select dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Dialog, DialogKind, DialogResult, SelectItem, centered_rect, keys};
use crate::ui::navigation;

impl Dialog {
    pub(super) fn handle_select_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        let DialogKind::Select {
            items,
            single_select,
            ..
        } = &mut self.kind
        else {
            return None;
        };
        let single_select = *single_select;

        match key.code {
            k if keys::is_move_down(k) => {
                self.cursor = navigation::select_next(self.cursor, items.len().saturating_sub(1));
                None
            }
            k if keys::is_move_up(k) => {
                self.cursor = navigation::select_prev(self.cursor);
                None
            }
            KeyCode::Char(' ') if !single_select => {
                if let Some(item) = items.get_mut(self.cursor) {
                    item.selected = !item.selected;
                }
                None
            }
            KeyCode::Enter => {
                let values: Vec<String> = if single_select {
                    items
                        .get(self.cursor)
                        .map(|item| vec![item.value.clone()])
                        .unwrap_or_default()
                } else {
                    items
                        .iter()
                        .filter(|item| item.selected)
                        .map(|item| item.value.clone())
                        .collect()
                };
                if values.is_empty() {
                    Some(DialogResult::Cancelled)
                } else {
                    Some(DialogResult::Confirmed(values))
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(DialogResult::Cancelled),
            _ => None,
        }
    }

    pub(super) fn render_select(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        message: &str,
        items: &[SelectItem],
        single_select: bool,
    ) {
        let width = 56.min(area.width.saturating_sub(4));
        // borders + message block + blank + hint line
        let height = u16::try_from(items.len())
            .unwrap_or(u16::MAX)
            .saturating_add(7)
            .min(area.height.saturating_sub(4));
        let visible = height.saturating_sub(7) as usize;
        let offset = navigation::adjust_scroll(self.cursor, 0, visible);

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let mut lines = vec![Line::from(""), Line::from(message.to_string()), Line::from("")];

        for (i, item) in items.iter().enumerate().skip(offset).take(visible) {
            let cursor = if i == self.cursor { "> " } else { "  " };
            let style = if i == self.cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let text = if single_select {
                format!("{}{}", cursor, item.label)
            } else {
                let checkbox = if item.selected { "[x]" } else { "[ ]" };
                format!("{}{} {}", cursor, checkbox, item.label)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        lines.push(Line::from(""));

        let mut hints = vec![
            Span::styled("[j/k]", Style::default().fg(Color::Cyan)),
            Span::raw(" Move "),
        ];
        if !single_select {
            hints.push(Span::styled("[Space]", Style::default().fg(Color::Green)));
            hints.push(Span::raw(" Toggle "));
        }
        hints.extend([
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Select "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]);
        lines.push(Line::from(hints));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, dialog_area);
    }
}
