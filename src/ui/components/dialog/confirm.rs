//! Confirm dialog: a question, the affected items and a Yes/No prompt

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Dialog, DialogResult, centered_rect};

/// Rows besides the item list: borders, padding, question, spacer, buttons
const FIXED_ROWS: u16 = 6;

/// Detail line plus the spacer below it
const DETAIL_ROWS: u16 = 2;

impl Dialog {
    pub(super) fn handle_confirm_key(&self, key: KeyEvent) -> Option<DialogResult> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(DialogResult::Confirmed(vec![]))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(DialogResult::Cancelled),
            _ => None,
        }
    }

    /// The first message line is the question; each further line is an
    /// affected path, listed as far as the screen allows
    pub(super) fn render_confirm(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        message: &str,
        detail: Option<&str>,
    ) {
        let mut message_lines = message.lines();
        let question = message_lines.next().unwrap_or_default();
        let items: Vec<&str> = message_lines.collect();

        let width = 56.min(area.width.saturating_sub(4));
        let max_height = area.height.saturating_sub(4);
        let fixed = FIXED_ROWS + if detail.is_some() { DETAIL_ROWS } else { 0 };
        let shown = fit_items(
            &items,
            usize::from(max_height.saturating_sub(fixed)),
            usize::from(width.saturating_sub(2)),
        );
        let height = u16::try_from(shown.len())
            .unwrap_or(u16::MAX)
            .saturating_add(fixed)
            .min(max_height);

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                question,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        ];
        lines.extend(
            shown
                .into_iter()
                .map(|item| Line::from(Span::styled(item, Style::default().fg(Color::Cyan)))),
        );
        lines.push(Line::from(""));

        if let Some(detail_text) = detail {
            lines.push(
                Line::from(Span::styled(
                    detail_text,
                    Style::default().fg(Color::Yellow),
                ))
                .alignment(Alignment::Center),
            );
            lines.push(Line::from(""));
        }

        lines.push(
            Line::from(vec![
                Span::styled("[Y]", Style::default().fg(Color::Green)),
                Span::raw("es       "),
                Span::styled("[N]", Style::default().fg(Color::Red)),
                Span::raw("o"),
            ])
            .alignment(Alignment::Center),
        );

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, dialog_area);
    }
}

/// Item lines fitting `rows` rows of `width` columns
///
/// Long items keep their tail. When the list does not fit, the last row
/// becomes `… and N more`.
fn fit_items(items: &[&str], rows: usize, width: usize) -> Vec<String> {
    if items.len() <= rows {
        return items.iter().map(|item| indent_tail(item, width)).collect();
    }
    let Some(kept) = rows.checked_sub(1) else {
        return Vec::new();
    };
    let mut lines: Vec<String> = items[..kept]
        .iter()
        .map(|item| indent_tail(item, width))
        .collect();
    lines.push(format!("  … and {} more", items.len() - kept));
    lines
}

/// `item` indented two columns, cut from the front to fit `width`
fn indent_tail(item: &str, width: usize) -> String {
    let room = width.saturating_sub(2);
    let count = item.chars().count();
    if count <= room {
        return format!("  {}", item);
    }
    let tail: String = item.chars().skip(count + 1 - room.max(1)).collect();
    format!("  …{}", tail)
}
