//! Changes view rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{ChangesView, Row};
use crate::model::{Notification, Resource};
use crate::ui::{components, navigation, symbols, theme};

impl ChangesView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" svn-panel - Changes ")
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )
            .centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if !self.loaded {
            let content = components::empty_state("Loading...", None).block(block);
            frame.render_widget(content, area);
            return;
        }
        if self.is_clean() {
            let content = components::clean_working_copy_state().block(block);
            frame.render_widget(content, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        self.scroll_offset =
            navigation::adjust_scroll(self.selected_index, self.scroll_offset, visible);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
            .map(|(idx, row)| build_row_line(row, idx == self.selected_index))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Build the line for one row
pub(crate) fn build_row_line(row: &Row, is_selected: bool) -> Line<'static> {
    let cursor = if is_selected {
        symbols::markers::CURSOR
    } else {
        symbols::markers::BLANK
    };

    let mut line = match row {
        Row::Header { label, count, .. } => Line::from(vec![
            Span::raw(cursor),
            Span::styled(
                format!("{}{}", symbols::markers::GROUP, label),
                Style::default()
                    .fg(theme::changes_view::GROUP_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", count),
                Style::default().fg(theme::changes_view::GROUP_COUNT),
            ),
        ]),
        Row::Resource { resource, .. } => build_resource_line(cursor, resource),
    };

    if is_selected {
        line = line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG)
                .add_modifier(Modifier::BOLD),
        );
    }
    line
}

fn build_resource_line(cursor: &'static str, resource: &Resource) -> Line<'static> {
    let decorations = resource.decorations();
    let color = theme::icon_color(decorations.icon);

    let mut path_style = Style::default();
    if decorations.strikethrough {
        path_style = path_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if decorations.faded {
        path_style = path_style.add_modifier(Modifier::DIM);
    }

    Line::from(vec![
        Span::raw(cursor),
        Span::raw("  "),
        Span::styled(
            format!("{} {} ", symbols::icon(decorations.icon), resource.status()),
            Style::default().fg(color),
        ),
        Span::styled(resource.relative().to_string(), path_style),
    ])
}
