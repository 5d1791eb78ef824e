//! Notification banner widget
//!
//! Feedback line for views without a title bar slot (diff, output).

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use super::STATUS_BAR_HEIGHT;
use crate::model::Notification;
use crate::ui::components::notification_style;

/// Render a notification just above the status bar
pub fn render_notification_banner(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    if area.height < STATUS_BAR_HEIGHT + 2 {
        return;
    }
    let banner_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - STATUS_BAR_HEIGHT - 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let line = build_notification_line(notification);
    frame.render_widget(Paragraph::new(line), banner_area);
}

/// Build a styled line for the notification
pub fn build_notification_line(notification: &Notification) -> Line<'static> {
    let (label, color) = notification_style(notification.kind);

    Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(color),
        ),
    ])
}
