//! Error and notification message components
//!
//! Provides consistent styling for error messages and notifications.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for overlay display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Label and colors of a notification kind
pub fn notification_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
        NotificationKind::Error => ("Error:", Color::Red),
    }
}

/// Build a notification line for title bar display
///
/// If `max_width` is provided and the notification is too long,
/// it will be truncated with "…" at the end.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = notification_style(notification.kind);
    let message = &notification.message;

    // " | " + label + " " + message + " "
    let separator_width = 3;
    let label_width = label.len() + 1;
    let full_width = separator_width + label_width + message.chars().count() + 1;

    let text = match max_width {
        Some(max) if full_width > max => {
            // +2 for "… "
            let available = max.saturating_sub(separator_width + label_width + 2);
            if available == 0 {
                return Line::default();
            }
            let truncated: String = message.chars().take(available).collect();
            format!("{}… ", truncated)
        }
        _ => format!("{} ", message),
    };

    if text.trim().is_empty() {
        return Line::default();
    }

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(text, Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_line() {
        let line = build_error_line("svn: E155007: not a working copy");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, " Error: ");
        assert_eq!(line.spans[1].content, " svn: E155007: not a working copy ");
    }

    #[test]
    fn test_notification_title_fits() {
        let n = Notification::success("Committed revision 5.");
        let line = build_notification_title(&n, None);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "Success: ");
        assert_eq!(line.spans[2].content, "Committed revision 5. ");
    }

    #[test]
    fn test_notification_title_truncates() {
        let n = Notification::info("abcdefghijklmnopqrstuvwxyz");
        let line = build_notification_title(&n, Some(20));
        // 20 - (3 + 6 + 2) = 9 characters kept
        assert_eq!(line.spans[2].content, "abcdefghi… ");
        assert!(line.width() <= 20);
    }

    #[test]
    fn test_notification_title_too_narrow_is_empty() {
        let n = Notification::warning("No selection");
        let line = build_notification_title(&n, Some(5));
        assert!(line.spans.is_empty());
    }

    #[test]
    fn test_error_kind_style() {
        assert_eq!(notification_style(NotificationKind::Error), ("Error:", Color::Red));
    }
}
