//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::{App, View};
use crate::config::CountBadge;
use crate::keys::{self, SelectionKind};
use crate::model::Notification;
use crate::scm::OperationalState;
use crate::svn::CommandRunner;
use crate::ui::symbols;
use crate::ui::widgets::{
    STATUS_BAR_HEIGHT, StatusSummary, render_error_banner, render_help_panel,
    render_notification_banner, render_status_bar,
};

impl<R: CommandRunner> App<R> {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_frame_height.set(area.height);

        // Clone notification to avoid borrow conflict with &mut self in view rendering
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        let main_area = Rect {
            height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
            ..area
        };

        match self.current_view {
            View::Changes => {
                self.changes_view
                    .render(frame, main_area, notification.as_ref());
            }
            View::Output => self.output_view.render(frame, main_area),
            View::Text => match self.text_view {
                Some(ref mut text_view) => text_view.render(frame, main_area),
                None => self.changes_view.render(frame, main_area, None),
            },
            View::Help => render_help_panel(frame, main_area, self.help_scroll),
        }

        let hints = keys::current_hints(self.current_view, self.selection_kind());
        render_status_bar(frame, &self.status_summary(), hints);

        // Errors take the banner row; notifications use it only outside the
        // changes view, which shows them in its title bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        } else if let Some(ref n) = notification
            && self.current_view != View::Changes
        {
            render_notification_banner(frame, n);
        }

        // Render dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, area);
        }
    }

    fn selection_kind(&self) -> SelectionKind {
        if self.current_view == View::Changes {
            self.changes_view.selection_kind()
        } else {
            SelectionKind::Nothing
        }
    }

    /// Badges for the status bar
    pub(crate) fn status_summary(&self) -> StatusSummary {
        let syncing = (self.scm.state() == OperationalState::Syncing)
            .then(|| symbols::spinner_frame(self.tick));
        StatusSummary {
            repository: self.repository_name.clone(),
            has_changes: self.scm.has_changes(),
            count: match self.config.count_badge {
                CountBadge::All => Some(self.scm.resource_count()),
                CountBadge::Off => None,
            },
            syncing,
        }
    }

    /// Current notification, if not yet expired
    pub fn active_notification(&self) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired())
    }
}
