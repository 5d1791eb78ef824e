//! Working copy reload and background event draining

use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, warn};

use super::state::App;
use crate::scm::ScmEvent;
use crate::svn::CommandRunner;

impl<R: CommandRunner> App<R> {
    /// Re-run `svn status` and update the changes view
    pub fn refresh(&mut self) {
        match self.runtime.block_on(self.scm.refresh()) {
            Ok(_) => self.error_message = None,
            Err(e) => self.set_error(format!("svn status failed: {}", e)),
        }
        self.sync_with_scm();
    }

    /// Idle processing between key presses
    ///
    /// Advances the spinner, expires notifications and refreshes after
    /// working copy changes reported by the watcher.
    pub fn on_idle(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.clear_expired_notification();

        let changed = self.watcher.as_mut().is_some_and(|w| w.poll());
        if changed && self.config.auto_refresh_on_change && self.active_dialog.is_none() {
            debug!("working copy changed on disk");
            self.refresh();
        } else {
            self.sync_with_scm();
        }
    }

    /// Pull everything the facade and runner published since the last call
    pub(crate) fn sync_with_scm(&mut self) {
        self.drain_command_events();
        self.drain_scm_events();
        self.apply_snapshot();
    }

    fn apply_snapshot(&mut self) {
        if !self.snapshot_rx.has_changed().unwrap_or(false) {
            return;
        }
        let reconciliation = self.snapshot_rx.borrow_and_update().reconciliation.clone();
        self.changes_view.set_reconciliation(&reconciliation);
    }

    pub(crate) fn drain_command_events(&mut self) {
        let Some(ref mut events) = self.command_events else {
            return;
        };
        loop {
            match events.try_recv() {
                Ok(event) => self.output_view.push_event(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "output log lagged behind svn commands");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    fn drain_scm_events(&mut self) {
        loop {
            match self.scm_events.try_recv() {
                Ok(ScmEvent::Refreshed { .. }) => {}
                // Failures of user actions are already on screen; this
                // catches the refresh that follows a successful command
                Ok(ScmEvent::Failed { message }) => {
                    if self.error_message.is_none() {
                        self.notify_warning(format!("Refresh failed: {}", message));
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "dropped stale facade events");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }
}
