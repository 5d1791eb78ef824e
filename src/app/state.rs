//! Application state and view management

use std::cell::Cell;
use std::io;

use tokio::runtime::{Builder, Runtime};
use tokio::sync::{broadcast, watch};
use tracing::debug;

use crate::config::Config;
use crate::model::Notification;
use crate::scm::{ScmEvent, Snapshot, SourceControl, WorkingCopyWatcher};
use crate::svn::{CommandEvent, CommandRunner};
use crate::ui::components::Dialog;
use crate::ui::views::{ChangesView, OutputView, TextView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Changes,
    Output,
    /// Diff, file content or `svn info`
    Text,
    Help,
}

/// The main application state
pub struct App<R> {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Grouped working copy changes
    pub changes_view: ChangesView,
    /// svn command log
    pub output_view: OutputView,
    /// Text view state (created on demand)
    pub text_view: Option<TextView>,
    /// Help panel scroll position
    pub help_scroll: u16,
    /// Working copy facade
    pub scm: SourceControl<R>,
    pub config: Config,
    /// Drives facade futures from the UI thread
    pub(crate) runtime: Runtime,
    pub(crate) snapshot_rx: watch::Receiver<Snapshot>,
    pub(crate) scm_events: broadcast::Receiver<ScmEvent>,
    /// Runner command log (absent for runners without one)
    pub(crate) command_events: Option<broadcast::Receiver<CommandEvent>>,
    pub(crate) watcher: Option<WorkingCopyWatcher>,
    /// Shown next to the status badge
    pub repository_name: Option<String>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Last known frame height (updated during render, uses Cell for interior mutability)
    pub(crate) last_frame_height: Cell<u16>,
    /// Idle ticks, drives the Syncing spinner
    pub(crate) tick: usize,
}

impl<R: CommandRunner> App<R> {
    /// Construct a new instance of [`App`] and load the working copy status.
    ///
    /// # Errors
    ///
    /// Returns an error if the async runtime cannot be created.
    pub fn new(scm: SourceControl<R>, config: Config) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let snapshot_rx = scm.subscribe();
        let scm_events = scm.events();

        let mut app = Self {
            running: true,
            current_view: View::Changes,
            previous_view: None,
            changes_view: ChangesView::new(),
            output_view: OutputView::new(),
            text_view: None,
            help_scroll: 0,
            scm,
            config,
            runtime,
            snapshot_rx,
            scm_events,
            command_events: None,
            watcher: None,
            repository_name: None,
            error_message: None,
            notification: None,
            active_dialog: None,
            last_frame_height: Cell::new(24), // Default terminal height
            tick: 0,
        };

        app.refresh();
        if app.error_message.is_none() {
            app.load_repository_name();
        }

        Ok(app)
    }

    /// Mirror runner command events into the output view
    pub fn with_command_events(mut self, events: broadcast::Receiver<CommandEvent>) -> Self {
        self.command_events = Some(events);
        self.drain_command_events();
        self
    }

    /// Refresh when files in the working copy change
    pub fn with_watcher(mut self, watcher: WorkingCopyWatcher) -> Self {
        self.watcher = Some(watcher);
        self
    }

    fn load_repository_name(&mut self) {
        match self.runtime.block_on(self.scm.repository_name()) {
            Ok(name) => self.repository_name = name,
            Err(e) => {
                debug!(error = %e, "repository name unavailable");
                // The name is optional; drop its failure event
                self.scm_events = self.scm_events.resubscribe();
            }
        }
    }

    /// Switch between the changes and output views (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Changes => View::Output,
            View::Output | View::Text | View::Help => View::Changes,
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
            if view == View::Help {
                self.help_scroll = 0;
            }
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        let target = self.previous_view.take().unwrap_or_default();
        if self.current_view == View::Text {
            self.text_view = None;
        }
        // A closed text view is not a valid back target
        self.current_view = if target == View::Text && self.text_view.is_none() {
            View::Changes
        } else {
            target
        };
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
