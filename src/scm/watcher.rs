//! Working copy file watcher
//!
//! Collects file-system events under the working copy and tells the caller
//! when a debounced refresh is due. svn's own `.svn` directory is ignored.

use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

/// svn administrative directory
const SVN_ADMIN_DIR: &str = ".svn";

/// Quiet period before a refresh is requested
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

pub struct WorkingCopyWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    debounce: Duration,
    pending_since: Option<Instant>,
}

impl WorkingCopyWatcher {
    /// Watch `root` recursively
    pub fn new(root: &Path, debounce: Duration) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(root, RecursiveMode::Recursive)?;
        debug!(root = %root.display(), "watching working copy");

        Ok(Self {
            _watcher: watcher,
            rx,
            debounce,
            pending_since: None,
        })
    }

    /// Drain pending events; true once changes have been quiet for the debounce period
    pub fn poll(&mut self) -> bool {
        while let Ok(res) = self.rx.try_recv() {
            match res {
                Ok(event) if is_relevant(&event) => {
                    self.pending_since = Some(Instant::now());
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "file watcher error"),
            }
        }

        match self.pending_since {
            Some(since) if since.elapsed() >= self.debounce => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

/// True for events touching anything outside `.svn`
pub fn is_relevant(event: &Event) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    event.paths.iter().any(|p| !is_admin_path(p))
}

fn is_admin_path(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == SVN_ADMIN_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use std::path::PathBuf;

    #[test]
    fn test_working_file_change_is_relevant() {
        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/wc/src/a.rs"));
        assert!(is_relevant(&event));
    }

    #[test]
    fn test_admin_dir_change_is_ignored() {
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/wc/.svn/wc.db-journal"));
        assert!(!is_relevant(&event));
    }

    #[test]
    fn test_access_is_ignored() {
        let event = Event::new(EventKind::Access(AccessKind::Any))
            .add_path(PathBuf::from("/wc/src/a.rs"));
        assert!(!is_relevant(&event));
    }

    #[test]
    fn test_watch_tempdir_and_debounce() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = WorkingCopyWatcher::new(dir.path(), Duration::ZERO).unwrap();
        assert!(!watcher.poll());

        // Simulate a queued change without relying on platform timing
        watcher.pending_since = Some(Instant::now());
        assert!(watcher.poll());
        assert!(!watcher.poll());
    }
}
