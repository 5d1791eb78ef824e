//! Source-control facade
//!
//! Runs svn through a [`CommandRunner`], reconciles `svn status` into
//! groups and publishes each complete result by whole-value replacement.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use scopeguard::ScopeGuard;
use tempfile::NamedTempFile;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::model::{Reconciliation, ResourceOrder, RevisionEntry, WorkingCopyInfo};
use crate::svn::parser::Parser;
use crate::svn::{CommandRunner, Invocation, Revision};

use super::error::ScmError;
use super::state::{OperationalState, ScmEvent, Snapshot};
use super::target::{ChangelistChoice, ChangelistTarget, CommitTarget, ScmTarget};

/// Capacity of the facade event channel
const EVENT_CAPACITY: usize = 64;

/// Content of a file at some revision, ready for a side-by-side comparison
#[derive(Debug)]
pub struct DiffTarget {
    /// Transient copy of the file at the revision (removed on drop)
    pub base: NamedTempFile,
    /// Working file
    pub working: PathBuf,
    pub title: String,
}

impl DiffTarget {
    pub fn base_path(&self) -> &Path {
        self.base.path()
    }
}

/// svn working copy as seen by the side panel
pub struct SourceControl<R> {
    runner: R,
    root: PathBuf,
    order: ResourceOrder,
    snapshot: watch::Sender<Snapshot>,
    state: watch::Sender<OperationalState>,
    in_flight: AtomicUsize,
    started: AtomicU64,
    events: broadcast::Sender<ScmEvent>,
}

impl<R: CommandRunner> SourceControl<R> {
    pub fn new(runner: R, root: impl Into<PathBuf>) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::default());
        let (state, _) = watch::channel(OperationalState::Idle);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            runner,
            root: root.into(),
            order: ResourceOrder::default(),
            snapshot,
            state,
            in_flight: AtomicUsize::new(0),
            started: AtomicU64::new(0),
            events,
        }
    }

    pub fn with_order(mut self, order: ResourceOrder) -> Self {
        self.order = order;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Working copy root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Latest applied reconciliation
    pub fn current(&self) -> Arc<Reconciliation> {
        Arc::clone(&self.snapshot.borrow().reconciliation)
    }

    /// Generation of the latest applied reconciliation
    pub fn generation(&self) -> u64 {
        self.snapshot.borrow().generation
    }

    /// Watch reconciliation replacements
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    pub fn state(&self) -> OperationalState {
        *self.state.borrow()
    }

    pub fn watch_state(&self) -> watch::Receiver<OperationalState> {
        self.state.subscribe()
    }

    pub fn events(&self) -> broadcast::Receiver<ScmEvent> {
        self.events.subscribe()
    }

    pub fn has_changes(&self) -> bool {
        self.snapshot.borrow().reconciliation.has_changes()
    }

    pub fn resource_count(&self) -> usize {
        self.snapshot.borrow().reconciliation.resource_count()
    }

    // ── Status ───────────────────────────────────────────────────────

    /// Run `svn status` and replace the current reconciliation
    ///
    /// A result only replaces one from an older refresh; a slower, earlier
    /// refresh finishing last is discarded.
    pub async fn refresh(&self) -> Result<Arc<Reconciliation>, ScmError> {
        let ticket = self.started.fetch_add(1, Ordering::SeqCst) + 1;
        let output = self.run(Invocation::status()).await?;

        let reconciliation = Arc::new(Parser::reconcile(&output, &self.root, self.order));
        let resource_count = reconciliation.resource_count();
        let applied = self.snapshot.send_if_modified(|snapshot| {
            if ticket > snapshot.generation {
                *snapshot = Snapshot {
                    generation: ticket,
                    reconciliation: Arc::clone(&reconciliation),
                };
                true
            } else {
                false
            }
        });

        if applied {
            debug!(generation = ticket, resources = resource_count, "status refreshed");
            let _ = self.events.send(ScmEvent::Refreshed {
                generation: ticket,
                resource_count,
            });
        } else {
            debug!(generation = ticket, "discarding superseded status result");
        }
        Ok(self.current())
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// `svn commit`; the message must be non-blank
    pub async fn commit(&self, target: CommitTarget, message: &str) -> Result<String, ScmError> {
        if message.trim().is_empty() {
            return Err(ScmError::EmptyCommitMessage);
        }
        let invocation = match target {
            CommitTarget::Paths(paths) => {
                if paths.is_empty() {
                    return Err(ScmError::NoActiveSelection);
                }
                Invocation::commit_paths(&paths, message)
            }
            CommitTarget::Changelist(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ScmError::EmptyChangelistName);
                }
                Invocation::commit_changelist(name, message)
            }
            CommitTarget::DefaultGroup => {
                let current = self.current();
                let paths: Vec<PathBuf> = current
                    .default_group()
                    .resources
                    .iter()
                    .filter(|r| !r.status().is_unversioned())
                    .map(|r| r.path().to_path_buf())
                    .collect();
                if paths.is_empty() {
                    return Err(ScmError::NoResource {
                        target: current.default_group().id.to_string(),
                    });
                }
                Invocation::commit_paths(&paths, message)
            }
        };
        let output = self.mutate(invocation).await?;
        info!("commit finished");
        Ok(output)
    }

    /// `svn add`
    pub async fn add(&self, paths: &[PathBuf]) -> Result<String, ScmError> {
        if paths.is_empty() {
            return Err(ScmError::NoActiveSelection);
        }
        self.mutate(Invocation::add(paths)).await
    }

    /// `svn revert`, with infinite depth when any path is a directory
    pub async fn revert_paths(&self, paths: &[PathBuf]) -> Result<String, ScmError> {
        if paths.is_empty() {
            return Err(ScmError::NoActiveSelection);
        }
        let mut recursive = false;
        for path in paths {
            if tokio::fs::metadata(path)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false)
            {
                recursive = true;
                break;
            }
        }
        self.mutate(Invocation::revert_paths(paths, recursive)).await
    }

    /// Revert every file in a changelist
    pub async fn revert_changelist(&self, name: &str) -> Result<String, ScmError> {
        let name = non_blank_changelist(name)?;
        self.mutate(Invocation::revert_changelist(name)).await
    }

    /// Revert the whole working copy
    pub async fn revert_working_copy(&self) -> Result<String, ScmError> {
        self.mutate(Invocation::revert_working_copy()).await
    }

    /// Put a file in a changelist, or take it out with [`ChangelistTarget::Default`]
    pub async fn move_to_changelist(
        &self,
        path: &Path,
        target: ChangelistTarget,
    ) -> Result<String, ScmError> {
        let invocation = match target {
            ChangelistTarget::Default => Invocation::changelist_remove(path),
            ChangelistTarget::Named(name) => {
                Invocation::changelist_add(non_blank_changelist(&name)?, path)
            }
        };
        self.mutate(invocation).await
    }

    /// Dissolve a changelist; its files move back to the default group
    pub async fn delete_changelist(&self, name: &str) -> Result<String, ScmError> {
        let name = non_blank_changelist(name)?;
        self.mutate(Invocation::changelist_delete(name)).await
    }

    /// `svn update` on the whole working copy
    pub async fn update_working_copy(&self) -> Result<String, ScmError> {
        self.mutate(Invocation::update(None)).await
    }

    /// `svn update` on one path
    pub async fn update_path(&self, path: &Path) -> Result<String, ScmError> {
        self.mutate(Invocation::update(Some(path))).await
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Fetch `path` at `revision` into a transient file for comparison
    pub async fn diff(&self, path: &Path, revision: Revision) -> Result<DiffTarget, ScmError> {
        let content = self.run(Invocation::cat(path, revision)).await?;

        let mut builder = tempfile::Builder::new();
        builder.prefix("svn-panel-");
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        builder.suffix(&suffix);
        let mut base = builder.tempfile()?;
        base.write_all(content.as_bytes())?;
        base.flush()?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(DiffTarget {
            base,
            working: path.to_path_buf(),
            title: format!("Compare {} current with revision {}", file_name, revision),
        })
    }

    /// Revisions that touched `path`, newest first
    pub async fn path_revisions(&self, path: &Path) -> Result<Vec<RevisionEntry>, ScmError> {
        let output = self.run(Invocation::log(path)).await?;
        Ok(Parser::parse_log(&output))
    }

    /// `svn info` of the working copy root
    pub async fn info(&self) -> Result<WorkingCopyInfo, ScmError> {
        let output = self.run(Invocation::info()).await?;
        Ok(Parser::parse_info(&output))
    }

    /// Last segment of the repository root URL
    pub async fn repository_name(&self) -> Result<Option<String>, ScmError> {
        let info = self.info().await?;
        Ok(info.repository_name().map(str::to_string))
    }

    /// File content at a revision, or empty text when svn cannot provide it
    pub async fn original_content(&self, path: &Path, revision: Revision) -> String {
        let _syncing = self.enter_syncing();
        match self
            .runner
            .run(Invocation::cat(path, revision).current_dir(&self.root))
            .await
        {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no original content");
                String::new()
            }
        }
    }

    /// Destinations for commit and move-to-changelist pickers
    pub fn changelist_choices(&self, include_new: bool) -> Vec<ChangelistChoice> {
        let current = self.current();
        let mut choices = vec![ChangelistChoice::Default];
        choices.extend(
            current
                .changelist_names()
                .into_iter()
                .map(|name| ChangelistChoice::Existing(name.to_string())),
        );
        if include_new {
            choices.push(ChangelistChoice::New);
        }
        choices
    }

    // ── Target resolution ────────────────────────────────────────────

    /// Absolute paths a target stands for
    pub fn resolve_paths(&self, target: Option<&ScmTarget>) -> Result<Vec<PathBuf>, ScmError> {
        match target.ok_or(ScmError::NoActiveSelection)? {
            ScmTarget::File(path) => Ok(vec![path.clone()]),
            ScmTarget::Group(id) => {
                let paths: Vec<PathBuf> = self
                    .current()
                    .group(id)
                    .map(|g| g.resources.iter().map(|r| r.path().to_path_buf()).collect())
                    .unwrap_or_default();
                if paths.is_empty() {
                    Err(ScmError::NoResource {
                        target: id.to_string(),
                    })
                } else {
                    Ok(paths)
                }
            }
        }
    }

    /// Changelist a target belongs to
    pub fn resolve_changelist(&self, target: Option<&ScmTarget>) -> Result<String, ScmError> {
        let target = target.ok_or(ScmError::NoActiveSelection)?;
        let name = match target {
            ScmTarget::Group(id) => id.changelist().map(str::to_string),
            ScmTarget::File(path) => self
                .current()
                .find_resource(path)
                .and_then(|(group, _)| group.id.changelist().map(str::to_string)),
        };
        name.ok_or_else(|| ScmError::NoResource {
            target: target.describe(),
        })
    }

    // ── Plumbing ─────────────────────────────────────────────────────

    /// Run one command, then refresh on success
    ///
    /// A failing follow-up refresh is reported as an event only.
    async fn mutate(&self, invocation: Invocation) -> Result<String, ScmError> {
        let output = self.run(invocation).await?;
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "refresh after command failed");
        }
        Ok(output)
    }

    async fn run(&self, invocation: Invocation) -> Result<String, ScmError> {
        let invocation = if invocation.cwd.is_some() {
            invocation
        } else {
            invocation.current_dir(&self.root)
        };
        let _syncing = self.enter_syncing();
        self.runner.run(invocation).await.map_err(|e| {
            let err = ScmError::from(e);
            warn!(error = %err, "svn operation failed");
            let _ = self.events.send(ScmEvent::Failed {
                message: err.to_string(),
            });
            err
        })
    }

    fn enter_syncing(&self) -> ScopeGuard<&Self, fn(&Self)> {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            self.state.send_replace(OperationalState::Syncing);
        }
        scopeguard::guard(self, Self::leave_syncing as fn(&Self))
    }

    fn leave_syncing(&self) {
        if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.state.send_replace(OperationalState::Idle);
        }
    }
}

fn non_blank_changelist(name: &str) -> Result<&str, ScmError> {
    let name = name.trim();
    if name.is_empty() {
        Err(ScmError::EmptyChangelistName)
    } else {
        Ok(name)
    }
}
