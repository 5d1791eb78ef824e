//! Source-control facade
//!
//! Orchestrates svn invocations, status reconciliation and change
//! notification for the presentation layer.

mod error;
mod source_control;
mod state;
mod target;
mod watcher;

pub use error::ScmError;
pub use source_control::{DiffTarget, SourceControl};
pub use state::{OperationalState, ScmEvent, Snapshot};
pub use target::{ChangelistChoice, ChangelistTarget, CommitTarget, ScmTarget};
pub use watcher::{DEFAULT_DEBOUNCE, WorkingCopyWatcher, is_relevant};
