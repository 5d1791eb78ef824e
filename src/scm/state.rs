use std::sync::Arc;

use crate::model::Reconciliation;

/// Whether any svn command is running (presentation only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationalState {
    #[default]
    Idle,
    Syncing,
}

/// Published reconciliation result
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Refresh that produced it (0 = nothing scanned yet)
    pub generation: u64,
    pub reconciliation: Arc<Reconciliation>,
}

/// Facade notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmEvent {
    /// A new reconciliation replaced the previous one
    Refreshed {
        generation: u64,
        resource_count: usize,
    },
    /// An operation failed; the previous reconciliation is kept
    Failed { message: String },
}
