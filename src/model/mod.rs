//! Data models for svn-panel
//!
//! UI-independent data structures: resources, changelist groups and the
//! result of reconciling one `svn status` scan.

mod group;
mod notification;
mod reconciliation;
mod resource;
mod revision;
mod status_code;

pub use group::{Group, GroupId, ParseGroupIdError, ResourceOrder};
pub use notification::{Notification, NotificationKind};
pub use reconciliation::{ChangedFile, ParseAnomaly, Reconciliation};
pub use resource::{OpenAction, Resource};
pub use revision::{RevisionEntry, WorkingCopyInfo};
pub use status_code::{Decorations, IconCategory, StatusCode};
