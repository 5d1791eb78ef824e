//! Result of one status scan

use std::path::Path;

use super::group::{Group, GroupId};
use super::resource::Resource;
use super::status_code::StatusCode;

/// Flat descriptor of one changed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub path: String,
    pub status: StatusCode,
    pub group: GroupId,
}

/// Something odd in the status output that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAnomaly {
    /// A non-blank line matching neither a header nor an entry
    UnrecognizedLine { line_number: usize, text: String },
    /// A changelist header seen more than once
    DuplicateChangelist { name: String },
}

/// Grouped view of the working copy
///
/// The default group always exists; the unversioned group is only
/// reported when it holds something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    default: Group,
    pending: Vec<Group>,
    unversioned: Group,
    changed_files: Vec<ChangedFile>,
    anomalies: Vec<ParseAnomaly>,
}

impl Default for Reconciliation {
    fn default() -> Self {
        Self::new(
            Group::new(GroupId::Default),
            Vec::new(),
            Group::new(GroupId::Unversioned),
        )
    }
}

impl Reconciliation {
    pub fn new(default: Group, pending: Vec<Group>, unversioned: Group) -> Self {
        let mut result = Self {
            default,
            pending,
            unversioned,
            changed_files: Vec::new(),
            anomalies: Vec::new(),
        };
        let changed_files = result
            .groups()
            .flat_map(|g| {
                g.resources.iter().map(|r| ChangedFile {
                    path: r.relative().to_string(),
                    status: r.status(),
                    group: g.id.clone(),
                })
            })
            .collect();
        result.changed_files = changed_files;
        result
    }

    pub fn with_anomalies(mut self, anomalies: Vec<ParseAnomaly>) -> Self {
        self.anomalies = anomalies;
        self
    }

    /// Groups in display order: default, pending (first-seen order), unversioned
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        std::iter::once(&self.default)
            .chain(self.pending.iter())
            .chain(Some(&self.unversioned).filter(|g| !g.is_empty()))
    }

    pub fn default_group(&self) -> &Group {
        &self.default
    }

    pub fn pending_groups(&self) -> &[Group] {
        &self.pending
    }

    /// The unversioned group, if non-empty
    pub fn unversioned_group(&self) -> Option<&Group> {
        Some(&self.unversioned).filter(|g| !g.is_empty())
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups().find(|g| &g.id == id)
    }

    /// Changelist names in the order their headers were first seen
    pub fn changelist_names(&self) -> Vec<&str> {
        self.pending
            .iter()
            .filter_map(|g| g.id.changelist())
            .collect()
    }

    pub fn changed_files(&self) -> &[ChangedFile] {
        &self.changed_files
    }

    pub fn anomalies(&self) -> &[ParseAnomaly] {
        &self.anomalies
    }

    pub fn has_changes(&self) -> bool {
        !self.changed_files.is_empty()
    }

    /// Total number of resources across all groups
    pub fn resource_count(&self) -> usize {
        self.changed_files.len()
    }

    /// Find the group and resource for an absolute path
    pub fn find_resource(&self, path: &Path) -> Option<(&Group, &Resource)> {
        self.groups()
            .flat_map(|g| g.resources.iter().map(move |r| (g, r)))
            .find(|(_, r)| r.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceOrder;

    #[test]
    fn test_default_has_only_default_group() {
        let result = Reconciliation::default();
        let ids: Vec<_> = result.groups().map(|g| g.id.clone()).collect();
        assert_eq!(ids, vec![GroupId::Default]);
        assert!(!result.has_changes());
        assert_eq!(result.resource_count(), 0);
        assert!(result.unversioned_group().is_none());
    }

    #[test]
    fn test_groups_order_and_lookup() {
        let root = Path::new("/wc");
        let mut default = Group::new(GroupId::Default);
        default.insert(
            Resource::new(root, "a", StatusCode::Modified),
            ResourceOrder::Scan,
        );
        let mut pending = Group::new(GroupId::pending("cl"));
        pending.insert(
            Resource::new(root, "b", StatusCode::Added),
            ResourceOrder::Scan,
        );
        let mut unversioned = Group::new(GroupId::Unversioned);
        unversioned.insert(
            Resource::new(root, "c", StatusCode::Unversioned),
            ResourceOrder::Scan,
        );

        let result = Reconciliation::new(default, vec![pending], unversioned);
        let ids: Vec<String> = result.groups().map(|g| g.id.to_string()).collect();
        assert_eq!(ids, vec!["default", "pending:cl", "unversioned"]);
        assert_eq!(result.resource_count(), 3);
        assert_eq!(result.changelist_names(), vec!["cl"]);

        let (group, resource) = result.find_resource(Path::new("/wc/b")).unwrap();
        assert_eq!(group.id, GroupId::pending("cl"));
        assert_eq!(resource.status(), StatusCode::Added);

        assert_eq!(result.changed_files()[2].group, GroupId::Unversioned);
    }
}
