//! Changes view
//!
//! Groups and their resources flattened into one selectable list:
//! a header row per group followed by its resources.

mod input;
mod render;

use std::path::{Path, PathBuf};

use crate::keys::SelectionKind;
use crate::model::{GroupId, Reconciliation, Resource};
use crate::scm::ScmTarget;
use crate::ui::navigation;

/// One row of the changes list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Header {
        id: GroupId,
        label: String,
        count: usize,
    },
    Resource {
        group: GroupId,
        resource: Resource,
    },
}

impl Row {
    fn matches(&self, key: &RowKey) -> bool {
        match (self, key) {
            (Row::Header { id, .. }, RowKey::Group(k)) => id == k,
            (Row::Resource { resource, .. }, RowKey::Path(p)) => resource.path() == p,
            _ => false,
        }
    }

    fn key(&self) -> RowKey {
        match self {
            Row::Header { id, .. } => RowKey::Group(id.clone()),
            Row::Resource { resource, .. } => RowKey::Path(resource.path().to_path_buf()),
        }
    }
}

/// Identity of a row across refreshes
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowKey {
    Group(GroupId),
    Path(PathBuf),
}

/// Action requested by the changes view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangesAction {
    None,
    /// The key needs a selection and there is none
    NoSelection,
    Open(Resource),
    DiffHead(PathBuf),
    PickRevision(PathBuf),
    Commit(ScmTarget),
    CommitChangelist,
    Add(ScmTarget),
    Revert(ScmTarget),
    RevertWorkingCopy,
    MoveToChangelist(PathBuf),
    DeleteChangelist(ScmTarget),
    Info,
    UpdateWorkingCopy,
    UpdatePath(PathBuf),
}

/// Changes view state
#[derive(Debug, Default)]
pub struct ChangesView {
    rows: Vec<Row>,
    /// Whether a status scan has been applied yet
    loaded: bool,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

impl ChangesView {
    /// Default visible count for navigation before the first render
    pub(crate) const DEFAULT_VISIBLE_COUNT: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a new reconciliation, keeping the selection on
    /// the same file or group when it still exists
    pub fn set_reconciliation(&mut self, reconciliation: &Reconciliation) {
        let previous = self.selected_row().map(Row::key);

        self.rows = reconciliation
            .groups()
            .flat_map(|group| {
                std::iter::once(Row::Header {
                    id: group.id.clone(),
                    label: group.label.clone(),
                    count: group.len(),
                })
                .chain(group.resources.iter().map(|resource| Row::Resource {
                    group: group.id.clone(),
                    resource: resource.clone(),
                }))
            })
            .collect();
        self.loaded = true;

        self.selected_index = previous
            .and_then(|key| self.rows.iter().position(|row| row.matches(&key)))
            .unwrap_or_else(|| self.selected_index.min(self.rows.len().saturating_sub(1)));
        self.scroll_offset = navigation::adjust_scroll(
            self.selected_index,
            self.scroll_offset,
            Self::DEFAULT_VISIBLE_COUNT,
        );
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True when every group is empty
    pub fn is_clean(&self) -> bool {
        !self.rows.iter().any(|row| matches!(row, Row::Resource { .. }))
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.selected_index)
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        match self.selected_row()? {
            Row::Resource { resource, .. } => Some(resource),
            Row::Header { .. } => None,
        }
    }

    /// Path of the selected file
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected_resource().map(Resource::path)
    }

    /// The selected file, or the group under a selected header
    pub fn selected_target(&self) -> Option<ScmTarget> {
        match self.selected_row()? {
            Row::Header { id, .. } => Some(ScmTarget::Group(id.clone())),
            Row::Resource { resource, .. } => Some(ScmTarget::File(resource.path().to_path_buf())),
        }
    }

    pub fn selection_kind(&self) -> SelectionKind {
        match self.selected_row() {
            None => SelectionKind::Nothing,
            Some(Row::Resource { .. }) => SelectionKind::File,
            Some(Row::Header {
                id: GroupId::Pending(_),
                ..
            }) => SelectionKind::Changelist,
            Some(Row::Header { .. }) => SelectionKind::OtherGroup,
        }
    }

    fn move_down(&mut self, visible_count: usize) {
        let max = self.rows.len().saturating_sub(1);
        self.selected_index = navigation::select_next(self.selected_index, max);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected_index, self.scroll_offset, visible_count);
    }

    fn move_up(&mut self, visible_count: usize) {
        self.selected_index = navigation::select_prev(self.selected_index);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected_index, self.scroll_offset, visible_count);
    }

    fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    fn jump_to_bottom(&mut self, visible_count: usize) {
        if !self.rows.is_empty() {
            self.selected_index = self.rows.len() - 1;
            self.scroll_offset =
                navigation::adjust_scroll(self.selected_index, self.scroll_offset, visible_count);
        }
    }

    /// Select the next group header; false when there is none
    fn next_group(&mut self, visible_count: usize) -> bool {
        let found = self
            .rows
            .iter()
            .enumerate()
            .skip(self.selected_index + 1)
            .find(|(_, row)| matches!(row, Row::Header { .. }))
            .map(|(idx, _)| idx);
        self.select_found(found, visible_count)
    }

    /// Select the previous group header; false when there is none
    fn prev_group(&mut self, visible_count: usize) -> bool {
        let found = self.rows[..self.selected_index.min(self.rows.len())]
            .iter()
            .rposition(|row| matches!(row, Row::Header { .. }));
        self.select_found(found, visible_count)
    }

    fn select_found(&mut self, found: Option<usize>, visible_count: usize) -> bool {
        match found {
            Some(idx) => {
                self.selected_index = idx;
                self.scroll_offset =
                    navigation::adjust_scroll(idx, self.scroll_offset, visible_count);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
