//! What a command acts on
//!
//! The presentation layer decides whether the user pointed at a single file
//! or a whole group before calling into [`SourceControl`](super::SourceControl).

use std::path::PathBuf;

use crate::model::GroupId;

/// A single file or a whole group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmTarget {
    File(PathBuf),
    Group(GroupId),
}

impl ScmTarget {
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Group(id) => id.to_string(),
        }
    }
}

/// What to commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitTarget {
    /// Explicit paths
    Paths(Vec<PathBuf>),
    /// Every file in a named changelist
    Changelist(String),
    /// Versioned files outside any changelist
    DefaultGroup,
}

/// Destination of a move-to-changelist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelistTarget {
    /// Take the file out of its changelist
    Default,
    Named(String),
}

/// Entry of a changelist picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelistChoice {
    Default,
    Existing(String),
    /// Prompt for a new changelist name
    New,
}

impl ChangelistChoice {
    pub fn label(&self) -> String {
        match self {
            Self::Default => "default".to_string(),
            Self::Existing(name) => name.clone(),
            Self::New => "new changelist...".to_string(),
        }
    }
}
