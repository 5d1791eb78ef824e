//! Resource data model

use std::path::{Path, PathBuf};

use super::status_code::{Decorations, StatusCode};

/// One file known to svn, as reported by a single status scan
///
/// Rebuilt from scratch on every reconciliation; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    path: PathBuf,
    relative: String,
    status: StatusCode,
}

/// What activating a resource should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAction {
    /// Compare the working file against `HEAD`
    DiffAgainstHead,
    /// Open the working file
    OpenFile,
    /// The file no longer exists locally
    Nothing,
}

impl Resource {
    /// Build a resource from a path as printed by svn, relative to `root`
    pub fn new(root: &Path, raw_path: &str, status: StatusCode) -> Self {
        Self {
            path: root.join(raw_path),
            relative: raw_path.to_string(),
            status,
        }
    }

    /// Absolute path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path exactly as svn printed it
    pub fn relative(&self) -> &str {
        &self.relative
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn decorations(&self) -> Decorations {
        self.status.decorations()
    }

    pub fn open_action(&self) -> OpenAction {
        match self.status {
            StatusCode::Modified => OpenAction::DiffAgainstHead,
            StatusCode::Deleted | StatusCode::Missing => OpenAction::Nothing,
            _ => OpenAction::OpenFile,
        }
    }
}
