use std::io;

use thiserror::Error;

use crate::svn::SvnError;

/// Errors surfaced by [`SourceControl`](super::SourceControl) operations
#[derive(Error, Debug)]
pub enum ScmError {
    /// svn failed; the operation did not happen
    #[error(transparent)]
    Command(#[from] SvnError),

    #[error("Commit message is empty")]
    EmptyCommitMessage,

    #[error("Changelist name is empty")]
    EmptyChangelistName,

    #[error("Nothing selected")]
    NoActiveSelection,

    #[error("No matching resource for {target}")]
    NoResource { target: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ScmError {
    /// Raw svn error text, if this came from svn
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Command(e) => e.stderr(),
            _ => None,
        }
    }

    /// True when the error was raised before anything was run
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyCommitMessage
                | Self::EmptyChangelistName
                | Self::NoActiveSelection
                | Self::NoResource { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_passthrough() {
        let err = ScmError::from(SvnError::CommandFailed {
            stderr: "svn: E200009: not in client view".to_string(),
            exit_code: Some(1),
        });
        assert_eq!(err.stderr(), Some("svn: E200009: not in client view"));
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "svn command failed: svn: E200009: not in client view"
        );
    }

    #[test]
    fn test_validation_errors() {
        assert!(ScmError::EmptyCommitMessage.is_validation());
        assert!(
            ScmError::NoResource {
                target: "default".to_string()
            }
            .is_validation()
        );
        assert_eq!(ScmError::EmptyCommitMessage.stderr(), None);
    }
}
