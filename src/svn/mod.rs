//! svn command execution layer
//!
//! This module handles executing svn commands and parsing their output.

mod commands;
pub mod constants;
mod events;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use commands::{Invocation, Revision};
pub use events::{CommandEvent, CommandEvents};
pub use executor::{CommandRunner, SvnCli, SvnCliOptions};

use std::io;
use thiserror::Error;

/// Errors that can occur when executing svn commands
#[derive(Error, Debug)]
pub enum SvnError {
    #[error("Not a Subversion working copy: {stderr}")]
    NotAWorkingCopy { stderr: String },

    /// The tool exited with an error or wrote to stderr
    #[error("svn command failed: {stderr}")]
    CommandFailed {
        stderr: String,
        exit_code: Option<i32>,
    },

    #[error("svn {command} timed out after {secs}s")]
    Timeout { command: String, secs: u64 },

    #[error("svn output exceeded {limit} bytes")]
    OutputTooLarge { limit: usize },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("svn is not installed or not in PATH")]
    SvnNotFound,
}

impl SvnError {
    /// Raw error text reported by the external tool, if any
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } | Self::NotAWorkingCopy { stderr } => Some(stderr),
            _ => None,
        }
    }
}
