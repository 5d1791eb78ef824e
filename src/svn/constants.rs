//! svn-specific constants
//!
//! Centralized definitions for svn command names, flags, and special values.

/// svn command binary name
#[cfg(not(windows))]
pub const SVN_COMMAND: &str = "svn";

/// svn command binary name
#[cfg(windows)]
pub const SVN_COMMAND: &str = "svn.exe";

/// svn subcommands
pub mod commands {
    pub const STATUS: &str = "status";
    pub const ADD: &str = "add";
    pub const COMMIT: &str = "commit";
    pub const REVERT: &str = "revert";
    pub const CHANGELIST: &str = "changelist";
    pub const UPDATE: &str = "update";
    pub const LOG: &str = "log";
    pub const CAT: &str = "cat";
    pub const INFO: &str = "info";
}

/// svn command flags
pub mod flags {
    /// Commit message
    pub const MESSAGE: &str = "-m";
    /// Restrict an operation to one changelist
    pub const CHANGELIST: &str = "--changelist";
    /// Remove paths from their changelist
    pub const REMOVE: &str = "--remove";
    /// Descend into directories
    pub const RECURSIVE: &str = "--recursive";
    /// Depth selector
    pub const DEPTH: &str = "--depth";
    /// Full-depth value for `--depth`
    pub const DEPTH_INFINITY: &str = "infinity";
    /// Revision selector
    pub const REVISION: &str = "-r";
    /// Never prompt (credentials, conflicts)
    pub const NON_INTERACTIVE: &str = "--non-interactive";
    /// Username for authentication
    pub const USERNAME: &str = "--username";
    /// Password for authentication
    pub const PASSWORD: &str = "--password";
    /// Show version
    pub const VERSION: &str = "--version";
    /// Only print the version number
    pub const QUIET: &str = "--quiet";
}

/// Special svn values
pub mod special {
    /// Working copy root target
    pub const WORKING_COPY: &str = ".";
    /// Latest revision in the repository
    pub const HEAD: &str = "HEAD";
    /// Pristine revision of the working copy
    pub const BASE: &str = "BASE";
    /// Status codes svn prints in the first column of `svn status`
    pub const STATUS_ALPHABET: [char; 11] =
        [' ', 'A', 'C', 'D', 'I', 'M', 'R', 'X', '?', '!', '~'];
    /// `svn info` key holding the repository root URL
    pub const REPOSITORY_ROOT: &str = "Repository Root";
}

/// Error detection patterns in svn output
pub mod errors {
    /// Pattern indicating the directory is not a working copy
    pub const NOT_A_WORKING_COPY: &str = "E155007";
}
