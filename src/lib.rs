//! svn-panel - source-control side panel for Subversion
//!
//! A terminal side panel over the `svn` command line: changed files are
//! grouped by changelist and can be committed, reverted, added, diffed and
//! moved between changelists.
//!
//! This library provides:
//! - [`svn`]: svn command execution and output parsing
//! - [`model`]: Resources, groups and the reconciliation result
//! - [`scm`]: The source-control facade driving svn
//! - [`config`]: Configuration file and command-line options
//! - [`logging`]: Diagnostic log set-up
//! - [`app`]: Application state and logic
//! - [`keys`]: Key binding definitions
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod scm;
pub mod svn;
pub mod ui;
