//! svn output parser
//!
//! Parses the output from svn commands into structured data.

mod info;
mod log;
mod status;

pub use status::StatusLine;


use regex::Regex;
use std::sync::LazyLock;

/// Changelist header printed by `svn status`
/// Format: `--- Changelist '<name>':`
static CHANGELIST_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--- Changelist '(.*)':\s*$").expect("Invalid changelist header regex")
});

/// Loose status entry: one status character, whitespace, then the path
/// Used when a line does not follow svn's fixed column layout.
///
/// Groups:
/// 1. path (remainder of the line, may contain spaces)
static LOOSE_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ACDIMRX?!~]\s+([^\s>].*)$").expect("Invalid status entry regex")
});

/// `svn log` revision header
/// Format: `r<number> | <author> | <date> | <n> line(s)`
///
/// Groups:
/// 1. revision number
/// 2. rest of the header
static LOG_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^r(\d+)(.*)$").expect("Invalid log header regex"));

/// `svn log` entry separator (a run of dashes)
static LOG_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{3,}\s*$").expect("Invalid log separator regex"));

/// Parser for svn command output
pub struct Parser;
