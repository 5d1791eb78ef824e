//! Argument lists for svn subcommands
//!
//! Every invocation is a discrete argument vector handed straight to the
//! process API; nothing is ever joined into a shell string.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use super::constants::{commands, flags, special};

/// End-of-options marker, so paths starting with `-` stay paths
const END_OF_OPTIONS: &str = "--";

/// Revision to fetch content at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    /// Latest revision in the repository
    Head,
    /// Pristine copy of the working copy
    Base,
    /// Explicit revision number
    Number(u64),
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Head => f.write_str(special::HEAD),
            Revision::Base => f.write_str(special::BASE),
            Revision::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One svn invocation: subcommand, arguments and optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Subcommand name (e.g. `status`)
    pub subcommand: &'static str,
    /// Arguments following the subcommand
    pub args: Vec<OsString>,
    /// Working directory override (None = runner default)
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(subcommand: &'static str) -> Self {
        Self {
            subcommand,
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Run in a specific directory instead of the runner's working copy
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Human-readable command line, for logs only
    pub fn display(&self) -> String {
        let mut line = format!("svn {}", self.subcommand);
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Arguments as UTF-8 strings (lossy), mostly for assertions
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    // ── Builders ─────────────────────────────────────────────────────

    /// `svn --version --quiet`
    pub fn version() -> Self {
        Self::new(flags::VERSION).arg(flags::QUIET)
    }

    /// `svn status`
    pub fn status() -> Self {
        Self::new(commands::STATUS)
    }

    /// `svn add -- <paths>`
    pub fn add(paths: &[PathBuf]) -> Self {
        Self::new(commands::ADD).arg(END_OF_OPTIONS).args(paths)
    }

    /// `svn commit -m <message> -- <paths>`
    pub fn commit_paths(paths: &[PathBuf], message: &str) -> Self {
        Self::new(commands::COMMIT)
            .args([flags::MESSAGE, message])
            .arg(END_OF_OPTIONS)
            .args(paths)
    }

    /// `svn commit --changelist <name> -m <message> .`
    pub fn commit_changelist(changelist: &str, message: &str) -> Self {
        Self::new(commands::COMMIT)
            .args([flags::CHANGELIST, changelist])
            .args([flags::MESSAGE, message])
            .arg(special::WORKING_COPY)
    }

    /// `svn revert [--depth infinity] -- <paths>`
    ///
    /// Directories need infinite depth or only the directory itself reverts.
    pub fn revert_paths(paths: &[PathBuf], recursive: bool) -> Self {
        let inv = Self::new(commands::REVERT);
        let inv = if recursive {
            inv.args([flags::DEPTH, flags::DEPTH_INFINITY])
        } else {
            inv
        };
        inv.arg(END_OF_OPTIONS).args(paths)
    }

    /// `svn revert --recursive --changelist <name> .`
    pub fn revert_changelist(changelist: &str) -> Self {
        Self::new(commands::REVERT)
            .arg(flags::RECURSIVE)
            .args([flags::CHANGELIST, changelist])
            .arg(special::WORKING_COPY)
    }

    /// `svn revert . --depth infinity`
    pub fn revert_working_copy() -> Self {
        Self::new(commands::REVERT)
            .arg(special::WORKING_COPY)
            .args([flags::DEPTH, flags::DEPTH_INFINITY])
    }

    /// `svn changelist -- <name> <path>`
    pub fn changelist_add(changelist: &str, path: &Path) -> Self {
        Self::new(commands::CHANGELIST)
            .arg(END_OF_OPTIONS)
            .arg(changelist)
            .arg(path)
    }

    /// `svn changelist --remove -- <path>`
    pub fn changelist_remove(path: &Path) -> Self {
        Self::new(commands::CHANGELIST)
            .arg(flags::REMOVE)
            .arg(END_OF_OPTIONS)
            .arg(path)
    }

    /// `svn changelist --remove --recursive --changelist <name> .`
    pub fn changelist_delete(changelist: &str) -> Self {
        Self::new(commands::CHANGELIST)
            .args([flags::REMOVE, flags::RECURSIVE])
            .args([flags::CHANGELIST, changelist])
            .arg(special::WORKING_COPY)
    }

    /// `svn update [-- <path>]`
    pub fn update(path: Option<&Path>) -> Self {
        let inv = Self::new(commands::UPDATE);
        match path {
            Some(path) => inv.arg(END_OF_OPTIONS).arg(path),
            None => inv,
        }
    }

    /// `svn log -- <path>`
    pub fn log(path: &Path) -> Self {
        Self::new(commands::LOG).arg(END_OF_OPTIONS).arg(path)
    }

    /// `svn cat -r <revision> -- <path>`
    pub fn cat(path: &Path, revision: Revision) -> Self {
        Self::new(commands::CAT)
            .args([flags::REVISION.to_string(), revision.to_string()])
            .arg(END_OF_OPTIONS)
            .arg(path)
    }

    /// `svn info`
    pub fn info() -> Self {
        Self::new(commands::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_display() {
        assert_eq!(Revision::Head.to_string(), "HEAD");
        assert_eq!(Revision::Base.to_string(), "BASE");
        assert_eq!(Revision::Number(42).to_string(), "42");
    }

    #[test]
    fn test_status_has_no_args() {
        let inv = Invocation::status();
        assert_eq!(inv.subcommand, "status");
        assert!(inv.args.is_empty());
        assert!(inv.cwd.is_none());
    }

    #[test]
    fn test_commit_paths_keeps_message_as_single_arg() {
        let inv = Invocation::commit_paths(
            &[PathBuf::from("src/my file.rs")],
            "fix \"quoted\" thing; rm -rf /",
        );
        assert_eq!(
            inv.args_lossy(),
            vec!["-m", "fix \"quoted\" thing; rm -rf /", "--", "src/my file.rs"]
        );
    }

    #[test]
    fn test_commit_changelist_args() {
        let inv = Invocation::commit_changelist("refactor", "msg");
        assert_eq!(
            inv.args_lossy(),
            vec!["--changelist", "refactor", "-m", "msg", "."]
        );
    }

    #[test]
    fn test_revert_directory_uses_infinite_depth() {
        let inv = Invocation::revert_paths(&[PathBuf::from("src")], true);
        assert_eq!(inv.args_lossy(), vec!["--depth", "infinity", "--", "src"]);

        let inv = Invocation::revert_paths(
            &[PathBuf::from("src/a.rs"), PathBuf::from("src/b.rs")],
            false,
        );
        assert_eq!(inv.args_lossy(), vec!["--", "src/a.rs", "src/b.rs"]);
    }

    #[test]
    fn test_changelist_move_and_remove() {
        let inv = Invocation::changelist_add("feature x", Path::new("a.txt"));
        assert_eq!(inv.args_lossy(), vec!["--", "feature x", "a.txt"]);

        let inv = Invocation::changelist_remove(Path::new("a.txt"));
        assert_eq!(inv.args_lossy(), vec!["--remove", "--", "a.txt"]);
    }

    #[test]
    fn test_changelist_delete_args() {
        let inv = Invocation::changelist_delete("refactor");
        assert_eq!(
            inv.args_lossy(),
            vec!["--remove", "--recursive", "--changelist", "refactor", "."]
        );
    }

    #[test]
    fn test_cat_with_revision() {
        let inv = Invocation::cat(Path::new("a.txt"), Revision::Number(7));
        assert_eq!(inv.subcommand, "cat");
        assert_eq!(inv.args_lossy(), vec!["-r", "7", "--", "a.txt"]);
    }

    #[test]
    fn test_update_with_and_without_path() {
        assert!(Invocation::update(None).args.is_empty());
        assert_eq!(
            Invocation::update(Some(Path::new("lib"))).args_lossy(),
            vec!["--", "lib"]
        );
    }

    #[test]
    fn test_display_is_readable() {
        let inv = Invocation::add(&[PathBuf::from("a.txt")]);
        assert_eq!(inv.display(), "svn add -- a.txt");
    }

    #[test]
    fn test_current_dir_override() {
        let inv = Invocation::info().current_dir("/tmp/wc");
        assert_eq!(inv.cwd, Some(PathBuf::from("/tmp/wc")));
    }
}
