//! SvnRepo helper for integration tests.
//!
//! Provides a local repository (`svnadmin create`) and a checkout of it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Whether both `svn` and `svnadmin` can be run
pub fn svn_available() -> bool {
    ["svn", "svnadmin"].iter().all(|program| {
        Command::new(program)
            .arg("--version")
            .arg("--quiet")
            .output()
            .is_ok_and(|o| o.status.success())
    })
}

/// A temporary svn repository with a working copy.
///
/// Both are removed when the SvnRepo is dropped.
pub struct SvnRepo {
    dir: TempDir,
}

impl SvnRepo {
    /// Create an empty repository and check it out.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = dir.path().join("repo");

        run(dir.path(), "svnadmin", &["create", repo.to_str().unwrap()]);
        let url = format!("file://{}", repo.display());
        run(dir.path(), "svn", &["checkout", "--quiet", &url, "wc"]);

        Self { dir }
    }

    /// Working copy root (canonical, so it matches what svn prints)
    pub fn path(&self) -> PathBuf {
        self.dir
            .path()
            .join("wc")
            .canonicalize()
            .expect("working copy exists")
    }

    /// Execute an svn command in the working copy.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn svn(&self, args: &[&str]) -> String {
        run(&self.path(), "svn", args)
    }

    /// Write a file in the working copy.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file from the working copy.
    ///
    /// Returns an empty string if the file does not exist.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap_or_default()
    }

    /// Add and commit a file in one step.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        self.write_file(name, content);
        self.svn(&["add", "--quiet", name]);
        self.svn(&["commit", "--quiet", "-m", message]);
    }
}

fn run(dir: &Path, program: &str, args: &[&str]) -> String {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute {}: {}", program, e));

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "{} {:?} failed with exit code {:?}:\n{}",
            program,
            args,
            output.status.code(),
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}
