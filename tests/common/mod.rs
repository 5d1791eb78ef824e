//! Common test utilities for integration and scenario tests.
//!
//! - [`FakeRunner`]: scripted `CommandRunner` for facade and app tests
//! - [`SvnRepo`]: a real repository and checkout in a temporary directory
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fake_runner;
pub mod svn_repo;

pub use fake_runner::FakeRunner;
pub use svn_repo::{SvnRepo, svn_available};

/// Return early from a test when `svn`/`svnadmin` are not installed
#[macro_export]
macro_rules! skip_if_no_svn {
    () => {
        if !$crate::common::svn_available() {
            eprintln!("svn not installed; skipping");
            return;
        }
    };
}
