//! Scripted command runner.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use svn_panel::svn::{CommandRunner, Invocation, SvnError};

/// Answers `svn status` with a settable text and other subcommands from
/// per-subcommand queues; records every invocation.
///
/// A subcommand with an empty queue succeeds with empty output.
#[derive(Default)]
pub struct FakeRunner {
    status: Mutex<String>,
    replies: Mutex<HashMap<&'static str, VecDeque<Result<String, String>>>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn with_status(status: &str) -> Self {
        let runner = Self::default();
        runner.set_status(status);
        runner
    }

    /// Text returned by every following `svn status`
    pub fn set_status(&self, status: &str) {
        *self.status.lock().unwrap() = status.to_string();
    }

    /// Queue a successful reply for `subcommand`
    pub fn reply(&self, subcommand: &'static str, stdout: &str) {
        self.push(subcommand, Ok(stdout.to_string()));
    }

    /// Queue a failure (stderr text) for `subcommand`
    pub fn fail(&self, subcommand: &'static str, stderr: &str) {
        self.push(subcommand, Err(stderr.to_string()));
    }

    fn push(&self, subcommand: &'static str, reply: Result<String, String>) {
        self.replies
            .lock()
            .unwrap()
            .entry(subcommand)
            .or_default()
            .push_back(reply);
    }

    /// Every invocation so far
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Subcommand names, in call order
    pub fn subcommands(&self) -> Vec<&'static str> {
        self.invocations()
            .iter()
            .map(|inv| inv.subcommand)
            .collect()
    }

    pub fn count(&self, subcommand: &str) -> usize {
        self.subcommands()
            .iter()
            .filter(|s| **s == subcommand)
            .count()
    }

    pub fn clear_invocations(&self) {
        self.invocations.lock().unwrap().clear();
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, invocation: Invocation) -> Result<String, SvnError> {
        let subcommand = invocation.subcommand;
        self.invocations.lock().unwrap().push(invocation);

        let queued = self
            .replies
            .lock()
            .unwrap()
            .get_mut(subcommand)
            .and_then(VecDeque::pop_front);
        match queued {
            Some(Ok(stdout)) => Ok(stdout),
            Some(Err(stderr)) => Err(SvnError::CommandFailed {
                stderr,
                exit_code: Some(1),
            }),
            None if subcommand == "status" => Ok(self.status.lock().unwrap().clone()),
            None => Ok(String::new()),
        }
    }
}
