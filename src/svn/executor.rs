//! svn command executor
//!
//! Handles running svn commands and capturing their output.

use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use super::SvnError;
use super::commands::Invocation;
use super::constants::{self, errors, flags};
use super::events::{CommandEvent, CommandEvents};

/// Default bound on one invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default cap on captured stdout
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Runs one svn invocation and returns its stdout
///
/// Implementations must report a failure when the tool exits non-zero
/// *or* writes anything to stderr, since svn reports partial success that way.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: Invocation) -> Result<String, SvnError>;
}

/// Settings for [`SvnCli`]
#[derive(Debug, Clone)]
pub struct SvnCliOptions {
    /// svn binary
    pub program: PathBuf,
    /// Default working directory (the working copy root)
    pub working_dir: PathBuf,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Pass `--non-interactive` so svn never blocks on a prompt
    pub non_interactive: bool,
    pub timeout: Duration,
    pub max_output_bytes: usize,
}

impl Default for SvnCliOptions {
    fn default() -> Self {
        Self {
            program: PathBuf::from(constants::SVN_COMMAND),
            working_dir: PathBuf::from("."),
            username: None,
            password: None,
            non_interactive: true,
            timeout: DEFAULT_TIMEOUT,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

/// Executor for svn commands
#[derive(Debug, Clone)]
pub struct SvnCli {
    options: SvnCliOptions,
    events: CommandEvents,
}

impl Default for SvnCli {
    fn default() -> Self {
        Self::new(SvnCliOptions::default())
    }
}

impl SvnCli {
    pub fn new(options: SvnCliOptions) -> Self {
        Self {
            options,
            events: CommandEvents::new(),
        }
    }

    /// Create an executor for a specific working copy with default settings
    pub fn with_working_dir(path: PathBuf) -> Self {
        Self::new(SvnCliOptions {
            working_dir: path,
            ..SvnCliOptions::default()
        })
    }

    pub fn options(&self) -> &SvnCliOptions {
        &self.options
    }

    /// Lifecycle events of every command this executor runs
    pub fn events(&self) -> &CommandEvents {
        &self.events
    }

    /// Global options placed before the subcommand
    fn global_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.options.non_interactive {
            args.push(flags::NON_INTERACTIVE.to_string());
        }
        if let Some(ref user) = self.options.username {
            args.push(flags::USERNAME.to_string());
            args.push(user.clone());
        }
        if let Some(ref pass) = self.options.password {
            args.push(flags::PASSWORD.to_string());
            args.push(pass.clone());
        }
        args
    }

    /// Get the svn client version
    pub async fn version(&self) -> Result<String, SvnError> {
        let output = self.run(Invocation::version()).await?;
        Ok(output.trim().to_string())
    }

    fn fail(&self, error: SvnError) -> SvnError {
        warn!(error = %error, "svn command failed");
        self.events.emit(CommandEvent::Failed {
            message: error.to_string(),
        });
        error
    }
}

#[async_trait]
impl CommandRunner for SvnCli {
    async fn run(&self, invocation: Invocation) -> Result<String, SvnError> {
        let command_line = invocation.display();
        debug!(command = %command_line, "running svn");
        self.events.emit(CommandEvent::Executed {
            command_line: command_line.clone(),
        });

        let mut cmd = Command::new(&self.options.program);
        cmd.args(self.global_args())
            .arg(invocation.subcommand)
            .args(&invocation.args)
            .current_dir(
                invocation
                    .cwd
                    .as_deref()
                    .unwrap_or(&self.options.working_dir),
            )
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(self.fail(SvnError::SvnNotFound));
            }
            Err(e) => return Err(self.fail(SvnError::IoError(e))),
        };

        let limit = self.options.max_output_bytes;
        let captured = tokio::time::timeout(self.options.timeout, capture(child, limit));
        let output = match captured.await {
            Err(_) => {
                return Err(self.fail(SvnError::Timeout {
                    command: invocation.subcommand.to_string(),
                    secs: self.options.timeout.as_secs(),
                }));
            }
            Ok(Err(e)) => return Err(self.fail(SvnError::IoError(e))),
            Ok(Ok(None)) => return Err(self.fail(SvnError::OutputTooLarge { limit })),
            Ok(Ok(Some(output))) => output,
        };

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() || !stderr.trim().is_empty() {
            if stderr.contains(errors::NOT_A_WORKING_COPY) {
                return Err(self.fail(SvnError::NotAWorkingCopy { stderr }));
            }
            let stderr = if stderr.trim().is_empty() {
                format!("{} exited with {}", command_line, output.status)
            } else {
                stderr
            };
            return Err(self.fail(SvnError::CommandFailed {
                stderr,
                exit_code: output.status.code(),
            }));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        self.events.emit(CommandEvent::Succeeded {
            output: stdout.clone(),
        });
        Ok(stdout)
    }
}

/// Everything a finished child wrote
struct Captured {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

/// Collect the child's output, stopping it once stdout passes `limit` bytes
///
/// Returns `None` when the cap was hit. The child is killed in that case.
async fn capture(mut child: Child, limit: usize) -> io::Result<Option<Captured>> {
    let stderr_pipe = child.stderr.take();
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = stderr_pipe {
            pipe.read_to_end(&mut buf).await?;
        }
        Ok::<_, io::Error>(buf)
    });

    let mut stdout = Vec::new();
    if let Some(pipe) = child.stdout.take() {
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
        pipe.take(cap).read_to_end(&mut stdout).await?;
    }
    if stdout.len() > limit {
        if let Err(e) = child.kill().await {
            debug!(error = %e, "could not stop svn after output cap");
        }
        stderr_task.abort();
        return Ok(None);
    }

    let stderr = stderr_task.await.map_err(io::Error::other)??;
    let status = child.wait().await?;
    Ok(Some(Captured {
        status,
        stdout,
        stderr,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(program: &str) -> SvnCli {
        SvnCli::new(SvnCliOptions {
            program: PathBuf::from(program),
            non_interactive: false,
            ..SvnCliOptions::default()
        })
    }

    #[test]
    fn test_executor_default() {
        let executor = SvnCli::default();
        assert_eq!(executor.options().working_dir, PathBuf::from("."));
        assert!(executor.options().non_interactive);
    }

    #[test]
    fn test_executor_with_working_dir() {
        let executor = SvnCli::with_working_dir(PathBuf::from("/tmp/wc"));
        assert_eq!(executor.options().working_dir, PathBuf::from("/tmp/wc"));
    }

    #[test]
    fn test_global_args_include_credentials() {
        let executor = SvnCli::new(SvnCliOptions {
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            ..SvnCliOptions::default()
        });
        assert_eq!(
            executor.global_args(),
            vec![
                "--non-interactive",
                "--username",
                "alice",
                "--password",
                "secret"
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_svn_not_found() {
        let executor = cli("definitely-not-an-svn-binary-4242");
        let result = executor.run(Invocation::status()).await;
        assert!(matches!(result, Err(SvnError::SvnNotFound)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stderr_with_zero_exit_is_failure() {
        let executor = cli("sh");
        let inv = Invocation::new("-c").arg("echo out; echo 'svn: warning: W155010' 1>&2");
        match executor.run(inv).await {
            Err(SvnError::CommandFailed { stderr, exit_code }) => {
                assert!(stderr.contains("W155010"));
                assert_eq!(exit_code, Some(0));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_clean_run_returns_stdout_and_emits_events() {
        let executor = cli("sh");
        let mut rx = executor.events().subscribe();
        let output = executor
            .run(Invocation::new("-c").arg("printf 'M       a.txt\\n'"))
            .await
            .unwrap();
        assert_eq!(output, "M       a.txt\n");

        assert!(matches!(
            rx.try_recv(),
            Ok(CommandEvent::Executed { .. })
        ));
        assert_eq!(
            rx.try_recv().ok(),
            Some(CommandEvent::Succeeded {
                output: "M       a.txt\n".to_string()
            })
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_is_reported() {
        let executor = SvnCli::new(SvnCliOptions {
            program: PathBuf::from("sleep"),
            non_interactive: false,
            timeout: Duration::from_millis(100),
            ..SvnCliOptions::default()
        });
        let result = executor.run(Invocation::new("5")).await;
        assert!(matches!(result, Err(SvnError::Timeout { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_output_cap() {
        let executor = SvnCli::new(SvnCliOptions {
            program: PathBuf::from("sh"),
            non_interactive: false,
            max_output_bytes: 4,
            ..SvnCliOptions::default()
        });
        let result = executor
            .run(Invocation::new("-c").arg("echo 0123456789"))
            .await;
        assert!(matches!(result, Err(SvnError::OutputTooLarge { limit: 4 })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_output_cap_stops_endless_writer() {
        // `yes` never exits on its own
        let executor = SvnCli::new(SvnCliOptions {
            program: PathBuf::from("yes"),
            non_interactive: false,
            max_output_bytes: 1024,
            timeout: Duration::from_secs(10),
            ..SvnCliOptions::default()
        });
        let started = std::time::Instant::now();
        let result = executor.run(Invocation::new("y")).await;
        assert!(matches!(
            result,
            Err(SvnError::OutputTooLarge { limit: 1024 })
        ));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_not_a_working_copy_keeps_stderr() {
        let executor = cli("sh");
        let inv = Invocation::new("-c")
            .arg("echo \"svn: E155007: '/tmp' is not a working copy\" 1>&2; exit 1");
        let err = executor.run(inv).await.unwrap_err();
        assert!(matches!(err, SvnError::NotAWorkingCopy { .. }));
        assert!(err.stderr().is_some_and(|s| s.contains("E155007")));
        assert!(err.to_string().contains("'/tmp' is not a working copy"));
    }
}
