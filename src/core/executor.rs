//! Process execution behind a trait.
//!
//! The client never spawns processes directly. It hands a fully resolved
//! [`Invocation`] to an [`Executor`] and gets back the raw triple of process
//! error, stdout and stderr. [`SystemExecutor`] runs the real tool through
//! `tokio::process`; [`ScriptedExecutor`] replays canned output for tests and
//! offline tooling.

use crate::core::error::{P4NavigatorError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Option key holding a timeout in milliseconds
pub const TIMEOUT_OPTION: &str = "timeout";

/// Option keys with this prefix are exported to the child's environment
pub const ENV_OPTION_PREFIX: &str = "P4";

/// One request to run a program, with session state captured at issue time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub options: BTreeMap<String, String>,
    pub stdin: Option<String>,
}

impl Invocation {
    /// The invocation as a single display string, e.g. `p4 fstat foo.js`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Unclassified result of running a program
#[derive(Debug, Default)]
pub struct RawOutput {
    pub error: Option<P4NavigatorError>,
    pub stdout: String,
    pub stderr: String,
}

impl RawOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Default::default()
        }
    }

    pub fn with_stderr(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            error: None,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn failed(error: P4NavigatorError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait Executor: Send + Sync {
    /// Run the invocation to completion. Failures to launch or abnormal exits are
    /// reported through `RawOutput::error`, never by panicking.
    async fn execute(&self, invocation: &Invocation) -> RawOutput;
}

/// Runs programs with `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

#[async_trait]
impl Executor for SystemExecutor {
    async fn execute(&self, invocation: &Invocation) -> RawOutput {
        match run_process(invocation).await {
            Ok(output) => output,
            Err(e) => {
                log::debug!("'{}' failed: {e}", invocation.command_line());
                RawOutput::failed(e)
            }
        }
    }
}

async fn run_process(invocation: &Invocation) -> Result<RawOutput> {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .current_dir(&invocation.cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if invocation.stdin.is_some() {
        cmd.stdin(Stdio::piped());
    } else {
        cmd.stdin(Stdio::null());
    }

    for (key, value) in &invocation.options {
        if key.starts_with(ENV_OPTION_PREFIX) {
            cmd.env(key, value);
        }
    }

    let mut child = cmd
        .spawn()
        .map_err(|e| P4NavigatorError::spawn_failed(&invocation.program, e))?;

    if let (Some(input), Some(mut stdin)) = (&invocation.stdin, child.stdin.take()) {
        stdin.write_all(input.as_bytes()).await?;
        stdin.write_all(b"\n").await?;
    }

    let timeout = invocation
        .options
        .get(TIMEOUT_OPTION)
        .and_then(|value| value.parse::<u64>().ok());

    let output = match timeout {
        Some(millis) => {
            tokio::time::timeout(Duration::from_millis(millis), child.wait_with_output())
                .await
                .map_err(|_| P4NavigatorError::TimedOut { millis })??
        }
        None => child.wait_with_output().await?,
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let error = if output.status.success() {
        None
    } else {
        Some(P4NavigatorError::command_failed(output.status.code(), &stderr))
    };

    Ok(RawOutput {
        error,
        stdout,
        stderr,
    })
}

/// Replays queued outputs in order and records what was asked of it.
///
/// Once the queue is empty every further call returns empty output.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: Mutex<VecDeque<RawOutput>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, output: RawOutput) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(output);
        self
    }

    pub fn push_stdout(&self, stdout: impl Into<String>) -> &Self {
        self.push(RawOutput::success(stdout))
    }

    pub fn push_stderr(&self, stdout: impl Into<String>, stderr: impl Into<String>) -> &Self {
        self.push(RawOutput::with_stderr(stdout, stderr))
    }

    pub fn push_error(&self, error: P4NavigatorError) -> &Self {
        self.push(RawOutput::failed(error))
    }

    /// Every invocation received so far, oldest first
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Executor for ScriptedExecutor {
    async fn execute(&self, invocation: &Invocation) -> RawOutput {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(invocation.clone());
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_default()
    }
}
