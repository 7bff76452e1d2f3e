//! Issuing subcommands and classifying their outcome.
//!
//! [`CommandRunner`] captures the session's directory and options into an
//! [`Invocation`], hands it to the executor and folds the raw triple into a
//! [`CommandOutcome`]. Precedence, first match wins:
//!
//! 1. process-level error: `(error, None, None)`, output discarded
//! 2. stderr text: `(Diagnostic(stderr), Some(stdout), None)`
//! 3. otherwise: `(None, Some(stdout), None)`

use crate::core::{
    error::{P4NavigatorError, Result},
    executor::{Executor, Invocation, RawOutput},
    session::Session,
};
use std::sync::Arc;

/// Default name of the Perforce executable
pub const DEFAULT_EXECUTABLE: &str = "p4";

/// Three-value result of one invocation.
///
/// `stderr` is always `None`: diagnostic text ends up in `error` or nowhere.
#[derive(Debug, Default)]
pub struct CommandOutcome {
    pub error: Option<P4NavigatorError>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl CommandOutcome {
    pub fn classify(raw: RawOutput) -> Self {
        if let Some(error) = raw.error {
            return Self {
                error: Some(error),
                stdout: None,
                stderr: None,
            };
        }

        let error = if raw.stderr.trim().is_empty() {
            None
        } else {
            Some(P4NavigatorError::diagnostic(&raw.stderr))
        };

        Self {
            error,
            stdout: Some(raw.stdout),
            stderr: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Strict two-value view: any error wins and stdout is dropped
    pub fn into_result(self) -> Result<String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.stdout.unwrap_or_default()),
        }
    }
}

#[derive(Clone)]
pub struct CommandRunner {
    executor: Arc<dyn Executor>,
    executable: String,
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("executable", &self.executable)
            .finish_non_exhaustive()
    }
}

impl CommandRunner {
    pub fn new(executor: Arc<dyn Executor>, executable: impl Into<String>) -> Self {
        Self {
            executor,
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Run `<executable> <tokens..>` in the session's directory
    pub async fn run<S: AsRef<str>>(&self, session: &Session, tokens: &[S]) -> CommandOutcome {
        self.run_with_input(session, tokens, None).await
    }

    /// Like [`run`](Self::run), with text piped to the tool's stdin
    pub async fn run_with_input<S: AsRef<str>>(
        &self,
        session: &Session,
        tokens: &[S],
        stdin: Option<String>,
    ) -> CommandOutcome {
        let invocation = build_invocation(session, &self.executable, tokens, stdin);
        self.dispatch(invocation).await
    }

    /// Run an arbitrary program in the session's directory
    pub async fn run_shell<S: AsRef<str>>(
        &self,
        session: &Session,
        program: &str,
        args: &[S],
    ) -> CommandOutcome {
        let invocation = build_invocation(session, program, args, None);
        self.dispatch(invocation).await
    }

    async fn dispatch(&self, invocation: Invocation) -> CommandOutcome {
        log::debug!(
            "Running '{}' in {}",
            invocation.command_line(),
            invocation.cwd.display()
        );
        let outcome = CommandOutcome::classify(self.executor.execute(&invocation).await);
        if let Some(error) = &outcome.error {
            log::debug!("'{}' reported: {error}", invocation.command_line());
        }
        outcome
    }
}

fn build_invocation<S: AsRef<str>>(
    session: &Session,
    program: &str,
    args: &[S],
    stdin: Option<String>,
) -> Invocation {
    Invocation {
        program: program.to_string(),
        args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        cwd: session.current_directory().to_path_buf(),
        options: session.options().clone(),
        stdin,
    }
}
