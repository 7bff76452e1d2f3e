//! Named Perforce operations on top of the command runner.
//!
//! [`P4Client`] owns one [`Session`] and exposes one async method per supported
//! subcommand. Each method validates its required input, builds the `p4`
//! argument list and either returns stdout under the strict error policy or
//! feeds it through the status-report parser.
//!
//! # Result conventions
//! - [`P4Client::run_command`] and [`P4Client::run_shell_command`] return the raw
//!   three-value [`CommandOutcome`]
//! - every other operation returns [`Result`]; any error, including diagnostic
//!   text on stderr, drops the output

use crate::core::{
    block_splitter::BlockSplitter,
    config::ClientConfig,
    diagnostics::DiagnosticPatterns,
    error::{P4NavigatorError, Result},
    executor::{Executor, SystemExecutor},
    record::{FieldValue, StatusRecord},
    record_parser::RecordParser,
    runner::{CommandOutcome, CommandRunner},
    session::Session,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// `fstat` field read by [`P4Client::have`]
pub const HAVE_REV_FIELD: &str = "haveRev";

/// Depot wildcard for the files of one directory
const DIR_WILDCARD: &str = "*";
/// Depot wildcard for a directory and everything below it
const RECURSIVE_WILDCARD: &str = "...";

#[derive(Debug, Clone)]
pub struct P4Client {
    session: Session,
    runner: CommandRunner,
    splitter: BlockSplitter,
    have_parser: RecordParser,
    not_tracked: DiagnosticPatterns,
}

impl Default for P4Client {
    fn default() -> Self {
        Self::new()
    }
}

impl P4Client {
    /// Client running the real `p4` with default configuration
    pub fn new() -> Self {
        Self::with_executor(Arc::new(SystemExecutor))
    }

    pub fn with_executor(executor: Arc<dyn Executor>) -> Self {
        Self::from_config(&ClientConfig::default(), executor)
    }

    pub fn from_config(config: &ClientConfig, executor: Arc<dyn Executor>) -> Self {
        let mut session = Session::new();
        session.set_options(config.options.clone());

        Self {
            session,
            runner: CommandRunner::new(executor, config.executable.clone()),
            splitter: config.block_splitter(),
            have_parser: config.record_parser().with_numeric_fields([HAVE_REV_FIELD]),
            not_tracked: config.not_tracked_diagnostics.clone(),
        }
    }

    // === Session state ===

    /// Change the working directory for subsequent operations (chainable)
    pub fn cd(&mut self, segment: impl AsRef<Path>) -> &mut Self {
        self.session.change_directory(segment);
        self
    }

    pub fn pwd(&self) -> &Path {
        self.session.current_directory()
    }

    /// Merge command options; a `cwd` key is ignored
    pub fn set_options<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.session.set_options(options);
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        self.session.options()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // === Generic primitives (three-value convention) ===

    /// Run any program in the working directory
    pub async fn run_shell_command<S: AsRef<str>>(
        &self,
        program: &str,
        args: &[S],
    ) -> CommandOutcome {
        self.runner.run_shell(&self.session, program, args).await
    }

    /// Run `p4 <tokens..>` in the working directory
    pub async fn run_command<S: AsRef<str>>(&self, tokens: &[S]) -> CommandOutcome {
        self.runner.run(&self.session, tokens).await
    }

    // === Status queries ===

    /// `fstat` one file and return its record
    pub async fn stat(&self, path: &str) -> Result<StatusRecord> {
        require_file(path, "stat")?;
        let stdout = self.run_strict(&["fstat", path]).await?;
        self.splitter
            .split_report(&stdout, None)?
            .into_iter()
            .next()
            .ok_or(P4NavigatorError::NoRecords)
    }

    /// Revision of `path` currently synced to the workspace
    pub async fn have(&self, path: &str) -> Result<i64> {
        require_file(path, "have")?;
        let stdout = self.run_strict(&["fstat", "-T", HAVE_REV_FIELD, path]).await?;
        let record = self.have_parser.parse(&stdout)?;

        match record.get(HAVE_REV_FIELD) {
            Some(FieldValue::Integer(revision)) => Ok(*revision),
            Some(other) => Err(P4NavigatorError::InvalidNumber {
                field: HAVE_REV_FIELD.to_string(),
                value: other.to_string(),
            }),
            None => Err(P4NavigatorError::missing_field(HAVE_REV_FIELD)),
        }
    }

    /// `fstat` the files of a directory, optionally changing into `dir` first.
    ///
    /// The directory change sticks even if the query fails.
    pub async fn stat_dir(&mut self, dir: Option<&str>) -> Result<Vec<StatusRecord>> {
        self.stat_pattern(dir, DIR_WILDCARD).await
    }

    /// Like [`stat_dir`](Self::stat_dir), including all subdirectories
    pub async fn recursive_stat_dir(&mut self, dir: Option<&str>) -> Result<Vec<StatusRecord>> {
        self.stat_pattern(dir, RECURSIVE_WILDCARD).await
    }

    async fn stat_pattern(
        &mut self,
        dir: Option<&str>,
        pattern: &str,
    ) -> Result<Vec<StatusRecord>> {
        if let Some(dir) = dir {
            self.session.change_directory(dir);
        }

        let outcome = self.runner.run(&self.session, &["fstat", pattern]).await;
        let diagnostic = match outcome.error {
            None => None,
            Some(P4NavigatorError::Diagnostic(text)) => Some(text),
            Some(error) => return Err(error),
        };

        self.splitter
            .split_report(outcome.stdout.as_deref().unwrap_or(""), diagnostic.as_deref())
    }

    // === Actions ===

    pub async fn edit(&self, path: &str) -> Result<String> {
        require_file(path, "edit")?;
        self.run_strict(&["edit", path]).await
    }

    pub async fn add(&self, path: &str) -> Result<String> {
        require_file(path, "add")?;
        self.run_strict(&["add", path]).await
    }

    /// Open `path` for edit, or for add when `p4` reports it is not on the client
    pub async fn smart_edit(&self, path: &str) -> Result<String> {
        require_file(path, "edit")?;
        let first = self.runner.run(&self.session, &["edit", path]).await;

        if let Some(text) = first.error.as_ref().and_then(P4NavigatorError::diagnostic_text) {
            if self.not_tracked.matches(text) {
                log::info!("{path} is not tracked yet, opening for add");
                return self.run_strict(&["add", path]).await;
            }
        }

        first.into_result()
    }

    pub async fn revert(&self, path: &str) -> Result<String> {
        require_file(path, "revert")?;
        self.run_strict(&["revert", path]).await
    }

    /// Revert files that are open but unchanged, optionally limited to `path`
    pub async fn revert_unchanged(&self, path: Option<&str>) -> Result<String> {
        let mut tokens = vec!["revert", "-a"];
        tokens.extend(path.filter(|p| !p.is_empty()));
        self.run_strict(&tokens).await
    }

    pub async fn submit(&self, path: &str, description: &str) -> Result<String> {
        require_file(path, "submit")?;
        if description.trim().is_empty() {
            return Err(P4NavigatorError::missing_argument(
                "Please pass a description to submit!",
            ));
        }
        self.run_strict(&["submit", "-d", description, path]).await
    }

    pub async fn sync(&self, path: Option<&str>) -> Result<String> {
        let mut tokens = vec!["sync"];
        tokens.extend(path.filter(|p| !p.is_empty()));
        self.run_strict(&tokens).await
    }

    /// Sync the files of a directory, optionally changing into `dir` first
    pub async fn sync_dir(&mut self, dir: Option<&str>) -> Result<String> {
        self.sync_pattern(dir, DIR_WILDCARD).await
    }

    pub async fn recursive_sync_dir(&mut self, dir: Option<&str>) -> Result<String> {
        self.sync_pattern(dir, RECURSIVE_WILDCARD).await
    }

    async fn sync_pattern(&mut self, dir: Option<&str>, pattern: &str) -> Result<String> {
        if let Some(dir) = dir {
            self.session.change_directory(dir);
        }
        self.run_strict(&["sync", pattern]).await
    }

    /// `p4 -u <user> login`, with the password piped on stdin
    pub async fn login(&self, user: &str, password: &str) -> Result<String> {
        if user.trim().is_empty() {
            return Err(P4NavigatorError::missing_argument(
                "Please pass a user to login!",
            ));
        }
        self.runner
            .run_with_input(&self.session, &["-u", user, "login"], Some(password.to_string()))
            .await
            .into_result()
    }

    async fn run_strict(&self, tokens: &[&str]) -> Result<String> {
        self.runner.run(&self.session, tokens).await.into_result()
    }
}

fn require_file(path: &str, operation: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(P4NavigatorError::missing_file(operation));
    }
    Ok(())
}
