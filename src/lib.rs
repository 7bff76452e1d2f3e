//! P4 Navigator - a Rust client for the Perforce command-line tool.
//!
//! This library runs `p4` subcommands, classifies their outcome from the process
//! result and the tool's diagnostic text, and parses `fstat` status reports into
//! structured records.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`P4Client`]: one session with async operations (`stat`, `edit`, `sync`, ...)
//! - [`Session`]: working directory and options of a client
//! - [`Executor`]: process collaborator, with [`SystemExecutor`] and [`ScriptedExecutor`]
//! - [`RecordParser`] / [`BlockSplitter`]: status report parsing
//! - [`P4NavigatorError`] and [`Result`]: error handling
//!
//! # Example
//! ```no_run
//! use p4_navigator::P4Client;
//!
//! # async fn demo() -> p4_navigator::Result<()> {
//! let mut client = P4Client::new();
//! client.cd("/path/to/workspace");
//! for record in client.stat_dir(None).await? {
//!     println!("{:?}", record.text("depotFile"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    BlockSplitter,
    ClientConfig,
    CommandOutcome,
    CommandRunner,
    DiagnosticPatterns,
    Executor,
    FieldValue,
    FileAction,
    GroupedSubEntry,
    Invocation,
    P4Client,
    P4NavigatorError,
    RawOutput,
    RecordParser,
    Result,
    ScriptedExecutor,
    Session,
    StatusRecord,
    SystemExecutor,
};
