//! Core functionality for the p4-navigator client.
//!
//! This module provides the building blocks for driving `p4`: session state,
//! process execution, outcome classification, status-report parsing and the
//! named operations built on top of them.

pub mod block_splitter;
pub mod client;
pub mod colors;
pub mod config;
pub mod diagnostics;
pub mod dirs;
pub mod error;
pub mod executor;
pub mod file_action;
pub mod output;
pub mod record;
pub mod record_parser;
pub mod runner;
pub mod session;

// === Error handling ===
// Core error type and result alias used throughout the crate
pub use error::{P4NavigatorError, Result};

// === Session state ===
// Per-client working directory and options
pub use session::Session;

// === Process execution ===
// Executor collaborator and the invocation it receives
pub use executor::{Executor, Invocation, RawOutput, ScriptedExecutor, SystemExecutor};

// === Command classification ===
// Turns (process error, stdout, stderr) into a single outcome
pub use runner::{CommandOutcome, CommandRunner};

// === Status reports ===
// Record model, single-block parser and multi-block splitter
pub use block_splitter::BlockSplitter;
pub use diagnostics::DiagnosticPatterns;
pub use record::{FieldValue, GroupedSubEntry, StatusRecord};
pub use record_parser::RecordParser;

// === Operations ===
// Named p4 subcommands and their configuration
pub use client::P4Client;
pub use config::ClientConfig;

// === Display ===
// Action enumeration and colors used by the binary
pub use colors::{format_file_line, get_action_color_style, get_aligned_action, get_colored_path};
pub use file_action::FileAction;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_action_output, print_error, print_info, print_json, print_section_header, print_success,
    print_tool_output,
};
