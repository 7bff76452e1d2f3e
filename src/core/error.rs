//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`P4NavigatorError`] which covers every failure mode of the
//! client: bad caller input, the `p4` process failing to run, diagnostic text on the
//! error channel, malformed `fstat` output and configuration problems. It uses
//! `thiserror` for ergonomic error definitions and includes constructors for the
//! common cases.
//!
//! # Public API
//! - [`P4NavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, P4NavigatorError>`
//!
//! # Error Categories
//! - **Input validation**: A required argument was missing or empty
//! - **Process**: The executable could not be launched, exited non-zero or timed out
//! - **Diagnostic**: The tool ran but wrote to stderr
//! - **Parse**: The status report did not follow the `...` marker grammar
//! - **Configuration**: Config directory, read and JSON errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for p4-navigator
#[derive(Error, Debug)]
pub enum P4NavigatorError {
    // Input validation errors
    #[error("{message}")]
    MissingArgument { message: String },

    // Process-level errors
    #[error("Failed to launch '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("Command failed: {message}")]
    CommandFailed { code: Option<i32>, message: String },

    #[error("Command timed out after {millis}ms")]
    TimedOut { millis: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Diagnostic text written by the tool on stderr
    #[error("{0}")]
    Diagnostic(String),

    // Status report parse errors
    #[error("Line {line}: nesting depth {depth} is not supported (expected 1 or 2)")]
    UnexpectedDepth { line: usize, depth: usize },

    #[error("Line {line}: expected a '...' marker, got '{text}'")]
    MissingMarker { line: usize, text: String },

    #[error("Group '{group}' declares {declared} entries but {observed} were found")]
    GroupCountMismatch {
        group: String,
        declared: usize,
        observed: usize,
    },

    #[error("Group '{group}' has {observed} entries but no count line")]
    MissingGroupCount { group: String, observed: usize },

    #[error("Group '{group}' has an invalid count '{value}'")]
    InvalidGroupCount { group: String, value: String },

    #[error("Group '{group}' clashes with a field of the same name")]
    GroupFieldClash { group: String },

    #[error("No status records found in output")]
    NoRecords,

    #[error("Field '{field}' missing from status output")]
    MissingField { field: String },

    #[error("Invalid number in field '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using P4NavigatorError
pub type Result<T> = std::result::Result<T, P4NavigatorError>;

impl P4NavigatorError {
    /// Create a missing argument error with the message shown to the caller
    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::MissingArgument {
            message: message.into(),
        }
    }

    /// Create the standard "no file given" error for an operation
    pub fn missing_file(operation: &str) -> Self {
        Self::missing_argument(format!("Please pass a file to {operation}!"))
    }

    /// Create a diagnostic error from raw stderr text, dropping the trailing newline
    pub fn diagnostic(stderr: &str) -> Self {
        Self::Diagnostic(stderr.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Create a spawn failure error
    pub fn spawn_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            source,
        }
    }

    /// Create a command failed error from an exit code and the tool's stderr
    pub fn command_failed(code: Option<i32>, stderr: &str) -> Self {
        Self::CommandFailed {
            code,
            message: stderr.lines().next().unwrap_or("").trim_end().to_string(),
        }
    }

    /// Create a group count mismatch error
    pub fn group_count_mismatch(
        group: impl Into<String>,
        declared: usize,
        observed: usize,
    ) -> Self {
        Self::GroupCountMismatch {
            group: group.into(),
            declared,
            observed,
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// True when the executable could not run or exited abnormally
    pub fn is_process_error(&self) -> bool {
        matches!(
            self,
            Self::SpawnFailed { .. }
                | Self::CommandFailed { .. }
                | Self::TimedOut { .. }
                | Self::Io(_)
        )
    }

    /// The diagnostic text, if this error came from the tool's stderr
    pub fn diagnostic_text(&self) -> Option<&str> {
        match self {
            Self::Diagnostic(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_error() {
        let err = P4NavigatorError::missing_file("stat");
        assert_eq!(err.to_string(), "Please pass a file to stat!");
    }

    #[test]
    fn test_diagnostic_strips_trailing_newline() {
        let err = P4NavigatorError::diagnostic("error, happy not found\n");
        assert_eq!(err.to_string(), "error, happy not found");
        assert_eq!(err.diagnostic_text(), Some("error, happy not found"));
        assert!(!err.is_process_error());
    }

    #[test]
    fn test_diagnostic_keeps_inner_newlines() {
        let err = P4NavigatorError::diagnostic("first\r\nsecond\r\n");
        assert_eq!(err.to_string(), "first\r\nsecond");
    }

    #[test]
    fn test_command_failed_error() {
        let err = P4NavigatorError::command_failed(
            Some(1),
            "Perforce password (P4PASSWD) invalid or unset.\n",
        );
        assert_eq!(
            err.to_string(),
            "Command failed: Perforce password (P4PASSWD) invalid or unset."
        );
        assert!(err.is_process_error());
        assert_eq!(err.diagnostic_text(), None);
    }

    #[test]
    fn test_spawn_failed_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "ENOENT");
        let err = P4NavigatorError::spawn_failed("p4", io_err);
        assert!(err.to_string().contains("'p4'"));
        assert!(err.to_string().contains("ENOENT"));
        assert!(err.is_process_error());
    }

    #[test]
    fn test_group_count_mismatch_error() {
        let err = P4NavigatorError::group_count_mismatch("other", 3, 6);
        assert_eq!(
            err.to_string(),
            "Group 'other' declares 3 entries but 6 were found"
        );
    }

    #[test]
    fn test_config_parse_failed() {
        let path = std::path::PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = P4NavigatorError::config_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_read_failed() {
        let path = std::path::PathBuf::from("/test/config.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = P4NavigatorError::config_read_failed(&path, io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("access denied"));
    }
}
