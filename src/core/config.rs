//! Client configuration loaded from `config.json`.
//!
//! The file lives in the p4-navigator config directory (see
//! [`get_config_directory`](crate::core::dirs::get_config_directory)). A missing
//! file is not an error: every field has a default, and fields left out of the
//! file keep theirs.

use crate::core::{
    block_splitter::{BlockSplitter, DEFAULT_IDENTIFYING_FIELD},
    diagnostics::DiagnosticPatterns,
    dirs::get_config_directory,
    error::{P4NavigatorError, Result},
    record_parser::RecordParser,
    runner::DEFAULT_EXECUTABLE,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Program invoked for every subcommand
    pub executable: String,
    /// Options applied to every new session (`P4*` keys become environment variables)
    pub options: BTreeMap<String, String>,
    /// Stderr phrasings that directory queries treat as informational
    pub benign_diagnostics: DiagnosticPatterns,
    /// Stderr phrasings that make smart edit fall back to `add`
    pub not_tracked_diagnostics: DiagnosticPatterns,
    /// Depth-1 field that marks a report block as a file record
    pub identifying_field: String,
    /// Fields whose values are parsed as integers
    pub numeric_fields: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            options: BTreeMap::new(),
            benign_diagnostics: DiagnosticPatterns::benign(),
            not_tracked_diagnostics: DiagnosticPatterns::not_tracked(),
            identifying_field: DEFAULT_IDENTIFYING_FIELD.to_string(),
            numeric_fields: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Path of the config file in the default config directory
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("Using default configuration: {e}");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| P4NavigatorError::config_read_failed(path, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| P4NavigatorError::config_parse_failed(path, e))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn record_parser(&self) -> RecordParser {
        RecordParser::new().with_numeric_fields(self.numeric_fields.iter().cloned())
    }

    pub fn block_splitter(&self) -> BlockSplitter {
        BlockSplitter::new(
            self.record_parser(),
            self.identifying_field.clone(),
            self.benign_diagnostics.clone(),
        )
    }
}
