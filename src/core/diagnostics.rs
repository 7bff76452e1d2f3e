//! Recognition of known `p4` diagnostic phrasings.
//!
//! `p4` writes informational messages to stderr next to real failures. A
//! [`DiagnosticPatterns`] is an allow-list of substrings; a diagnostic is
//! matched when every non-empty line contains one of them. The same type backs
//! the benign list used by directory queries and the "not tracked" list that
//! drives the smart edit fallback.

use serde::{Deserialize, Serialize};

/// Messages that carry no failure, e.g. `bar - no such file(s).`
pub const DEFAULT_BENIGN_DIAGNOSTICS: &[&str] = &[
    "no such file(s)",
    "file(s) not in client view",
    "no file(s) at that changelist number",
];

/// Messages that mean the file is not yet tracked and should be added
pub const DEFAULT_NOT_TRACKED_DIAGNOSTICS: &[&str] = &["file(s) not on client"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticPatterns {
    patterns: Vec<String>,
}

impl DiagnosticPatterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn benign() -> Self {
        Self::new(DEFAULT_BENIGN_DIAGNOSTICS.iter().copied())
    }

    pub fn not_tracked() -> Self {
        Self::new(DEFAULT_NOT_TRACKED_DIAGNOSTICS.iter().copied())
    }

    pub fn push(&mut self, pattern: impl Into<String>) {
        self.patterns.push(pattern.into());
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True when every non-empty line of `diagnostic` contains a known pattern.
    /// Text without any non-empty line never matches.
    pub fn matches(&self, diagnostic: &str) -> bool {
        let mut lines = diagnostic.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();
        if lines.peek().is_none() {
            return false;
        }
        lines.all(|line| self.patterns.iter().any(|p| line.contains(p.as_str())))
    }
}
