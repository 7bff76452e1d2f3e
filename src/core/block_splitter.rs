//! Splitting a multi-file `fstat` report into records.
//!
//! Directory queries print one block per file, separated by blank lines. Blocks
//! that do not name a file (no depth-1 identifying field) are dropped, unless they
//! nest deeper than two markers. Every other block must parse, otherwise the whole
//! report is rejected.

use crate::core::{
    diagnostics::DiagnosticPatterns,
    error::{P4NavigatorError, Result},
    record::StatusRecord,
    record_parser::{split_marker, RecordParser},
};

/// Field that marks a block as a file record
pub const DEFAULT_IDENTIFYING_FIELD: &str = "depotFile";

#[derive(Debug, Clone)]
pub struct BlockSplitter {
    parser: RecordParser,
    identifying_field: String,
    benign: DiagnosticPatterns,
}

impl Default for BlockSplitter {
    fn default() -> Self {
        Self::new(RecordParser::new(), DEFAULT_IDENTIFYING_FIELD, DiagnosticPatterns::benign())
    }
}

impl BlockSplitter {
    pub fn new(
        parser: RecordParser,
        identifying_field: impl Into<String>,
        benign: DiagnosticPatterns,
    ) -> Self {
        Self {
            parser,
            identifying_field: identifying_field.into(),
            benign,
        }
    }

    /// Parse every file block of `report`.
    ///
    /// `diagnostic` is the stderr text that accompanied the report. It is ignored
    /// when it matches the benign allow-list and fails the split otherwise.
    pub fn split_report(
        &self,
        report: &str,
        diagnostic: Option<&str>,
    ) -> Result<Vec<StatusRecord>> {
        if let Some(text) = diagnostic.filter(|t| !t.trim().is_empty()) {
            if !self.benign.matches(text) {
                return Err(P4NavigatorError::diagnostic(text));
            }
            log::debug!("Ignoring benign diagnostic: {}", text.trim_end());
        }

        let mut records = Vec::new();
        for block in split_blocks(report) {
            if !self.is_identified(&block) && !is_too_deep(&block) {
                log::debug!("Dropping block without '{}'", self.identifying_field);
                continue;
            }
            let record = self.parser.parse(&block)?;
            if !record.is_empty() {
                records.push(record);
            }
        }

        log::debug!("Parsed {} status records", records.len());
        Ok(records)
    }

    fn is_identified(&self, block: &str) -> bool {
        block.lines().any(|line| {
            let (depth, rest) = split_marker(line);
            depth == 1 && rest.split(' ').next() == Some(self.identifying_field.as_str())
        })
    }
}

/// Blocks with lines nested three or more levels deep are always parsed so the
/// depth error surfaces
fn is_too_deep(block: &str) -> bool {
    block.lines().any(|line| split_marker(line).0 > 2)
}

/// Group consecutive non-blank lines into blocks
fn split_blocks(report: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in report.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}
