//! Parser for a single `fstat` status block.
//!
//! This module provides [`RecordParser`] which turns the marker-prefixed lines of
//! one block into a [`StatusRecord`].
//!
//! # Format
//! ```text
//! ... depotFile //depot/path/to/foo.js      depth 1: field with value
//! ... isMapped                              depth 1: presence flag
//! ... ... otherOpen0 user@workspace         depth 2: entry 0 of group "other"
//! ... ... otherAction0 edit
//! ... ... otherOpen 1                       depth 2: count line for group "other"
//! ```
//!
//! # Rules
//! - **Depth 1**: sets a field; no value means `Flag(true)`, otherwise the text
//!   after the separating space is kept verbatim
//! - **Depth 2**: `<group><Member><index>` lines build indexed entries; a line
//!   without index declares how many entries the group has. A valueless line
//!   without index (`... ... otherLock`) is a flag on the record itself, stored
//!   under its full name
//! - **Validation**: declared and observed entry counts must agree, a group may
//!   not share its name with a depth-1 field, and any line deeper than two
//!   markers or without a marker fails the whole block

use crate::core::{
    error::{P4NavigatorError, Result},
    record::{FieldValue, GroupedSubEntry, StatusRecord},
};
use std::collections::{BTreeMap, HashSet};

/// Marker token repeated once per nesting level
pub const MARKER: &str = "...";

#[derive(Debug, Default)]
struct GroupState {
    entries: BTreeMap<usize, GroupedSubEntry>,
    declared: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    numeric_fields: HashSet<String>,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values of these fields become `FieldValue::Integer` when they parse as `i64`.
    /// Every other value stays text.
    pub fn with_numeric_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn parse(&self, block: &str) -> Result<StatusRecord> {
        let mut record = StatusRecord::new();
        let mut groups: BTreeMap<String, GroupState> = BTreeMap::new();

        for (line_index, line) in block.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = line_index + 1;
            let (depth, rest) = split_marker(line);

            let (name, value) = match rest.split_once(' ') {
                Some((name, value)) => (name, value),
                None => (rest, ""),
            };
            if name.is_empty() && (1..=2).contains(&depth) {
                log::debug!("Skipping marker-only line {line_number}");
                continue;
            }

            match depth {
                0 => {
                    return Err(P4NavigatorError::MissingMarker {
                        line: line_number,
                        text: line.to_string(),
                    })
                }
                1 => record.insert(name, self.field_value(name, value)),
                2 => self.apply_grouped(&mut record, &mut groups, name, value)?,
                _ => {
                    return Err(P4NavigatorError::UnexpectedDepth {
                        line: line_number,
                        depth,
                    })
                }
            }
        }

        for (group, state) in groups {
            if record.contains(&group) {
                return Err(P4NavigatorError::GroupFieldClash { group });
            }
            let observed = state.entries.len();
            match state.declared {
                None => return Err(P4NavigatorError::MissingGroupCount { group, observed }),
                Some(declared) if declared != observed => {
                    return Err(P4NavigatorError::group_count_mismatch(group, declared, observed))
                }
                Some(_) => {
                    log::debug!("Assembled group '{group}' with {observed} entries");
                    record.insert(group, FieldValue::Group(state.entries.into_values().collect()));
                }
            }
        }

        Ok(record)
    }

    fn field_value(&self, name: &str, value: &str) -> FieldValue {
        if value.trim().is_empty() {
            return FieldValue::Flag(true);
        }
        if self.numeric_fields.contains(name) {
            if let Ok(number) = value.trim().parse::<i64>() {
                return FieldValue::Integer(number);
            }
        }
        FieldValue::Text(value.to_string())
    }

    fn apply_grouped(
        &self,
        record: &mut StatusRecord,
        groups: &mut BTreeMap<String, GroupState>,
        name: &str,
        value: &str,
    ) -> Result<()> {
        let (stem, index) = split_index(name);
        let (group, member) = split_group(stem);

        match index {
            Some(index) => {
                let state = groups.entry(group.to_string()).or_default();
                state
                    .entries
                    .entry(index)
                    .or_insert_with(|| GroupedSubEntry::new(index))
                    .fields
                    .insert(member.to_string(), self.field_value(stem, value));
            }
            // A bare flag such as `... ... otherLock` is not a count line
            None if value.trim().is_empty() => record.insert(name, FieldValue::Flag(true)),
            None => {
                let declared: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| P4NavigatorError::InvalidGroupCount {
                            group: group.to_string(),
                            value: value.to_string(),
                        })?;
                let state = groups.entry(group.to_string()).or_default();
                match state.declared {
                    Some(previous) if previous != declared => {
                        return Err(P4NavigatorError::InvalidGroupCount {
                            group: group.to_string(),
                            value: value.to_string(),
                        })
                    }
                    _ => state.declared = Some(declared),
                }
            }
        }

        Ok(())
    }
}

/// Count leading `... ` markers and return the depth with the remaining text
pub fn split_marker(line: &str) -> (usize, &str) {
    let mut depth = 0;
    let mut rest = line;

    while let Some(after) = rest.strip_prefix(MARKER) {
        if after.is_empty() {
            return (depth + 1, after);
        }
        match after.strip_prefix(' ') {
            Some(after) => {
                depth += 1;
                rest = after;
            }
            None => break,
        }
    }

    (depth, rest)
}

/// `otherOpen12` -> (`otherOpen`, Some(12)); `otherOpen` -> (`otherOpen`, None)
fn split_index(name: &str) -> (&str, Option<usize>) {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.is_empty() || stem.len() == name.len() {
        return (name, None);
    }
    match name[stem.len()..].parse() {
        Ok(index) => (stem, Some(index)),
        Err(_) => (name, None),
    }
}

/// `otherOpen` -> (`other`, `Open`); a stem without capitals is its own member
fn split_group(stem: &str) -> (&str, &str) {
    match stem.char_indices().find(|(i, c)| *i > 0 && c.is_uppercase()) {
        Some((i, _)) => (&stem[..i], &stem[i..]),
        None => (stem, stem),
    }
}
