//! Structured form of one `fstat` status block.
//!
//! Records have no fixed shape: the fields present depend on the file, the
//! client and the flags passed to `fstat`. A [`StatusRecord`] is therefore a
//! map from field name to a tagged [`FieldValue`]. Grouped depth-2 data such as
//! `otherOpen0`/`otherAction0` collapses into a list of [`GroupedSubEntry`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One value in a status record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Field present without a value, e.g. `... isMapped`
    Flag(bool),
    /// Field converted to a number because it was listed as numeric
    Integer(i64),
    /// Value text, verbatim
    Text(String),
    /// Indexed depth-2 entries of one group, ascending by index
    Group(Vec<GroupedSubEntry>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&[GroupedSubEntry]> {
        match self {
            FieldValue::Group(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(value) => write!(f, "{value}"),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Group(entries) => write!(f, "[{} entries]", entries.len()),
        }
    }
}

/// The fields sharing one numeric suffix inside a group.
///
/// For `... ... otherOpen2 user@ws` and `... ... otherAction2 edit` the entry
/// has `index == 2` and fields `Open` and `Action`. Serialized, an entry is just
/// its field map; the index is its position in the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedSubEntry {
    #[serde(skip)]
    pub index: usize,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl GroupedSubEntry {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, member: &str) -> Option<&FieldValue> {
        self.fields.get(member)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl StatusRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text value of a field, if present and textual
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// A record without top-level fields carries no data
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for StatusRecord {
    fn from_iter<T: IntoIterator<Item = (K, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
