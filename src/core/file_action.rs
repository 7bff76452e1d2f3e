//! Type-safe Perforce file action enumeration.
//!
//! `fstat` reports what is happening to a file as free text in `action` (opened
//! in this workspace) or `headAction` (last change in the depot). [`FileAction`]
//! maps those strings onto an enum so display code can match on it.

use crate::core::record::StatusRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileAction {
    /// Opened for edit
    Edit,
    /// Opened for add
    Add,
    /// Opened for delete
    Delete,
    /// Branched from another file
    Branch,
    /// Integrated from another file
    Integrate,
    /// Target side of a move
    MoveAdd,
    /// Source side of a move
    MoveDelete,
    /// Imported from a remote depot
    Import,
    /// Contents archived
    Archive,
    /// Contents purged
    Purge,
    /// Any action this client does not know about
    Unknown,
}

impl FileAction {
    /// Action of a record: the workspace `action`, falling back to `headAction`
    pub fn from_record(record: &StatusRecord) -> Option<FileAction> {
        record
            .text("action")
            .or_else(|| record.text("headAction"))
            .map(FileAction::from)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Edit => "edit",
            FileAction::Add => "add",
            FileAction::Delete => "delete",
            FileAction::Branch => "branch",
            FileAction::Integrate => "integrate",
            FileAction::MoveAdd => "move/add",
            FileAction::MoveDelete => "move/delete",
            FileAction::Import => "import",
            FileAction::Archive => "archive",
            FileAction::Purge => "purge",
            FileAction::Unknown => "unknown",
        }
    }
}

impl From<&str> for FileAction {
    fn from(action: &str) -> Self {
        match action.trim() {
            "edit" => FileAction::Edit,
            "add" => FileAction::Add,
            "delete" => FileAction::Delete,
            "branch" => FileAction::Branch,
            "integrate" => FileAction::Integrate,
            "move/add" => FileAction::MoveAdd,
            "move/delete" => FileAction::MoveDelete,
            "import" => FileAction::Import,
            "archive" => FileAction::Archive,
            "purge" => FileAction::Purge,
            _ => FileAction::Unknown,
        }
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::FieldValue;

    #[test]
    fn test_from_str() {
        assert_eq!(FileAction::from("edit"), FileAction::Edit);
        assert_eq!(FileAction::from("move/add"), FileAction::MoveAdd);
        assert_eq!(FileAction::from("something-new"), FileAction::Unknown);
    }

    #[test]
    fn test_from_record_prefers_workspace_action() {
        let mut record = StatusRecord::new();
        record.insert("headAction", FieldValue::Text("edit".to_string()));
        assert_eq!(FileAction::from_record(&record), Some(FileAction::Edit));

        record.insert("action", FieldValue::Text("delete".to_string()));
        assert_eq!(FileAction::from_record(&record), Some(FileAction::Delete));

        assert_eq!(FileAction::from_record(&StatusRecord::new()), None);
    }

    #[test]
    fn test_display_round_trip() {
        for action in [FileAction::Edit, FileAction::MoveDelete, FileAction::Purge] {
            assert_eq!(FileAction::from(action.to_string().as_str()), action);
        }
    }
}
