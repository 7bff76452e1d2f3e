//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the error banner
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}

/// Creates a predicate that checks for a completed action
pub fn completed(command: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{} completed", command))
}

/// Creates a predicate that checks for numbered file indices
pub fn has_file_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for a depot path with its revision
pub fn has_revision(path: &str, revision: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("{}#{}", path, revision))
}
