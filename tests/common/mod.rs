//! Shared test utilities for p4-navigator
//!
//! Integration tests drive either a [`ScriptedExecutor`](p4_navigator::ScriptedExecutor)
//! with canned `p4` output, or the real binary pointed at a fake `p4` script.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
