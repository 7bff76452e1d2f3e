//! Unified color system for Perforce file actions.
//!
//! Every place that prints a file uses [`get_action_color_style`] so one action
//! always gets the same color.
//!
//! # Color Scheme
//! - **Edit**: Yellow
//! - **Add / move-add**: Green
//! - **Delete / move-delete**: Red
//! - **Branch / integrate**: Blue
//! - **Archive / purge / import**: Magenta
//! - **Unknown**: Bright black

use crate::core::file_action::FileAction;
use colored::*;

/// Returns a closure that applies the color of `action` to any text
pub fn get_action_color_style(action: FileAction) -> Box<dyn Fn(&str) -> ColoredString> {
    match action {
        FileAction::Edit => Box::new(|text: &str| text.yellow()),
        FileAction::Add | FileAction::MoveAdd => Box::new(|text: &str| text.green()),
        FileAction::Delete | FileAction::MoveDelete => Box::new(|text: &str| text.red()),
        FileAction::Branch | FileAction::Integrate => Box::new(|text: &str| text.blue()),
        FileAction::Import | FileAction::Archive | FileAction::Purge => {
            Box::new(|text: &str| text.magenta())
        }
        FileAction::Unknown => Box::new(|text: &str| text.bright_black()),
    }
}

/// Colored action label padded to the widest label so paths line up
pub fn get_aligned_action(action: FileAction) -> ColoredString {
    let color_fn = get_action_color_style(action);
    color_fn(&format!("{:<11}", action.as_str()))
}

/// Get colored file path using the action color
pub fn get_colored_path(action: FileAction, path: &str) -> ColoredString {
    let color_fn = get_action_color_style(action);
    color_fn(path)
}

/// One listing line: `[n] <action> <path>#<rev>`
pub fn format_file_line(
    index: usize,
    action: FileAction,
    path: &str,
    revision: Option<&str>,
) -> String {
    let revision = revision
        .map(|rev| format!("#{rev}").bright_black().to_string())
        .unwrap_or_default();
    format!(
        "{} {} {}{}",
        format!("[{index}]").bright_black(),
        get_aligned_action(action),
        get_colored_path(action, path),
        revision
    )
}
