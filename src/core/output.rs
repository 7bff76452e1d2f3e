//! Terminal output helpers for the p4-navigator binary.
//!
//! All command output goes through these functions so errors, confirmations and
//! raw `p4` text look the same everywhere.
//!
//! # Conventions
//! - Errors are prefixed with a red cross and surrounded by blank lines
//! - Successful actions get a green check mark
//! - Text produced by `p4` itself is echoed line by line, dimmed
//! - `--json` output bypasses all styling

use crate::core::error::Result;
use colored::*;
use serde::Serialize;

/// `✕ Error: <message>` in red, padded with blank lines
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// `✓ <message>` in green
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Plain informational line
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// `<header>:` followed by a blank line
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Echo text produced by the tool, one dimmed line at a time
pub fn print_tool_output(text: &str) {
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        println!("  {}", line.bright_black());
    }
}

/// Pretty JSON on stdout, for scripting
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report the stdout of an action command (`edit`, `sync`, ...)
pub fn print_action_output(command: &str, output: &str, json: bool) -> Result<()> {
    if json {
        return print_json(&serde_json::json!({ "command": command, "output": output }));
    }
    print_tool_output(output);
    print_success(&format!("{command} completed"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_error("Test error message");
        print_success("Opened for edit");
        print_info("Information message");
        print_section_header("Opened files");
        print_tool_output("//depot/foo.js#1 - opened for edit\n\n");
    }

    #[test]
    fn test_print_json() -> Result<()> {
        print_json(&serde_json::json!({ "haveRev": 2 }))?;
        Ok(())
    }

    #[test]
    fn test_print_action_output() -> Result<()> {
        print_action_output("edit", "//depot/foo.js#1 - opened for edit\n", false)?;
        print_action_output("edit", "//depot/foo.js#1 - opened for edit\n", true)?;
        Ok(())
    }
}
