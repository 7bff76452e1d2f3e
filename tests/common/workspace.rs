//! Fake Perforce workspace for end-to-end binary tests
//!
//! Writes a small shell script standing in for `p4`, plus a `config.json`
//! pointing the client at it. The script answers a fixed set of argument lists
//! and fails on anything else.

#![cfg(unix)]
#![allow(dead_code)]

use super::fixtures::*;
use p4_navigator::core::error::Result;
use p4_navigator::ClientConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test workspace. The TempDir must be kept alive for the duration of the test.
pub struct FakeWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub log_path: PathBuf,
}

impl FakeWorkspace {
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Every argument list the fake `p4` received, one per line
    pub fn received(&self) -> Vec<String> {
        fs::read_to_string(&self.log_path)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

pub fn setup_fake_workspace() -> Result<FakeWorkspace> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("workspace");
    fs::create_dir_all(root.join("sub"))?;

    let bin_dir = temp_dir.path().join("bin");
    fs::create_dir_all(&bin_dir)?;
    let log_path = temp_dir.path().join("p4.log");

    let script_path = bin_dir.join("p4");
    fs::write(&script_path, fake_p4_script(&log_path))?;
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))?;

    let mut config = ClientConfig::default();
    config.executable = script_path.display().to_string();
    config
        .options
        .insert("P4CLIENT".to_string(), "test_workspace".to_string());

    let config_path = temp_dir.path().join("config.json");
    config.save_to(&config_path)?;

    Ok(FakeWorkspace {
        temp_dir,
        root,
        config_path,
        log_path,
    })
}

fn fake_p4_script(log_path: &Path) -> String {
    let mut script = String::from("#!/bin/sh\n");
    script.push_str(&format!("echo \"$*\" >> '{}'\n", log_path.display()));
    script.push_str("case \"$*\" in\n");

    add_case(&mut script, "fstat foo.js", &stdout_heredoc(FOO_FSTAT));
    add_case(&mut script, "fstat -T haveRev foo.js", "echo '... haveRev 2'");
    add_case(&mut script, "fstat *", &stdout_heredoc(DIR_FSTAT));
    add_case(
        &mut script,
        "fstat ...",
        "echo 'sub - no such file(s).' >&2",
    );
    add_case(&mut script, "edit foo.js", &stdout_heredoc(EDIT_OUTPUT));
    add_case(&mut script, "edit bar.js", &stderr_line(NOT_ON_CLIENT));
    add_case(&mut script, "add bar.js", &stdout_heredoc(ADD_OUTPUT));
    add_case(&mut script, "edit locked.js", &stderr_line(PASSWORD_INVALID));
    add_case(
        &mut script,
        "sync *",
        "echo '//depot/path/to/foo.js#2 - updating /path/to/workspace/foo.js'",
    );
    add_case(
        &mut script,
        "submit -d fix things foo.js",
        "echo 'Change 124 submitted.'",
    );
    add_case(
        &mut script,
        "-u foo login",
        "read pw; if [ \"$pw\" = hunter2 ]; then echo 'User foo logged in.'; \
         else echo 'Password invalid.' >&2; exit 1; fi",
    );
    add_case(&mut script, "info", "echo \"Client name: $P4CLIENT\"");
    add_case(
        &mut script,
        "*",
        "echo \"Unknown command. Try 'p4 help' for info.\" >&2; exit 1",
    );

    script.push_str("esac\n");
    script
}

fn add_case(script: &mut String, pattern: &str, body: &str) {
    // Only the catch-all is an unquoted glob
    if pattern == "*" {
        script.push_str("  *)\n");
    } else {
        script.push_str(&format!("  \"{}\")\n", pattern));
    }
    script.push_str(body);
    script.push_str("\n    ;;\n");
}

fn stdout_heredoc(text: &str) -> String {
    format!("cat <<'EOF'\n{}EOF", text)
}

fn stderr_line(text: &str) -> String {
    format!("echo '{}' >&2", text.trim_end())
}
