//! Canned `p4` output shared by the integration tests

#![allow(dead_code)]

pub const FOO_DEPOT: &str = "//depot/path/to/foo.js";
pub const BAR_DEPOT: &str = "//depot/path/to/bar.js";

pub const EDIT_OUTPUT: &str = "//depot/path/to/file/foo.js#123 - opened for edit
... //depot/path/to/file/foo.js - also opened by user@workspace
";

pub const ADD_OUTPUT: &str = "//depot/path/to/file/bar.js#1 - opened for add\n";

pub const NOT_ON_CLIENT: &str = "bar.js - file(s) not on client.\n";

pub const PASSWORD_INVALID: &str = "Perforce password (P4PASSWD) invalid or unset.\n";

/// Single-file `fstat` report
pub const FOO_FSTAT: &str = "\
... depotFile //depot/path/to/foo.js
... clientFile /path/to/workspace/foo.js
... isMapped
... headAction edit
... headType text
... headTime 1230890900
... headRev 2
... headChange 123
... headModTime 1230890900
... haveRev 2
... action edit
... change default
... type text
... actionOwner luser
";

/// Two-file directory report
pub const DIR_FSTAT: &str = "\
... depotFile //depot/path/to/foo.js
... clientFile /path/to/workspace/foo.js
... isMapped
... headAction edit
... headRev 2
... haveRev 2
... action edit
... change default

... depotFile //depot/path/to/bar.js
... clientFile /path/to/workspace/bar.js
... isMapped
... headAction add
... headRev 1
... haveRev 1
";

/// Builds a block opened in `count` other workspaces, with a count line of `declared`
pub fn other_open_fstat(count: usize, declared: usize) -> String {
    let mut lines = vec![
        "... depotFile //path/to/file/foo.js".to_string(),
        "... clientFile /path/to/workspace/foo.js".to_string(),
        "... isMapped ".to_string(),
        "... headAction edit".to_string(),
        "... headType xtext".to_string(),
        "... headRev 123".to_string(),
        "... haveRev 123".to_string(),
    ];

    for i in 0..count {
        let workspace = match i % 3 {
            0 => "other@some_other_workspace",
            1 => "other@another_workspace",
            _ => "other2@yet_another_workspace",
        };
        let change = if i % 3 == 0 { "12340" } else { "default" };
        lines.push(format!("... ... otherOpen{} {}", i, workspace));
        lines.push(format!("... ... otherAction{} edit", i));
        lines.push(format!("... ... otherChange{} {}", i, change));
    }
    lines.push(format!("... ... otherOpen {}", declared));

    lines.join("\n") + "\n"
}
