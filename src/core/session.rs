//! Per-client working directory and command options.
//!
//! A [`Session`] is owned by exactly one client. It holds the directory every
//! `p4` invocation runs in and a free-form options map that is passed along to
//! the executor. Nothing here is global, so two clients never observe each
//! other's directory.
//!
//! # Public API
//! - [`Session`]: Working directory plus options, mutated only through its methods
//! - [`normalize_path`]: Lexical path normalization used by `change_directory`

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Option key reserved for the working directory; never accepted through options.
pub const CWD_OPTION: &str = "cwd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    working_directory: PathBuf,
    options: BTreeMap<String, String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start a session in the process's current directory (or `/` if unknown)
    pub fn new() -> Self {
        let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        Self::at(start)
    }

    /// Start a session in a specific directory
    pub fn at(directory: impl AsRef<Path>) -> Self {
        Self {
            working_directory: normalize_path(&Path::new("/").join(directory)),
            options: BTreeMap::new(),
        }
    }

    /// Resolve `segment` against the current directory and move there.
    ///
    /// Absolute segments replace the directory, relative ones are appended.
    /// Returns `&mut Self` so calls can be chained:
    /// `s.change_directory("/").change_directory("a")`.
    pub fn change_directory(&mut self, segment: impl AsRef<Path>) -> &mut Self {
        let joined = self.working_directory.join(segment);
        self.working_directory = normalize_path(&joined);
        log::debug!("Working directory is now {}", self.working_directory.display());
        self
    }

    pub fn current_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Merge `options` into the session's options.
    ///
    /// A `cwd` entry is dropped: the directory only changes through `change_directory`.
    pub fn set_options<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in options {
            let key = key.into();
            if key == CWD_OPTION {
                log::warn!("Ignoring '{CWD_OPTION}' option; use change_directory instead");
                continue;
            }
            self.options.insert(key, value.into());
        }
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }
}

/// Normalize a path lexically: resolve `.` and `..`, collapse separators and
/// drop any trailing separator. Relative input is anchored at `/`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::from("/");

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized = PathBuf::from(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut sessions: Vec<Session> = (0..10)
            .map(|i| {
                let mut session = Session::new();
                session.change_directory("/").change_directory(format!("dir{i}"));
                session
            })
            .collect();

        for (i, session) in sessions.iter().enumerate() {
            assert_eq!(session.current_directory(), Path::new(&format!("/dir{i}")));
        }

        sessions[0].change_directory("elsewhere");
        assert_eq!(sessions[1].current_directory(), Path::new("/dir1"));
    }

    #[test]
    fn test_chained_matches_sequential() {
        let mut chained = Session::at("/base");
        chained.change_directory("a").change_directory("b/c");

        let mut sequential = Session::at("/base");
        sequential.change_directory("a");
        sequential.change_directory("b/c");

        assert_eq!(chained.current_directory(), sequential.current_directory());
        assert_eq!(chained.current_directory(), Path::new("/base/a/b/c"));
    }

    #[test]
    fn test_absolute_segment_replaces() {
        let mut session = Session::at("/somewhere/deep");
        session.change_directory("/path/to/dir/");
        assert_eq!(session.current_directory(), Path::new("/path/to/dir"));
    }

    #[test]
    fn test_parent_and_current_components() {
        let mut session = Session::at("/a/b");
        session.change_directory("../c/./d//");
        assert_eq!(session.current_directory(), Path::new("/a/c/d"));

        session.change_directory("../../../../..");
        assert_eq!(session.current_directory(), Path::new("/"));
    }

    #[test]
    fn test_set_options_refuses_cwd() {
        let mut session = Session::at("/");
        session.set_options([("cwd", "/a/b/c/d/e/f/g")]);
        assert_eq!(session.current_directory(), Path::new("/"));
        assert!(session.options().is_empty());
    }

    #[test]
    fn test_set_options_merges() {
        let mut session = Session::at("/");
        session.set_options([("fdsa", "fdsa"), ("asdf", "asdf")]);

        let expected: BTreeMap<String, String> = [("fdsa", "fdsa"), ("asdf", "asdf")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(session.options(), &expected);

        session.set_options([("fdsa", "changed")]);
        assert_eq!(session.options()["fdsa"], "changed");
        assert_eq!(session.options()["asdf"], "asdf");
    }
}
