use crate::core::error::P4NavigatorError;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "p4-navigator";

pub fn get_config_directory() -> Result<PathBuf, P4NavigatorError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(P4NavigatorError::ConfigDirectoryNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_directory_ends_with_app_name() {
        if let Ok(dir) = get_config_directory() {
            assert!(dir.ends_with(APP_DIR_NAME));
        }
    }
}
