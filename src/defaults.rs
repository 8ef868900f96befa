//! Default locations for pacx manager scripts.
//!
//! Manager scripts live in `<config-home>/pacx/<manager>.lua`. The directory
//! can be overridden by the `--config-dir` CLI flag or the `PACX_CONFIG_DIR`
//! environment variable.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory name appended to the user config home.
pub const APP_DIR: &str = "pacx";

/// Extension of manager scripts.
pub const SCRIPT_EXTENSION: &str = "lua";

/// Returns the default directory holding manager scripts.
///
/// Uses `$XDG_CONFIG_HOME/pacx` when `XDG_CONFIG_HOME` is set and non-empty,
/// otherwise the platform config directory:
/// - Linux: `~/.config/pacx`
/// - macOS: `~/Library/Application Support/pacx`
/// - Windows: `{FOLDERID_RoamingAppData}\pacx`
pub fn default_config_dir() -> Result<PathBuf> {
    let home = env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or(Error::ConfigDirUnavailable)?;

    Ok(home.join(APP_DIR))
}

/// Resolve the script directory, preferring an explicit override.
pub fn resolve_config_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_config_dir(),
    }
}

/// Path of the script for `manager` inside `config_dir`.
pub fn script_path(config_dir: &Path, manager: &str) -> PathBuf {
    config_dir.join(format!("{manager}.{SCRIPT_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_config_dir_honours_xdg() {
        let original = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-test");

        let dir = default_config_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/xdg-test/pacx"));

        match original {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    #[serial]
    fn test_default_config_dir_ignores_empty_xdg() {
        let original = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", "");

        // Falls through to the platform directory when one exists
        if let Ok(dir) = default_config_dir() {
            assert!(dir.ends_with(APP_DIR));
            assert_ne!(dir, PathBuf::from(APP_DIR));
        }

        match original {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    fn test_override_wins() {
        let dir = resolve_config_dir(Some(Path::new("/etc/pacx-scripts"))).unwrap();
        assert_eq!(dir, PathBuf::from("/etc/pacx-scripts"));
    }

    #[test]
    fn test_script_path() {
        assert_eq!(
            script_path(Path::new("/home/u/.config/pacx"), "apt"),
            PathBuf::from("/home/u/.config/pacx/apt.lua")
        );
    }
}
