//! Shared test utilities for E2E tests.
//!
//! Every fixture owns a temporary directory that stands in for
//! `XDG_CONFIG_HOME`, so manager scripts land in `<tmp>/pacx/<name>.lua`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manager("apt", &scripts::printing(&["Install"]));
//!     fixture.command().args(["install", "apt:curl"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::scripts;
    pub use super::TestFixture;
}

/// Manager scripts for testing.
#[allow(dead_code)]
pub mod scripts {
    /// A script whose listed callbacks print `<Field> <args...>` to stdout.
    pub fn printing(fields: &[&str]) -> String {
        let mut script = String::from("return {\n");
        for field in fields {
            script.push_str(&format!(
                "  {field} = function(...) print(\"{field} \" .. table.concat({{...}}, \" \")) end,\n"
            ));
        }
        script.push_str("}\n");
        script
    }

    /// Like [`printing`], but the top level announces every load.
    pub fn announcing(name: &str, fields: &[&str]) -> String {
        format!("print(\"loaded {name}\")\n{}", printing(fields))
    }

    /// A script whose `field` callback raises `message`.
    pub fn failing(field: &str, message: &str) -> String {
        format!("return {{ {field} = function(...) error({message:?}) end }}\n")
    }

    /// A script that does not return a table.
    pub const NOT_A_TABLE: &str = "return 'apt'\n";

    /// A script that fails to parse.
    pub const SYNTAX_ERROR: &str = "return {\n";
}

/// A test fixture that provides a temporary config home.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add `pacx/<name>.lua` with the given content.
    pub fn with_manager(self, name: &str, script: &str) -> Self {
        self.temp_dir
            .child("pacx")
            .child(format!("{name}.lua"))
            .write_str(script)
            .expect("Failed to write manager script");
        self
    }

    /// Get the path to the temporary config home.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command with `XDG_CONFIG_HOME` pointed at this fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pacx");
        cmd.env("XDG_CONFIG_HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("PACX_CONFIG_DIR")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_manager() {
        let fixture = TestFixture::new().with_manager("apt", "return {}");
        assert!(fixture.path().join("pacx").join("apt.lua").exists());
    }

    #[test]
    fn test_printing_script_shape() {
        let script = scripts::printing(&["Install"]);
        assert!(script.starts_with("return {\n"));
        assert!(script.contains("Install = function(...)"));
        assert!(script.contains("table.concat({...}, \" \")"));
    }

    #[test]
    fn test_failing_script_quotes_message() {
        let script = scripts::failing("Install", "apt is locked");
        assert_eq!(
            script,
            "return { Install = function(...) error(\"apt is locked\") end }\n"
        );
    }
}
