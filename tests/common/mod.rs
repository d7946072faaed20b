//! Shared test utilities for E2E tests.
//!
//! Provides a `TestFixture` wrapping a temp directory with an optional
//! `.classroom.yaml`, plus roster snippets shared across test files.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::{configs, TestFixture};
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::TWO_STUDENTS_ONE_SKIPPED);
//!     fixture.command().arg("pull").arg("hw1").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Common roster YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Two students; the second is flagged skip.
    pub const TWO_STUDENTS_ONE_SKIPPED: &str = "\
organization: test-org
classroom: systems-101
roster:
  ada:
    name: Ada Lovelace
    email: ada@example.edu
    github: ada-lovelace
    skip: false
  kurt:
    name: Kurt Goedel
    email: kurt@example.edu
    github: kgoedel
    skip: true
";

    /// Every student flagged skip; batch runs spawn no git processes.
    pub const ALL_SKIPPED: &str = "\
organization: test-org
classroom: systems-101
roster:
  ada:
    name: Ada Lovelace
    email: ada@example.edu
    github: ada-lovelace
    skip: true
  kurt:
    name: Kurt Goedel
    email: kurt@example.edu
    github: kgoedel
    skip: true
";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "organization: [unclosed";
}

/// A test fixture that provides a temporary directory with an optional
/// `.classroom.yaml` roster.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.classroom.yaml` roster with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".classroom.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Create a directory (and parents) inside the fixture.
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the roster file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".classroom.yaml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd =
            assert_cmd::Command::cargo_bin("class-repo").expect("binary should be built");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
