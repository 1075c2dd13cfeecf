//! Common test utilities for CLI integration tests.
//!
//! Every command starts from a cleared environment so the developer's own
//! `PATH`, `SHELL` and `ADDPATH_*` settings never leak into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with a scratch directory for `-x` checks.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// The addpath binary with an empty environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("addpath").expect("Failed to find addpath binary");
        cmd.env_clear();
        cmd
    }

    /// The addpath binary with `PATH` set to `path`.
    pub fn command(&self, path: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("PATH", path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory and return it as a string.
    pub fn create_dir(&self, name: &str) -> String {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path.to_str().expect("temp path is UTF-8").to_string()
    }

    /// A path under the scratch directory that does not exist.
    pub fn missing(&self, name: &str) -> String {
        self.temp_path
            .join(name)
            .to_str()
            .expect("temp path is UTF-8")
            .to_string()
    }
}

/// Stdout of a successful run, with the trailing newline removed.
#[allow(dead_code)]
pub fn stdout_line(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run addpath");
    assert!(
        output.status.success(),
        "addpath failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    stdout
        .strip_suffix('\n')
        .expect("output ends with a newline")
        .to_string()
}
