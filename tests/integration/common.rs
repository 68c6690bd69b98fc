//! Shared fixtures for integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding the config file and request files of one test.
///
/// Every command gets `--config` pointing into the directory, so no test
/// reads the user's real configuration.
pub struct TestProject {
    temp: TempDir,
    config_path: PathBuf,
}

impl TestProject {
    /// Project without a config file (all defaults).
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp.path().join("config.toml");
        Self {
            temp,
            config_path,
        }
    }

    /// Project with the given config file content.
    pub fn with_config(content: &str) -> Self {
        let project = Self::new();
        std::fs::write(&project.config_path, content).expect("Failed to write config");
        project
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file relative to the project directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp.path().join(name)).expect("Failed to read test file")
    }

    /// `reqfaker --quiet --config <project>/config.toml`, run in the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("reqfaker").expect("Failed to find reqfaker binary");
        cmd.current_dir(self.temp.path())
            .env_remove("REQFAKER_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--quiet")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }

    /// Like [`cmd`](Self::cmd) but with info logging on stderr.
    pub fn cmd_with_logs(&self) -> Command {
        let mut cmd = Command::cargo_bin("reqfaker").expect("Failed to find reqfaker binary");
        cmd.current_dir(self.temp.path())
            .env_remove("REQFAKER_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }
}
