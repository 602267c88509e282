//! Shared testing utilities for coffeectl CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment for CLI exercises: its own HOME and config path.
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path the CLI will use for its configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.toml")
    }

    /// Build a command for invoking the compiled `coffeectl` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("coffeectl").expect("Failed to locate coffeectl binary");
        cmd.env("HOME", self.root.path()).env("COFFEECTL_CONFIG", self.config_path());
        cmd
    }

    /// Same, pointed at a mock GitHub API server.
    pub fn cli_against(&self, api_base: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("COFFEECTL_API_BASE", api_base);
        cmd
    }

    /// Seed a stored configuration with the default repository target.
    pub fn write_config(&self, token: &str) {
        fs::write(self.config_path(), format!("github_token = \"{token}\"\n"))
            .expect("Failed to seed config file");
    }

    /// Raw contents of the stored configuration file.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Config file should exist")
    }

    pub fn config_exists(&self) -> bool {
        self.config_path().exists()
    }
}
