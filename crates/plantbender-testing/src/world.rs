//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Writing a `config.toml` that points at a [`MockServer`]
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{ACTIVATION_CODE, RECORDS_CODE};
use crate::server::MockServer;

const OVERRIDE_VARS: [&str; 4] = [
    "PLANTBENDER_PATH",
    "PLANTBENDER_BASE_URL",
    "PLANTBENDER_RECORDS_CODE",
    "PLANTBENDER_ACTIVATION_CODE",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use plantbender_testing::{MockServer, TestWorld, fixtures};
///
/// let server = MockServer::with_records(fixtures::single_reading());
/// let world = TestWorld::new().with_server(&server);
///
/// let result = world.run(&["history"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    format: String,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".plantbender");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            format: "plain".to_string(),
        }
    }

    /// Get the data directory path (.plantbender).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Write a config pointing at `server` with the codes it expects.
    pub fn with_server(self, server: &MockServer) -> Self {
        self.with_backend(&server.base_url(), Some(1023))
    }

    /// Write a config for an arbitrary backend URL.
    pub fn with_backend(self, base_url: &str, scale_max: Option<u32>) -> Self {
        let mut content = format!(
            "[api]\nbase_url = \"{}\"\nrecords_code = \"{}\"\nactivation_code = \"{}\"\ntimeout_secs = 5\n",
            base_url, RECORDS_CODE, ACTIVATION_CODE
        );
        if let Some(max) = scale_max {
            content.push_str(&format!("\n[display]\nscale_max = {}\n", max));
        }
        self.with_config(&content)
    }

    /// Write raw `config.toml` content.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Request JSON output for subsequent runs.
    pub fn json(mut self) -> Self {
        self.format = "json".to_string();
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(&self.format);

        cmd.current_dir(self.temp_dir.path());

        for key in OVERRIDE_VARS {
            cmd.env_remove(key);
        }
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a CLI command in this environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("plantbender")
            .map_err(|e| anyhow::anyhow!("Failed to find plantbender binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
