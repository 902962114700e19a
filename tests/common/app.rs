//! Test application factory for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use infrared::models::CONFIG_ENV;

/// Scratch directory plus a handle on the compiled `infrared` binary
pub struct TestApp {
    dir: TempDir,
}

impl TestApp {
    /// Create a new test application with an empty scratch directory
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `bytes` to `name` and return its path
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// Read `name` back from the scratch directory
    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("Failed to read output")
    }

    /// Whether `name` exists in the scratch directory
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Run the binary with `args`, from inside the scratch directory
    pub fn run(&self, args: &[&str]) -> TestOutput {
        self.run_with_env(args, &[])
    }

    /// Run the binary with `args` and extra environment variables
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &Path)]) -> TestOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_infrared"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove(CONFIG_ENV);
        for (name, value) in env {
            command.env(name, value);
        }

        let output = command.output().expect("Failed to run infrared binary");
        TestOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Captured result of one binary invocation
#[derive(Debug)]
pub struct TestOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}
