//! Shared testing utilities for hairfit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `hairfit` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hairfit").expect("Failed to locate hairfit binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Default record store path inside the work directory.
    pub fn store_path(&self) -> PathBuf {
        self.work_dir.join("hairfit_results.csv")
    }

    /// A full set of valid selection flags (round face, short cut, grade B).
    pub fn selection_args() -> Vec<&'static str> {
        vec![
            "--face",
            "round",
            "--forehead",
            "wide",
            "--cheekbone",
            "average",
            "--jaw",
            "defined",
            "--neck-length",
            "average",
            "--neck-thickness",
            "average",
            "--shoulder",
            "average",
            "--style",
            "short_cut",
        ]
    }
}
