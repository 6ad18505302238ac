//! Shared integration-test harness for running the `argmark` binary against
//! fixture files copied into a temporary directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch directory holding copies of fixture files. Commands run with
/// it as their working directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Creates a workspace holding copies of the named fixtures.
    pub fn with_fixtures(names: &[&str]) -> Self {
        let workspace = Self::new();
        for name in names {
            workspace.copy_fixture(name);
        }
        workspace
    }

    /// Copies a fixture into the workspace under the same name.
    #[allow(clippy::missing_panics_doc)]
    pub fn copy_fixture(&self, name: &str) {
        std::fs::copy(fixture_path(name), self.path(name)).expect("failed to copy fixture");
    }

    /// Writes a file into the workspace.
    #[allow(clippy::missing_panics_doc)]
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.path(name), content).expect("failed to write file");
    }

    /// Reads a file from the workspace.
    #[allow(clippy::missing_panics_doc)]
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Absolute path of a workspace file.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Runs `argmark` with the workspace as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        run_in(self.dir.path(), args)
    }
}

/// Runs `argmark` in `dir` and waits for it to finish.
#[allow(clippy::missing_panics_doc)]
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argmark"))
        .args(args)
        .current_dir(dir)
        .env_remove("ARGMARK_LOG_LEVEL")
        .env("ARGMARK_COLOR", "never")
        .output()
        .expect("failed to run argmark")
}

/// Runs `argmark` in the current directory.
pub fn run(args: &[&str]) -> Output {
    run_in(Path::new("."), args)
}

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Lossy stderr of a finished command.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Lossy stdout of a finished command.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
