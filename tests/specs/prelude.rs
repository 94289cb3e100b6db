//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing multiregex CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the multiregex binary.
///
/// Environment overrides from the caller's shell are cleared.
pub fn multiregex_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("multiregex"));
    cmd.env_remove("MULTIREGEX_RULES").env_remove("MULTIREGEX_LOG");
    cmd
}

/// Temporary project directory, marked as a git root so rules discovery
/// never escapes it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with a multiregex.toml at its root.
    pub fn with_rules(rules: &str) -> Self {
        let project = Self::empty();
        project.file("multiregex.toml", rules);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.join(relative)).unwrap()
    }

    /// Command running in the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = multiregex_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
