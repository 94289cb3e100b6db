//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the multiregex crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

use crate::{MultiRegex, ReplaceStats, Strategy};

/// Builds an engine with the given strategy and (pattern, replacement) pairs.
pub fn engine(strategy: Strategy, pairs: &[(&str, &str)]) -> MultiRegex {
    let mut engine = MultiRegex::with_strategy(strategy);
    for (pattern, replacement) in pairs {
        engine.add_replacement(*pattern, *replacement);
    }
    engine
}

/// Builds a memoizing or-strategy engine.
pub fn memo_engine(pairs: &[(&str, &str)]) -> MultiRegex {
    let mut engine = engine(Strategy::Or, pairs);
    engine.set_memoize(true).unwrap();
    engine
}

/// Runs `replace_all` on UTF-8 text and returns the output as a String.
pub fn replace(engine: &mut MultiRegex, text: &str) -> (String, ReplaceStats) {
    let (out, stats) = engine.replace_all(text.as_bytes()).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

/// Creates a temp directory with a minimal multiregex.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("[[rule]]\npattern = \"foo\"\nreplacement = \"bar\"\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("multiregex.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}
