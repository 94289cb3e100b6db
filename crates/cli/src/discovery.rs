// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules file discovery.
//!
//! Walks from the current directory up to the git root looking for
//! multiregex.toml.

use std::path::{Path, PathBuf};

/// Rules file name looked up in each ancestor directory.
pub const CONFIG_FILE: &str = "multiregex.toml";

/// Find multiregex.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        // Stop at git root
        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

/// Rules file to load: the explicit one if given, else the discovered one.
pub fn rules_path(explicit: Option<&Path>, start_dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(start_dir),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
