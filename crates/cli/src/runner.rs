// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel file rewriting.
//!
//! Files are processed in parallel using rayon. Each worker owns a clone of
//! the compiled engine, so memoization caches are per worker. A failure on
//! one file doesn't prevent the others from being processed.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::engine::MultiRegex;
use crate::file_reader::FileContent;
use crate::stats::ReplaceStats;

/// Result of rewriting one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Rewritten content.
    pub output: Vec<u8>,
    pub stats: ReplaceStats,
    /// True when the output differs from the input.
    pub changed: bool,
}

/// Runs a compiled engine over inputs.
pub struct Runner {
    engine: MultiRegex,
    in_place: bool,
}

impl Runner {
    pub fn new(engine: MultiRegex, in_place: bool) -> Self {
        Self { engine, in_place }
    }

    /// Rewrite every file, returning outcomes in argument order.
    ///
    /// In-place mode writes back only files whose content changed.
    pub fn run(&self, paths: &[PathBuf]) -> Vec<anyhow::Result<FileOutcome>> {
        paths
            .par_iter()
            .map_init(
                || self.engine.clone(),
                |engine, path| rewrite_file(engine, path, self.in_place),
            )
            .collect()
    }

    /// Rewrite everything readable from `reader`.
    pub fn run_reader(
        &mut self,
        mut reader: impl Read,
    ) -> anyhow::Result<(Vec<u8>, ReplaceStats)> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input).context("failed to read stdin")?;
        Ok(self.engine.replace_all(&input)?)
    }
}

fn rewrite_file(
    engine: &mut MultiRegex,
    path: &Path,
    in_place: bool,
) -> anyhow::Result<FileOutcome> {
    let content = FileContent::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (output, stats) = engine.replace_all(content.as_bytes())?;
    let changed = output != content.as_bytes();
    // Release any mapping before writing to the same file.
    drop(content);

    if in_place && changed {
        fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            replacements = stats.replacements,
            "rewrote file"
        );
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        output,
        stats,
        changed,
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
