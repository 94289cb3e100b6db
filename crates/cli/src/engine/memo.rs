// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Memoization cache for the or strategy.
//!
//! Maps the exact bytes of a resolved match to the index of the pattern that
//! won it, so repeat occurrences skip per-pattern disambiguation. Entries are
//! never evicted. A finder regex over all cached keys lets the or strategy
//! replace known matches in a cheap first pass.

use std::collections::HashMap;

use regex::bytes::Regex;

use super::compiled::Compiled;
use crate::pattern::{self, EngineOptions};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoCache {
    entries: HashMap<Vec<u8>, usize>,
    finder: Compiled<Regex>,
}

impl MemoCache {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pattern index previously resolved for `matched`.
    pub(crate) fn get(&self, matched: &[u8]) -> Option<usize> {
        self.entries.get(matched).copied()
    }

    /// Record that `matched` resolves to pattern `index`.
    ///
    /// Empty matches are not cached: an empty key would make the finder match
    /// at every offset.
    pub(crate) fn insert(&mut self, matched: &[u8], index: usize) {
        if matched.is_empty() {
            return;
        }
        if self.entries.insert(matched.to_vec(), index).is_none() {
            self.finder.invalidate();
        }
    }

    /// Rebuild the finder if entries were added since it was last built.
    ///
    /// A finder that fails to build (e.g. over the size limit) is logged and
    /// left Stale; callers then fall back to full resolution.
    pub(crate) fn refresh(&mut self, options: &EngineOptions) {
        if self.is_empty() || self.finder.is_fresh() {
            return;
        }

        let entries = &self.entries;
        let built = self.finder.get_or_try_compile(|| {
            // Longest keys first, so a longer known match at some offset wins
            // over a cached prefix of it. Ties break on bytes for determinism.
            let mut keys: Vec<&[u8]> = entries.keys().map(Vec::as_slice).collect();
            keys.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            options.build(&pattern::literal_alternation(keys))
        });

        match built {
            Ok(_) => tracing::debug!(entries = self.entries.len(), "rebuilt memoized-match finder"),
            Err(err) => tracing::warn!(
                entries = self.entries.len(),
                error = %err,
                "memoized-match finder unavailable; resolving every match in full"
            ),
        }
    }

    /// Finder over the cached keys, if one is built and current.
    pub(crate) fn finder(&self) -> Option<&Regex> {
        self.finder.get()
    }
}

#[cfg(test)]
#[path = "memo_tests.rs"]
mod tests;
