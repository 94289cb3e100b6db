// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, append-only list of (pattern, replacement) pairs.
//!
//! The index of a pair is its identity for the lifetime of the registry, and
//! lower indices win when several patterns could claim the same match.

/// One registered pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Regex source, in `regex` crate syntax.
    pub pattern: String,
    /// Literal bytes substituted for each match. No capture expansion.
    pub replacement: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    entries: Vec<Replacement>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair and return its index.
    pub fn push(&mut self, pattern: impl Into<String>, replacement: impl Into<Vec<u8>>) -> usize {
        self.entries.push(Replacement {
            pattern: pattern.into(),
            replacement: replacement.into(),
        });
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Replacement> {
        self.entries.get(index)
    }

    /// Replacement literal for `index`, or empty if out of range.
    pub fn replacement(&self, index: usize) -> &[u8] {
        self.entries
            .get(index)
            .map(|e| e.replacement.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Replacement> {
        self.entries.iter()
    }

    /// Pattern sources in registry order.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.entries.iter().map(|e| e.pattern.as_str())
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = &'a Replacement;
    type IntoIter = std::slice::Iter<'a, Replacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
