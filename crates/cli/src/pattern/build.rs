// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiling registry patterns into `regex::bytes::Regex` matchers.

use regex::bytes::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Prefix of the named group wrapping each pattern in a capturing alternation.
const GROUP_PREFIX: &str = "__multiregex_";

/// Limits applied to every matcher an engine builds.
///
/// `None` keeps the `regex` crate default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineOptions {
    /// Approximate upper bound, in bytes, on a compiled program.
    #[serde(default)]
    pub size_limit: Option<usize>,

    /// Approximate upper bound, in bytes, on the lazy DFA cache.
    #[serde(default)]
    pub dfa_size_limit: Option<usize>,
}

impl EngineOptions {
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub fn with_dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = Some(bytes);
        self
    }

    /// Compile one regex with these limits.
    pub fn build(&self, pattern: &str) -> std::result::Result<Regex, regex::Error> {
        let mut builder = RegexBuilder::new(pattern);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = self.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        builder.build()
    }
}

/// Ends every wrapped branch.
///
/// A pattern in verbose mode may end inside a `#` comment, which would
/// swallow the closing parenthesis. The newline ends any such comment, and
/// the flag keeps it from being matched literally when verbose mode is off.
/// Either way it only applies up to the end of the wrapping group.
const BRANCH_END: &str = "(?x)\n";

/// Join patterns as `(?:p0)|(?:p1)|...`.
///
/// Each branch is grouped so inline flags and top-level alternations stay
/// inside their own pattern.
pub fn alternation<'a>(patterns: impl IntoIterator<Item = &'a str>) -> String {
    join_branches(patterns, |_, p| format!("(?:{p}{BRANCH_END})"))
}

/// Join patterns as `(?P<g0>p0)|(?P<g1>p1)|...`, one named group per pattern.
///
/// Patterns keep their own capture groups, so group numbers alone cannot
/// identify a pattern; the names from [`capture_group_name`] can.
pub fn capturing_alternation<'a>(patterns: impl IntoIterator<Item = &'a str>) -> String {
    join_branches(patterns, |i, p| format!("(?P<{}>{p}{BRANCH_END})", capture_group_name(i)))
}

/// Name of the group wrapping pattern `index` in [`capturing_alternation`].
pub fn capture_group_name(index: usize) -> String {
    format!("{GROUP_PREFIX}{index}")
}

/// Pattern index encoded in a group name from [`capture_group_name`].
pub fn capture_group_index(name: &str) -> Option<usize> {
    name.strip_prefix(GROUP_PREFIX)?.parse().ok()
}

/// Compile each pattern on its own, in order.
pub fn compile_each<'a>(
    patterns: impl IntoIterator<Item = &'a str>,
    options: &EngineOptions,
) -> Result<Vec<Regex>> {
    patterns
        .into_iter()
        .enumerate()
        .map(|(index, pattern)| {
            options.build(pattern).map_err(|source| Error::InvalidPattern {
                index,
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}

/// Compile a combined matcher built from `patterns`.
///
/// On failure the patterns are compiled one by one so the error names the
/// first offending pattern. If they all compile alone, the combination itself
/// is at fault (usually the size limit).
pub fn compile_combined<'a>(
    source: &str,
    patterns: impl IntoIterator<Item = &'a str> + Clone,
    options: &EngineOptions,
) -> Result<Regex> {
    options.build(source).or_else(|err| {
        let count = patterns.clone().into_iter().count();
        compile_each(patterns, options)?;
        Err(Error::CombinedPattern {
            patterns: count,
            source: err,
        })
    })
}

fn join_branches<'a>(
    patterns: impl IntoIterator<Item = &'a str>,
    wrap: impl Fn(usize, &str) -> String,
) -> String {
    patterns
        .into_iter()
        .enumerate()
        .map(|(i, p)| wrap(i, p))
        .collect::<Vec<_>>()
        .join("|")
}
