// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submatch strategy: one capturing alternation, the firing group names the
//! pattern.
//!
//! Each pattern is wrapped in its own named group, so user capture groups do
//! not shift the mapping. Groups are inspected in registry order and the
//! first one that participated wins.

use std::ops::Range;
use std::time::Instant;

use regex::bytes::{Captures, Regex};

use super::compiled::Compiled;
use super::splice::Splicer;
use crate::error::Result;
use crate::pattern::{self, EngineOptions};
use crate::registry::PatternRegistry;
use crate::stats::ReplaceStats;

#[derive(Debug, Clone, Default)]
pub(crate) struct SubmatchState {
    matcher: Compiled<SubmatchMatcher>,
}

#[derive(Debug, Clone)]
struct SubmatchMatcher {
    combined: Regex,
    /// Capture group index wrapping each pattern, in registry order.
    groups: Vec<usize>,
}

impl SubmatchMatcher {
    fn compile(registry: &PatternRegistry, options: &EngineOptions) -> Result<Self> {
        let combined = pattern::compile_combined(
            &pattern::capturing_alternation(registry.patterns()),
            registry.patterns(),
            options,
        )?;

        let mut groups = vec![0; registry.len()];
        for (group, name) in combined.capture_names().enumerate() {
            if let Some(index) = name.and_then(pattern::capture_group_index)
                && let Some(slot) = groups.get_mut(index)
            {
                *slot = group;
            }
        }
        Ok(Self { combined, groups })
    }

    /// Span and pattern index of the first wrapper group that participated.
    fn firing(&self, caps: &Captures<'_>) -> Option<(Range<usize>, usize)> {
        self.groups
            .iter()
            .enumerate()
            .find_map(|(index, &group)| caps.get(group).map(|m| (m.range(), index)))
    }
}

impl SubmatchState {
    pub(crate) fn is_fresh(&self) -> bool {
        self.matcher.is_fresh()
    }

    pub(crate) fn invalidate(&mut self) {
        self.matcher.invalidate();
    }

    pub(crate) fn compile(
        &mut self,
        registry: &PatternRegistry,
        options: &EngineOptions,
    ) -> Result<()> {
        self.matcher.get_or_try_compile(|| SubmatchMatcher::compile(registry, options))?;
        Ok(())
    }

    pub(crate) fn replace_all(
        &mut self,
        registry: &PatternRegistry,
        options: &EngineOptions,
        text: &[u8],
    ) -> Result<(Vec<u8>, ReplaceStats)> {
        let matcher = self
            .matcher
            .get_or_try_compile(|| SubmatchMatcher::compile(registry, options))?;

        let start = Instant::now();
        let found: Vec<_> = matcher
            .combined
            .captures_iter(text)
            .map(|caps| matcher.firing(&caps))
            .collect();
        let mut stats = ReplaceStats {
            matches: found.len(),
            match_duration: start.elapsed(),
            ..ReplaceStats::default()
        };

        let mut splicer = Splicer::new(text);
        for (span, index) in found.into_iter().flatten() {
            splicer.replace(span, registry.replacement(index));
            stats.replacements += 1;
        }
        Ok((splicer.finish(), stats))
    }
}

#[cfg(test)]
#[path = "submatch_tests.rs"]
mod tests;
