// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Brute-force strategy: one full replace pass per pattern, in registry order.
//!
//! Pattern `i` runs over the output of patterns `0..i`, so a later pattern
//! can match text an earlier one wrote (cascading substitution). The or and
//! submatch strategies never do this.

use std::borrow::Cow;
use std::time::Instant;

use regex::bytes::Regex;

use super::compiled::Compiled;
use super::splice::Splicer;
use crate::error::Result;
use crate::pattern::{self, EngineOptions};
use crate::registry::PatternRegistry;
use crate::stats::ReplaceStats;

#[derive(Debug, Clone, Default)]
pub(crate) struct BruteForceState {
    matchers: Compiled<Vec<Regex>>,
}

impl BruteForceState {
    pub(crate) fn is_fresh(&self) -> bool {
        self.matchers.is_fresh()
    }

    pub(crate) fn invalidate(&mut self) {
        self.matchers.invalidate();
    }

    pub(crate) fn compile(
        &mut self,
        registry: &PatternRegistry,
        options: &EngineOptions,
    ) -> Result<()> {
        self.matchers
            .get_or_try_compile(|| pattern::compile_each(registry.patterns(), options))?;
        Ok(())
    }

    pub(crate) fn replace_all(
        &mut self,
        registry: &PatternRegistry,
        options: &EngineOptions,
        text: &[u8],
    ) -> Result<(Vec<u8>, ReplaceStats)> {
        let matchers = self
            .matchers
            .get_or_try_compile(|| pattern::compile_each(registry.patterns(), options))?;

        let mut stats = ReplaceStats::default();
        let mut current = Cow::Borrowed(text);
        for (re, entry) in matchers.iter().zip(registry) {
            let start = Instant::now();
            let spans: Vec<_> = re.find_iter(&current).map(|m| m.range()).collect();
            stats.match_duration += start.elapsed();
            stats.matches += spans.len();

            if spans.is_empty() {
                continue;
            }
            stats.replacements += spans.len();

            let mut splicer = Splicer::new(&current);
            for span in spans {
                splicer.replace(span, &entry.replacement);
            }
            let next = splicer.finish();
            current = Cow::Owned(next);
        }
        Ok((current.into_owned(), stats))
    }
}

#[cfg(test)]
#[path = "brute_force_tests.rs"]
mod tests;
