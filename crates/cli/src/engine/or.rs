// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Or strategy: one combined alternation finds spans, then the per-pattern
//! matchers decide which replacement each span gets.
//!
//! The combined matcher only discovers spans. The winner for a span is the
//! lowest-index pattern whose own matcher accepts the matched bytes, so
//! registry order decides ties regardless of which branch the combined
//! matcher took.
//!
//! With memoization on, a first pass over the memoized-match finder replaces
//! already-resolved matches, and its output feeds the regular pass, which adds
//! new resolutions to the cache. The regular pass may therefore re-match text
//! produced by the first pass.

use std::borrow::Cow;
use std::time::Instant;

use regex::bytes::Regex;

use super::compiled::Compiled;
use super::memo::MemoCache;
use super::splice::Splicer;
use crate::error::Result;
use crate::pattern::{self, EngineOptions};
use crate::registry::PatternRegistry;
use crate::stats::ReplaceStats;

#[derive(Debug, Clone, Default)]
pub(crate) struct OrState {
    matchers: Compiled<OrMatchers>,
    pub(crate) memoize: bool,
    pub(crate) memo: MemoCache,
}

#[derive(Debug, Clone)]
struct OrMatchers {
    combined: Regex,
    each: Vec<Regex>,
}

/// How a span's replacement was chosen.
#[derive(Debug, Clone, Copy)]
enum Resolved {
    Memoized(usize),
    Pattern(usize),
}

impl OrMatchers {
    fn compile(registry: &PatternRegistry, options: &EngineOptions) -> Result<Self> {
        let each = pattern::compile_each(registry.patterns(), options)?;
        let combined = pattern::compile_combined(
            &pattern::alternation(registry.patterns()),
            registry.patterns(),
            options,
        )?;
        Ok(Self { combined, each })
    }

    /// Lowest-index pattern whose matcher accepts `matched`.
    fn resolve(&self, matched: &[u8]) -> Option<usize> {
        self.each.iter().position(|re| re.is_match(matched))
    }
}

impl OrState {
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
        self.matchers.get_or_try_compile(|| OrMatchers::compile(registry, options))?;
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
            .get_or_try_compile(|| OrMatchers::compile(registry, options))?;

        if !self.memoize {
            let (out, mut stats) = replace_pass(text, &matchers.combined, registry, |m| {
                matchers.resolve(m).map(Resolved::Pattern)
            });
            stats.memoized_entries = self.memo.len();
            return Ok((out, stats));
        }

        let memo = &mut self.memo;
        memo.refresh(options);

        // Pass one: only already-resolved matches.
        let (input, mut stats) = match memo.finder() {
            Some(finder) => {
                let (out, stats) =
                    replace_pass(text, finder, registry, |m| memo.get(m).map(Resolved::Memoized));
                (Cow::Owned(out), stats)
            }
            None => (Cow::Borrowed(text), ReplaceStats::default()),
        };

        // Pass two: everything, caching each new resolution.
        let (out, second) = replace_pass(&input, &matchers.combined, registry, |m| {
            if let Some(index) = memo.get(m) {
                return Some(Resolved::Memoized(index));
            }
            let index = matchers.resolve(m)?;
            memo.insert(m, index);
            Some(Resolved::Pattern(index))
        });

        stats += second;
        stats.memoized_entries = memo.len();
        Ok((out, stats))
    }
}

/// Run `finder` once over `text` and substitute every span `resolve` accepts.
///
/// Spans nobody resolves are left verbatim.
fn replace_pass(
    text: &[u8],
    finder: &Regex,
    registry: &PatternRegistry,
    mut resolve: impl FnMut(&[u8]) -> Option<Resolved>,
) -> (Vec<u8>, ReplaceStats) {
    let start = Instant::now();
    let spans: Vec<_> = finder.find_iter(text).map(|m| m.range()).collect();
    let mut stats = ReplaceStats {
        matches: spans.len(),
        match_duration: start.elapsed(),
        ..ReplaceStats::default()
    };

    let mut splicer = Splicer::new(text);
    for span in spans {
        let index = match resolve(&text[span.clone()]) {
            Some(Resolved::Memoized(index)) => {
                stats.memoized_matches += 1;
                index
            }
            Some(Resolved::Pattern(index)) => index,
            None => {
                tracing::debug!(?span, "no pattern accepts combined match; leaving it verbatim");
                continue;
            }
        };
        splicer.replace(span, registry.replacement(index));
        stats.replacements += 1;
    }
    (splicer.finish(), stats)
}

#[cfg(test)]
#[path = "or_tests.rs"]
mod tests;
