// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The multi-pattern replacement engine.
//!
//! A [`MultiRegex`] owns an append-only pattern registry, the matchers its
//! strategy compiled from it, and (or strategy only) a memoization cache.
//! Matchers are compiled lazily on the first call after the registry changes.
//!
//! Not internally synchronized: share a compiled engine across threads by
//! cloning it once per worker.

mod brute_force;
mod compiled;
mod memo;
mod or;
mod splice;
mod submatch;

use std::time::Instant;

use brute_force::BruteForceState;
use or::OrState;
use submatch::SubmatchState;

use crate::error::{Error, Result};
use crate::pattern::EngineOptions;
use crate::registry::{PatternRegistry, Replacement};
use crate::stats::ReplaceStats;
use crate::strategy::Strategy;

/// Simultaneous find-and-replace of many regex patterns over byte text.
#[derive(Debug, Clone, Default)]
pub struct MultiRegex {
    registry: PatternRegistry,
    options: EngineOptions,
    state: StrategyState,
}

/// Compiled state, shaped per strategy.
#[derive(Debug, Clone)]
enum StrategyState {
    Or(OrState),
    Submatch(SubmatchState),
    BruteForce(BruteForceState),
}

impl Default for StrategyState {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl StrategyState {
    fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Or => Self::Or(OrState::default()),
            Strategy::Submatch => Self::Submatch(SubmatchState::default()),
            Strategy::BruteForce => Self::BruteForce(BruteForceState::default()),
        }
    }

    fn strategy(&self) -> Strategy {
        match self {
            Self::Or(_) => Strategy::Or,
            Self::Submatch(_) => Strategy::Submatch,
            Self::BruteForce(_) => Strategy::BruteForce,
        }
    }

    fn is_fresh(&self) -> bool {
        match self {
            Self::Or(state) => state.is_fresh(),
            Self::Submatch(state) => state.is_fresh(),
            Self::BruteForce(state) => state.is_fresh(),
        }
    }

    fn invalidate(&mut self) {
        match self {
            Self::Or(state) => state.invalidate(),
            Self::Submatch(state) => state.invalidate(),
            Self::BruteForce(state) => state.invalidate(),
        }
    }
}

impl MultiRegex {
    /// Engine using the or strategy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::with_options(strategy, EngineOptions::default())
    }

    pub fn with_options(strategy: Strategy, options: EngineOptions) -> Self {
        Self {
            registry: PatternRegistry::new(),
            options,
            state: StrategyState::new(strategy),
        }
    }

    pub fn using_submatch() -> Self {
        Self::with_strategy(Strategy::Submatch)
    }

    pub fn using_brute_force() -> Self {
        Self::with_strategy(Strategy::BruteForce)
    }

    pub fn strategy(&self) -> Strategy {
        self.state.strategy()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Append a (pattern, replacement) pair.
    ///
    /// Never fails: an invalid pattern is reported by the next
    /// [`compile`](Self::compile) or [`replace_all`](Self::replace_all).
    pub fn add_replacement(
        &mut self,
        pattern: impl Into<String>,
        replacement: impl Into<Vec<u8>>,
    ) {
        self.registry.push(pattern, replacement);
        self.state.invalidate();
    }

    /// Turn the memoization cache on or off.
    ///
    /// Only the or strategy memoizes; any other strategy returns
    /// [`Error::MemoizeUnsupported`] whatever `enabled` is. Turning it off
    /// keeps the cached entries for a later re-enable.
    pub fn set_memoize(&mut self, enabled: bool) -> Result<()> {
        match &mut self.state {
            StrategyState::Or(state) => {
                state.memoize = enabled;
                Ok(())
            }
            other => Err(Error::MemoizeUnsupported(other.strategy())),
        }
    }

    pub fn is_memoized(&self) -> bool {
        matches!(&self.state, StrategyState::Or(state) if state.memoize)
    }

    /// Distinct matches in the memoization cache (0 outside the or strategy).
    pub fn memoized_entries(&self) -> usize {
        match &self.state {
            StrategyState::Or(state) => state.memo.len(),
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn patterns(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Registered pair at `index`.
    pub fn get(&self, index: usize) -> Option<&Replacement> {
        self.registry.get(index)
    }

    /// True when the matchers reflect every registered pattern.
    pub fn is_compiled(&self) -> bool {
        self.state.is_fresh()
    }

    /// Compile the matchers if the registry changed since the last compile.
    ///
    /// Cheap when nothing changed. An empty registry has nothing to compile.
    pub fn compile(&mut self) -> Result<()> {
        if self.registry.is_empty() || self.state.is_fresh() {
            return Ok(());
        }

        let start = Instant::now();
        let registry = &self.registry;
        let options = &self.options;
        match &mut self.state {
            StrategyState::Or(state) => state.compile(registry, options)?,
            StrategyState::Submatch(state) => state.compile(registry, options)?,
            StrategyState::BruteForce(state) => state.compile(registry, options)?,
        }
        tracing::debug!(
            strategy = %self.strategy(),
            patterns = self.registry.len(),
            elapsed = ?start.elapsed(),
            "compiled matchers"
        );
        Ok(())
    }

    /// Replace every match of every pattern in `text`.
    ///
    /// Returns a new buffer; text without matches comes back byte-identical
    /// with empty stats.
    pub fn replace_all(&mut self, text: &[u8]) -> Result<(Vec<u8>, ReplaceStats)> {
        if self.registry.is_empty() {
            return Ok((text.to_vec(), ReplaceStats::default()));
        }
        self.compile()?;

        let registry = &self.registry;
        let options = &self.options;
        let (out, stats) = match &mut self.state {
            StrategyState::Or(state) => state.replace_all(registry, options, text)?,
            StrategyState::Submatch(state) => state.replace_all(registry, options, text)?,
            StrategyState::BruteForce(state) => state.replace_all(registry, options, text)?,
        };
        tracing::trace!(
            matches = stats.matches,
            replacements = stats.replacements,
            memoized = stats.memoized_matches,
            "replaced"
        );
        Ok((out, stats))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
