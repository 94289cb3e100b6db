// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-call replacement statistics.

use std::ops::{Add, AddAssign};
use std::time::Duration;

/// Statistics for one [`replace_all`](crate::MultiRegex::replace_all) call.
///
/// Counts are exact. Nothing is accumulated across calls by the engine;
/// callers wanting totals sum these with `+`/`+=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceStats {
    /// Matches reported by the underlying matchers, summed over every pass.
    pub matches: usize,
    /// Substitutions actually written to the output.
    pub replacements: usize,
    /// Substitutions served from the memoization cache (or strategy only).
    pub memoized_matches: usize,
    /// Entries in the memoization cache after the call (or strategy only).
    pub memoized_entries: usize,
    /// Time spent inside the regex engine finding matches.
    pub match_duration: Duration,
}

impl ReplaceStats {
    /// True when the call changed nothing and found nothing.
    pub fn is_empty(&self) -> bool {
        self.matches == 0 && self.replacements == 0 && self.memoized_matches == 0
    }
}

impl Add for ReplaceStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for ReplaceStats {
    fn add_assign(&mut self, rhs: Self) {
        self.matches += rhs.matches;
        self.replacements += rhs.replacements;
        self.memoized_matches += rhs.memoized_matches;
        self.memoized_entries += rhs.memoized_entries;
        self.match_duration += rhs.match_duration;
    }
}

impl std::iter::Sum for ReplaceStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
