// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching strategy selection.
//!
//! - `or`: one combined alternation finds spans, per-pattern matchers pick the winner
//! - `submatch`: one capturing alternation, the firing group picks the winner
//! - `brute-force`: one full pass per pattern, in registry order (cascading)

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// The algorithm a [`MultiRegex`](crate::MultiRegex) uses. Fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Strategy {
    #[default]
    Or,
    Submatch,
    BruteForce,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Or, Strategy::Submatch, Strategy::BruteForce];

    /// Canonical tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Or => "or",
            Strategy::Submatch => "submatch",
            Strategy::BruteForce => "brute-force",
        }
    }

    /// Whether this strategy can serve matches from the memoization cache.
    pub fn supports_memoize(self) -> bool {
        matches!(self, Strategy::Or)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "or" => Ok(Strategy::Or),
            "submatch" => Ok(Strategy::Submatch),
            "brute-force" | "bruteforce" => Ok(Strategy::BruteForce),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
