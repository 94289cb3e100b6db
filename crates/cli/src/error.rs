// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the replacement engine.

use crate::strategy::Strategy;

/// Errors raised while configuring or compiling a [`MultiRegex`](crate::MultiRegex).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registered pattern is not valid regex syntax.
    #[error("invalid pattern #{index} `{pattern}`: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Every pattern compiles on its own, but their alternation does not.
    #[error("failed to compile combined matcher over {patterns} patterns: {source}")]
    CombinedPattern {
        patterns: usize,
        #[source]
        source: regex::Error,
    },

    /// Memoization was toggled on an engine that is not using the OR strategy.
    #[error("memoization is only supported by the or strategy, not {0}")]
    MemoizeUnsupported(Strategy),

    /// A strategy tag did not name any known strategy.
    #[error("unknown strategy `{0}` (expected one of: or, submatch, brute-force)")]
    UnknownStrategy(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
