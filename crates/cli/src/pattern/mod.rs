// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex construction for the replacement engine.
//!
//! Everything here delegates matching to the `regex` crate:
//! - Single patterns and non-capturing alternations for the or/brute-force strategies
//! - Named-group alternations for the submatch strategy
//! - Escaped literal alternations for memoized matches

pub mod build;
pub mod escape;

pub use build::{
    EngineOptions, alternation, capture_group_index, capture_group_name, capturing_alternation,
    compile_combined, compile_each,
};
pub use escape::{escape_bytes, literal_alternation};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
