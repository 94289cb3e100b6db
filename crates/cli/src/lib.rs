// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simultaneous multi-pattern find-and-replace over byte text.
//!
//! Register (pattern, replacement) pairs on a [`MultiRegex`], then call
//! [`MultiRegex::replace_all`]. Every leftmost match of every pattern is
//! replaced by its literal; unmatched bytes are copied untouched.
//!
//! ```
//! use multiregex::MultiRegex;
//!
//! let mut re = MultiRegex::new();
//! re.add_replacement("foo", "bar");
//! re.add_replacement("baz", "qux");
//!
//! let (out, stats) = re.replace_all(b"foo bar baz")?;
//! assert_eq!(out, b"bar bar qux");
//! assert_eq!(stats.replacements, 2);
//! # Ok::<(), multiregex::Error>(())
//! ```
//!
//! See [`Strategy`] for the three matching algorithms and how they differ.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod file_reader;
pub mod pattern;
pub mod registry;
pub mod report;
pub mod runner;
pub mod stats;
pub mod strategy;

pub use engine::MultiRegex;
pub use error::{Error, Result};
pub use pattern::EngineOptions;
pub use registry::{PatternRegistry, Replacement};
pub use stats::ReplaceStats;
pub use strategy::Strategy;

#[cfg(test)]
pub mod test_utils;
