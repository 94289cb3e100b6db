// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules file loading.
//!
//! A `multiregex.toml` names the strategy, the memoization switch, regex
//! size limits and an ordered list of `[[rule]]` tables:
//!
//! ```toml
//! strategy = "or"
//! memoize = true
//!
//! [limits]
//! size_limit = 20971520
//!
//! [[rule]]
//! pattern = "colou?r"
//! replacement = "hue"
//! ```
//!
//! Unknown keys are rejected so typos do not silently drop rules.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::engine::MultiRegex;
use crate::error::Result;
use crate::pattern::EngineOptions;
use crate::strategy::Strategy;

/// Parsed rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Matching strategy (default: or).
    #[serde(default)]
    pub strategy: Option<Strategy>,

    /// Enable the memoization cache (or strategy only).
    #[serde(default)]
    pub memoize: bool,

    /// Compiled regex size limits.
    #[serde(default)]
    pub limits: EngineOptions,

    /// Rules in registration order.
    #[serde(default, rename = "rule")]
    pub rules: Vec<Rule>,
}

/// One (pattern, replacement) pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Load and parse a rules file.
pub fn load(path: &Path) -> anyhow::Result<RulesConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;
    parse(&content, path)
}

/// Parse rules file content; `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> anyhow::Result<RulesConfig> {
    toml::from_str(content).with_context(|| format!("failed to parse {}", path.display()))
}

impl RulesConfig {
    pub fn strategy(&self) -> Strategy {
        self.strategy.unwrap_or_default()
    }

    /// Apply command-line settings on top of the file.
    ///
    /// A given strategy replaces the file's, `memoize` can only switch the
    /// cache on, and extra rules are appended after the file's rules.
    pub fn with_overrides(
        mut self,
        strategy: Option<Strategy>,
        memoize: bool,
        extra: impl IntoIterator<Item = Rule>,
    ) -> Self {
        if strategy.is_some() {
            self.strategy = strategy;
        }
        self.memoize |= memoize;
        self.rules.extend(extra);
        self
    }

    /// Build and compile an engine holding every rule.
    ///
    /// Compiling here surfaces invalid patterns before any input is read.
    pub fn build_engine(&self) -> Result<MultiRegex> {
        let mut engine = MultiRegex::with_options(self.strategy(), self.limits);
        for rule in &self.rules {
            engine.add_replacement(rule.pattern.as_str(), rule.replacement.as_str());
        }
        if self.memoize {
            engine.set_memoize(true)?;
        }
        engine.compile()?;
        Ok(engine)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
