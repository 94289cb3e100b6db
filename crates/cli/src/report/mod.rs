// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replacement statistics output.
//!
//! Formats per-input stats and their total in text or JSON.

mod json;
mod text;

use crate::cli::StatsFormat;
use crate::stats::ReplaceStats;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Stats for one input, labelled by path or `<stdin>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsEntry {
    pub name: String,
    pub stats: ReplaceStats,
}

impl StatsEntry {
    pub fn new(name: impl Into<String>, stats: ReplaceStats) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

/// Trait for formatting replacement stats into various output formats.
pub trait StatsFormatter {
    /// Format every entry followed by the total.
    fn format(&self, entries: &[StatsEntry]) -> anyhow::Result<String>;
}

/// Format stats based on output format, returning the output string.
pub fn format_stats(format: StatsFormat, entries: &[StatsEntry]) -> anyhow::Result<String> {
    let formatter: Box<dyn StatsFormatter> = match format {
        StatsFormat::Text => Box::new(TextFormatter),
        StatsFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(entries)
}

/// Sum of every entry's stats.
pub fn total(entries: &[StatsEntry]) -> ReplaceStats {
    entries.iter().map(|entry| entry.stats).sum()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
