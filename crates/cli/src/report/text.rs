// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format stats output.

use std::fmt::Write;

use crate::stats::ReplaceStats;

use super::{StatsEntry, StatsFormatter, total};

/// Text format stats formatter.
///
/// One line per input, plus a `total` line when there is more than one.
pub struct TextFormatter;

impl StatsFormatter for TextFormatter {
    fn format(&self, entries: &[StatsEntry]) -> anyhow::Result<String> {
        let mut out = String::new();
        for entry in entries {
            write_line(&mut out, &entry.name, &entry.stats, true)?;
        }
        if entries.len() > 1 {
            write_line(&mut out, "total", &total(entries), false)?;
        }
        Ok(out)
    }
}

fn write_line(
    out: &mut String,
    name: &str,
    stats: &ReplaceStats,
    with_cache: bool,
) -> std::fmt::Result {
    write!(
        out,
        "{name}: {} matches, {} replacements",
        stats.matches, stats.replacements
    )?;
    if stats.memoized_matches > 0 || (with_cache && stats.memoized_entries > 0) {
        write!(out, ", {} memoized", stats.memoized_matches)?;
        if with_cache {
            write!(out, " ({} cached)", stats.memoized_entries)?;
        }
    }
    writeln!(out, " in {:.3}ms", stats.match_duration.as_secs_f64() * 1000.0)
}
