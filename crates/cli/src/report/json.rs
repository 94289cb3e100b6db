// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format stats output.

use serde_json::{Value, json};

use crate::stats::ReplaceStats;

use super::{StatsEntry, StatsFormatter, total};

/// JSON format stats formatter.
pub struct JsonFormatter;

impl StatsFormatter for JsonFormatter {
    fn format(&self, entries: &[StatsEntry]) -> anyhow::Result<String> {
        let files: Vec<Value> = entries
            .iter()
            .map(|entry| {
                let mut value = stats_json(&entry.stats);
                if let Value::Object(map) = &mut value {
                    map.insert("path".to_string(), json!(entry.name));
                }
                value
            })
            .collect();

        let output = json!({
            "files": files,
            "total": stats_json(&total(entries)),
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn stats_json(stats: &ReplaceStats) -> Value {
    json!({
        "matches": stats.matches,
        "replacements": stats.replacements,
        "memoized_matches": stats.memoized_matches,
        "memoized_entries": stats.memoized_entries,
        "match_duration_us": stats.match_duration.as_micros() as u64,
    })
}
