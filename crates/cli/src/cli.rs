// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::Rule;
use crate::strategy::Strategy;

/// Replace many regex patterns at once, in files or on stdin
#[derive(Debug, Parser)]
#[command(name = "multiregex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Files to rewrite (reads stdin when none are given)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Use specific rules file
    #[arg(short = 'r', long = "rules", env = "MULTIREGEX_RULES")]
    pub rules: Option<PathBuf>,

    /// Add a rule after those from the rules file
    #[arg(
        short = 'e',
        long = "replace",
        num_args = 2,
        value_names = ["PATTERN", "REPLACEMENT"],
        action = ArgAction::Append,
        allow_hyphen_values = true,
    )]
    pub replace: Vec<String>,

    /// Matching strategy: or, submatch, brute-force
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<Strategy>,

    /// Cache resolved matches between inputs (or strategy only)
    #[arg(long)]
    pub memoize: bool,

    /// Rewrite files in place instead of printing them
    #[arg(short, long)]
    pub in_place: bool,

    /// Print replacement statistics to stderr
    #[arg(long, value_name = "FORMAT")]
    pub stats: Option<StatsFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Rules given inline with `-e PATTERN REPLACEMENT`, in argument order.
    pub fn inline_rules(&self) -> Vec<Rule> {
        self.replace
            .chunks_exact(2)
            .map(|pair| Rule {
                pattern: pair[0].clone(),
                replacement: pair[1].clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
