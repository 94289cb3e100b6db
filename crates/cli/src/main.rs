// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use multiregex::cli::{Cli, StatsFormat};
use multiregex::config::{self, RulesConfig};
use multiregex::discovery;
use multiregex::report::{self, StatsEntry};
use multiregex::runner::Runner;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `MULTIREGEX_LOG` (default: warn, or debug
/// with `--verbose`).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("MULTIREGEX_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cwd = env::current_dir().context("failed to read current directory")?;
    let config = match discovery::rules_path(cli.rules.as_deref(), &cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading rules");
            config::load(&path)?
        }
        None => RulesConfig::default(),
    };
    let config = config.with_overrides(cli.strategy, cli.memoize, cli.inline_rules());
    if config.rules.is_empty() {
        tracing::warn!("no rules configured, input is passed through unchanged");
    }

    let engine = config.build_engine().context("failed to compile rules")?;
    let mut runner = Runner::new(engine, cli.in_place);

    if cli.paths.is_empty() {
        if cli.in_place {
            anyhow::bail!("--in-place requires at least one PATH");
        }
        let (output, stats) = runner.run_reader(io::stdin().lock())?;
        io::stdout()
            .lock()
            .write_all(&output)
            .context("failed to write stdout")?;
        print_stats(cli.stats, &[StatsEntry::new("<stdin>", stats)])?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut entries = Vec::with_capacity(cli.paths.len());
    let mut failed = false;
    let mut stdout = io::stdout().lock();
    for outcome in runner.run(&cli.paths) {
        match outcome {
            Ok(outcome) => {
                if !cli.in_place {
                    stdout.write_all(&outcome.output).context("failed to write stdout")?;
                }
                entries.push(StatsEntry::new(outcome.path.display().to_string(), outcome.stats));
            }
            Err(err) => {
                eprintln!("Error: {err:#}");
                failed = true;
            }
        }
    }
    stdout.flush().context("failed to write stdout")?;
    print_stats(cli.stats, &entries)?;

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn print_stats(format: Option<StatsFormat>, entries: &[StatsEntry]) -> anyhow::Result<()> {
    let Some(format) = format else {
        return Ok(());
    };
    let out = report::format_stats(format, entries)?;
    let mut stderr = io::stderr().lock();
    stderr.write_all(out.as_bytes())?;
    if !out.ends_with('\n') {
        writeln!(stderr)?;
    }
    Ok(())
}
