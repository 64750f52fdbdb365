//! ByzCast log auditor binary.
//!
//! Post-processes the per-replica logs of a multi-group broadcast run:
//! pairwise order agreement and cycle search (`order`), client latency
//! summaries (`latency`), and the batch cache lifecycle check
//! (`cache-check`).

mod cli;

use std::io::Write;

use anyhow::Context as _;
use ordercheck::AnalysisConfig;
use ordercheck::cachecheck::{self, BatchPhrases};
use ordercheck::stats;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{CacheCheckCmd, LatencyCmd, OrderCmd, Subcommands, TopLevel};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ordercheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: TopLevel = argh::from_env();
    match args.nested {
        Subcommands::Order(cmd) => run_order(cmd),
        Subcommands::Latency(cmd) => run_latency(cmd),
        Subcommands::CacheCheck(cmd) => run_cache_check(cmd),
    }
}

fn run_order(cmd: OrderCmd) -> anyhow::Result<()> {
    let mut config = AnalysisConfig::default();
    if let Some(label) = cmd.milestone_label {
        config.milestone_label = label;
    }
    if let Some(phrase) = cmd.milestone_phrase {
        config.milestone_phrase = phrase;
    }
    if let Some(pattern) = cmd.request_id_pattern {
        config.request_id_pattern = pattern;
    }
    if let Some(suffix) = cmd.log_suffix {
        config.log_suffix = suffix;
    }
    if let Some(pattern) = cmd.group_pattern {
        config.group_id_pattern = pattern;
    }

    let report = ordercheck::run_analysis(&cmd.base_path, &config)
        .with_context(|| format!("failed to audit {}", cmd.base_path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cmd.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report.render(&mut out)?;
    }
    out.flush()?;

    if cmd.strict && report.violations() > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn run_latency(cmd: LatencyCmd) -> anyhow::Result<()> {
    if cmd.files.is_empty() {
        anyhow::bail!("no stats files given");
    }
    let summary = stats::summarize_latency(&cmd.files)?;
    match summary.average() {
        Some(average) => {
            println!("Average Latency: {average:.2}");
            println!("Total Entries: {}", summary.entries);
        }
        None => println!("No valid entries found."),
    }
    Ok(())
}

fn run_cache_check(cmd: CacheCheckCmd) -> anyhow::Result<()> {
    if cmd.files.is_empty() {
        anyhow::bail!("no log files given");
    }
    let phrases = BatchPhrases::default();
    for file in &cmd.files {
        let verdict = cachecheck::check_batch_file(file, &cmd.request_id, &phrases)?;
        if !verdict.is_clean() {
            println!("File {} does not meet the criteria.", file.display());
            std::process::exit(1);
        }
    }
    println!("All files meet the criteria.");
    Ok(())
}
