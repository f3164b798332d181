use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::RegisterConfig;
use crate::indexer::build_register;
use crate::models::{RegisterEntry, RegisterSummary};
use crate::register_storage::{read_register, write_register};
use crate::utils::{default_docs_root, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "doc-register")]
#[command(version = "0.1.0")]
#[command(about = "Build a JSONL register summarizing a markdown documentation tree", long_about = None)]
pub struct Cli {
    /// Documentation root (defaults to the parent of the executable's directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Register file (defaults to <root>/register.jsonl)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the register from scratch (default)
    Build,
    /// Show totals for an existing register without rebuilding it
    Stats,
}

impl Cli {
    fn config(&self) -> Result<RegisterConfig> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => default_docs_root()?,
        };
        let config = RegisterConfig::new(root);
        Ok(match &self.output {
            Some(output) => config.with_output(output),
            None => config,
        })
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    match &cli.command {
        Some(Commands::Build) | None => build(&config),
        Some(Commands::Stats) => show_stats(&config),
    }
}

fn build(config: &RegisterConfig) -> Result<()> {
    let entries = build_register(config)?;
    write_register(&config.output, &entries)?;
    info!("Register written to {}", config.output.display());

    let name = config.output.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    println!("Wrote {} entries to {}", entries.len(), name);
    println!("{}", validation_line(&RegisterSummary::from_entries(&entries)));

    Ok(())
}

fn show_stats(config: &RegisterConfig) -> Result<()> {
    let entries = read_register(&config.output)?;

    println!("Register: {}", format_path_with_tilde(&config.output));
    println!("{}", validation_line(&RegisterSummary::from_entries(&entries)));
    for (category, count) in category_counts(&entries) {
        println!("  {}: {}", category, count);
    }

    Ok(())
}

fn validation_line(summary: &RegisterSummary) -> String {
    format!(
        "Validation: {} entries, {} rules, {} banned, {} total tags",
        summary.entries, summary.rules, summary.banned, summary.tags
    )
}

/// Entries per category, in order of first appearance
fn category_counts(entries: &[RegisterEntry]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(category, _)| *category == entry.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.category.as_str(), 1)),
        }
    }
    counts
}
