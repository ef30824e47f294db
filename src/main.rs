// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! File Renamer CLI
//!
//! Renames a file, or every file in a directory, to
//! `YYYY-MM-DD - Description.ext`.

use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

use file_renamer::apply::{apply_plan, FsRename};
use file_renamer::planner::{collect_files, Planner};
use file_renamer::{RenameConfig, RenamePlanEntry, RenameStatus, Result, Separator};

/// Rename files based on their modification date and contents
#[derive(Parser, Debug)]
#[command(name = "file-renamer")]
#[command(version)]
#[command(about = "Rename files to 'YYYY-MM-DD - Description.ext' using their contents", long_about = None)]
struct Cli {
    /// File or directory to rename
    path: PathBuf,

    /// Show what would be renamed without making changes
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long)]
    quiet: bool,

    /// Separator used between words of the description
    #[arg(long, value_parser = ["dash", "underscore"])]
    separator: Option<String>,

    /// Include hidden files (dot files) in processing
    #[arg(long)]
    include_hidden: bool,

    /// Re-process files that are already renamed
    #[arg(long)]
    force_rename: bool,

    /// Optional configuration file (JSON format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, default_value = "text", value_parser = ["text", "json", "jsonl"])]
    format: String,
}

impl Cli {
    /// Flags override values from the configuration file
    fn into_config(self) -> Result<(RenameConfig, PathBuf, String)> {
        let mut config = match &self.config {
            Some(path) => RenameConfig::load(path)?,
            None => RenameConfig::default(),
        };

        if let Some(separator) = &self.separator {
            config.separator = separator.parse::<Separator>()?;
        }
        config.dry_run |= self.dry_run;
        config.include_hidden |= self.include_hidden;
        config.force_rename |= self.force_rename;
        config.validate()?;

        Ok((config, self.path, self.format))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let (config, path, format) = cli.into_config()?;

    if config.dry_run {
        warn!("DRY RUN MODE - files will not be renamed");
    }

    let files = collect_files(&path)?;
    let plan = Planner::new(&config).plan(&files);
    let results = apply_plan(plan, &FsRename, config.dry_run);

    print_results(&results, &format)?;
    Ok(())
}

fn print_results(results: &[RenamePlanEntry], format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(results)?),
        "jsonl" => {
            for entry in results {
                println!("{}", serde_json::to_string(entry)?);
            }
        }
        _ => {
            for entry in results {
                println!("{}", describe_entry(entry));
            }
            if !results.is_empty() {
                let changed = results
                    .iter()
                    .filter(|e| matches!(e.status, RenameStatus::Renamed | RenameStatus::WouldRename))
                    .count();
                println!("{}", summary_line(results.len(), changed));
            }
        }
    }
    Ok(())
}

fn summary_line(total: usize, changed: usize) -> String {
    format!("Processed {} files, {} renamed or pending", total, changed)
}

/// One line of text output per entry
fn describe_entry(entry: &RenamePlanEntry) -> String {
    match entry.status {
        RenameStatus::Renamed | RenameStatus::WouldRename => format!(
            "{}: {} -> {}",
            entry.status,
            entry.original_name,
            entry.final_name.as_deref().unwrap_or_default()
        ),
        RenameStatus::Skipped | RenameStatus::Error => format!(
            "{}: {} ({})",
            entry.status,
            entry.original_name,
            entry.reason.as_deref().unwrap_or("no reason given")
        ),
    }
}
