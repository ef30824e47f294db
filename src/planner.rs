// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Batch planning: turns a list of files into rename plan entries
//!
//! Planning never touches the filesystem beyond reading. The same plan is
//! produced whether or not the run is a dry run; only [`crate::apply`]
//! differs.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::extractors::ExtractorRegistry;
use crate::naming::{choose, resolve_batch, BatchName, NameNormalizer, Origin};
use crate::{RenameConfig, RenamerError, Result};

/// Names produced by this tool start with `YYYY-MM-DD - `
static DATE_PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} - ").expect("date prefix pattern is valid"));

/// Delimiter between the date and the description
pub const DATE_DELIMITER: &str = " - ";

/// Final state of a plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenameStatus {
    Renamed,
    Skipped,
    WouldRename,
    Error,
}

impl fmt::Display for RenameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RenameStatus::Renamed => "Renamed",
            RenameStatus::Skipped => "Skipped",
            RenameStatus::WouldRename => "Would rename",
            RenameStatus::Error => "Error",
        };
        f.write_str(label)
    }
}

/// One file's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenamePlanEntry {
    pub source: PathBuf,
    pub original_name: String,
    /// Normalised description before collision suffixes
    pub description: Option<String>,
    /// Full target filename (date prefix, description, extension)
    pub final_name: Option<String>,
    pub origin: Option<Origin>,
    pub score: Option<u8>,
    pub status: RenameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RenamePlanEntry {
    fn bare(source: &Path, status: RenameStatus, reason: impl Into<String>) -> Self {
        Self {
            source: source.to_path_buf(),
            original_name: file_name(source),
            description: None,
            final_name: None,
            origin: None,
            score: None,
            status,
            reason: Some(reason.into()),
        }
    }

    pub fn skipped(source: &Path, reason: impl Into<String>) -> Self {
        Self::bare(source, RenameStatus::Skipped, reason)
    }

    pub fn error(source: &Path, reason: impl Into<String>) -> Self {
        Self::bare(source, RenameStatus::Error, reason)
    }

    /// Path the file is renamed to, when the entry has one
    pub fn target(&self) -> Option<PathBuf> {
        self.final_name
            .as_ref()
            .map(|name| self.source.with_file_name(name))
    }

    /// Copy of this entry with a new status
    pub fn with_status(&self, status: RenameStatus, reason: Option<String>) -> Self {
        Self {
            status,
            reason,
            ..self.clone()
        }
    }
}

/// What a single file would be called before collision resolution
#[derive(Debug, Clone)]
struct Proposal {
    prefix: String,
    description: String,
    extension: String,
    name: String,
    origin: Origin,
    score: u8,
}

/// Builds rename plans for one run
pub struct Planner<'a> {
    config: &'a RenameConfig,
    registry: ExtractorRegistry,
    normalizer: NameNormalizer,
}

impl<'a> Planner<'a> {
    pub fn new(config: &'a RenameConfig) -> Self {
        Self::with_registry(config, ExtractorRegistry::new())
    }

    pub fn with_registry(config: &'a RenameConfig, registry: ExtractorRegistry) -> Self {
        Self {
            config,
            registry,
            normalizer: NameNormalizer::new(config),
        }
    }

    /// Plan every path in order, one entry per file that survives the
    /// hidden-file filter
    pub fn plan(&self, paths: &[PathBuf]) -> Vec<RenamePlanEntry> {
        let mut entries: Vec<RenamePlanEntry> = Vec::with_capacity(paths.len());
        let mut proposals: Vec<(usize, Proposal)> = Vec::new();

        for path in paths {
            let name = file_name(path);

            if !self.config.include_hidden && is_hidden(&name) {
                debug!("Skipping hidden file: {}", name);
                continue;
            }

            if !self.config.force_rename && is_already_renamed(&name) {
                debug!("Skipping already renamed file: {}", name);
                entries.push(RenamePlanEntry::skipped(path, "already renamed"));
                continue;
            }

            match self.propose(path) {
                Ok(proposal) => {
                    proposals.push((entries.len(), proposal));
                    entries.push(RenamePlanEntry {
                        source: path.clone(),
                        original_name: name,
                        description: None,
                        final_name: None,
                        origin: None,
                        score: None,
                        status: RenameStatus::WouldRename,
                        reason: None,
                    });
                }
                Err(e) => {
                    error!("Error processing {}: {}", name, e);
                    entries.push(RenamePlanEntry::error(path, e.to_string()));
                }
            }
        }

        self.assign_final_names(&mut entries, proposals);
        entries
    }

    /// Resolve collisions per directory and fill in the final names
    fn assign_final_names(&self, entries: &mut [RenamePlanEntry], proposals: Vec<(usize, Proposal)>) {
        let mut by_dir: BTreeMap<PathBuf, Vec<(usize, Proposal)>> = BTreeMap::new();
        for (idx, proposal) in proposals {
            by_dir
                .entry(parent_dir(&entries[idx].source))
                .or_default()
                .push((idx, proposal));
        }

        for (dir, group) in by_dir {
            let sources: HashSet<&str> = group
                .iter()
                .map(|(idx, _)| entries[*idx].original_name.as_str())
                .collect();
            let existing: HashSet<String> = existing_names(&dir)
                .into_iter()
                .filter(|n| !sources.contains(n.as_str()))
                .collect();

            let batch: Vec<BatchName<'_>> = group
                .iter()
                .map(|(idx, p)| BatchName {
                    current: Some(entries[*idx].original_name.as_str()),
                    proposed: p.name.as_str(),
                })
                .collect();
            let finals = resolve_batch(&batch, &existing, |i, counter| {
                self.numbered_name(&group[i].1, counter)
            });

            for ((idx, proposal), final_name) in group.into_iter().zip(finals) {
                let entry = &mut entries[idx];
                if final_name == entry.original_name {
                    entry.status = RenameStatus::Skipped;
                    entry.reason = Some("name unchanged".to_string());
                }
                entry.description = Some(proposal.description);
                entry.origin = Some(proposal.origin);
                entry.score = Some(proposal.score);
                entry.final_name = Some(final_name);
            }
        }
    }

    /// Numbered variant of a proposal, re-fitted so the suffix stays within
    /// the filename length limit
    fn numbered_name(&self, proposal: &Proposal, counter: u64) -> String {
        let suffix = format!("-{}{}", counter, proposal.extension);
        let description = self.normalizer.fit_to_filename(
            &proposal.description,
            &proposal.prefix,
            &suffix,
            self.config.limits.max_filename_length,
        );
        format!("{}{}{}", proposal.prefix, description, suffix)
    }

    fn propose(&self, path: &Path) -> Result<Proposal> {
        let metadata = std::fs::metadata(path)?;
        let date = modification_date(metadata.modified()?);

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = strip_date_prefix(&stem);
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let extracted = self.registry.extract(path, self.config);
        let choice = choose(stem, extracted.as_deref());

        let prefix = format!("{}{}", date, DATE_DELIMITER);
        let description = self.normalizer.normalize_or_placeholder(&choice.winner.text);
        let description = self.normalizer.fit_to_filename(
            &description,
            &prefix,
            &extension,
            self.config.limits.max_filename_length,
        );

        debug!(
            "{:?}: {:?} description '{}' (score {})",
            path, choice.winner.origin, description, choice.winner.score
        );

        Ok(Proposal {
            name: format!("{}{}{}", prefix, description, extension),
            prefix,
            description,
            extension,
            origin: choice.winner.origin,
            score: choice.winner.score,
        })
    }
}

/// Plan a batch with the default extractors
pub fn process(paths: &[PathBuf], config: &RenameConfig) -> Vec<RenamePlanEntry> {
    Planner::new(config).plan(paths)
}

/// Files to consider for `target`: the file itself, or the regular files
/// of a directory sorted by name (not recursive)
pub fn collect_files(target: &Path) -> Result<Vec<PathBuf>> {
    if !target.exists() {
        return Err(RenamerError::PathNotFound(target.to_path_buf()));
    }
    if target.is_file() {
        info!("Processing file: {}", target.display());
        return Ok(vec![target.to_path_buf()]);
    }

    info!("Processing directory: {}", target.display());
    let mut files: Vec<PathBuf> = std::fs::read_dir(target)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// True for names starting with `YYYY-MM-DD - `
pub fn is_already_renamed(name: &str) -> bool {
    DATE_PREFIXED.is_match(name)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// `YYYY-MM-DD` of a modification time in local time
pub fn modification_date(modified: std::time::SystemTime) -> String {
    DateTime::<Local>::from(modified).format("%Y-%m-%d").to_string()
}

fn strip_date_prefix(stem: &str) -> &str {
    match DATE_PREFIXED.find(stem) {
        Some(m) if m.end() < stem.len() => &stem[m.end()..],
        _ => stem,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn existing_names(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(e) => {
            warn!("Could not list {:?}: {}", dir, e);
            Vec::new()
        }
    }
}
