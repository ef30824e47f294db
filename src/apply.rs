// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Applies a rename plan through an injectable rename operation

use std::path::Path;
use tracing::{error, info};

use crate::planner::{RenamePlanEntry, RenameStatus};
use crate::{RenamerError, Result};

/// The single side effect of a run
pub trait RenameOp {
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Renames on the local filesystem, refusing to overwrite
pub struct FsRename;

impl RenameOp for FsRename {
    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if to.exists() {
            return Err(RenamerError::TargetExists(to.to_path_buf()));
        }
        std::fs::rename(from, to)?;
        Ok(())
    }
}

/// Apply every pending entry in order.
///
/// In a dry run the plan is returned unchanged. Otherwise pending entries
/// become `Renamed` or `Error`; a failure never stops the remaining
/// renames.
pub fn apply_plan(
    entries: Vec<RenamePlanEntry>,
    op: &dyn RenameOp,
    dry_run: bool,
) -> Vec<RenamePlanEntry> {
    if dry_run {
        for entry in entries.iter().filter(|e| e.status == RenameStatus::WouldRename) {
            info!(
                "DRY RUN: Would rename {} -> {}",
                entry.original_name,
                entry.final_name.as_deref().unwrap_or_default()
            );
        }
        return entries;
    }

    entries
        .into_iter()
        .map(|entry| {
            if entry.status != RenameStatus::WouldRename {
                return entry;
            }
            let Some(target) = entry.target() else {
                return entry.with_status(RenameStatus::Error, Some("no target name".to_string()));
            };
            match op.rename(&entry.source, &target) {
                Ok(()) => {
                    info!("Renamed: {} -> {}", entry.original_name, target.display());
                    entry.with_status(RenameStatus::Renamed, None)
                }
                Err(e) => {
                    error!("Error renaming {}: {}", entry.original_name, e);
                    entry.with_status(RenameStatus::Error, Some(e.to_string()))
                }
            }
        })
        .collect()
}
