// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Run configuration for the file renamer
//!
//! A single [`RenameConfig`] value is built once per run (defaults, then an
//! optional JSON file, then command-line flags) and passed by reference to
//! every component that needs separator or policy behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{RenamerError, Result};

/// Main run configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RenameConfig {
    /// Separator used between words of the description
    #[serde(default)]
    pub separator: Separator,

    /// Process dot files as well
    #[serde(default)]
    pub include_hidden: bool,

    /// Re-process files that already carry a date prefix
    #[serde(default)]
    pub force_rename: bool,

    /// Compute the plan without touching the filesystem
    #[serde(default)]
    pub dry_run: bool,

    /// Length and scan limits
    #[serde(default)]
    pub limits: LimitConfig,
}

/// Word separator style for generated descriptions
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Dash,
    Underscore,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Dash => '-',
            Separator::Underscore => '_',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Dash => write!(f, "dash"),
            Separator::Underscore => write!(f, "underscore"),
        }
    }
}

impl FromStr for Separator {
    type Err = RenamerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dash" => Ok(Separator::Dash),
            "underscore" => Ok(Separator::Underscore),
            other => Err(RenamerError::Config(format!(
                "Unknown separator '{}', expected 'dash' or 'underscore'",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LimitConfig {
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
    #[serde(default = "default_max_filename_length")]
    pub max_filename_length: usize,
    /// Non-empty lines inspected when hunting for a title
    #[serde(default = "default_scan_lines")]
    pub scan_lines: usize,
    /// Bytes read from the head of a text file
    #[serde(default = "default_max_read_bytes")]
    pub max_read_bytes: usize,
    /// PDF metadata titles longer than this are ignored
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
}

// Default value functions
fn default_max_description_length() -> usize { 80 }
fn default_max_filename_length() -> usize { 200 }
fn default_scan_lines() -> usize { 10 }
fn default_max_read_bytes() -> usize { 2048 }
fn default_max_title_length() -> usize { 100 }

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_description_length: default_max_description_length(),
            max_filename_length: default_max_filename_length(),
            scan_lines: default_scan_lines(),
            max_read_bytes: default_max_read_bytes(),
            max_title_length: default_max_title_length(),
        }
    }
}

impl RenameConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| RenamerError::Config(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Reject limits that would make every description empty
    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;
        if limits.max_description_length == 0 {
            return Err(RenamerError::Config(
                "max_description_length must be greater than zero".to_string(),
            ));
        }
        // "YYYY-MM-DD - " plus at least one character
        if limits.max_filename_length < 14 {
            return Err(RenamerError::Config(
                "max_filename_length must be at least 14".to_string(),
            ));
        }
        if limits.scan_lines == 0 || limits.max_read_bytes == 0 {
            return Err(RenamerError::Config(
                "scan_lines and max_read_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
