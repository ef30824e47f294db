// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for the file renamer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for renamer operations
pub type Result<T> = std::result::Result<T, RenamerError>;

/// Renamer error types
#[derive(Error, Debug)]
pub enum RenamerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Target already exists: {0}")]
    TargetExists(PathBuf),
}
