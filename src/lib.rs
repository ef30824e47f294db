// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! File Renamer: date-prefixed, content-described filenames
//!
//! Renames documents to `YYYY-MM-DD - Description.ext`, taking the date from
//! the modification time and the description from either the file's content
//! or its current name, whichever is more descriptive.

pub mod apply;
pub mod config;
pub mod error;
pub mod extractors;
pub mod naming;
pub mod planner;

pub use config::{RenameConfig, Separator};
pub use error::{RenamerError, Result};
pub use planner::{process, RenamePlanEntry, RenameStatus};
