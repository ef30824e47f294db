// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Description selection: scoring, choosing, normalising and de-duplicating
//! names

pub mod chooser;
pub mod collision;
pub mod normalize;
pub mod scorer;

use serde::{Deserialize, Serialize};

pub use chooser::{choose, Choice};
pub use collision::{resolve, resolve_batch, BatchName};
pub use normalize::{normalize, NameNormalizer, PLACEHOLDER};
pub use scorer::score;

/// Where a description came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Content,
    Filename,
}

/// A scored candidate description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub origin: Origin,
    pub score: u8,
}
