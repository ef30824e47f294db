// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Picks between the original filename stem and the content-derived
//! description

use tracing::debug;

use super::scorer::score;
use super::{Candidate, Origin};

/// Outcome of a choice, keeping both scores for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub winner: Candidate,
    pub original_score: u8,
    /// `None` when extraction produced no usable content
    pub extracted_score: Option<u8>,
}

/// Choose the better description.
///
/// The extracted description wins only when its score is strictly greater
/// than the stem's; ties keep the original name.
pub fn choose(original_stem: &str, extracted: Option<&str>) -> Choice {
    let original_score = score(original_stem);
    let original = Candidate {
        text: original_stem.to_string(),
        origin: Origin::Filename,
        score: original_score,
    };

    let Some(extracted) = extracted.map(str::trim).filter(|e| !e.is_empty()) else {
        debug!("No content description, keeping '{}' ({})", original_stem, original_score);
        return Choice {
            winner: original,
            original_score,
            extracted_score: None,
        };
    };

    let extracted_score = score(extracted);
    debug!(
        "Original '{}' score: {}, content '{}' score: {}",
        original_stem, original_score, extracted, extracted_score
    );

    let winner = if extracted_score > original_score {
        Candidate {
            text: extracted.to_string(),
            origin: Origin::Content,
            score: extracted_score,
        }
    } else {
        original
    };

    Choice {
        winner,
        original_score,
        extracted_score: Some(extracted_score),
    }
}
