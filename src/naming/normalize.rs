// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Converts a chosen description into a filesystem-safe string

use crate::config::{RenameConfig, Separator};

/// Used when a description normalises to nothing
pub const PLACEHOLDER: &str = "Untitled";

/// Name normaliser bound to one run's separator and length limit
#[derive(Debug, Clone, Copy)]
pub struct NameNormalizer {
    separator: char,
    max_length: usize,
}

impl NameNormalizer {
    pub fn new(config: &RenameConfig) -> Self {
        Self::with_settings(config.separator, config.limits.max_description_length)
    }

    pub fn with_settings(separator: Separator, max_length: usize) -> Self {
        Self {
            separator: separator.as_char(),
            max_length,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Normalise a description. The result may be empty; see
    /// [`NameNormalizer::normalize_or_placeholder`].
    pub fn normalize(&self, description: &str) -> String {
        let cased = if is_mostly_uppercase(description) {
            capital_case(description)
        } else {
            description.to_string()
        };

        let filtered: String = cased
            .chars()
            .map(|c| if is_kept(c) { c } else { '_' })
            .collect();

        let collapsed = collapse_separators(&filtered, self.separator);
        truncate_at_boundary(&collapsed, self.max_length, self.separator)
    }

    pub fn normalize_or_placeholder(&self, description: &str) -> String {
        let normalized = self.normalize(description);
        if normalized.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            normalized
        }
    }

    /// Shorten an already-normalised description so that
    /// `"{date_prefix}{description}{extension}"` stays within `max_filename`
    /// characters
    pub fn fit_to_filename(
        &self,
        description: &str,
        date_prefix: &str,
        extension: &str,
        max_filename: usize,
    ) -> String {
        let fixed = date_prefix.chars().count() + extension.chars().count();
        let available = max_filename.saturating_sub(fixed).max(1);
        truncate_at_boundary(description, available, self.separator)
    }
}

/// Normalise with the separator and length limit from `config`
pub fn normalize(description: &str, config: &RenameConfig) -> String {
    NameNormalizer::new(config).normalize(description)
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '-' | '_')
}

fn is_separator_like(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_')
}

/// True when more than half of the alphabetic characters are uppercase
pub fn is_mostly_uppercase(text: &str) -> bool {
    let (upper, total) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(upper, total), c| {
            (upper + usize::from(c.is_uppercase()), total + 1)
        });
    total > 0 && upper * 2 > total
}

/// `QUARTERLY BUDGET-REVIEW` -> `Quarterly Budget-Review`
pub fn capital_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Collapse every run of spaces, hyphens and underscores into one `separator`
/// and trim separators from both ends
pub fn collapse_separators(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = false;
    for c in text.chars() {
        if is_separator_like(c) {
            pending = true;
        } else {
            if pending && !out.is_empty() {
                out.push(separator);
            }
            pending = false;
            out.push(c);
        }
    }
    out
}

/// Truncate a separator-joined string to at most `max_chars` characters,
/// cutting only between words. A single word longer than the limit has no
/// boundary to cut at and is shortened to the limit.
pub fn truncate_at_boundary(text: &str, max_chars: usize, separator: char) -> String {
    if text.chars().count() <= max_chars {
        return text.trim_matches(separator).to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let (head, rest) = text.split_at(cut);

    let at_boundary = rest.starts_with(separator);
    let truncated = if at_boundary {
        head
    } else {
        match head.rfind(separator) {
            Some(idx) => &head[..idx],
            None => head,
        }
    };

    truncated.trim_matches(separator).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dash() -> NameNormalizer {
        NameNormalizer::with_settings(Separator::Dash, 80)
    }

    fn underscore() -> NameNormalizer {
        NameNormalizer::with_settings(Separator::Underscore, 80)
    }

    #[test]
    fn test_all_caps_to_capital_case() {
        assert_eq!(dash().normalize("PROJECT ANALYSIS REPORT"), "Project-Analysis-Report");
        assert_eq!(dash().normalize("Q3 BUDGET REVIEW"), "Q3-Budget-Review");
    }

    #[test]
    fn test_mixed_case_preserved() {
        assert_eq!(dash().normalize("Sample PDF Document"), "Sample-PDF-Document");
        assert_eq!(dash().normalize("This is a test file"), "This-is-a-test-file");
    }

    #[test]
    fn test_separator_styles() {
        assert_eq!(dash().normalize("Project Report Analysis"), "Project-Report-Analysis");
        assert_eq!(dash().normalize("File_with_underscores"), "File-with-underscores");
        assert_eq!(underscore().normalize("Project Report Analysis"), "Project_Report_Analysis");
        assert_eq!(underscore().normalize("File-with-dashes"), "File_with_dashes");
    }

    #[test]
    fn test_special_characters_replaced() {
        assert_eq!(dash().normalize("Special@#$Characters"), "Special-Characters");
        assert_eq!(dash().normalize("Notes: Q&A (draft)"), "Notes-Q-A-draft");
        assert_eq!(dash().normalize("Café résumé"), "Café-résumé");
    }

    #[test]
    fn test_consecutive_and_edge_separators() {
        assert_eq!(dash().normalize("Multiple   Spaces"), "Multiple-Spaces");
        assert_eq!(underscore().normalize("Multiple___Underscores"), "Multiple_Underscores");
        assert_eq!(dash().normalize("  --leading and trailing__  "), "leading-and-trailing");

        for input in ["a - _ b", "__x__", "-- y --", "z!!!?? w", "  "] {
            let out = dash().normalize(input);
            assert!(!out.contains("--"), "{}", out);
            assert!(!out.starts_with('-') && !out.ends_with('-'), "{}", out);
        }
    }

    #[test]
    fn test_empty_result_uses_placeholder() {
        assert_eq!(dash().normalize("!!!"), "");
        assert_eq!(dash().normalize_or_placeholder("!!!"), PLACEHOLDER);
        assert_eq!(dash().normalize_or_placeholder("ok"), "ok");
    }

    #[test]
    fn test_truncation_keeps_whole_words() {
        let long = "Implementing Outsourced Mail Management for Multifamily Real Estate Compliance";
        let normalizer = NameNormalizer::with_settings(Separator::Dash, 60);
        let out = normalizer.normalize(long);
        assert!(out.chars().count() <= 60);
        assert!(!out.ends_with('-'));
        assert_eq!(out, "Implementing-Outsourced-Mail-Management-for-Multifamily-Real");

        let out = NameNormalizer::with_settings(Separator::Dash, 50).normalize(long);
        assert_eq!(out, "Implementing-Outsourced-Mail-Management-for");
        assert!(!out.contains("Multif"));
    }

    #[test]
    fn test_truncation_output_is_prefix_of_whole_words() {
        let text = "This is a very long filename that needs to be truncated intelligently";
        let full = dash().normalize(text);
        for limit in 5..full.len() {
            let out = NameNormalizer::with_settings(Separator::Dash, limit).normalize(text);
            assert!(out.chars().count() <= limit);
            let words: Vec<&str> = full.split('-').collect();
            let kept: Vec<&str> = out.split('-').collect();
            assert_eq!(&words[..kept.len()], kept.as_slice(), "limit {}", limit);
        }
    }

    #[test]
    fn test_single_long_word_is_hard_cut() {
        let out = truncate_at_boundary("VeryLongWordWithoutAnySpacesOrSeparators", 20, '-');
        assert_eq!(out, "VeryLongWordWithoutA");
    }

    #[test]
    fn test_truncation_respects_multibyte_characters() {
        let out = truncate_at_boundary("Überblick-Ärzte-Öffnungszeiten", 16, '-');
        assert_eq!(out, "Überblick-Ärzte");
    }

    #[test]
    fn test_fit_to_filename() {
        let normalizer = dash();
        let description = "Alpha-Beta-Gamma-Delta";
        let fitted = normalizer.fit_to_filename(description, "2024-01-15 - ", ".txt", 30);
        assert!(fitted.chars().count() + "2024-01-15 - .txt".len() <= 30);
        assert_eq!(fitted, "Alpha-Beta");

        let untouched = normalizer.fit_to_filename(description, "2024-01-15 - ", ".txt", 200);
        assert_eq!(untouched, description);
    }

    #[test]
    fn test_free_function_uses_config() {
        let mut config = RenameConfig::default();
        config.separator = Separator::Underscore;
        assert_eq!(normalize("PROJECT ANALYSIS REPORT", &config), "Project_Analysis_Report");
    }

    #[test]
    fn test_mostly_uppercase_detection() {
        assert!(is_mostly_uppercase("PROJECT REPORT"));
        assert!(is_mostly_uppercase("NASA Mission LOG"));
        assert!(!is_mostly_uppercase("Sample PDF Document"));
        assert!(!is_mostly_uppercase("1234"));
    }
}
