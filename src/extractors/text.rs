// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Plain-text extractor and the line heuristics shared with PDF page text

use once_cell::sync::Lazy;
use regex::RegexSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::ContentExtractor;
use crate::{RenameConfig, Result};

/// Longest line still accepted as an all-caps title
const MAX_CAPS_TITLE_WORDS: usize = 6;
const MAX_LABEL_WORDS: usize = 4;

/// Lines that never describe a document. Matched against the trimmed
/// line; code keywords are case-sensitive so prose such as
/// `Use Case Analysis` is not mistaken for a statement.
static LOW_VALUE_LINES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^import\s",
        r"^from\s+\S+\s+import\b",
        r"^#\s*include\b",
        r"^use\s+[\w:]+.*;$",
        r"^using\s+[\w.]+;$",
        r#"^require\s*\(?\s*['"]"#,
        r"^package\s+[a-z_][\w.]*;?$",
        r"^#",
        r"^//",
        r"^/\*",
        r"^\*(\s|/)",
        r"^--",
        r"^<!--",
        r"(?i)^(chapter|section|page)\s+\d+$",
        r"^\d+\.?$",
        r"(?i)^[ivxlc]+\.$",
        r"^[^\p{L}\p{N}]*$",
    ])
    .expect("low-value line patterns are valid")
});

/// Extractor for plain text; handles any file the PDF extractor does not
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Read at most `max_bytes` from the head of the file. Binary content
    /// (NUL bytes or invalid UTF-8) yields `None`.
    pub fn read_head(path: &Path, max_bytes: usize) -> Result<Option<String>> {
        let file = File::open(path)?;
        let mut buf = Vec::with_capacity(max_bytes.min(64 * 1024));
        file.take(max_bytes as u64).read_to_end(&mut buf)?;

        if buf.contains(&0) {
            return Ok(None);
        }

        let text = match std::str::from_utf8(&buf) {
            Ok(text) => text,
            // A character cut in half by the read limit
            Err(e) if e.error_len().is_none() => {
                std::str::from_utf8(&buf[..e.valid_up_to()]).unwrap_or_default()
            }
            Err(_) => return Ok(None),
        };

        Ok(Some(text.trim_start_matches('\u{feff}').to_string()))
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor for TextExtractor {
    fn name(&self) -> &'static str {
        "text"
    }

    // Fallback for every file, so no extension list
    fn supported_extensions(&self) -> &[&str] {
        &[]
    }

    fn can_handle(&self, _path: &Path) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        10
    }

    fn extract_description(&self, path: &Path, config: &RenameConfig) -> Result<Option<String>> {
        let content = match Self::read_head(path, config.limits.max_read_bytes)? {
            Some(c) => c,
            None => return Ok(None),
        };
        Ok(describe_text(&content, config.limits.scan_lines))
    }
}

/// Pick a description from the first `scan_lines` non-empty lines.
///
/// In priority order: a markdown header, an all-caps title, a `Label:`
/// line, then the first meaningful line (or failing that the first line
/// that is not low-value).
pub fn describe_text(text: &str, scan_lines: usize) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(scan_lines)
        .collect();

    lines
        .iter()
        .find_map(|l| markdown_header(l))
        .or_else(|| lines.iter().find_map(|l| caps_title(l)))
        .or_else(|| lines.iter().find_map(|l| label_header(l)))
        .or_else(|| lines.iter().copied().find(|l| is_meaningful_line(l)))
        .or_else(|| lines.iter().copied().find(|l| !is_low_value_line(l)))
        .map(str::to_string)
}

/// `## Title ##` -> `Title`
pub fn markdown_header(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches('#');
    if rest.len() == line.len() || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim().trim_end_matches('#').trim();
    (!title.is_empty() && title.chars().any(char::is_alphanumeric)).then_some(title)
}

/// A short line with no lowercase letters, e.g. `PROJECT ANALYSIS REPORT`
pub fn caps_title(line: &str) -> Option<&str> {
    let letters = line.chars().filter(|c| c.is_alphabetic()).count();
    let words = line.split_whitespace().count();
    let is_title = letters >= 3
        && !line.chars().any(char::is_lowercase)
        && words <= MAX_CAPS_TITLE_WORDS
        && !is_low_value_line(line);
    is_title.then_some(line)
}

/// `Meeting Notes:` -> `Meeting Notes`
pub fn label_header(line: &str) -> Option<&str> {
    let label = line.strip_suffix(':')?.trim();
    let usable = !label.is_empty()
        && label.split_whitespace().count() <= MAX_LABEL_WORDS
        && !is_low_value_line(label);
    usable.then_some(label)
}

/// Code, comment and numbering lines that say nothing about the document
pub fn is_low_value_line(line: &str) -> bool {
    LOW_VALUE_LINES.is_match(line.trim())
}

/// A line of a few real words that could serve as a title
pub fn is_meaningful_line(line: &str) -> bool {
    if is_low_value_line(line) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 || words.len() > 10 {
        return false;
    }

    let total: usize = words.iter().map(|w| w.chars().count()).sum();
    total >= 2 * words.len()
}
