// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! PDF extractor: metadata title first, then first-page text

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

use super::text::describe_text;
use super::ContentExtractor;
use crate::naming::scorer::Words;
use crate::{RenameConfig, RenamerError, Result};

/// Extractor for PDF files
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn load(bytes: &[u8]) -> Result<lopdf::Document> {
        guarded(|| lopdf::Document::load_mem(bytes))
            .ok_or_else(|| RenamerError::Pdf("Parser panicked".to_string()))?
            .map_err(|e| RenamerError::Pdf(format!("Failed to load PDF: {}", e)))
    }

    /// Document-info `Title`, if present
    pub fn metadata_title(doc: &lopdf::Document) -> Option<String> {
        let info = doc.trailer.get(b"Info").ok()?;
        let info_dict = match info {
            lopdf::Object::Reference(id) => doc.get_dictionary(*id).ok()?,
            other => other.as_dict().ok()?,
        };

        let title = match info_dict.get(b"Title").ok()? {
            lopdf::Object::Reference(id) => doc.get_object(*id).ok()?,
            other => other,
        };

        let bytes = title.as_str().ok()?;
        let decoded = decode_text_string(bytes);
        let trimmed = decoded.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Text of the first page via lopdf
    fn first_page_text(doc: &lopdf::Document) -> Option<String> {
        let first = *doc.get_pages().keys().next()?;
        match guarded(|| doc.extract_text(&[first])) {
            Some(Ok(text)) if !text.trim().is_empty() => Some(text),
            Some(Ok(_)) => None,
            Some(Err(e)) => {
                debug!("lopdf could not extract page {}: {}", first, e);
                None
            }
            None => None,
        }
    }

    /// Whole-document text via pdf-extract; only its first lines are used
    fn fallback_text(bytes: &[u8]) -> Option<String> {
        match guarded(|| pdf_extract::extract_text_from_mem(bytes)) {
            Some(Ok(text)) if !text.trim().is_empty() => Some(text),
            Some(Ok(_)) => None,
            Some(Err(e)) => {
                debug!("pdf-extract failed: {}", e);
                None
            }
            None => {
                warn!("pdf-extract panicked, likely a malformed font");
                None
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn priority(&self) -> u8 {
        90
    }

    fn extract_description(&self, path: &Path, config: &RenameConfig) -> Result<Option<String>> {
        let bytes = std::fs::read(path)?;
        let doc = Self::load(&bytes)?;

        if let Some(title) = Self::metadata_title(&doc) {
            if is_usable_title(&title, config.limits.max_title_length) {
                return Ok(Some(title));
            }
            debug!("Ignoring PDF metadata title '{}'", title);
        }

        let text = Self::first_page_text(&doc).or_else(|| Self::fallback_text(&bytes));
        Ok(text.and_then(|t| describe_text(&t, config.limits.scan_lines)))
    }
}

/// Run a PDF parser call, turning a panic into `None`
fn guarded<T>(f: impl FnOnce() -> T) -> Option<T> {
    catch_unwind(AssertUnwindSafe(f)).ok()
}

/// Titles made only of generic or numeric words (`Untitled`, `doc1`) are
/// no better than the filename
fn is_usable_title(title: &str, max_length: usize) -> bool {
    if title.chars().count() > max_length {
        return false;
    }
    Words::new(title)
        .credited()
        .iter()
        .any(|t| !t.chars().all(char::is_numeric))
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else one byte
/// per character
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
