// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Content extractors that turn a file's content into a raw description

pub mod pdf;
pub mod text;

use std::path::Path;
use tracing::{debug, warn};

use crate::{RenameConfig, Result};

/// Trait for content extractors
pub trait ContentExtractor: Send + Sync {
    /// Name of this extractor
    fn name(&self) -> &'static str;

    /// File extensions this extractor handles
    fn supported_extensions(&self) -> &[&str];

    /// Check if this extractor can handle a file
    fn can_handle(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            self.supported_extensions().iter().any(|e| e.eq_ignore_ascii_case(ext))
        } else {
            false
        }
    }

    /// Extract a raw description, `Ok(None)` when the content holds nothing
    /// usable
    fn extract_description(&self, path: &Path, config: &RenameConfig) -> Result<Option<String>>;

    /// Priority (higher = preferred when multiple extractors match)
    fn priority(&self) -> u8 {
        50
    }
}

/// Registry of content extractors, selected by file extension
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn ContentExtractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with the PDF extractor and the plain-text fallback
    pub fn new() -> Self {
        let mut registry = Self {
            extractors: Vec::new(),
        };
        registry.register(Box::new(pdf::PdfExtractor::new()));
        registry.register(Box::new(text::TextExtractor::new()));
        registry
    }

    /// Register a new extractor
    pub fn register(&mut self, extractor: Box<dyn ContentExtractor>) {
        self.extractors.push(extractor);
        self.extractors.sort_by_key(|e| std::cmp::Reverse(e.priority()));
    }

    /// Find the best extractor for a file
    pub fn find_extractor(&self, path: &Path) -> Option<&dyn ContentExtractor> {
        self.extractors
            .iter()
            .find(|e| e.can_handle(path))
            .map(|e| e.as_ref())
    }

    /// Run the matching extractor. Any failure is logged and reported as
    /// "no usable content" so the caller falls back to the filename.
    pub fn extract(&self, path: &Path, config: &RenameConfig) -> Option<String> {
        let extractor = match self.find_extractor(path) {
            Some(e) => e,
            None => {
                debug!("No extractor for: {:?}", path);
                return None;
            }
        };

        match extractor.extract_description(path, config) {
            Ok(Some(description)) => {
                debug!("{} extractor found '{}' in {:?}", extractor.name(), description, path);
                Some(description)
            }
            Ok(None) => {
                debug!("No usable content in {:?}", path);
                None
            }
            Err(e) => {
                warn!("Could not read content of {:?}: {}", path, e);
                None
            }
        }
    }

    /// Get extractor names
    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_selection_by_extension() {
        let registry = ExtractorRegistry::new();
        assert_eq!(registry.extractor_names(), vec!["pdf", "text"]);

        let pdf = registry.find_extractor(Path::new("Scan.PDF")).unwrap();
        assert_eq!(pdf.name(), "pdf");

        for name in ["notes.txt", "README", "draft.md", ".gitignore", "data.xyz"] {
            let extractor = registry.find_extractor(&PathBuf::from(name)).unwrap();
            assert_eq!(extractor.name(), "text", "{}", name);
        }
        assert!(text::TextExtractor::new().supported_extensions().is_empty());
    }

    #[test]
    fn test_unreadable_file_yields_none() {
        let registry = ExtractorRegistry::new();
        let config = RenameConfig::default();
        assert_eq!(registry.extract(Path::new("/nonexistent/file.txt"), &config), None);
        assert_eq!(registry.extract(Path::new("/nonexistent/file.pdf"), &config), None);
    }

    #[test]
    fn test_malformed_pdf_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4\nthis is not really a pdf").unwrap();

        let registry = ExtractorRegistry::new();
        assert_eq!(registry.extract(&path, &RenameConfig::default()), None);
    }

    #[test]
    fn test_text_content_extracted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        std::fs::write(&path, "This is a test file\nSecond line").unwrap();

        let registry = ExtractorRegistry::new();
        assert_eq!(
            registry.extract(&path, &RenameConfig::default()).as_deref(),
            Some("This is a test file")
        );
    }
}
