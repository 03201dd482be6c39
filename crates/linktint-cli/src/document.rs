//! JSON page-dump documents.
//!
//! The CLI consumes the decomposition service's output as a JSON file
//! holding an array of pages (text objects with per-glyph geometry, plus
//! hyperlink rectangles). [`JsonDocument`] implements the library's
//! [`PageSource`] and [`ContentSink`] seams over that file format.

use std::fs;
use std::path::Path;

use linktint::{ContentSink, Page, PageSource, SourceError};

/// A document loaded from a JSON page dump.
#[derive(Debug)]
pub struct JsonDocument {
    pages: Vec<Page>,
}

impl JsonDocument {
    /// Load a page dump from `path`.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let data = fs::read_to_string(path)?;
        let pages: Vec<Page> =
            serde_json::from_str(&data).map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(Self { pages })
    }

    /// Serialize the current pages back to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.pages).unwrap()
    }
}

impl PageSource for JsonDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Page, SourceError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(SourceError::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            })
    }
}

impl ContentSink for JsonDocument {
    fn commit(&mut self, page: Page) -> Result<(), SourceError> {
        let index = page.number;
        let page_count = self.pages.len();
        match self.pages.get_mut(index) {
            Some(slot) => {
                *slot = page;
                Ok(())
            }
            None => Err(SourceError::PageOutOfRange { index, page_count }),
        }
    }
}

/// Open a page dump, mapping failures to an exit code with a diagnostic.
pub fn open_document(path: &Path) -> Result<JsonDocument, i32> {
    JsonDocument::load(path).map_err(|e| {
        eprintln!("Error opening {}: {e}", path.display());
        1
    })
}

/// Resolve an optional page-range argument against the document.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(spec) => crate::page_range::parse_page_range(spec, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            2
        }),
        None => Ok((0..page_count).collect()),
    }
}
