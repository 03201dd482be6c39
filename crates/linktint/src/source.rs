//! Collaborator seams: page decomposition and content commit.
//!
//! The recolor sweep operates purely on in-memory [`Page`]s. Where those
//! pages come from (a PDF decomposition backend, a serialized dump) and
//! where mutated pages go (a content-stream writer) are collaborator
//! concerns behind these traits.

use thiserror::Error;

use crate::page::Page;

/// Error type for page source and sink operations.
#[derive(Debug, Error)]
pub enum SourceError {
    /// I/O error reading or writing page data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The page data is malformed or has unexpected structure.
    #[error("malformed page data: {0}")]
    Malformed(String),

    /// A page index outside the document was requested.
    #[error("page {index} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// The requested 0-indexed page.
        index: usize,
        /// Number of pages in the document.
        page_count: usize,
    },
}

/// Supplies decomposed pages: flat text objects with resolved glyph
/// geometry, plus hyperlink rectangles, all in one coordinate space.
pub trait PageSource {
    /// Number of pages available.
    fn page_count(&self) -> usize;

    /// Decompose page `index` (0-indexed).
    fn page(&self, index: usize) -> Result<Page, SourceError>;
}

/// Accepts mutated pages for persistence.
pub trait ContentSink {
    /// Commit one mutated page back to the document.
    fn commit(&mut self, page: Page) -> Result<(), SourceError>;
}
