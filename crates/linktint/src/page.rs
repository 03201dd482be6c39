//! Per-page input model: decomposed text objects plus hyperlink regions.

use linktint_core::{Rect, TextObject};

/// A resolved hyperlink on a page.
///
/// Represents a Link annotation's active rectangle and resolved URI target,
/// as produced by the annotation supplier. The rectangle shares the page
/// coordinate space of the decomposed text geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperlink {
    /// Active area of the link on the page.
    pub rect: Rect,
    /// The resolved URI or destination string.
    pub uri: String,
}

/// One page's worth of decomposed content.
///
/// Produced by the external page decomposition service: a flat, order-stable
/// list of text objects with per-glyph geometry already resolved to page
/// coordinates, plus the page's link rectangles in the same space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// 0-indexed page number within the document.
    pub number: usize,
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Text objects in content order.
    pub text_objects: Vec<TextObject>,
    /// Hyperlinks in annotation order.
    pub hyperlinks: Vec<Hyperlink>,
}
