//! linktint: Recolor the text under hyperlink rectangles on decomposed
//! PDF pages.
//!
//! This is the public API facade crate. It re-exports the core model from
//! linktint-core and adds the page-level sweep: for each hyperlink
//! rectangle on a page, find which glyphs visually fall inside it, split
//! the owning runs at the match boundaries, and restyle exactly the
//! matched sub-runs.
//!
//! # Architecture
//!
//! - **linktint-core**: glyph/run/text-object model, containment
//!   heuristic, run-splitting engine
//! - **linktint** (this crate): page model, recolor sweep, collaborator
//!   traits for decomposition and persistence
//!
//! # Example
//!
//! ```
//! use linktint::{Color, Page, RecolorOptions, recolor_hyperlinks};
//!
//! let mut page = Page {
//!     number: 0,
//!     width: 612.0,
//!     height: 792.0,
//!     text_objects: Vec::new(),
//!     hyperlinks: Vec::new(),
//! };
//! let report = recolor_hyperlinks(&mut page, &RecolorOptions::fill(Color::Rgb(0.0, 0.0, 1.0)));
//! assert_eq!(report.links_total, 0);
//! ```

pub mod page;
pub mod recolor;
pub mod source;

pub use linktint_core::{
    Color, Glyph, MatchOutcome, Point, Rect, Run, TextObject, TextStyle, apply_style_to_region,
    glyph_in_region, match_region,
};
pub use page::{Hyperlink, Page};
pub use recolor::{LinkText, RecolorOptions, RecolorReport, link_texts, recolor_hyperlinks};
pub use source::{ContentSink, PageSource, SourceError};
