//! linktint-core: Backend-independent data types and algorithms.
//!
//! This crate provides the text model (glyphs, styled runs, text objects),
//! the glyph-in-region containment heuristic, and the run-splitting engine
//! that isolates and restyles the glyph ranges lying under target
//! rectangles. It performs no I/O and knows nothing about PDF files: page
//! decomposition and persistence are collaborators of the `linktint` crate.

pub mod engine;
pub mod geometry;
pub mod matcher;
pub mod run;
pub mod style;

pub use engine::{MatchOutcome, apply_style_to_region, match_region};
pub use geometry::{Point, Rect};
pub use matcher::glyph_in_region;
pub use run::{Glyph, Run, TextObject};
pub use style::{Color, TextStyle};
