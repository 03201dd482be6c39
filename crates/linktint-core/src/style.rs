//! Text style values: colors and the per-run style record.
//!
//! Styles are immutable values. "Mutating" a style always produces a new
//! value through the `with_*` builders, so two runs produced by a split can
//! never end up sharing one mutable style record.

/// A color in one of the PDF color spaces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Grayscale, 0.0 (black) to 1.0 (white).
    Gray(f64),
    /// RGB components in [0.0, 1.0].
    Rgb(f64, f64, f64),
    /// CMYK components in [0.0, 1.0].
    Cmyk(f64, f64, f64, f64),
    /// Components in an unrecognized color space, kept verbatim.
    Other(Vec<f64>),
}

impl Color {
    /// Convert to RGB components if the color space allows it.
    ///
    /// Returns `None` for [`Color::Other`], whose color space is unknown.
    pub fn to_rgb(&self) -> Option<(f64, f64, f64)> {
        match self {
            Color::Gray(g) => Some((*g, *g, *g)),
            Color::Rgb(r, g, b) => Some((*r, *g, *b)),
            Color::Cmyk(c, m, y, k) => Some((
                (1.0 - c) * (1.0 - k),
                (1.0 - m) * (1.0 - k),
                (1.0 - y) * (1.0 - k),
            )),
            Color::Other(_) => None,
        }
    }
}

/// The style shared by every glyph in one run.
///
/// Treated as an opaque value by the matching engine: it is copied across
/// splits and swapped wholesale by mutation callbacks, never inspected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Font name.
    pub fontname: String,
    /// Font size in points.
    pub size: f64,
    /// Non-stroking (fill) color, if any.
    pub fill_color: Option<Color>,
    /// Stroking (outline) color, if any.
    pub stroke_color: Option<Color>,
}

impl TextStyle {
    pub fn new(fontname: impl Into<String>, size: f64) -> Self {
        Self {
            fontname: fontname.into(),
            size,
            fill_color: None,
            stroke_color: None,
        }
    }

    /// Returns a copy of this style with the fill color replaced.
    pub fn with_fill_color(mut self, color: Option<Color>) -> Self {
        self.fill_color = color;
        self
    }

    /// Returns a copy of this style with the stroke color replaced.
    pub fn with_stroke_color(mut self, color: Option<Color>) -> Self {
        self.stroke_color = color;
        self
    }
}
