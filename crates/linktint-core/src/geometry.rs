/// A point in PDF user-space coordinates (origin at the bottom-left of the
/// page, y increasing upward).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in PDF user-space coordinates.
///
/// Coordinates follow PDF convention (origin bottom-left, y up):
/// - `x0`: left edge
/// - `y0`: bottom edge
/// - `x1`: right edge
/// - `y1`: top edge
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether the rectangle has non-inverted extents (`x0 <= x1` and
    /// `y0 <= y1`). Rectangles that fail this are treated as matching
    /// nothing rather than as errors.
    pub fn is_well_formed(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    /// Whether this rectangle and `other` overlap. Touching edges count
    /// as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }
}
