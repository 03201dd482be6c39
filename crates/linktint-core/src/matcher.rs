//! Glyph-in-region containment predicate.
//!
//! Decides whether a glyph visually falls inside a target rectangle using a
//! dual-box heuristic: a cheap bounding-box overlap reject followed by a
//! baseline-anchor confirmation. Glyph bounding boxes routinely overhang the
//! nominal line (ascenders, descenders, diacritics), so a plain overlap test
//! false-positives against rectangles on adjacent lines; the anchor, which
//! always lies on the glyph's own line, disambiguates.

use crate::geometry::Rect;
use crate::run::Glyph;

/// Returns `true` if `glyph` visually falls inside `region`.
///
/// The test is two-stage:
/// 1. the glyph's bounding box must overlap the region at all, and
/// 2. the glyph's baseline anchor must lie strictly inside the region after
///    rounding the region outward to integers (floor on the left/bottom
///    bounds, ceil on the right/top bounds) to absorb layout rounding noise.
///
/// A malformed region (inverted extents) matches no glyph. The rounding and
/// strict comparisons are a tuned heuristic: changing either shifts the
/// false-positive/false-negative profile that downstream consumers rely on.
pub fn glyph_in_region(glyph: &Glyph, region: &Rect) -> bool {
    if !region.is_well_formed() {
        return false;
    }
    if !glyph.bbox.intersects(region) {
        return false;
    }

    let left = region.x0.floor();
    let bottom = region.y0.floor();
    let right = region.x1.ceil();
    let top = region.y1.ceil();

    glyph.anchor.x > left && glyph.anchor.x < right && glyph.anchor.y > bottom && glyph.anchor.y < top
}
