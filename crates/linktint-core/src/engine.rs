//! Run splitting and style application over matched glyph ranges.
//!
//! Scans a text object's flattened glyph stream against one target region,
//! isolates the first maximal contiguous matched range as whole runs by
//! splitting at its boundaries, and applies a style mutation to exactly
//! those runs. Most (text object, region) pairs do not intersect, so the
//! no-match path is a single linear scan with no allocation or mutation.

use crate::geometry::Rect;
use crate::matcher::glyph_in_region;
use crate::run::{Run, TextObject};

/// Outcome of matching one text object against one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    /// No glyph fell inside the region. The common case.
    NoMatch,
    /// Glyphs at flattened indices `[start, end)` fell inside the region.
    Matched {
        /// Flattened index of the first matched glyph.
        start: usize,
        /// Flattened index one past the last matched glyph.
        end: usize,
    },
}

/// Find the first maximal contiguous glyph range of `obj` lying inside
/// `region`, without mutating anything.
///
/// The scan classifies glyphs in stream order and stops at the first
/// non-matching glyph after a match, so a region covering two disjoint
/// spans of one object reports only the first.
pub fn match_region(obj: &TextObject, region: &Rect) -> MatchOutcome {
    let mut start = None;
    for (i, glyph) in obj.glyphs().enumerate() {
        let inside = glyph_in_region(glyph, region);
        match start {
            None if inside => start = Some(i),
            Some(s) if !inside => return MatchOutcome::Matched { start: s, end: i },
            _ => {}
        }
    }
    match start {
        Some(s) => MatchOutcome::Matched {
            start: s,
            end: obj.glyph_count(),
        },
        None => MatchOutcome::NoMatch,
    }
}

/// Apply `mutate` to the runs covering the first maximal glyph range of
/// `obj` inside `region`.
///
/// On a match, run boundaries are created at the range's start and end
/// (no-ops where a boundary already exists), every run between them is
/// replaced by `mutate`'s result, and `Matched { start, end }` is returned.
/// On no match the object is untouched.
///
/// Boundaries only ever get finer: invoking this once per region, in
/// caller order, lets later regions match against the already-split state
/// from earlier ones.
///
/// # Panics
///
/// Panics if `mutate` returns a run whose glyphs differ from its input.
/// The callback contract is style-only mutation; altering glyph content
/// would corrupt the object's character stream.
pub fn apply_style_to_region<F>(obj: &mut TextObject, region: &Rect, mutate: F) -> MatchOutcome
where
    F: Fn(&Run) -> Run,
{
    let outcome = match_region(obj, region);
    let MatchOutcome::Matched { start, end } = outcome else {
        return MatchOutcome::NoMatch;
    };

    let first = obj.split_at(start);
    let last = obj.split_at(end);

    for run_index in first..last {
        let mutated = mutate(&obj.runs()[run_index]);
        assert!(
            mutated.glyphs() == obj.runs()[run_index].glyphs(),
            "style mutation callback altered glyph content"
        );
        obj.replace_run(run_index, mutated);
    }

    outcome
}
