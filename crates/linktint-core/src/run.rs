//! Text objects, styled runs, and positioned glyphs.
//!
//! A [`TextObject`] owns an ordered list of [`Run`]s; concatenating the runs'
//! glyph sequences yields the object's full character stream in visual order.
//! The run list is an exact partition of that stream, and every operation
//! here preserves it: splitting moves glyphs between runs without
//! duplicating, dropping, or reordering any of them.

use crate::geometry::{Point, Rect};
use crate::style::TextStyle;

/// A single positioned character within a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// The text content of this glyph (usually one character, possibly a
    /// multi-character ligature expansion).
    pub text: String,
    /// Baseline origin in page coordinates. Unlike the bounding box, the
    /// anchor always lies on the glyph's own line.
    pub anchor: Point,
    /// Geometric bounding box in page coordinates. Ascenders, descenders,
    /// and diacritics may push it past the nominal line bounds.
    pub bbox: Rect,
}

impl Glyph {
    pub fn new(text: impl Into<String>, anchor: Point, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            anchor,
            bbox,
        }
    }
}

/// A maximal contiguous span of glyphs sharing one style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    style: TextStyle,
    glyphs: Vec<Glyph>,
}

impl Run {
    pub fn new(style: TextStyle, glyphs: Vec<Glyph>) -> Self {
        Self { style, glyphs }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Number of glyphs in this run.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Concatenated text of all glyphs in this run.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.text.as_str()).collect()
    }

    /// Returns a run with the same glyphs and a replacement style.
    ///
    /// This is the shape style-mutation callbacks are expected to take:
    /// it cannot disturb glyph content.
    pub fn with_style(&self, style: TextStyle) -> Run {
        Run {
            style,
            glyphs: self.glyphs.clone(),
        }
    }

    /// Split this run in place, keeping glyphs `[0, at)` and returning a new
    /// run holding glyphs `[at, len)` with a copy of the style.
    ///
    /// Callers must pass an interior index (`0 < at < len`) so that neither
    /// side ends up empty; boundary indices are handled by
    /// [`TextObject::split_at`] without calling this.
    pub(crate) fn split_off(&mut self, at: usize) -> Run {
        debug_assert!(at > 0 && at < self.glyphs.len());
        let tail = self.glyphs.split_off(at);
        Run {
            style: self.style.clone(),
            glyphs: tail,
        }
    }
}

/// One logical text element on a page, owning an ordered list of runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextObject {
    runs: Vec<Run>,
}

impl TextObject {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Total number of glyphs across all runs.
    pub fn glyph_count(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// Iterate over the flattened glyph stream in visual order.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.runs.iter().flat_map(|r| r.glyphs.iter())
    }

    /// Concatenated text of the whole object.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text()).collect()
    }

    /// Ensure a run boundary exists at flattened glyph index `index` and
    /// return the index (into the run list) of the run that starts there.
    ///
    /// If `index` falls inside a run, that run is split in two with the
    /// style copied to both halves; if a boundary already exists this is a
    /// no-op that never creates a zero-length run. `index` equal to the
    /// glyph count returns `runs.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `index` exceeds the glyph count. Passing one is a bug in
    /// the caller, not a recoverable condition.
    pub fn split_at(&mut self, index: usize) -> usize {
        assert!(
            index <= self.glyph_count(),
            "split index {index} out of range for text object with {} glyphs",
            self.glyph_count()
        );

        let mut offset = 0;
        for ri in 0..self.runs.len() {
            if offset == index {
                return ri;
            }
            let next = offset + self.runs[ri].len();
            if index < next {
                let tail = self.runs[ri].split_off(index - offset);
                self.runs.insert(ri + 1, tail);
                return ri + 1;
            }
            offset = next;
        }
        self.runs.len()
    }

    /// Replace the run at `run_index` with `run`.
    pub(crate) fn replace_run(&mut self, run_index: usize, run: Run) {
        self.runs[run_index] = run;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    /// Builds a run of single-character glyphs with anchors spaced 6pt
    /// apart along the baseline.
    fn make_run(text: &str, start_x: f64, style: TextStyle) -> Run {
        let glyphs = text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let x = start_x + i as f64 * 6.0;
                Glyph::new(
                    c.to_string(),
                    Point::new(x, 50.0),
                    Rect::new(x, 48.0, x + 6.0, 60.0),
                )
            })
            .collect();
        Run::new(style, glyphs)
    }

    fn black() -> TextStyle {
        TextStyle::new("Helvetica", 12.0).with_fill_color(Some(Color::Gray(0.0)))
    }

    #[test]
    fn test_run_text_and_len() {
        let run = make_run("Hello", 100.0, black());
        assert_eq!(run.len(), 5);
        assert!(!run.is_empty());
        assert_eq!(run.text(), "Hello");
    }

    #[test]
    fn test_run_with_style_keeps_glyphs() {
        let run = make_run("abc", 0.0, black());
        let blue = run.with_style(black().with_fill_color(Some(Color::Rgb(0.0, 0.0, 1.0))));
        assert_eq!(blue.glyphs(), run.glyphs());
        assert_eq!(blue.style().fill_color, Some(Color::Rgb(0.0, 0.0, 1.0)));
        assert_eq!(run.style().fill_color, Some(Color::Gray(0.0)));
    }

    #[test]
    fn test_text_object_flattened_stream() {
        let obj = TextObject::new(vec![
            make_run("Hello", 100.0, black()),
            make_run("World", 130.0, black()),
        ]);
        assert_eq!(obj.glyph_count(), 10);
        assert_eq!(obj.text(), "HelloWorld");
        let texts: Vec<&str> = obj.glyphs().map(|g| g.text.as_str()).collect();
        assert_eq!(texts.join(""), "HelloWorld");
    }

    #[test]
    fn test_split_at_interior_index() {
        let mut obj = TextObject::new(vec![make_run("HelloWorld", 100.0, black())]);
        let ri = obj.split_at(5);
        assert_eq!(ri, 1);
        assert_eq!(obj.runs().len(), 2);
        assert_eq!(obj.runs()[0].text(), "Hello");
        assert_eq!(obj.runs()[1].text(), "World");
        assert_eq!(obj.text(), "HelloWorld");
        // Style copied to both sides.
        assert_eq!(obj.runs()[0].style(), obj.runs()[1].style());
    }

    #[test]
    fn test_split_at_existing_boundary_is_noop() {
        let mut obj = TextObject::new(vec![
            make_run("Hello", 100.0, black()),
            make_run("World", 130.0, black()),
        ]);
        let ri = obj.split_at(5);
        assert_eq!(ri, 1);
        assert_eq!(obj.runs().len(), 2);
    }

    #[test]
    fn test_split_at_start_and_end() {
        let mut obj = TextObject::new(vec![make_run("abc", 0.0, black())]);
        assert_eq!(obj.split_at(0), 0);
        assert_eq!(obj.runs().len(), 1);
        assert_eq!(obj.split_at(3), 1);
        assert_eq!(obj.runs().len(), 1);
    }

    #[test]
    fn test_split_style_is_deep_copied() {
        let mut obj = TextObject::new(vec![make_run("abcd", 0.0, black())]);
        let ri = obj.split_at(2);
        let recolored = obj.runs()[ri]
            .with_style(black().with_fill_color(Some(Color::Rgb(1.0, 0.0, 0.0))));
        obj.replace_run(ri, recolored);
        // Mutating one side never affects the other.
        assert_eq!(obj.runs()[0].style().fill_color, Some(Color::Gray(0.0)));
        assert_eq!(
            obj.runs()[1].style().fill_color,
            Some(Color::Rgb(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_repeated_splits_conserve_glyphs() {
        let mut obj = TextObject::new(vec![make_run("HelloWorld", 100.0, black())]);
        for idx in [3, 7, 3, 0, 10, 5] {
            obj.split_at(idx);
            assert_eq!(obj.text(), "HelloWorld");
        }
        assert!(obj.runs().iter().all(|r| !r.is_empty()));
        assert_eq!(obj.glyph_count(), 10);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_split_past_end_panics() {
        let mut obj = TextObject::new(vec![make_run("abc", 0.0, black())]);
        obj.split_at(4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let obj = TextObject::new(vec![
            make_run("Hello", 100.0, black()),
            make_run("World", 130.0, black()),
        ]);
        let json = serde_json::to_string(&obj).unwrap();
        let back: TextObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obj);
    }

    #[test]
    fn test_split_with_empty_run_in_stream() {
        let mut obj = TextObject::new(vec![
            make_run("ab", 0.0, black()),
            Run::new(black(), Vec::new()),
            make_run("cd", 12.0, black()),
        ]);
        // Boundary at 2 resolves to the first run index at that offset.
        assert_eq!(obj.split_at(2), 1);
        assert_eq!(obj.runs().len(), 3);
        // Interior split inside the trailing run still works.
        let ri = obj.split_at(3);
        assert_eq!(obj.runs()[ri].text(), "d");
        assert_eq!(obj.text(), "abcd");
    }
}
