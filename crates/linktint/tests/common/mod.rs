//! Shared fixture builders for integration tests.

use linktint::{Color, Glyph, Hyperlink, Page, Point, Rect, Run, TextObject, TextStyle};

/// Default black Helvetica style.
pub fn black() -> TextStyle {
    TextStyle::new("Helvetica", 12.0).with_fill_color(Some(Color::Gray(0.0)))
}

/// A single-run text object: one glyph per character, anchors spaced 6pt
/// apart along the baseline, bboxes 2pt below to 10pt above the baseline.
pub fn text_object(text: &str, start_x: f64, baseline: f64, style: TextStyle) -> TextObject {
    let glyphs = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let x = start_x + i as f64 * 6.0;
            Glyph::new(
                c.to_string(),
                Point::new(x, baseline),
                Rect::new(x, baseline - 2.0, x + 6.0, baseline + 10.0),
            )
        })
        .collect();
    TextObject::new(vec![Run::new(style, glyphs)])
}

/// A hyperlink band around the given baseline admitting anchors with x
/// strictly inside the rounded `(x_lo, x_hi)` bounds.
pub fn link(x_lo: f64, x_hi: f64, baseline: f64, uri: &str) -> Hyperlink {
    Hyperlink {
        rect: Rect::new(x_lo, baseline - 5.0, x_hi, baseline + 5.0),
        uri: uri.to_string(),
    }
}

/// A US-letter page with the given content.
pub fn page(text_objects: Vec<TextObject>, hyperlinks: Vec<Hyperlink>) -> Page {
    Page {
        number: 0,
        width: 612.0,
        height: 792.0,
        text_objects,
        hyperlinks,
    }
}
