//! Page-level recolor sweep.
//!
//! Walks a page's hyperlinks in annotation order and, for each rectangle,
//! runs one matching pass over every text object, splitting runs at the
//! match boundaries and recoloring exactly the matched sub-runs. Later
//! rectangles operate on the already-split state from earlier ones, so run
//! boundaries only ever get finer across the sweep.

use linktint_core::{Color, MatchOutcome, apply_style_to_region, match_region};

use crate::page::Page;

/// Options for the recolor sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct RecolorOptions {
    /// Fill color applied to matched runs.
    pub fill: Color,
    /// Stroke color applied to matched runs, if any. `None` leaves each
    /// run's stroke color unchanged.
    pub stroke: Option<Color>,
}

impl RecolorOptions {
    pub fn fill(fill: Color) -> Self {
        Self { fill, stroke: None }
    }
}

/// Summary of one page's recolor sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecolorReport {
    /// Hyperlinks on the page.
    pub links_total: usize,
    /// Hyperlinks under which at least one glyph was found.
    pub links_matched: usize,
    /// Glyphs whose run was recolored.
    pub glyphs_recolored: usize,
}

/// Text found under one hyperlink rectangle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkText {
    /// The hyperlink's URI.
    pub uri: String,
    /// Concatenated text of the matched glyph ranges, in text-object order.
    pub text: String,
}

/// Recolor the text under every hyperlink on `page`.
///
/// Processes hyperlinks in annotation order; for each, every text object
/// gets one matching pass. The page is mutated in place (runs split and
/// restyled); committing the result back to the document is the caller's
/// concern, via [`ContentSink`](crate::source::ContentSink) or otherwise.
pub fn recolor_hyperlinks(page: &mut Page, options: &RecolorOptions) -> RecolorReport {
    let mut report = RecolorReport {
        links_total: page.hyperlinks.len(),
        ..RecolorReport::default()
    };

    for link in &page.hyperlinks {
        let mut matched = false;
        for obj in &mut page.text_objects {
            let outcome = apply_style_to_region(obj, &link.rect, |run| {
                let mut style = run.style().clone().with_fill_color(Some(options.fill.clone()));
                if let Some(stroke) = &options.stroke {
                    style = style.with_stroke_color(Some(stroke.clone()));
                }
                run.with_style(style)
            });
            if let MatchOutcome::Matched { start, end } = outcome {
                matched = true;
                report.glyphs_recolored += end - start;
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    page = page.number,
                    uri = %link.uri,
                    start,
                    end,
                    "recolored link text"
                );
            }
        }
        if matched {
            report.links_matched += 1;
        }
    }

    report
}

/// Report the text under each hyperlink on `page` without mutating it.
///
/// Returns one entry per hyperlink, in annotation order; links with no
/// text under them yield an empty string.
pub fn link_texts(page: &Page) -> Vec<LinkText> {
    page.hyperlinks
        .iter()
        .map(|link| {
            let mut text = String::new();
            for obj in &page.text_objects {
                if let MatchOutcome::Matched { start, end } = match_region(obj, &link.rect) {
                    for glyph in obj.glyphs().skip(start).take(end - start) {
                        text.push_str(&glyph.text);
                    }
                }
            }
            LinkText {
                uri: link.uri.clone(),
                text,
            }
        })
        .collect()
}
