//! Performance benchmarks for the recolor sweep.
//!
//! Covers the dominant cost paths: the no-match scan (most link/text-object
//! pairs do not intersect) and the full sweep over pages of increasing
//! density.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linktint::{
    Color, Glyph, Hyperlink, Page, Point, Rect, RecolorOptions, Run, TextObject, TextStyle,
    link_texts, recolor_hyperlinks,
};

// ---------------------------------------------------------------------------
// Fixture generators
// ---------------------------------------------------------------------------

fn style() -> TextStyle {
    TextStyle::new("Helvetica", 12.0).with_fill_color(Some(Color::Gray(0.0)))
}

/// One line of text as a single-run text object starting at (72, baseline).
fn line_object(n_chars: usize, baseline: f64) -> TextObject {
    let glyphs = (0..n_chars)
        .map(|i| {
            let x = 72.0 + i as f64 * 6.0;
            Glyph::new(
                "a",
                Point::new(x, baseline),
                Rect::new(x, baseline - 2.0, x + 6.0, baseline + 10.0),
            )
        })
        .collect();
    TextObject::new(vec![Run::new(style(), glyphs)])
}

/// A page with `n_lines` lines of `chars_per_line` glyphs each and one link
/// per `link_every` lines, each link covering the middle third of its line.
fn make_page(n_lines: usize, chars_per_line: usize, link_every: usize) -> Page {
    let mut text_objects = Vec::new();
    let mut hyperlinks = Vec::new();
    for i in 0..n_lines {
        let baseline = 720.0 - i as f64 * 14.0;
        text_objects.push(line_object(chars_per_line, baseline));
        if i % link_every == 0 {
            let x_lo = 72.0 + chars_per_line as f64 * 2.0;
            let x_hi = 72.0 + chars_per_line as f64 * 4.0;
            hyperlinks.push(Hyperlink {
                rect: Rect::new(x_lo + 0.5, baseline - 5.0, x_hi + 0.5, baseline + 5.0),
                uri: format!("https://example.com/{i}"),
            });
        }
    }
    Page {
        number: 0,
        width: 612.0,
        height: 792.0,
        text_objects,
        hyperlinks,
    }
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_recolor_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("recolor_sweep");
    let options = RecolorOptions::fill(Color::Rgb(0.0, 0.0, 1.0));

    group.bench_function("10_lines_1_link", |b| {
        let page = make_page(10, 60, 10);
        b.iter(|| {
            let mut page = page.clone();
            black_box(recolor_hyperlinks(&mut page, &options));
        });
    });

    group.bench_function("50_lines_10_links", |b| {
        let page = make_page(50, 60, 5);
        b.iter(|| {
            let mut page = page.clone();
            black_box(recolor_hyperlinks(&mut page, &options));
        });
    });

    group.bench_function("50_lines_50_links", |b| {
        let page = make_page(50, 60, 1);
        b.iter(|| {
            let mut page = page.clone();
            black_box(recolor_hyperlinks(&mut page, &options));
        });
    });

    group.finish();
}

fn bench_link_texts(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_texts");

    group.bench_function("50_lines_10_links", |b| {
        let page = make_page(50, 60, 5);
        b.iter(|| {
            black_box(link_texts(&page).len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_recolor_sweep, bench_link_texts);
criterion_main!(benches);
