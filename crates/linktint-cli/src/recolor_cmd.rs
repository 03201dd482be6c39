use std::path::Path;

use linktint::{ContentSink, PageSource, RecolorOptions, recolor_hyperlinks};

use crate::color_arg::parse_color;
use crate::document::{open_document, resolve_pages};

pub fn run(
    file: &Path,
    color: &str,
    pages: Option<&str>,
    output: Option<&Path>,
) -> Result<(), i32> {
    let fill = parse_color(color).map_err(|e| {
        eprintln!("Error: {e}");
        2
    })?;
    let options = RecolorOptions::fill(fill);

    let mut doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;

    for &idx in &page_indices {
        let mut page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;

        let report = recolor_hyperlinks(&mut page, &options);
        eprintln!(
            "page {}: {}/{} links matched, {} glyphs recolored",
            idx + 1,
            report.links_matched,
            report.links_total,
            report.glyphs_recolored,
        );

        doc.commit(page).map_err(|e| {
            eprintln!("Error committing page {}: {e}", idx + 1);
            1
        })?;
    }

    let json = doc.to_json();
    match output {
        Some(path) => std::fs::write(path, json).map_err(|e| {
            eprintln!("Error writing {}: {e}", path.display());
            1
        })?,
        None => println!("{json}"),
    }

    Ok(())
}
