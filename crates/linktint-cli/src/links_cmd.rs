use std::path::Path;

use linktint::{PageSource, link_texts};

use crate::cli::OutputFormat;
use crate::document::{JsonDocument, open_document, resolve_pages};

pub fn run(file: &Path, pages: Option<&str>, format: &OutputFormat) -> Result<(), i32> {
    let doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;

    match format {
        OutputFormat::Text => write_text(&doc, &page_indices),
        OutputFormat::Json => write_json(&doc, &page_indices),
        OutputFormat::Csv => write_csv(&doc, &page_indices),
    }
}

fn write_text(doc: &JsonDocument, page_indices: &[usize]) -> Result<(), i32> {
    println!("page\turi\ttext");

    for &idx in page_indices {
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;

        for link in link_texts(&page) {
            println!("{}\t{}\t{}", idx + 1, link.uri, link.text);
        }
    }

    Ok(())
}

fn write_json(doc: &JsonDocument, page_indices: &[usize]) -> Result<(), i32> {
    let mut all_links = Vec::new();

    for &idx in page_indices {
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;

        for link in link_texts(&page) {
            all_links.push(serde_json::json!({
                "page": idx + 1,
                "uri": link.uri,
                "text": link.text,
            }));
        }
    }

    let json_str = serde_json::to_string(&all_links).unwrap();
    println!("{json_str}");

    Ok(())
}

fn write_csv(doc: &JsonDocument, page_indices: &[usize]) -> Result<(), i32> {
    println!("page,uri,text");

    for &idx in page_indices {
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;

        for link in link_texts(&page) {
            println!("{},{},{}", idx + 1, csv_escape(&link.uri), csv_escape(&link.text));
        }
    }

    Ok(())
}

/// Quote a CSV field if it contains a comma, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
