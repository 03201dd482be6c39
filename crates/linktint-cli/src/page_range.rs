/// Parse a page range string like "1,3-5" into a sorted list of 0-indexed
/// page numbers.
///
/// Input is 1-indexed (user-facing). Output is 0-indexed (internal).
/// Returns an error for invalid input (page 0, malformed ranges, pages past
/// the end of the document).
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start_str, end_str)) = part.split_once('-') {
            let start = parse_page_number(start_str, page_count)?;
            let end = parse_page_number(end_str, page_count)?;
            for p in start..=end {
                pages.push(p - 1); // convert to 0-indexed
            }
        } else {
            let page = parse_page_number(part, page_count)?;
            pages.push(page - 1);
        }
    }

    pages.sort();
    pages.dedup();
    Ok(pages)
}

fn parse_page_number(s: &str, page_count: usize) -> Result<usize, String> {
    let page: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid page number: '{}'", s.trim()))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!(
            "page {page} exceeds document page count ({page_count})"
        ));
    }
    Ok(page)
}
