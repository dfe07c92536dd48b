//! Markup-scanning fallback for responses that are not structured JSON.
//!
//! Result containers are located by a class-name heuristic rather than fixed
//! selectors, since the endpoint's markup is not under our control. Only the
//! title, file name, URL, and page index can be recovered on this path.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::record::Record;

/// Scans a markup body for result containers.
///
/// `has_more` comes from an explicit `rel="next"` link when present, falling
/// back to a scan of a pagination container for "next" anchor text.
pub(super) fn parse(html: &str, page: u64) -> (Vec<Record>, bool) {
    let document = Html::parse_document(html);

    let mut records = Vec::new();
    for container in result_containers(&document) {
        let Some(url) = first_anchor_href(container) else {
            continue;
        };
        let file_name = url.rsplit('/').next().unwrap_or_default().to_string();
        let title = first_heading_or_anchor_text(container)
            .unwrap_or_else(|| "Untitled".to_string());

        records.push(Record {
            title,
            file_name,
            url,
            document_id: None,
            file_size: None,
            total_words: None,
            start_page: None,
            end_page: None,
            is_chunked: None,
            indexed_at: None,
            page,
        });
    }

    let has_more = has_next_link(&document);
    debug!(count = records.len(), has_more, "markup response scanned");
    (records, has_more)
}

/// Candidate containers: `article`/`div` elements whose class contains
/// "result", falling back to `div` elements whose class contains "item".
fn result_containers(document: &Html) -> Vec<ElementRef<'_>> {
    let Ok(candidates) = Selector::parse("article, div") else {
        return Vec::new();
    };

    let results: Vec<ElementRef<'_>> = document
        .select(&candidates)
        .filter(|element| class_contains(*element, "result"))
        .collect();
    if !results.is_empty() {
        return results;
    }

    document
        .select(&candidates)
        .filter(|element| element.value().name() == "div" && class_contains(*element, "item"))
        .collect()
}

fn class_contains(element: ElementRef<'_>, needle: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| class.to_ascii_lowercase().contains(needle))
}

fn first_anchor_href(container: ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse("a[href]").ok()?;
    container
        .select(&selector)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
}

fn first_heading_or_anchor_text(container: ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse("h2, h3, h4, a").ok()?;
    container
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

fn has_next_link(document: &Html) -> bool {
    if let Ok(rel_next) = Selector::parse(r#"a[rel~="next"]"#)
        && document.select(&rel_next).next().is_some()
    {
        return true;
    }

    let (Ok(nav), Ok(anchor)) = (Selector::parse("nav"), Selector::parse("a")) else {
        return false;
    };
    document
        .select(&nav)
        .filter(|element| class_contains(*element, "pag"))
        .any(|pagination| {
            pagination.select(&anchor).any(|link| {
                link.text()
                    .collect::<String>()
                    .to_ascii_lowercase()
                    .contains("next")
            })
        })
}
