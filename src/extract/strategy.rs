//! Ranked lookup helpers shared by the extractor family.
//!
//! Every section of the case page is located by an ordered list of pure
//! strategies over the parsed document; the first one that produces a value
//! wins. Lookup failure surfaces as `None`, never as an error.

use scraper::{ElementRef, Html, Selector};

/// Try strategies in order; first success wins.
pub fn first_match<'a, T>(doc: &'a Html, strategies: &[&dyn Fn(&'a Html) -> Option<T>]) -> Option<T> {
    strategies.iter().find_map(|s| s(doc))
}

pub fn select_first<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    doc.select(&sel).next()
}

/// First heading (h1-h4) whose text contains `needle`.
pub fn heading_containing<'a>(doc: &'a Html, needle: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse("h1, h2, h3, h4").ok()?;
    doc.select(&sel)
        .find(|h| h.text().collect::<String>().contains(needle))
}

/// First following sibling element with the given tag name.
pub fn next_sibling_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == name)
}

/// Nearest preceding sibling element with the given tag name.
pub fn prev_sibling_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == name)
}

/// Next sibling element regardless of tag.
pub fn next_sibling_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().filter_map(ElementRef::wrap).next()
}

/// Direct text of an element's own child text nodes, not its descendants.
pub fn own_text(el: ElementRef<'_>) -> String {
    el.children()
        .filter_map(|n| n.value().as_text().map(|t| t.to_string()))
        .collect()
}

/// Non-blank trimmed lines of an element's text. Text nodes separated by
/// markup (e.g. `<br>`) come through as separate lines.
pub fn text_lines(el: ElementRef<'_>) -> Vec<String> {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// An element's text as one trimmed, newline-joined block.
pub fn block_text(el: ElementRef<'_>) -> String {
    text_lines(el).join("\n")
}

/// An element's text flattened to a single trimmed line.
pub fn cell_text(el: ElementRef<'_>) -> String {
    text_lines(el).join(" ")
}

/// First descendant whose own text contains `needle`.
pub fn descendant_containing<'a>(root: ElementRef<'a>, needle: &str) -> Option<ElementRef<'a>> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| own_text(*e).contains(needle))
}

/// All elements in the document whose own text contains `needle`.
pub fn elements_containing<'a>(doc: &'a Html, needle: &str) -> Vec<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| own_text(*e).contains(needle))
        .collect()
}

/// First `td` after `el` in document order, excluding `el`'s own descendants.
pub fn following_td<'a>(doc: &'a Html, el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut seen = false;
    for node in doc.root_element().descendants() {
        if node.id() == el.id() {
            seen = true;
            continue;
        }
        if !seen {
            continue;
        }
        let Some(e) = ElementRef::wrap(node) else { continue };
        if e.value().name() != "td" {
            continue;
        }
        if e.ancestors().any(|a| a.id() == el.id()) {
            continue;
        }
        return Some(e);
    }
    None
}

/// All `tr` elements under a table, in document order.
pub fn rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let Ok(sel) = Selector::parse("tr") else { return Vec::new() };
    table.select(&sel).collect()
}

/// Trimmed text of each `td` in a row.
pub fn cells(row: ElementRef<'_>) -> Vec<String> {
    let Ok(sel) = Selector::parse("td") else { return Vec::new() };
    row.select(&sel).map(cell_text).collect()
}
