use indexmap::IndexMap;
use scraper::Html;

use super::strategy::{self, first_match};

/// Acts and sections table: act name in the first cell, section in the
/// second. A repeated act name keeps the later row's section.
pub fn acts_sections(doc: &Html) -> IndexMap<String, String> {
    let table = first_match(
        doc,
        &[
            &|d: &Html| strategy::select_first(d, "table.acts-sections"),
            &|d: &Html| {
                strategy::heading_containing(d, "Acts")
                    .and_then(|h| strategy::next_sibling_named(h, "table"))
            },
        ],
    );
    let Some(table) = table else {
        return IndexMap::new();
    };

    let mut acts = IndexMap::new();
    for row in strategy::rows(table) {
        let cells = strategy::cells(row);
        if cells.len() >= 2 {
            acts.insert(cells[0].clone(), cells[1].clone());
        }
    }
    acts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_act_to_section() {
        let doc = Html::parse_document(
            "<h3>Acts and Sections</h3><table>\
             <tr><td>Indian Penal Code</td><td>420</td></tr>\
             <tr><td>CrPC</td><td>156(3)</td></tr>\
             </table>",
        );
        let acts = acts_sections(&doc);
        assert_eq!(acts.get("Indian Penal Code").map(String::as_str), Some("420"));
        assert_eq!(acts.get("CrPC").map(String::as_str), Some("156(3)"));
    }

    #[test]
    fn later_row_overwrites_duplicate_act() {
        let doc = Html::parse_document(
            "<table class=\"acts-sections\">\
             <tr><td>Indian Penal Code</td><td>406</td></tr>\
             <tr><td>Indian Penal Code</td><td>420</td></tr>\
             </table>",
        );
        let acts = acts_sections(&doc);
        assert_eq!(acts.len(), 1);
        assert_eq!(acts.get("Indian Penal Code").map(String::as_str), Some("420"));
    }

    #[test]
    fn empty_on_missing_table() {
        let doc = Html::parse_document("<p>no acts</p>");
        assert!(acts_sections(&doc).is_empty());
    }
}
