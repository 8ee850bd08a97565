use indexmap::IndexMap;
use scraper::Html;

use super::strategy::{self, first_match};

/// Case details table: filing/registration numbers and dates, CNR, etc.
/// Cells are read pairwise left to right within each row; keys lose a
/// trailing colon; a leftover unpaired cell is dropped.
pub fn case_metadata(doc: &Html) -> IndexMap<String, String> {
    let table = first_match(
        doc,
        &[
            &|d: &Html| strategy::select_first(d, "table.case-details"),
            &|d: &Html| {
                strategy::heading_containing(d, "Case Details")
                    .and_then(|h| strategy::next_sibling_named(h, "table"))
            },
        ],
    );
    let Some(table) = table else {
        return IndexMap::new();
    };

    let mut metadata = IndexMap::new();
    for row in strategy::rows(table) {
        let cells = strategy::cells(row);
        for pair in cells.chunks_exact(2) {
            let key = pair[0].trim_end_matches(':').trim().to_string();
            if key.is_empty() {
                continue;
            }
            metadata.insert(key, pair[1].trim().to_string());
        }
    }
    metadata
}

/// Case status table: first/next hearing date, stage, court and judge.
/// Strictly one key/value pair per row; rows with fewer than two cells are
/// skipped entirely.
pub fn case_status(doc: &Html) -> IndexMap<String, String> {
    let table = first_match(
        doc,
        &[
            &|d: &Html| strategy::select_first(d, "table.case-status"),
            &|d: &Html| {
                strategy::heading_containing(d, "Case Status")
                    .and_then(|h| strategy::next_sibling_named(h, "table"))
            },
        ],
    );
    let Some(table) = table else {
        return IndexMap::new();
    };

    let mut status = IndexMap::new();
    for row in strategy::rows(table) {
        let cells = strategy::cells(row);
        if cells.len() < 2 {
            continue;
        }
        let key = cells[0].trim_end_matches(':').trim().to_string();
        if key.is_empty() {
            continue;
        }
        status.insert(key, cells[1].clone());
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_reads_cells_pairwise_and_strips_colon() {
        let doc = Html::parse_document(
            "<table class=\"case-details\"><tr>\
             <td>Filing Date:</td><td>12-01-2020</td>\
             <td>CNR Number:</td><td>MHPU010012342020</td>\
             </tr></table>",
        );
        let meta = case_metadata(&doc);
        assert_eq!(meta.get("Filing Date").map(String::as_str), Some("12-01-2020"));
        assert_eq!(meta.get("CNR Number").map(String::as_str), Some("MHPU010012342020"));
        assert_eq!(meta.len(), 2);
    }

    #[test]
    fn metadata_drops_odd_trailing_cell() {
        let doc = Html::parse_document(
            "<table class=\"case-details\"><tr>\
             <td>Case Type:</td><td>Civil</td><td>Orphan</td>\
             </tr></table>",
        );
        let meta = case_metadata(&doc);
        assert_eq!(meta.len(), 1);
        assert!(!meta.contains_key("Orphan"));
    }

    #[test]
    fn metadata_skips_empty_keys() {
        let doc = Html::parse_document(
            "<table class=\"case-details\"><tr><td> </td><td>stray</td></tr></table>",
        );
        assert!(case_metadata(&doc).is_empty());
    }

    #[test]
    fn metadata_falls_back_to_table_after_heading() {
        let doc = Html::parse_document(
            "<h3>Case Details</h3><table><tr><td>Filing Number:</td><td>123/2020</td></tr></table>",
        );
        let meta = case_metadata(&doc);
        assert_eq!(meta.get("Filing Number").map(String::as_str), Some("123/2020"));
    }

    #[test]
    fn metadata_empty_when_table_missing() {
        let doc = Html::parse_document("<p>no tables</p>");
        assert!(case_metadata(&doc).is_empty());
    }

    #[test]
    fn status_one_pair_per_row() {
        let doc = Html::parse_document(
            "<table class=\"case-status\">\
             <tr><td>Next Hearing Date</td><td>05-05-2021</td><td>ignored</td></tr>\
             <tr><td>Case Stage</td><td>Arguments</td></tr>\
             <tr><td>lonely</td></tr>\
             </table>",
        );
        let status = case_status(&doc);
        assert_eq!(status.get("Next Hearing Date").map(String::as_str), Some("05-05-2021"));
        assert_eq!(status.get("Case Stage").map(String::as_str), Some("Arguments"));
        assert_eq!(status.len(), 2);
    }

    #[test]
    fn status_preserves_document_order() {
        let doc = Html::parse_document(
            "<h3>Case Status</h3><table>\
             <tr><td>First Hearing Date</td><td>01-02-2020</td></tr>\
             <tr><td>Case Stage</td><td>Evidence</td></tr>\
             </table>",
        );
        let status = case_status(&doc);
        let keys: Vec<&str> = status.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["First Hearing Date", "Case Stage"]);
    }
}
