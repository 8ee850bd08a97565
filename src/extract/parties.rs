use scraper::{ElementRef, Html};

use super::strategy::{self, first_match};
use super::types::PartyInfo;

/// Petitioners, respondents and advocates.
///
/// The primary strategy finds the labelled party container and reads the
/// block following each of the three labels independently; any label can be
/// missing without affecting the others. If no container exists at all, a
/// page-wide fallback pulls the cell adjacent to every "Petitioner" or
/// "Respondent" label. Advocates have no fallback; they only appear in the
/// labelled container.
pub fn parties(doc: &Html) -> PartyInfo {
    let container = first_match(
        doc,
        &[
            &|d: &Html| strategy::select_first(d, "div.party-info"),
            &|d: &Html| {
                strategy::heading_containing(d, "Petitioner and Advocate")
                    .and_then(|h| strategy::next_sibling_named(h, "div"))
            },
        ],
    );

    if let Some(container) = container {
        return PartyInfo {
            petitioners: labelled_lines(container, "Petitioner"),
            respondents: labelled_lines(container, "Respondent"),
            advocates: labelled_lines(container, "Advocate"),
        };
    }

    PartyInfo {
        petitioners: adjacent_cells(doc, "Petitioner"),
        respondents: adjacent_cells(doc, "Respondent"),
        advocates: Vec::new(),
    }
}

/// Lines of the element following the first label match inside `container`.
fn labelled_lines(container: ElementRef<'_>, label: &str) -> Vec<String> {
    strategy::descendant_containing(container, label)
        .and_then(strategy::next_sibling_element)
        .map(strategy::text_lines)
        .unwrap_or_default()
}

/// Page-wide: the first cell after every occurrence of `label`.
fn adjacent_cells(doc: &Html, label: &str) -> Vec<String> {
    strategy::elements_containing(doc, label)
        .into_iter()
        .filter_map(|el| strategy::following_td(doc, el))
        .map(strategy::cell_text)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER_PAGE: &str = "<h3>Petitioner and Advocate</h3>\
        <div class=\"party-info\">\
        <span>Petitioner</span><div>1) Ram Kumar<br>2) Shyam Kumar</div>\
        <span>Respondent</span><div>State of Maharashtra</div>\
        <span>Advocate</span><div>Adv. Joshi</div>\
        </div>";

    #[test]
    fn primary_container_splits_lines() {
        let doc = Html::parse_document(CONTAINER_PAGE);
        let p = parties(&doc);
        assert_eq!(p.petitioners, vec!["1) Ram Kumar", "2) Shyam Kumar"]);
        assert_eq!(p.respondents, vec!["State of Maharashtra"]);
        assert_eq!(p.advocates, vec!["Adv. Joshi"]);
    }

    #[test]
    fn labels_fail_independently() {
        let doc = Html::parse_document(
            "<div class=\"party-info\"><span>Respondent</span><div>Union of India</div></div>",
        );
        let p = parties(&doc);
        assert!(p.petitioners.is_empty());
        assert_eq!(p.respondents, vec!["Union of India"]);
        assert!(p.advocates.is_empty());
    }

    #[test]
    fn fallback_reads_adjacent_cells_without_advocates() {
        let doc = Html::parse_document(
            "<table>\
             <tr><td>Petitioner</td><td>Ram Kumar</td></tr>\
             <tr><td>Respondent</td><td>State</td></tr>\
             </table>",
        );
        let p = parties(&doc);
        assert_eq!(p.petitioners, vec!["Ram Kumar"]);
        assert_eq!(p.respondents, vec!["State"]);
        assert!(p.advocates.is_empty());
    }

    #[test]
    fn all_defaults_on_empty_page() {
        let doc = Html::parse_document("<p>nothing</p>");
        assert!(parties(&doc).is_empty());
    }
}
