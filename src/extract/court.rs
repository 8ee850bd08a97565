use scraper::Html;

use super::strategy::{self, first_match};

pub const COURT_INFO_UNAVAILABLE: &str = "Court information not available";

/// Court name/info block. Tries the block preceding the "Case Details"
/// heading, then the dedicated info block, then the page's top-level heading,
/// and finally degrades to a fixed sentinel. Never fails.
pub fn court_info(doc: &Html) -> String {
    first_match(
        doc,
        &[
            &|d: &Html| {
                strategy::heading_containing(d, "Case Details")
                    .and_then(|h| strategy::prev_sibling_named(h, "div"))
                    .map(strategy::block_text)
                    .filter(|s| !s.is_empty())
            },
            &|d: &Html| {
                strategy::select_first(d, "div.court-info")
                    .map(strategy::block_text)
                    .filter(|s| !s.is_empty())
            },
            &|d: &Html| {
                strategy::select_first(d, "h1")
                    .map(strategy::block_text)
                    .filter(|s| !s.is_empty())
            },
        ],
    )
    .unwrap_or_else(|| COURT_INFO_UNAVAILABLE.to_string())
}
