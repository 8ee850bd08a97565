//! Best-effort extraction of a case page into a structured record.
//!
//! Each extractor owns its lookup strategies and degrades to an empty value
//! when its section is missing or malformed; no extractor failure can abort
//! the others or the aggregate.

mod acts;
mod court;
mod details;
mod parties;
mod strategy;
mod tables;
pub mod types;

pub use court::COURT_INFO_UNAVAILABLE;

use scraper::Html;
use types::CaseRecord;

/// Run every extractor once, in fixed order, against one fetched page.
/// Deterministic for a given document; never fails.
pub fn extract_record(html: &str) -> CaseRecord {
    let doc = Html::parse_document(html);
    CaseRecord {
        court_info: court::court_info(&doc),
        case_metadata: details::case_metadata(&doc),
        parties: parties::parties(&doc),
        acts_sections: acts::acts_sections(&doc),
        case_status: details::case_status(&doc),
        case_history: tables::case_history(&doc),
        interim_orders: tables::interim_orders(&doc),
    }
}
