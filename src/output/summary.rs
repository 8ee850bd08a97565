use indexmap::IndexMap;
use serde::Serialize;

use super::parties::format_parties;
use crate::extract::types::CaseRecord;

pub const NOT_AVAILABLE: &str = "Not available";

/// The summary shown after a lookup: court, formatted parties and the three
/// headline dates/stages, defaulted when the page did not carry them.
#[derive(Debug, Clone, Serialize)]
pub struct BasicInfo {
    pub court_info: String,
    pub parties: String,
    pub filing_date: String,
    pub next_hearing: String,
    pub case_stage: String,
}

pub fn basic_info(record: &CaseRecord) -> BasicInfo {
    BasicInfo {
        court_info: record.court_info.clone(),
        parties: format_parties(&record.parties),
        filing_date: field(&record.case_metadata, "Filing Date"),
        next_hearing: field(&record.case_status, "Next Hearing Date"),
        case_stage: field(&record.case_status, "Case Stage"),
    }
}

fn field(section: &IndexMap<String, String>, key: &str) -> String {
    section.get(key).cloned().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::parties::PARTIES_NOT_FOUND;

    #[test]
    fn pulls_headline_fields_from_their_sections() {
        let mut record = CaseRecord::default();
        record.case_metadata.insert("Filing Date".to_string(), "01-01-2021".to_string());
        record.case_status.insert("Next Hearing Date".to_string(), "05-05-2021".to_string());
        record.case_status.insert("Case Stage".to_string(), "Arguments".to_string());

        let info = basic_info(&record);
        assert_eq!(info.filing_date, "01-01-2021");
        assert_eq!(info.next_hearing, "05-05-2021");
        assert_eq!(info.case_stage, "Arguments");
    }

    #[test]
    fn defaults_when_sections_lack_keys() {
        let info = basic_info(&CaseRecord::default());
        assert_eq!(info.filing_date, NOT_AVAILABLE);
        assert_eq!(info.next_hearing, NOT_AVAILABLE);
        assert_eq!(info.case_stage, NOT_AVAILABLE);
        assert_eq!(info.parties, PARTIES_NOT_FOUND);
    }
}
