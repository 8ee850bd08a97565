use anyhow::{Result, bail};
use serde::Serialize;

use crate::output::summary::BasicInfo;

/// One user-supplied lookup, trimmed at construction.
#[derive(Debug, Clone)]
pub struct CaseQuery {
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
}

impl CaseQuery {
    pub fn new(case_type: &str, case_number: &str, filing_year: &str) -> Self {
        Self {
            case_type: case_type.trim().to_string(),
            case_number: case_number.trim().to_string(),
            filing_year: filing_year.trim().to_string(),
        }
    }

    /// All three fields are required before any browser or DB I/O.
    pub fn validate(&self) -> Result<()> {
        if self.case_type.is_empty() || self.case_number.is_empty() || self.filing_year.is_empty() {
            bail!("case type, case number and filing year are all required");
        }
        Ok(())
    }
}

// Result envelope
#[derive(Serialize)]
pub struct FetchResult {
    pub basic_info: BasicInfo,
    pub pdf_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_input_fields() {
        let q = CaseQuery::new(" Civil ", " 123 ", " 2021 ");
        assert_eq!(q.case_type, "Civil");
        assert_eq!(q.case_number, "123");
        assert_eq!(q.filing_year, "2021");
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(CaseQuery::new("Civil", "123", "2021").validate().is_ok());
        assert!(CaseQuery::new("", "123", "2021").validate().is_err());
        assert!(CaseQuery::new("Civil", "  ", "2021").validate().is_err());
        assert!(CaseQuery::new("Civil", "123", "").validate().is_err());
    }
}
