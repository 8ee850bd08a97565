use indexmap::IndexMap;
use serde::Serialize;

/// Petitioners, respondents and the advocates appearing for them.
/// Duplicate names are kept; the source page may repeat them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartyInfo {
    pub petitioners: Vec<String>,
    pub respondents: Vec<String>,
    pub advocates: Vec<String>,
}

impl PartyInfo {
    pub fn is_empty(&self) -> bool {
        self.petitioners.is_empty() && self.respondents.is_empty() && self.advocates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.petitioners.len() + self.respondents.len() + self.advocates.len()
    }
}

/// Header-driven table. Every row has exactly `headers.len()` cells; rows
/// that arrived with a different cell count were dropped at extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderRow {
    pub cells: Vec<String>,
    /// Target of the first hyperlink in the row. `None` means the row has no
    /// order document link and serialises as an explicit null.
    pub pdf_link: Option<String>,
}

/// Interim orders: the same row contract as [`Table`] plus a per-row link.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderTable {
    pub headers: Vec<String>,
    pub rows: Vec<OrderRow>,
}

impl OrderTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Everything pulled from one case page. Built once per lookup, held in
/// memory for report generation and the summary, never persisted as-is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaseRecord {
    pub court_info: String,
    pub case_metadata: IndexMap<String, String>,
    pub parties: PartyInfo,
    pub acts_sections: IndexMap<String, String>,
    pub case_status: IndexMap<String, String>,
    pub case_history: Table,
    pub interim_orders: OrderTable,
}
