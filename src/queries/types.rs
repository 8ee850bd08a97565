use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct QueryRow {
    pub id: i64,
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
    pub parties: Option<String>,
    pub filing_date: Option<String>,
    pub next_hearing: Option<String>,
    pub order_link: Option<String>,
    pub queried_at: DateTime<Utc>,
}

// Result envelope
#[derive(Serialize)]
pub struct QueryList {
    pub queries: Vec<QueryRow>,
}
