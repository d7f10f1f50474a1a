use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{CompanyInfo, GroundingChunk};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub query: String,
    pub deep_search: bool,
    pub company_info: CompanyInfo,
    pub sources: Vec<GroundingChunk>,
    pub retrieved_at: DateTime<Utc>,
}

impl SearchResult {
    pub fn new(
        query: &str,
        deep_search: bool,
        company_info: CompanyInfo,
        sources: Vec<GroundingChunk>,
    ) -> Self {
        SearchResult {
            id: Uuid::new_v4().to_string(),
            query: query.to_string(),
            deep_search,
            company_info,
            sources,
            retrieved_at: Utc::now(),
        }
    }
}

/// State of the single active search as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchState {
    #[default]
    Idle,
    #[serde(rename_all = "camelCase")]
    Loading { query: String, deep_search: bool },
    Ready { result: Box<SearchResult> },
    Error { message: String },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }
}
