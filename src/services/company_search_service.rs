use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{SearchResult, SearchState},
        dto::request::SearchRequest,
    },
    services::{
        model_service::ModelClient, prompt_builder::build_prompt,
        response_parser::parse_response, search_session::SearchSession,
    },
};

pub struct CompanySearchService {
    client: Arc<dyn ModelClient>,
    session: Arc<SearchSession>,
}

impl CompanySearchService {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            session: Arc::new(SearchSession::new()),
        }
    }

    /// Researches one company. Blank queries are rejected before any model
    /// call; model failures come back as `AppError::Upstream`.
    pub async fn search(&self, request: &SearchRequest) -> AppResult<SearchResult> {
        request.validate()?;

        let prompt = build_prompt(&request.query, request.deep_search);
        log::info!(
            "Searching company info for '{}' (deep search: {})",
            request.query,
            request.deep_search
        );

        let reply = self.client.generate(&prompt).await.map_err(|e| {
            log::error!("Error calling model API: {}", e);
            match e {
                AppError::Upstream(message) => AppError::Upstream(message),
                other => AppError::Upstream(other.to_string()),
            }
        })?;

        let company_info = parse_response(&reply.text);
        log::info!(
            "Model reply parsed for '{}' with {} sources",
            request.query,
            reply.grounding_chunks.len()
        );

        Ok(SearchResult::new(
            &request.query,
            request.deep_search,
            company_info,
            reply.grounding_chunks,
        ))
    }

    /// Runs a search as the session's single active query, recording the
    /// outcome so the UI can poll it. If the caller drops this future the
    /// session leaves the loading state on its own.
    pub async fn run(&self, request: SearchRequest) -> AppResult<SearchResult> {
        let active = self
            .session
            .begin(&request.query, request.deep_search)
            .await?;

        match self.search(&request).await {
            Ok(result) => {
                active.complete(result.clone()).await;
                Ok(result)
            }
            Err(e) => {
                active.fail(e.to_string()).await;
                Err(e)
            }
        }
    }

    pub async fn state(&self) -> SearchState {
        self.session.snapshot().await
    }

    pub async fn reset(&self) {
        self.session.reset().await;
    }
}
