use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        company_search_service::CompanySearchService,
        model_service::{GeminiClient, ModelClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<CompanySearchService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(GeminiClient::new(&config));
        Self::with_client(config, client)
    }

    pub fn with_client(config: Config, client: Arc<dyn ModelClient>) -> Self {
        Self {
            search_service: Arc::new(CompanySearchService::new(client)),
            config: Arc::new(config),
        }
    }
}
