pub mod company_search_service;
pub mod model_service;
pub mod prompt_builder;
pub mod response_parser;
pub mod search_session;
pub mod source_links;
pub mod verification;
