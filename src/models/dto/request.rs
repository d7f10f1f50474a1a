use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const BLANK_QUERY_MESSAGE: &str = "Please enter a search query.";

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub query: String,

    #[serde(default)]
    pub deep_search: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, deep_search: bool) -> Self {
        Self {
            query: query.into(),
            deep_search,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_query").with_message(Cow::Borrowed(BLANK_QUERY_MESSAGE)));
    }
    Ok(())
}
