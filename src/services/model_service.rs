use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::GroundingChunk,
};

/// Text and citations returned by the model for one prompt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelReply {
    pub text: String,
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends `prompt` to the model with web search enabled.
    async fn generate(&self, prompt: &str) -> AppResult<ModelReply>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Gemini `generateContent` client with the Google Search tool enabled.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

fn request_body(prompt: &str) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        tools: vec![Tool {
            google_search: GoogleSearch {},
        }],
    }
}

/// Reads the first candidate's text and citations from a response body.
fn parse_generate_response(body: &str) -> AppResult<ModelReply> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Upstream("Model returned no candidates".to_string()))?;

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let grounding_chunks = candidate
        .grounding_metadata
        .map(|metadata| metadata.grounding_chunks)
        .unwrap_or_default();

    Ok(ModelReply {
        text,
        grounding_chunks,
    })
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => format!("Model API returned {}: {}", status, body.trim()),
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> AppResult<ModelReply> {
        log::debug!("Calling model {} ({} prompt bytes)", self.model, prompt.len());

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Upstream(error_message(status, &body)));
        }

        parse_generate_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_enables_google_search() {
        let body = serde_json::to_value(request_body("find Acme")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "find Acme"}]}],
                "tools": [{"google_search": {}}]
            })
        );
    }

    #[test]
    fn test_endpoint_uses_model_and_trims_slash() {
        let mut config = Config::test_config();
        config.api_base_url = "https://example.test/".to_string();
        config.model = "gemini-2.5-pro".to_string();

        let client = GeminiClient::new(&config);
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn test_parses_text_and_grounding_chunks() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "Company Name: Acme Corp\n"},
                    {"text": "Country: USA"}
                ]},
                "groundingMetadata": {
                    "webSearchQueries": ["Acme Corp registry"],
                    "groundingChunks": [
                        {"web": {"uri": "https://acme.com", "title": "acme.com"}},
                        {"web": {"uri": "https://sec.gov/acme", "title": "sec.gov"}}
                    ]
                }
            }]
        })
        .to_string();

        let reply = parse_generate_response(&body).unwrap();
        assert_eq!(reply.text, "Company Name: Acme Corp\nCountry: USA");
        assert_eq!(
            reply.grounding_chunks,
            vec![
                GroundingChunk::web("https://acme.com", "acme.com"),
                GroundingChunk::web("https://sec.gov/acme", "sec.gov"),
            ]
        );
    }

    #[test]
    fn test_missing_grounding_metadata_gives_no_sources() {
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": "Website: Not found"}]}}]
        })
        .to_string();

        let reply = parse_generate_response(&body).unwrap();
        assert_eq!(reply.text, "Website: Not found");
        assert!(reply.grounding_chunks.is_empty());
    }

    #[test]
    fn test_no_candidates_is_upstream_error() {
        let err = parse_generate_response(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn test_malformed_body_is_upstream_error() {
        let err = parse_generate_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            error_message(reqwest::StatusCode::TOO_MANY_REQUESTS, body),
            "Quota exceeded"
        );
        assert_eq!(
            error_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down"),
            "Model API returned 502 Bad Gateway: upstream down"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_upstream_error() {
        let client = GeminiClient::new(&Config::test_config());
        let err = client.generate("find Acme").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
