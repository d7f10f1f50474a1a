use std::env;
use secrecy::SecretString;

use crate::{
    errors::{AppError, AppResult},
    services::verification::VerificationAliases,
};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub model: String,
    pub api_base_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub verification_aliases: VerificationAliases,
}

impl Config {
    /// Reads configuration from the process environment.
    /// Fails when no API key is set, which callers treat as fatal at startup.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration("API_KEY environment variable not set".to_string())
            })?;

        let verification_aliases = match lookup("VERIFIED_ALIASES") {
            Some(value) => VerificationAliases::parse(&value)?,
            None => VerificationAliases::default(),
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: lookup("GEMINI_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            web_server_host: lookup("WEB_SERVER_HOST")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.is_empty()),
            verification_aliases,
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: SecretString::from("test_api_key".to_string()),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            verification_aliases: VerificationAliases::default(),
        }
    }
}
