use anyhow::{Context, Result};

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-2025-04-14";
pub const DEFAULT_RELAY_URL: &str = "http://localhost:8080/api/v1/mentor/chat";

/// Application configuration loaded from environment variables.
///
/// `OPENAI_API_KEY` is optional at startup. The mentor relay reports its absence
/// per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_api_url: String,
    pub openai_model: String,
    pub relay_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_api_url: optional_env("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            openai_model: optional_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            relay_url: optional_env("MENTOR_RELAY_URL")
                .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("CAREERLENS_TEST_BLANK", "   ");
        assert_eq!(optional_env("CAREERLENS_TEST_BLANK"), None);
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("CAREERLENS_TEST_VALUE", "  sk-test  ");
        assert_eq!(
            optional_env("CAREERLENS_TEST_VALUE").as_deref(),
            Some("sk-test")
        );
    }

    #[test]
    fn test_optional_env_missing() {
        assert_eq!(optional_env("CAREERLENS_TEST_DEFINITELY_MISSING"), None);
    }
}
