use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://html.duckduckgo.com";
pub const DEFAULT_SEARCH_MAX_RESULTS: usize = 5;

#[derive(Clone, Debug)]
pub struct ProductSafeConfig {
    pub llm: LLMConfig,
    pub search: SearchConfig,
}

/// Model-provider settings. One value is built per analysis so the
/// credential never lives in shared state.
#[derive(Clone)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl LLMConfig {
    pub fn with_api_key(&self, api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: api_key.into(),
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub base_url: String,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            max_results: DEFAULT_SEARCH_MAX_RESULTS,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_key_keeps_model_settings() {
        let base = LLMConfig {
            gemini_api_key: String::new(),
            gemini_model: "gemini-test".to_string(),
            gemini_base_url: "http://localhost:1234".to_string(),
        };

        let config = base.with_api_key("secret-key");
        assert_eq!(config.gemini_api_key, "secret-key");
        assert_eq!(config.gemini_model, "gemini-test");
        assert_eq!(config.gemini_base_url, "http://localhost:1234");
        assert!(base.gemini_api_key.is_empty());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = LLMConfig::default().with_api_key("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
