//! Gemini API client configuration.

use std::fmt;

use tinter_config::schema::AiConfig;

/// Consulted when the configured key variable is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_secs: u64,
    /// Requested `responseMimeType`; `None` leaves it to the model.
    pub response_mime_type: Option<String>,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("response_mime_type", &self.response_mime_type)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            max_tokens: 8192,
            temperature: 0.7,
            timeout_secs: 60,
            response_mime_type: None,
        }
    }

    /// Build from the `[ai]` config section, reading the key from the
    /// environment. Returns `None` when no key is set.
    pub fn from_config(config: &AiConfig) -> Option<Self> {
        let api_key = api_key_from_env(&config.api_key_env)?;
        Some(
            Self::new(api_key)
                .with_model(&config.model)
                .with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature)
                .with_timeout_secs(config.timeout_secs),
        )
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_json_output(mut self) -> Self {
        self.response_mime_type = Some("application/json".to_string());
        self
    }
}

/// The API key from `primary`, falling back to `API_KEY`. Blank values
/// count as unset.
pub fn api_key_from_env(primary: &str) -> Option<String> {
    [primary, FALLBACK_API_KEY_ENV]
        .into_iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
