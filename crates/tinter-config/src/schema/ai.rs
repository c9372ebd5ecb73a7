use serde::{Deserialize, Serialize};

/// AI transform settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Gemini model used for transforms.
    pub model: String,
    /// Environment variable holding the API key. `API_KEY` is consulted
    /// when this one is unset.
    pub api_key_env: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Built-in style directive applied by `remix`.
    pub style: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            temperature: 0.7,
            max_tokens: 8192,
            timeout_secs: 60,
            style: "matrix".into(),
        }
    }
}
