//! Theme transform adapter.
//!
//! Sends a whole document to a model with a style directive and accepts
//! the answer only if it has exactly the input's field set. The result is
//! reordered to the input's key order so it serializes deterministically.

mod directive;
mod response;


use std::sync::Arc;

use async_trait::async_trait;
use tinter_config::schema::AiConfig;
use tinter_config::{ShapeMismatch, ThemeDocument};
use tracing::{debug, info, warn};

use crate::gemini::{GeminiClient, GeminiConfig};
use crate::{AiClient, AiError, Message};

pub use directive::StyleDirective;
pub use response::parse_response;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// No API key is configured. No request was attempted.
    #[error("missing API key: set {env_var}")]
    MissingCredential { env_var: String },

    #[error(transparent)]
    Service(#[from] AiError),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model returned malformed JSON: {0}")]
    Malformed(String),

    #[error("model changed the theme shape: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),
}

impl TransformError {
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, TransformError::MissingCredential { .. })
    }
}

/// Restyles a document, returning a new one of identical shape.
#[async_trait]
pub trait ThemeTransformer: Send + Sync {
    async fn transform(&self, document: &ThemeDocument) -> Result<ThemeDocument, TransformError>;
}

/// Model-backed transformer driven by a [`StyleDirective`].
///
/// Holds no per-call state; concurrent calls are independent.
pub struct RemixTransformer {
    client: Option<Arc<dyn AiClient>>,
    directive: StyleDirective,
    credential_env: String,
}

impl RemixTransformer {
    /// `client = None` means no credential is configured; every call then
    /// fails with [`TransformError::MissingCredential`].
    pub fn new(client: Option<Arc<dyn AiClient>>, directive: StyleDirective) -> Self {
        Self {
            client,
            directive,
            credential_env: AiConfig::default().api_key_env,
        }
    }

    /// Build a Gemini-backed transformer from the `[ai]` config section.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let directive = StyleDirective::builtin(&config.style).unwrap_or_else(|| {
            warn!(style = %config.style, "unknown style, using matrix");
            StyleDirective::matrix()
        });

        let client = match GeminiConfig::from_config(config) {
            Some(gemini) => {
                let client: Arc<dyn AiClient> = Arc::new(GeminiClient::new(gemini.with_json_output())?);
                Some(client)
            }
            None => {
                info!(env = %config.api_key_env, "no API key configured, AI transforms disabled");
                None
            }
        };

        Ok(Self {
            client,
            directive,
            credential_env: config.api_key_env.clone(),
        })
    }

    pub fn with_directive(mut self, directive: StyleDirective) -> Self {
        self.directive = directive;
        self
    }

    pub fn directive(&self) -> &StyleDirective {
        &self.directive
    }

    pub fn has_credential(&self) -> bool {
        self.client.is_some()
    }

    fn messages(&self, document: &ThemeDocument) -> Result<Vec<Message>, TransformError> {
        let json = serde_json::to_string(document)
            .map_err(|e| TransformError::Malformed(format!("failed to serialize input: {e}")))?;
        Ok(vec![
            Message::system(self.directive.system_instruction()),
            Message::user(format!(
                "Convert the following ComfyUI theme JSON to a {} theme:\n\n{json}",
                self.directive.name
            )),
        ])
    }
}

#[async_trait]
impl ThemeTransformer for RemixTransformer {
    async fn transform(&self, document: &ThemeDocument) -> Result<ThemeDocument, TransformError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| TransformError::MissingCredential {
                env_var: self.credential_env.clone(),
            })?;

        let messages = self.messages(document)?;
        debug!(style = %self.directive.id, source = %document.id, "requesting theme transform");

        let response = client.send_message(&messages).await?;
        let mut result = parse_response(&response.content, document)?;
        result.id = self.directive.id.clone();
        result.name = self.directive.name.clone();

        info!(
            style = %self.directive.id,
            tokens = response.usage.total_tokens(),
            "theme transform accepted"
        );
        Ok(result)
    }
}
