use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::GeminiClient;

/// Failed responses carry at most this much of their body into the error.
const ERROR_BODY_LIMIT: usize = 512;

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);
        debug!(model = %self.config.model, messages = messages.len(), "generateContent");

        let response = self
            .http
            .post(self.api_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = status_error(status, &text);
            warn!(%status, "Gemini request rejected");
            return Err(err);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(format!("response body: {e}")))?;

        let parsed = self.parse_response(json)?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "generateContent done"
        );
        Ok(parsed)
    }
}

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

fn status_error(status: StatusCode, body: &str) -> AiError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AiError::RateLimited;
    }
    let body = body.trim();
    let body = match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((cut, _)) => &body[..cut],
        None => body,
    };
    AiError::ApiError(format!("HTTP {status}: {body}"))
}
