use tinter_config::ThemeDocument;
use tracing::debug;

use super::TransformError;

/// Turn model output into a document shaped exactly like `input`.
///
/// A surrounding markdown code fence is tolerated. The result carries
/// `input`'s key order.
pub fn parse_response(text: &str, input: &ThemeDocument) -> Result<ThemeDocument, TransformError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(TransformError::EmptyResponse);
    }

    let candidate: ThemeDocument =
        serde_json::from_str(body).map_err(|e| TransformError::Malformed(e.to_string()))?;

    if let Some(mismatch) = input.shape_mismatch(&candidate) {
        debug!(%mismatch, "rejecting transform result");
        return Err(mismatch.into());
    }

    Ok(candidate.conformed_to(input))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (`json`) up to the first newline.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}
