use std::time::Duration;

use tinter_ai::TransformError;
use tinter_common::{ThemeError, TinterError};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("a theme transform is already running")]
    TransformInFlight,

    #[error("theme transform timed out after {0:?}")]
    TransformTimedOut(Duration),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("unknown preview region: {0}")]
    UnknownRegion(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

impl From<EditorError> for TinterError {
    fn from(e: EditorError) -> Self {
        match e {
            EditorError::Theme(theme) => TinterError::Theme(theme),
            other => TinterError::Editor(other.to_string()),
        }
    }
}
