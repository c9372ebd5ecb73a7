//! Running an AI transform against the session's document.
//!
//! One transform at a time. Each gets a [`RequestId`]; a result is applied
//! only if its id is still the current one, so a cancelled or timed-out
//! request can never overwrite the document late.

use std::time::Duration;

use tinter_ai::{ThemeTransformer, TransformError};
use tinter_common::{Notification, RequestId};
use tinter_config::Provenance;
use tracing::{debug, info, warn};

use super::EditorSession;
use crate::error::EditorError;
use crate::events::EditorEvent;
use crate::{MISSING_KEY_MESSAGE, TRANSFORM_FAILED_MESSAGE};

/// What happened to a finished transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The result replaced the document.
    Applied,
    /// The request was cancelled while in flight; its result was dropped.
    Discarded,
}

/// Releases the in-flight slot if the transform future is dropped early.
struct InFlight<'a> {
    session: &'a EditorSession,
    id: RequestId,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed && self.session.finish_request(&self.id) {
            debug!(request = %self.id, "transform dropped before completion");
            self.session.publish(EditorEvent::TransformFinished {
                request_id: self.id.clone(),
                applied: false,
            });
        }
    }
}

impl EditorSession {
    /// Transform the current document.
    ///
    /// Fails with [`EditorError::TransformInFlight`] if one is already
    /// running. Starting a transform clears earlier notifications. On
    /// failure the document is unchanged and a notification is posted:
    /// informational for a missing key, an error otherwise.
    pub async fn transform(
        &self,
        transformer: &dyn ThemeTransformer,
    ) -> Result<TransformOutcome, EditorError> {
        let id = RequestId::new();
        let snapshot = {
            let mut state = self.state();
            if state.transform.is_some() {
                return Err(EditorError::TransformInFlight);
            }
            state.transform = Some(id.clone());
            state.notifications.clear();
            std::sync::Arc::clone(&state.document)
        };
        let mut guard = InFlight {
            session: self,
            id: id.clone(),
            armed: true,
        };

        debug!(request = %id, source = %snapshot.id, "transform started");
        self.publish(EditorEvent::TransformStarted(id.clone()));

        let result = transformer.transform(&snapshot).await;
        guard.armed = false;

        if !self.finish_request(&id) {
            debug!(request = %id, "stale transform result ignored");
            return Ok(TransformOutcome::Discarded);
        }

        match result {
            Ok(document) => {
                let name = document.name.clone();
                self.replace(document, Provenance::Custom);
                info!(request = %id, %name, "transform applied");
                self.publish(EditorEvent::TransformFinished {
                    request_id: id,
                    applied: true,
                });
                Ok(TransformOutcome::Applied)
            }
            Err(e) => {
                self.report_failure(&e);
                self.publish(EditorEvent::TransformFinished {
                    request_id: id,
                    applied: false,
                });
                Err(e.into())
            }
        }
    }

    /// [`Self::transform`] with a deadline. On expiry the request is
    /// abandoned, the document is left as it was, and an error is posted.
    pub async fn transform_with_timeout(
        &self,
        transformer: &dyn ThemeTransformer,
        timeout: Duration,
    ) -> Result<TransformOutcome, EditorError> {
        match tokio::time::timeout(timeout, self.transform(transformer)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(?timeout, "transform timed out");
                self.notify(Notification::error(TRANSFORM_FAILED_MESSAGE));
                Err(EditorError::TransformTimedOut(timeout))
            }
        }
    }

    /// Abandon the in-flight transform, if any. Its result will be dropped.
    pub fn cancel_transform(&self) -> bool {
        let cancelled = self.state().transform.take();
        match cancelled {
            Some(id) => {
                info!(request = %id, "transform cancelled");
                self.publish(EditorEvent::TransformFinished {
                    request_id: id,
                    applied: false,
                });
                true
            }
            None => false,
        }
    }

    /// Clear the in-flight slot if it still holds `id`.
    fn finish_request(&self, id: &RequestId) -> bool {
        let mut state = self.state();
        if state.transform.as_ref() == Some(id) {
            state.transform = None;
            true
        } else {
            false
        }
    }

    fn report_failure(&self, error: &TransformError) {
        if error.is_missing_credential() {
            info!("transform skipped: {error}");
            self.notify(Notification::info(MISSING_KEY_MESSAGE));
        } else {
            warn!(error = %error, "transform failed");
            self.notify(Notification::error(TRANSFORM_FAILED_MESSAGE));
        }
    }
}
