//! Routing a `(category, key)` selection to the editor.
//!
//! 1. Switch to the tab that owns the category.
//! 2. Highlight the key; the highlight expires on its own.
//! 3. After a short delay, scroll the key's row into view.

use tinter_config::{Category, FieldPath};
use tinter_preview::{row_id, EditorTab};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::EditorSession;
use crate::error::EditorError;
use crate::events::EditorEvent;
use crate::highlight::HighlightState;
use crate::rows::has_row;

impl EditorSession {
    /// Select a field, as when its color is clicked in the preview.
    ///
    /// The expiry and scroll run as Tokio tasks; without a runtime the tab
    /// and highlight still change but nothing is scheduled.
    pub fn select(&self, category: Category, key: &str) {
        let tab = EditorTab::for_category(category);
        let highlight = self.inner.config.highlight;

        let (tab_changed, generation, timer) = {
            let mut state = self.state();
            let tab_changed = state.active_tab != tab;
            state.active_tab = tab;

            if let Some(previous) = state.highlight_timer.take() {
                previous.cancel();
            }
            state.generation += 1;
            let generation = state.generation;
            state.highlight = HighlightState::start(key, highlight, generation);

            let timer = CancellationToken::new();
            state.highlight_timer = Some(timer.clone());
            (tab_changed, generation, timer)
        };

        debug!(%category, key, %tab, generation, "field selected");
        if tab_changed {
            self.publish(EditorEvent::TabChanged(tab));
        }
        self.publish(EditorEvent::HighlightChanged(Some(key.to_string())));

        let Ok(runtime) = Handle::try_current() else {
            warn!("no async runtime, highlight expiry and scroll not scheduled");
            return;
        };
        runtime.spawn(self.clone().expire_highlight(generation, timer));
        runtime.spawn(self.clone().scroll_to(category, key.to_string()));
    }

    /// Select whatever field the preview region `region_id` targets.
    pub fn select_region(&self, region_id: &str) -> Result<FieldPath, EditorError> {
        let target = self
            .state()
            .regions
            .resolve(region_id)
            .cloned()
            .ok_or_else(|| EditorError::UnknownRegion(region_id.to_string()))?;
        self.select(target.category, &target.key);
        Ok(target)
    }

    async fn expire_highlight(self, generation: u64, timer: CancellationToken) {
        tokio::select! {
            _ = timer.cancelled() => {
                debug!(generation, "highlight expiry superseded");
            }
            _ = tokio::time::sleep(self.inner.config.highlight) => {
                let cleared = {
                    let mut state = self.state();
                    let cleared = state.highlight.expire(generation);
                    if cleared {
                        state.highlight_timer = None;
                    }
                    cleared
                };
                if cleared {
                    self.publish(EditorEvent::HighlightChanged(None));
                }
            }
        }
    }

    async fn scroll_to(self, category: Category, key: String) {
        tokio::time::sleep(self.inner.config.scroll_delay).await;

        if !has_row(&self.document(), category, &key) {
            debug!(%category, key, "no editor row to scroll to");
            return;
        }
        let id = row_id(&key);
        if !self.inner.scroll.scroll_into_view(&id) {
            debug!(row = %id, "row not rendered, scroll skipped");
        }
    }
}
