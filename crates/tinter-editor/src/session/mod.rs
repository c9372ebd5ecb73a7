//! The editor session: current document, provenance, tab and highlight.
//!
//! All state sits behind one mutex that is never held across an await.
//! Edits and preset loads are synchronous; the only suspension point is a
//! transform's network round-trip, handled in `transform.rs`.

mod selection;
mod transform;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tinter_common::{Notification, NotificationQueue, RequestId};
use tinter_config::schema::EditorConfig;
use tinter_config::{apply_edit, presets, Category, FieldPath, Provenance, ThemeDocument};
use tinter_preview::{render_with, EditorTab, RegionTable, RenderedRegion};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::EditorError;
use crate::events::{EditorEvent, EventBus};
use crate::highlight::HighlightState;
use crate::rows::{rows_for, EditorRow};
use crate::scroll::ScrollTarget;

pub use transform::TransformOutcome;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub initial_preset: String,
    pub highlight: Duration,
    pub scroll_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for SessionConfig {
    fn from(config: &EditorConfig) -> Self {
        Self {
            initial_preset: config.default_preset.clone(),
            highlight: Duration::from_millis(config.highlight_ms),
            scroll_delay: Duration::from_millis(config.scroll_delay_ms),
        }
    }
}

struct SessionState {
    document: Arc<ThemeDocument>,
    provenance: Provenance,
    regions: RegionTable,
    active_tab: EditorTab,
    highlight: HighlightState,
    highlight_timer: Option<CancellationToken>,
    generation: u64,
    transform: Option<RequestId>,
    notifications: NotificationQueue,
}

impl SessionState {
    fn replace_document(&mut self, document: ThemeDocument, provenance: Provenance) {
        if !self.regions.fits(&document) {
            self.regions = RegionTable::for_document(&document);
        }
        self.document = Arc::new(document);
        self.provenance = provenance;
    }
}

struct Inner {
    state: Mutex<SessionState>,
    bus: EventBus,
    scroll: Arc<dyn ScrollTarget>,
    config: SessionConfig,
}

/// A cheaply clonable handle to one editor session.
#[derive(Clone)]
pub struct EditorSession {
    inner: Arc<Inner>,
}

impl EditorSession {
    /// Start a session on `config.initial_preset`.
    pub fn new(config: SessionConfig, scroll: Arc<dyn ScrollTarget>) -> Result<Self, EditorError> {
        let document = presets::load(&config.initial_preset)?;
        let state = SessionState {
            regions: RegionTable::for_document(&document),
            provenance: Provenance::preset(&config.initial_preset),
            document: Arc::new(document),
            active_tab: EditorTab::default(),
            highlight: HighlightState::Idle,
            highlight_timer: None,
            generation: 0,
            transform: None,
            notifications: NotificationQueue::default(),
        };

        Ok(Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                bus: EventBus::new(EVENT_CAPACITY),
                scroll,
                config,
            }),
        })
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: EditorEvent) {
        self.inner.bus.publish(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.inner.bus.subscribe()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    // -- Accessors ----------------------------------------------------------

    /// The committed document. Replaced wholesale, never mutated in place.
    pub fn document(&self) -> Arc<ThemeDocument> {
        Arc::clone(&self.state().document)
    }

    pub fn provenance(&self) -> Provenance {
        self.state().provenance.clone()
    }

    pub fn active_tab(&self) -> EditorTab {
        self.state().active_tab
    }

    pub fn highlight(&self) -> HighlightState {
        self.state().highlight.clone()
    }

    pub fn highlighted_key(&self) -> Option<String> {
        self.state().highlight.key().map(str::to_string)
    }

    pub fn is_transforming(&self) -> bool {
        self.state().transform.is_some()
    }

    /// Visible notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state()
            .notifications
            .visible()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn dismiss_notifications(&self) {
        self.state().notifications.clear();
    }

    fn notify(&self, notification: Notification) {
        self.state().notifications.push(notification);
    }

    /// Editor rows of `tab` for the current document.
    pub fn rows(&self, tab: EditorTab) -> Vec<EditorRow> {
        let state = self.state();
        rows_for(&state.document, tab, state.highlight.key())
    }

    /// Pretty JSON of the current document, as the JSON tab shows it.
    pub fn json(&self) -> Result<String, EditorError> {
        Ok(self.document().to_json()?)
    }

    /// The preview for the current document.
    pub fn render(&self) -> Vec<RenderedRegion> {
        let state = self.state();
        render_with(&state.regions, &state.document)
    }

    pub fn set_tab(&self, tab: EditorTab) {
        let changed = {
            let mut state = self.state();
            let changed = state.active_tab != tab;
            state.active_tab = tab;
            changed
        };
        if changed {
            self.publish(EditorEvent::TabChanged(tab));
        }
    }

    // -- Document changes ---------------------------------------------------

    /// Set one field. The session now holds a custom document.
    pub fn edit_field(&self, category: Category, key: &str, value: impl Into<String>) {
        let value = value.into();
        {
            let mut state = self.state();
            let next = apply_edit(&state.document, category, key, value.clone());
            let provenance = state.provenance.after_edit();
            state.replace_document(next, provenance);
        }
        debug!(%category, key, "field edited");
        self.publish(EditorEvent::FieldEdited {
            path: FieldPath::new(category, key),
            value,
        });
    }

    /// Replace the document with a fresh copy of preset `id`.
    pub fn load_preset(&self, id: &str) -> Result<(), EditorError> {
        let document = presets::load(id)?;
        self.replace(document, Provenance::preset(id));
        Ok(())
    }

    /// Replace the document with one from outside (an imported file). It is
    /// recognized as a preset only if it equals one exactly.
    pub fn open_document(&self, document: ThemeDocument) {
        let provenance = presets::identify(&document)
            .map(Provenance::preset)
            .unwrap_or(Provenance::Custom);
        self.replace(document, provenance);
    }

    fn replace(&self, document: ThemeDocument, provenance: Provenance) {
        let id = document.id.clone();
        self.state().replace_document(document, provenance.clone());
        info!(%id, %provenance, "document replaced");
        self.publish(EditorEvent::DocumentReplaced { id, provenance });
    }
}
