use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tinter_ai::{RemixTransformer, StyleDirective, ThemeTransformer, TransformError};
use tinter_common::NotificationLevel;
use tinter_config::{presets, Category, FieldPath, Provenance, ShapeMismatch, ThemeDocument};
use tinter_preview::{EditorTab, StyleProp};
use tokio::sync::Notify;
use tokio::time::sleep;

use super::*;
use crate::scroll::{NullScrollTarget, ScrollTarget};
use crate::{EditorEvent, MISSING_KEY_MESSAGE, TRANSFORM_FAILED_MESSAGE};

#[derive(Default)]
struct RecordingScroll {
    calls: Mutex<Vec<String>>,
    missing: bool,
}

impl ScrollTarget for RecordingScroll {
    fn scroll_into_view(&self, row_id: &str) -> bool {
        self.calls.lock().unwrap().push(row_id.to_string());
        !self.missing
    }
}

impl RecordingScroll {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// Answers immediately with a fixed result.
struct Canned(Result<ThemeDocument, fn() -> TransformError>);

#[async_trait]
impl ThemeTransformer for Canned {
    async fn transform(&self, _document: &ThemeDocument) -> Result<ThemeDocument, TransformError> {
        match &self.0 {
            Ok(doc) => Ok(doc.clone()),
            Err(make) => Err(make()),
        }
    }
}

/// Answers only once the gate opens.
struct Gated {
    gate: Notify,
    reply: ThemeDocument,
}

#[async_trait]
impl ThemeTransformer for Gated {
    async fn transform(&self, _document: &ThemeDocument) -> Result<ThemeDocument, TransformError> {
        self.gate.notified().await;
        Ok(self.reply.clone())
    }
}

/// Never answers within any reasonable deadline.
struct Slow;

#[async_trait]
impl ThemeTransformer for Slow {
    async fn transform(&self, document: &ThemeDocument) -> Result<ThemeDocument, TransformError> {
        sleep(Duration::from_secs(3600)).await;
        Ok(document.clone())
    }
}

fn dropped_bar_shadow() -> TransformError {
    TransformError::ShapeMismatch(ShapeMismatch::Missing(FieldPath::new(
        Category::ComfyBase,
        "bar-shadow",
    )))
}

fn session() -> EditorSession {
    EditorSession::new(SessionConfig::default(), Arc::new(NullScrollTarget)).unwrap()
}

fn session_with_scroll(scroll: Arc<RecordingScroll>) -> EditorSession {
    EditorSession::new(SessionConfig::default(), scroll).unwrap()
}

fn matrix_version_of(doc: &ThemeDocument) -> ThemeDocument {
    let mut next = tinter_config::apply_edit(doc, Category::ComfyBase, "fg-color", "#00FF41");
    next.id = "matrix_theme".into();
    next.name = "The Matrix".into();
    next
}

// -- Documents ----------------------------------------------------------------

#[test]
fn starts_on_default_preset() {
    let session = session();
    assert_eq!(*session.document(), presets::load("dark").unwrap());
    assert_eq!(session.provenance(), Provenance::preset("dark"));
    assert_eq!(session.active_tab(), EditorTab::Slots);
    assert_eq!(session.highlighted_key(), None);
    assert!(!session.is_transforming());
}

#[test]
fn unknown_initial_preset_fails() {
    let config = SessionConfig {
        initial_preset: "nope".into(),
        ..SessionConfig::default()
    };
    assert!(matches!(
        EditorSession::new(config, Arc::new(NullScrollTarget)),
        Err(EditorError::Theme(_))
    ));
}

#[test]
fn edit_after_preset_load_becomes_custom() {
    let session = session();
    session.load_preset("dark").unwrap();
    let before = session.document();

    session.edit_field(Category::NodeSlot, "MODEL", "#123456");

    let after = session.document();
    assert_eq!(session.provenance(), Provenance::Custom);
    assert_eq!(after.color(Category::NodeSlot, "MODEL"), Some("#123456"));
    assert!(!Arc::ptr_eq(&before, &after));

    let restored = tinter_config::apply_edit(&after, Category::NodeSlot, "MODEL", "#B39DDB");
    assert_eq!(restored, presets::load("dark").unwrap());
}

#[test]
fn edit_keeps_previous_snapshot_intact() {
    let session = session();
    let before = session.document();
    session.edit_field(Category::LitegraphBase, "LINK_COLOR", "#ff0000");
    assert_eq!(before.color(Category::LitegraphBase, "LINK_COLOR"), Some("#9A9"));
}

#[test]
fn preset_load_resets_provenance() {
    let session = session();
    session.edit_field(Category::ComfyBase, "fg-color", "#000");
    session.load_preset("nord").unwrap();
    assert_eq!(session.provenance(), Provenance::preset("nord"));
    assert_eq!(*session.document(), presets::load("nord").unwrap());

    assert!(session.load_preset("missing").is_err());
    assert_eq!(session.provenance(), Provenance::preset("nord"));
}

#[test]
fn opened_documents_are_identified() {
    let session = session();
    session.open_document(presets::load("solarized").unwrap());
    assert_eq!(session.provenance(), Provenance::preset("solarized"));

    let custom = matrix_version_of(&presets::load("solarized").unwrap());
    session.open_document(custom);
    assert_eq!(session.provenance(), Provenance::Custom);
}

#[tokio::test]
async fn edits_publish_events() {
    let session = session();
    let mut rx = session.subscribe();

    session.edit_field(Category::NodeSlot, "VAE", "#010101");
    session.load_preset("light").unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        EditorEvent::FieldEdited {
            path: FieldPath::new(Category::NodeSlot, "VAE"),
            value: "#010101".into(),
        }
    );
    assert_eq!(
        rx.recv().await.unwrap(),
        EditorEvent::DocumentReplaced {
            id: "light".into(),
            provenance: Provenance::preset("light"),
        }
    );
}

#[tokio::test]
async fn set_tab_publishes_only_changes() {
    let session = session();
    let mut rx = session.subscribe();

    session.set_tab(EditorTab::Slots);
    session.set_tab(EditorTab::Json);

    assert_eq!(rx.recv().await.unwrap(), EditorEvent::TabChanged(EditorTab::Json));
    assert!(rx.try_recv().is_err());
    assert_eq!(session.active_tab(), EditorTab::Json);
    assert!(session.rows(EditorTab::Json).is_empty());
}

#[test]
fn json_tab_shows_pretty_document() {
    let session = session();
    assert_eq!(session.json().unwrap(), presets::source("dark").unwrap().trim_end());
}

// -- Selection ----------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn selecting_graph_field_from_slots_tab() {
    let session = session();
    assert_eq!(session.active_tab(), EditorTab::Slots);

    session.select(Category::LitegraphBase, "LINK_COLOR");
    assert_eq!(session.active_tab(), EditorTab::Graph);
    assert_eq!(session.highlighted_key().as_deref(), Some("LINK_COLOR"));

    let rows = session.rows(EditorTab::Graph);
    let link = rows.iter().find(|r| r.key == "LINK_COLOR").unwrap();
    assert!(link.highlighted);

    sleep(Duration::from_millis(1999)).await;
    assert_eq!(session.highlighted_key().as_deref(), Some("LINK_COLOR"));

    sleep(Duration::from_millis(2)).await;
    assert_eq!(session.highlighted_key(), None);
    assert!(session.rows(EditorTab::Graph).iter().all(|r| !r.highlighted));
}

#[tokio::test(start_paused = true)]
async fn tab_mapping_for_each_category() {
    let session = session();
    session.select(Category::ComfyBase, "fg-color");
    assert_eq!(session.active_tab(), EditorTab::Ui);
    session.select(Category::NodeSlot, "CLIP");
    assert_eq!(session.active_tab(), EditorTab::Slots);
    session.select(Category::LitegraphBase, "WIDGET_BGCOLOR");
    assert_eq!(session.active_tab(), EditorTab::Graph);
}

#[tokio::test(start_paused = true)]
async fn reselect_restarts_the_timer() {
    let session = session();
    session.select(Category::NodeSlot, "MODEL");

    sleep(Duration::from_millis(1500)).await;
    session.select(Category::NodeSlot, "CLIP");

    // The first expiry would have fired here.
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(session.highlighted_key().as_deref(), Some("CLIP"));

    sleep(Duration::from_millis(1001)).await;
    assert_eq!(session.highlighted_key(), None);
}

#[tokio::test(start_paused = true)]
async fn same_key_reselect_extends_highlight() {
    let session = session();
    session.select(Category::NodeSlot, "MODEL");
    sleep(Duration::from_millis(1900)).await;
    session.select(Category::NodeSlot, "MODEL");

    sleep(Duration::from_millis(1900)).await;
    assert_eq!(session.highlighted_key().as_deref(), Some("MODEL"));
    sleep(Duration::from_millis(101)).await;
    assert_eq!(session.highlighted_key(), None);
}

#[tokio::test(start_paused = true)]
async fn scroll_happens_after_delay() {
    let scroll = Arc::new(RecordingScroll::default());
    let session = session_with_scroll(scroll.clone());

    session.select(Category::LitegraphBase, "LINK_COLOR");
    sleep(Duration::from_millis(99)).await;
    assert!(scroll.calls().is_empty());

    sleep(Duration::from_millis(2)).await;
    assert_eq!(scroll.calls(), vec!["input-LINK_COLOR".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn field_without_row_skips_scroll_but_still_highlights() {
    let scroll = Arc::new(RecordingScroll::default());
    let session = session_with_scroll(scroll.clone());

    session.select(Category::LitegraphBase, "NODE_DEFAULT_SHAPE");
    assert_eq!(session.highlighted_key().as_deref(), Some("NODE_DEFAULT_SHAPE"));

    sleep(Duration::from_millis(500)).await;
    assert!(scroll.calls().is_empty());

    sleep(Duration::from_millis(1501)).await;
    assert_eq!(session.highlighted_key(), None);
}

#[tokio::test(start_paused = true)]
async fn unrendered_row_is_a_no_op() {
    let scroll = Arc::new(RecordingScroll {
        missing: true,
        ..RecordingScroll::default()
    });
    let session = session_with_scroll(scroll.clone());

    session.select(Category::ComfyBase, "bar-shadow");
    sleep(Duration::from_millis(150)).await;
    assert_eq!(scroll.calls(), vec!["input-bar-shadow".to_string()]);
    assert_eq!(session.highlighted_key().as_deref(), Some("bar-shadow"));
}

#[tokio::test(start_paused = true)]
async fn region_clicks_resolve_to_one_field() {
    let session = session();

    let field = session.select_region("link.standard.1").unwrap();
    assert_eq!(field, FieldPath::new(Category::LitegraphBase, "LINK_COLOR"));
    assert_eq!(session.active_tab(), EditorTab::Graph);

    let field = session.select_region("queue.row.0.status").unwrap();
    assert_eq!(field, FieldPath::new(Category::NodeSlot, "IMAGE"));
    assert_eq!(session.active_tab(), EditorTab::Slots);

    assert!(matches!(
        session.select_region("loader.nope"),
        Err(EditorError::UnknownRegion(_))
    ));
    assert_eq!(session.highlighted_key().as_deref(), Some("IMAGE"));
}

#[tokio::test(start_paused = true)]
async fn selection_events() {
    let session = session();
    let mut rx = session.subscribe();

    session.select(Category::LitegraphBase, "LINK_COLOR");
    assert_eq!(rx.recv().await.unwrap(), EditorEvent::TabChanged(EditorTab::Graph));
    assert_eq!(
        rx.recv().await.unwrap(),
        EditorEvent::HighlightChanged(Some("LINK_COLOR".into()))
    );
    assert_eq!(rx.recv().await.unwrap(), EditorEvent::HighlightChanged(None));
}

#[test]
fn select_without_runtime_does_not_panic() {
    let session = session();
    session.select(Category::NodeSlot, "MODEL");
    assert_eq!(session.highlighted_key().as_deref(), Some("MODEL"));
}

#[test]
fn preview_follows_edits() {
    let session = session();
    let regions = session.render().len();
    session.edit_field(Category::NodeSlot, "MODEL", "#000000");

    let rendered = session.render();
    assert_eq!(rendered.len(), regions);
    let dot = rendered.iter().find(|r| r.id == "sampler.in.model.dot").unwrap();
    assert_eq!(dot.style(StyleProp::Background), Some("#000000"));
}

// -- Transforms ---------------------------------------------------------------

#[tokio::test]
async fn transform_without_credential_changes_nothing() {
    let session = session();
    let before = session.document();
    let transformer = RemixTransformer::new(None, StyleDirective::matrix());

    let err = session.transform(&transformer).await.unwrap_err();
    assert!(matches!(
        err,
        EditorError::Transform(TransformError::MissingCredential { .. })
    ));
    assert_eq!(*session.document(), *before);
    assert_eq!(session.provenance(), Provenance::preset("dark"));
    assert!(!session.is_transforming());

    let notes = session.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Info);
    assert_eq!(notes[0].message, MISSING_KEY_MESSAGE);

    session.dismiss_notifications();
    assert!(session.notifications().is_empty());
}

#[tokio::test]
async fn shape_failure_keeps_document() {
    let session = session();
    session.edit_field(Category::NodeSlot, "MODEL", "#123456");
    let before = session.document();

    let transformer = Canned(Err(dropped_bar_shadow as fn() -> TransformError));
    assert!(session.transform(&transformer).await.is_err());

    assert!(Arc::ptr_eq(&before, &session.document()));
    assert_eq!(session.provenance(), Provenance::Custom);
    let notes = session.notifications();
    assert_eq!(notes[0].level, NotificationLevel::Error);
    assert_eq!(notes[0].message, TRANSFORM_FAILED_MESSAGE);
}

#[tokio::test]
async fn successful_transform_replaces_document() {
    let session = session();
    let result = matrix_version_of(&session.document());
    let mut rx = session.subscribe();

    let outcome = session.transform(&Canned(Ok(result.clone()))).await.unwrap();

    assert_eq!(outcome, TransformOutcome::Applied);
    assert_eq!(*session.document(), result);
    assert_eq!(session.provenance(), Provenance::Custom);
    assert!(session.notifications().is_empty());

    assert!(matches!(rx.recv().await.unwrap(), EditorEvent::TransformStarted(_)));
    assert!(matches!(
        rx.recv().await.unwrap(),
        EditorEvent::DocumentReplaced { provenance: Provenance::Custom, .. }
    ));
    assert!(matches!(
        rx.recv().await.unwrap(),
        EditorEvent::TransformFinished { applied: true, .. }
    ));
}

#[tokio::test]
async fn new_transform_clears_earlier_notifications() {
    let session = session();
    let missing_key = RemixTransformer::new(None, StyleDirective::matrix());
    assert!(session.transform(&missing_key).await.is_err());
    assert_eq!(session.notifications().len(), 1);

    let result = matrix_version_of(&session.document());
    session.transform(&Canned(Ok(result))).await.unwrap();
    assert!(session.notifications().is_empty());

    let failing = Canned(Err(dropped_bar_shadow as fn() -> TransformError));
    assert!(session.transform(&failing).await.is_err());
    assert!(session.transform(&failing).await.is_err());
    let notes = session.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, TRANSFORM_FAILED_MESSAGE);
}

#[tokio::test]
async fn second_transform_is_rejected_while_first_runs() {
    let session = session();
    let gated = Arc::new(Gated {
        gate: Notify::new(),
        reply: matrix_version_of(&session.document()),
    });

    let running = {
        let session = session.clone();
        let gated = gated.clone();
        tokio::spawn(async move { session.transform(gated.as_ref()).await })
    };
    tokio::task::yield_now().await;
    assert!(session.is_transforming());

    let second = session.transform(&Canned(Ok(presets::load("nord").unwrap()))).await;
    assert!(matches!(second, Err(EditorError::TransformInFlight)));

    // Edits stay synchronous while the request is out.
    session.edit_field(Category::NodeSlot, "VAE", "#abcdef");
    assert_eq!(session.document().color(Category::NodeSlot, "VAE"), Some("#abcdef"));

    gated.gate.notify_one();
    assert_eq!(running.await.unwrap().unwrap(), TransformOutcome::Applied);
    assert!(!session.is_transforming());
    assert_eq!(session.document().name, "The Matrix");
}

#[tokio::test]
async fn cancelled_transform_result_is_ignored() {
    let session = session();
    let before = session.document();
    let gated = Arc::new(Gated {
        gate: Notify::new(),
        reply: matrix_version_of(&before),
    });

    let running = {
        let session = session.clone();
        let gated = gated.clone();
        tokio::spawn(async move { session.transform(gated.as_ref()).await })
    };
    tokio::task::yield_now().await;

    assert!(session.cancel_transform());
    assert!(!session.is_transforming());
    assert!(!session.cancel_transform());

    gated.gate.notify_one();
    assert_eq!(running.await.unwrap().unwrap(), TransformOutcome::Discarded);
    assert!(Arc::ptr_eq(&before, &session.document()));
    assert_eq!(session.provenance(), Provenance::preset("dark"));
}

#[tokio::test(start_paused = true)]
async fn timed_out_transform_frees_the_slot() {
    let session = session();
    let before = session.document();

    let err = session
        .transform_with_timeout(&Slow, Duration::from_secs(30))
        .await
        .unwrap_err();

    assert!(matches!(err, EditorError::TransformTimedOut(_)));
    assert!(!session.is_transforming());
    assert!(Arc::ptr_eq(&before, &session.document()));
    assert_eq!(session.notifications()[0].message, TRANSFORM_FAILED_MESSAGE);

    let outcome = session
        .transform(&Canned(Ok(matrix_version_of(&before))))
        .await
        .unwrap();
    assert_eq!(outcome, TransformOutcome::Applied);
}
