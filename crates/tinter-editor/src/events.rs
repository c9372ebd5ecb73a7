use serde::Serialize;
use tokio::sync::broadcast;

use tinter_common::RequestId;
use tinter_config::{FieldPath, Provenance};
use tinter_preview::EditorTab;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorEvent {
    /// A preset load, import or transform replaced the whole document.
    DocumentReplaced { id: String, provenance: Provenance },
    FieldEdited { path: FieldPath, value: String },
    TabChanged(EditorTab),
    /// `None` when the highlight expired.
    HighlightChanged(Option<String>),
    TransformStarted(RequestId),
    TransformFinished { request_id: RequestId, applied: bool },
}

pub struct EventBus {
    sender: broadcast::Sender<EditorEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: EditorEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinter_config::Category;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(EditorEvent::TabChanged(EditorTab::Graph));
        bus.publish(EditorEvent::HighlightChanged(Some("LINK_COLOR".into())));

        assert_eq!(rx.recv().await.unwrap(), EditorEvent::TabChanged(EditorTab::Graph));
        assert_eq!(
            rx.recv().await.unwrap(),
            EditorEvent::HighlightChanged(Some("LINK_COLOR".into()))
        );
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(EditorEvent::HighlightChanged(None)), 0);
    }

    #[test]
    fn events_serialize_tagged() {
        let event = EditorEvent::FieldEdited {
            path: FieldPath::new(Category::NodeSlot, "MODEL"),
            value: "#123456".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "FieldEdited");
        assert_eq!(json["data"]["path"]["key"], "MODEL");
        assert_eq!(json["data"]["value"], "#123456");

        let json = serde_json::to_value(EditorEvent::TabChanged(EditorTab::Ui)).unwrap();
        assert_eq!(json["data"], "ui");
    }
}
