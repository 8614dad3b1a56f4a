use anyhow::Result;
use tokio::sync::broadcast;
use tracing::trace;

use super::types::{EventPayload, PlayerEvent, PlayerEventType};

/// Event subscriber handle
pub struct EventSubscriber {
    receiver: broadcast::Receiver<PlayerEvent>,
    types: Option<Vec<PlayerEventType>>,
}

impl EventSubscriber {
    fn new(receiver: broadcast::Receiver<PlayerEvent>, types: Option<Vec<PlayerEventType>>) -> Self {
        Self { receiver, types }
    }

    /// Receive the next event matching the subscription.
    pub async fn recv(&mut self) -> Result<PlayerEvent> {
        loop {
            let event = self.receiver.recv().await?;
            if self.matches(&event) {
                return Ok(event);
            }
        }
    }

    /// Try to receive without blocking.
    pub fn try_recv(&mut self) -> Result<Option<PlayerEvent>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.matches(&event) {
                        return Ok(Some(event));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn matches(&self, event: &PlayerEvent) -> bool {
        match &self.types {
            Some(types) => types.contains(&event.event_type),
            None => true,
        }
    }
}

/// Broadcast bus for player events.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<PlayerEvent>,
}

impl EventBus {
    /// Create a new event bus with specified buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers. Having no subscribers is
    /// normal and not an error.
    pub fn publish(&self, event: PlayerEvent) {
        trace!("Publishing event: {}", event.event_type.as_str());
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events
    pub fn subscribe(&self) -> EventSubscriber {
        EventSubscriber::new(self.sender.subscribe(), None)
    }

    /// Subscribe to specific event types
    pub fn subscribe_to_types(&self, types: Vec<PlayerEventType>) -> EventSubscriber {
        EventSubscriber::new(self.sender.subscribe(), Some(types))
    }

    /// Get current subscriber count
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Emit a fullscreen change event
    pub fn emit_fullscreen_changed(&self, active: bool) {
        self.publish(PlayerEvent::new(
            PlayerEventType::FullscreenChanged,
            EventPayload::Fullscreen { active },
        ));
    }

    /// Emit a source change event
    pub fn emit_source_changed(&self, index: usize, source: String) {
        self.publish(PlayerEvent::new(
            PlayerEventType::SourceChanged,
            EventPayload::Source { index, source },
        ));
    }
}
