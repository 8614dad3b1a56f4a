mod event_bus;
mod types;

pub use event_bus::{EventBus, EventSubscriber};
pub use types::{EventPayload, PlayerEvent, PlayerEventType};
