//! Framework-agnostic event broadcasting.
//!
//! A typed publish-subscribe channel distributing [`ChatEvent`]s to
//! interface layers (desktop shell, web view) from the single core source.

use crate::events::ChatEvent;
use tokio::sync::broadcast;

/// Default channel capacity. Slow subscribers past this buffer lag and
/// miss events.
const DEFAULT_CAPACITY: usize = 256;

/// Broadcast bus for core state-change events.
pub struct EventBus {
    sender: broadcast::Sender<ChatEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emit an event to all subscribers.
    ///
    /// Returns the number of subscribers that received it; with no
    /// subscribers the event is dropped and 0 is returned.
    pub fn emit(&self, event: ChatEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Subscribe to all future events. Past events are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
