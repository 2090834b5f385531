//! Async driver for the conversation controller.
//!
//! Wraps [`ChatController`] in a single mutex and runs the simulated-reply
//! timer on a tokio task. Replies go through [`ChatController::deliver`],
//! so the stale-session guard holds even though the timer is never
//! cancelled.

use super::controller::ChatController;
use super::state::{ConversationState, MintReason, Session, SessionId};
use crate::event_bus::EventBus;
use crate::events::ChatEvent;
use crate::tutor::ReplySynthesizer;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Simulated latency before an assistant reply arrives.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// One category's chat service: controller plus reply scheduling.
///
/// All state mutation funnels through the single controller mutex, which
/// preserves append ordering within a session. Sending never blocks the
/// caller; the reply lands on a spawned task after [`REPLY_DELAY`].
pub struct ChatService {
    category: String,
    controller: Arc<Mutex<ChatController>>,
    synthesizer: Arc<dyn ReplySynthesizer>,
    bus: Arc<EventBus>,
}

impl ChatService {
    pub fn new(category: impl Into<String>, synthesizer: Arc<dyn ReplySynthesizer>) -> Self {
        let category = category.into();
        let bus = Arc::new(EventBus::new());
        let controller = Arc::new(Mutex::new(ChatController::new(
            category.clone(),
            Arc::clone(&bus),
        )));
        Self {
            category,
            controller,
            synthesizer,
            bus,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Subscribe to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.bus.subscribe()
    }

    /// Shared handle to the underlying controller, for interface layers
    /// that need direct reads.
    pub fn controller(&self) -> Arc<Mutex<ChatController>> {
        Arc::clone(&self.controller)
    }

    /// Snapshot of the current conversation state.
    pub fn state(&self) -> ConversationState {
        self.controller.lock().unwrap().state().clone()
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.controller.lock().unwrap().active_session().cloned()
    }

    /// Activate a session under a display title, seeding its greeting.
    pub fn activate(&self, id: SessionId, title: impl Into<String>) {
        let mut controller = self.controller.lock().unwrap();
        controller.register(Session::new(id.clone(), title));
        controller.set_active_session(id);
    }

    /// Auto-start: return the active session, minting an `initial-*` one
    /// if none is active yet.
    pub fn ensure_session(&self) -> SessionId {
        if let Some(id) = self.active_session() {
            return id;
        }
        let id = SessionId::mint(MintReason::Initial);
        self.activate(id.clone(), "New session");
        id
    }

    /// Explicit "new chat": mint and activate a `new-*` session.
    pub fn new_chat(&self) -> SessionId {
        let id = SessionId::mint(MintReason::New);
        self.activate(id.clone(), "New chat");
        id
    }

    /// Submit user input and schedule the assistant reply.
    ///
    /// The user message is appended before this returns. `None` means the
    /// input was rejected (blank, or no active session). The returned
    /// handle resolves to whether the reply was actually appended, i.e.
    /// `false` when it went stale while in flight.
    pub fn send(&self, text: &str) -> Option<JoinHandle<bool>> {
        let pending = self.controller.lock().unwrap().submit(text)?;

        let controller = Arc::clone(&self.controller);
        let synthesizer = Arc::clone(&self.synthesizer);
        let category = self.category.clone();
        Some(tokio::spawn(async move {
            tokio::time::sleep(REPLY_DELAY).await;
            let reply = synthesizer.synthesize(&pending.topic, &category);
            controller.lock().unwrap().deliver(&pending, reply)
        }))
    }
}
