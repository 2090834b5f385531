//! The conversation state machine.
//!
//! Owns the active session id, the ordered message log, and the
//! send/receive protocol: optimistic user append on submit, assistant
//! append on delivery, stale-reply discard on session switch. All methods
//! are synchronous; the simulated latency lives in
//! [`super::service::ChatService`].

use super::message::{Message, MessageIdGen};
use super::state::{ConversationState, Session, SessionId};
use crate::event_bus::EventBus;
use crate::events::ChatEvent;
use crate::tutor::{self, TutorReply};
use std::collections::HashMap;
use std::sync::Arc;

/// Tag for an in-flight assistant reply.
///
/// The session id captured at submit time is the correctness guarantee
/// against stale delivery: [`ChatController::deliver`] compares it against
/// the current active session and drops the reply on mismatch, whether or
/// not the underlying timer was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub session_id: SessionId,
    pub topic: String,
    /// Seed epoch at submit time. Re-activating the same session re-seeds
    /// its log and bumps the epoch, so a reply submitted before the switch
    /// stays stale even when the user switches back.
    epoch: u64,
}

/// Single owner of all conversation state for one category workspace.
///
/// Must be driven from one execution context; a multi-threaded host wraps
/// it in a single mutex (see `ChatService`) to preserve append ordering.
pub struct ChatController {
    category: String,
    state: ConversationState,
    sessions: HashMap<SessionId, Session>,
    ids: MessageIdGen,
    /// Bumped on every activation or clear; see [`PendingReply::epoch`].
    epoch: u64,
    bus: Arc<EventBus>,
}

impl ChatController {
    pub fn new(category: impl Into<String>, bus: Arc<EventBus>) -> Self {
        Self {
            category: category.into(),
            state: ConversationState::default(),
            sessions: HashMap::new(),
            ids: MessageIdGen::new(),
            epoch: 0,
            bus,
        }
    }

    /// Category display name fed into greetings and reply synthesis.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn active_session(&self) -> Option<&SessionId> {
        self.state.active_session_id.as_ref()
    }

    /// Look up display metadata for a known session.
    pub fn session(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Record session metadata. Existing entries win, so re-activating a
    /// session keeps its original creation label.
    pub fn register(&mut self, session: Session) {
        self.sessions.entry(session.id.clone()).or_insert(session);
    }

    /// Switch the active session, synchronously clearing the log and
    /// seeding the greeting before control returns. A view reading state
    /// after this call never sees stale messages.
    pub fn set_active_session(&mut self, id: SessionId) {
        self.sessions
            .entry(id.clone())
            .or_insert_with(|| Session::new(id.clone(), "Untitled session"));

        self.epoch += 1;
        self.state.active_session_id = Some(id.clone());
        self.state.messages.clear();
        let greeting = Message::assistant(
            self.ids.next_id(),
            tutor::greeting(&self.category),
            Vec::new(),
        );
        self.state.messages.push(greeting);

        self.bus.emit(ChatEvent::SessionSelected { session_id: id });
    }

    /// Drop back to the empty state: no active session, no messages.
    pub fn clear_active_session(&mut self) {
        self.epoch += 1;
        self.state.active_session_id = None;
        self.state.messages.clear();
        self.bus.emit(ChatEvent::SessionCleared);
    }

    /// Update the draft input without submitting it.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.state.pending_input = text.into();
    }

    /// Submit user input.
    ///
    /// Blank input (after trimming) and input with no active session are
    /// rejected silently. Otherwise the user message is appended
    /// immediately, the draft is cleared, and the returned [`PendingReply`]
    /// carries the tag the eventual delivery must present.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("submit ignored: blank input");
            return None;
        }
        let session_id = match &self.state.active_session_id {
            Some(id) => id.clone(),
            None => {
                log::debug!("submit ignored: no active session");
                return None;
            }
        };

        let message = Message::user(self.ids.next_id(), text);
        self.state.messages.push(message.clone());
        self.state.pending_input.clear();
        self.bus.emit(ChatEvent::MessageAppended {
            session_id: session_id.clone(),
            message,
        });

        Some(PendingReply {
            session_id,
            topic: text.to_string(),
            epoch: self.epoch,
        })
    }

    /// Deliver a synthesized reply for a previously submitted message.
    ///
    /// Returns `false` (and appends nothing) when the tagged session is no
    /// longer active or its log was re-seeded since submit; a stale reply
    /// is not an error condition.
    pub fn deliver(&mut self, pending: &PendingReply, reply: TutorReply) -> bool {
        let stale = self.state.active_session_id.as_ref() != Some(&pending.session_id)
            || pending.epoch != self.epoch;
        if stale {
            log::debug!("dropping stale reply for session {}", pending.session_id);
            self.bus.emit(ChatEvent::ReplyDiscarded {
                session_id: pending.session_id.clone(),
            });
            return false;
        }

        let message =
            Message::assistant(self.ids.next_id(), reply.content, reply.attachments);
        self.state.messages.push(message.clone());
        self.bus.emit(ChatEvent::MessageAppended {
            session_id: pending.session_id.clone(),
            message,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::message::Role;
    use crate::tutor::{ReplySynthesizer, StudyTutor};

    fn controller() -> ChatController {
        ChatController::new("Maths", Arc::new(EventBus::new()))
    }

    fn seeded_controller() -> ChatController {
        let mut c = controller();
        c.set_active_session(SessionId("recent-math-calculus-basics".to_string()));
        c
    }

    mod set_active_session {
        use super::*;

        #[test]
        fn seeds_exactly_one_greeting() {
            let c = seeded_controller();
            assert_eq!(c.messages().len(), 1);
            assert_eq!(c.messages()[0].role, Role::Assistant);
            assert!(c.messages()[0].content.contains("Maths AI tutor"));
        }

        #[test]
        fn records_active_session_id() {
            let c = seeded_controller();
            assert_eq!(
                c.active_session(),
                Some(&SessionId("recent-math-calculus-basics".to_string()))
            );
        }

        #[test]
        fn switching_replaces_the_log_synchronously() {
            let mut c = seeded_controller();
            c.submit("What is a derivative?").unwrap();
            assert_eq!(c.messages().len(), 2);

            c.set_active_session(SessionId("recent-ps4".to_string()));
            assert_eq!(c.messages().len(), 1);
            assert_eq!(c.messages()[0].role, Role::Assistant);
        }

        #[test]
        fn registers_session_metadata() {
            let c = seeded_controller();
            let id = SessionId("recent-math-calculus-basics".to_string());
            assert!(c.session(&id).is_some());
        }

        #[test]
        fn register_keeps_first_metadata() {
            let mut c = controller();
            let id = SessionId("recent-ps4".to_string());
            c.register(Session::new(id.clone(), "Problem Set 4"));
            c.set_active_session(id.clone());
            assert_eq!(c.session(&id).unwrap().title, "Problem Set 4");
        }

        #[test]
        fn clear_drops_to_empty_state() {
            let mut c = seeded_controller();
            c.clear_active_session();
            assert!(c.active_session().is_none());
            assert!(c.messages().is_empty());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn appends_trimmed_user_message_synchronously() {
            let mut c = seeded_controller();
            let pending = c.submit("  What is a derivative?  ").unwrap();

            assert_eq!(c.messages().len(), 2);
            let last = c.messages().last().unwrap();
            assert_eq!(last.role, Role::User);
            assert_eq!(last.content, "What is a derivative?");
            assert_eq!(pending.topic, "What is a derivative?");
            assert_eq!(
                pending.session_id,
                SessionId("recent-math-calculus-basics".to_string())
            );
        }

        #[test]
        fn clears_pending_input() {
            let mut c = seeded_controller();
            c.set_pending_input("What is a derivative?");
            c.submit("What is a derivative?").unwrap();
            assert!(c.state().pending_input.is_empty());
        }

        #[test]
        fn blank_input_is_rejected_silently() {
            let mut c = seeded_controller();
            assert!(c.submit("").is_none());
            assert!(c.submit("   \t\n").is_none());
            assert_eq!(c.messages().len(), 1);
        }

        #[test]
        fn rejected_without_active_session() {
            let mut c = controller();
            assert!(c.submit("hello?").is_none());
            assert!(c.messages().is_empty());
        }
    }

    mod deliver {
        use super::*;

        #[test]
        fn appends_assistant_reply_after_user_message() {
            let mut c = seeded_controller();
            let before = c.messages().len();
            let pending = c.submit("What is a derivative?").unwrap();
            let user_id = c.messages().last().unwrap().id;

            let reply = StudyTutor.synthesize(&pending.topic, c.category());
            assert!(c.deliver(&pending, reply));

            assert_eq!(c.messages().len(), before + 2);
            let last = c.messages().last().unwrap();
            assert_eq!(last.role, Role::Assistant);
            assert!(last.id > user_id);
            assert_eq!(last.attachments.len(), 2);
        }

        #[test]
        fn stale_reply_is_dropped_after_session_switch() {
            let mut c = seeded_controller();
            let pending = c.submit("What is a derivative?").unwrap();

            // User switches before the reply "arrives".
            c.set_active_session(SessionId("recent-ps4".to_string()));
            let after_switch = c.messages().len();

            let reply = StudyTutor.synthesize(&pending.topic, c.category());
            assert!(!c.deliver(&pending, reply));
            assert_eq!(c.messages().len(), after_switch);
        }

        #[test]
        fn stale_reply_is_dropped_even_when_switching_back() {
            let mut c = seeded_controller();
            let original = SessionId("recent-math-calculus-basics".to_string());
            let pending = c.submit("What is a derivative?").unwrap();

            c.set_active_session(SessionId("recent-ps4".to_string()));
            c.set_active_session(original);
            // Switching back re-seeded the log; only the greeting remains.
            assert_eq!(c.messages().len(), 1);

            let reply = StudyTutor.synthesize(&pending.topic, c.category());
            // Same session id, but the log was re-seeded in between; the
            // epoch check keeps the orphaned reply out.
            assert!(!c.deliver(&pending, reply));
            assert_eq!(c.messages().len(), 1);
        }

        #[test]
        fn stale_reply_is_dropped_after_clear() {
            let mut c = seeded_controller();
            let pending = c.submit("What is a derivative?").unwrap();
            c.clear_active_session();

            let reply = StudyTutor.synthesize(&pending.topic, c.category());
            assert!(!c.deliver(&pending, reply));
            assert!(c.messages().is_empty());
        }
    }

    mod events {
        use super::*;

        #[tokio::test]
        async fn transitions_are_broadcast() {
            let bus = Arc::new(EventBus::new());
            let mut rx = bus.subscribe();
            let mut c = ChatController::new("Maths", Arc::clone(&bus));

            c.set_active_session(SessionId("recent-ps4".to_string()));
            c.submit("hello").unwrap();

            assert!(matches!(
                rx.recv().await.unwrap(),
                ChatEvent::SessionSelected { .. }
            ));
            assert!(matches!(
                rx.recv().await.unwrap(),
                ChatEvent::MessageAppended { .. }
            ));
        }

        #[tokio::test]
        async fn discarded_reply_is_announced() {
            let bus = Arc::new(EventBus::new());
            let mut c = ChatController::new("Maths", Arc::clone(&bus));
            c.set_active_session(SessionId("a".to_string()));
            let pending = c.submit("hello").unwrap();
            c.set_active_session(SessionId("b".to_string()));

            let mut rx = bus.subscribe();
            c.deliver(&pending, StudyTutor.synthesize("hello", "Maths"));

            assert!(matches!(
                rx.recv().await.unwrap(),
                ChatEvent::ReplyDiscarded { .. }
            ));
        }
    }
}
