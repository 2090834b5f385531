//! Conversation state and the send/receive lifecycle.
//!
//! A session is one chat thread; the controller owns the active session's
//! append-only message log and the optimistic-send protocol. The service
//! layers the simulated reply latency on top.

mod controller;
mod message;
mod service;
mod state;

pub use controller::{ChatController, PendingReply};
pub use message::{Attachment, Message, MessageId, MessageIdGen, Role};
pub use service::{ChatService, REPLY_DELAY};
pub use state::{ConversationState, MintReason, Session, SessionId};
