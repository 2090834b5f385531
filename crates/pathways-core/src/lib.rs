//! # pathways-core
//!
//! Core business logic for Pathways, the AI-assisted learning workspace.
//!
//! This crate is framework-agnostic and can be used by:
//! - a desktop shell (via commands)
//! - a web frontend (via REST/WebSocket)
//!
//! ## Key Concepts
//!
//! - **SessionExplorer**: the nested category/session catalog with
//!   expansion and selection state
//! - **ChatController**: the per-category conversation state machine
//!   (optimistic send, delayed assistant reply, stale-reply discard)
//! - **ChatEvent**: state-change notifications broadcast to interfaces
//!
//! No network backend or persistence exists; catalog data is static and
//! assistant replies are synthesized locally after a fixed delay.

pub mod auth;
pub mod category;
pub mod event_bus;
pub mod events;
pub mod explorer;
pub mod session;
pub mod tutor;
pub mod workspace;

// Re-export commonly used types
pub use auth::AuthContext;
pub use event_bus::EventBus;
pub use events::ChatEvent;
pub use explorer::{CatalogError, NodeId, NodeKind, SessionExplorer, TreeNode};
pub use session::{
    Attachment, ChatController, ChatService, ConversationState, Message, MessageId, PendingReply,
    Role, Session, SessionId, REPLY_DELAY,
};
pub use tutor::{ReplySynthesizer, StudyTutor, TutorReply};
pub use workspace::ChatWorkspace;
