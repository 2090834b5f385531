//! Events emitted by the conversation core.

use crate::session::{Message, SessionId};
use serde::{Deserialize, Serialize};

/// State transition notifications for interface layers.
///
/// Frontends subscribe via [`crate::EventBus`] and mirror the transitions
/// the core already applied; no event requires a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ChatEvent {
    /// A session became active and its log was re-seeded.
    SessionSelected { session_id: SessionId },

    /// The active session was cleared (empty state).
    SessionCleared,

    /// A message was appended to the active session's log.
    MessageAppended {
        session_id: SessionId,
        message: Message,
    },

    /// An in-flight reply arrived for a session that is no longer active
    /// and was dropped.
    ReplyDiscarded { session_id: SessionId },
}
