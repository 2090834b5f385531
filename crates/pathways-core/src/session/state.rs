//! Per-session identity and conversation state.

use super::message::Message;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Unique identifier for a chat session.
///
/// Either a catalog leaf id or a freshly minted `{reason}-{timestamp}` id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Mint a fresh id for a session that does not come from the catalog.
    pub fn mint(reason: MintReason) -> Self {
        Self(format!(
            "{}-{}",
            reason.as_str(),
            Utc::now().timestamp_millis()
        ))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a session id was minted outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintReason {
    /// Auto-started on entering a category with no active session.
    Initial,
    /// Explicit "new chat" action.
    New,
}

impl MintReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MintReason::Initial => "initial",
            MintReason::New => "new",
        }
    }
}

/// Display-only metadata for one chat session.
///
/// Sessions are never deleted; they live for the lifetime of the in-memory
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub created_label: String,
}

impl Session {
    pub fn new(id: SessionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_label: Utc::now().format("Created %b %-d, %Y").to_string(),
        }
    }
}

/// Conversation state scoped to the active session.
///
/// `messages` is non-empty only while `active_session_id` is `Some`;
/// switching sessions clears and re-seeds the log synchronously.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub active_session_id: Option<SessionId>,
    pub messages: Vec<Message>,
    pub pending_input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod session_id {
        use super::*;

        #[test]
        fn mint_initial_uses_reason_prefix() {
            let id = SessionId::mint(MintReason::Initial);
            let suffix = id.0.strip_prefix("initial-").expect("missing prefix");
            assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn mint_new_uses_reason_prefix() {
            let id = SessionId::mint(MintReason::New);
            assert!(id.0.starts_with("new-"));
        }

        #[test]
        fn display_shows_inner_string() {
            let id = SessionId("recent-ps4".to_string());
            assert_eq!(format!("{id}"), "recent-ps4");
        }

        #[test]
        fn can_be_used_as_hashmap_key() {
            use std::collections::HashMap;
            let mut map = HashMap::new();
            let id = SessionId("recent-ps4".to_string());
            map.insert(id.clone(), "value");
            assert_eq!(map.get(&id), Some(&"value"));
        }
    }

    mod session {
        use super::*;

        #[test]
        fn new_stamps_created_label() {
            let session = Session::new(SessionId("s".to_string()), "Calculus Basics");
            assert_eq!(session.title, "Calculus Basics");
            assert!(session.created_label.starts_with("Created "));
        }
    }

    mod conversation_state {
        use super::*;

        #[test]
        fn default_is_empty() {
            let state = ConversationState::default();
            assert!(state.active_session_id.is_none());
            assert!(state.messages.is_empty());
            assert!(state.pending_input.is_empty());
        }
    }
}
