//! Per-category chat workspace: explorer wired to the chat service.
//!
//! The integration point interface layers talk to. Explorer clicks flow to
//! the conversation side here: picking a leaf activates that session,
//! clicking a folder toggles it.

use crate::category;
use crate::explorer::{CatalogError, NodeId, SessionExplorer};
use crate::session::{ChatService, SessionId};
use crate::tutor::ReplySynthesizer;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Everything one category page needs: the session tree and the chat.
pub struct ChatWorkspace {
    explorer: SessionExplorer,
    service: ChatService,
}

impl ChatWorkspace {
    /// Build a workspace for a category route. Auto-starts an `initial-*`
    /// session so the page never opens on an empty chat.
    pub fn new(
        category_id: &str,
        synthesizer: Arc<dyn ReplySynthesizer>,
    ) -> Result<Self, CatalogError> {
        let explorer = SessionExplorer::with_default_catalog()?;
        let service = ChatService::new(category::display_name(category_id), synthesizer);
        service.ensure_session();
        Ok(Self { explorer, service })
    }

    pub fn explorer(&self) -> &SessionExplorer {
        &self.explorer
    }

    pub fn service(&self) -> &ChatService {
        &self.service
    }

    /// Toggle a folder's expansion.
    pub fn toggle(&mut self, id: &NodeId) {
        self.explorer.toggle(id);
    }

    /// Click dispatch for an explorer row: a leaf becomes the active chat
    /// session under its catalog name; a folder toggles; anything else is
    /// ignored.
    pub fn open(&mut self, id: &NodeId) {
        let title = match self.explorer.get(id) {
            Some(node) if !node.is_folder() => node.name.clone(),
            _ => {
                self.explorer.toggle(id);
                return;
            }
        };
        if let Some(session_id) = self.explorer.select(id) {
            self.service.activate(session_id, title);
        }
    }

    /// Start a fresh `new-*` session and highlight it.
    pub fn new_chat(&mut self) -> SessionId {
        let id = self.service.new_chat();
        self.explorer.set_selected(Some(id.clone()));
        id
    }

    /// Forwarded to [`ChatService::send`].
    pub fn send(&self, text: &str) -> Option<JoinHandle<bool>> {
        self.service.send(text)
    }
}
