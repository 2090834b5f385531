//! Explorer runtime state: expansion set, selection, visible traversal.

use super::catalog;
use super::node::{validate, CatalogError, NodeId, TreeNode};
use crate::session::SessionId;
use std::collections::HashSet;

/// Navigable view over the session catalog.
///
/// Owns the immutable forest plus the two pieces of runtime state: which
/// folders are open and which leaf (if any) is selected. Expansion lives in
/// a side table rather than on the nodes themselves.
pub struct SessionExplorer {
    roots: Vec<TreeNode>,
    expanded: HashSet<NodeId>,
    selected: Option<SessionId>,
}

impl SessionExplorer {
    /// Build an explorer over a validated forest. Fails fast on a malformed
    /// catalog (duplicate or empty ids).
    pub fn new(
        roots: Vec<TreeNode>,
        expanded: impl IntoIterator<Item = NodeId>,
    ) -> Result<Self, CatalogError> {
        validate(&roots)?;
        Ok(Self {
            roots,
            expanded: expanded.into_iter().collect(),
            selected: None,
        })
    }

    /// Explorer over the built-in catalog with the default expansion.
    pub fn with_default_catalog() -> Result<Self, CatalogError> {
        Self::new(catalog::default_catalog(), catalog::default_expanded())
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Find a node anywhere in the forest.
    pub fn get(&self, id: &NodeId) -> Option<&TreeNode> {
        let mut stack: Vec<&TreeNode> = self.roots.iter().collect();
        while let Some(node) = stack.pop() {
            if &node.id == id {
                return Some(node);
            }
            stack.extend(node.children());
        }
        None
    }

    /// Flip the expansion of a folder. Leaf ids and unknown ids are ignored
    /// (defensive: a click race should not surface an error).
    pub fn toggle(&mut self, id: &NodeId) {
        let is_folder = match self.get(id) {
            Some(node) => node.is_folder(),
            None => {
                log::debug!("toggle ignored for unknown node: {id}");
                return;
            }
        };
        if !is_folder {
            log::debug!("toggle ignored for leaf node: {id}");
            return;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    /// Select a leaf as the active chat session. Folders never become
    /// active; selecting a folder or unknown id is a no-op returning `None`.
    pub fn select(&mut self, id: &NodeId) -> Option<SessionId> {
        let is_leaf = match self.get(id) {
            Some(node) => !node.is_folder(),
            None => {
                log::debug!("select ignored for unknown node: {id}");
                return None;
            }
        };
        if !is_leaf {
            log::debug!("select ignored for folder node: {id}");
            return None;
        }
        let session_id = SessionId(id.0.clone());
        self.selected = Some(session_id.clone());
        Some(session_id)
    }

    /// Currently highlighted session, if any.
    pub fn selected(&self) -> Option<&SessionId> {
        self.selected.as_ref()
    }

    /// Override the highlight, e.g. when a fresh session is minted outside
    /// the catalog.
    pub fn set_selected(&mut self, selected: Option<SessionId>) {
        self.selected = selected;
    }

    /// Lazy depth-first pre-order walk of the visible nodes, yielding
    /// `(node, depth)` with roots at depth 0. A folder's children are
    /// visited only while it is expanded. Recomputed from current state on
    /// every call.
    pub fn visible(&self) -> VisibleNodes<'_> {
        let mut stack: Vec<(&TreeNode, usize)> = Vec::with_capacity(self.roots.len());
        for root in self.roots.iter().rev() {
            stack.push((root, 0));
        }
        VisibleNodes {
            expanded: &self.expanded,
            stack,
        }
    }
}

/// Iterator returned by [`SessionExplorer::visible`].
pub struct VisibleNodes<'a> {
    expanded: &'a HashSet<NodeId>,
    stack: Vec<(&'a TreeNode, usize)>,
}

impl<'a> Iterator for VisibleNodes<'a> {
    type Item = (&'a TreeNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if node.is_folder() && self.expanded.contains(&node.id) {
            for child in node.children().iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
        Some((node, depth))
    }
}
