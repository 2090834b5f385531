//! Tree nodes for the session explorer.
//!
//! The catalog is built once at startup and never mutated afterwards; all
//! runtime state (expansion, selection) lives outside the nodes in
//! [`super::SessionExplorer`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Unique identifier for a node in the session explorer tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a node is: an organizational folder or an addressable chat session.
///
/// Children live inside the `Folder` variant, so a leaf cannot carry
/// children by construction. Child order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeKind {
    Folder { children: Vec<TreeNode> },
    Leaf,
}

/// One node of the immutable session catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    /// Display label.
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl TreeNode {
    pub fn folder(
        id: impl Into<String>,
        name: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            kind: NodeKind::Folder { children },
        }
    }

    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            kind: NodeKind::Leaf,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Children of a folder; empty slice for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Folder { children } => children,
            NodeKind::Leaf => &[],
        }
    }
}

/// Faults in the static catalog. The catalog is build-time data, so these
/// are fatal at startup rather than recovered mid-session.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate node id in catalog: {0}")]
    DuplicateId(NodeId),

    #[error("Empty node id in catalog")]
    EmptyId,
}

/// Walk the forest and reject malformed catalogs (duplicate or empty ids).
///
/// Acyclicity holds by construction: nodes own their children, so no node
/// can be its own ancestor.
pub fn validate(roots: &[TreeNode]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&NodeId> = HashSet::new();
    let mut stack: Vec<&TreeNode> = roots.iter().collect();

    while let Some(node) = stack.pop() {
        if node.id.0.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if !seen.insert(&node.id) {
            return Err(CatalogError::DuplicateId(node.id.clone()));
        }
        stack.extend(node.children());
    }

    Ok(())
}
