//! Hierarchical session explorer.
//!
//! Presents the nested category/session catalog, tracks which folders are
//! open, and reports the user's leaf selection to the conversation side.

pub mod catalog;
mod node;
mod state;

pub use node::{validate, CatalogError, NodeId, NodeKind, TreeNode};
pub use state::{SessionExplorer, VisibleNodes};
