//! Node Data Structures
//!
//! The converter works with two shapes of the same record: the flat input
//! form read from the source file, and the nested output form written to the
//! destination file.
//!
//! # Sibling ordering
//!
//! Order among siblings is not stored as an index. Each record names the
//! node that comes *before* it via `previousSiblingId`, forming a reversed
//! singly-linked list per parent. `previousSiblingId == null` marks the
//! first child of its parent; the last child is the node that nobody else
//! names as their previous sibling.

use serde::{Deserialize, Serialize};

/// Flat node record as it appears in the source file.
///
/// # Fields
///
/// - `node_id`: Unique identifier across the input set
/// - `name`: Display name of the node
/// - `parent_id`: Optional parent reference; `None` marks a root-level node
/// - `previous_sibling_id`: Optional reference to the sibling immediately
///   before this one; `None` marks the first child of its parent
///
/// Both references may be `null` or absent in the source JSON.
///
/// # Examples
///
/// ```rust
/// use nodenest_core::models::FlatNode;
///
/// // A root-level node with no sibling before it
/// let root = FlatNode::new("1", "Overview", None, None);
///
/// // Its second child, ordered after node "2"
/// let child = FlatNode::new("3", "Details", Some("1".into()), Some("2".into()));
/// assert_eq!(child.parent_id.as_deref(), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode {
    /// Unique identifier
    pub node_id: String,

    /// Display name
    pub name: String,

    /// Parent node ID (`None` = root-level node)
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Sibling ordering reference (single-pointer linked list, `None` = first child)
    #[serde(default)]
    pub previous_sibling_id: Option<String>,
}

impl FlatNode {
    /// Create a new flat record.
    pub fn new(
        node_id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<String>,
        previous_sibling_id: Option<String>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            name: name.into(),
            parent_id,
            previous_sibling_id,
        }
    }
}

/// Nested node as written to the destination file.
///
/// Same shape as [`FlatNode`] plus an ordered `children` array, recursively
/// down to leaf nodes. `children` is always serialized, so leaves emit
/// `"children": []`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique identifier
    pub node_id: String,

    /// Display name
    pub name: String,

    /// Parent node ID (`None` = root-level node)
    pub parent_id: Option<String>,

    /// Sibling ordering reference carried over from the input
    pub previous_sibling_id: Option<String>,

    /// Ordered child nodes, left to right
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Build a tree node from its flat record and already-ordered children.
    pub fn from_flat(flat: FlatNode, children: Vec<TreeNode>) -> Self {
        Self {
            node_id: flat.node_id,
            name: flat.name,
            parent_id: flat.parent_id,
            previous_sibling_id: flat.previous_sibling_id,
            children,
        }
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}
