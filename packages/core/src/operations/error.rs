//! Error types for tree reconstruction
//!
//! These errors represent data integrity faults in the flat input that make
//! a correct tree impossible to build.

use thiserror::Error;

/// Errors that can occur while rebuilding the tree from flat records.
#[derive(Error, Debug)]
pub enum TreeBuildError {
    /// Two input records share the same node ID
    ///
    /// Letting a later record overwrite an earlier one would silently drop
    /// a node from the final tree, so duplicates are rejected outright.
    #[error("Duplicate node ID '{node_id}' in input")]
    DuplicateNodeId { node_id: String },

    /// A `previousSiblingId` chain loops back on itself
    ///
    /// The backward walk from a terminal node visited more nodes than the
    /// input contains, which is only possible if the chain is cyclic.
    #[error("Cyclic sibling chain detected while assembling siblings of node '{node_id}'")]
    CyclicSiblingChain { node_id: String },
}

impl TreeBuildError {
    /// Create a DuplicateNodeId error
    pub fn duplicate_node_id(node_id: impl Into<String>) -> Self {
        Self::DuplicateNodeId {
            node_id: node_id.into(),
        }
    }

    /// Create a CyclicSiblingChain error
    pub fn cyclic_sibling_chain(node_id: impl Into<String>) -> Self {
        Self::CyclicSiblingChain {
            node_id: node_id.into(),
        }
    }
}
