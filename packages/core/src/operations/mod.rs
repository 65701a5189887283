//! Tree Reconstruction Operations
//!
//! This module holds the core algorithm: rebuilding ordered parent/child
//! relationships from flat records whose sibling order is encoded as a
//! reversed singly-linked list (`previousSiblingId`).

mod error;
pub mod tree_builder;

pub use error::TreeBuildError;
pub use tree_builder::build_tree;
