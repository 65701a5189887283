//! NodeNest Core
//!
//! This crate converts a flat collection of node records into a nested tree
//! suitable for serialization. Each input record carries its identifier, a
//! parent reference, and a "previous sibling" reference; sibling order is
//! encoded as a reversed singly-linked list rather than an explicit index.
//!
//! # Architecture
//!
//! The transformation is a one-shot, in-memory batch over three phases:
//!
//! 1. **Index builder** - O(1)-lookup maps over the flat input
//! 2. **Terminal-node detector** - finds the right-most node of every
//!    sibling run
//! 3. **Tree assembler** - walks each sibling chain backward and attaches
//!    the ordered run to its parent (or the root list)
//!
//! # Modules
//!
//! - [`models`] - Data structures ([`FlatNode`], [`TreeNode`])
//! - [`operations`] - The tree-reconstruction algorithm
//! - [`services`] - The file conversion boundary (read, transform, write)

pub mod models;
pub mod operations;
pub mod services;

// Re-export commonly used types
pub use models::{FlatNode, TreeNode};
pub use operations::{build_tree, TreeBuildError};
pub use services::{convert_file, ConvertError};
