//! Data Models
//!
//! This module contains the two node representations used by the converter:
//!
//! - `FlatNode` - one record of the flat input file
//! - `TreeNode` - one node of the nested output tree
//!
//! Both use camelCase field names on the wire (`nodeId`, `parentId`,
//! `previousSiblingId`) to match the source file format.

mod node;

pub use node::{FlatNode, TreeNode};
