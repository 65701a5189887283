//! Flat-to-tree reconstruction
//!
//! Rebuilds, for every parent, the correctly ordered sequence of children
//! from `previousSiblingId` back-links, in three strictly sequential phases:
//!
//! 1. **Index builder** - materializes O(1)-lookup maps from the flat input
//! 2. **Terminal-node detector** - marks, for every sibling run, the node
//!    that nobody names as their previous sibling (the right-most child)
//! 3. **Tree assembler** - walks backward from each terminal node, prepending
//!    as it goes, and attaches the ordered run to its parent (or root list)
//!
//! Each phase makes one linear pass over the node set, so the whole
//! reconstruction is O(n): every node is pushed into exactly one sibling run
//! and moved into exactly one position of the output tree.
//!
//! # Malformed input
//!
//! Duplicate node IDs and cyclic sibling chains are rejected with
//! [`TreeBuildError`]. Dangling references are tolerated: a `parentId` that
//! resolves to nothing attaches its sibling run at the root level, and a
//! `previousSiblingId` that resolves to nothing ends the backward walk
//! early. Both cases, along with any node left unreachable from the root
//! list, are reported through `tracing` warnings.

use std::collections::{HashMap, VecDeque};

use crate::models::{FlatNode, TreeNode};
use crate::operations::TreeBuildError;

/// Per-node bookkeeping used while reconstructing sibling order.
#[derive(Debug, Clone)]
struct NodeMeta {
    /// Still true after the detection pass iff no other node names this one
    /// as its previous sibling
    is_last_node: bool,

    /// Set once this node's children have been assembled, making assembly
    /// idempotent per sibling group
    children_are_sorted: bool,
}

impl Default for NodeMeta {
    fn default() -> Self {
        Self {
            is_last_node: true,
            children_are_sorted: false,
        }
    }
}

/// O(1)-lookup view of the flat input. Owns every record; the assembler
/// moves each record out exactly once when the tree is materialized.
#[derive(Debug, Default)]
struct NodeIndex {
    records: HashMap<String, FlatNode>,
    meta: HashMap<String, NodeMeta>,
}

/// Rebuild the nested tree from a flat node list.
///
/// Returns the ordered root-level nodes, each transitively holding its fully
/// ordered descendant tree.
///
/// # Errors
///
/// - [`TreeBuildError::DuplicateNodeId`] if two records share an ID
/// - [`TreeBuildError::CyclicSiblingChain`] if a `previousSiblingId` chain
///   loops instead of terminating at a first child
///
/// # Examples
///
/// ```rust
/// use nodenest_core::models::FlatNode;
/// use nodenest_core::operations::build_tree;
///
/// let roots = build_tree(vec![
///     FlatNode::new("1", "First", None, None),
///     FlatNode::new("2", "Second", None, Some("1".into())),
/// ])?;
///
/// assert_eq!(roots.len(), 2);
/// assert_eq!(roots[0].node_id, "1");
/// assert_eq!(roots[1].node_id, "2");
/// # Ok::<(), nodenest_core::operations::TreeBuildError>(())
/// ```
pub fn build_tree(nodes: Vec<FlatNode>) -> Result<Vec<TreeNode>, TreeBuildError> {
    let mut index = build_index(nodes)?;
    mark_terminal_nodes(&mut index);
    assemble_tree(index)
}

/// Phase 1: one linear pass producing the record and metadata maps.
///
/// Every node starts as a presumed terminal (`is_last_node = true`) with an
/// unassembled child list (`children_are_sorted = false`).
fn build_index(nodes: Vec<FlatNode>) -> Result<NodeIndex, TreeBuildError> {
    let mut index = NodeIndex {
        records: HashMap::with_capacity(nodes.len()),
        meta: HashMap::with_capacity(nodes.len()),
    };

    for node in nodes {
        if index.records.contains_key(&node.node_id) {
            return Err(TreeBuildError::duplicate_node_id(&node.node_id));
        }
        index.meta.insert(node.node_id.clone(), NodeMeta::default());
        index.records.insert(node.node_id.clone(), node);
    }

    Ok(index)
}

/// Phase 2: one linear pass clearing `is_last_node` on every node that some
/// other node names as its previous sibling.
///
/// Afterwards `is_last_node` remains true exactly for the right-most child
/// of each sibling run (or an only child). An unresolvable
/// `previousSiblingId` is a no-op here; if it matters, it surfaces during
/// assembly as a shortened chain.
fn mark_terminal_nodes(index: &mut NodeIndex) {
    for node in index.records.values() {
        if let Some(prev_id) = &node.previous_sibling_id {
            if let Some(meta) = index.meta.get_mut(prev_id) {
                meta.is_last_node = false;
            }
        }
    }
}

/// Phase 3: reconstruct every sibling run and materialize the output tree.
///
/// Iteration order over the index is irrelevant to correctness: only
/// terminal nodes initiate a run, and the `children_are_sorted` /
/// `root_tree_is_sorted` flags make assembly idempotent per sibling group.
fn assemble_tree(mut index: NodeIndex) -> Result<Vec<TreeNode>, TreeBuildError> {
    let total = index.records.len();

    // Ordered child IDs per parent, plus the root-level run. The root list
    // has no parent node to carry a `children_are_sorted` flag, so a scalar
    // stands in for it.
    let mut child_runs: HashMap<String, Vec<String>> = HashMap::new();
    let mut root_run: Vec<String> = Vec::new();
    let mut root_tree_is_sorted = false;

    let ids: Vec<String> = index.records.keys().cloned().collect();
    for id in &ids {
        if !index.meta[id].is_last_node {
            continue;
        }

        let mut parent_id = index.records[id].parent_id.clone();
        if let Some(pid) = &parent_id {
            if !index.records.contains_key(pid) {
                tracing::warn!(
                    "parent '{}' of node '{}' does not resolve; attaching its sibling run at the root level",
                    pid,
                    id
                );
                parent_id = None;
            }
        }

        // Idempotence guard: a well-formed input has exactly one terminal
        // node per sibling group, but malformed input can produce several.
        // Only the first one assembles the group.
        match &parent_id {
            Some(pid) if index.meta[pid].children_are_sorted => {
                tracing::warn!(
                    "siblings of parent '{}' were already assembled; skipping terminal node '{}'",
                    pid,
                    id
                );
                continue;
            }
            None if root_tree_is_sorted => {
                tracing::warn!(
                    "root list was already assembled; skipping terminal node '{}'",
                    id
                );
                continue;
            }
            _ => {}
        }

        let run = walk_sibling_run(&index.records, id, total)?;

        match parent_id {
            Some(pid) => {
                if let Some(meta) = index.meta.get_mut(&pid) {
                    meta.children_are_sorted = true;
                }
                child_runs.insert(pid, run);
            }
            None => {
                root_tree_is_sorted = true;
                root_run = run;
            }
        }
    }

    let mut roots = Vec::with_capacity(root_run.len());
    for id in &root_run {
        if let Some(root) = materialize(id, &mut index.records, &child_runs) {
            roots.push(root);
        }
    }

    if !index.records.is_empty() {
        tracing::warn!(
            "{} of {} nodes are unreachable from the root list and were dropped",
            index.records.len(),
            total
        );
    }

    Ok(roots)
}

/// Walk backward from a terminal node, prepending each node, until the
/// `previousSiblingId` is null or unresolved. Yields the full sibling run in
/// left-to-right order.
///
/// The walk is bounded by the total node count: a longer walk can only mean
/// the chain is cyclic, which would otherwise never terminate.
fn walk_sibling_run(
    records: &HashMap<String, FlatNode>,
    terminal_id: &str,
    total: usize,
) -> Result<Vec<String>, TreeBuildError> {
    let mut run: VecDeque<String> = VecDeque::new();
    let mut current_id = terminal_id.to_string();

    loop {
        if run.len() >= total {
            return Err(TreeBuildError::cyclic_sibling_chain(terminal_id));
        }
        run.push_front(current_id.clone());

        let prev = records
            .get(&current_id)
            .and_then(|node| node.previous_sibling_id.clone());
        match prev {
            Some(prev_id) if records.contains_key(&prev_id) => {
                current_id = prev_id;
            }
            Some(prev_id) => {
                tracing::warn!(
                    "previous sibling '{}' of node '{}' does not resolve; treating '{}' as the start of its run",
                    prev_id,
                    current_id,
                    current_id
                );
                break;
            }
            None => break,
        }
    }

    Ok(run.into_iter().collect())
}

/// Move one record out of the index and recursively materialize its subtree.
///
/// Returns `None` if the record was already consumed, which can only happen
/// when malformed input routes the same node into two sibling runs; the node
/// then stays at its first attachment site.
fn materialize(
    id: &str,
    records: &mut HashMap<String, FlatNode>,
    child_runs: &HashMap<String, Vec<String>>,
) -> Option<TreeNode> {
    let flat = records.remove(id)?;

    let child_ids = child_runs.get(id).cloned().unwrap_or_default();
    let mut children = Vec::with_capacity(child_ids.len());
    for child_id in &child_ids {
        match materialize(child_id, records, child_runs) {
            Some(child) => children.push(child),
            None => {
                tracing::warn!(
                    "node '{}' was already attached elsewhere; dropping its duplicate reference under '{}'",
                    child_id,
                    id
                );
            }
        }
    }

    Some(TreeNode::from_flat(flat, children))
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "tree_builder_test.rs"]
mod tree_builder_test;
