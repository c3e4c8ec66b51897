//! Suffix tree store and construction driver.
//!
//! This module provides [`SuffixTree`], a suffix tree over a borrowed byte
//! text augmented with suffix links and their Weiner inverses. It supports:
//!
//! - Online Ukkonen construction (`build` submodule)
//! - Net frequency queries (`nf` submodule): [`SuffixTree::single_nf`] and
//!   [`SuffixTree::all_nf`]
//!
//! # Implementation Notes
//!
//! ## Arenas and handles
//!
//! Suffix links and Weiner links point in opposite directions and can form
//! cycles through the root, so nodes live in two parallel typed arenas
//! (`Vec<LeafNode>`, `Vec<InternalNode>`) and reference each other through
//! plain `u32` index handles. Handles stay stable across all builder
//! operations and nothing is reclaimed before the tree itself is dropped,
//! which also keeps teardown iterative rather than recursive.
//!
//! ## Shared leaf end
//!
//! Leaves store only the start of their edge; the end is the tree-wide
//! `global_end` counter, computed on demand. All leaves observe phase
//! advances without any per-leaf writes.

mod build;
mod nf;

use crate::node::{Child, InternalId, InternalNode, LeafId, LeafNode};
#[cfg(test)]
use crate::node::ROOT;
use crate::text::MAX_TEXT_LEN;

/// Suffix tree of a byte text, with suffix links and Weiner links.
///
/// Construction runs eagerly in [`SuffixTree::new`]. Queries require the
/// finished tree: [`SuffixTree::single_nf`] is a pure read, while
/// [`SuffixTree::all_nf`] populates the per-node `nf` fields on first use
/// and freezes them.
#[derive(Clone, Debug)]
pub struct SuffixTree<'t> {
    /// The text, borrowed for the lifetime of the tree.
    text: &'t [u8],
    /// Leaf arena, indexed by `LeafId`.
    leaves: Vec<LeafNode>,
    /// Internal arena, indexed by `InternalId`; the root is entry 0.
    internals: Vec<InternalNode>,
    /// One past the last text position consumed; the implicit end of every
    /// leaf edge.
    global_end: u32,
    /// Set once the all-NF pass has populated the `nf` fields.
    nf_ready: bool,
}

impl<'t> SuffixTree<'t> {
    /// Build the suffix tree of `text`.
    ///
    /// Callers that want net frequency semantics should pass a
    /// sentinel-wrapped text (see [`crate::wrap_sentinels`]); without a
    /// unique terminator the tree stays implicit and some suffixes end
    /// mid-edge.
    ///
    /// # Panics
    ///
    /// If `text` is longer than [`MAX_TEXT_LEN`]; [`crate::wrap_sentinels`]
    /// enforces the same limit, so wrapped texts always pass.
    pub fn new(text: &'t [u8]) -> Self {
        assert!(
            text.len() <= MAX_TEXT_LEN,
            "text exceeds the 32-bit index range"
        );
        let mut tree = Self {
            text,
            leaves: Vec::new(),
            internals: vec![InternalNode::new(0, 0)],
            global_end: 0,
            nf_ready: false,
        };
        let mut state = build::BuildState::new();
        for k in 0..text.len() as u32 {
            tree.extend(k, &mut state);
        }
        tree
    }

    /// The text this tree was built over.
    pub fn text(&self) -> &'t [u8] {
        self.text
    }

    /// Number of leaves. Equals the text length once a terminated text is
    /// fully constructed.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of internal nodes, root included.
    pub fn internal_count(&self) -> usize {
        self.internals.len()
    }

    /// Immutable access to an internal node.
    pub(crate) fn internal(&self, id: InternalId) -> &InternalNode {
        &self.internals[id.0 as usize]
    }

    /// Immutable access to a leaf node.
    pub(crate) fn leaf(&self, id: LeafId) -> &LeafNode {
        &self.leaves[id.0 as usize]
    }

    pub(crate) fn internal_mut(&mut self, id: InternalId) -> &mut InternalNode {
        &mut self.internals[id.0 as usize]
    }

    pub(crate) fn leaf_mut(&mut self, id: LeafId) -> &mut LeafNode {
        &mut self.leaves[id.0 as usize]
    }

    /// Length of a leaf's incoming edge: the shared global end minus its
    /// start.
    pub(crate) fn leaf_edge_length(&self, id: LeafId) -> u32 {
        self.global_end - self.leaf(id).start
    }

    /// Look up the child of `node` on `byte`.
    ///
    /// # Panics
    ///
    /// If the byte is present in both child maps, which would mean a node
    /// is simultaneously a leaf and an internal node.
    pub(crate) fn child(&self, node: InternalId, byte: u8) -> Child {
        let n = self.internal(node);
        let leaf = n.leaf_children.get(&byte);
        let internal = n.internal_children.get(&byte);
        assert!(
            leaf.is_none() || internal.is_none(),
            "byte {byte:#04x} leads to both a leaf and an internal child"
        );
        match (leaf, internal) {
            (Some(&l), None) => Child::Leaf(l),
            (None, Some(&i)) => Child::Internal(i),
            _ => Child::None,
        }
    }

    fn alloc_leaf(&mut self, start: u32) -> LeafId {
        let id = LeafId(self.leaves.len() as u32);
        self.leaves.push(LeafNode { start });
        id
    }

    fn alloc_internal(&mut self, start: u32, end: u32) -> InternalId {
        let id = InternalId(self.internals.len() as u32);
        self.internals.push(InternalNode::new(start, end));
        id
    }
}

#[cfg(test)]
impl<'t> SuffixTree<'t> {
    /// Check the structural invariants that must hold between phases.
    pub(crate) fn validate(&self) {
        assert!(
            self.internal(ROOT).suffix_link.is_none(),
            "root must not have a suffix link"
        );
        for (idx, node) in self.internals.iter().enumerate() {
            let id = InternalId(idx as u32);
            for byte in node.internal_children.keys() {
                assert!(
                    !node.leaf_children.contains_key(byte),
                    "child maps overlap on byte {byte:#04x}"
                );
            }
            if id != ROOT {
                assert!(
                    node.edge_length() > 0,
                    "non-root internal node {id:?} with an empty edge"
                );
                let link = node
                    .suffix_link
                    .unwrap_or_else(|| panic!("{id:?} has no suffix link"));
                assert!(
                    self.internal(link).weiner_links.contains(&id),
                    "suffix link of {id:?} is missing its Weiner inverse"
                );
            }
            for &w in &node.weiner_links {
                assert_eq!(
                    self.internal(w).suffix_link,
                    Some(id),
                    "Weiner link {w:?} -> {id:?} without matching suffix link"
                );
            }
        }
        for leaf in &self.leaves {
            assert!(leaf.start <= self.global_end, "leaf starts past global end");
        }
    }
}
