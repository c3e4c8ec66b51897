//! Online construction (Ukkonen's algorithm).
//!
//! The tree is built in one phase per text position. Phase `k` extends the
//! implicit suffix tree of `text[..k]` with `text[k]`, inserting the
//! suffixes counted by `remainder` explicitly and leaving the rest to the
//! shared global end. The extension rules:
//!
//! - rule 2b: the path ends at a node and no edge continues with `text[k]`;
//!   hang a new leaf off that node
//! - rule 2a: the path ends inside an edge and the next edge byte differs
//!   from `text[k]`; split the edge and hang a new leaf off the split node
//! - rule 3: the next byte is already present; record it in the active
//!   point and stop the phase (later extensions would do no work)
//!
//! Whenever an extension touches an internal node, the pending suffix link
//! from the previous extension is installed together with its Weiner
//! inverse, so both link directions stay in sync throughout construction.

use super::SuffixTree;
use crate::node::{Child, InternalId, ROOT};

/// Mutable construction state threaded through the phases.
///
/// The active point `(active_node, active_edge, active_length)` remembers
/// where the next insertion starts: `active_edge` indexes the text byte
/// naming the outgoing edge, `active_length` is the distance already
/// matched along it. `remainder` counts the suffixes not yet explicitly
/// inserted; `need_link` is the node still waiting for its suffix link.
#[derive(Clone, Copy, Debug)]
pub(super) struct BuildState {
    active_node: InternalId,
    active_edge: u32,
    active_length: u32,
    remainder: u32,
    need_link: Option<InternalId>,
}

impl BuildState {
    pub(super) fn new() -> Self {
        Self {
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remainder: 0,
            need_link: None,
        }
    }
}

impl<'t> SuffixTree<'t> {
    /// Run phase `k`, processing `text[k]`.
    pub(super) fn extend(&mut self, k: u32, st: &mut BuildState) {
        st.need_link = None;
        st.remainder += 1;

        while st.remainder > 0 {
            if st.active_length == 0 {
                // right at a node: the edge byte defaults to the new suffix
                st.active_edge = k;
            }
            let edge_byte = self.text[st.active_edge as usize];

            match self.child(st.active_node, edge_byte) {
                // rule 2b
                Child::None => {
                    let leaf = self.alloc_leaf(k);
                    self.internal_mut(st.active_node)
                        .leaf_children
                        .insert(edge_byte, leaf);
                    let node = st.active_node;
                    self.add_link(st, node);
                }
                child => {
                    let (child_start, child_len) = match child {
                        Child::Leaf(l) => (self.leaf(l).start, self.leaf_edge_length(l)),
                        Child::Internal(i) => {
                            let n = self.internal(i);
                            (n.start, n.edge_length())
                        }
                        Child::None => unreachable!(),
                    };

                    // trick 1: skip/count until the edge is strictly longer
                    // than the active length
                    if st.active_length >= child_len {
                        let Child::Internal(next) = child else {
                            panic!("walk-down reached a leaf");
                        };
                        st.active_edge += child_len;
                        st.active_length -= child_len;
                        st.active_node = next;
                        continue;
                    }

                    // rule 3
                    if self.text[(child_start + st.active_length) as usize]
                        == self.text[k as usize]
                    {
                        st.active_length += 1;
                        let node = st.active_node;
                        self.add_link(st, node);
                        // trick 3: no later extension in this phase does work
                        break;
                    }

                    // rule 2a
                    let split = self.split_edge(st, k, edge_byte, child);
                    self.add_link(st, split);
                }
            }

            st.remainder -= 1;

            if st.active_node == ROOT && st.active_length > 0 {
                st.active_length -= 1;
                // shift to the first byte of the next suffix to insert
                st.active_edge = k - st.remainder + 1;
            } else {
                st.active_node = self.internal(st.active_node).suffix_link.unwrap_or(ROOT);
            }
        }

        self.global_end += 1;
    }

    /// Split `child`'s edge `active_length` bytes in, attach a fresh leaf
    /// for position `k`, and return the new split node.
    ///
    /// The split node takes over the old child's slot under the active
    /// node; the old child keeps its tail of the edge and is re-parented
    /// under the split node, staying in the child map matching its kind.
    fn split_edge(&mut self, st: &BuildState, k: u32, edge_byte: u8, child: Child) -> InternalId {
        let byte_at_k = self.text[k as usize];
        match child {
            Child::Leaf(l) => {
                let old_start = self.leaf(l).start;
                let new_start = old_start + st.active_length;
                self.leaf_mut(l).start = new_start;
                let byte_at_tail = self.text[new_start as usize];

                let split = self.alloc_internal(old_start, new_start);
                let leaf = self.alloc_leaf(k);
                self.internal_mut(split).leaf_children.insert(byte_at_k, leaf);
                self.internal_mut(split).leaf_children.insert(byte_at_tail, l);

                let parent = self.internal_mut(st.active_node);
                parent.internal_children.insert(edge_byte, split);
                // no longer a leaf child of the active node
                parent.leaf_children.remove(&edge_byte);
                split
            }
            Child::Internal(i) => {
                let old_start = self.internal(i).start;
                let new_start = old_start + st.active_length;
                self.internal_mut(i).start = new_start;
                let byte_at_tail = self.text[new_start as usize];

                let split = self.alloc_internal(old_start, new_start);
                let leaf = self.alloc_leaf(k);
                self.internal_mut(split).leaf_children.insert(byte_at_k, leaf);
                self.internal_mut(split)
                    .internal_children
                    .insert(byte_at_tail, i);

                // replaces the old child's slot directly
                self.internal_mut(st.active_node)
                    .internal_children
                    .insert(edge_byte, split);
                split
            }
            Child::None => unreachable!("split requires an existing child"),
        }
    }

    /// Install the pending suffix link onto `node`, record the Weiner
    /// inverse, and make `node` the new pending target.
    fn add_link(&mut self, st: &mut BuildState, node: InternalId) {
        if let Some(pending) = st.need_link {
            let prior = self.internal_mut(pending).suffix_link.replace(node);
            debug_assert!(
                prior.is_none() || prior == Some(node),
                "suffix link of {pending:?} retargeted from {prior:?} to {node:?}"
            );
            self.internal_mut(node).weiner_links.insert(pending);
        }
        st.need_link = Some(node);
    }
}
