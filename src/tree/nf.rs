//! Net frequency queries.
//!
//! The net frequency of a branching substring `s` is the number of distinct
//! right extensions `y` with `sy` occurring exactly once, minus the pairs
//! `(x, y)` where a repeated left extension `xs` also reaches `xsy` exactly
//! once. In tree terms: the leaf children of `s`'s node, minus the leaf
//! children shared with its Weiner predecessors. Strings that are absent,
//! unique, or end mid-edge have net frequency 0 by definition.

use std::io::{self, Write};

use super::SuffixTree;
use crate::node::{InternalId, ROOT};

/// Where a query string lands in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Location {
    /// The string does not occur in the text.
    Absent,
    /// The descent reached a leaf edge: the string occurs at most once.
    Unique,
    /// The string ends at or inside the edge of an internal node; the
    /// second field is the number of bytes left on that edge (zero when
    /// the string ends exactly at the node).
    Node(InternalId, u32),
}

impl<'t> SuffixTree<'t> {
    /// Walk from the root consuming `s` with the skip/count principle.
    ///
    /// A leaf edge on the next query byte reports [`Location::Unique`]
    /// without comparing the remaining bytes: the true frequency is at
    /// most one either way, which is all the callers need.
    fn locate(&self, s: &[u8]) -> Location {
        let mut node = ROOT;
        let mut i = 0usize;
        loop {
            if i >= s.len() {
                return Location::Node(node, (i - s.len()) as u32);
            }
            let n = self.internal(node);
            if let Some(&next) = n.internal_children.get(&s[i]) {
                let child = self.internal(next);
                let edge = child.edge_length() as usize;
                let len = edge.min(s.len() - i);
                let start = child.start as usize;
                if s[i..i + len] != self.text[start..start + len] {
                    return Location::Absent;
                }
                node = next;
                i += edge;
            } else if n.leaf_children.contains_key(&s[i]) {
                return Location::Unique;
            } else {
                return Location::Absent;
            }
        }
    }

    /// Net frequency of a single substring. Pure read; the tree is not
    /// modified.
    ///
    /// Returns 0 when `s` is absent, occurs at most once, or does not end
    /// exactly at an internal node (not right-branching).
    pub fn single_nf(&self, s: &[u8]) -> u32 {
        let Location::Node(node, 0) = self.locate(s) else {
            return 0;
        };
        let n = self.internal(node);
        let mut nf = n.leaf_children.len() as u32;
        if nf == 0 {
            return 0;
        }
        for &xs in &n.weiner_links {
            for y in self.internal(xs).leaf_children.keys() {
                if n.leaf_children.contains_key(y) {
                    nf -= 1;
                }
            }
        }
        nf
    }

    /// Populate every internal node's `nf` field.
    ///
    /// Each node must contribute exactly once, so the pass runs only on the
    /// first call; afterwards the values are frozen.
    fn compute_all_nf(&mut self) {
        if self.nf_ready {
            return;
        }
        self.nf_ready = true;
        for idx in 1..self.internals.len() {
            let xs = InternalId(idx as u32);
            if self.internal(xs).leaf_children.is_empty() {
                continue;
            }
            let contribution = self.internal(xs).leaf_children.len() as i32;
            self.internal_mut(xs).nf += contribution;
            let s = self
                .internal(xs)
                .suffix_link
                .expect("internal node without a suffix link");
            let ys: Vec<u8> = self.internal(xs).leaf_children.keys().copied().collect();
            for y in ys {
                if self.internal(s).leaf_children.contains_key(&y) {
                    self.internal_mut(s).nf -= 1;
                }
            }
        }
    }

    /// Compute (on first use) the net frequency of every branching
    /// substring and return the `(substring, nf)` pairs with positive net
    /// frequency.
    ///
    /// The order is deterministic: depth-first from the root, children in
    /// ascending first-byte order. Each substring is an exact slice of the
    /// text.
    pub fn nf_entries(&mut self) -> Vec<(&'t [u8], u32)> {
        self.compute_all_nf();
        let mut out = Vec::new();
        let mut roots: Vec<(u8, InternalId)> = self
            .internal(ROOT)
            .internal_children
            .iter()
            .map(|(&b, &id)| (b, id))
            .collect();
        roots.sort_unstable_by_key(|&(b, _)| b);
        for (_, id) in roots {
            let n = self.internal(id);
            self.collect_entries(id, n.start, n.edge_length(), &mut out);
        }
        out
    }

    /// Pre-order walk below a child of the root. `start` is that child's
    /// edge start: every internal descendant's path label begins there, so
    /// slicing `text[start..start + depth]` reconstructs the label without
    /// stitching edges together.
    fn collect_entries(
        &self,
        node: InternalId,
        start: u32,
        depth: u32,
        out: &mut Vec<(&'t [u8], u32)>,
    ) {
        let text: &'t [u8] = self.text;
        let n = self.internal(node);
        if n.nf > 0 {
            let s = start as usize;
            out.push((&text[s..s + depth as usize], n.nf as u32));
        }
        let mut children: Vec<(u8, InternalId)> = n
            .internal_children
            .iter()
            .map(|(&b, &id)| (b, id))
            .collect();
        children.sort_unstable_by_key(|&(b, _)| b);
        for (_, child) in children {
            let len = self.internal(child).edge_length();
            self.collect_entries(child, start, depth + len, out);
        }
    }

    /// Compute (on first use) all net frequencies and write the positive
    /// ones to `sink`, one tab-separated `substring\tnf` pair per line.
    /// Substrings are emitted as raw bytes of the text.
    pub fn all_nf<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        for (s, nf) in self.nf_entries() {
            sink.write_all(s)?;
            writeln!(sink, "\t{nf}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_outcomes() {
        let tree = SuffixTree::new(b"#banana$");
        assert_eq!(tree.locate(b"zzz"), Location::Absent);
        assert_eq!(tree.locate(b"#b"), Location::Unique);
        // "an" ends one byte into the edge of the "ana" node
        assert!(matches!(tree.locate(b"an"), Location::Node(_, 1)));
        assert!(matches!(tree.locate(b"ana"), Location::Node(_, 0)));
        assert!(matches!(tree.locate(b""), Location::Node(ROOT, 0)));
    }

    #[test]
    fn test_single_nf_paper_example() {
        let tree = SuffixTree::new(b"#abcdabybcdbxbcyabcd$");
        assert_eq!(tree.single_nf(b"abcd"), 2);
    }

    #[test]
    fn test_single_nf_banana() {
        let tree = SuffixTree::new(b"#banana$");
        // only 'a' follows "an": not right-branching, no node
        assert_eq!(tree.single_nf(b"an"), 0);
        // both occurrences of "ana" have unique one-byte contexts
        assert_eq!(tree.single_nf(b"ana"), 2);
        assert_eq!(tree.single_nf(b"na"), 0);
    }

    #[test]
    fn test_single_nf_run_of_one_byte() {
        let tree = SuffixTree::new(b"#aaaa$");
        // the lone leaf child '$' of "a" is cancelled through "aa"
        assert_eq!(tree.single_nf(b"a"), 0);
        assert_eq!(tree.single_nf(b"aa"), 0);
        // "aaa" has no repeated left extension, so nothing cancels
        assert_eq!(tree.single_nf(b"aaa"), 2);
    }

    #[test]
    fn test_single_nf_distinct_contexts() {
        let tree = SuffixTree::new(b"#xabyabz$");
        assert_eq!(tree.single_nf(b"ab"), 2);
    }

    #[test]
    fn test_single_nf_absent_unique_nonbranching() {
        let tree = SuffixTree::new(b"#abcdabybcdbxbcyabcd$");
        assert_eq!(tree.single_nf(b"zzz"), 0);
        assert_eq!(tree.single_nf(b"#abcd"), 0);
        assert_eq!(tree.single_nf(b"abc"), 0);
    }

    #[test]
    fn test_all_nf_matches_single_nf() {
        let text = b"#abcdabybcdbxbcyabcd$";
        let mut tree = SuffixTree::new(text);
        let entries: Vec<(Vec<u8>, u32)> = tree
            .nf_entries()
            .into_iter()
            .map(|(s, nf)| (s.to_vec(), nf))
            .collect();
        assert!(!entries.is_empty());
        assert!(entries.iter().any(|(s, nf)| s == b"abcd" && *nf == 2));
        let fresh = SuffixTree::new(text);
        for (s, nf) in &entries {
            assert!(*nf > 0);
            assert_eq!(fresh.single_nf(s), *nf, "mismatch for {:?}", s);
        }
    }

    #[test]
    fn test_all_nf_runs_once() {
        let mut tree = SuffixTree::new(b"#abcdabybcdbxbcyabcd$");
        let first: Vec<(Vec<u8>, u32)> = tree
            .nf_entries()
            .into_iter()
            .map(|(s, nf)| (s.to_vec(), nf))
            .collect();
        let second: Vec<(Vec<u8>, u32)> = tree
            .nf_entries()
            .into_iter()
            .map(|(s, nf)| (s.to_vec(), nf))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_nf_sink_format() {
        let mut tree = SuffixTree::new(b"#aaaa$");
        let mut out = Vec::new();
        tree.all_nf(&mut out).unwrap();
        // "aaa" is the only string with positive net frequency
        assert_eq!(out, b"aaa\t2\n");
    }
}
