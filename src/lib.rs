//! # String Net Frequency
//!
//! Suffix-tree computation of substring net frequency (NF).
//!
//! The net frequency of a repeated substring counts the occurrences whose
//! one-character context is unique on both sides, so it measures how often
//! a string occurs "on its own" rather than inside a longer repeat. Key
//! pieces:
//!
//! - **Online construction**: Ukkonen's algorithm with the children of each
//!   node split into a leaf map and an internal map, so leaf-vs-internal
//!   tests need no tag bits
//! - **Dual links**: every internal node carries its suffix link and the
//!   inverse Weiner links, installed as internal nodes are created
//! - **Queries**: [`SuffixTree::single_nf`] for one substring,
//!   [`SuffixTree::all_nf`] for every branching substring in a single pass
//!
//! ## Sentinels
//!
//! Net frequency needs every text position to have both neighbors, so
//! callers wrap the raw input in `#`/`$` sentinels that occur nowhere else.
//! [`wrap_sentinels`] implements and validates that contract; the tree
//! itself accepts any byte text.
//!
//! ## Example
//!
//! ```
//! use netfreq::{wrap_sentinels, SuffixTree};
//!
//! let text = wrap_sentinels(b"abcdabybcdbxbcyabcd").unwrap();
//! let mut tree = SuffixTree::new(&text);
//! assert_eq!(tree.single_nf(b"abcd"), 2);
//!
//! let mut report = Vec::new();
//! tree.all_nf(&mut report).unwrap();
//! assert!(!report.is_empty());
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
mod node;
mod text;
mod tree;

pub use error::{Result, TextError};
pub use text::{wrap_sentinels, LEFT_SENTINEL, MAX_TEXT_LEN, RIGHT_SENTINEL};
pub use tree::SuffixTree;
