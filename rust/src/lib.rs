//! Ordered index built on an arena-backed binary search tree.
//!
//! This crate provides [`OrderedTree`], a binary search tree whose balancing
//! policy is chosen at compile time: [`BinarySearchTree`] never rebalances,
//! [`RedBlackTree`] restores the red-black invariants after each insertion
//! through recoloring and rotations. Values are yielded in ascending order by
//! a stack-based iterator that can be restricted to a value window.
//!
//! Nodes live in a [`CompactArena`] and refer to each other by [`NodeId`],
//! so a parent back-reference is just an index and a rotation only rewires
//! indices.
//!
//! ```
//! use rbindex::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for v in [20, 15, 25, 11, 10] {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.to_level_order_string(), "[ 20(b), 11(b), 25(b), 10(r), 15(r) ]");
//! assert!(tree.check_invariants());
//!
//! let window: Vec<_> = tree.bounded(Some(11), Some(20)).collect();
//! assert_eq!(window, [&11, &15, &20]);
//! ```
//!
//! The tree is single-owner: insertion takes `&mut self` and iterators
//! borrow the tree, so no iterator can observe a mutation in progress.

mod balance;
mod compact_arena;
mod construction;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use balance::{Balance, RedBlack, Unbalanced};
pub use compact_arena::{CompactArena, CompactArenaStats};
pub use error::{TreeError, TreeResult, TreeResultExt};
pub use iteration::BoundedIter;
pub use types::{
    BinarySearchTree, Color, Node, NodeId, OrderedTree, RedBlackTree, Side, DEFAULT_CAPACITY,
    NULL_NODE,
};
