//! Core types and data structures for OrderedTree.
//!
//! This module contains the tree type, the arena node layout and the
//! constants shared by the rest of the crate.

use std::marker::PhantomData;

use crate::balance::{Balance, RedBlack, Unbalanced};
use crate::compact_arena::CompactArena;

pub use crate::compact_arena::{NodeId, NULL_NODE};

/// Default number of node slots reserved by `OrderedTree::with_default_capacity`.
pub const DEFAULT_CAPACITY: usize = 16;

/// Color bit carried by every node. Only the red-black policy reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Suffix used by the debug serializations.
    pub fn suffix(self) -> &'static str {
        match self {
            Color::Red => "(r)",
            Color::Black => "(b)",
        }
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single tree vertex stored in the arena.
///
/// `left` and `right` are the links that make a node reachable from the root.
/// `parent` is only ever followed upward; it never keeps a node alive.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
    pub(crate) color: Color,
}

/// Binary search tree over an arena of nodes, balanced according to `B`.
///
/// Values equal to a node are routed into its left subtree on insertion, so
/// duplicates are kept rather than replaced. The balancing policy is fixed at
/// compile time: [`Unbalanced`] gives a plain BST, [`RedBlack`] restores the
/// red-black invariants after every insertion.
///
/// # Examples
///
/// ```
/// use rbindex::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for v in [20, 15, 25, 1, 16] {
///     tree.insert(v);
/// }
///
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.to_level_order_string(), "[ 20(b), 15(b), 25(b), 1(r), 16(r) ]");
///
/// let window: Vec<_> = tree.bounded(Some(10), Some(20)).copied().collect();
/// assert_eq!(window, [15, 16, 20]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n) with `RedBlack`, O(depth) with `Unbalanced`
/// - **Lookup**: O(depth)
/// - **Bounded iteration**: O(depth + k) for k yielded values
/// - **len**: O(n), there is no cached counter
#[derive(Debug, Clone)]
pub struct OrderedTree<T, B: Balance = RedBlack> {
    /// Root node, or `NULL_NODE` when the tree is empty.
    pub(crate) root: NodeId,
    /// Storage for every node reachable from `root`.
    pub(crate) nodes: CompactArena<Node<T>>,
    pub(crate) policy: PhantomData<B>,
}

/// Plain binary search tree with no rebalancing.
pub type BinarySearchTree<T> = OrderedTree<T, Unbalanced>;

/// Binary search tree that keeps the red-black invariants after every insert.
pub type RedBlackTree<T> = OrderedTree<T, RedBlack>;
