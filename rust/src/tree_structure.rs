//! Tree structure management operations for OrderedTree.
//!
//! This module holds the rotation primitive shared by every balancing policy,
//! plus tree-level queries: size, height, emptiness and clearing.

use log::{trace, warn};

use crate::balance::{Balance, Unbalanced};
use crate::compact_arena::CompactArena;
use crate::error::{TreeError, TreeResult};
use crate::types::{Node, NodeId, OrderedTree, Side, NULL_NODE};

// ============================================================================
// ROTATION PRIMITIVE
// ============================================================================

/// Rotate `child` above `parent`, checking both operands first.
///
/// A left child produces a right rotation and a right child a left rotation.
/// `root` is retargeted when `parent` was the root.
pub(crate) fn rotate<T>(
    nodes: &mut CompactArena<Node<T>>,
    root: &mut NodeId,
    child: NodeId,
    parent: NodeId,
) -> TreeResult<()> {
    if !nodes.contains(child) {
        return Err(TreeError::null_argument("rotate", "a child node"));
    }
    if !nodes.contains(parent) {
        return Err(TreeError::null_argument("rotate", "a parent node"));
    }
    match nodes.side_of(child, parent) {
        Some(side) => {
            rotate_at(nodes, root, child, parent, side);
            Ok(())
        }
        None => {
            warn!("rejected rotation of node {} around node {}", child, parent);
            Err(TreeError::invalid_relationship(child, parent))
        }
    }
}

/// Rotation with the relationship already established: `child` sits on
/// `side` of `parent`.
pub(crate) fn rotate_at<T>(
    nodes: &mut CompactArena<Node<T>>,
    root: &mut NodeId,
    child: NodeId,
    parent: NodeId,
    side: Side,
) {
    trace!(
        "rotating {} node {} above node {}",
        match side {
            Side::Left => "right:",
            Side::Right => "left:",
        },
        child,
        parent
    );

    let grandparent = nodes.parent(parent);
    let parent_side = nodes.side_of(parent, grandparent);

    // The child's inner subtree crosses over to the parent.
    let inner = nodes.child(child, side.opposite());
    nodes.set_child(parent, side, inner);
    nodes.set_parent(inner, parent);

    nodes.set_child(child, side.opposite(), parent);
    nodes.set_parent(parent, child);

    nodes.set_parent(child, grandparent);
    match parent_side {
        Some(slot) => nodes.set_child(grandparent, slot, child),
        None => *root = child,
    }
}

impl<T: Ord> OrderedTree<T, Unbalanced> {
    /// Rotate `child` above its parent `parent`.
    ///
    /// Only a plain BST exposes rotation: on a red-black tree an arbitrary
    /// rotation would break the black-height invariant.
    ///
    /// # Errors
    ///
    /// * `TreeError::NullArgument` if either id is `NULL_NODE` or not a node
    ///   of this tree.
    /// * `TreeError::InvalidRelationship` if `child` is neither child of
    ///   `parent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbindex::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<i32> = [3, 2, 5, 4, 6].into_iter().collect();
    /// let root = tree.root_id().unwrap();
    /// let right = tree.right_of(root).unwrap();
    /// tree.rotate(right, root).unwrap();
    /// assert_eq!(tree.to_level_order_string(), "[ 5, 3, 6, 2, 4 ]");
    /// ```
    pub fn rotate(&mut self, child: NodeId, parent: NodeId) -> TreeResult<()> {
        rotate(&mut self.nodes, &mut self.root, child, parent)
    }
}

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<T, B: Balance> OrderedTree<T, B> {
    /// Returns the number of values in the tree by walking every node.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            if let Some(node) = self.nodes.get(id) {
                count += 1;
                pending.push(node.left);
                pending.push(node.right);
            }
        }
        count
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self.root, 1)];
        while let Some((id, depth)) = pending.pop() {
            if let Some(node) = self.nodes.get(id) {
                height = height.max(depth);
                pending.push((node.left, depth + 1));
                pending.push((node.right, depth + 1));
            }
        }
        height
    }

    /// Discard every value. Node ids handed out earlier become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NULL_NODE;
    }
}
