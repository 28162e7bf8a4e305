//! GET operations for OrderedTree.
//!
//! Value lookup plus the node navigation used to name rotation operands.
//! Navigation returns `None` for absent links instead of `NULL_NODE`.

use crate::balance::Balance;
use crate::compact_arena::CompactArenaStats;
use crate::types::{Color, NodeId, OrderedTree, NULL_NODE};

fn present(id: NodeId) -> Option<NodeId> {
    (id != NULL_NODE).then_some(id)
}

impl<T: Ord, B: Balance> OrderedTree<T, B> {
    /// Check whether a value equal to `value` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbindex::RedBlackTree;
    ///
    /// let tree: RedBlackTree<&str> = ["b", "a", "c"].into_iter().collect();
    /// assert!(tree.contains(&"a"));
    /// assert!(!tree.contains(&"z"));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root;
        while let Some(node) = self.nodes.get(current) {
            if *value == node.value {
                return true;
            }
            current = if *value < node.value {
                node.left
            } else {
                node.right
            };
        }
        false
    }
}

impl<T, B: Balance> OrderedTree<T, B> {
    /// Smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.nodes.get(self.root)?;
        while let Some(left) = self.nodes.get(node.left) {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.nodes.get(self.root)?;
        while let Some(right) = self.nodes.get(node.right) {
            node = right;
        }
        Some(&node.value)
    }

    // ============================================================================
    // NODE NAVIGATION
    // ============================================================================

    pub fn root_id(&self) -> Option<NodeId> {
        present(self.root)
    }

    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| present(node.left))
    }

    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| present(node.right))
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| present(node.parent))
    }

    pub fn value_of(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Color of a node; always `None` for policies that do not track color.
    pub fn color_of(&self, id: NodeId) -> Option<Color> {
        if !B::TRACKS_COLOR {
            return None;
        }
        self.nodes.get(id).map(|node| node.color)
    }

    /// Statistics of the node arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.nodes.stats()
    }
}
