//! Validation and debugging utilities for OrderedTree.
//!
//! This module contains invariant checking, the diagnostic string views used
//! by the scenario tests, and an indented structure dump.

use std::collections::VecDeque;
use std::fmt::{Display, Write};

use crate::balance::{self, Balance, RedBlack};
use crate::error::{TreeError, TreeResult};
use crate::types::{NodeId, OrderedTree, Side, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T: Ord, B: Balance> OrderedTree<T, B> {
    /// Check if the tree maintains its ordering and balancing invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies parent/child link agreement, that every arena node is
    /// reachable exactly once, that `left <= node <= right` holds for every
    /// subtree, and finally the balancing policy's own invariants.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        if self.root != NULL_NODE && self.nodes.parent(self.root) != NULL_NODE {
            return Err(TreeError::corrupted_tree(
                "Root link",
                &format!("root {} has a parent", self.root),
            ));
        }

        let reachable = self.check_links_and_order()?;
        if reachable != self.nodes.len() {
            return Err(TreeError::corrupted_tree(
                "Arena consistency",
                &format!("{} in tree vs {} in arena", reachable, self.nodes.len()),
            ));
        }

        B::check_balance(&self.nodes, self.root)
    }

    /// Walk the tree carrying the value window each subtree must respect.
    /// Returns the number of reachable nodes.
    fn check_links_and_order(&self) -> TreeResult<usize> {
        let mut visited = 0;
        let mut pending: Vec<(NodeId, Option<&T>, Option<&T>)> = vec![(self.root, None, None)];

        while let Some((id, low, high)) = pending.pop() {
            let Some(node) = self.nodes.get(id) else {
                if id != NULL_NODE {
                    return Err(TreeError::corrupted_tree(
                        "Child link",
                        &format!("link to unallocated node {}", id),
                    ));
                }
                continue;
            };

            visited += 1;
            if visited > self.nodes.len() {
                return Err(TreeError::corrupted_tree("Child link", "cycle detected"));
            }

            if low.map_or(false, |low| node.value < *low)
                || high.map_or(false, |high| node.value > *high)
            {
                return Err(TreeError::data_integrity(
                    "BST order",
                    &format!("node {} is outside its subtree bounds", id),
                ));
            }

            for child in [node.left, node.right] {
                if child != NULL_NODE && self.nodes.parent(child) != id {
                    return Err(TreeError::corrupted_tree(
                        "Parent link",
                        &format!("node {} does not point back to parent {}", child, id),
                    ));
                }
            }

            pending.push((node.left, low, Some(&node.value)));
            pending.push((node.right, Some(&node.value), high));
        }

        Ok(visited)
    }
}

impl<T: Ord> OrderedTree<T, RedBlack> {
    /// Number of black nodes on every path from the root to an absent child,
    /// or `None` if the red-black invariants are broken.
    pub fn black_height(&self) -> Option<usize> {
        balance::black_height(&self.nodes, self.root).ok()
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<T: Display, B: Balance> OrderedTree<T, B> {
    /// In-order view, e.g. `[ 1, 2, 3 ]`; `[ ]` when empty. Red-black trees
    /// suffix each value with `(r)` or `(b)`.
    pub fn to_in_order_string(&self) -> String {
        let mut order = Vec::new();
        let mut pending = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(node) = self.nodes.get(current) {
                pending.push(current);
                current = node.left;
            }
            let Some(id) = pending.pop() else {
                break;
            };
            order.push(id);
            current = self.nodes.child(id, Side::Right);
        }
        self.render(order)
    }

    /// Breadth-first view with the same format as `to_in_order_string`.
    pub fn to_level_order_string(&self) -> String {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self.root]);
        while let Some(id) = queue.pop_front() {
            if let Some(node) = self.nodes.get(id) {
                order.push(id);
                queue.push_back(node.left);
                queue.push_back(node.right);
            }
        }
        self.render(order)
    }

    /// Indented dump of the structure, one node per line, right subtree first.
    pub fn structure_string(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self.root, 0usize)];
        while let Some((id, depth)) = pending.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let _ = writeln!(out, "{}{}", "  ".repeat(depth), self.label(id));
            pending.push((node.left, depth + 1));
            pending.push((node.right, depth + 1));
        }
        out
    }

    fn render(&self, order: Vec<NodeId>) -> String {
        if order.is_empty() {
            return "[ ]".to_string();
        }
        let labels: Vec<String> = order.into_iter().map(|id| self.label(id)).collect();
        format!("[ {} ]", labels.join(", "))
    }

    fn label(&self, id: NodeId) -> String {
        match self.nodes.get(id) {
            Some(node) if B::TRACKS_COLOR => format!("{}{}", node.value, node.color.suffix()),
            Some(node) => node.value.to_string(),
            None => "<missing>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{BinarySearchTree, Color, RedBlackTree, Side};

    #[test]
    fn test_empty_views() {
        let tree = RedBlackTree::<i32>::new();
        assert_eq!(tree.to_in_order_string(), "[ ]");
        assert_eq!(tree.to_level_order_string(), "[ ]");
        assert_eq!(tree.structure_string(), "");
        assert_eq!(tree.black_height(), Some(0));
        tree.check_invariants_detailed().unwrap();
    }

    #[test]
    fn test_views_of_plain_tree() {
        let tree: BinarySearchTree<i32> = [3, 2, 5, 4, 6].into_iter().collect();
        assert_eq!(tree.to_in_order_string(), "[ 2, 3, 4, 5, 6 ]");
        assert_eq!(tree.to_level_order_string(), "[ 3, 2, 5, 4, 6 ]");
        assert_eq!(tree.structure_string(), "3\n  5\n    6\n    4\n  2\n");
    }

    #[test]
    fn test_views_of_red_black_tree() {
        let tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(tree.to_in_order_string(), "[ 1(r), 2(b), 3(r) ]");
        assert_eq!(tree.black_height(), Some(1));
    }

    #[test]
    fn test_detects_order_violation() {
        let mut tree: BinarySearchTree<i32> = [5, 3].into_iter().collect();
        let root = tree.root_id().unwrap();
        let left = tree.left_of(root).unwrap();
        if let Some(node) = tree.nodes.get_mut(left) {
            node.value = 9;
        }
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut tree: BinarySearchTree<i32> = [5, 3, 8].into_iter().collect();
        let root = tree.root_id().unwrap();
        let right = tree.right_of(root).unwrap();
        let left = tree.left_of(root).unwrap();
        tree.nodes.set_parent(right, left);
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(matches!(err, crate::TreeError::CorruptedTree(_)));
        assert_eq!(tree.nodes.child(root, Side::Right), right);
    }

    #[test]
    fn test_detects_red_root() {
        let mut tree: RedBlackTree<i32> = [5].into_iter().collect();
        let root = tree.root_id().unwrap();
        tree.nodes.set_color(root, Color::Red);
        assert!(!tree.check_invariants());
        assert_eq!(tree.black_height(), Some(0));
    }
}
