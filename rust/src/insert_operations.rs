//! INSERT operations for OrderedTree.
//!
//! Insertion is a descent from the root that routes values `<=` a node to the
//! left and larger values to the right, attaches a new node at the first
//! empty slot, then hands the new node to the balancing policy.

use log::trace;

use crate::balance::Balance;
use crate::error::{TreeError, TreeResult};
use crate::types::{Node, NodeId, OrderedTree, Side, NULL_NODE};

impl<T: Ord, B: Balance> OrderedTree<T, B> {
    /// Insert a value. Equal values are kept, not replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbindex::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.to_level_order_string(), "[ 2, 2, 1 ]");
    /// ```
    pub fn insert(&mut self, value: T) {
        let id = self.attach(value);
        B::rebalance(&mut self.nodes, &mut self.root, id);
    }

    /// Insert a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NullArgument` for `None`; the tree is unchanged.
    pub fn try_insert(&mut self, value: Option<T>) -> TreeResult<()> {
        let value = value.ok_or_else(|| TreeError::null_argument("insert", "a value"))?;
        self.insert(value);
        Ok(())
    }

    /// Allocate a node for `value` and link it below its attachment point,
    /// or install it as the root of an empty tree.
    fn attach(&mut self, value: T) -> NodeId {
        let (parent, side) = self.find_attachment(&value);

        let mut node = Node::new(value, B::INSERT_COLOR);
        node.parent = parent;
        let id = self.nodes.allocate(node);

        if parent == NULL_NODE {
            trace!("installing node {} as root", id);
            self.root = id;
        } else {
            trace!("attaching node {} as {:?} child of node {}", id, side, parent);
            self.nodes.set_child(parent, side, id);
        }
        id
    }

    /// The node and child slot where `value` belongs; `NULL_NODE` for an
    /// empty tree.
    fn find_attachment(&self, value: &T) -> (NodeId, Side) {
        let mut slot = (NULL_NODE, Side::Left);
        let mut current = self.root;
        while let Some(node) = self.nodes.get(current) {
            let side = if *value <= node.value {
                Side::Left
            } else {
                Side::Right
            };
            slot = (current, side);
            current = node.child(side);
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{BinarySearchTree, RedBlackTree};

    #[test]
    fn test_insert_sets_parent_links() {
        let mut tree = BinarySearchTree::new();
        tree.insert(5);
        tree.insert(3);
        tree.insert(8);

        let root = tree.root_id().unwrap();
        let left = tree.left_of(root).unwrap();
        let right = tree.right_of(root).unwrap();
        assert_eq!(tree.value_of(left), Some(&3));
        assert_eq!(tree.value_of(right), Some(&8));
        assert_eq!(tree.parent_of(left), Some(root));
        assert_eq!(tree.parent_of(right), Some(root));
        assert_eq!(tree.parent_of(root), None);
    }

    #[test]
    fn test_duplicates_route_left() {
        let mut tree = BinarySearchTree::new();
        for v in [4, 4, 4] {
            tree.insert(v);
        }
        assert_eq!(tree.height(), 3);
        let root = tree.root_id().unwrap();
        assert_eq!(tree.right_of(root), None);
        assert_eq!(tree.to_in_order_string(), "[ 4, 4, 4 ]");
    }

    #[test]
    fn test_try_insert_rejects_none() {
        let mut tree = RedBlackTree::<i32>::new();
        let err = tree.try_insert(None).unwrap_err();
        assert!(err.is_null_argument());
        assert!(tree.is_empty());

        tree.try_insert(Some(7)).unwrap();
        assert!(tree.contains(&7));
    }
}
