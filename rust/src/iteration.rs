//! Iterator implementations for OrderedTree.
//!
//! All iteration goes through `BoundedIter`, an explicit stack of pending
//! ancestors rebuilt from the current root each time an iterator is created.
//! The iterator borrows the tree, so the tree cannot be mutated while an
//! iterator over it is alive.

use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::balance::Balance;
use crate::compact_arena::CompactArena;
use crate::error::{TreeError, TreeResult};
use crate::types::{Node, NodeId, OrderedTree};

// ============================================================================
// ORDEREDTREE ITERATOR METHODS
// ============================================================================

impl<T: Ord, B: Balance> OrderedTree<T, B> {
    /// Returns an iterator over every value in ascending order.
    pub fn iter(&self) -> BoundedIter<'_, T> {
        BoundedIter::new(&self.nodes, self.root, Bound::Unbounded, Bound::Unbounded)
    }

    /// Returns an iterator over the values in the inclusive window
    /// `[min, max]`. `None` leaves that side unbounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbindex::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [1, 2, 3, 4, 5, 2, 4, 4].into_iter().collect();
    /// let window: Vec<_> = tree.bounded(Some(2), Some(4)).copied().collect();
    /// assert_eq!(window, [2, 2, 3, 4, 4, 4]);
    ///
    /// let tail: Vec<_> = tree.bounded(Some(4), None).copied().collect();
    /// assert_eq!(tail, [4, 4, 4, 5]);
    /// ```
    pub fn bounded(&self, min: Option<T>, max: Option<T>) -> BoundedIter<'_, T> {
        let min = min.map_or(Bound::Unbounded, Bound::Included);
        let max = max.map_or(Bound::Unbounded, Bound::Included);
        BoundedIter::new(&self.nodes, self.root, min, max)
    }

    /// Returns an iterator over the values in a range, using Rust's range
    /// syntax. Excluded bounds are honoured as well as included ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbindex::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..10).collect();
    /// let half_open: Vec<_> = tree.range(3..7).copied().collect();
    /// assert_eq!(half_open, [3, 4, 5, 6]);
    ///
    /// let closed: Vec<_> = tree.range(3..=7).copied().collect();
    /// assert_eq!(closed, [3, 4, 5, 6, 7]);
    ///
    /// let tail: Vec<_> = tree.range(8..).copied().collect();
    /// assert_eq!(tail, [8, 9]);
    /// ```
    pub fn range<R>(&self, range: R) -> BoundedIter<'_, T>
    where
        R: RangeBounds<T>,
        T: Clone,
    {
        BoundedIter::new(
            &self.nodes,
            self.root,
            range.start_bound().cloned(),
            range.end_bound().cloned(),
        )
    }
}

impl<'a, T: Ord, B: Balance> IntoIterator for &'a OrderedTree<T, B> {
    type Item = &'a T;
    type IntoIter = BoundedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// BOUNDEDITER IMPLEMENTATION
// ============================================================================

/// Ascending, forward-only iterator over the values of an `OrderedTree`
/// that fall inside a window.
///
/// The stack holds the nodes whose value has not been yielded yet but whose
/// left subtree has already been accounted for. Its top is always the next
/// in-order candidate; once that candidate is past the upper bound the
/// iteration is over.
#[derive(Debug, Clone)]
pub struct BoundedIter<'a, T> {
    nodes: &'a CompactArena<Node<T>>,
    stack: Vec<NodeId>,
    min: Bound<T>,
    max: Bound<T>,
}

impl<'a, T: Ord> BoundedIter<'a, T> {
    pub(crate) fn new(
        nodes: &'a CompactArena<Node<T>>,
        root: NodeId,
        min: Bound<T>,
        max: Bound<T>,
    ) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
            min,
            max,
        };
        iter.push_spine(root);
        iter
    }

    /// True while the next candidate lies inside the window.
    pub fn has_next(&self) -> bool {
        self.stack
            .last()
            .and_then(|&id| self.nodes.get(id))
            .map_or(false, |node| {
                !self.below_min(&node.value) && !self.above_max(&node.value)
            })
    }

    /// Like `next`, but reports exhaustion as an error.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::EndOfSequence` when no in-range value remains.
    pub fn try_next(&mut self) -> TreeResult<&'a T> {
        self.next().ok_or(TreeError::EndOfSequence)
    }

    /// Push `id` and its left spine, skipping every node below the lower
    /// bound together with its left subtree.
    fn push_spine(&mut self, mut id: NodeId) {
        let nodes = self.nodes;
        while let Some(node) = nodes.get(id) {
            if self.below_min(&node.value) {
                id = node.right;
            } else {
                self.stack.push(id);
                id = node.left;
            }
        }
    }

    fn below_min(&self, value: &T) -> bool {
        match &self.min {
            Bound::Included(min) => value < min,
            Bound::Excluded(min) => value <= min,
            Bound::Unbounded => false,
        }
    }

    fn above_max(&self, value: &T) -> bool {
        match &self.max {
            Bound::Included(max) => value > max,
            Bound::Excluded(max) => value >= max,
            Bound::Unbounded => false,
        }
    }
}

impl<'a, T: Ord> Iterator for BoundedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let nodes = self.nodes;
        let node = nodes.get(self.stack.pop()?)?;
        self.push_spine(node.right);
        Some(&node.value)
    }
}

impl<'a, T: Ord> FusedIterator for BoundedIter<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::types::{BinarySearchTree, RedBlackTree};

    fn scenario() -> RedBlackTree<i32> {
        [1, 2, 3, 4, 5].into_iter().collect()
    }

    #[test]
    fn test_unbounded_iteration_is_sorted() {
        let tree = scenario();
        let values: Vec<_> = tree.iter().copied().collect();
        assert_eq!(values, [1, 2, 3, 4, 5]);

        let via_ref: Vec<_> = (&tree).into_iter().copied().collect();
        assert_eq!(via_ref, values);
    }

    #[test]
    fn test_min_only_and_max_only() {
        let tree = scenario();
        let from_two: Vec<_> = tree.bounded(Some(2), None).copied().collect();
        assert_eq!(from_two, [2, 3, 4, 5]);

        let to_five: Vec<_> = tree.bounded(None, Some(5)).copied().collect();
        assert_eq!(to_five, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_start_stop_with_extra_value() {
        let mut tree = scenario();
        tree.insert(9);
        let values: Vec<_> = tree.bounded(Some(2), Some(9)).copied().collect();
        assert_eq!(values, [2, 3, 4, 5, 9]);
    }

    #[test]
    fn test_bounds_between_stored_values() {
        let tree: BinarySearchTree<i32> = [10, 20, 30, 40].into_iter().collect();
        let values: Vec<_> = tree.bounded(Some(15), Some(35)).copied().collect();
        assert_eq!(values, [20, 30]);

        assert_eq!(tree.bounded(Some(41), None).count(), 0);
        assert_eq!(tree.bounded(None, Some(9)).count(), 0);
        assert_eq!(tree.bounded(Some(30), Some(20)).count(), 0);
    }

    #[test]
    fn test_try_next_signals_end_of_sequence() {
        let tree = scenario();
        let mut iter = tree.bounded(Some(4), Some(4));
        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok(&4));
        assert!(!iter.has_next());
        assert!(iter.try_next().unwrap_err().is_end_of_sequence());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_excluded_bounds() {
        let tree: RedBlackTree<i32> = [1, 2, 2, 3, 3, 4].into_iter().collect();
        let values: Vec<_> = tree
            .range((std::ops::Bound::Excluded(2), std::ops::Bound::Excluded(4)))
            .copied()
            .collect();
        assert_eq!(values, [3, 3]);
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let tree = RedBlackTree::<i32>::new();
        let mut iter = tree.iter();
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }
}
