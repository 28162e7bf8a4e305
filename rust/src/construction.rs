//! Construction and initialization logic for OrderedTree.

use std::marker::PhantomData;

use crate::balance::Balance;
use crate::compact_arena::CompactArena;
use crate::types::{OrderedTree, DEFAULT_CAPACITY, NULL_NODE};

impl<T, B: Balance> OrderedTree<T, B> {
    /// Create an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbindex::{BinarySearchTree, RedBlackTree};
    ///
    /// let plain = BinarySearchTree::<i32>::new();
    /// let balanced = RedBlackTree::<String>::new();
    /// assert!(plain.is_empty() && balanced.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            root: NULL_NODE,
            nodes: CompactArena::new(),
            policy: PhantomData,
        }
    }

    /// Create an empty tree with room for `capacity` nodes before the arena
    /// has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            nodes: CompactArena::with_capacity(capacity),
            policy: PhantomData,
        }
    }

    /// Create an empty tree reserving `DEFAULT_CAPACITY` node slots.
    pub fn with_default_capacity() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T, B: Balance> Default for OrderedTree<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, B: Balance> Extend<T> for OrderedTree<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, B: Balance> FromIterator<T> for OrderedTree<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{BinarySearchTree, RedBlackTree, DEFAULT_CAPACITY};

    #[test]
    fn test_with_capacity_reserves_arena() {
        let tree = RedBlackTree::<u64>::with_default_capacity();
        assert!(tree.is_empty());
        assert!(tree.arena_stats().total_capacity >= DEFAULT_CAPACITY);
        assert_eq!(tree.arena_stats().allocated_count, 0);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut tree: BinarySearchTree<i32> = vec![3, 1, 2].into_iter().collect();
        tree.extend([5, 4]);
        assert_eq!(tree.to_in_order_string(), "[ 1, 2, 3, 4, 5 ]");
        assert_eq!(tree.to_level_order_string(), "[ 3, 1, 5, 2, 4 ]");
    }
}
