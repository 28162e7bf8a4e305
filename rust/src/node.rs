//! Node construction and link manipulation.
//!
//! Link helpers live on `CompactArena<Node<T>>` so that rotation and fix-up
//! can rewire nodes by id without holding two mutable borrows at once.
//! Reads through `NULL_NODE` yield `NULL_NODE` (or black, for colors), which
//! matches how an absent child behaves in a red-black tree.

use crate::compact_arena::CompactArena;
use crate::types::{Color, Node, NodeId, Side, NULL_NODE};

impl<T> Node<T> {
    /// Creates a detached node with no children and no parent.
    pub(crate) fn new(value: T, color: Color) -> Self {
        Self {
            value,
            left: NULL_NODE,
            right: NULL_NODE,
            parent: NULL_NODE,
            color,
        }
    }

    pub(crate) fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

impl<T> CompactArena<Node<T>> {
    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.get(id).map_or(NULL_NODE, |node| node.parent)
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.get(id).map_or(NULL_NODE, |node| node.child(side))
    }

    /// Absent nodes count as black.
    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, Node::is_red)
    }

    /// Which side of `parent` holds `child`, if they are linked.
    pub(crate) fn side_of(&self, child: NodeId, parent: NodeId) -> Option<Side> {
        let node = self.get(parent)?;
        if child == NULL_NODE {
            None
        } else if node.left == child {
            Some(Side::Left)
        } else if node.right == child {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(node) = self.get_mut(id) {
            node.parent = parent;
        }
    }

    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        if let Some(node) = self.get_mut(id) {
            match side {
                Side::Left => node.left = child,
                Side::Right => node.right = child,
            }
        }
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.get_mut(id) {
            node.color = color;
        }
    }
}
