//! Balancing policies applied after each insertion.
//!
//! The policy set is closed: `Unbalanced` leaves the tree as the descent
//! placed it, `RedBlack` repairs the red-black invariants with recoloring and
//! at most two rotations. The policy is a type parameter, so the choice is
//! resolved at compile time.

use log::debug;

use crate::compact_arena::CompactArena;
use crate::error::{TreeError, TreeResult};
use crate::tree_structure::rotate_at;
use crate::types::{Color, Node, NodeId};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Unbalanced {}
    impl Sealed for super::RedBlack {}
}

/// Rebalancing strategy of an `OrderedTree`.
pub trait Balance: sealed::Sealed {
    /// Whether node colors are meaningful (and rendered by the debug views).
    const TRACKS_COLOR: bool;

    /// Color given to a freshly attached node.
    const INSERT_COLOR: Color;

    /// Restore the policy's invariants after `inserted` was attached.
    fn rebalance<T>(nodes: &mut CompactArena<Node<T>>, root: &mut NodeId, inserted: NodeId);

    /// Check the policy's invariants on top of BST ordering.
    fn check_balance<T>(nodes: &CompactArena<Node<T>>, root: NodeId) -> TreeResult<()>;
}

/// No rebalancing: a plain binary search tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbalanced;

/// Red-black insertion fix-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedBlack;

impl Balance for Unbalanced {
    const TRACKS_COLOR: bool = false;
    const INSERT_COLOR: Color = Color::Black;

    fn rebalance<T>(_nodes: &mut CompactArena<Node<T>>, _root: &mut NodeId, _inserted: NodeId) {}

    fn check_balance<T>(_nodes: &CompactArena<Node<T>>, _root: NodeId) -> TreeResult<()> {
        Ok(())
    }
}

impl Balance for RedBlack {
    const TRACKS_COLOR: bool = true;
    const INSERT_COLOR: Color = Color::Red;

    fn rebalance<T>(nodes: &mut CompactArena<Node<T>>, root: &mut NodeId, inserted: NodeId) {
        let mut node = inserted;
        loop {
            let parent = nodes.parent(node);
            if !nodes.is_red(parent) {
                break;
            }
            let grandparent = nodes.parent(parent);
            let Some(parent_side) = nodes.side_of(parent, grandparent) else {
                break;
            };
            let aunt = nodes.child(grandparent, parent_side.opposite());

            if nodes.is_red(aunt) {
                debug!("red aunt at node {}: recoloring and moving up", grandparent);
                nodes.set_color(parent, Color::Black);
                nodes.set_color(aunt, Color::Black);
                nodes.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            match nodes.side_of(node, parent) {
                Some(node_side) if node_side != parent_side => {
                    debug!("zig-zag at node {}: double rotation", grandparent);
                    rotate_at(nodes, root, node, parent, node_side);
                    rotate_at(nodes, root, node, grandparent, parent_side);
                    nodes.set_color(node, Color::Black);
                    nodes.set_color(grandparent, Color::Red);
                }
                Some(_) => {
                    debug!("zig-zig at node {}: single rotation", grandparent);
                    rotate_at(nodes, root, parent, grandparent, parent_side);
                    nodes.set_color(parent, Color::Black);
                    nodes.set_color(grandparent, Color::Red);
                }
                None => {}
            }
            break;
        }
        nodes.set_color(*root, Color::Black);
    }

    fn check_balance<T>(nodes: &CompactArena<Node<T>>, root: NodeId) -> TreeResult<()> {
        if nodes.is_red(root) {
            return Err(TreeError::data_integrity("Root color", "root is red"));
        }
        black_height(nodes, root).map(|_| ())
    }
}

/// Black-height of the subtree at `id`, counting the absent leaves below it
/// as zero. Fails on a red-red edge or on paths with unequal black counts.
pub(crate) fn black_height<T>(nodes: &CompactArena<Node<T>>, id: NodeId) -> TreeResult<usize> {
    let Some(node) = nodes.get(id) else {
        return Ok(0);
    };
    if node.is_red() && (nodes.is_red(node.left) || nodes.is_red(node.right)) {
        return Err(TreeError::data_integrity(
            "Red property",
            &format!("red node {} has a red child", id),
        ));
    }
    let left = black_height(nodes, node.left)?;
    let right = black_height(nodes, node.right)?;
    if left != right {
        return Err(TreeError::data_integrity(
            "Black height",
            &format!("node {} has black heights {} (left) and {} (right)", id, left, right),
        ));
    }
    Ok(left + usize::from(!node.is_red()))
}
