//! A red-black tree over an index arena.
//!
//! Every leaf edge, and the parent of the root, points at a single shared
//! sentinel (`NodeId(0)`), which is always black. This lets the fix-up
//! routines read colors and parent links without any null checks.

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;

mod delete;
mod insert;
mod node;
mod rotate;
mod traverse;
mod verify;

pub use node::Color;
pub use traverse::{InOrder, PostOrder, PreOrder};

use node::{Links, NIL, Node, NodeId};

/// Which child edge of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Ordered key storage with `O(log n)` insert, delete and search.
///
/// Equal keys are allowed; a key equal to one already present is placed to its right.
pub struct RBTree<K> {
    root: NodeId,
    nil: Links,
    nodes: Vec<Node<K>>,
}

/// A read-only handle to a node in an [`RBTree`].
///
/// The handle borrows the tree, so it can't outlive a mutation.
pub struct NodeRef<'a, K> {
    tree: &'a RBTree<K>,
    id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub fn key(&self) -> &'a K {
        self.tree.key(self.id)
    }

    pub fn color(&self) -> Color {
        self.tree.color(self.id)
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.tree.node_ref(self.tree.left(self.id))
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.tree.node_ref(self.tree.right(self.id))
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.tree.node_ref(self.tree.parent(self.id))
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}

impl<K> RBTree<K> {
    pub const fn new() -> Self {
        Self {
            root: NIL,
            nil: Links::SENTINEL,
            nodes: Vec::new(),
        }
    }

    /// The amount of keys stored in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.node_ref(self.root)
    }

    /// Removes every key. The root goes back to being the sentinel.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NIL;
        self.nil = Links::SENTINEL;
    }

    /// The smallest key, or [`TreeError::EmptyTree`].
    ///
    /// Complexity: O(log(n))
    pub fn minimum(&self) -> Result<&K, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        Ok(self.key(self.subtree_minimum(self.root)))
    }

    /// The largest key, or [`TreeError::EmptyTree`].
    ///
    /// Complexity: O(log(n))
    pub fn maximum(&self) -> Result<&K, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let mut current = self.root;
        while !self.right(current).is_nil() {
            current = self.right(current);
        }
        Ok(self.key(current))
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, id: NodeId) -> usize {
        if id.is_nil() {
            return 0;
        }
        1 + self
            .subtree_height(self.left(id))
            .max(self.subtree_height(self.right(id)))
    }

    /// Leftmost node of the subtree rooted at `id`, which must not be the sentinel.
    pub(crate) fn subtree_minimum(&self, mut id: NodeId) -> NodeId {
        while !self.left(id).is_nil() {
            id = self.left(id);
        }
        id
    }

    fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        (!id.is_nil()).then_some(NodeRef { tree: self, id })
    }

    // arena accessors. the sentinel is served from `self.nil`.

    fn links(&self, id: NodeId) -> &Links {
        if id.is_nil() {
            &self.nil
        } else {
            &self.nodes[id.slot()].links
        }
    }

    fn links_mut(&mut self, id: NodeId) -> &mut Links {
        if id.is_nil() {
            &mut self.nil
        } else {
            &mut self.nodes[id.slot()].links
        }
    }

    pub(crate) fn key(&self, id: NodeId) -> &K {
        &self.nodes[id.slot()].key
    }

    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.links(id).color
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id.is_nil() {
            assert_eq!(color, Color::Black, "the sentinel must stay black");
            return;
        }
        self.links_mut(id).color = color;
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.links(id).left
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.links(id).right
    }

    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.links(id).parent
    }

    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        let links = self.links_mut(id);
        match side {
            Side::Left => links.left = child,
            Side::Right => links.right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.links_mut(id).parent = parent;
    }

    /// Which side of its parent `id` hangs from.
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        if self.left(self.parent(id)) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points the edge of `parent` that currently leads to `old` at `new` instead.
    /// A sentinel `parent` means `old` is the root.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent.is_nil() {
            self.root = new;
        } else if self.left(parent) == old {
            self.set_child(parent, Side::Left, new);
        } else {
            self.set_child(parent, Side::Right, new);
        }
    }

    /// Frees the arena slot of a node that is already unlinked from the tree.
    ///
    /// The last node in the arena is moved into the freed slot and every edge
    /// pointing at it is rewritten.
    fn release(&mut self, id: NodeId) -> K {
        let last = NodeId::from_slot(self.nodes.len() - 1);
        let removed = self.nodes.swap_remove(id.slot());
        if last != id {
            let moved = self.nodes[id.slot()].links;
            self.replace_child(moved.parent, last, id);
            if !moved.left.is_nil() {
                self.set_parent(moved.left, id);
            }
            if !moved.right.is_nil() {
                self.set_parent(moved.right, id);
            }
        }
        // the sentinel's links only matter during a fix-up
        self.nil = Links::SENTINEL;
        removed.key
    }
}

impl<K: Ord> RBTree<K> {
    /// Finds a node holding `key`.
    ///
    /// Complexity: O(log(n))
    pub fn search(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.node_ref(self.find(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_nil()
    }

    /// Walks down from the root, returning the sentinel when `key` is absent.
    pub(crate) fn find(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while !current.is_nil() {
            match key.cmp(self.key(current)) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.left(current),
                Ordering::Greater => current = self.right(current),
            }
        }
        NIL
    }
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for RBTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order().map(|(key, _)| key)).finish()
    }
}

impl<K: Ord> Extend<K> for RBTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RBTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}
