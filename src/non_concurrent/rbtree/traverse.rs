//! Lazy traversals. Each one keeps an explicit stack of node ids instead of
//! recursing, and borrows the tree for as long as it lives.

use std::iter::FusedIterator;

use super::RBTree;
use super::node::{Color, NodeId};

impl<K> RBTree<K> {
    /// Keys in sorted order, with their colors.
    pub fn in_order(&self) -> InOrder<'_, K> {
        let mut iter = InOrder { tree: self, stack: Vec::new() };
        iter.push_left_spine(self.root);
        iter
    }

    /// Node, then left subtree, then right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        let mut stack = Vec::new();
        if !self.root.is_nil() {
            stack.push(self.root);
        }
        PreOrder { tree: self, stack }
    }

    /// Left subtree, then right subtree, then node.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        let mut stack = Vec::new();
        if !self.root.is_nil() {
            stack.push((self.root, false));
        }
        PostOrder { tree: self, stack }
    }

    fn entry(&self, id: NodeId) -> (&K, Color) {
        (self.key(id), self.color(id))
    }
}

pub struct InOrder<'a, K> {
    tree: &'a RBTree<K>,
    stack: Vec<NodeId>,
}

impl<K> InOrder<'_, K> {
    fn push_left_spine(&mut self, mut id: NodeId) {
        while !id.is_nil() {
            self.stack.push(id);
            id = self.tree.left(id);
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.right(id));
        Some(self.tree.entry(id))
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

pub struct PreOrder<'a, K> {
    tree: &'a RBTree<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // right first so the left subtree comes out first
        for child in [self.tree.right(id), self.tree.left(id)] {
            if !child.is_nil() {
                self.stack.push(child);
            }
        }
        Some(self.tree.entry(id))
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

pub struct PostOrder<'a, K> {
    tree: &'a RBTree<K>,
    // (node, children already pushed)
    stack: Vec<(NodeId, bool)>,
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            if expanded {
                return Some(self.tree.entry(id));
            }
            self.stack.push((id, true));
            for child in [self.tree.right(id), self.tree.left(id)] {
                if !child.is_nil() {
                    self.stack.push((child, false));
                }
            }
        }
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}
