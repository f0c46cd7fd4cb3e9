use log::debug;

use super::RBTree;
use super::node::{Color, Links, NIL, Node, NodeId};

impl<K: Ord> RBTree<K> {
    /// Inserts `key`, keeping the tree balanced.
    ///
    /// Keys equal to one already present go to its right.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, key: K) {
        let mut parent = NIL;
        let mut current = self.root;
        let mut goes_left = false;
        while !current.is_nil() {
            parent = current;
            goes_left = key < *self.key(current);
            current = if goes_left { self.left(current) } else { self.right(current) };
        }

        let z = NodeId::from_slot(self.nodes.len());
        self.nodes.push(Node { key, links: Links::fresh(parent) });

        if parent.is_nil() {
            self.root = z;
        } else if goes_left {
            self.nodes[parent.slot()].links.left = z;
        } else {
            self.nodes[parent.slot()].links.right = z;
        }

        self.fix_insert(z);
        self.check_after("insert");
    }
}

impl<K> RBTree<K> {
    /// Repairs a red-red edge between `z` and its parent.
    ///
    /// That's the only invariant a fresh red leaf can break.
    fn fix_insert(&mut self, mut z: NodeId) {
        // the sentinel above the root is black, so this stops at the root
        while self.color(self.parent(z)).is_red() {
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle).is_red() {
                debug!("fix_insert: red uncle, pushing violation up to {grandparent:?}");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            // triangle: straighten into a line first
            if z == self.child(parent, side.opposite()) {
                debug!("fix_insert: triangle at {z:?}, rotating {side:?}");
                z = parent;
                self.rotate(z, side);
            }

            debug!("fix_insert: line at {z:?}, rotating grandparent");
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
