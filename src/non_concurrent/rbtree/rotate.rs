use log::trace;

use super::{RBTree, Side};
use super::node::NodeId;

impl<K> RBTree<K> {
    /// Rotates `x` down towards `side`: the child on the other side takes its place.
    ///
    /// `rotate(x, Side::Left)` promotes `x.right`, and `x` becomes its left child.
    /// Never changes colors or the in-order sequence of keys.
    pub(crate) fn rotate(&mut self, x: NodeId, side: Side) {
        let y = self.child(x, side.opposite());
        assert!(!y.is_nil(), "rotating {side:?} needs a {:?} child", side.opposite());
        trace!("rotate {side:?} at {x:?} (promoting {y:?})");

        // `y`'s inner subtree switches over to `x`
        let inner = self.child(y, side);
        self.set_child(x, side.opposite(), inner);
        if !inner.is_nil() {
            self.set_parent(inner, x);
        }

        let parent = self.parent(x);
        self.set_parent(y, parent);
        self.replace_child(parent, x, y);

        self.set_child(y, side, x);
        self.set_parent(x, y);
    }
}
