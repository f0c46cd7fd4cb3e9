use log::debug;

use super::{RBTree, Side};
use super::node::{Color, NodeId};
use crate::error::TreeError;

impl<K: Ord> RBTree<K> {
    /// Removes a node holding `key` and hands the stored key back.
    ///
    /// A missing key is reported as [`TreeError::NotFound`] and leaves the
    /// tree untouched.
    ///
    /// Complexity: O(log(n))
    pub fn delete(&mut self, key: &K) -> Result<K, TreeError> {
        let z = self.find(key);
        if z.is_nil() {
            debug!("delete: key not present");
            return Err(TreeError::NotFound);
        }

        // color that actually leaves the structure, and the node that takes its slot
        let mut removed_color = self.color(z);
        let x;

        if self.left(z).is_nil() {
            x = self.right(z);
            self.transplant(z, x);
        } else if self.right(z).is_nil() {
            x = self.left(z);
            self.transplant(z, x);
        } else {
            let y = self.subtree_minimum(self.right(z));
            removed_color = self.color(y);
            x = self.right(y);

            if self.parent(y) == z {
                // `x` may be the sentinel, whose parent link is stale
                self.set_parent(x, y);
            } else {
                self.transplant(y, x);
                let right = self.right(z);
                self.set_child(y, Side::Right, right);
                self.set_parent(right, y);
            }

            self.transplant(z, y);
            let left = self.left(z);
            self.set_child(y, Side::Left, left);
            self.set_parent(left, y);
            self.set_color(y, self.color(z));
        }

        if removed_color.is_black() {
            self.fix_delete(x);
        }

        let removed = self.release(z);
        self.check_after("delete");
        Ok(removed)
    }
}

impl<K> RBTree<K> {
    /// Puts `v` where `u` hangs. `v.parent` is set even when `v` is the sentinel.
    pub(crate) fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        self.replace_child(parent, u, v);
        self.set_parent(v, parent);
    }

    /// Resolves the extra black carried by `x` after a black node left the tree.
    fn fix_delete(&mut self, mut x: NodeId) {
        while x != self.root && self.color(x).is_black() {
            let side = self.side_of(x);
            let mut sibling = self.child(self.parent(x), side.opposite());

            if self.color(sibling).is_red() {
                debug!("fix_delete: red sibling {sibling:?}");
                let parent = self.parent(x);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(self.parent(x), side.opposite());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());

            if self.color(near).is_black() && self.color(far).is_black() {
                debug!("fix_delete: black nephews, moving deficiency up");
                self.set_color(sibling, Color::Red);
                x = self.parent(x);
                continue;
            }

            if self.color(far).is_black() {
                debug!("fix_delete: red near nephew {near:?}");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.child(self.parent(x), side.opposite());
            }

            debug!("fix_delete: red far nephew, done");
            let parent = self.parent(x);
            let far = self.child(sibling, side.opposite());
            self.set_color(sibling, self.color(parent));
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            x = self.root;
        }

        self.set_color(x, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color::{Black as B, Red as R};

    fn shape(tree: &RBTree<i32>) -> Vec<(i32, Color)> {
        tree.pre_order().map(|(k, c)| (*k, c)).collect()
    }

    #[test]
    fn missing_key_is_not_found() {
        let mut tree: RBTree<i32> = [10, 5, 15].into_iter().collect();
        let before = shape(&tree);
        assert_eq!(tree.delete(&7), Err(TreeError::NotFound));
        assert_eq!(shape(&tree), before);

        let mut empty = RBTree::<i32>::new();
        assert_eq!(empty.delete(&1), Err(TreeError::NotFound));
    }

    #[test]
    fn red_leaf_needs_no_fixup() {
        let mut tree: RBTree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(tree.delete(&3), Ok(3));
        assert_eq!(shape(&tree), [(2, B), (1, R)]);
    }

    #[test]
    fn last_key_empties_tree() {
        let mut tree = RBTree::new();
        tree.insert(1);
        assert_eq!(tree.delete(&1), Ok(1));
        assert!(tree.is_empty());
        assert!(tree.nodes.is_empty());
    }

    #[test]
    fn root_with_two_children() {
        let mut tree: RBTree<i32> = (1..=8).collect();
        assert_eq!(
            shape(&tree),
            [(4, B), (2, R), (1, B), (3, B), (6, R), (5, B), (7, B), (8, R)]
        );
        assert_eq!(tree.delete(&4), Ok(4));
        assert_eq!(
            shape(&tree),
            [(5, B), (2, R), (1, B), (3, B), (7, R), (6, B), (8, B)]
        );
        tree.validate().unwrap();
    }

    #[test]
    fn black_leaf_borrows_from_sibling() {
        // 2(B) 1(B) 3(B) 4(R): deleting 1 leaves a double black with a red far nephew
        let mut tree: RBTree<i32> = [2, 1, 3, 4].into_iter().collect();
        assert_eq!(tree.delete(&1), Ok(1));
        assert_eq!(shape(&tree), [(3, B), (2, B), (4, B)]);
    }

    #[test]
    fn black_leaf_with_near_nephew() {
        let mut tree: RBTree<i32> = [20, 10, 30, 25].into_iter().collect();
        assert_eq!(tree.delete(&10), Ok(10));
        assert_eq!(shape(&tree), [(25, B), (20, B), (30, B)]);
    }

    #[test]
    fn black_leaf_recolors_sibling() {
        let mut tree: RBTree<i32> = [2, 1, 3, 4].into_iter().collect();
        tree.delete(&4).unwrap();
        assert_eq!(shape(&tree), [(2, B), (1, B), (3, B)]);
        tree.delete(&1).unwrap();
        assert_eq!(shape(&tree), [(2, B), (3, R)]);
    }

    #[test]
    fn transplant_sets_sentinel_parent() {
        let mut tree: RBTree<i32> = [2, 1, 3].into_iter().collect();
        let one = tree.find(&1);
        let root = tree.root;
        let nil = tree.left(one);
        tree.transplant(one, nil);
        assert!(tree.left(root).is_nil());
        assert_eq!(tree.parent(nil), root);
    }

    #[test]
    fn duplicates_delete_one_at_a_time() {
        let mut tree: RBTree<i32> = [5, 5, 5, 1, 9].into_iter().collect();
        assert_eq!(tree.delete(&5), Ok(5));
        assert_eq!(tree.delete(&5), Ok(5));
        assert!(tree.contains(&5));
        assert_eq!(tree.delete(&5), Ok(5));
        assert_eq!(tree.delete(&5), Err(TreeError::NotFound));
        assert_eq!(shape(&tree).len(), 2);
        tree.validate().unwrap();
    }
}
