use super::RBTree;
use super::node::NodeId;
use crate::error::InvariantViolation;

impl<K: Ord> RBTree<K> {
    /// Checks every red-black invariant plus the parent/child link structure.
    ///
    /// Returns the black-height of the tree: the amount of black nodes on any
    /// path from the root down to the sentinel, not counting the sentinel.
    ///
    /// Complexity: O(n)
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        if self.nil.color.is_red() {
            return Err(InvariantViolation::RedSentinel);
        }
        if self.color(self.root).is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        self.check_links()?;
        let black_height = self.check_colors(self.root)?;

        // ties can end up on either side after rotations, so this is `<=` and not `<`
        let mut previous = None;
        for (key, _) in self.in_order() {
            if previous.is_some_and(|previous| previous > key) {
                return Err(InvariantViolation::OutOfOrder);
            }
            previous = Some(key);
        }

        Ok(black_height)
    }

    #[cfg(feature = "invariant-checks")]
    pub(crate) fn check_after(&self, operation: &str) {
        if let Err(violation) = self.validate() {
            panic!("red-black invariant broken after {operation}: {violation}");
        }
    }

    #[cfg(not(feature = "invariant-checks"))]
    pub(crate) fn check_after(&self, _operation: &str) {}
}

impl<K> RBTree<K> {
    /// Every child's parent link points back at it, and every arena node is reachable.
    pub(crate) fn check_links(&self) -> Result<(), InvariantViolation> {
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(InvariantViolation::BrokenParentLink);
        }

        let mut counted = 0;
        let mut stack = Vec::new();
        if !self.root.is_nil() {
            stack.push(self.root);
        }
        while let Some(id) = stack.pop() {
            counted += 1;
            if counted > self.len() {
                // a cycle, or an edge into a freed slot
                break;
            }
            for child in [self.left(id), self.right(id)] {
                if child.is_nil() {
                    continue;
                }
                if self.parent(child) != id {
                    return Err(InvariantViolation::BrokenParentLink);
                }
                stack.push(child);
            }
        }

        if counted != self.len() {
            return Err(InvariantViolation::LengthMismatch { counted, recorded: self.len() });
        }
        Ok(())
    }

    /// Black-height of the subtree at `id`, checking red-red edges on the way.
    fn check_colors(&self, id: NodeId) -> Result<usize, InvariantViolation> {
        if id.is_nil() {
            return Ok(0);
        }
        let (left, right) = (self.left(id), self.right(id));
        if self.color(id).is_red() && (self.color(left).is_red() || self.color(right).is_red()) {
            return Err(InvariantViolation::RedRedPair);
        }

        let left_height = self.check_colors(left)?;
        let right_height = self.check_colors(right)?;
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeightMismatch {
                left: left_height,
                right: right_height,
            });
        }
        Ok(left_height + usize::from(self.color(id).is_black()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::non_concurrent::rbtree::Color;

    #[test]
    fn valid_tree_reports_black_height() {
        let tree: RBTree<i32> = [2, 1, 3, 4].into_iter().collect();
        assert_eq!(tree.validate(), Ok(2));
        assert_eq!(RBTree::<i32>::new().validate(), Ok(0));
    }

    #[test]
    fn catches_red_root() {
        let mut tree: RBTree<i32> = [1].into_iter().collect();
        let root = tree.root;
        tree.set_color(root, Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn catches_red_red() {
        let mut tree: RBTree<i32> = [2, 1, 3, 4].into_iter().collect();
        let three = tree.find(&3);
        tree.set_color(three, Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRedPair));
    }

    #[test]
    fn catches_black_height_mismatch() {
        let mut tree: RBTree<i32> = [2, 1, 3].into_iter().collect();
        let one = tree.find(&1);
        tree.set_color(one, Color::Black);
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BlackHeightMismatch { left: 1, right: 0 })
        );
    }

    #[test]
    fn catches_broken_parent_link() {
        let mut tree: RBTree<i32> = [2, 1, 3].into_iter().collect();
        let (one, three) = (tree.find(&1), tree.find(&3));
        tree.set_parent(one, three);
        assert_eq!(tree.validate(), Err(InvariantViolation::BrokenParentLink));
    }

    #[test]
    fn catches_unreachable_node() {
        let mut tree: RBTree<i32> = [2, 1, 3].into_iter().collect();
        let root = tree.root;
        let three = tree.find(&3);
        tree.transplant(three, tree.right(three));
        assert!(tree.right(root).is_nil());
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::LengthMismatch { counted: 2, recorded: 3 })
        );
    }

    #[test]
    fn catches_out_of_order() {
        let mut tree: RBTree<i32> = [2, 1, 3].into_iter().collect();
        let one = tree.find(&1);
        tree.nodes[one.slot()].key = 9;
        assert_eq!(tree.validate(), Err(InvariantViolation::OutOfOrder));
    }
}
