use std::fmt;

/// Color tag carried by every node. The sentinel is always [`Color::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Index of a node in the tree's arena.
///
/// `NodeId(0)` is the sentinel ("nil"). Arena slot `i` backs `NodeId(i + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

pub(crate) const NIL: NodeId = NodeId(0);

impl NodeId {
    pub(crate) fn from_slot(slot: usize) -> Self {
        NodeId(slot + 1)
    }

    pub(crate) fn is_nil(self) -> bool {
        self == NIL
    }

    /// The arena slot backing this id. Never called on the sentinel.
    pub(crate) fn slot(self) -> usize {
        assert!(!self.is_nil(), "the sentinel has no arena slot");
        self.0 - 1
    }
}

/// Structural part of a node: everything except the key.
///
/// `left`/`right` are the owning edges, `parent` is the back-reference and is
/// only ever used to walk upwards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Links {
    pub(crate) color: Color,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
}

impl Links {
    pub(crate) const SENTINEL: Links = Links {
        color: Color::Black,
        left: NIL,
        right: NIL,
        parent: NIL,
    };

    /// A freshly inserted node: red, both children are the sentinel.
    pub(crate) fn fresh(parent: NodeId) -> Self {
        Links {
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) links: Links,
}
