use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Recoverable outcomes of tree queries. Neither one is a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("key not found")]
    NotFound,
    #[error("tree is empty")]
    EmptyTree,
}

/// A broken red-black or structural invariant, as reported by `RBTree::validate`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("the sentinel is red")]
    RedSentinel,
    #[error("the root is red")]
    RedRoot,
    #[error("a red node has a red child")]
    RedRedPair,
    #[error("black-height differs between subtrees (left {left}, right {right})")]
    BlackHeightMismatch { left: usize, right: usize },
    #[error("in-order keys are not sorted")]
    OutOfOrder,
    #[error("a parent back-reference doesn't match its child edge")]
    BrokenParentLink,
    #[error("{counted} nodes reachable from the root, but {recorded} allocated")]
    LengthMismatch { counted: usize, recorded: usize },
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("couldn't create log file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Install(#[from] log::SetLoggerError),
}
