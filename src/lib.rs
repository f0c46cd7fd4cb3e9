#![forbid(unsafe_code)]

//! Ordered key storage on a red-black tree.
//!
//! ```
//! use redblack::{RBTree, TreeError};
//!
//! let mut tree: RBTree<i32> = [10, 5, 15].into_iter().collect();
//! tree.insert(3);
//! assert_eq!(tree.minimum(), Ok(&3));
//! assert_eq!(tree.delete(&7), Err(TreeError::NotFound));
//! assert!(tree.search(&15).is_some());
//! ```

pub mod error;
pub mod logging;

// not concurrent
pub mod non_concurrent;

pub use error::{InvariantViolation, LoggingError, TreeError};
pub use non_concurrent::rbtree::{Color, InOrder, NodeRef, PostOrder, PreOrder, RBTree};
