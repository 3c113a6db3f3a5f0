//! Ordered collections built on arena-backed binary trees.
//!
//! `bst::BinarySearchTree` is a plain binary search tree that keeps duplicates in insertion
//! order. `avl_tree::AvlTree` layers height tracking and rotations on top of it so that every
//! operation runs in time logarithmic in the number of elements.
//!
//! Nodes of both trees live in an `arena::Arena` and refer to their parent and children by
//! handle.
//!
//! # Examples
//!
//! ```
//! use ordered_trees::avl_tree::AvlTree;
//! use ordered_trees::Order;
//!
//! let mut tree: AvlTree<u32> = (1..8).collect();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.traverse(Order::InOrder).unwrap().len(), 7);
//!
//! tree.remove(&4);
//! assert!(!tree.contains(&4));
//! ```

pub mod arena;
pub mod avl_tree;
mod binary_tree;
pub mod bst;
mod error;

pub use crate::binary_tree::Order;
pub use crate::error::{Error, Result};
