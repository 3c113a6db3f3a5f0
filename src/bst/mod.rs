//! Unbalanced binary search tree with parent links. Equal elements are kept and ordered by
//! insertion.

mod iter;
mod tree;

pub use self::iter::{BinarySearchTreeIntoIter, BinarySearchTreeIter};
pub use self::tree::BinarySearchTree;
pub(crate) use self::tree::Rotate;
