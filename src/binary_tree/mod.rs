//! Node storage and order-independent operations shared by every binary tree in the crate.

mod node;
mod tree;

pub(crate) use self::node::Node;
pub(crate) use self::tree::BinaryTree;
pub use self::tree::Order;
