use crate::arena::Entry;

/// A node of a binary tree stored in the tree's arena.
///
/// `parent` is a back-reference used for upward walks and rotations. `height` is only kept up to
/// date by the AVL tree; the plain binary search tree leaves it at 1.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub element: T,
    pub height: usize,
    pub parent: Option<Entry>,
    pub left: Option<Entry>,
    pub right: Option<Entry>,
}

impl<T> Node<T> {
    pub fn new(element: T) -> Self {
        Node {
            element,
            height: 1,
            parent: None,
            left: None,
            right: None,
        }
    }
}
