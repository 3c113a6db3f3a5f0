use crate::arena::Entry;
use crate::binary_tree::{BinaryTree, Node};

/// An iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
/// It keeps its own stack of pending nodes, primed with the left spine of the tree, so every
/// call to `iter` starts an independent traversal.
pub struct BinarySearchTreeIter<'a, T>
where
    T: 'a,
{
    tree: &'a BinaryTree<T>,
    stack: Vec<Entry>,
    remaining: usize,
}

impl<'a, T> BinarySearchTreeIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut iter = BinarySearchTreeIter {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<Entry>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = self.tree.arena[node].left;
        }
    }
}

impl<'a, T> Iterator for BinarySearchTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let tree = self.tree;
        self.push_left_spine(tree.arena[node].right);
        self.remaining -= 1;
        Some(tree.element(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for BinarySearchTreeIter<'a, T> where T: 'a {}

/// An owning iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned elements.
pub struct BinarySearchTreeIntoIter<T> {
    tree: BinaryTree<T>,
    stack: Vec<Entry>,
}

impl<T> BinarySearchTreeIntoIter<T> {
    pub(crate) fn new(tree: BinaryTree<T>) -> Self {
        let mut iter = BinarySearchTreeIntoIter {
            stack: Vec::new(),
            tree,
        };
        let root = iter.tree.root.take();
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<Entry>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = self.tree.arena[node].left;
        }
    }
}

impl<T> Iterator for BinarySearchTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let right = self.tree.arena[node].right;
        self.push_left_spine(right);
        let Node { element, .. } = self.tree.arena.free(node);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tree.arena.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for BinarySearchTreeIntoIter<T> {}
