use crate::arena::Entry;
use crate::binary_tree::{BinaryTree, Node, Order};
use crate::bst::iter::{BinarySearchTreeIntoIter, BinarySearchTreeIter};
use crate::error::Result;
use log::trace;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// Structural rotations used by the balancing trees built on top of `BinarySearchTree<T>`.
///
/// Both rotations keep parent links consistent and reseat the root when the rotated node was
/// the root. They do not touch sizes or heights, and rotating a node that lacks the required
/// child is a no-op.
pub(crate) trait Rotate {
    /// Lifts the right child of `node` into its place.
    fn rotate_left(&mut self, node: Entry);

    /// Lifts the left child of `node` into its place.
    fn rotate_right(&mut self, node: Entry);
}

/// An ordered collection implemented using an unbalanced binary search tree.
///
/// Every element in the left subtree of a node compares less than the node's element and every
/// element in the right subtree compares greater than or equal to it. Duplicates are allowed:
/// an element equal to an existing one is placed in its right subtree, so equal elements are
/// visited in insertion order.
///
/// Nodes are stored in an arena and linked by handles, including a link to the parent of each
/// node.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BinarySearchTree;
/// use ordered_trees::Order;
///
/// let mut tree = BinarySearchTree::new();
/// for i in &[5, 3, 8, 1, 4, 7, 9] {
///     tree.insert(*i);
/// }
///
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.height(), 3);
/// assert!(tree.contains(&4));
///
/// assert_eq!(tree.traverse(Order::PreOrder), Ok(vec![&5, &3, &1, &4, &8, &7, &9]));
/// assert_eq!(tree.remove(&5), Some(5));
/// assert_eq!(tree.remove(&6), None);
/// ```
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    pub(crate) tree: BinaryTree<T>,
}

impl<T> BinarySearchTree<T> {
    /// Constructs a new, empty `BinarySearchTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `BinarySearchTree<T>` that can hold `capacity` elements without
    /// reallocating its node storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        BinarySearchTree {
            tree: BinaryTree::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 if the tree
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.structural_height()
    }

    /// Clears the tree, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the element at the root of the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    /// use ordered_trees::Error;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.root(), Err(Error::EmptyStructure));
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.root(), Ok(&2));
    /// ```
    pub fn root(&self) -> Result<&T> {
        Ok(self.tree.element(self.tree.root()?))
    }

    /// Returns the minimum element of the tree. If the minimum is duplicated, the first one
    /// inserted is returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        let root = self.tree.root()?;
        Ok(self.tree.element(self.tree.subtree_min(root)))
    }

    /// Returns the maximum element of the tree. If the maximum is duplicated, the last one
    /// inserted is returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        let root = self.tree.root()?;
        Ok(self.tree.element(self.tree.subtree_max(root)))
    }

    /// Returns the elements of the tree in the given order.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    /// use ordered_trees::Order;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.traverse(Order::InOrder), Ok(vec![&1, &2, &3]));
    /// assert_eq!(tree.traverse(Order::PostOrder), Ok(vec![&1, &3, &2]));
    /// ```
    pub fn traverse(&self, order: Order) -> Result<Vec<&T>> {
        self.tree.traverse(order)
    }

    /// Returns an iterator over the tree. The iterator will yield elements using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BinarySearchTreeIter<T> {
        BinarySearchTreeIter::new(&self.tree)
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts an element into the tree. Elements equal to existing ones are kept and placed
    /// after them in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &1]);
    /// ```
    pub fn insert(&mut self, element: T) {
        self.insert_node(element);
    }

    /// Removes an element from the tree. If the element exists, it will return the removed
    /// element. Otherwise it will return `None` and leave the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let node = self.search(element)?;
        let (removed, _) = self.remove_node(node);
        Some(removed)
    }

    /// Checks if an element exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_some()
    }

    /// Returns a reference to the stored element equal to `element`, or `None` if there is no
    /// such element. With duplicates, this is the first equal element met walking down from the
    /// root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, element: &T) -> Option<&T> {
        self.search(element).map(|node| self.tree.element(node))
    }

    /// Walks down from the root: left while `element` is smaller, stop on an equal element,
    /// right otherwise.
    pub(crate) fn search(&self, element: &T) -> Option<Entry> {
        let mut curr = self.tree.root;
        while let Some(node) = curr {
            let Node { element: ref current, left, right, .. } = self.tree.arena[node];
            curr = if element < current {
                left
            } else if element == current {
                return Some(node);
            } else {
                right
            };
        }
        None
    }

    /// Attaches a new leaf holding `element` and returns it.
    pub(crate) fn insert_node(&mut self, element: T) -> Entry {
        let tree = &mut self.tree;
        let new_node = tree.arena.allocate(Node::new(element));
        let mut curr = match tree.root {
            Some(root) => root,
            None => {
                tree.root = Some(new_node);
                return new_node;
            },
        };

        loop {
            let go_left = tree.element(new_node) < tree.element(curr);
            let Node { left, right, .. } = tree.arena[curr];
            let next = if go_left { left } else { right };
            match next {
                Some(next) => curr = next,
                None => {
                    if go_left {
                        tree.arena[curr].left = Some(new_node);
                    } else {
                        tree.arena[curr].right = Some(new_node);
                    }
                    tree.arena[new_node].parent = Some(curr);
                    return new_node;
                },
            }
        }
    }

    /// Removes the element held by `node` and returns it, together with the lowest node whose
    /// subtree changed shape. That node is `None` only when the tree became empty.
    ///
    /// A node with a left child takes the element of its in-order predecessor, and the
    /// predecessor node, which has no right child, is spliced out instead.
    pub(crate) fn remove_node(&mut self, node: Entry) -> (T, Option<Entry>) {
        let tree = &mut self.tree;
        if tree.len() == 1 {
            tree.root = None;
            let Node { element, .. } = tree.arena.free(node);
            return (element, None);
        }

        let Node { parent, left, right, .. } = tree.arena[node];
        match (left, right) {
            (None, None) => {
                tree.replace_child(parent, node, None);
                let Node { element, .. } = tree.arena.free(node);
                (element, parent)
            },
            (None, Some(right)) => {
                tree.replace_child(parent, node, Some(right));
                let Node { element, .. } = tree.arena.free(node);
                (element, Some(right))
            },
            (Some(left), _) => {
                let predecessor = tree.subtree_max(left);
                let Node {
                    parent: predecessor_parent,
                    left: predecessor_left,
                    ..
                } = tree.arena[predecessor];
                tree.replace_child(predecessor_parent, predecessor, predecessor_left);
                let Node { element, .. } = tree.arena.free(predecessor);
                let removed = mem::replace(&mut tree.arena[node].element, element);
                (removed, predecessor_parent)
            },
        }
    }
}

impl<T> Rotate for BinarySearchTree<T> {
    fn rotate_left(&mut self, node: Entry) {
        let tree = &mut self.tree;
        let child = match tree.arena[node].right {
            Some(child) => child,
            None => return,
        };
        trace!("rotating left at {:?}", node);

        let parent = tree.arena[node].parent;
        let inner = tree.arena[child].left;
        tree.arena[node].right = inner;
        if let Some(inner) = inner {
            tree.arena[inner].parent = Some(node);
        }
        tree.replace_child(parent, node, Some(child));
        tree.arena[child].left = Some(node);
        tree.arena[node].parent = Some(child);
    }

    fn rotate_right(&mut self, node: Entry) {
        let tree = &mut self.tree;
        let child = match tree.arena[node].left {
            Some(child) => child,
            None => return,
        };
        trace!("rotating right at {:?}", node);

        let parent = tree.arena[node].parent;
        let inner = tree.arena[child].right;
        tree.arena[node].left = inner;
        if let Some(inner) = inner {
            tree.arena[inner].parent = Some(node);
        }
        tree.replace_child(parent, node, Some(child));
        tree.arena[child].right = Some(node);
        tree.arena[node].parent = Some(child);
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for BinarySearchTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &BinarySearchTree<T>) -> bool {
        self.tree == other.tree
    }
}

impl<T> Eq for BinarySearchTree<T> where T: Eq {}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;
    type IntoIter = BinarySearchTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        BinarySearchTreeIntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = BinarySearchTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.tree.render(f, |node, f| write!(f, "{}", node.element))
    }
}
