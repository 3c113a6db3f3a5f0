use crate::arena::Entry;
use crate::binary_tree::Order;
use crate::bst::{BinarySearchTree, BinarySearchTreeIntoIter, BinarySearchTreeIter, Rotate};
use crate::error::Result;
use log::debug;
use std::fmt;
use std::iter::FromIterator;

/// An ordered collection implemented using an AVL tree.
///
/// An AVL tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. It is built on
/// `BinarySearchTree<T>`: structural changes are made by the search tree and the AVL tree then
/// restores heights and balance from the lowest changed node upwards using rotations.
///
/// Like the search tree it is built on, duplicates are allowed and equal elements are visited in
/// insertion order.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for i in 1..8 {
///     tree.insert(i);
/// }
///
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.root(), Ok(&4));
///
/// assert_eq!(tree.remove(&4), Some(4));
/// assert_eq!(tree.remove(&4), None);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &5, &6, &7]);
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    bst: BinarySearchTree<T>,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `AvlTree<T>` that can hold `capacity` elements without
    /// reallocating its node storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTree {
            bst: BinarySearchTree::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.bst.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.bst.is_empty()
    }

    /// Returns the height of the tree, or 0 if the tree is empty. Heights are maintained on every
    /// update, so this does not walk the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let tree = &self.bst.tree;
        tree.height_of(tree.root)
    }

    /// Clears the tree, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.bst.clear();
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
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.root(), Ok(&2));
    /// ```
    pub fn root(&self) -> Result<&T> {
        self.bst.root()
    }

    /// Returns the minimum element of the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.bst.min()
    }

    /// Returns the maximum element of the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        self.bst.max()
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
    /// use ordered_trees::avl_tree::AvlTree;
    /// use ordered_trees::Order;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.traverse(Order::PreOrder), Ok(vec![&2, &1, &3]));
    /// ```
    pub fn traverse(&self, order: Order) -> Result<Vec<&T>> {
        self.bst.traverse(order)
    }

    /// Returns an iterator over the tree. The iterator will yield elements using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BinarySearchTreeIter<T> {
        self.bst.iter()
    }

    // Recomputes the height of `node` and each of its ancestors.
    fn update_heights(&mut self, mut curr: Option<Entry>) {
        let tree = &mut self.bst.tree;
        while let Some(node) = curr {
            tree.update_height(node);
            curr = tree.arena[node].parent;
        }
    }

    fn first_unbalanced(&self, mut curr: Option<Entry>) -> Option<Entry> {
        let tree = &self.bst.tree;
        while let Some(node) = curr {
            if tree.balance(node).abs() > 1 {
                return Some(node);
            }
            curr = tree.arena[node].parent;
        }
        None
    }

    /// Restores the balance of `node` with a single or double rotation if needed, then does the
    /// same for every ancestor up to the root. A rotation lowers the rotated node, so the walk
    /// continues from the child that replaced it.
    fn rebalance(&mut self, mut curr: Option<Entry>) {
        while let Some(node) = curr {
            let balance = self.bst.tree.balance(node);
            if balance > 1 {
                debug!("left-heavy node {:?} with balance {}", node, balance);
                if let Some(left) = self.bst.tree.arena[node].left {
                    if self.bst.tree.balance(left) < 0 {
                        self.bst.rotate_left(left);
                        self.bst.tree.update_height(left);
                    }
                }
                self.bst.rotate_right(node);
            } else if balance < -1 {
                debug!("right-heavy node {:?} with balance {}", node, balance);
                if let Some(right) = self.bst.tree.arena[node].right {
                    if self.bst.tree.balance(right) > 0 {
                        self.bst.rotate_right(right);
                        self.bst.tree.update_height(right);
                    }
                }
                self.bst.rotate_left(node);
            }
            self.bst.tree.update_height(node);
            curr = self.bst.tree.arena[node].parent;
        }
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Inserts an element into the tree and rebalances it. Elements equal to existing ones are
    /// kept and placed after them in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, element: T) {
        let node = self.bst.insert_node(element);
        self.update_heights(Some(node));
        if let Some(unbalanced) = self.first_unbalanced(Some(node)) {
            self.rebalance(Some(unbalanced));
        }
    }

    /// Removes an element from the tree and rebalances it. If the element exists, it will return
    /// the removed element. Otherwise it will return `None` and leave the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let node = self.bst.search(element)?;
        let (removed, altered) = self.bst.remove_node(node);
        self.update_heights(altered);
        if let Some(unbalanced) = self.first_unbalanced(altered) {
            self.rebalance(Some(unbalanced));
        }
        Some(removed)
    }

    /// Checks if an element exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        self.bst.contains(element)
    }

    /// Returns a reference to the stored element equal to `element`, or `None` if there is no
    /// such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, element: &T) -> Option<&T> {
        self.bst.get(element)
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for AvlTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlTree<T>) -> bool {
        self.bst == other.bst
    }
}

impl<T> Eq for AvlTree<T> where T: Eq {}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for AvlTree<T>
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

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = BinarySearchTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.bst.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = BinarySearchTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for AvlTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.bst
            .tree
            .render(f, |node, f| write!(f, "{} h={}", node.element, node.height))
    }
}
