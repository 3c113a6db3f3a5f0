use crate::arena::{Arena, Entry};
use crate::binary_tree::node::Node;
use crate::error::{Error, Result};
use std::cmp;
use std::fmt;
use std::str::FromStr;

/// The order in which a traversal visits the elements of a tree.
///
/// # Examples
///
/// ```
/// use ordered_trees::Order;
///
/// assert_eq!("pre".parse::<Order>(), Ok(Order::PreOrder));
/// assert!("sideways".parse::<Order>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Order {
    /// Left subtree, node, right subtree. Ascending for a search tree.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "inorder" | "in-order" => Ok(Order::InOrder),
            "pre" | "preorder" | "pre-order" => Ok(Order::PreOrder),
            "post" | "postorder" | "post-order" => Ok(Order::PostOrder),
            _ => Err(Error::InvalidArgument(format!("unknown traversal order `{}`", s))),
        }
    }
}

/// The shape shared by every binary tree: an arena of nodes and an optional root.
///
/// The number of nodes in the arena is the size of the tree; every allocated node is reachable
/// from `root`.
#[derive(Clone)]
pub struct BinaryTree<T> {
    pub arena: Arena<Node<T>>,
    pub root: Option<Entry>,
}

impl<T> BinaryTree<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryTree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Result<Entry> {
        self.root.ok_or(Error::EmptyStructure)
    }

    pub fn element(&self, node: Entry) -> &T {
        &self.arena[node].element
    }

    /// Rewires `parent` so that the slot which held `old` now holds `new`, reseating the root if
    /// `parent` is `None`. The parent link of `new` is updated as well.
    pub fn replace_child(&mut self, parent: Option<Entry>, old: Entry, new: Option<Entry>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent_node = &mut self.arena[parent];
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
            },
        }
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    pub fn subtree_min(&self, mut node: Entry) -> Entry {
        while let Some(left) = self.arena[node].left {
            node = left;
        }
        node
    }

    pub fn subtree_max(&self, mut node: Entry) -> Entry {
        while let Some(right) = self.arena[node].right {
            node = right;
        }
        node
    }

    /// The cached height of a subtree: 0 if absent.
    pub fn height_of(&self, node: Option<Entry>) -> usize {
        node.map_or(0, |node| self.arena[node].height)
    }

    pub fn update_height(&mut self, node: Entry) {
        let Node { left, right, .. } = self.arena[node];
        let height = cmp::max(self.height_of(left), self.height_of(right)) + 1;
        self.arena[node].height = height;
    }

    pub fn balance(&self, node: Entry) -> isize {
        let Node { left, right, .. } = self.arena[node];
        self.height_of(left) as isize - self.height_of(right) as isize
    }

    /// Computes the height of the tree by walking every node. Returns 0 for an empty tree.
    pub fn structural_height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = Vec::new();
        stack.extend(self.root.map(|root| (root, 1)));
        while let Some((node, depth)) = stack.pop() {
            max_depth = cmp::max(max_depth, depth);
            let Node { left, right, .. } = self.arena[node];
            stack.extend(left.map(|left| (left, depth + 1)));
            stack.extend(right.map(|right| (right, depth + 1)));
        }
        max_depth
    }

    /// Collects the elements in the given order. Returns an empty vector for an empty tree.
    pub fn collect(&self, order: Order) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        match order {
            Order::InOrder => {
                let mut curr = self.root;
                loop {
                    while let Some(node) = curr {
                        stack.push(node);
                        curr = self.arena[node].left;
                    }
                    match stack.pop() {
                        Some(node) => {
                            ret.push(self.element(node));
                            curr = self.arena[node].right;
                        },
                        None => break,
                    }
                }
            },
            Order::PreOrder => {
                stack.extend(self.root);
                while let Some(node) = stack.pop() {
                    let Node { ref element, left, right, .. } = self.arena[node];
                    ret.push(element);
                    stack.extend(right);
                    stack.extend(left);
                }
            },
            Order::PostOrder => {
                // node, right, left reversed
                stack.extend(self.root);
                while let Some(node) = stack.pop() {
                    let Node { ref element, left, right, .. } = self.arena[node];
                    ret.push(element);
                    stack.extend(left);
                    stack.extend(right);
                }
                ret.reverse();
            },
        }
        ret
    }

    pub fn traverse(&self, order: Order) -> Result<Vec<&T>> {
        self.root()?;
        Ok(self.collect(order))
    }

    /// Writes the tree one node per line with box-drawing connectors. Left children are drawn
    /// with `›` and right children with `»`.
    pub fn render<F>(&self, f: &mut fmt::Formatter, label: F) -> fmt::Result
    where
        F: Fn(&Node<T>, &mut fmt::Formatter) -> fmt::Result,
    {
        let mut stack = Vec::new();
        stack.extend(self.root.map(|root| (root, String::new(), "", String::new())));
        while let Some((node, line_prefix, connector, child_prefix)) = stack.pop() {
            write!(f, "{}{}", line_prefix, connector)?;
            label(&self.arena[node], &mut *f)?;
            writeln!(f)?;

            let Node { left, right, .. } = self.arena[node];
            match (left, right) {
                (Some(left), Some(right)) => {
                    stack.push((right, child_prefix.clone(), "└─»", format!("{}   ", child_prefix)));
                    stack.push((left, child_prefix.clone(), "├─›", format!("{}│  ", child_prefix)));
                },
                (Some(left), None) => {
                    stack.push((left, child_prefix.clone(), "└─›", format!("{}   ", child_prefix)));
                },
                (None, Some(right)) => {
                    stack.push((right, child_prefix.clone(), "└─»", format!("{}   ", child_prefix)));
                },
                (None, None) => {},
            }
        }
        Ok(())
    }
}

impl<T> PartialEq for BinaryTree<T>
where
    T: PartialEq,
{
    /// Two trees are equal if both their in-order and pre-order traversals match, which pins down
    /// the shape as well as the contents.
    fn eq(&self, other: &BinaryTree<T>) -> bool {
        self.len() == other.len()
            && self.collect(Order::InOrder) == other.collect(Order::InOrder)
            && self.collect(Order::PreOrder) == other.collect(Order::PreOrder)
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryTree, Order};
    use crate::binary_tree::Node;
    use crate::error::Error;

    //     4
    //    / \
    //   2   6
    //  / \
    // 1   3
    fn sample() -> BinaryTree<u32> {
        let mut tree = BinaryTree::with_capacity(5);
        let four = tree.arena.allocate(Node::new(4));
        let two = tree.arena.allocate(Node::new(2));
        let six = tree.arena.allocate(Node::new(6));
        let one = tree.arena.allocate(Node::new(1));
        let three = tree.arena.allocate(Node::new(3));
        tree.root = Some(four);
        tree.arena[four].left = Some(two);
        tree.arena[four].right = Some(six);
        tree.arena[two].parent = Some(four);
        tree.arena[six].parent = Some(four);
        tree.arena[two].left = Some(one);
        tree.arena[two].right = Some(three);
        tree.arena[one].parent = Some(two);
        tree.arena[three].parent = Some(two);
        tree
    }

    #[test]
    fn test_traversals() {
        let tree = sample();
        assert_eq!(tree.collect(Order::InOrder), vec![&1, &2, &3, &4, &6]);
        assert_eq!(tree.collect(Order::PreOrder), vec![&4, &2, &1, &3, &6]);
        assert_eq!(tree.collect(Order::PostOrder), vec![&1, &3, &2, &6, &4]);
    }

    #[test]
    fn test_traverse_empty() {
        let tree: BinaryTree<u32> = BinaryTree::with_capacity(0);
        assert_eq!(tree.traverse(Order::InOrder), Err(Error::EmptyStructure));
        assert!(tree.collect(Order::PostOrder).is_empty());
    }

    #[test]
    fn test_structural_height() {
        let tree = sample();
        assert_eq!(tree.structural_height(), 3);
        assert_eq!(BinaryTree::<u32>::with_capacity(0).structural_height(), 0);
    }

    #[test]
    fn test_update_height_and_balance() {
        let mut tree = sample();
        for node in tree.collect_entries() {
            tree.update_height(node);
        }
        let root = tree.root.unwrap();
        assert_eq!(tree.arena[root].height, 3);
        assert_eq!(tree.balance(root), 1);
        assert_eq!(tree.height_of(None), 0);
    }

    #[test]
    fn test_replace_child_reseats_root() {
        let mut tree = sample();
        let root = tree.root.unwrap();
        let two = tree.arena[root].left.unwrap();
        tree.replace_child(None, root, Some(two));
        assert_eq!(tree.root, Some(two));
        assert_eq!(tree.arena[two].parent, None);
    }

    #[test]
    fn test_min_max() {
        let tree = sample();
        let root = tree.root.unwrap();
        assert_eq!(tree.element(tree.subtree_min(root)), &1);
        assert_eq!(tree.element(tree.subtree_max(root)), &6);
    }

    #[test]
    fn test_render() {
        struct Show<'a>(&'a BinaryTree<u32>);

        impl<'a> std::fmt::Display for Show<'a> {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.render(f, |node, f| write!(f, "{}", node.element))
            }
        }

        assert_eq!(
            Show(&sample()).to_string(),
            "4\n├─›2\n│  ├─›1\n│  └─»3\n└─»6\n",
        );
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("in".parse::<Order>(), Ok(Order::InOrder));
        assert_eq!("Post-Order".parse::<Order>(), Ok(Order::PostOrder));
        assert_eq!(
            "level".parse::<Order>(),
            Err(Error::InvalidArgument("unknown traversal order `level`".to_string())),
        );
    }

    impl<T> BinaryTree<T> {
        // post-order, so children come before their parents
        fn collect_entries(&self) -> Vec<crate::arena::Entry> {
            let mut ret = Vec::new();
            let mut stack = Vec::new();
            stack.extend(self.root);
            while let Some(node) = stack.pop() {
                ret.push(node);
                stack.extend(self.arena[node].left);
                stack.extend(self.arena[node].right);
            }
            ret.reverse();
            ret
        }
    }

    #[test]
    fn test_eq_distinguishes_shape() {
        let a = sample();
        let mut b = sample();
        assert!(a == b);

        // Same contents, different shape: rotate 2 up to the root by hand.
        let four = b.root.unwrap();
        let two = b.arena[four].left.unwrap();
        let three = b.arena[two].right.unwrap();
        b.arena[four].left = Some(three);
        b.arena[three].parent = Some(four);
        b.arena[two].right = Some(four);
        b.arena[four].parent = Some(two);
        b.arena[two].parent = None;
        b.root = Some(two);

        assert_eq!(a.collect(Order::InOrder), b.collect(Order::InOrder));
        assert!(a != b);
    }
}
