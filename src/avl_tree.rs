use std::cmp::Ordering;
use std::fmt::Display;

/// Height-balanced binary search tree (AVL). After every insert the heights
/// of any node's two subtrees differ by at most one, so lookups stay O(log n)
/// regardless of insertion order.
#[derive(Debug, Default)]
pub struct AvlTree<T> {
    root: Option<Box<AvlNode<T>>>,
    len: usize,
}

#[derive(Debug)]
struct AvlNode<T> {
    item: T,
    // longest path to a leaf, counting nodes; a leaf has height 1
    height: u32,
    left: Option<Box<AvlNode<T>>>,
    right: Option<Box<AvlNode<T>>>,
}

fn height<T>(node: &Option<Box<AvlNode<T>>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

impl<T> AvlNode<T> {
    fn new(item: T) -> Self {
        Self {
            item,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of insert calls so far. Duplicate inserts count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Value at the root of the tree.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty; calling this on an empty tree is a
    /// contract violation, not a recoverable condition.
    pub fn root(&self) -> &T {
        match &self.root {
            Some(n) => &n.item,
            None => panic!("root() called on an empty AvlTree"),
        }
    }

    /// Generalized membership query. `compare` encodes "target versus node":
    /// return `Less` to descend left, `Greater` to descend right, `Equal` on
    /// a match. The comparator must be monotonic with respect to the tree's
    /// order (e.g. "is any value in [lo, hi] present" maps nodes below `lo`
    /// to `Greater` and nodes above `hi` to `Less`); a non-monotonic
    /// comparator yields an unspecified answer.
    pub fn contains_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut node = &self.root;
        while let Some(n) = node {
            match compare(&n.item) {
                Ordering::Equal => return true,
                Ordering::Less => node = &n.left,
                Ordering::Greater => node = &n.right,
            }
        }
        false
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_ref()?;
        while let Some(left) = &node.left {
            node = left;
        }
        Some(&node.item)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_ref()?;
        while let Some(right) = &node.right {
            node = right;
        }
        Some(&node.item)
    }

    /// All values in non-decreasing order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len);
        Self::in_order_recursive(&self.root, &mut items);
        items
    }

    fn in_order_recursive<'a>(node: &'a Option<Box<AvlNode<T>>>, items: &mut Vec<&'a T>) {
        if let Some(n) = node {
            Self::in_order_recursive(&n.left, items);
            items.push(&n.item);
            Self::in_order_recursive(&n.right, items);
        }
    }
}

impl<T: Ord> AvlTree<T> {
    /// Inserts `item`, rebalancing on the way back up. Duplicates are routed
    /// right and stored again, so the tree behaves as a multiset and `len`
    /// grows on every call.
    pub fn insert(&mut self, item: T) {
        let root = self.root.take();
        self.root = Some(Self::insert_recursive(root, item));
        self.len += 1;
    }

    pub fn insert_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.contains_by(|other| item.cmp(other))
    }

    fn insert_recursive(node: Option<Box<AvlNode<T>>>, item: T) -> Box<AvlNode<T>> {
        let mut node = match node {
            None => return Box::new(AvlNode::new(item)),
            Some(n) => n,
        };

        if item < node.item {
            node.left = Some(Self::insert_recursive(node.left.take(), item));
        } else {
            node.right = Some(Self::insert_recursive(node.right.take(), item));
        }

        node.update_height();
        Self::rebalance(node)
    }

    /// Restores the balance-factor invariant at `node` after a child subtree
    /// grew. The four cases: left-left and right-right take a single
    /// rotation, left-right and right-left rotate the child first.
    fn rebalance(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let balance = node.balance_factor();

        if balance > 1 {
            if node.left.as_ref().map_or(0, |n| n.balance_factor()) < 0 {
                if let Some(left) = node.left.take() {
                    node.left = Some(Self::rotate_left(left));
                }
            }
            Self::rotate_right(node)
        } else if balance < -1 {
            if node.right.as_ref().map_or(0, |n| n.balance_factor()) > 0 {
                if let Some(right) = node.right.take() {
                    node.right = Some(Self::rotate_right(right));
                }
            }
            Self::rotate_left(node)
        } else {
            node
        }
    }

    fn rotate_right(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let mut pivot = node
            .left
            .take()
            .expect("right rotation requires a left child");
        node.left = pivot.right.take();
        node.update_height();
        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }

    fn rotate_left(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let mut pivot = node
            .right
            .take()
            .expect("left rotation requires a right child");
        node.right = pivot.left.take();
        node.update_height();
        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }
}

impl<T: Display> AvlTree<T> {
    pub fn pretty_print(&self) {
        println!("\n=== AVL Tree ===");
        if self.root.is_none() {
            println!("  (empty tree)");
        } else {
            Self::print_tree(&self.root, "", true);
        }
        println!("================\n");
    }

    fn print_tree(node: &Option<Box<AvlNode<T>>>, prefix: &str, is_tail: bool) {
        if let Some(n) = node {
            println!(
                "{}{} {} (h={})",
                prefix,
                if is_tail { "└──" } else { "├──" },
                n.item,
                n.height
            );

            let new_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });

            if n.right.is_some() {
                Self::print_tree(&n.right, &new_prefix, n.left.is_none());
            }
            if n.left.is_some() {
                Self::print_tree(&n.left, &new_prefix, true);
            }
        }
    }
}
