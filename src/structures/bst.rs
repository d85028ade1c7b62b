//! Binary search tree with exclusively owned children
//!
//! Every node owns its subtrees through `Option<Box<Node>>`. Mutating
//! operations take the subtree by value and hand back the (possibly new)
//! subtree root, which the caller stores in place of the old one:
//!
//! ```text
//! link = insert(link, value)
//! link = remove(link, value)
//! ```
//!
//! Duplicate values are silently ignored on insert, so the ordering is strict:
//! `left < node.value < right` for every node.

use crate::generators::errors::EngineError;
use std::collections::VecDeque;
use std::fmt;

/// Optional owned subtree
pub type Link = Option<Box<Node>>;

/// A single tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i32,
    pub left: Link,
    pub right: Link,
}

impl Node {
    pub fn leaf(value: i32) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}

/// Insert `value` below `link`, returning the new subtree root.
///
/// Values already present leave the tree unchanged.
pub fn insert(link: Link, value: i32) -> Link {
    match link {
        None => Some(Box::new(Node::leaf(value))),
        Some(mut node) => {
            if value < node.value {
                node.left = insert(node.left.take(), value);
            } else if value > node.value {
                node.right = insert(node.right.take(), value);
            }
            Some(node)
        }
    }
}

/// Remove `value` from the subtree, returning the new subtree root.
///
/// A node with two children takes the value of its in-order successor, and
/// the successor is then removed from the right subtree.
pub fn remove(link: Link, value: i32) -> Link {
    let mut node = link?;

    if value < node.value {
        node.left = remove(node.left.take(), value);
        return Some(node);
    }
    if value > node.value {
        node.right = remove(node.right.take(), value);
        return Some(node);
    }

    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (None, Some(right)) => Some(right),
        (Some(left), None) => Some(left),
        (Some(left), Some(right)) => {
            let successor = find_min(&right).value;
            node.value = successor;
            node.left = Some(left);
            node.right = remove(Some(right), successor);
            Some(node)
        }
    }
}

/// Walk left links until exhausted.
///
/// Taking `&Node` rather than `&Link` makes the empty-tree case unrepresentable;
/// callers holding a `Link` must check for `None` first.
pub fn find_min(node: &Node) -> &Node {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}

/// The four supported traversal orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TraversalOrder {
    #[value(name = "inorder")]
    InOrder,
    #[value(name = "preorder")]
    PreOrder,
    #[value(name = "postorder")]
    PostOrder,
    #[value(name = "levelorder")]
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    /// Cycle to the next order (inorder -> preorder -> postorder -> levelorder)
    pub fn next(self) -> Self {
        match self {
            TraversalOrder::InOrder => TraversalOrder::PreOrder,
            TraversalOrder::PreOrder => TraversalOrder::PostOrder,
            TraversalOrder::PostOrder => TraversalOrder::LevelOrder,
            TraversalOrder::LevelOrder => TraversalOrder::InOrder,
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::InOrder => "inorder",
            TraversalOrder::PreOrder => "preorder",
            TraversalOrder::PostOrder => "postorder",
            TraversalOrder::LevelOrder => "levelorder",
        };
        f.write_str(name)
    }
}

fn inorder_into(link: &Link, out: &mut Vec<i32>) {
    if let Some(node) = link {
        inorder_into(&node.left, out);
        out.push(node.value);
        inorder_into(&node.right, out);
    }
}

fn preorder_into(link: &Link, out: &mut Vec<i32>) {
    if let Some(node) = link {
        out.push(node.value);
        preorder_into(&node.left, out);
        preorder_into(&node.right, out);
    }
}

fn postorder_into(link: &Link, out: &mut Vec<i32>) {
    if let Some(node) = link {
        postorder_into(&node.left, out);
        postorder_into(&node.right, out);
        out.push(node.value);
    }
}

fn level_order_into(link: &Link, out: &mut Vec<i32>) {
    let mut queue: VecDeque<&Node> = VecDeque::new();
    if let Some(root) = link.as_deref() {
        queue.push_back(root);
    }
    while let Some(node) = queue.pop_front() {
        out.push(node.value);
        if let Some(left) = node.left.as_deref() {
            queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back(right);
        }
    }
}

/// Owning handle around the root link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bst {
    root: Link,
}

impl Bst {
    pub fn new() -> Self {
        Bst { root: None }
    }

    /// Build a tree by inserting `values` in order
    pub fn from_values(values: &[i32]) -> Self {
        let mut tree = Bst::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a value; returns false if it was already present
    pub fn insert(&mut self, value: i32) -> bool {
        if self.contains(value) {
            return false;
        }
        self.root = insert(self.root.take(), value);
        true
    }

    /// Remove a value; returns false if it was absent
    pub fn remove(&mut self, value: i32) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.root = remove(self.root.take(), value);
        true
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value < node.value {
                current = node.left.as_deref();
            } else if value > node.value {
                current = node.right.as_deref();
            } else {
                return true;
            }
        }
        false
    }

    /// Smallest value in the tree
    pub fn min_value(&self) -> Result<i32, EngineError> {
        self.root
            .as_deref()
            .map(|root| find_min(root).value)
            .ok_or(EngineError::EmptyTree)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        fn count(link: &Link) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
        }
        count(&self.root)
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        fn depth(link: &Link) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + depth(&node.left).max(depth(&node.right)))
        }
        depth(&self.root)
    }

    /// Full ordered sequence of visited values for `order`
    pub fn traverse(&self, order: TraversalOrder) -> Vec<i32> {
        let mut out = Vec::new();
        match order {
            TraversalOrder::InOrder => inorder_into(&self.root, &mut out),
            TraversalOrder::PreOrder => preorder_into(&self.root, &mut out),
            TraversalOrder::PostOrder => postorder_into(&self.root, &mut out),
            TraversalOrder::LevelOrder => level_order_into(&self.root, &mut out),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_min_walks_left() {
        let tree = Bst::from_values(&[8, 4, 12, 2, 6]);
        let root = tree.root().expect("tree is not empty");
        assert_eq!(find_min(root).value, 2);
        assert_eq!(tree.min_value().unwrap(), 2);
    }

    #[test]
    fn test_min_value_on_empty_tree() {
        let tree = Bst::new();
        assert!(matches!(tree.min_value(), Err(EngineError::EmptyTree)));
    }

    #[test]
    fn test_free_functions_return_new_root() {
        let mut link: Link = None;
        for v in [5, 3, 8] {
            link = insert(link, v);
        }
        link = remove(link, 5);
        assert_eq!(link.as_ref().map(|n| n.value), Some(8));
        link = remove(link, 8);
        link = remove(link, 3);
        assert!(link.is_none());
    }
}
