use crate::red_black_tree::tree;
use std::mem;

/// An enum representing the color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// The color belongs to the incoming link, not to the node itself. A node is always created red
/// and the root is recolored black after each insertion.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    /// Returns `true` if the node and its left child both hang off red left links.
    pub fn is_four_node(&self) -> bool {
        match self.left {
            Some(ref child) => child.color == Color::Red && tree::is_red(&child.left),
            None => false,
        }
    }

    /// Promotes the right child. Every node keeps its incoming color.
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.left = Some(child);
    }

    /// Promotes the left child. Every node keeps its incoming color.
    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.right = Some(child);
    }

    /// Breaks up two consecutive red left links by promoting the middle node.
    pub fn split_four_node(&mut self) {
        self.rotate_right();
        if let Some(ref mut child) = self.left {
            child.color = Color::Black;
        }
    }

    /// Turns a red right link into a red left link. The promoted node inherits the incoming color
    /// of the subtree.
    pub fn lean_left(&mut self) {
        self.rotate_left();
        if let Some(ref mut child) = self.left {
            self.color = child.color;
            child.color = Color::Red;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Node};

    fn leaf(key: u32, color: Color) -> Option<Box<Node<u32>>> {
        let mut node = Node::new(key);
        node.color = color;
        Some(Box::new(node))
    }

    #[test]
    fn test_new_is_red() {
        let node = Node::new(1);
        assert_eq!(node.color, Color::Red);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }

    #[test]
    fn test_rotate_left() {
        let mut node = Node::new(2);
        node.color = Color::Black;
        node.left = leaf(1, Color::Black);
        node.right = leaf(4, Color::Red);
        node.right.as_mut().unwrap().left = leaf(3, Color::Black);

        node.rotate_left();

        assert_eq!(node.key, 4);
        assert_eq!(node.color, Color::Red);
        let left = node.left.as_ref().unwrap();
        assert_eq!(left.key, 2);
        assert_eq!(left.color, Color::Black);
        assert_eq!(left.left.as_ref().unwrap().key, 1);
        assert_eq!(left.right.as_ref().unwrap().key, 3);
        assert!(node.right.is_none());
    }

    #[test]
    fn test_rotate_right() {
        let mut node = Node::new(4);
        node.left = leaf(2, Color::Red);
        node.left.as_mut().unwrap().right = leaf(3, Color::Black);

        node.rotate_right();

        assert_eq!(node.key, 2);
        let right = node.right.as_ref().unwrap();
        assert_eq!(right.key, 4);
        assert_eq!(right.left.as_ref().unwrap().key, 3);
        assert!(node.left.is_none());
    }

    #[test]
    fn test_split_four_node() {
        let mut node = Node::new(3);
        node.color = Color::Black;
        node.left = leaf(2, Color::Red);
        node.left.as_mut().unwrap().left = leaf(1, Color::Red);
        assert!(node.is_four_node());

        node.split_four_node();

        assert_eq!(node.key, 2);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
        assert!(!node.is_four_node());
    }

    #[test]
    fn test_lean_left() {
        let mut node = Node::new(1);
        node.color = Color::Black;
        node.right = leaf(2, Color::Red);

        node.lean_left();

        assert_eq!(node.key, 2);
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Red);
        assert!(node.right.is_none());
    }
}
