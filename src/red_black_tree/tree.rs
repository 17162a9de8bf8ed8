use crate::error::Violation;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::result;

pub type Tree<T> = Option<Box<Node<T>>>;

/// The shape of a tree: the number of nodes on its longest root-to-leaf path and its total number
/// of nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightSize {
    pub height: usize,
    pub size: usize,
}

pub fn is_red<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

// Splits four nodes on the way down and leans red links left on the way up. The caller is
// responsible for recoloring the root.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => {
            if node.is_four_node() {
                node.split_four_node();
            }

            match key.cmp(&node.key) {
                Ordering::Less => insert(&mut node.left, key),
                Ordering::Greater => insert(&mut node.right, key),
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");
    if is_red(&node.right) {
        node.lean_left();
    }

    ret
}

pub fn get<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn ceil<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Returns every key paired with its depth using in-order traversal. The root has a depth of one.
pub fn depths<T>(tree: &Tree<T>) -> Vec<(&T, usize)> {
    let mut ret = Vec::new();
    collect_depths(tree, 1, &mut ret);
    ret
}

fn collect_depths<'a, T>(tree: &'a Tree<T>, depth: usize, ret: &mut Vec<(&'a T, usize)>) {
    if let Some(ref node) = tree {
        collect_depths(&node.left, depth + 1, ret);
        ret.push((&node.key, depth));
        collect_depths(&node.right, depth + 1, ret);
    }
}

pub fn height_and_size<T>(tree: &Tree<T>) -> HeightSize {
    match tree {
        None => HeightSize { height: 0, size: 0 },
        Some(ref node) => measure(node, 1),
    }
}

fn measure<T>(node: &Node<T>, depth: usize) -> HeightSize {
    let mut ret = HeightSize { height: depth, size: 1 };
    for child in [&node.left, &node.right].iter() {
        if let Some(child) = child {
            let child_height_size = measure(child, depth + 1);
            ret.height = cmp::max(ret.height, child_height_size.height);
            ret.size += child_height_size.size;
        }
    }
    ret
}

/// Checks every structural invariant of the tree and returns the number of black links on each
/// root-to-leaf path.
pub fn validate<T>(tree: &Tree<T>) -> result::Result<usize, Violation>
where
    T: Ord,
{
    if is_red(tree) {
        return Err(Violation::RedRoot);
    }
    validate_subtree(tree, 0, None, None)
}

fn validate_subtree<'a, T>(
    tree: &'a Tree<T>,
    red_links: usize,
    lower: Option<&'a T>,
    upper: Option<&'a T>,
) -> result::Result<usize, Violation>
where
    T: Ord,
{
    let node = match tree {
        None => return Ok(0),
        Some(ref node) => node,
    };

    let below_lower = lower.map_or(false, |lower| node.key <= *lower);
    let above_upper = upper.map_or(false, |upper| node.key >= *upper);
    if below_lower || above_upper {
        return Err(Violation::OutOfOrder);
    }

    if is_red(&node.right) {
        return Err(Violation::RedRightLink);
    }

    // a four node is the longest run of red links allowed
    let red_links = match node.color {
        Color::Red => red_links + 1,
        Color::Black => 0,
    };
    if red_links > 2 {
        return Err(Violation::ConsecutiveRedLinks);
    }

    let left = validate_subtree(&node.left, red_links, lower, Some(&node.key))?;
    let right = validate_subtree(&node.right, red_links, Some(&node.key), upper)?;
    if left != right {
        return Err(Violation::UnbalancedBlackLinks { left, right });
    }

    match node.color {
        Color::Red => Ok(left),
        Color::Black => Ok(left + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::{depths, height_and_size, insert, validate, HeightSize, Tree};
    use crate::error::Violation;
    use crate::red_black_tree::node::{Color, Node};

    fn node(key: u32, color: Color, left: Tree<u32>, right: Tree<u32>) -> Tree<u32> {
        Some(Box::new(Node {
            key,
            color,
            left,
            right,
        }))
    }

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key);
            if let Some(ref mut root) = tree {
                root.color = Color::Black;
            }
        }
        tree
    }

    #[test]
    fn test_height_and_size_empty() {
        let tree: Tree<u32> = None;
        assert_eq!(height_and_size(&tree), HeightSize { height: 0, size: 0 });
    }

    #[test]
    fn test_height_and_size_unbalanced() {
        let tree = node(
            1,
            Color::Black,
            None,
            node(2, Color::Black, None, node(3, Color::Black, None, None)),
        );
        assert_eq!(height_and_size(&tree), HeightSize { height: 3, size: 3 });
    }

    #[test]
    fn test_insert_ascending_shape() {
        let tree = build(&[1, 2, 3]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.key, 3);
        assert_eq!(root.color, Color::Black);
        assert!(root.right.is_none());

        let left = root.left.as_ref().unwrap();
        assert_eq!(left.key, 2);
        assert_eq!(left.color, Color::Red);
        assert_eq!(left.left.as_ref().unwrap().color, Color::Red);

        assert_eq!(validate(&tree), Ok(1));
    }

    #[test]
    fn test_insert_splits_four_node() {
        let tree = build(&[1, 2, 3, 4]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.key, 2);
        assert_eq!(root.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(root.right.as_ref().unwrap().key, 4);
        assert_eq!(validate(&tree), Ok(2));
    }

    #[test]
    fn test_insert_duplicate_returns_false() {
        let mut tree = build(&[1]);
        assert!(!insert(&mut tree, 1));
        assert_eq!(height_and_size(&tree), HeightSize { height: 1, size: 1 });
    }

    #[test]
    fn test_depths() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(depths(&tree), vec![(&1, 3), (&2, 2), (&3, 1)]);
    }

    #[test]
    fn test_validate_red_root() {
        let tree = node(1, Color::Red, None, None);
        assert_eq!(validate(&tree), Err(Violation::RedRoot));
    }

    #[test]
    fn test_validate_out_of_order() {
        let tree = node(2, Color::Black, node(3, Color::Red, None, None), None);
        assert_eq!(validate(&tree), Err(Violation::OutOfOrder));
    }

    #[test]
    fn test_validate_red_right_link() {
        let tree = node(1, Color::Black, None, node(2, Color::Red, None, None));
        assert_eq!(validate(&tree), Err(Violation::RedRightLink));
    }

    #[test]
    fn test_validate_consecutive_red_links() {
        let tree = node(
            4,
            Color::Black,
            node(
                3,
                Color::Red,
                node(2, Color::Red, node(1, Color::Red, None, None), None),
                None,
            ),
            None,
        );
        assert_eq!(validate(&tree), Err(Violation::ConsecutiveRedLinks));
    }

    #[test]
    fn test_validate_unbalanced_black_links() {
        let tree = node(2, Color::Black, node(1, Color::Black, None, None), None);
        assert_eq!(
            validate(&tree),
            Err(Violation::UnbalancedBlackLinks { left: 1, right: 0 }),
        );
    }
}
