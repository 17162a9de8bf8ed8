use crate::error::Violation;
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::tree::{self, HeightSize};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::result;

/// An ordered set implemented using a left-leaning red black tree.
///
/// A red black tree encodes a 2-3-4 tree as a binary search tree by coloring the link from each
/// node to its parent. Red links always lean left, so a three node is a single red left link and
/// a four node is two consecutive red left links. Four nodes are split on the way down an
/// insertion, which keeps every root-to-leaf path at the same number of black links and bounds
/// the height of the tree logarithmically.
///
/// Keys are never removed individually; the set only grows until it is cleared or dropped.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(!set.insert(3));
/// assert_eq!(set.to_vec(), vec![0, 3]);
/// ```
pub struct RedBlackSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was not already in the set. If an
    /// equal key already exists, the set is left untouched and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        if tree::get(&self.tree, &key).is_some() {
            return false;
        }

        tree::insert(&mut self.tree, key);
        if let Some(ref mut node) = self.tree {
            node.color = Color::Black;
        }
        self.len += 1;
        true
    }

    /// Inserts a key if one is present. Inserting `None` is a no-op and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(!set.insert_opt(None));
    /// assert!(set.is_empty());
    /// assert!(set.insert_opt(Some(1)));
    /// ```
    pub fn insert_opt(&mut self, key: Option<T>) -> bool
    where
        T: Ord,
    {
        match key {
            Some(key) => self.insert(key),
            None => false,
        }
    }

    /// Inserts every key of an iterator in order. Duplicate keys are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_all(vec![2, 3, 1, 1]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_all<I>(&mut self, keys: I)
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a snapshot of every key in the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_all(vec![2, 3, 1, 9, 7, 5, 6, 4, 8]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns every key in ascending order paired with its depth in the tree. The root has a
    /// depth of one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_all(vec![1, 2]);
    /// assert_eq!(set.depths(), vec![(&1, 2), (&2, 1)]);
    /// ```
    pub fn depths(&self) -> Vec<(&T, usize)> {
        tree::depths(&self.tree)
    }

    /// Returns the height of the tree, counted in nodes along the longest root-to-leaf path, and
    /// the number of nodes in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::{HeightSize, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.height_and_size(), HeightSize { height: 0, size: 0 });
    /// set.insert(1);
    /// assert_eq!(set.height_and_size(), HeightSize { height: 1, size: 1 });
    /// ```
    pub fn height_and_size(&self) -> HeightSize {
        tree::height_and_size(&self.tree)
    }

    /// Checks the structural invariants of the underlying tree. Returns the number of black links
    /// on every root-to-leaf path, or the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..100).collect();
    /// assert!(set.validate().is_ok());
    /// ```
    pub fn validate(&self) -> result::Result<usize, Violation>
    where
        T: Ord,
    {
        tree::validate(&self.tree)
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref key,
                ref right,
                ..
            } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_all(iter);
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.insert_all(iter);
        set
    }
}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for RedBlackSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &RedBlackSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RedBlackSet<T> where T: Eq {}

impl<T> Serialize for RedBlackSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct RedBlackSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for RedBlackSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = RedBlackSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = RedBlackSet::new();
        while let Some(key) = seq.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for RedBlackSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackSetVisitor {
            marker: PhantomData,
        })
    }
}
