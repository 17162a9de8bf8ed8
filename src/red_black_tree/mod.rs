//! Self-balancing binary search tree that uses a color bit on each link to ensure that the tree
//! remains approximately balanced during insertions.

mod node;
mod set;
mod tree;

pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
pub use self::tree::HeightSize;
