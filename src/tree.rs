//! The files in `tree/` directory define
//! the array-indexed binary tree that the pruners mutate.

/// Defines the node record stored in the tree arena.
pub mod node;
/// Defines the routing rule of the internal nodes.
pub mod split_rule;
/// Defines `BinaryTree` and its navigation primitives.
pub mod binary_tree;


pub use node::Node;
pub use split_rule::LeftRight;
pub use binary_tree::{
    BinaryTree,
    TreeError,
};
