//! A node record stored in the arena of [`BinaryTree`](super::BinaryTree).
use serde::{Serialize, Deserialize};

use super::split_rule::{self, LeftRight};

use std::fmt;


/// A node of a flat, array-indexed binary tree.
///
/// An internal node splits on `feature_index` at threshold `value`
/// and refers to its children by their positions in the node array.
/// A leaf has no feature and no children;
/// its `value` is the predicted class label.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) node_index: usize,
    pub(crate) feature_index: Option<usize>,
    pub(crate) value: f64,
    pub(crate) left_index: Option<usize>,
    pub(crate) right_index: Option<usize>,
    #[serde(default)]
    pub(crate) leaf_probability_index: Option<usize>,
}


impl Node {
    /// Construct an internal node at position `node_index`
    /// that sends `x[feature_index] <= threshold` to `left_index`
    /// and the rest to `right_index`.
    #[inline]
    pub fn branch(
        node_index: usize,
        feature_index: usize,
        threshold: f64,
        left_index: usize,
        right_index: usize,
    ) -> Self
    {
        Self {
            node_index,
            feature_index: Some(feature_index),
            value: threshold,
            left_index: Some(left_index),
            right_index: Some(right_index),
            leaf_probability_index: None,
        }
    }


    /// Construct a leaf at position `node_index` predicting `label`.
    #[inline]
    pub fn leaf(node_index: usize, label: f64) -> Self {
        Self {
            node_index,
            feature_index: None,
            value: label,
            left_index: None,
            right_index: None,
            leaf_probability_index: None,
        }
    }


    /// Attach the auxiliary index owned by the tree inducer.
    /// Pruning never interprets it, only carries it over.
    #[inline]
    pub fn with_leaf_probability_index(mut self, index: usize) -> Self {
        self.leaf_probability_index = Some(index);
        self
    }


    /// Returns the leaf that replaces `self` when `self` is pruned.
    /// The identity (`node_index`) and the auxiliary index survive.
    #[inline]
    pub(crate) fn to_leaf(self, label: f64) -> Self {
        Self {
            node_index: self.node_index,
            feature_index: None,
            value: label,
            left_index: None,
            right_index: None,
            leaf_probability_index: self.leaf_probability_index,
        }
    }


    /// Position of this node in the node array.
    #[inline]
    pub fn node_index(&self) -> usize {
        self.node_index
    }


    /// The split feature, `None` for a leaf.
    #[inline]
    pub fn feature_index(&self) -> Option<usize> {
        self.feature_index
    }


    /// Threshold of an internal node, class label of a leaf.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }


    /// Index of the left child.
    #[inline]
    pub fn left_index(&self) -> Option<usize> {
        self.left_index
    }


    /// Index of the right child.
    #[inline]
    pub fn right_index(&self) -> Option<usize> {
        self.right_index
    }


    /// The auxiliary index owned by the tree inducer.
    #[inline]
    pub fn leaf_probability_index(&self) -> Option<usize> {
        self.leaf_probability_index
    }


    /// Returns `true` if `self` has no split.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.feature_index.is_none()
    }


    /// Returns the pair `(left, right)` of child indices,
    /// or `None` for a leaf.
    ///
    /// A node with exactly one child violates the tree invariant
    /// and makes this method panic.
    #[inline]
    pub fn children(&self) -> Option<(usize, usize)> {
        match (self.left_index, self.right_index) {
            (Some(l), Some(r)) => Some((l, r)),
            (None, None) => None,
            _ => panic!(
                "Node {} has exactly one child. \
                 A node must have zero or two children.",
                self.node_index
            ),
        }
    }


    /// Decides which child `observation` descends into.
    /// Must not be called on a leaf.
    #[inline]
    pub fn route(&self, observation: &[f64]) -> LeftRight {
        let feature = self.feature_index
            .expect("Tried to route an observation through a leaf");
        split_rule::split(observation[feature], self.value)
    }


    /// Index of the child `observation` descends into.
    #[inline]
    pub(crate) fn next(&self, observation: &[f64]) -> usize {
        let (left, right) = self.children()
            .expect("Tried to descend from a leaf");
        match self.route(observation) {
            LeftRight::Left  => left,
            LeftRight::Right => right,
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.feature_index {
            Some(feature) => {
                f.debug_struct("Branch")
                    .field("index", &self.node_index)
                    .field("feature", &feature)
                    .field("threshold", &self.value)
                    .field("left", &self.left_index)
                    .field("right", &self.right_index)
                    .finish()
            },
            None => {
                f.debug_struct("Leaf")
                    .field("index", &self.node_index)
                    .field("label", &self.value)
                    .finish()
            },
        }
    }
}
