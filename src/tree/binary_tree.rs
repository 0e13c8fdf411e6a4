//! Defines [`BinaryTree`], the arena that owns the nodes
//! of a trained decision tree.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use crate::Classifier;
use crate::constants::NIL;
use super::node::Node;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Errors raised while building a [`BinaryTree`].
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The node array is empty, so the tree has no root.
    #[error("the tree has no nodes")]
    Empty,

    /// The tree knows no class label.
    #[error("the tree has no target names")]
    NoClasses,

    /// A node is stored at a position different from its `node_index`.
    #[error("node stored at position {position} claims index {node_index}")]
    IndexMismatch {
        /// Position of the node in the array.
        position: usize,
        /// Index the node claims.
        node_index: usize,
    },

    /// A node has exactly one child.
    #[error("node {index} has exactly one child")]
    SingleChild {
        /// Index of the offending node.
        index: usize,
    },

    /// A node has a split feature but no children, or the converse.
    #[error("node {index} mixes leaf and branch fields")]
    Inconsistent {
        /// Index of the offending node.
        index: usize,
    },

    /// A child index does not refer to a node.
    #[error("node {index} refers to child {child}, but the tree has {n_nodes} nodes")]
    ChildOutOfRange {
        /// Index of the parent.
        index: usize,
        /// The child index it refers to.
        child: usize,
        /// Number of nodes in the array.
        n_nodes: usize,
    },

    /// A child is stored before (or at) its parent.
    #[error("node {index} refers to child {child}, which is not stored after it")]
    ChildNotAfterParent {
        /// Index of the parent.
        index: usize,
        /// The child index it refers to.
        child: usize,
    },

    /// The raw arrays given to [`BinaryTree::from_raw_arrays`]
    /// have different lengths.
    #[error("raw node arrays have inconsistent lengths")]
    RawLength,

    /// A raw index is negative but not the `-1` sentinel.
    #[error("raw index {value} at node {index} is neither -1 nor a valid index")]
    RawIndex {
        /// Index of the node.
        index: usize,
        /// The raw value found.
        value: i64,
    },

    /// The JSON representation could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


/// A binary decision tree stored as an array of [`Node`]s.
///
/// The root lives at position `0` and every child is stored
/// after its parent.
/// Iterating the node array backwards therefore visits
/// every subtree before the node that holds it,
/// which is what the bottom-up pruners rely on.
///
/// Pruning never shrinks the array.
/// The descendants of a pruned node stay allocated
/// but become unreachable from the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryTree {
    nodes: Vec<Node>,
    target_names: Vec<f64>,
}


impl BinaryTree {
    /// Construct a tree from its node array and the class labels
    /// known to the model.
    /// Returns an error if the nodes violate the arena invariants.
    pub fn new(nodes: Vec<Node>, target_names: Vec<f64>)
        -> Result<Self, TreeError>
    {
        let tree = Self { nodes, target_names };
        tree.validate()?;
        Ok(tree)
    }


    /// Construct a tree from parallel arrays in which `-1`
    /// marks "no feature" and "no child".
    /// This is the layout most tree inducers export.
    pub fn from_raw_arrays(
        features: &[i64],
        values: &[f64],
        left: &[i64],
        right: &[i64],
        target_names: Vec<f64>,
    ) -> Result<Self, TreeError>
    {
        let n_nodes = features.len();
        if values.len() != n_nodes
            || left.len() != n_nodes
            || right.len() != n_nodes
        {
            return Err(TreeError::RawLength);
        }

        let nodes = (0..n_nodes).map(|i| {
                Ok(Node {
                    node_index: i,
                    feature_index: raw_index(i, features[i])?,
                    value: values[i],
                    left_index: raw_index(i, left[i])?,
                    right_index: raw_index(i, right[i])?,
                    leaf_probability_index: None,
                })
            })
            .collect::<Result<Vec<_>, TreeError>>()?;

        Self::new(nodes, target_names)
    }


    /// Read a tree from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let tree: Self = serde_json::from_str(json)?;
        tree.validate()?;
        Ok(tree)
    }


    /// Write `self` as JSON.
    pub fn to_json(&self) -> Result<String, TreeError> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }


    fn validate(&self) -> Result<(), TreeError> {
        let n_nodes = self.nodes.len();
        if n_nodes == 0 {
            return Err(TreeError::Empty);
        }
        if self.target_names.is_empty() {
            return Err(TreeError::NoClasses);
        }

        for (position, node) in self.nodes.iter().enumerate() {
            if node.node_index != position {
                let node_index = node.node_index;
                return Err(TreeError::IndexMismatch { position, node_index });
            }

            let children = match (node.left_index, node.right_index) {
                (Some(l), Some(r)) => Some((l, r)),
                (None, None) => None,
                _ => {
                    return Err(TreeError::SingleChild { index: position });
                },
            };

            if children.is_some() != node.feature_index.is_some() {
                return Err(TreeError::Inconsistent { index: position });
            }

            let Some((left, right)) = children else { continue; };
            for child in [left, right] {
                if child >= n_nodes {
                    return Err(TreeError::ChildOutOfRange {
                        index: position, child, n_nodes,
                    });
                }
                if child <= position {
                    return Err(TreeError::ChildNotAfterParent {
                        index: position, child,
                    });
                }
            }
        }
        Ok(())
    }


    /// Returns the node array, including unreachable nodes.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes[..]
    }


    /// Returns the node at position `index`.
    #[inline]
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }


    /// Returns the class labels known to the model.
    #[inline]
    pub fn target_names(&self) -> &[f64] {
        &self.target_names[..]
    }


    /// Returns the length of the node array.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.target_names.len()
    }


    /// Returns the position of `label` in `self.target_names()`.
    #[inline]
    pub fn class_index(&self, label: f64) -> Option<usize> {
        self.target_names.iter().position(|&name| name == label)
    }


    /// Returns `true` if the node at `index` is a leaf.
    #[inline]
    pub fn is_leaf(&self, index: usize) -> bool {
        self.nodes[index].is_leaf()
    }


    /// Returns the child indices of the node at `index`.
    #[inline]
    pub fn children(&self, index: usize) -> Option<(usize, usize)> {
        self.nodes[index].children()
    }


    /// Returns the indices of the leaves reachable from `subtree_root`,
    /// left subtree first.
    pub fn leaves(&self, subtree_root: usize) -> Vec<usize> {
        let mut leaves = Vec::new();
        let mut stack = vec![subtree_root];
        while let Some(index) = stack.pop() {
            match self.nodes[index].children() {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                },
                None => { leaves.push(index); },
            }
        }
        leaves
    }


    /// Returns the number of leaves reachable from `subtree_root`.
    #[inline]
    pub fn leaf_count(&self, subtree_root: usize) -> usize {
        self.leaves(subtree_root).len()
    }


    /// Returns the number of nodes strictly below `subtree_root`.
    pub fn descendant_count(&self, subtree_root: usize) -> usize {
        let mut count = 0;
        let mut stack = vec![subtree_root];
        while let Some(index) = stack.pop() {
            if let Some((left, right)) = self.nodes[index].children() {
                count += 2;
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }


    /// Returns the set of nodes reachable from the root.
    pub fn reachable(&self) -> FixedBitSet {
        let mut live = FixedBitSet::with_capacity(self.nodes.len());
        let mut stack = vec![0_usize];
        while let Some(index) = stack.pop() {
            live.insert(index);
            if let Some((left, right)) = self.nodes[index].children() {
                stack.push(left);
                stack.push(right);
            }
        }
        live
    }


    /// Returns the reachable internal nodes in ascending index order.
    pub fn internal_nodes(&self) -> Vec<usize> {
        self.reachable()
            .ones()
            .filter(|&i| !self.nodes[i].is_leaf())
            .collect()
    }


    /// Returns one past the largest feature index
    /// a reachable node splits on, `0` for a single leaf.
    /// A sample needs at least this many features.
    pub fn n_features(&self) -> usize {
        self.internal_nodes()
            .into_iter()
            .filter_map(|i| self.nodes[i].feature_index)
            .map(|feature| feature + 1)
            .max()
            .unwrap_or(0)
    }


    /// Returns the number of nodes reachable from the root.
    #[inline]
    pub fn n_live_nodes(&self) -> usize {
        self.reachable().count_ones(..)
    }


    /// Returns the number of leaves reachable from the root.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.leaf_count(0)
    }


    /// Returns the length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(0_usize, 0_usize)];
        while let Some((index, d)) = stack.pop() {
            depth = depth.max(d);
            if let Some((left, right)) = self.nodes[index].children() {
                stack.push((left, d + 1));
                stack.push((right, d + 1));
            }
        }
        depth
    }


    /// Returns the index of the leaf that `observation` ends in.
    #[inline]
    pub fn leaf_of(&self, observation: &[f64]) -> usize {
        let mut index = 0;
        while !self.nodes[index].is_leaf() {
            index = self.nodes[index].next(observation);
        }
        index
    }


    /// Turns the node at `index` into a leaf predicting `label`.
    ///
    /// The node keeps its `node_index` and auxiliary index.
    /// Its former descendants stay in the array, unreachable.
    /// Copy the node beforehand and pass it to
    /// [`BinaryTree::restore_node`] to undo the change.
    #[inline]
    pub fn prune_node(&mut self, index: usize, label: f64) {
        let leaf = self.nodes[index].to_leaf(label);
        self.nodes[index] = leaf;
    }


    /// Puts `node` back at position `index`.
    #[inline]
    pub fn restore_node(&mut self, index: usize, node: Node) {
        debug_assert_eq!(node.node_index, index);
        self.nodes[index] = node;
    }


    /// Write the reachable part of the tree to a Graphviz dot file.
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        for index in self.reachable().ones() {
            let node = &self.nodes[index];
            let line = match (node.feature_index, node.children()) {
                (Some(feat), Some((left, right))) => {
                    format!(
                        "\tnode_{index} [ label = \"x[{feat}] <= {thr:.2} ?\" ];\n\
                         \tnode_{index} -- node_{left} [ label = \"Yes\" ];\n\
                         \tnode_{index} -- node_{right} [ label = \"No\" ];\n",
                        thr = node.value,
                    )
                },
                _ => {
                    format!(
                        "\tnode_{index} [ label = \"{label}\", shape = box ];\n",
                        label = node.value,
                    )
                },
            };
            f.write_all(line.as_bytes())?;
        }

        f.write_all(b"}")?;
        Ok(())
    }
}


impl Classifier for BinaryTree {
    #[inline]
    fn predict(&self, observation: &[f64]) -> f64 {
        self.nodes[self.leaf_of(observation)].value
    }
}


fn raw_index(index: usize, value: i64) -> Result<Option<usize>, TreeError> {
    if value == NIL {
        Ok(None)
    } else {
        usize::try_from(value)
            .map(Some)
            .map_err(|_| TreeError::RawIndex { index, value })
    }
}
