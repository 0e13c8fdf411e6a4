#![warn(missing_docs)]

//!
//! A crate that provides post-pruning algorithms
//! for binary decision trees.
//!
//! A decision tree grown until it fits the training sample
//! tends to overfit.
//! The algorithms in this crate take an already-trained tree
//! and shrink it in place by turning internal nodes into leaves.
//!
//! This crate includes two types of pruning algorithms.
//!
//! - Validation based pruning
//!     The algorithms of this type hold out a **prune sample**
//!     and keep a reduction only if it does not hurt the error on it.
//!     In this crate,
//!     [`ReducedErrorPruner`], [`CostBasedPruner`] and
//!     [`ErrorComplexityPruner`] correspond to this type.
//!
//!
//! - Estimate based pruning
//!     The algorithms of this type use the training sample only
//!     and compare error estimates of a node as a leaf
//!     and as a subtree.
//!     In this crate,
//!     [`MinimumErrorPruner`] corresponds to this type.
//!
//! # Example
//! ```no_run
//! use miniprune::prelude::*;
//!
//! // Root splits on feature `0` at `0.5`;
//! // the leaves predict `0.0` and `1.0`.
//! let nodes = vec![
//!     Node::branch(0, 0, 0.5, 1, 2),
//!     Node::leaf(1, 0.0),
//!     Node::leaf(2, 1.0),
//! ];
//! let tree = BinaryTree::new(nodes, vec![0.0, 1.0]).unwrap();
//! let train = Sample::new(vec![vec![0.2], vec![0.8]], vec![0.0, 1.0])
//!     .unwrap();
//! let prune = Sample::new(vec![vec![0.3], vec![0.7]], vec![0.0, 1.0])
//!     .unwrap();
//!
//! let mut model = TreeModel::new()
//!     .tree(tree)
//!     .train_sample(train)
//!     .prune_sample(prune);
//!
//! ReducedErrorPruner::new()
//!     .verbose(true)
//!     .prune(&mut model)
//!     .unwrap();
//! ```

pub mod constants;
pub mod tree;
pub mod sample;
pub mod population;
pub mod classifier;
pub mod metric;
pub mod evaluation;
pub mod model;
pub mod pruner;
pub mod research;

pub mod prelude;


pub use tree::{
    BinaryTree,
    Node,
    LeftRight,
    TreeError,
};

pub use sample::{
    Sample,
    SampleError,
};

pub use population::{
    PopulationMatrix,
    LeafAccounting,
};

pub use classifier::Classifier;

pub use metric::{
    Metric,
    ZeroOneLoss,
    CostBasedLoss,
    CostTable,
    ClassCost,
};

pub use evaluation::evaluate;

pub use model::{
    TreeModel,
    TreeInducer,
};

pub use pruner::{
    Pruner,
    PruneError,
    ReducedErrorPruner,
    MinimumErrorPruner,
    BackedUpEstimate,
    CostBasedPruner,
    ErrorComplexityPruner,
};

pub use research::{
    PruneLogger,
    PruneLoggerBuilder,
};
