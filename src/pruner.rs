//! The files in `pruner/` directory define
//! the [`Pruner`] trait and the post-pruning algorithms.
use colored::Colorize;

use crate::{BinaryTree, Sample, TreeModel};
use crate::constants::{WIDTH, PREC_WIDTH};


/// Defines Reduced Error Pruning.
pub mod reduced_error;
/// Defines Minimum Error Pruning.
pub mod minimum_error;
/// Defines Cost Based Pruning.
pub mod cost_based;
/// Defines Error Complexity Pruning.
pub mod error_complexity;


pub use reduced_error::ReducedErrorPruner;
pub use minimum_error::{
    MinimumErrorPruner,
    BackedUpEstimate,
};
pub use cost_based::CostBasedPruner;
pub use error_complexity::ErrorComplexityPruner;


/// Errors that stop a pruning run.
/// Every variant is raised before the tree is modified.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PruneError {
    /// The model holds no trained tree.
    #[error(
        "the model has no trained tree, \
         call `TreeModel::learn` or `TreeModel::tree` first"
    )]
    NoModel,

    /// The model holds no training sample.
    #[error(
        "{pruner} requires a training sample, \
         call `TreeModel::train_sample` first"
    )]
    NoTrainingSet {
        /// Name of the algorithm that needs the sample.
        pruner: String,
    },

    /// The model holds no prune sample, or an empty one,
    /// but the algorithm scores candidates on it.
    #[error(
        "{pruner} requires a non-empty prune sample, \
         call `TreeModel::prune_sample` first"
    )]
    NoPruneSet {
        /// Name of the algorithm that needs the sample.
        pruner: String,
    },

    /// The cost table does not cover a label of the tree.
    #[error(
        "the cost table has no entry for class {label}, \
         add one with `CostTable::insert`"
    )]
    MissingCost {
        /// The uncovered class label.
        label: f64,
    },

    /// A sample holds a label the tree does not know.
    #[error("label {label} is not one of the tree's target names")]
    UnknownLabel {
        /// The unknown class label.
        label: f64,
    },

    /// A sample has fewer features than the tree splits on.
    #[error("the tree splits on {needed} features, but the sample has {got}")]
    FeatureCount {
        /// One past the largest feature index the tree splits on.
        needed: usize,
        /// Number of features of the sample.
        got: usize,
    },
}


/// The trait [`Pruner`] defines the common contract of
/// the post-pruning algorithms.
///
/// A pruner takes a [`TreeModel`] with a trained tree
/// and shrinks the tree in place.
/// Missing prerequisites are reported before any node changes.
///
/// # Required Methods
/// - [`Pruner::name`]
/// - [`Pruner::prune`]
///
/// # Provided Methods
/// - [`Pruner::info`]
pub trait Pruner {
    /// Returns the name of the pruning algorithm.
    fn name(&self) -> &str;


    /// Returns the parameters of the pruning algorithm.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Prunes the tree held by `model`.
    fn prune(&self, model: &mut TreeModel) -> Result<(), PruneError>;
}


/// Returns the tree and the training sample of `model`,
/// or the error naming the first missing one.
pub(crate) fn checkout<'a>(model: &'a mut TreeModel, pruner: &str)
    -> Result<(&'a mut BinaryTree, &'a Sample, Option<&'a Sample>), PruneError>
{
    let (tree, train, prune) = model.parts_mut();
    let tree = tree.ok_or(PruneError::NoModel)?;
    let train = train.ok_or_else(|| PruneError::NoTrainingSet {
        pruner: pruner.to_string(),
    })?;
    check_features(tree, train)?;
    Ok((tree, train, prune))
}


/// Unwraps the prune sample returned by [`checkout`].
/// An empty prune sample scores every tree alike, so it is rejected.
pub(crate) fn require_prune_set<'a>(
    tree: &BinaryTree,
    prune: Option<&'a Sample>,
    pruner: &str,
) -> Result<&'a Sample, PruneError>
{
    let prune = prune.filter(|sample| !sample.is_empty())
        .ok_or_else(|| PruneError::NoPruneSet {
            pruner: pruner.to_string(),
        })?;
    check_features(tree, prune)?;
    Ok(prune)
}


/// Fails if `sample` is too narrow to be routed through `tree`.
#[inline]
pub(crate) fn check_features(tree: &BinaryTree, sample: &Sample)
    -> Result<(), PruneError>
{
    let needed = tree.n_features();
    let got = sample.shape().1;
    if got < needed {
        return Err(PruneError::FeatureCount { needed, got });
    }
    Ok(())
}


/// Prints a committed prune.
pub(crate) fn print_prune(index: usize, label: f64, before: f64, after: f64) {
    println!(
        "{} {}\t{}\t{}\t{}",
        "[PRUNE]".bold().magenta(),
        format!("node {:>WIDTH$}", index).red(),
        format!("-> {:>WIDTH$}", label).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", before).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", after).yellow(),
    );
}


/// Prints the size of the tree after a pruning run.
pub(crate) fn print_summary(name: &str, leaves_before: usize, tree: &BinaryTree) {
    println!(
        "{} {}\t{}\t{}",
        "[FIN]".bold().bright_green(),
        name.bold(),
        format!("leaves {:>WIDTH$} -> {:>WIDTH$}", leaves_before, tree.n_leaves())
            .cyan(),
        format!("depth {:>WIDTH$}", tree.depth()).cyan(),
    );
}
