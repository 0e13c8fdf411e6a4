//! Reduced Error Pruning.
use crate::{
    BinaryTree,
    Sample,
    TreeModel,
    Metric,
    ZeroOneLoss,
    PopulationMatrix,
    LeafAccounting,
    evaluate,
};
use super::{
    Pruner,
    PruneError,
    checkout,
    require_prune_set,
    print_prune,
    print_summary,
};


/// Reduced Error Pruning.
///
/// Visits the internal nodes from the last one in the node array
/// to the root, so that every subtree is settled before its parent.
/// Each node is turned into a leaf predicting the majority class
/// of its training population.
/// The change is kept unless the error on the prune sample
/// becomes strictly larger; equal error keeps the smaller tree.
/// An empty prune sample is rejected as [`PruneError::NoPruneSet`],
/// since it would score every tree alike.
///
/// The error is measured by the metric `M`,
/// the misclassification rate by default.
/// [`CostBasedPruner`](super::CostBasedPruner) runs the same traversal
/// with a class-weighted cost.
///
/// # Example
/// ```no_run
/// use miniprune::prelude::*;
///
/// # fn run(mut model: TreeModel) -> Result<(), PruneError> {
/// let pruner = ReducedErrorPruner::new()
///     .verbose(true);
/// pruner.prune(&mut model)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReducedErrorPruner<M = ZeroOneLoss> {
    metric: M,
    accounting: LeafAccounting,
    verbose: bool,
}


impl ReducedErrorPruner<ZeroOneLoss> {
    /// Construct a new instance of [`ReducedErrorPruner`]
    /// that scores trees by misclassification rate.
    #[inline]
    pub fn new() -> Self {
        Self::with_metric(ZeroOneLoss::new())
    }
}


impl Default for ReducedErrorPruner<ZeroOneLoss> {
    fn default() -> Self {
        Self::new()
    }
}


impl<M> ReducedErrorPruner<M>
    where M: Metric + Sync
{
    /// Construct a new instance of [`ReducedErrorPruner`]
    /// that scores trees by `metric`.
    #[inline]
    pub fn with_metric(metric: M) -> Self {
        Self {
            metric,
            accounting: LeafAccounting::default(),
            verbose: false,
        }
    }


    /// Set the leaf accounting convention of the population count.
    /// Default is [`LeafAccounting::Skip`].
    #[inline]
    pub fn leaf_accounting(mut self, accounting: LeafAccounting) -> Self {
        self.accounting = accounting;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, every committed prune is printed.
    /// Default is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the metric.
    #[inline]
    pub fn metric(&self) -> &M {
        &self.metric
    }


    /// The bottom-up tentative-prune / rollback traversal.
    pub(super) fn prune_tree(
        &self,
        name: &str,
        tree: &mut BinaryTree,
        train: &Sample,
        prune: &Sample,
    ) -> Result<(), PruneError>
    {
        let populations = PopulationMatrix::with_accounting(
            tree, train, self.accounting
        )?;
        let leaves_before = tree.n_leaves();
        let reachable = tree.reachable();

        // Error of the tree as it currently stands.
        let mut current = evaluate(tree, prune, &self.metric);
        for index in (0..tree.n_nodes()).rev() {
            if tree.is_leaf(index) || !reachable.contains(index) {
                continue;
            }

            let node = *tree.node(index);
            let label = populations.majority_label(tree, index);
            tree.prune_node(index, label);

            let error = evaluate(tree, prune, &self.metric);
            if error > current {
                tree.restore_node(index, node);
                continue;
            }

            if self.verbose {
                print_prune(index, label, current, error);
            }
            current = error;
        }

        if self.verbose {
            print_summary(name, leaves_before, tree);
        }
        Ok(())
    }
}


impl<M> Pruner for ReducedErrorPruner<M>
    where M: Metric + Sync
{
    fn name(&self) -> &str {
        "Reduced Error Pruning"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Metric", self.metric.name().to_string()),
            ("Leaf accounting", format!("{:?}", self.accounting)),
        ]);
        Some(info)
    }


    fn prune(&self, model: &mut TreeModel) -> Result<(), PruneError> {
        let name = self.name();
        let (tree, train, prune) = checkout(model, name)?;
        let prune = require_prune_set(tree, prune, name)?;
        self.prune_tree(name, tree, train, prune)
    }
}
