//! Minimum Error Pruning,
//! the Niblett-Bratko estimate compared node by node.
use crate::{
    BinaryTree,
    TreeModel,
    PopulationMatrix,
    LeafAccounting,
};
use crate::population::first_argmax;
use super::{
    Pruner,
    PruneError,
    checkout,
    print_prune,
    print_summary,
};


/// How the error of a node kept as a subtree is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackedUpEstimate {
    /// Sum the population rows of the leaves under the node
    /// and apply the Laplace estimate to the sum,
    /// with the node's own row total as the number of observations.
    #[default]
    Aggregate,

    /// Average the static estimates of the leaves under the node,
    /// weighted by the number of observations each leaf receives.
    /// Falls back to the static estimate of the node
    /// when the leaves receive nothing,
    /// so pair it with [`LeafAccounting::Include`].
    Weighted,
}


/// Minimum Error Pruning.
///
/// For a node `t` with `n_t` training observations,
/// `n_tc` of them in its majority class,
/// and `k` classes in the tree, the static error is
///
/// ```text
/// E(t) = (n_t - n_tc + k - 1) / (n_t + k)
/// ```
///
/// The node becomes a leaf if `E(t)` does not exceed
/// the backed-up error of the subtree below it
/// (see [`BackedUpEstimate`]).
/// Nodes are visited from the last index to the root,
/// and the populations are counted once, before the first prune.
///
/// No prune sample is needed.
///
/// # Example
/// ```no_run
/// use miniprune::prelude::*;
///
/// # fn run(mut model: TreeModel) -> Result<(), PruneError> {
/// let pruner = MinimumErrorPruner::new()
///     .backed_up_estimate(BackedUpEstimate::Weighted)
///     .leaf_accounting(LeafAccounting::Include);
/// pruner.prune(&mut model)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinimumErrorPruner {
    accounting: LeafAccounting,
    estimate: BackedUpEstimate,
    verbose: bool,
}


impl MinimumErrorPruner {
    /// Construct a new instance of [`MinimumErrorPruner`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the leaf accounting convention of the population count.
    /// Default is [`LeafAccounting::Skip`].
    #[inline]
    pub fn leaf_accounting(mut self, accounting: LeafAccounting) -> Self {
        self.accounting = accounting;
        self
    }


    /// Set the backed-up estimate.
    /// Default is [`BackedUpEstimate::Aggregate`].
    #[inline]
    pub fn backed_up_estimate(mut self, estimate: BackedUpEstimate) -> Self {
        self.estimate = estimate;
        self
    }


    /// Set the verbose parameter.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    fn backed_up_error(
        &self,
        tree: &BinaryTree,
        populations: &PopulationMatrix,
        index: usize,
    ) -> f64
    {
        let k = tree.n_classes();
        let leaves = tree.leaves(index);
        match self.estimate {
            BackedUpEstimate::Aggregate => {
                let n_t = populations.row_sum(index);
                let counts = populations.aggregate(leaves);
                let n_tc = counts[first_argmax(&counts)];
                laplace_error(n_t, n_tc, k)
            },
            BackedUpEstimate::Weighted => {
                let total = leaves.iter()
                    .map(|&leaf| populations.row_sum(leaf))
                    .sum::<usize>();
                if total == 0 {
                    return static_error(populations, index, k);
                }

                leaves.into_iter()
                    .map(|leaf| {
                        let weight = populations.row_sum(leaf) as f64
                            / total as f64;
                        weight * static_error(populations, leaf, k)
                    })
                    .sum::<f64>()
            },
        }
    }
}


/// The Laplace-corrected error of a node
/// with `n_t` observations, `n_tc` of them in the predicted class.
#[inline]
pub(crate) fn laplace_error(n_t: usize, n_tc: usize, k: usize) -> f64 {
    (n_t - n_tc + k - 1) as f64 / (n_t + k) as f64
}


#[inline]
fn static_error(populations: &PopulationMatrix, index: usize, k: usize)
    -> f64
{
    let n_t = populations.row_sum(index);
    let n_tc = populations.row(index)[populations.most_frequent_class(index)];
    laplace_error(n_t, n_tc, k)
}


impl Pruner for MinimumErrorPruner {
    fn name(&self) -> &str {
        "Minimum Error Pruning"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Backed-up estimate", format!("{:?}", self.estimate)),
            ("Leaf accounting", format!("{:?}", self.accounting)),
        ]);
        Some(info)
    }


    fn prune(&self, model: &mut TreeModel) -> Result<(), PruneError> {
        let name = self.name();
        let (tree, train, _) = checkout(model, name)?;

        let populations = PopulationMatrix::with_accounting(
            tree, train, self.accounting
        )?;
        let k = tree.n_classes();
        let leaves_before = tree.n_leaves();
        let reachable = tree.reachable();

        for index in (0..tree.n_nodes()).rev() {
            if tree.is_leaf(index) || !reachable.contains(index) {
                continue;
            }

            let pruned = static_error(&populations, index, k);
            let kept = self.backed_up_error(tree, &populations, index);
            if pruned > kept { continue; }

            let label = populations.majority_label(tree, index);
            tree.prune_node(index, label);
            if self.verbose {
                print_prune(index, label, kept, pruned);
            }
        }

        if self.verbose {
            print_summary(name, leaves_before, tree);
        }
        Ok(())
    }
}
