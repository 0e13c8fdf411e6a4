//! Cost Based Pruning.
use crate::{
    TreeModel,
    CostTable,
    CostBasedLoss,
    LeafAccounting,
};
use super::{
    Pruner,
    PruneError,
    ReducedErrorPruner,
    checkout,
    require_prune_set,
};


/// Cost Based Pruning.
///
/// The traversal of [`ReducedErrorPruner`]
/// scored by [`CostBasedLoss`] instead of the misclassification rate.
/// The cost table must hold an entry for every label
/// in the tree's `target_names` and in the prune sample;
/// this is checked before the tree is touched.
///
/// # Example
/// ```no_run
/// use miniprune::prelude::*;
///
/// # fn run(mut model: TreeModel) -> Result<(), PruneError> {
/// // Missing a positive is five times worse than a false alarm.
/// let costs = CostTable::new()
///     .insert(0.0, 1.0, 1.0)
///     .insert(1.0, 1.0, 5.0);
/// CostBasedPruner::new(costs)
///     .prune(&mut model)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CostBasedPruner {
    inner: ReducedErrorPruner<CostBasedLoss>,
}


impl CostBasedPruner {
    /// Construct a new instance of [`CostBasedPruner`].
    #[inline]
    pub fn new(costs: CostTable) -> Self {
        let inner = ReducedErrorPruner::with_metric(CostBasedLoss::new(costs));
        Self { inner }
    }


    /// Set the leaf accounting convention of the population count.
    /// Default is [`LeafAccounting::Skip`].
    #[inline]
    pub fn leaf_accounting(mut self, accounting: LeafAccounting) -> Self {
        self.inner = self.inner.leaf_accounting(accounting);
        self
    }


    /// Set the verbose parameter.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.inner = self.inner.verbose(verbose);
        self
    }


    /// Returns the cost table.
    #[inline]
    pub fn costs(&self) -> &CostTable {
        self.inner.metric().costs()
    }
}


impl Pruner for CostBasedPruner {
    fn name(&self) -> &str {
        "Cost Based Pruning"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let mut info = self.inner.info()?;
        info.push(("# of costed classes", self.costs().len().to_string()));
        Some(info)
    }


    fn prune(&self, model: &mut TreeModel) -> Result<(), PruneError> {
        let name = self.name();
        let (tree, train, prune) = checkout(model, name)?;

        if let Some(label) = self.costs().first_missing(tree.target_names()) {
            return Err(PruneError::MissingCost { label });
        }

        let prune = require_prune_set(tree, prune, name)?;
        if let Some(label) = self.costs().first_missing(prune.target()) {
            return Err(PruneError::MissingCost { label });
        }
        self.inner.prune_tree(name, tree, train, prune)
    }
}
