//! Error Complexity Pruning, the weakest-link pruning of CART.
use rayon::prelude::*;
use colored::Colorize;

use crate::{
    BinaryTree,
    Sample,
    TreeModel,
    PopulationMatrix,
    LeafAccounting,
    ZeroOneLoss,
    evaluate,
};
use crate::constants::{DEFAULT_MIN_LEAVES, WIDTH, PREC_WIDTH};
use super::{
    Pruner,
    PruneError,
    checkout,
    require_prune_set,
    print_summary,
};


/// Error Complexity Pruning.
///
/// The error cost of a node is the fraction of the training sample
/// that reaches the node but is not in its majority class.
/// The error complexity of an internal node `t` is
///
/// ```text
/// (cost(t) - cost(left(t)) - cost(right(t))) / leaf_count(t)
/// ```
///
/// Starting from the full tree, the live internal node with
/// the smallest error complexity is pruned again and again
/// until the tree has at most `min_leaves` leaves.
/// Every intermediate tree is scored on the prune sample
/// and the one with the lowest misclassification rate is kept.
/// Ties go to the smaller tree.
///
/// # Example
/// ```no_run
/// use miniprune::prelude::*;
///
/// # fn run(mut model: TreeModel) -> Result<(), PruneError> {
/// let pruner = ErrorComplexityPruner::new()
///     .min_leaves(2)
///     .verbose(true);
/// pruner.prune(&mut model)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ErrorComplexityPruner {
    min_leaves: usize,
    accounting: LeafAccounting,
    verbose: bool,
}


impl Default for ErrorComplexityPruner {
    fn default() -> Self {
        Self {
            min_leaves: DEFAULT_MIN_LEAVES,
            accounting: LeafAccounting::default(),
            verbose: false,
        }
    }
}


impl ErrorComplexityPruner {
    /// Construct a new instance of [`ErrorComplexityPruner`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the number of leaves at which the pruning sequence stops.
    /// Default is `1`, that is, the sequence ends at the root.
    #[inline]
    pub fn min_leaves(mut self, min_leaves: usize) -> Self {
        self.min_leaves = min_leaves;
        self
    }


    /// Set the leaf accounting convention of the population count.
    /// Default is [`LeafAccounting::Skip`].
    #[inline]
    pub fn leaf_accounting(mut self, accounting: LeafAccounting) -> Self {
        self.accounting = accounting;
        self
    }


    /// Set the verbose parameter.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the nested sequence of trees
    /// the pruner chooses from, starting with the tree of `model`.
    /// The model is left as it is.
    pub fn pruning_sequence(&self, model: &TreeModel)
        -> Result<Vec<BinaryTree>, PruneError>
    {
        let name = self.name();
        let tree = model.trained_tree()
            .ok_or(PruneError::NoModel)?;
        let train = model.training_set()
            .ok_or_else(|| PruneError::NoTrainingSet {
                pruner: name.to_string(),
            })?;
        self.sequence(tree, train)
    }


    fn sequence(&self, tree: &BinaryTree, train: &Sample)
        -> Result<Vec<BinaryTree>, PruneError>
    {
        let populations = PopulationMatrix::with_accounting(
            tree, train, self.accounting
        )?;
        let n_sample = train.shape().0;

        let mut tree = tree.clone();
        let mut sequence = vec![tree.clone()];
        while tree.n_leaves() > self.min_leaves {
            // Strict `<` over ascending indices keeps the lowest index.
            let weakest = tree.internal_nodes()
                .into_iter()
                .map(|index| {
                    let ec = error_complexity(&tree, &populations, n_sample, index);
                    (index, ec)
                })
                .fold(None, |best: Option<(usize, f64)>, (index, ec)| {
                    match best {
                        Some((_, min)) if min <= ec => best,
                        _ => Some((index, ec)),
                    }
                });
            let Some((index, ec)) = weakest else { break; };

            if self.verbose {
                print_step(&tree, index, ec);
            }

            let label = populations.majority_label(&tree, index);
            tree.prune_node(index, label);
            sequence.push(tree.clone());
        }
        Ok(sequence)
    }
}


/// Misclassified share of the training sample at node `index`.
#[inline]
fn node_cost(populations: &PopulationMatrix, n_sample: usize, index: usize)
    -> f64
{
    if n_sample == 0 { return 0f64; }

    let row = populations.row(index);
    let max = row.iter().copied().max().unwrap_or(0);
    (populations.row_sum(index) - max) as f64 / n_sample as f64
}


fn error_complexity(
    tree: &BinaryTree,
    populations: &PopulationMatrix,
    n_sample: usize,
    index: usize,
) -> f64
{
    let (left, right) = tree.children(index)
        .expect("error complexity of a leaf node");
    let cost = node_cost(populations, n_sample, index);
    let subtree_cost = node_cost(populations, n_sample, left)
        + node_cost(populations, n_sample, right);
    (cost - subtree_cost) / tree.leaf_count(index) as f64
}


fn print_step(tree: &BinaryTree, index: usize, ec: f64) {
    println!(
        "{} {}\t{}\t{}\t{}",
        "[PRUNE]".bold().magenta(),
        format!("node {:>WIDTH$}", index).red(),
        format!("alpha {:>WIDTH$.PREC_WIDTH$}", ec).green(),
        format!("-{:>WIDTH$} leaves", tree.leaf_count(index) - 1).yellow(),
        format!("-{:>WIDTH$} nodes", tree.descendant_count(index)).yellow(),
    );
}


impl Pruner for ErrorComplexityPruner {
    fn name(&self) -> &str {
        "Error Complexity Pruning"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Min. leaves", self.min_leaves.to_string()),
            ("Leaf accounting", format!("{:?}", self.accounting)),
        ]);
        Some(info)
    }


    fn prune(&self, model: &mut TreeModel) -> Result<(), PruneError> {
        let name = self.name();
        let (tree, train, prune) = checkout(model, name)?;
        let prune = require_prune_set(tree, prune, name)?;

        let leaves_before = tree.n_leaves();
        let mut sequence = self.sequence(tree, train)?;

        let loss = ZeroOneLoss::new();
        let errors = sequence.par_iter()
            .map(|candidate| evaluate(candidate, prune, &loss))
            .collect::<Vec<_>>();

        // `<=` so that later, smaller trees win ties.
        let (best, error) = errors.into_iter()
            .enumerate()
            .fold((0, f64::MAX), |(best, min), (k, err)| {
                if err <= min { (k, err) } else { (best, min) }
            });

        *tree = sequence.swap_remove(best);
        if self.verbose {
            println!(
                "{} {}\t{}",
                "[BEST]".bold().bright_green(),
                format!("tree {:>WIDTH$} of {:>WIDTH$}", best, sequence.len() + 1)
                    .cyan(),
                format!("error {:>WIDTH$.PREC_WIDTH$}", error).cyan(),
            );
            print_summary(name, leaves_before, tree);
        }
        Ok(())
    }
}
