use crate::{TreeModel, Pruner, Metric, ZeroOneLoss};
use super::PruneLogger;


/// `PruneLoggerBuilder` is a struct to construct [`PruneLogger`].
/// You need to specify the followings:
///
/// - Model (a trained tree with its samples),
/// - Pruners (at least one), and
/// - Metric (optional, misclassification rate by default).
///
/// # Example
/// ```no_run
/// use miniprune::prelude::*;
/// use miniprune::research::PruneLoggerBuilder;
///
/// # fn run(model: TreeModel) -> std::io::Result<()> {
/// let mut logger = PruneLoggerBuilder::new()
///     .model(&model)
///     .pruner(ReducedErrorPruner::new())
///     .pruner(MinimumErrorPruner::new())
///     .pruner(ErrorComplexityPruner::new())
///     .build();
///
/// let trees = logger.run("pruning.csv")?;
/// assert_eq!(trees.len(), 3);
/// # Ok(())
/// # }
/// ```
pub struct PruneLoggerBuilder<'a> {
    model: Option<&'a TreeModel>,
    pruners: Vec<Box<dyn Pruner + 'a>>,
    metric: Box<dyn Metric + Sync + 'a>,
}


impl<'a> PruneLoggerBuilder<'a> {
    /// Construct a new instance of `PruneLoggerBuilder`.
    pub fn new() -> Self {
        Self {
            model: None,
            pruners: Vec::new(),
            metric: Box::new(ZeroOneLoss::new()),
        }
    }


    /// Set the model to prune.
    /// Every pruner runs on its own copy of it.
    pub fn model(mut self, model: &'a TreeModel) -> Self {
        self.model = Some(model);
        self
    }


    /// Append a pruning algorithm.
    pub fn pruner<P>(mut self, pruner: P) -> Self
        where P: Pruner + 'a
    {
        self.pruners.push(Box::new(pruner));
        self
    }


    /// Set the metric that scores the trees.
    pub fn metric<M>(mut self, metric: M) -> Self
        where M: Metric + Sync + 'a
    {
        self.metric = Box::new(metric);
        self
    }


    /// Build [`PruneLogger`] from the given components.
    pub fn build(self) -> PruneLogger<'a> {
        let model = self.model
            .expect("Model is not specified");
        assert!(!self.pruners.is_empty(), "No pruner is specified");

        PruneLogger {
            model,
            pruners: self.pruners,
            metric: self.metric,
        }
    }
}


impl Default for PruneLoggerBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
