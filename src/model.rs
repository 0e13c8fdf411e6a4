//! Defines [`TreeModel`], the container a pruner operates on,
//! and [`TreeInducer`], the interface of the external algorithm
//! that grows the tree.
use crate::{BinaryTree, Sample, PruneError};


/// A trait that defines the tree induction algorithm.
/// Growing a tree is not part of this crate;
/// implement this trait to plug an inducer into [`TreeModel::learn`].
pub trait TreeInducer {
    /// Grows a tree that fits `sample`.
    /// The returned tree must list every label of `sample`
    /// in its `target_names`.
    fn induce(&self, sample: &Sample) -> BinaryTree;
}


/// A trained decision tree together with the samples
/// the pruners need.
///
/// The training sample is replayed to count node populations.
/// The prune sample is held out to score candidate trees.
/// The test sample is only read by the research logger.
///
/// # Example
/// ```no_run
/// use miniprune::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = BinaryTree::from_json(&std::fs::read_to_string("tree.json")?)?;
/// let train = Sample::new(vec![vec![0.2], vec![0.8]], vec![0.0, 1.0])?;
///
/// let mut model = TreeModel::new()
///     .tree(tree)
///     .train_sample(train);
/// MinimumErrorPruner::new().prune(&mut model)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeModel {
    tree: Option<BinaryTree>,
    train: Option<Sample>,
    prune: Option<Sample>,
    test: Option<Sample>,
}


impl TreeModel {
    /// Construct an empty model.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the trained tree.
    #[inline]
    pub fn tree(mut self, tree: BinaryTree) -> Self {
        self.tree = Some(tree);
        self
    }


    /// Set the training sample.
    #[inline]
    pub fn train_sample(mut self, train: Sample) -> Self {
        self.train = Some(train);
        self
    }


    /// Set the prune sample.
    /// It should be disjoint from the training sample.
    #[inline]
    pub fn prune_sample(mut self, prune: Sample) -> Self {
        self.prune = Some(prune);
        self
    }


    /// Set the test sample.
    #[inline]
    pub fn test_sample(mut self, test: Sample) -> Self {
        self.test = Some(test);
        self
    }


    /// Grow the tree with `inducer` on the training sample,
    /// replacing any tree held so far.
    pub fn learn<I>(&mut self, inducer: &I) -> Result<(), PruneError>
        where I: TreeInducer + ?Sized
    {
        let train = self.train.as_ref()
            .ok_or_else(|| PruneError::NoTrainingSet {
                pruner: "Tree induction".to_string(),
            })?;
        self.tree = Some(inducer.induce(train));
        Ok(())
    }


    /// Returns the trained tree, if any.
    #[inline]
    pub fn trained_tree(&self) -> Option<&BinaryTree> {
        self.tree.as_ref()
    }


    /// Returns the training sample, if any.
    #[inline]
    pub fn training_set(&self) -> Option<&Sample> {
        self.train.as_ref()
    }


    /// Returns the prune sample, if any.
    #[inline]
    pub fn prune_set(&self) -> Option<&Sample> {
        self.prune.as_ref()
    }


    /// Returns the test sample, if any.
    #[inline]
    pub fn test_set(&self) -> Option<&Sample> {
        self.test.as_ref()
    }


    /// Consumes `self` and returns the tree.
    #[inline]
    pub fn into_tree(self) -> Option<BinaryTree> {
        self.tree
    }


    /// Borrow the tree mutably and the samples immutably at once.
    #[inline]
    pub(crate) fn parts_mut(&mut self)
        -> (Option<&mut BinaryTree>, Option<&Sample>, Option<&Sample>)
    {
        (self.tree.as_mut(), self.train.as_ref(), self.prune.as_ref())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    // Always grows a stump on the first feature.
    struct StumpInducer;

    impl TreeInducer for StumpInducer {
        fn induce(&self, sample: &Sample) -> BinaryTree {
            let nodes = vec![
                Node::branch(0, 0, 0.5, 1, 2),
                Node::leaf(1, 0.0),
                Node::leaf(2, 1.0),
            ];
            BinaryTree::new(nodes, sample.distinct_targets()).unwrap()
        }
    }

    #[test]
    fn learn_needs_a_training_sample() {
        let mut model = TreeModel::new();
        assert!(matches!(
            model.learn(&StumpInducer),
            Err(PruneError::NoTrainingSet { .. })
        ));
        assert!(model.trained_tree().is_none());

        let train = Sample::new(vec![vec![0.2], vec![0.8]], vec![0.0, 1.0])
            .unwrap();
        let mut model = TreeModel::new().train_sample(train);
        model.learn(&StumpInducer).unwrap();

        let tree = model.trained_tree().unwrap();
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.target_names(), &[0.0, 1.0]);
    }
}
