//! Defines the per-node class populations that every pruner consumes.
use rayon::prelude::*;

use crate::{BinaryTree, Sample};
use crate::pruner::{PruneError, check_features};


/// Decides whether the leaf an observation ends in
/// receives a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeafAccounting {
    /// Only the internal nodes on the path are counted.
    /// The rows of leaves stay zero.
    #[default]
    Skip,

    /// The terminal leaf is counted as well,
    /// so that every row sum equals the number of observations
    /// routed through that node.
    Include,
}


/// A dense `[n_nodes × n_classes]` matrix of counts.
/// Cell `[i, j]` is the number of training observations
/// whose path passes through node `i`
/// and whose label is `tree.target_names()[j]`.
///
/// The matrix is computed once per pruning run
/// against the tree as it is at that moment,
/// and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationMatrix {
    counts: Vec<usize>,
    n_nodes: usize,
    n_classes: usize,
}


impl PopulationMatrix {
    /// Replay `sample` through `tree` and count the populations
    /// with the default [`LeafAccounting::Skip`] convention.
    #[inline]
    pub fn new(tree: &BinaryTree, sample: &Sample)
        -> Result<Self, PruneError>
    {
        Self::with_accounting(tree, sample, LeafAccounting::Skip)
    }


    /// Replay `sample` through `tree` and count the populations.
    /// Fails if `sample` holds a label that `tree` does not know,
    /// or has fewer features than `tree` splits on.
    pub fn with_accounting(
        tree: &BinaryTree,
        sample: &Sample,
        accounting: LeafAccounting,
    ) -> Result<Self, PruneError>
    {
        check_features(tree, sample)?;

        let n_nodes = tree.n_nodes();
        let n_classes = tree.n_classes();
        let zeros = || vec![0_usize; n_nodes * n_classes];

        let counts = (0..sample.shape().0).into_par_iter()
            .try_fold(zeros, |mut counts, row| -> Result<_, PruneError> {
                let (x, y) = sample.at(row);
                let class = tree.class_index(y)
                    .ok_or(PruneError::UnknownLabel { label: y })?;

                let mut index = 0;
                while !tree.is_leaf(index) {
                    counts[index * n_classes + class] += 1;
                    index = tree.node(index).next(x);
                }
                if accounting == LeafAccounting::Include {
                    counts[index * n_classes + class] += 1;
                }
                Ok(counts)
            })
            .try_reduce(zeros, |mut acc, counts| {
                acc.iter_mut()
                    .zip(counts)
                    .for_each(|(a, c)| { *a += c; });
                Ok(acc)
            })?;

        Ok(Self { counts, n_nodes, n_classes })
    }


    /// Returns the pair `(n_nodes, n_classes)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_nodes, self.n_classes)
    }


    /// Returns the class counts of node `index`.
    #[inline]
    pub fn row(&self, index: usize) -> &[usize] {
        let start = index * self.n_classes;
        &self.counts[start..start + self.n_classes]
    }


    /// Returns the number of observations counted at node `index`.
    #[inline]
    pub fn row_sum(&self, index: usize) -> usize {
        self.row(index).iter().sum()
    }


    /// Returns the class index with the largest count at node `index`.
    /// Ties go to the class listed first in `target_names`.
    #[inline]
    pub fn most_frequent_class(&self, index: usize) -> usize {
        first_argmax(self.row(index))
    }


    /// Returns the label of the most frequent class at node `index`.
    #[inline]
    pub fn majority_label(&self, tree: &BinaryTree, index: usize) -> f64 {
        tree.target_names()[self.most_frequent_class(index)]
    }


    /// Returns the class-wise sum of the rows in `indices`.
    pub fn aggregate<I>(&self, indices: I) -> Vec<usize>
        where I: IntoIterator<Item = usize>
    {
        let mut total = vec![0_usize; self.n_classes];
        for index in indices {
            total.iter_mut()
                .zip(self.row(index))
                .for_each(|(t, &c)| { *t += c; });
        }
        total
    }
}


/// Index of the first maximum of `counts`.
/// Returns `0` for an empty slice.
#[inline]
pub(crate) fn first_argmax(counts: &[usize]) -> usize {
    counts.iter()
        .enumerate()
        .fold((0, 0), |(best, max), (j, &c)| {
            if c > max { (j, c) } else { (best, max) }
        })
        .0
}
