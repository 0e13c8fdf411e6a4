//! Defines the prediction side of the evaluation adapter.
use rayon::prelude::*;

use crate::Sample;


/// A trait that defines the behavior of a classifier.
/// You only need to implement `predict` method.
///
/// The pruners call [`Classifier::predict_all`] on the tree
/// they are mutating, so an implementation must read the live
/// state of the model rather than a cached copy.
pub trait Classifier {
    /// Predicts the label of a single observation.
    fn predict(&self, observation: &[f64]) -> f64;


    /// Predicts the labels of all rows of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<f64>
        where Self: Sync
    {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample.row(row)))
            .collect::<Vec<_>>()
    }
}
