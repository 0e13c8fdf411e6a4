//! Bridges a [`Classifier`] and a [`Metric`].
use crate::{Classifier, Metric, Sample};


/// Predicts every row of `sample` with `classifier`
/// and scores the predictions with `metric`.
///
/// The pruners call this on the tree they are mutating,
/// before and after each tentative prune.
#[inline]
pub fn evaluate<C, M>(classifier: &C, sample: &Sample, metric: &M) -> f64
    where C: Classifier + Sync,
          M: Metric + ?Sized,
{
    let predictions = classifier.predict_all(sample);
    metric.error(sample.target(), &predictions[..])
}
