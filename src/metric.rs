//! Defines the scoring side of the evaluation adapter.
//! A [`Metric`] turns the predictions of the current tree
//! on a sample into a single error value.
use serde::{Serialize, Deserialize};


/// This trait defines the error functions used to compare
/// a tree before and after a tentative prune.
pub trait Metric {
    /// The name of the metric.
    fn name(&self) -> &str;


    /// Error of `predictions` against `targets`.
    /// Both slices must have the same length.
    fn error(&self, targets: &[f64], predictions: &[f64]) -> f64;
}


/// The misclassification rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroOneLoss;


impl ZeroOneLoss {
    /// Construct a new instance of [`ZeroOneLoss`].
    #[inline]
    pub fn new() -> Self {
        Self
    }
}


impl Metric for ZeroOneLoss {
    fn name(&self) -> &str {
        "Zero-one loss"
    }


    fn error(&self, targets: &[f64], predictions: &[f64]) -> f64 {
        let n_items = targets.len();
        assert_eq!(n_items, predictions.len());
        if n_items == 0 { return 0f64; }

        let n_miss = targets.iter()
            .zip(predictions)
            .filter(|(y, p)| y != p)
            .count();
        n_miss as f64 / n_items as f64
    }
}


/// The cost of misclassifying a class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassCost {
    /// Cost charged when the class is predicted but wrong.
    pub false_positive: f64,
    /// Cost charged when the class is the truth but missed.
    pub false_negative: f64,
}


/// A table from class label to [`ClassCost`].
///
/// # Example
/// ```
/// use miniprune::CostTable;
///
/// let costs = CostTable::new()
///     .insert(0.0, 1.0, 5.0)
///     .insert(1.0, 2.0, 1.0);
/// assert_eq!(costs.get(1.0).unwrap().false_positive, 2.0);
/// assert!(costs.get(2.0).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostTable {
    entries: Vec<(f64, ClassCost)>,
}


impl CostTable {
    /// Construct an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the costs of `label`, replacing any previous entry.
    pub fn insert(
        mut self,
        label: f64,
        false_positive: f64,
        false_negative: f64,
    ) -> Self
    {
        let cost = ClassCost { false_positive, false_negative };
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => { entry.1 = cost; },
            None => { self.entries.push((label, cost)); },
        }
        self
    }


    /// Returns the costs of `label`.
    #[inline]
    pub fn get(&self, label: f64) -> Option<&ClassCost> {
        self.entries.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, cost)| cost)
    }


    /// Returns the first label in `labels` that has no entry.
    pub fn first_missing(&self, labels: &[f64]) -> Option<f64> {
        labels.iter()
            .copied()
            .find(|&label| self.get(label).is_none())
    }


    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    /// Returns `true` if the table has no entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}


impl FromIterator<(f64, (f64, f64))> for CostTable {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (f64, (f64, f64))>
    {
        iter.into_iter()
            .fold(Self::new(), |table, (label, (fp, fnc))| {
                table.insert(label, fp, fnc)
            })
    }
}


/// The class-weighted misclassification cost.
///
/// A misclassified row contributes
/// `false_positive(predicted) / 2 + false_negative(actual) / 2`,
/// and the sum is divided by the number of rows.
/// A label without an entry costs nothing;
/// [`CostBasedPruner`](crate::CostBasedPruner) rejects tables
/// that do not cover the tree's labels before it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBasedLoss {
    costs: CostTable,
}


impl CostBasedLoss {
    /// Construct a new instance of [`CostBasedLoss`].
    #[inline]
    pub fn new(costs: CostTable) -> Self {
        Self { costs }
    }


    /// Returns the cost table.
    #[inline]
    pub fn costs(&self) -> &CostTable {
        &self.costs
    }


    #[inline]
    fn cost_at_point(&self, target: f64, prediction: f64) -> f64 {
        if target == prediction { return 0f64; }

        let fp = self.costs.get(prediction)
            .map_or(0f64, |cost| cost.false_positive);
        let fnc = self.costs.get(target)
            .map_or(0f64, |cost| cost.false_negative);
        fp / 2f64 + fnc / 2f64
    }
}


impl Metric for CostBasedLoss {
    fn name(&self) -> &str {
        "Cost based loss"
    }


    fn error(&self, targets: &[f64], predictions: &[f64]) -> f64 {
        let n_items = targets.len();
        assert_eq!(n_items, predictions.len());
        if n_items == 0 { return 0f64; }

        targets.iter()
            .zip(predictions)
            .map(|(&y, &p)| self.cost_at_point(y, p))
            .sum::<f64>()
            / n_items as f64
    }
}
