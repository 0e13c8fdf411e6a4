use polars::prelude::*;
use rayon::prelude::*;


/// Errors raised while building a [`Sample`].
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// The number of targets differs from the number of observations.
    #[error("got {n_target} targets for {n_sample} observations")]
    TargetLength {
        /// Number of observations.
        n_sample: usize,
        /// Number of targets.
        n_target: usize,
    },

    /// An observation has a different number of features
    /// than the first one.
    #[error("row {row} has {got} features, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of features of the first row.
        expected: usize,
        /// Number of features of the offending row.
        got: usize,
    },

    /// A column of the data frame contains a null.
    #[error("column `{column}` contains a missing value")]
    MissingValue {
        /// Name of the column.
        column: String,
    },

    /// The data frame could not be converted.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}


/// Struct `Sample` holds a dense, row-major feature matrix
/// and a parallel vector of target labels.
///
/// The pruners replay the training sample through the tree
/// to count populations, and predict the prune sample
/// to score candidate trees.
/// Neither modifies it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    feature_names: Vec<String>,
    observations: Vec<f64>,
    target: Vec<f64>,
    n_sample: usize,
    n_feature: usize,
}


impl Sample {
    /// Construct a sample from its rows and target labels.
    /// Features are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn new(rows: Vec<Vec<f64>>, target: Vec<f64>)
        -> Result<Self, SampleError>
    {
        let n_sample = rows.len();
        if target.len() != n_sample {
            let n_target = target.len();
            return Err(SampleError::TargetLength { n_sample, n_target });
        }

        let n_feature = rows.first().map_or(0, |row| row.len());
        let mut observations = Vec::with_capacity(n_sample * n_feature);
        for (row, xs) in rows.into_iter().enumerate() {
            if xs.len() != n_feature {
                return Err(SampleError::RaggedRow {
                    row, expected: n_feature, got: xs.len(),
                });
            }
            observations.extend(xs);
        }

        let feature_names = (1..=n_feature)
            .map(|i| format!("Feat. [{i}]"))
            .collect();

        let sample = Self {
            feature_names, observations, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// Every column is cast to `f64`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> Result<Self, SampleError>
    {
        let (n_sample, n_feature) = data.shape();

        let target = column_values(&target)?;
        if target.len() != n_sample {
            let n_target = target.len();
            return Err(SampleError::TargetLength { n_sample, n_target });
        }

        let columns = data.get_columns()
            .par_iter()
            .map(column_values)
            .collect::<Result<Vec<_>, _>>()?;

        let mut observations = Vec::with_capacity(n_sample * n_feature);
        for row in 0..n_sample {
            observations.extend(columns.iter().map(|column| column[row]));
        }

        let feature_names = data.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        let sample = Self {
            feature_names, observations, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns `true` if `self` holds no observation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }


    /// Returns the features of the `idx`-th observation.
    #[inline]
    pub fn row(&self, idx: usize) -> &[f64] {
        let start = idx * self.n_feature;
        &self.observations[start..start + self.n_feature]
    }


    /// Returns an iterator over the observations.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_sample).map(|idx| self.row(idx))
    }


    /// Returns a slice of type `f64`.
    #[inline]
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the `idx`-th instance `(x, y)`.
    #[inline]
    pub fn at(&self, idx: usize) -> (&[f64], f64) {
        (self.row(idx), self.target[idx])
    }


    /// Returns the feature names.
    #[inline]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names[..]
    }


    /// Returns the distinct target labels in order of first appearance.
    /// Tree inducers use this to fill `BinaryTree::target_names`.
    pub fn distinct_targets(&self) -> Vec<f64> {
        let mut labels: Vec<f64> = Vec::new();
        for &y in &self.target {
            if !labels.contains(&y) {
                labels.push(y);
            }
        }
        labels
    }
}


fn column_values(series: &Series) -> Result<Vec<f64>, SampleError> {
    let column = series.name().to_string();
    let values = series.cast(&DataType::Float64)?;
    values.f64()?
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or(SampleError::MissingValue { column })
}
