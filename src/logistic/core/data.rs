//! Data containers for logistic regression.
//!
//! Purpose
//! -------
//! Provide small, validated containers for design matrices and binary labels.
//! Validation happens once at construction so the objective, the optimizer
//! and the evaluator can assume clean inputs in their inner loops.
//!
//! Key behaviors
//! -------------
//! - [`Dataset`] pairs an `N × D` feature matrix with `N` labels in `{0, 1}`.
//! - [`FeatureMatrix`] is the unlabeled counterpart used for scoring a test
//!   set.
//! - Both can be cut out of a raw numeric table (e.g. a parsed CSV) by column
//!   position via `from_table`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `N ≥ 1`, `D ≥ 1`, every feature finite. The one exception is the
//!   training side of a `splits = 1` fold split, which has `N = 0`.
//! - Labels are exactly `0.0` or `1.0`, one per row.
//!
//! Conventions
//! -----------
//! - Rows are records, columns are features; indexing is 0-based.
//! - Record order is significant: fold splitting and prediction files follow
//!   it.
use crate::logistic::{
    core::validation::{validate_features, validate_labels},
    errors::{LogRegError, LogRegResult},
};
use ndarray::{Array1, Array2, ArrayView2, Axis, s};

/// `Dataset` — validated design matrix plus binary labels.
///
/// Fields
/// ------
/// - `features`: `Array2<f64>`, shape `(N, D)`, all finite.
/// - `labels`: `Array1<f64>`, length `N`, values in `{0, 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Feature matrix, one record per row.
    pub features: Array2<f64>,
    /// Binary targets aligned with `features` rows.
    pub labels: Array1<f64>,
}

impl Dataset {
    /// Construct a validated [`Dataset`].
    ///
    /// Errors
    /// ------
    /// - `LogRegError::EmptyDataset` / `LogRegError::EmptyFeatures` for a
    ///   matrix without rows / columns.
    /// - `LogRegError::NonFiniteFeature` for the first NaN/±inf feature.
    /// - `LogRegError::LabelLengthMismatch` when the label count differs from
    ///   the row count.
    /// - `LogRegError::InvalidLabel` for the first label outside `{0, 1}`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_logreg::logistic::Dataset;
    /// let data = Dataset::new(array![[1.0, 2.0], [3.0, 4.0]], array![0.0, 1.0]).unwrap();
    /// assert_eq!(data.len(), 2);
    /// assert_eq!(data.dim(), 2);
    /// ```
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> LogRegResult<Self> {
        validate_features(features.view())?;
        validate_labels(labels.view(), features.nrows())?;
        Ok(Dataset { features, labels })
    }

    /// Cut a dataset out of a raw table: labels from column `label_col`,
    /// features from the trailing `n_features` columns.
    ///
    /// Errors
    /// ------
    /// - `LogRegError::ColumnOutOfRange` when `label_col` or the feature
    ///   block does not fit in the table.
    /// - Anything [`Dataset::new`] rejects.
    pub fn from_table(
        table: ArrayView2<f64>, label_col: usize, n_features: usize,
    ) -> LogRegResult<Self> {
        let ncols = table.ncols();
        if label_col >= ncols {
            return Err(LogRegError::ColumnOutOfRange { column: label_col, ncols });
        }
        let features = trailing_columns(table, n_features)?;
        let labels = table.column(label_col).to_owned();
        Dataset::new(features, labels)
    }

    /// Number of records `N`.
    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    /// `true` only for the training side of a single-fold split, which holds
    /// every record out.
    pub fn is_empty(&self) -> bool {
        self.features.nrows() == 0
    }

    /// Feature dimension `D`.
    pub fn dim(&self) -> usize {
        self.features.ncols()
    }

    /// Rows at `indices`, in that order, as a new dataset.
    ///
    /// Indices are produced internally (fold splitting) and are in range.
    pub(crate) fn select_rows(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }
}

/// `FeatureMatrix` — validated, unlabeled design matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub features: Array2<f64>,
}

impl FeatureMatrix {
    /// Construct a validated [`FeatureMatrix`] (non-empty, all finite).
    pub fn new(features: Array2<f64>) -> LogRegResult<Self> {
        validate_features(features.view())?;
        Ok(FeatureMatrix { features })
    }

    /// Take the trailing `n_features` columns of a raw table.
    pub fn from_table(table: ArrayView2<f64>, n_features: usize) -> LogRegResult<Self> {
        FeatureMatrix::new(trailing_columns(table, n_features)?)
    }

    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.features.nrows() == 0
    }

    pub fn dim(&self) -> usize {
        self.features.ncols()
    }
}

// ---- Helper Methods ----

fn trailing_columns(table: ArrayView2<f64>, n_features: usize) -> LogRegResult<Array2<f64>> {
    let ncols = table.ncols();
    if n_features == 0 {
        return Err(LogRegError::EmptyFeatures);
    }
    if n_features > ncols {
        return Err(LogRegError::ColumnOutOfRange { column: n_features, ncols });
    }
    Ok(table.slice(s![.., ncols - n_features..]).to_owned())
}
