//! Logistic-regression validation helpers — reusable checks for features,
//! labels, and weight vectors.
//!
//! Purpose
//! -------
//! Centralize the small checks shared by [`Dataset`](super::data::Dataset),
//! [`FeatureMatrix`](super::data::FeatureMatrix), the MAP objective and
//! [`LogisticModel`](crate::logistic::models::LogisticModel), so every entry
//! point fails fast with the same structured [`LogRegError`].
//!
//! Conventions
//! -----------
//! - Each helper reports the **first** offending element (row-major order for
//!   matrices).
//! - No I/O and no logging.
use crate::logistic::errors::{LogRegError, LogRegResult};
use ndarray::{ArrayView1, ArrayView2};

/// Validate a feature matrix: at least one row and one column, all finite.
///
/// # Errors
/// - [`LogRegError::EmptyDataset`] when there are no rows.
/// - [`LogRegError::EmptyFeatures`] when there are no columns.
/// - [`LogRegError::NonFiniteFeature`] for the first NaN/±inf entry.
pub fn validate_features(features: ArrayView2<f64>) -> LogRegResult<()> {
    if features.nrows() == 0 {
        return Err(LogRegError::EmptyDataset);
    }
    if features.ncols() == 0 {
        return Err(LogRegError::EmptyFeatures);
    }
    for ((row, col), &value) in features.indexed_iter() {
        if !value.is_finite() {
            return Err(LogRegError::NonFiniteFeature { row, col, value });
        }
    }
    Ok(())
}

/// Validate labels against the number of rows; every label must be 0 or 1.
///
/// # Errors
/// - [`LogRegError::LabelLengthMismatch`] when `labels.len() != rows`.
/// - [`LogRegError::InvalidLabel`] for the first label outside `{0, 1}`.
pub fn validate_labels(labels: ArrayView1<f64>, rows: usize) -> LogRegResult<()> {
    if labels.len() != rows {
        return Err(LogRegError::LabelLengthMismatch { rows, labels: labels.len() });
    }
    match labels.iter().enumerate().find(|(_, t)| **t != 0.0 && **t != 1.0) {
        Some((index, &value)) => Err(LogRegError::InvalidLabel { index, value }),
        None => Ok(()),
    }
}

/// Validate a weight vector for a model with `dim` features.
///
/// # Errors
/// - [`LogRegError::WeightLengthMismatch`] when `weights.len() != dim`.
/// - [`LogRegError::NonFiniteWeight`] for the first NaN/±inf weight.
pub fn validate_weights(weights: ArrayView1<f64>, dim: usize) -> LogRegResult<()> {
    if weights.len() != dim {
        return Err(LogRegError::WeightLengthMismatch { expected: dim, actual: weights.len() });
    }
    match weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
        Some((index, &value)) => Err(LogRegError::NonFiniteWeight { index, value }),
        None => Ok(()),
    }
}
