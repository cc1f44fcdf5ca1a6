//! Errors for the logistic-regression stack (dataset validation, fold
//! splitting, configuration checks, weight checks, and evaluation).
//!
//! This module defines the model error type, [`LogRegError`], used across the
//! data containers, the MAP objective, and [`LogisticModel`]. It implements
//! `Display`/`Error` and converts into
//! [`OptError`](crate::optimization::errors::OptError) so that failures raised
//! inside objective evaluation surface from the optimizer unchanged.
//!
//! ## Conventions
//! - **Indices are 0-based**; `row`/`col` refer to the feature matrix.
//! - Labels must be exactly `0.0` or `1.0`.
//! - Configuration errors (split, regularization) are raised by constructors
//!   before any optimizer iteration runs.
//!
//! [`LogisticModel`]: crate::logistic::models::LogisticModel
use crate::evaluation::errors::EvalError;

/// Result alias for logistic-regression operations that may produce
/// [`LogRegError`].
pub type LogRegResult<T> = Result<T, LogRegError>;

/// Unified error type for logistic regression.
#[derive(Debug, Clone, PartialEq)]
pub enum LogRegError {
    // ---- Input/data validation ----
    /// Dataset or feature matrix has no rows.
    EmptyDataset,

    /// Feature matrix has no columns.
    EmptyFeatures,

    /// Number of labels differs from the number of feature rows.
    LabelLengthMismatch { rows: usize, labels: usize },

    /// A feature value is NaN/±inf.
    NonFiniteFeature { row: usize, col: usize, value: f64 },

    /// A label is not 0 or 1.
    InvalidLabel { index: usize, value: f64 },

    /// Requested column lies outside the source table.
    ColumnOutOfRange { column: usize, ncols: usize },

    /// Feature matrix width differs from the model dimension.
    FeatureDimMismatch { expected: usize, actual: usize },

    // ---- Configuration ----
    /// `splits` must be ≥ 1 and ≤ the number of records.
    InvalidSplitCount { splits: usize, len: usize },

    /// `test_split` must lie in `[0, splits)`.
    TestSplitOutOfRange { test_split: usize, splits: usize },

    /// Regularization strength must be finite and > 0.
    InvalidRegularization { value: f64, reason: &'static str },

    // ---- Weights ----
    /// Weight vector length differs from the feature dimension.
    WeightLengthMismatch { expected: usize, actual: usize },

    /// A weight is NaN/±inf.
    NonFiniteWeight { index: usize, value: f64 },

    /// Model hasn't been fitted yet.
    ModelNotFitted,

    // ---- Evaluation ----
    /// AUC or ranking failed on the supplied predictions.
    Evaluation(EvalError),
}

impl std::error::Error for LogRegError {}

impl std::fmt::Display for LogRegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            LogRegError::EmptyDataset => write!(f, "Dataset is empty."),
            LogRegError::EmptyFeatures => write!(f, "Feature matrix has no columns."),
            LogRegError::LabelLengthMismatch { rows, labels } => {
                write!(f, "Feature matrix has {rows} rows but {labels} labels were given.")
            }
            LogRegError::NonFiniteFeature { row, col, value } => {
                write!(f, "Feature at row {row}, column {col} is non-finite: {value}")
            }
            LogRegError::InvalidLabel { index, value } => {
                write!(f, "Label at index {index} must be 0 or 1; got: {value}")
            }
            LogRegError::ColumnOutOfRange { column, ncols } => {
                write!(f, "Column {column} is out of range for a table with {ncols} columns.")
            }
            LogRegError::FeatureDimMismatch { expected, actual } => {
                write!(f, "Feature dimension mismatch: expected {expected}, got {actual}.")
            }
            // ---- Configuration ----
            LogRegError::InvalidSplitCount { splits, len } => {
                write!(
                    f,
                    "Split count must satisfy 1 <= splits <= records; got splits = {splits}, records = {len}."
                )
            }
            LogRegError::TestSplitOutOfRange { test_split, splits } => {
                write!(f, "Test split {test_split} is out of range [0, {splits}).")
            }
            LogRegError::InvalidRegularization { value, reason } => {
                write!(f, "Regularization strength must be finite and > 0; got: {value}. {reason}")
            }
            // ---- Weights ----
            LogRegError::WeightLengthMismatch { expected, actual } => {
                write!(f, "Weight vector length mismatch: expected {expected}, got {actual}.")
            }
            LogRegError::NonFiniteWeight { index, value } => {
                write!(f, "Weight at index {index} is non-finite: {value}")
            }
            LogRegError::ModelNotFitted => write!(f, "Model has not been fitted yet."),
            // ---- Evaluation ----
            LogRegError::Evaluation(err) => write!(f, "Evaluation failed: {err}"),
        }
    }
}

impl From<EvalError> for LogRegError {
    fn from(err: EvalError) -> Self {
        LogRegError::Evaluation(err)
    }
}
