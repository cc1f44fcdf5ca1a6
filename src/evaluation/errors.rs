//! Errors for ranking and AUC evaluation.
//!
//! [`EvalError`] covers malformed evaluation inputs (length mismatches,
//! non-finite scores, labels outside `{0, 1}`) and the degenerate
//! single-class case, where AUC is undefined. Evaluation errors abort only the
//! evaluation call; any model that produced the scores is left untouched.
pub type EvalResult<T> = Result<T, EvalError>;

/// Error type for evaluation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// No scores were supplied.
    EmptyInput,

    /// Labels and scores differ in length.
    LengthMismatch { labels: usize, scores: usize },

    /// A score is NaN/±inf and cannot be ranked.
    NonFiniteScore { index: usize, value: f64 },

    /// A label is not 0 or 1.
    InvalidLabel { index: usize, value: f64 },

    /// Evaluation set holds a single class; AUC is undefined.
    DegenerateLabels { positives: usize, negatives: usize },
}

impl std::error::Error for EvalError {}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::EmptyInput => write!(f, "No scores supplied for evaluation."),
            EvalError::LengthMismatch { labels, scores } => {
                write!(f, "Got {labels} labels but {scores} scores.")
            }
            EvalError::NonFiniteScore { index, value } => {
                write!(f, "Score at index {index} is non-finite: {value}")
            }
            EvalError::InvalidLabel { index, value } => {
                write!(f, "Label at index {index} must be 0 or 1; got: {value}")
            }
            EvalError::DegenerateLabels { positives, negatives } => {
                write!(
                    f,
                    "AUC needs both classes; got {positives} positive and {negatives} negative labels."
                )
            }
        }
    }
}
