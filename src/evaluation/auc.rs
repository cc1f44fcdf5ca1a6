//! Area under the ROC curve via the rank-sum (Mann–Whitney) identity.
//!
//! With tied ranks `r` of the scores, `P` positives and `N` negatives,
//!
//! ```text
//! AUC = (Σ_{i: t_i = 1} r_i − P(P + 1)/2) / (P · N)
//! ```
//!
//! which equals the probability that a random positive outscores a random
//! negative, counting ties as one half.
use crate::evaluation::{
    errors::{EvalError, EvalResult},
    ranking::tied_rank,
};
use ndarray::ArrayView1;

/// AUC of `scores` against binary `labels`.
///
/// # Errors
/// - [`EvalError::EmptyInput`] when there are no scores.
/// - [`EvalError::LengthMismatch`] when `labels.len() != scores.len()`.
/// - [`EvalError::InvalidLabel`] for a label other than 0 or 1.
/// - [`EvalError::NonFiniteScore`] for a NaN/±inf score.
/// - [`EvalError::DegenerateLabels`] when only one class is present.
pub fn auc(labels: ArrayView1<f64>, scores: ArrayView1<f64>) -> EvalResult<f64> {
    if scores.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    if labels.len() != scores.len() {
        return Err(EvalError::LengthMismatch { labels: labels.len(), scores: scores.len() });
    }
    if let Some((index, &value)) =
        labels.iter().enumerate().find(|(_, t)| **t != 0.0 && **t != 1.0)
    {
        return Err(EvalError::InvalidLabel { index, value });
    }

    let positives = labels.iter().filter(|&&t| t == 1.0).count();
    let negatives = labels.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(EvalError::DegenerateLabels { positives, negatives });
    }

    let ranks = tied_rank(scores)?;
    let positive_rank_sum: f64 =
        ranks.iter().zip(labels.iter()).filter(|&(_, &t)| t == 1.0).map(|(r, _)| r).sum();
    let p = positives as f64;
    let n = negatives as f64;
    Ok((positive_rank_sum - p * (p + 1.0) / 2.0) / (p * n))
}
