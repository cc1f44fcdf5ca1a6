//! Tie-aware ranking.
//!
//! [`tied_rank`] assigns 1-based ranks in ascending order, giving every member
//! of a block of equal values the mean of the positions the block occupies
//! (MATLAB `tiedrank` semantics). It sorts once and then makes a single pass
//! over tie blocks, so the cost is O(n log n).
use crate::evaluation::errors::{EvalError, EvalResult};
use ndarray::{Array1, ArrayView1};

/// Mean ranks of `values`, in input order.
///
/// # Errors
/// - [`EvalError::NonFiniteScore`] if any value is NaN/±inf (no total order).
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use rust_logreg::evaluation::tied_rank;
/// let ranks = tied_rank(array![10.0, 20.0, 20.0, 30.0].view()).unwrap();
/// assert_eq!(ranks, array![1.0, 2.5, 2.5, 4.0]);
/// ```
pub fn tied_rank(values: ArrayView1<f64>) -> EvalResult<Array1<f64>> {
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EvalError::NonFiniteScore { index, value });
    }

    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = Array1::<f64>::zeros(n);
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start+1 ..= end, averaged.
        let mean_rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = mean_rank;
        }
        start = end;
    }
    Ok(ranks)
}
