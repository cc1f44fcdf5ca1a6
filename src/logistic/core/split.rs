//! Contiguous k-fold splitting.
//!
//! Purpose
//! -------
//! Hold out one contiguous block of a dataset for evaluation and train on the
//! rest, deterministically and without shuffling.
//!
//! Key behaviors
//! -------------
//! - Block size is `floor(N / splits)`; block `i` covers records
//!   `[i·b, i·b + b)`.
//! - The held-out set is block `test_split`; the training set is every other
//!   block, concatenated in original order.
//! - The `N mod splits` remainder records past the last block belong to no
//!   block and are dropped from both sides, so
//!   `len(train) + len(test) == splits · floor(N / splits)`.
use crate::logistic::{
    core::data::Dataset,
    errors::{LogRegError, LogRegResult},
};

/// Fold configuration: `splits` blocks, block `test_split` held out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSpec {
    splits: usize,
    test_split: usize,
}

impl SplitSpec {
    /// Validate `splits ≥ 1` and `test_split ∈ [0, splits)`.
    ///
    /// The `splits ≤ N` condition depends on the data and is checked by
    /// [`SplitSpec::split`].
    ///
    /// # Errors
    /// - [`LogRegError::InvalidSplitCount`] when `splits == 0`.
    /// - [`LogRegError::TestSplitOutOfRange`] when `test_split >= splits`.
    pub fn new(splits: usize, test_split: usize) -> LogRegResult<Self> {
        if splits == 0 {
            return Err(LogRegError::InvalidSplitCount { splits, len: 0 });
        }
        if test_split >= splits {
            return Err(LogRegError::TestSplitOutOfRange { test_split, splits });
        }
        Ok(SplitSpec { splits, test_split })
    }

    pub fn splits(&self) -> usize {
        self.splits
    }

    pub fn test_split(&self) -> usize {
        self.test_split
    }

    /// Row ranges `(held_out, blocks_end)` for a dataset of `n` records:
    /// the held-out block and the end of the last full block.
    ///
    /// # Errors
    /// - [`LogRegError::InvalidSplitCount`] when `splits > n`.
    pub fn bounds(&self, n: usize) -> LogRegResult<(std::ops::Range<usize>, usize)> {
        if self.splits > n {
            return Err(LogRegError::InvalidSplitCount { splits: self.splits, len: n });
        }
        let block = n / self.splits;
        let start = self.test_split * block;
        Ok((start..start + block, self.splits * block))
    }

    /// Split `data` into `(train, test)`.
    ///
    /// # Errors
    /// - [`LogRegError::InvalidSplitCount`] when `splits > data.len()`.
    ///
    /// # Examples
    /// ```rust
    /// # use ndarray::{Array1, Array2};
    /// # use rust_logreg::logistic::{Dataset, SplitSpec};
    /// let x = Array2::from_shape_fn((10, 1), |(i, _)| i as f64);
    /// let t = Array1::from_shape_fn(10, |i| (i % 2) as f64);
    /// let data = Dataset::new(x, t).unwrap();
    /// let (train, test) = SplitSpec::new(5, 1).unwrap().split(&data).unwrap();
    /// assert_eq!(test.features.column(0).to_vec(), vec![2.0, 3.0]);
    /// assert_eq!(train.len(), 8);
    /// ```
    pub fn split(&self, data: &Dataset) -> LogRegResult<(Dataset, Dataset)> {
        let (held_out, blocks_end) = self.bounds(data.len())?;
        let train_idx: Vec<usize> =
            (0..held_out.start).chain(held_out.end..blocks_end).collect();
        let test_idx: Vec<usize> = held_out.collect();
        Ok((data.select_rows(&train_idx), data.select_rows(&test_idx)))
    }
}

/// Convenience wrapper: `SplitSpec::new(splits, test_split)?.split(data)`.
pub fn split(splits: usize, test_split: usize, data: &Dataset) -> LogRegResult<(Dataset, Dataset)> {
    SplitSpec::new(splits, test_split)?.split(data)
}
