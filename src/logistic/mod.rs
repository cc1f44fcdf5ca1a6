//! logistic — MAP binary logistic regression: data, objective, model, errors.
//!
//! Purpose
//! -------
//! Fit a weight vector `w` to a design matrix and binary labels by maximizing
//! the Gaussian-regularized log-likelihood (log posterior), then score new
//! records with `σ(xᵀw)` and rank-based AUC.
//!
//! Key behaviors
//! -------------
//! - [`core`]: validated [`Dataset`] / [`FeatureMatrix`], contiguous fold
//!   splitting via [`SplitSpec`], configuration via [`TrainOptions`], and the
//!   objective functions (`neg_log_likelihood`, `gradient`, `log_prior`,
//!   `prior_gradient`, ...) wrapped as [`MapObjective`].
//! - [`models`]: [`LogisticModel`] with `fit`, `predict`, `evaluate`, and
//!   `cross_entropy`; the free function [`train`] returns just the weights.
//! - [`errors`]: [`LogRegError`] / [`LogRegResult`]; objective failures reach
//!   callers as `OptError` through the optimizer.
//!
//! Invariants & assumptions
//! ------------------------
//! - Labels are `0.0`/`1.0`; features are finite.
//! - The prior variance is strictly positive, checked when
//!   [`RegularizationStrength`] is built.
//! - Training starts from `w = 0` and is single-threaded and deterministic
//!   for a given dataset and configuration.
//!
//! Conventions
//! -----------
//! - Objective values reported during training are the penalized cross
//!   entropy `NLL(w) + ‖w‖²/(2σ²)` (the optimizer's cost).
//! - Library code logs through `log` only: progress at `info` (when the
//!   caller uses `LogProgress`), saturation at `warn`, fit summaries at
//!   `debug`.

pub mod core;
pub mod errors;
pub mod models;

pub use self::core::{
    Dataset, FeatureMatrix, MapObjective, RegularizationStrength, SplitSpec, TrainOptions, split,
};
pub use self::errors::{LogRegError, LogRegResult};
pub use self::models::{Evaluation, LogisticModel, train};

pub mod prelude {
    pub use super::{
        Dataset, Evaluation, FeatureMatrix, LogRegError, LogRegResult, LogisticModel,
        MapObjective, RegularizationStrength, SplitSpec, TrainOptions, split, train,
    };
}
