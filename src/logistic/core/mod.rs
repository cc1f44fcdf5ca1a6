//! core — logistic-regression data, configuration, fold splitting, and the
//! MAP objective.
//!
//! Purpose
//! -------
//! Collect the building blocks the model layer composes: validated
//! containers ([`Dataset`], [`FeatureMatrix`]), deterministic fold splitting
//! ([`SplitSpec`]), training configuration ([`RegularizationStrength`],
//! [`TrainOptions`]), and the objective functions plus their
//! [`MapObjective`] adapter for the optimizer.
//!
//! Conventions
//! -----------
//! - Rows are records; indexing is 0-based.
//! - Objective functions take `ndarray` views and allocate only their return
//!   values.

pub mod data;
pub mod objective;
pub mod options;
pub mod split;
pub mod validation;

pub use self::data::{Dataset, FeatureMatrix};
pub use self::objective::{
    MapObjective, gradient, log_prior, logistic_losses, neg_log_likelihood,
    predict_probabilities, predicted_log_probability, prior_gradient,
};
pub use self::options::{RegularizationStrength, TrainOptions};
pub use self::split::{SplitSpec, split};
