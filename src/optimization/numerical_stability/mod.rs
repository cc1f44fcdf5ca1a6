//! numerical_stability — numerically robust logistic transforms.
//!
//! Purpose
//! -------
//! Collect the stable scalar transforms used by the logistic-regression
//! objective and its evaluator, so the rest of the crate can assume
//! well-conditioned `f64` arithmetic for arbitrarily large logits.
//!
//! Key behaviors
//! -------------
//! - Provide `log_sigmoid` via the branch-by-sign trick, so log-likelihood
//!   terms never overflow or underflow to `-∞`.
//! - Provide `safe_logistic` for probabilities and `safe_softplus` for the
//!   complementary loss term `ln(1 - σ(z)) = -softplus(z)`.
//! - Expose `SATURATION_LOGIT`, the logit magnitude past which predicted
//!   probabilities lose resolution in `f64`.
//!
//! Conventions
//! -----------
//! - Pure scalar helpers: no logging, no I/O, no global state; suitable for
//!   tight inner loops.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{SATURATION_LOGIT, log_sigmoid, safe_logistic, safe_softplus};

pub mod prelude {
    pub use super::transformations::{SATURATION_LOGIT, log_sigmoid, safe_logistic, safe_softplus};
}
