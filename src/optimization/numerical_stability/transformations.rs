//! Numerical stability utilities.
//!
//! Provides safe implementations of the logistic transforms that are prone
//! to overflow/underflow in naïve form. The functions here follow guarded
//! strategies similar to those in major ML libraries (e.g. PyTorch,
//! TensorFlow), branching on the sign of the input so that `exp` is only
//! ever evaluated at non-positive arguments.
//!
//! # Provided items
//! - [`SATURATION_LOGIT`]: magnitude beyond which `σ(z)` rounds to exactly
//!   `0.0`/`1.0` complements in `f64`.
//! - [`safe_softplus(x)`]: stable version of `ln(1 + exp(x))`.
//! - [`log_sigmoid(z)`]: stable `ln σ(z)`, never `-∞` for finite `z`.
//! - [`safe_logistic(z)`]: `σ(z) = 1 / (1 + exp(-z))` without overflow.

/// Logit magnitude at which `σ(z)` is within one ulp of `1.0` in `f64`.
///
/// Beyond this point `1 - σ(z)` (or `σ(z)` for negative `z`) can no longer be
/// represented relative to `1.0`; probabilities are still finite but carry no
/// ranking information among themselves.
pub const SATURATION_LOGIT: f64 = 36.7;

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// - For `x > 0`, evaluates `x + ln1p(exp(-x))`, so `exp` never overflows.
/// - Otherwise, evaluates `ln1p(exp(x))`, which keeps full precision for
///   large negative `x`.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `softplus(x)` as `f64`.
pub fn safe_softplus(x: f64) -> f64 {
    if x > 0.0 { x + (-x).exp().ln_1p() } else { x.exp().ln_1p() }
}

/// Numerically stable log-sigmoid: `ln σ(z) = -softplus(-z)`.
///
/// Uses the branch-by-sign form
/// - `z ≥ 0`: `-ln(1 + exp(-z))`
/// - `z < 0`: `z - ln(1 + exp(z))`
///
/// so the result is finite for every finite `z` (≈ `z` for very negative
/// inputs, ≈ `0` for very positive ones).
pub fn log_sigmoid(z: f64) -> f64 {
    if z >= 0.0 { -(-z).exp().ln_1p() } else { z - z.exp().ln_1p() }
}

/// Numerically stable logistic sigmoid `σ(z) = 1 / (1 + exp(-z))`.
///
/// For negative `z` evaluates `exp(z) / (1 + exp(z))` to avoid computing
/// `exp(-z)` at a large positive argument.
pub fn safe_logistic(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
