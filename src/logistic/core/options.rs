//! Training configuration for logistic regression.
//!
//! Purpose
//! -------
//! Bundle the optimizer configuration ([`MLEOptions`]) with the Gaussian prior
//! variance ([`RegularizationStrength`]) into a single validated
//! [`TrainOptions`] record. All checks run at construction, before any
//! optimizer iteration.
//!
//! Conventions
//! -----------
//! - The prior is `w ~ N(0, σ² I)` with `σ² = RegularizationStrength`; larger
//!   values mean weaker regularization.
use crate::{
    logistic::errors::{LogRegError, LogRegResult},
    optimization::{
        errors::OptResult,
        loglik_optimizer::{LineSearcher, MLEOptions, Strategy, Tolerances},
    },
};

/// Prior variance `σ² > 0` of the isotropic Gaussian on the weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularizationStrength(f64);

impl RegularizationStrength {
    /// # Errors
    /// - [`LogRegError::InvalidRegularization`] when `sigma2` is non-finite or ≤ 0.
    pub fn new(sigma2: f64) -> LogRegResult<Self> {
        if !sigma2.is_finite() {
            return Err(LogRegError::InvalidRegularization {
                value: sigma2,
                reason: "Prior variance must be finite.",
            });
        }
        if sigma2 <= 0.0 {
            return Err(LogRegError::InvalidRegularization {
                value: sigma2,
                reason: "Prior variance is a divisor and must be strictly positive.",
            });
        }
        Ok(RegularizationStrength(sigma2))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for RegularizationStrength {
    fn default() -> Self {
        RegularizationStrength(10.0)
    }
}

/// Training options: optimizer configuration plus prior variance.
///
/// Default: L-BFGS (More–Thuente) per [`MLEOptions::default`], `σ² = 10`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainOptions {
    pub mle_opts: MLEOptions,
    pub regularization: RegularizationStrength,
}

impl TrainOptions {
    pub fn new(mle_opts: MLEOptions, regularization: RegularizationStrength) -> Self {
        TrainOptions { mle_opts, regularization }
    }

    /// Fixed-step gradient descent: exactly `max_iter` steps of size `eta`.
    ///
    /// # Errors
    /// - `OptError::InvalidMaxIter` / `OptError::InvalidStepSize` from the
    ///   optimizer configuration.
    /// - `OptError::InvalidRegularization` when `sigma2` is not positive.
    pub fn gradient_descent(max_iter: usize, eta: f64, sigma2: f64) -> OptResult<Self> {
        let regularization = RegularizationStrength::new(sigma2)?;
        Ok(TrainOptions::new(MLEOptions::gradient_descent(max_iter, eta)?, regularization))
    }

    /// L-BFGS with More–Thuente line search, stopping when `‖∇c‖ < tol_grad`
    /// or after `max_iter` iterations.
    ///
    /// # Errors
    /// - `OptError::InvalidMaxIter` / `OptError::InvalidTolGrad` from the
    ///   optimizer configuration.
    /// - `OptError::InvalidRegularization` when `sigma2` is not positive.
    pub fn quasi_newton(max_iter: usize, tol_grad: f64, sigma2: f64) -> OptResult<Self> {
        let regularization = RegularizationStrength::new(sigma2)?;
        let tols = Tolerances::new(Some(tol_grad), None, Some(max_iter))?;
        let strategy =
            Strategy::QuasiNewton { line_searcher: LineSearcher::MoreThuente, lbfgs_mem: None };
        Ok(TrainOptions::new(MLEOptions::new(tols, strategy, false)?, regularization))
    }
}
