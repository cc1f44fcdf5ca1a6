//! Public API surface for log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait users implement for their model.
//! - [`MLEOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`Strategy`]: fixed-step gradient descent or L-BFGS.
//! - [`LineSearcher`]: choice of line search used by L-BFGS.
//! - [`OptimOutcome`] and [`StopReason`]: normalized result returned by the
//!   high-level `maximize` API.
//!
//! Convention: we *maximize* a user log-likelihood `ℓ(θ)` by minimizing the cost
//! `c(θ) = -ℓ(θ)`. If an analytic gradient is provided, it should be the gradient
//! of the log-likelihood (`∇ℓ(θ)`); the adapter flips the sign as needed.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Grad, Theta,
        progress::ProgressRecord,
        validation::{
            validate_theta_hat, validate_value, verify_step_size, verify_tol_cost,
            verify_tol_grad,
        },
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// User-implemented log-likelihood interface.
///
/// You maximize `ℓ(θ)`; internally we minimize the cost `c(θ) = -ℓ(θ)`.
/// If you provide an analytic gradient, return the gradient of the
/// log-likelihood `∇ℓ(θ)` (the adapter flips the sign to match the cost).
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `ℓ(θ)`.
///   - Errors: return a descriptive `OptError` for invalid inputs or model failures.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `grad(&Theta, &Data) -> OptResult<Grad>`: analytic gradient `∇ℓ(θ)`.
///   If not implemented, robust finite differences are used automatically.
pub trait LogLikelihood {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Variants:
/// - `MoreThuente`: More–Thuente line search.
/// - `HagerZhang`: Hager–Zhang line search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    /// Parse a line-search choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"MoreThuente"`
    /// - `"HagerZhang"`
    /// - Any case variant (e.g., `"morethuente"`, `"HAGERZHANG"`).
    ///
    /// Any other value returns `OptError::InvalidLineSearch` with a helpful message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Optimization strategy driving the cost `c(θ)` downhill.
///
/// - `GradientDescent { step_size }`: `θ ← θ − η ∇c(θ)` for exactly
///   `max_iter` iterations. Tolerances are ignored; there is no early stop.
/// - `QuasiNewton { line_searcher, lbfgs_mem }`: argmin L-BFGS with the given
///   line search and history size (`None` uses [`DEFAULT_LBFGS_MEM`]).
///   Stops on the gradient/cost tolerances or the iteration cap.
///
/// [`DEFAULT_LBFGS_MEM`]: crate::optimization::loglik_optimizer::DEFAULT_LBFGS_MEM
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    GradientDescent { step_size: f64 },
    QuasiNewton { line_searcher: LineSearcher, lbfgs_mem: Option<usize> },
}

impl Strategy {
    /// Report cadence in iterations: every 10th step for descent, every
    /// outer iteration for L-BFGS.
    pub fn report_every(&self) -> u64 {
        match self {
            Strategy::GradientDescent { .. } => 10,
            Strategy::QuasiNewton { .. } => 1,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::QuasiNewton { line_searcher: LineSearcher::MoreThuente, lbfgs_mem: None }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `strategy: Strategy` — fixed-step descent or L-BFGS (with its line search).
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Constructor:
/// - `new(tols, strategy, verbose) -> OptResult<Self>` — validates the
///   strategy-specific fields and their interplay with `tols`.
///
/// Default:
/// - `tols`: `tol_grad = 1e-6`, `tol_cost = None`, `max_iter = 300`
/// - `strategy`: L-BFGS with `MoreThuente` and the default memory
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub strategy: Strategy,
    pub verbose: bool,
}

impl MLEOptions {
    /// Create a new set of optimizer options.
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if an explicit L-BFGS memory is zero.
    /// - [`OptError::InvalidStepSize`] if the descent step is non-finite or ≤ 0.
    /// - [`OptError::MissingMaxIter`] if descent is requested without
    ///   `tols.max_iter`, since it has no other stopping rule.
    pub fn new(tols: Tolerances, strategy: Strategy, verbose: bool) -> OptResult<Self> {
        match strategy {
            Strategy::QuasiNewton { lbfgs_mem: Some(0), .. } => {
                return Err(OptError::InvalidLBFGSMem {
                    mem: 0,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
            Strategy::GradientDescent { step_size } => {
                verify_step_size(step_size)?;
                if tols.max_iter.is_none() {
                    return Err(OptError::MissingMaxIter);
                }
            }
            Strategy::QuasiNewton { .. } => {}
        }
        Ok(Self { tols, strategy, verbose })
    }

    /// Convenience constructor for fixed-step gradient descent.
    pub fn gradient_descent(max_iter: usize, step_size: f64) -> OptResult<Self> {
        let tols = Tolerances::new(None, None, Some(max_iter))?;
        Self::new(tols, Strategy::GradientDescent { step_size }, false)
    }

    /// Convenience constructor for L-BFGS with a gradient-norm tolerance.
    pub fn quasi_newton(
        max_iter: usize, tol_grad: f64, line_searcher: LineSearcher,
    ) -> OptResult<Self> {
        let tols = Tolerances::new(Some(tol_grad), None, Some(max_iter))?;
        Self::new(tols, Strategy::QuasiNewton { line_searcher, lbfgs_mem: None }, false)
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances { tol_grad: Some(1e-6), tol_cost: None, max_iter: Some(300) },
            strategy: Strategy::default(),
            verbose: false,
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_grad`: terminate when the gradient norm falls below this threshold.
/// - `tol_cost`: terminate when the change in cost falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Any field can be `None` but **at least one** of the three must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_grad`, `tol_cost`, or `max_iter` must be `Some`.
    /// - If provided, tolerances must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if all three are `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for non-finite or non-positive tolerances.
    /// - `OptError::InvalidMaxIter` if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Why a run stopped.
///
/// - `IterationLimit`: the `max_iter` cap was reached (the only way fixed-step
///   descent ends).
/// - `Converged`: the solver's own criterion fired (gradient norm or cost
///   change below tolerance).
/// - `NotTerminated`: the executor returned without a termination status.
/// - `Other(status)`: any other backend reason, kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    IterationLimit,
    Converged,
    NotTerminated,
    Other(String),
}

impl From<&TerminationStatus> for StopReason {
    fn from(status: &TerminationStatus) -> Self {
        match status {
            TerminationStatus::NotTerminated => StopReason::NotTerminated,
            TerminationStatus::Terminated(TerminationReason::MaxItersReached) => {
                StopReason::IterationLimit
            }
            TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
                StopReason::Converged
            }
            TerminationStatus::Terminated(other) => StopReason::Other(format!("{other:?}")),
        }
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: parameter vector returned by the strategy (best point for
///   L-BFGS, last iterate for gradient descent).
/// - `value`: **log-likelihood** value `ℓ(θ̂)` (not the cost).
/// - `converged`: `true` if the solver reported a terminating status other
///   than `NotTerminated`.
/// - `stop_reason`: structured termination reason.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
/// - Keys follow argmin’s counters, e.g., cost_count, gradient_count, etc.
/// - `grad_norm`: norm of the last available gradient, if present.
/// - `trace`: progress records emitted during the run, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub stop_reason: StopReason,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
    pub trace: Vec<ProgressRecord>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, stop_reason, status)`.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: &TerminationStatus,
        iterations: u64, fn_evals: FnEvalMap, grad: Option<Grad>, trace: Vec<ProgressRecord>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let stop_reason = StopReason::from(termination);
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            _ => (true, format!("{termination:?}")),
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self {
            theta_hat,
            value,
            converged,
            stop_reason,
            status,
            iterations,
            fn_evals,
            grad_norm,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation rules of `Tolerances::new` and `MLEOptions::new`.
    // - Case-insensitive parsing of `LineSearcher`.
    // - Mapping of argmin termination statuses into `StopReason`.
    //
    // They intentionally DO NOT cover:
    // - Running a solver; see `api` and the integration tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Reject configurations with no stopping rule at all.
    //
    // Given
    // -----
    // - `Tolerances::new(None, None, None)`.
    //
    // Expect
    // ------
    // - `OptError::NoTolerancesProvided`.
    fn tolerances_require_at_least_one_rule() {
        // Act
        let err = Tolerances::new(None, None, None).unwrap_err();

        // Assert
        assert_eq!(err, OptError::NoTolerancesProvided);
    }

    #[test]
    // Purpose
    // -------
    // Reject a zero iteration cap and non-positive tolerances.
    //
    // Given
    // -----
    // - `max_iter = 0`, then `tol_grad = -1.0`.
    //
    // Expect
    // ------
    // - `InvalidMaxIter` and `InvalidTolGrad` respectively.
    fn tolerances_reject_zero_iterations_and_negative_tolerance() {
        // Act
        let zero_iter = Tolerances::new(None, None, Some(0));
        let neg_tol = Tolerances::new(Some(-1.0), None, Some(10));

        // Assert
        assert!(matches!(zero_iter, Err(OptError::InvalidMaxIter { max_iter: 0, .. })));
        assert!(matches!(neg_tol, Err(OptError::InvalidTolGrad { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Descent must be bounded by an iteration cap and take a positive step.
    //
    // Given
    // -----
    // - Gradient-descent strategy with only a gradient tolerance.
    // - Gradient-descent strategy with `step_size = 0`.
    //
    // Expect
    // ------
    // - `MissingMaxIter` and `InvalidStepSize` respectively.
    fn gradient_descent_options_are_validated() {
        // Arrange
        let tol_only = Tolerances::new(Some(1e-3), None, None).unwrap();
        let capped = Tolerances::new(None, None, Some(10)).unwrap();

        // Act
        let missing = MLEOptions::new(
            tol_only,
            Strategy::GradientDescent { step_size: 0.1 },
            false,
        );
        let zero_step =
            MLEOptions::new(capped, Strategy::GradientDescent { step_size: 0.0 }, false);

        // Assert
        assert_eq!(missing.unwrap_err(), OptError::MissingMaxIter);
        assert!(matches!(zero_step, Err(OptError::InvalidStepSize { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Reject an explicit L-BFGS memory of zero.
    //
    // Given
    // -----
    // - Quasi-Newton strategy with `lbfgs_mem = Some(0)`.
    //
    // Expect
    // ------
    // - `InvalidLBFGSMem`.
    fn quasi_newton_rejects_zero_memory() {
        // Arrange
        let tols = Tolerances::new(Some(1e-6), None, Some(10)).unwrap();
        let strategy =
            Strategy::QuasiNewton { line_searcher: LineSearcher::HagerZhang, lbfgs_mem: Some(0) };

        // Act
        let result = MLEOptions::new(tols, strategy, false);

        // Assert
        assert!(matches!(result, Err(OptError::InvalidLBFGSMem { mem: 0, .. })));
    }

    #[test]
    // Purpose
    // -------
    // Parse line-search names case-insensitively and reject unknown ones.
    //
    // Given
    // -----
    // - "hagerzhang", "MORETHUENTE", and "backtracking".
    //
    // Expect
    // ------
    // - The first two parse; the third yields `InvalidLineSearch`.
    fn line_searcher_parses_case_insensitively() {
        // Act / Assert
        assert_eq!("hagerzhang".parse::<LineSearcher>().unwrap(), LineSearcher::HagerZhang);
        assert_eq!("MORETHUENTE".parse::<LineSearcher>().unwrap(), LineSearcher::MoreThuente);
        assert!(matches!(
            "backtracking".parse::<LineSearcher>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Map argmin termination statuses into stop reasons.
    //
    // Given
    // -----
    // - MaxItersReached, SolverConverged, and NotTerminated.
    //
    // Expect
    // ------
    // - `IterationLimit`, `Converged`, `NotTerminated`.
    fn stop_reason_maps_termination_status() {
        // Act / Assert
        assert_eq!(
            StopReason::from(&TerminationStatus::Terminated(TerminationReason::MaxItersReached)),
            StopReason::IterationLimit
        );
        assert_eq!(
            StopReason::from(&TerminationStatus::Terminated(TerminationReason::SolverConverged)),
            StopReason::Converged
        );
        assert_eq!(StopReason::from(&TerminationStatus::NotTerminated), StopReason::NotTerminated);
    }

    #[test]
    // Purpose
    // -------
    // `OptimOutcome::new` rejects non-finite estimates.
    //
    // Given
    // -----
    // - `theta_hat = [1, NaN]`.
    //
    // Expect
    // ------
    // - `OptError::InvalidThetaHat` at index 1.
    fn outcome_rejects_non_finite_theta_hat() {
        // Arrange
        let theta = array![1.0, f64::NAN];

        // Act
        let result = OptimOutcome::new(
            Some(theta),
            -1.0,
            &TerminationStatus::NotTerminated,
            0,
            FnEvalMap::new(),
            None,
            Vec::new(),
        );

        // Assert
        assert!(matches!(result, Err(OptError::InvalidThetaHat { index: 1, .. })));
    }
}
