//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! This wraps the model in an `ArgMinAdapter` (which *minimizes* `-ℓ(θ)`),
//! builds the solver named by `opts.strategy` (fixed-step descent, or L-BFGS
//! with Hager–Zhang / More–Thuente line search) and delegates the run to
//! `run_solver`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::{build_fixed_step, build_optimizer_hager_zhang, build_optimizer_more_thuente},
        progress::ProgressReport,
        run::{Retain, run_solver},
        traits::{LineSearcher, LogLikelihood, MLEOptions, Strategy},
    },
};

/// Maximize a log-likelihood `ℓ(θ)` with the strategy in `opts`.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` that exposes a *minimization*
///   problem `c(θ) = -ℓ(θ)` to `argmin`.
/// - `Strategy::GradientDescent` runs exactly `max_iter` fixed steps and
///   returns the last iterate; `reporter` sees iterations 0, 10, 20, ….
/// - `Strategy::QuasiNewton` runs L-BFGS until the gradient/cost tolerances
///   or the iteration cap stop it and returns the best iterate; `reporter`
///   sees every outer iteration.
///
/// # Parameters
/// - `f`: Your model implementing [`LogLikelihood`].
/// - `theta0`: Initial parameter vector.
/// - `data`: Model data passed through to `value`/`grad`.
/// - `opts`: Optimizer options (tolerances, strategy, verbosity).
/// - `reporter`: Sink for `(iteration, cost)` progress records.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_*`.
/// - Propagates runtime errors from `run_solver` (e.g., line search failures).
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use rust_logreg::optimization::errors::OptResult;
/// use rust_logreg::optimization::loglik_optimizer::{
///     maximize, LogLikelihood, MLEOptions, SilentProgress,
/// };
///
/// struct MyLL;
/// impl LogLikelihood for MyLL {
///     type Data = ();
///     fn value(&self, theta: &ndarray::Array1<f64>, _: &()) -> OptResult<f64> {
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &ndarray::Array1<f64>, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let opts = MLEOptions::gradient_descent(200, 0.1)?;
/// let out = maximize(&MyLL, array![0.1, -0.2, 0.3], &(), &opts, Box::new(SilentProgress))?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), rust_logreg::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions, reporter: Box<dyn ProgressReport>,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    log::debug!("maximizing over {} parameters with {:?}", theta0.len(), opts.strategy);
    match opts.strategy {
        Strategy::GradientDescent { step_size } => {
            let solver = build_fixed_step(step_size);
            run_solver(theta0, opts, problem, solver, reporter, Retain::Last)
        }
        Strategy::QuasiNewton { line_searcher: LineSearcher::MoreThuente, lbfgs_mem } => {
            let solver = build_optimizer_more_thuente(opts, lbfgs_mem)?;
            run_solver(theta0, opts, problem, solver, reporter, Retain::Best)
        }
        Strategy::QuasiNewton { line_searcher: LineSearcher::HagerZhang, lbfgs_mem } => {
            let solver = build_optimizer_hager_zhang(opts, lbfgs_mem)?;
            run_solver(theta0, opts, problem, solver, reporter, Retain::Best)
        }
    }
}
