//! Execution helper that runs an `argmin` solver on a log-likelihood problem and
//! returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        LogLikelihood, MLEOptions, OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        progress::{ProgressObserver, ProgressReport},
        types::LoglikState,
    },
};
use argmin::core::{Executor, State, observers::ObserverMode};

/// Which iterate a run hands back as `theta_hat`.
///
/// - `Best`: lowest cost seen (L-BFGS).
/// - `Last`: final iterate (fixed-step descent, whose result is defined as
///   the point after exactly `max_iter` steps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retain {
    Best,
    Last,
}

/// Run an `argmin` optimization for a log-likelihood problem.
///
/// This is the shared runner used by every strategy. It wires up:
/// - the user model via [`ArgMinAdapter`],
/// - the chosen `Solver` (L-BFGS with Hager–Zhang/More–Thuente, or fixed-step
///   descent),
/// - initial parameter `theta0`,
/// - a [`ProgressObserver`] forwarding to `reporter` every
///   `opts.strategy.report_every()` iterations,
/// - optional observers (behind the `obs_slog` feature),
/// - optional `max_iters`,
///   then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Returns
/// An [`OptimOutcome`] containing the retained parameter, its log-likelihood
/// value ℓ(θ̂), termination status, iteration count, function-evaluation
/// counts, the last available gradient's norm, and the progress trace.
///
/// # Errors
/// - Propagates any `argmin` runtime error (observer failures, solver errors,
///   line-search failures, etc.) via the crate’s `From<argmin::core::Error>`
///   conversion.
/// - Propagates any validation errors encountered when constructing
///   [`OptimOutcome`].
pub fn run_solver<'a, F, S>(
    theta0: Theta, opts: &MLEOptions, problem: ArgMinAdapter<'a, F>, solver: S,
    reporter: Box<dyn ProgressReport>, retain: Retain,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: argmin::core::Solver<ArgMinAdapter<'a, F>, LoglikState> + Send + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let progress = ProgressObserver::new(reporter);
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    optimizer = optimizer
        .add_observer(progress.clone(), ObserverMode::Every(opts.strategy.report_every()));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    let (theta_hat, cost) = match retain {
        Retain::Best => (result.take_best_param(), result.get_best_cost()),
        Retain::Last => (result.take_param(), result.get_cost()),
    };
    log::debug!("optimizer finished after {iterations} iterations: {termination:?}");
    OptimOutcome::new(
        theta_hat,
        -cost,
        &termination,
        iterations,
        function_counts,
        grad,
        progress.take_trace(),
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: LogLikelihood,
{
    use argmin_math::ArgminL2Norm;

    let ll0 = -problem.cost_value(theta0)?;
    let g0n = problem.cost_gradient(theta0).ok().map(|g| g.l2_norm());

    log::info!(
        "init: ell(theta0) = {:.6}{}",
        ll0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
