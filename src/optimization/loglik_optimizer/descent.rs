//! loglik_optimizer::descent — fixed-step gradient descent as an argmin solver.
//!
//! Purpose
//! -------
//! Provide the baseline optimizer: `θ ← θ − η ∇c(θ)` with a constant step
//! `η`. Implementing it as an argmin [`Solver`] lets it share the executor,
//! the adapter, the observers, and the outcome plumbing with L-BFGS, so
//! callers choose between the two through [`Strategy`] only.
//!
//! Key behaviors
//! -------------
//! - Each iteration evaluates the gradient at the current iterate, takes one
//!   step, and evaluates the cost at the new iterate (used for progress
//!   reports and best-point tracking).
//! - The solver never terminates on its own; the executor's iteration cap is
//!   the only stopping rule, so a run performs exactly `max_iter` steps.
//!
//! [`Strategy`]: crate::optimization::loglik_optimizer::Strategy
use crate::optimization::{
    errors::OptError,
    loglik_optimizer::types::{Cost, Grad, LoglikState, Theta},
};
use argmin::core::{CostFunction, Error, Gradient, KV, Problem, Solver};

/// Fixed-step gradient descent on the cost `c(θ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepDescent {
    step_size: f64,
}

impl FixedStepDescent {
    /// Build a solver with step size `η`; validation happens in `MLEOptions::new`.
    pub fn new(step_size: f64) -> Self {
        Self { step_size }
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl<O> Solver<O, LoglikState> for FixedStepDescent
where
    O: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
{
    const NAME: &'static str = "Fixed-step gradient descent";

    fn next_iter(
        &mut self, problem: &mut Problem<O>, mut state: LoglikState,
    ) -> Result<(LoglikState, Option<KV>), Error> {
        let mut param = state.take_param().ok_or(OptError::NotInitialized {
            text: "gradient descent requires an initial parameter vector".to_string(),
        })?;
        let grad = problem.gradient(&param)?;
        param.scaled_add(-self.step_size, &grad);
        let cost = problem.cost(&param)?;
        Ok((state.param(param).gradient(grad).cost(cost), None))
    }
}
