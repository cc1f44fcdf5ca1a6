//! loglik_optimizer — argmin-powered maximizer for log-likelihoods and
//! log-posteriors.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing**
//! an objective `ℓ(θ)` (a log-likelihood, or a log-posterior when a prior is
//! folded in). Callers implement a single trait, [`LogLikelihood`], and
//! invoke [`maximize`] with a [`Strategy`]: fixed-step gradient descent or
//! L-BFGS with a configurable line search.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied objectives `ℓ(θ)` into Argmin-compatible cost
//!   functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single entrypoint [`maximize`] that:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - selects a solver via [`builders`] based on [`Strategy`],
//!   - executes it via [`run::run_solver`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Report `(iteration, cost)` pairs through a [`ProgressReport`] sink
//!   ([`progress`]); the records are also kept in [`OptimOutcome::trace`].
//! - Fall back to finite-difference gradients ([`finite_diff`]) when a model
//!   does not implement [`LogLikelihood::grad`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** `ℓ(θ)` by minimizing `c(θ) = -ℓ(θ)`;
//!   user code implements `ℓ(θ)` and `∇ℓ(θ)`, **never** the cost directly.
//! - [`LogLikelihood::value`] and [`LogLikelihood::grad`] must treat invalid
//!   inputs as recoverable [`OptError`](crate::optimization::errors::OptError)
//!   values, not panics.
//! - Configuration types ([`Tolerances`], [`MLEOptions`]) are validated on
//!   construction.
//!
//! Conventions
//! -----------
//! - Progress records and [`LoglikState`] costs are in cost space `c(θ)`;
//!   [`OptimOutcome::value`] is in objective space `ℓ(θ̂)`.
//! - Iterations are 0-indexed.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod descent;
pub mod finite_diff;
pub mod progress;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::progress::{LogProgress, ProgressRecord, ProgressReport, SilentProgress};
pub use self::traits::{
    LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, StopReason, Strategy, Tolerances,
};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, LoglikState, Theta};

pub mod prelude {
    pub use super::api::maximize;
    pub use super::progress::{LogProgress, ProgressRecord, ProgressReport, SilentProgress};
    pub use super::traits::{LogLikelihood, MLEOptions, OptimOutcome, Strategy, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
