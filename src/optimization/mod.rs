//! optimization — maximizer stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting: an Argmin-backed
//! objective maximizer, numerically stable sigmoid/softplus primitives, and a
//! single error/result surface. Callers implement an objective, choose a
//! strategy and tolerances, and obtain fitted parameters and diagnostics
//! without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - `loglik_optimizer`: maximize `ℓ(θ)` with fixed-step gradient descent or
//!   L-BFGS, reporting progress through a caller-supplied sink.
//! - `numerical_stability`: `log σ(z)`, `σ(z)` and softplus evaluated without
//!   overflow for any finite `z`.
//! - `errors`: normalize configuration issues, numerical failures, model
//!   errors and backend solver errors into `OptError` / `OptResult<T>`.
//!
//! Conventions
//! -----------
//! - All solvers maximize `ℓ(θ)` by minimizing `c(θ) = -ℓ(θ)`; outcomes are
//!   expressed in terms of `ℓ`.
//! - Entry points that can fail return `OptResult<T>`; callers never see raw
//!   Argmin errors.
//! - Logging goes through the `log` facade only; installing a logger is the
//!   binary's job.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
