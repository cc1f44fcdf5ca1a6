//! loglik_optimizer::builders — solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the solvers used by the
//! log-likelihood optimizer. These helpers hide Argmin’s generic wiring
//! and apply crate-level options (tolerances, memory size, step size) so
//! that higher-level code can request a configured solver without touching
//! Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Construct L-BFGS solvers with either Hager–Zhang or More–Thuente
//!   line search based on crate-level aliases.
//! - Apply optional gradient and cost-change tolerances from
//!   [`MLEOptions`] via a shared configuration helper.
//! - Construct the fixed-step descent solver from its step size.
//! - Leave the initial parameter vector and maximum iterations to the
//!   runner/executor layer, keeping these builders side-effect free.
//!
//! Invariants & assumptions
//! ------------------------
//! - The L-BFGS memory (`m`) is either provided via the strategy's
//!   `lbfgs_mem` or defaults to [`DEFAULT_LBFGS_MEM`].
//! - Any invalid tolerance passed into Argmin’s
//!   `with_tolerance_grad` / `with_tolerance_cost` is surfaced as an
//!   [`OptError`](crate::optimization::errors::OptError) via the crate’s
//!   `From<Error>` implementation.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        descent::FixedStepDescent,
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Construct L-BFGS with Hager–Zhang line search and the tolerances in `opts`.
///
/// `lbfgs_mem` is the history size; `None` uses [`DEFAULT_LBFGS_MEM`].
///
/// # Errors
/// Returned when Argmin rejects one of the tolerance settings.
pub fn build_optimizer_hager_zhang(
    opts: &MLEOptions, lbfgs_mem: Option<usize>,
) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with More–Thuente line search and the tolerances in `opts`.
///
/// `lbfgs_mem` is the history size; `None` uses [`DEFAULT_LBFGS_MEM`].
///
/// # Errors
/// Returned when Argmin rejects one of the tolerance settings.
pub fn build_optimizer_more_thuente(
    opts: &MLEOptions, lbfgs_mem: Option<usize>,
) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct the fixed-step descent solver.
///
/// Tolerances in `opts` are deliberately not consulted: descent stops on
/// the iteration cap alone.
pub fn build_fixed_step(step_size: f64) -> FixedStepDescent {
    FixedStepDescent::new(step_size)
}

/// configure_lbfgs — apply optional tolerances to an L-BFGS solver.
///
/// Parameters
/// ----------
/// - `solver`: `LBFGS<L, Theta, Grad, Cost>`
///   Pre-constructed L-BFGS solver using some line-search type `L`.
/// - `opts`: `&MLEOptions`
///   Source of optional tolerances (`tols.tol_grad`, `tols.tol_cost`).
///
/// Returns
/// -------
/// `OptResult<LBFGS<L, Theta, Grad, Cost>>`
///   - `Ok(solver)` with any present tolerances applied.
///   - `Err(e)` if any tolerance configuration fails inside Argmin.
///
/// Notes
/// -----
/// - When a tolerance is `None`, the corresponding `with_tolerance_*`
///   method is not called; Argmin’s defaults remain in effect.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
