//! loglik_optimizer::finite_diff — finite-difference gradient helpers.
//!
//! Purpose
//! -------
//! Provide finite-difference gradient approximations around a parameter
//! vector, together with error capture and validation, so that the rest of
//! the optimizer can request derivatives without depending directly on the
//! `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - [`fd_gradient`] tries central differences first and falls back to
//!   forward differences when an evaluation fails or the central estimate
//!   does not validate.
//! - Errors raised by the fallible objective are captured while the
//!   `finitediff` routine runs (its closures must return plain `f64`) and
//!   re-raised afterwards.
//!
//! Invariants & assumptions
//! ------------------------
//! - Gradients returned from this module satisfy [`validate_grad`]: correct
//!   length and finite entries.
//!
//! Downstream usage
//! ----------------
//! - The argmin adapter calls [`fd_gradient`] when a [`LogLikelihood`]
//!   implementation does not provide an analytic gradient.
//! - Model tests use it to check analytic gradients against numerical ones.
//!
//! [`LogLikelihood`]: crate::optimization::loglik_optimizer::LogLikelihood
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{Grad, Theta, validation::validate_grad},
};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// fd_gradient — finite-difference gradient of a fallible scalar objective.
///
/// Parameters
/// ----------
/// - `theta`: `&Theta`
///   Point at which to differentiate. Its length defines the gradient length.
/// - `func`: `&G`
///   Objective mapping `theta` to `OptResult<f64>`.
///
/// Returns
/// -------
/// `OptResult<Grad>`
///   - `Ok(grad)` from the central scheme when it evaluates cleanly and
///     validates, otherwise from the forward scheme.
///   - `Err(e)` when the forward scheme also fails.
///
/// Errors
/// ------
/// - The first error raised by `func` during the forward pass.
/// - `OptError::GradientDimMismatch` / `OptError::InvalidGradient` from
///   [`validate_grad`].
pub fn fd_gradient<G: Fn(&Theta) -> OptResult<f64>>(theta: &Theta, func: &G) -> OptResult<Grad> {
    let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
    let plain = |t: &Theta| -> f64 {
        match func(t) {
            Ok(val) => val,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                f64::NAN
            }
        }
    };
    let central = theta.central_diff(&plain);
    if closure_err.borrow().is_none() && validate_grad(&central, theta.len()).is_ok() {
        return Ok(central);
    }
    run_fd_diff(theta, &plain, &closure_err)
}

/// Forward-difference gradient of `func` at `theta`, with error capture.
///
/// Clears `closure_err`, runs `forward_diff`, re-raises any captured error,
/// then validates the result.
fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<OptError>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, theta.len())?;
    Ok(fd_grad)
}
