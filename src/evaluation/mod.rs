//! evaluation — tie-aware ranking and AUC.
//!
//! Purpose
//! -------
//! Score a set of predictions against binary labels without reference to the
//! model that produced them. The AUC is computed from tied ranks, so it stays
//! correct when predicted probabilities collide (coarse features, saturated
//! sigmoids).
//!
//! Key behaviors
//! -------------
//! - [`tied_rank`]: 1-based ascending ranks; equal values share the mean rank
//!   of their block, including a block at either end of the order.
//! - [`auc`]: rank-sum AUC; single-class label sets are reported as
//!   [`EvalError::DegenerateLabels`] instead of producing NaN/∞.
//!
//! Conventions
//! -----------
//! - Labels are `f64` values in `{0, 1}`; `1` is the positive class.
//! - Pure functions: no logging, no state.

pub mod auc;
pub mod errors;
pub mod ranking;

pub use self::auc::auc;
pub use self::errors::{EvalError, EvalResult};
pub use self::ranking::tied_rank;
