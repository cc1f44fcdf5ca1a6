//! rust_logreg — MAP logistic regression with tie-aware AUC evaluation.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and for the `logreg` binary.
//! The crate trains a binary logistic-regression model under an isotropic
//! Gaussian prior on the weights, either by fixed-step gradient descent or
//! by L-BFGS, and scores predictions with a rank-based AUC.
//!
//! Key behaviors
//! -------------
//! - `logistic`: datasets, contiguous k-fold splitting, the MAP objective
//!   and the `LogisticModel` train/predict/evaluate surface.
//! - `optimization`: the generic log-likelihood maximizer (argmin backend),
//!   stable sigmoid transforms and progress reporting.
//! - `evaluation`: tied ranks and AUC.
//! - `utils`: CSV tables in, prediction files out.
//!
//! Invariants & assumptions
//! ------------------------
//! - Labels are exactly `0.0` or `1.0`; features and weights are finite.
//! - Every fallible operation returns a subsystem `Result` alias
//!   (`LogRegResult`, `OptResult`, `EvalResult`, `DataIoResult`); nothing in
//!   the library panics on bad input.
//!
//! Conventions
//! -----------
//! - Library code logs through the `log` facade and never prints; the binary
//!   installs `env_logger`.
//! - Record indices are 0-based internally; prediction files are 1-based.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` drives the full pipeline
//!   (load → split → train → evaluate → write) through the public API.

pub mod evaluation;
pub mod logistic;
pub mod optimization;
pub mod utils;
