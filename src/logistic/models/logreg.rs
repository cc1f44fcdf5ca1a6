//! Logistic-regression model: MAP training, prediction, and evaluation.
//!
//! This module wires the MAP objective to the `maximize` entrypoint. Training
//! always starts from the zero weight vector; the optimizer strategy (fixed
//! step gradient descent or L-BFGS) comes from [`TrainOptions`]. After a fit
//! the weights are read-only inputs to prediction and evaluation.
//!
//! Key ideas:
//! - Progress is reported through a caller-supplied [`ProgressReport`] sink,
//!   so the model holds no global iteration state.
//! - Predictions are `σ(Xw)` evaluated with the stable sigmoid; logits beyond
//!   [`SATURATION_LOGIT`] are reported with `log::warn!` but never fail.
//! - Evaluation errors (e.g. a single-class label set) leave the fitted
//!   model untouched.
use crate::{
    evaluation,
    logistic::{
        core::{
            data::Dataset,
            objective::{MapObjective, neg_log_likelihood, predict_probabilities},
            options::TrainOptions,
            validation::validate_features,
        },
        errors::{LogRegError, LogRegResult},
    },
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{OptimOutcome, ProgressReport, maximize},
        numerical_stability::transformations::SATURATION_LOGIT,
    },
};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Predicted probabilities plus, when labels were supplied, their AUC.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub probabilities: Array1<f64>,
    pub auc: Option<f64>,
}

/// Binary logistic-regression model trained by MAP estimation.
///
/// # Notes
/// - `results` keeps the full optimizer outcome (trace, stop reason,
///   evaluation counts) of the last `fit`.
/// - `weights` is `None` until a fit succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    /// Optimizer configuration and prior variance.
    pub options: TrainOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted weights (populated after `fit`).
    pub weights: Option<Array1<f64>>,
}

impl LogisticModel {
    pub fn new(options: TrainOptions) -> LogisticModel {
        LogisticModel { options, results: None, weights: None }
    }

    /// Fit the weights on `data` starting from `w = 0` and cache the outcome.
    ///
    /// ## Steps
    /// 1. Build the MAP objective from `options.regularization`.
    /// 2. Run the strategy in `options.mle_opts`, forwarding progress records
    ///    to `reporter`.
    /// 3. Store the outcome in `self.results` and `θ̂` in `self.weights`.
    ///
    /// ## Errors
    /// - `OptError::InvalidModelData` for an empty training set.
    /// - Any optimizer error (line-search failure, non-finite cost, ...).
    ///   On error the previous fit, if any, is kept.
    pub fn fit(&mut self, data: &Dataset, reporter: Box<dyn ProgressReport>) -> OptResult<()> {
        let objective = MapObjective::new(self.options.regularization);
        let w0 = Array1::<f64>::zeros(data.dim());
        let outcome = maximize(&objective, w0, data, &self.options.mle_opts, reporter)?;
        log::debug!(
            "logistic fit: {} iterations, stop reason {:?}, penalized cross entropy {:.6}",
            outcome.iterations,
            outcome.stop_reason,
            -outcome.value
        );
        self.weights = Some(outcome.theta_hat.clone());
        self.results = Some(outcome);
        Ok(())
    }

    /// Fitted weights.
    ///
    /// # Errors
    /// - [`LogRegError::ModelNotFitted`] before a successful `fit`.
    pub fn weights(&self) -> LogRegResult<ArrayView1<'_, f64>> {
        self.weights.as_ref().map(|w| w.view()).ok_or(LogRegError::ModelNotFitted)
    }

    /// `σ(Xw)` for every row of `features`.
    ///
    /// Logits whose magnitude exceeds [`SATURATION_LOGIT`] are counted and
    /// reported once per call with `log::warn!`.
    ///
    /// # Errors
    /// - [`LogRegError::ModelNotFitted`] before a successful `fit`.
    /// - [`LogRegError::FeatureDimMismatch`] when the column count differs
    ///   from the number of weights.
    /// - Anything `validate_features` rejects (empty or non-finite input).
    pub fn predict(&self, features: ArrayView2<f64>) -> LogRegResult<Array1<f64>> {
        let w = self.weights()?;
        if features.ncols() != w.len() {
            return Err(LogRegError::FeatureDimMismatch {
                expected: w.len(),
                actual: features.ncols(),
            });
        }
        validate_features(features)?;
        let saturated =
            features.rows().into_iter().filter(|x| x.dot(&w).abs() > SATURATION_LOGIT).count();
        if saturated > 0 {
            log::warn!(
                "{saturated} of {} logits exceed |z| = {SATURATION_LOGIT}; their probabilities are saturated",
                features.nrows()
            );
        }
        Ok(predict_probabilities(features, w))
    }

    /// Predict, and when `labels` are given also compute the AUC.
    ///
    /// # Errors
    /// - Everything [`LogisticModel::predict`] returns.
    /// - [`LogRegError::Evaluation`] wrapping `EvalError::DegenerateLabels`
    ///   for a single-class label set.
    pub fn evaluate(
        &self, features: ArrayView2<f64>, labels: Option<ArrayView1<f64>>,
    ) -> LogRegResult<Evaluation> {
        let probabilities = self.predict(features)?;
        let auc = match labels {
            Some(t) => Some(evaluation::auc(t, probabilities.view())?),
            None => None,
        };
        Ok(Evaluation { probabilities, auc })
    }

    /// Summed logistic loss of the fitted model on `data` (no prior term).
    ///
    /// # Errors
    /// - [`LogRegError::ModelNotFitted`] before a successful `fit`.
    /// - [`LogRegError::FeatureDimMismatch`] on a width mismatch.
    pub fn cross_entropy(&self, data: &Dataset) -> LogRegResult<f64> {
        let w = self.weights()?;
        if data.dim() != w.len() {
            return Err(LogRegError::FeatureDimMismatch { expected: w.len(), actual: data.dim() });
        }
        Ok(neg_log_likelihood(data.features.view(), data.labels.view(), w))
    }
}

/// Train on `data` and return the fitted weights.
///
/// Shorthand for `LogisticModel::new(options)` + `fit` when the optimizer
/// outcome is not needed.
pub fn train(
    data: &Dataset, options: TrainOptions, reporter: Box<dyn ProgressReport>,
) -> OptResult<Array1<f64>> {
    let mut model = LogisticModel::new(options);
    model.fit(data, reporter)?;
    model.weights.ok_or(OptError::MissingThetaHat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        evaluation::EvalError,
        optimization::loglik_optimizer::{ProgressRecord, SilentProgress, StopReason},
    };
    use ndarray::{Array2, array};
    use parking_lot::Mutex;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_distr::{Distribution, Normal};
    use std::sync::Arc;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Gradient-descent monotonicity and report cadence through `fit`.
    // - L-BFGS reaching a stationary point of the MAP objective.
    // - Prediction/evaluation error paths and saturation handling.
    // -------------------------------------------------------------------------

    /// `n/2` positives around (2, 2) and `n/2` negatives around (−2, −2).
    fn clusters(seed: u64, n: usize) -> Dataset {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, 1.0).unwrap();
        let mut x = Array2::<f64>::zeros((n, 2));
        let mut t = Array1::<f64>::zeros(n);
        for i in 0..n {
            let (center, label) = if i % 2 == 0 { (2.0, 1.0) } else { (-2.0, 0.0) };
            x[[i, 0]] = center + noise.sample(&mut rng);
            x[[i, 1]] = center + noise.sample(&mut rng);
            t[i] = label;
        }
        Dataset::new(x, t).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // With a small step the penalized cross entropy never increases, and
    // progress arrives every 10th iteration.
    //
    // Given
    // -----
    // - 100 clustered records, σ² = 10, η = 1e-3, 60 iterations.
    //
    // Expect
    // ------
    // - Trace iterations 0, 10, …, 50 with non-increasing costs.
    // - Stop reason `IterationLimit` after exactly 60 iterations.
    fn gradient_descent_fit_is_monotone() {
        // Arrange
        let data = clusters(21, 100);
        let options = TrainOptions::gradient_descent(60, 1e-3, 10.0).unwrap();
        let mut model = LogisticModel::new(options);
        let seen = Arc::new(Mutex::new(Vec::<ProgressRecord>::new()));
        let sink = Arc::clone(&seen);

        // Act
        model.fit(&data, Box::new(move |r: &ProgressRecord| sink.lock().push(*r))).unwrap();

        // Assert
        let results = model.results.as_ref().unwrap();
        let iters: Vec<u64> = results.trace.iter().map(|r| r.iteration).collect();
        assert_eq!(iters, vec![0, 10, 20, 30, 40, 50]);
        assert_eq!(*seen.lock(), results.trace);
        assert!(results.trace.windows(2).all(|w| w[1].cost <= w[0].cost));
        assert_eq!(results.iterations, 60);
        assert_eq!(results.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    // Purpose
    // -------
    // L-BFGS stops at a stationary point and beats a short descent run.
    //
    // Given
    // -----
    // - 100 clustered records, σ² = 10.
    // - L-BFGS with `tol_grad = 1e-6`; descent with η = 1e-4, same cap.
    //
    // Expect
    // ------
    // - ‖∇c(ŵ)‖ < 1e-3 for L-BFGS and a lower cost than descent.
    fn quasi_newton_reaches_stationary_point() {
        // Arrange
        let data = clusters(22, 100);
        let mut qn = LogisticModel::new(TrainOptions::quasi_newton(100, 1e-6, 10.0).unwrap());
        let mut gd = LogisticModel::new(TrainOptions::gradient_descent(100, 1e-4, 10.0).unwrap());
        let objective = MapObjective::new(qn.options.regularization);

        // Act
        qn.fit(&data, Box::new(SilentProgress)).unwrap();
        gd.fit(&data, Box::new(SilentProgress)).unwrap();

        // Assert
        let w_qn = qn.weights().unwrap();
        let w_gd = gd.weights().unwrap();
        let grad = objective.cost_gradient(w_qn, &data);
        assert!(grad.dot(&grad).sqrt() < 1e-3);
        assert!(objective.cost(w_qn, &data) < objective.cost(w_gd, &data));
    }

    #[test]
    // Purpose
    // -------
    // L-BFGS reports progress on every outer iteration, with no gaps.
    //
    // Given
    // -----
    // - 100 clustered records, σ² = 10, L-BFGS with `tol_grad = 1e-6` and a
    //   cap of 100 iterations, progress collected through a closure.
    //
    // Expect
    // ------
    // - More than one iteration ran.
    // - Trace iterations are exactly `0, 1, …, iterations − 1`, and the
    //   closure saw the same records.
    fn quasi_newton_reports_every_iteration() {
        // Arrange
        let data = clusters(23, 100);
        let mut model = LogisticModel::new(TrainOptions::quasi_newton(100, 1e-6, 10.0).unwrap());
        let seen = Arc::new(Mutex::new(Vec::<ProgressRecord>::new()));
        let sink = Arc::clone(&seen);

        // Act
        model.fit(&data, Box::new(move |r: &ProgressRecord| sink.lock().push(*r))).unwrap();

        // Assert
        let results = model.results.as_ref().unwrap();
        assert!(results.iterations > 1);
        let iters: Vec<u64> = results.trace.iter().map(|r| r.iteration).collect();
        assert_eq!(iters, (0..results.iterations as u64).collect::<Vec<_>>());
        assert_eq!(*seen.lock(), results.trace);
    }

    #[test]
    // Purpose
    // -------
    // Unfitted models and width mismatches are reported.
    //
    // Given
    // -----
    // - A fresh model; then a fitted 2-feature model scored on 3 columns.
    //
    // Expect
    // ------
    // - `ModelNotFitted`, then `FeatureDimMismatch { expected: 2, actual: 3 }`.
    fn predict_reports_unfitted_and_width_errors() {
        // Arrange
        let data = clusters(23, 20);
        let mut model = LogisticModel::new(TrainOptions::gradient_descent(5, 1e-3, 10.0).unwrap());
        let wide = Array2::<f64>::zeros((4, 3));

        // Act
        let unfitted = model.predict(data.features.view()).unwrap_err();
        model.fit(&data, Box::new(SilentProgress)).unwrap();
        let mismatch = model.predict(wide.view()).unwrap_err();

        // Assert
        assert_eq!(unfitted, LogRegError::ModelNotFitted);
        assert_eq!(mismatch, LogRegError::FeatureDimMismatch { expected: 2, actual: 3 });
        assert!(model.cross_entropy(&data).unwrap() > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Saturated logits still yield valid probabilities.
    //
    // Given
    // -----
    // - Weights (100, 0) set by hand; rows with x₀ = ±5 (|z| = 500).
    //
    // Expect
    // ------
    // - Probabilities 1 and ≈0 (finite), AUC = 1.
    fn saturated_predictions_are_finite() {
        // Arrange
        let mut model = LogisticModel::new(TrainOptions::default());
        model.weights = Some(array![100.0, 0.0]);
        let x = array![[5.0, 1.0], [-5.0, 1.0], [5.0, -1.0], [-5.0, -1.0]];
        let t = array![1.0, 0.0, 1.0, 0.0];

        // Act
        let eval = model.evaluate(x.view(), Some(t.view())).unwrap();

        // Assert
        assert!(eval.probabilities.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p)));
        assert_eq!(eval.probabilities[0], 1.0);
        assert!(eval.probabilities[1] < 1e-200);
        assert_eq!(eval.auc, Some(1.0));
    }

    #[test]
    // Purpose
    // -------
    // A single-class evaluation set fails the evaluation only.
    //
    // Given
    // -----
    // - A fitted model; evaluation labels all 1; then no labels.
    //
    // Expect
    // ------
    // - `Evaluation(DegenerateLabels)`; without labels, probabilities and no AUC.
    fn degenerate_evaluation_keeps_model_usable() {
        // Arrange
        let data = clusters(24, 20);
        let mut model = LogisticModel::new(TrainOptions::gradient_descent(10, 1e-3, 10.0).unwrap());
        model.fit(&data, Box::new(SilentProgress)).unwrap();
        let ones = Array1::<f64>::ones(data.len());

        // Act
        let err = model.evaluate(data.features.view(), Some(ones.view())).unwrap_err();
        let unlabeled = model.evaluate(data.features.view(), None).unwrap();

        // Assert
        assert_eq!(
            err,
            LogRegError::Evaluation(EvalError::DegenerateLabels { positives: 20, negatives: 0 })
        );
        assert_eq!(unlabeled.probabilities.len(), 20);
        assert!(unlabeled.auc.is_none());
    }
}
