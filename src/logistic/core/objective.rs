//! MAP objective for binary logistic regression.
//!
//! For weights `w`, features `X` (rows `xᵢ`) and labels `tᵢ ∈ {0, 1}`:
//!
//! ```text
//! NLL(w)        = −Σᵢ [ tᵢ · ln σ(xᵢᵀw) + (1 − tᵢ) · ln σ(−xᵢᵀw) ]
//! ∇NLL(w)       =  Σᵢ (σ(xᵢᵀw) − tᵢ) · xᵢ
//! ln p(w)       = −‖w‖² / (2σ²)              (constant dropped)
//! ∇ ln p(w)     = −w / σ²
//! ```
//!
//! Training maximizes the log posterior `ℓ(w) = −NLL(w) + ln p(w)`, i.e.
//! minimizes the penalized cross entropy `c(w) = NLL(w) − ln p(w)` whose
//! gradient is `∇NLL(w) − ∇ ln p(w)`. Because `1 − σ(z) = σ(−z)`, both loss
//! terms go through [`log_sigmoid`], so no term overflows or becomes `−∞`
//! for finite logits.
use crate::{
    logistic::{
        core::{data::Dataset, options::RegularizationStrength, validation::validate_weights},
        errors::LogRegError,
    },
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Grad, LogLikelihood, Theta},
        numerical_stability::transformations::{log_sigmoid, safe_logistic},
    },
};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// `ln σ(xᵀw)`: log-probability that a record with features `x` is positive.
pub fn predicted_log_probability(x: ArrayView1<f64>, w: ArrayView1<f64>) -> f64 {
    log_sigmoid(x.dot(&w))
}

/// Per-record logistic loss `−[t ln σ(z) + (1 − t) ln σ(−z)]`, `z = xᵀw`.
pub fn logistic_losses(x: ArrayView2<f64>, t: ArrayView1<f64>, w: ArrayView1<f64>) -> Array1<f64> {
    let logits = x.dot(&w);
    Array1::from_iter(
        logits
            .iter()
            .zip(t.iter())
            .map(|(&z, &ti)| -(ti * log_sigmoid(z) + (1.0 - ti) * log_sigmoid(-z))),
    )
}

/// Summed logistic loss (cross entropy) over all records.
pub fn neg_log_likelihood(x: ArrayView2<f64>, t: ArrayView1<f64>, w: ArrayView1<f64>) -> f64 {
    logistic_losses(x, t, w).sum()
}

/// `Σᵢ (σ(xᵢᵀw) − tᵢ) xᵢ`, the gradient of [`neg_log_likelihood`].
pub fn gradient(x: ArrayView2<f64>, t: ArrayView1<f64>, w: ArrayView1<f64>) -> Array1<f64> {
    let residual = x.dot(&w).mapv(safe_logistic) - &t;
    x.t().dot(&residual)
}

/// Gaussian log-prior `−‖w‖² / (2σ²)`.
pub fn log_prior(w: ArrayView1<f64>, regularization: RegularizationStrength) -> f64 {
    -w.dot(&w) / (2.0 * regularization.value())
}

/// Gradient of [`log_prior`]: `−w / σ²`.
pub fn prior_gradient(w: ArrayView1<f64>, regularization: RegularizationStrength) -> Array1<f64> {
    let sigma2 = regularization.value();
    w.mapv(|wi| -wi / sigma2)
}

/// `σ(Xw)`: predicted probabilities, one per row.
pub fn predict_probabilities(x: ArrayView2<f64>, w: ArrayView1<f64>) -> Array1<f64> {
    x.dot(&w).mapv(safe_logistic)
}

/// MAP objective plugged into the optimizer as a [`LogLikelihood`].
///
/// `value` is the log posterior `ℓ(w)`; the optimizer's cost, and thus every
/// progress report, is the penalized cross entropy `c(w) = −ℓ(w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapObjective {
    pub regularization: RegularizationStrength,
}

impl MapObjective {
    pub fn new(regularization: RegularizationStrength) -> Self {
        MapObjective { regularization }
    }

    /// Penalized cross entropy `NLL(w) − ln p(w)`.
    pub fn cost(&self, w: ArrayView1<f64>, data: &Dataset) -> f64 {
        neg_log_likelihood(data.features.view(), data.labels.view(), w)
            - log_prior(w, self.regularization)
    }

    /// Gradient of [`MapObjective::cost`]: `∇NLL(w) − ∇ ln p(w)`.
    pub fn cost_gradient(&self, w: ArrayView1<f64>, data: &Dataset) -> Array1<f64> {
        gradient(data.features.view(), data.labels.view(), w)
            - prior_gradient(w, self.regularization)
    }
}

impl LogLikelihood for MapObjective {
    type Data = Dataset;

    /// Log posterior `ℓ(w) = −NLL(w) + ln p(w)`.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        Ok(-self.cost(theta.view(), data))
    }

    /// Reject an empty training set and weights of the wrong length or with
    /// non-finite entries.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        if data.is_empty() {
            return Err(LogRegError::EmptyDataset.into());
        }
        validate_weights(theta.view(), data.dim())?;
        Ok(())
    }

    /// `∇ℓ(w) = −∇NLL(w) + ∇ ln p(w)`.
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        Ok(-self.cost_gradient(theta.view(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use finitediff::FiniteDiff;
    use ndarray::{Array2, array};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rand_distr::StandardNormal;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form values at w = 0 and stability for huge logits.
    // - Analytic gradients against `finitediff` central differences.
    // - Sign conventions of the `LogLikelihood` implementation.
    // -------------------------------------------------------------------------

    fn random_dataset(seed: u64, n: usize, d: usize) -> Dataset {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = Array2::from_shape_fn((n, d), |_| rng.sample::<f64, _>(StandardNormal));
        let t = Array1::from_shape_fn(n, |_| if rng.gen_bool(0.5) { 1.0 } else { 0.0 });
        Dataset::new(x, t).unwrap()
    }

    fn sigma2(v: f64) -> RegularizationStrength {
        RegularizationStrength::new(v).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // At w = 0 every record has probability ½.
    //
    // Given
    // -----
    // - 7 random records, w = 0.
    //
    // Expect
    // ------
    // - NLL = 7 ln 2, log-prior = 0, gradient = Σ(½ − tᵢ)xᵢ.
    fn values_at_zero_weights() {
        // Arrange
        let data = random_dataset(1, 7, 3);
        let w = Array1::<f64>::zeros(3);

        // Act
        let nll = neg_log_likelihood(data.features.view(), data.labels.view(), w.view());
        let prior = log_prior(w.view(), sigma2(10.0));
        let g = gradient(data.features.view(), data.labels.view(), w.view());

        // Assert
        assert_relative_eq!(nll, 7.0 * std::f64::consts::LN_2, epsilon = 1e-12);
        assert_eq!(prior, 0.0);
        let expected = data.features.t().dot(&data.labels.mapv(|t| 0.5 - t));
        for (a, b) in g.iter().zip(expected.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Huge logits neither overflow nor produce −∞.
    //
    // Given
    // -----
    // - x = (1), w = (±1000); labels chosen right and wrong.
    //
    // Expect
    // ------
    // - ln σ(1000) ≈ 0, ln σ(−1000) ≈ −1000.
    // - Loss ≈ 0 when right, ≈ 1000 when wrong; all finite.
    fn extreme_logits_stay_finite() {
        // Arrange
        let x = array![[1.0]];
        let pos = array![1.0];
        let neg = array![0.0];
        let w = array![1000.0];

        // Act
        let lp_hi = predicted_log_probability(x.row(0), w.view());
        let lp_lo = predicted_log_probability(x.row(0), (-&w).view());
        let right = neg_log_likelihood(x.view(), pos.view(), w.view());
        let wrong = neg_log_likelihood(x.view(), neg.view(), w.view());

        // Assert
        assert_abs_diff_eq!(lp_hi, 0.0, epsilon = 1e-300);
        assert_relative_eq!(lp_lo, -1000.0);
        assert_abs_diff_eq!(right, 0.0, epsilon = 1e-300);
        assert_relative_eq!(wrong, 1000.0);
    }

    #[test]
    // Purpose
    // -------
    // The analytic NLL gradient matches central finite differences.
    //
    // Given
    // -----
    // - 40 random records in 4 dimensions; 5 random small weight vectors.
    //
    // Expect
    // ------
    // - Agreement within 1e-4 relative tolerance.
    fn gradient_matches_central_differences() {
        // Arrange
        let data = random_dataset(11, 40, 4);
        let mut rng = StdRng::seed_from_u64(12);

        for _ in 0..5 {
            let w = Array1::from_shape_fn(4, |_| 0.5 * rng.sample::<f64, _>(StandardNormal));

            // Act
            let analytic = gradient(data.features.view(), data.labels.view(), w.view());
            let numeric = w.central_diff(&|p: &Array1<f64>| {
                neg_log_likelihood(data.features.view(), data.labels.view(), p.view())
            });

            // Assert
            for (a, n) in analytic.iter().zip(numeric.iter()) {
                assert_relative_eq!(a, n, max_relative = 1e-4, epsilon = 1e-6);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // The prior gradient matches central differences of the prior.
    //
    // Given
    // -----
    // - w = (0.3, −1.2, 2.0), σ² = 4.
    //
    // Expect
    // ------
    // - −w/σ² = (−0.075, 0.3, −0.5), matching the numeric gradient.
    fn prior_gradient_matches_central_differences() {
        // Arrange
        let w = array![0.3, -1.2, 2.0];
        let r = sigma2(4.0);

        // Act
        let analytic = prior_gradient(w.view(), r);
        let numeric = w.central_diff(&|p: &Array1<f64>| log_prior(p.view(), r));

        // Assert
        assert_relative_eq!(analytic[0], -0.075);
        assert_relative_eq!(analytic[1], 0.3);
        assert_relative_eq!(analytic[2], -0.5);
        for (a, n) in analytic.iter().zip(numeric.iter()) {
            assert_relative_eq!(a, n, epsilon = 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // The `LogLikelihood` view is the negated penalized cross entropy.
    //
    // Given
    // -----
    // - Random data, random w, σ² = 2.
    //
    // Expect
    // ------
    // - value = −cost; grad = −cost_gradient; cost = NLL + ‖w‖²/(2σ²).
    fn loglikelihood_is_negated_cost() {
        // Arrange
        let data = random_dataset(3, 25, 3);
        let w = array![0.2, -0.4, 0.1];
        let objective = MapObjective::new(sigma2(2.0));

        // Act
        let value = objective.value(&w, &data).unwrap();
        let grad = objective.grad(&w, &data).unwrap();
        let cost = objective.cost(w.view(), &data);
        let cost_grad = objective.cost_gradient(w.view(), &data);

        // Assert
        let nll = neg_log_likelihood(data.features.view(), data.labels.view(), w.view());
        assert_relative_eq!(cost, nll + w.dot(&w) / 4.0, epsilon = 1e-12);
        assert_relative_eq!(value, -cost);
        for (g, c) in grad.iter().zip(cost_grad.iter()) {
            assert_relative_eq!(*g, -*c);
        }
    }

    #[test]
    // Purpose
    // -------
    // `check` rejects weights of the wrong shape or with NaNs.
    //
    // Given
    // -----
    // - 3-dimensional data; w of length 2; w with a NaN.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch` and `InvalidThetaInput` after conversion.
    fn check_rejects_bad_weights() {
        // Arrange
        let data = random_dataset(5, 6, 3);
        let objective = MapObjective::new(sigma2(1.0));

        // Act
        let short = objective.check(&array![0.0, 0.0], &data).unwrap_err();
        let nan = objective.check(&array![0.0, f64::NAN, 0.0], &data).unwrap_err();

        // Assert
        assert_eq!(short, OptError::ThetaLengthMismatch { expected: 3, actual: 2 });
        assert!(matches!(nan, OptError::InvalidThetaInput { index: 1, .. }));
    }
}
