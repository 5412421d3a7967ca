//! frank_wolfe::objective — averaged logistic loss over a fixed dataset.
//!
//! Purpose
//! -------
//! Provide the single objective the solvers minimize: the mean logistic loss
//! of a linear classifier over a dense dataset. The dataset is owned by the
//! caller and borrowed here for the lifetime of the optimization run.
//!
//! Key behaviors
//! -------------
//! - Validate the dataset once at construction (shapes, label domain) and
//!   precompute `n_data`, `dim`, and the global Lipschitz constant
//!   `L = sum(feature_ij^2) / (4 * n_data)` used by the smooth step rule.
//! - Evaluate the averaged gradient and the objective value as pure
//!   functions of the iterate.
//! - Evaluate `log(1 + exp(z))` in log-sum-exp form so large-magnitude
//!   margins never overflow.
//!
//! Invariants & assumptions
//! ------------------------
//! - Labels are exactly -1.0 or +1.0; this is enforced at construction.
//! - `grad` and `function_value` reject a wrong-length iterate with
//!   [`FwError::IterateDimMismatch`] and are otherwise side-effect free.
use crate::frank_wolfe::{
    errors::FwResult,
    types::{Features, Grad, Iterate, Labels},
    validation::{validate_dataset, validate_iterate},
};
use ndarray::Array1;

/// Numerically stable logistic sigmoid.
///
/// Evaluates `1 / (1 + exp(-z))` without forming `exp` of a large positive
/// argument.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Numerically stable `log(1 + exp(z))`.
///
/// Uses the identity `log(1 + exp(z)) = max(z, 0) + log1p(exp(-|z|))`.
fn log1p_exp(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

/// Averaged logistic loss of a linear classifier over `(feature, label)`.
///
/// Borrows the dataset for the lifetime of the run; construction validates
/// shapes and the label domain and precomputes the global Lipschitz constant
/// of the gradient.
#[derive(Debug, Clone)]
pub struct LogisticLoss<'a> {
    feature: &'a Features,
    label: &'a Labels,
    n_data: usize,
    dim: usize,
    lipschitz: f64,
}

impl<'a> LogisticLoss<'a> {
    /// Build the objective over a borrowed dataset.
    ///
    /// # Errors
    /// Propagates [`validate_dataset`] failures: empty matrix, feature/label
    /// count mismatch, or labels outside {-1, +1}.
    pub fn new(feature: &'a Features, label: &'a Labels) -> FwResult<Self> {
        validate_dataset(feature, label)?;
        let (n_data, dim) = feature.dim();
        let lipschitz = feature.iter().map(|v| v * v).sum::<f64>() / (4.0 * n_data as f64);
        Ok(Self { feature, label, n_data, dim, lipschitz })
    }

    /// Number of data rows.
    pub fn n_data(&self) -> usize {
        self.n_data
    }

    /// Feature dimension (length of a valid iterate).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Global Lipschitz constant `L` of the gradient, used by the smooth
    /// step-size rule.
    pub fn lipschitz(&self) -> f64 {
        self.lipschitz
    }

    /// Borrowed feature matrix, shared with the directionally smooth step
    /// rule.
    pub fn feature(&self) -> &'a Features {
        self.feature
    }

    /// Averaged gradient of the logistic loss at `x`.
    ///
    /// Computes `feature^T * s / n_data` with
    /// `s_i = -label_i * sigmoid(-label_i * (feature_i . x))`, which avoids a
    /// second exponential per row.
    ///
    /// # Errors
    /// Returns [`FwError::IterateDimMismatch`] for a wrong-length `x`.
    ///
    /// [`FwError::IterateDimMismatch`]: crate::frank_wolfe::errors::FwError::IterateDimMismatch
    pub fn grad(&self, x: &Iterate) -> FwResult<Grad> {
        validate_iterate(x, self.dim)?;
        let margins = self.feature.dot(x);
        let s = Array1::from_iter(
            margins.iter().zip(self.label.iter()).map(|(&m, &y)| -y * sigmoid(-y * m)),
        );
        Ok(self.feature.t().dot(&s) / self.n_data as f64)
    }

    /// Objective value at `x`: mean of `log(1 + exp(-label_i * margin_i))`.
    ///
    /// # Errors
    /// Returns [`FwError::IterateDimMismatch`] for a wrong-length `x`.
    ///
    /// [`FwError::IterateDimMismatch`]: crate::frank_wolfe::errors::FwError::IterateDimMismatch
    pub fn function_value(&self, x: &Iterate) -> FwResult<f64> {
        validate_iterate(x, self.dim)?;
        let margins = self.feature.dot(x);
        let total: f64 = margins
            .iter()
            .zip(self.label.iter())
            .map(|(&m, &y)| log1p_exp(-y * m))
            .sum();
        Ok(total / self.n_data as f64)
    }
}
