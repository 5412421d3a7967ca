//! Validation helpers for the Frank-Wolfe solver stack.
//!
//! This module centralizes common consistency checks used across the solver
//! interface:
//!
//! - **Dataset checks**: [`validate_dataset`] enforces a non-empty feature
//!   matrix, matching row/label counts, and labels in {-1, +1}.
//! - **Iterate checks**: [`validate_iterate`] enforces correct dimension.
//! - **Radius checks**: [`validate_radius`] ensures the norm-ball radius is
//!   finite and strictly positive.
//! - **Objective values**: [`validate_loss`] checks recorded objective values
//!   for finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`FwError`] variants, making higher-level code more uniform and easier to
//! debug.
use crate::frank_wolfe::{
    errors::{FwError, FwResult},
    types::{Features, Iterate, Labels},
};

/// Validate the dataset handed to the objective.
///
/// Checks:
/// - the feature matrix has at least one row and one column,
/// - the label vector has exactly one entry per feature row,
/// - every label is exactly `-1.0` or `+1.0`.
///
/// # Errors
/// - [`FwError::EmptyDataset`] for a zero-row or zero-column matrix.
/// - [`FwError::FeatureLabelDimMismatch`] if counts disagree.
/// - [`FwError::InvalidLabel`] with the index/value of the first offender.
pub fn validate_dataset(feature: &Features, label: &Labels) -> FwResult<()> {
    let (n_data, dim) = feature.dim();
    if n_data == 0 || dim == 0 {
        return Err(FwError::EmptyDataset { n_data, dim });
    }
    if label.len() != n_data {
        return Err(FwError::FeatureLabelDimMismatch { rows: n_data, labels: label.len() });
    }
    for (index, &value) in label.iter().enumerate() {
        if value != 1.0 && value != -1.0 {
            return Err(FwError::InvalidLabel { index, value });
        }
    }
    Ok(())
}

/// Validate an iterate (or any dim-length vector) against the feature
/// dimension.
///
/// # Errors
/// Returns [`FwError::IterateDimMismatch`] if `x.len() != dim`.
pub fn validate_iterate(x: &Iterate, dim: usize) -> FwResult<()> {
    if x.len() != dim {
        return Err(FwError::IterateDimMismatch { expected: dim, found: x.len() });
    }
    Ok(())
}

/// Validate a norm-ball radius.
///
/// The radius must be **finite** and **strictly positive**; a degenerate or
/// infinite ball makes every oracle ill-defined.
///
/// # Errors
/// Returns [`FwError::InvalidRadius`] if the value is non-finite or <= 0.0.
pub fn validate_radius(radius: f64) -> FwResult<()> {
    if !radius.is_finite() {
        return Err(FwError::InvalidRadius { value: radius, reason: "Radius must be finite." });
    }
    if radius <= 0.0 {
        return Err(FwError::InvalidRadius {
            value: radius,
            reason: "Radius must be strictly positive.",
        });
    }
    Ok(())
}

/// Validate that a recorded objective value is finite.
///
/// # Errors
/// Returns [`FwError::NonFiniteLoss`] with the iteration index if the value
/// is `NaN` or infinite.
pub fn validate_loss(value: f64, iteration: usize) -> FwResult<()> {
    if !value.is_finite() {
        return Err(FwError::NonFiniteLoss { iteration, value });
    }
    Ok(())
}
