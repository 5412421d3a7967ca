//! frank_wolfe::types — shared numeric aliases and constants.
//!
//! Purpose
//! -------
//! Centralize the core numeric types used by the solver stack. By defining
//! these in one place, the rest of the code can stay agnostic to `ndarray`
//! and can more easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for iterates, gradients, oracle vertices,
//!   labels, and the feature matrix.
//! - Fix the support size of the n-support norm ball used by the drivers.
//!
//! Conventions
//! -----------
//! - All vectors are `Array1<f64>` of length `dim`; the feature matrix is a
//!   dense `Array2<f64>` of shape `n_data x dim`.
//! - The loss trace is an append-only `Vec<f64>` of length `n_iter + 1`,
//!   index 0 holding the objective at the initial point.

use ndarray::{Array1, Array2};

/// Decision variable `x`, always a member of the constraint set.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical iterate type
/// throughout the solvers.
pub type Iterate = Array1<f64>;

/// Gradient (or momentum-aggregated gradient) vector, matching the shape of
/// [`Iterate`].
pub type Grad = Array1<f64>;

/// Extreme point of the constraint set returned by a linear minimization
/// oracle; fresh each iteration, never retained.
pub type Vertex = Array1<f64>;

/// Label vector with entries in {-1.0, +1.0}, one per data row.
pub type Labels = Array1<f64>;

/// Dense feature matrix of shape `n_data x dim`.
pub type Features = Array2<f64>;

/// Per-iteration objective values; `loss[0]` is the value at the initial
/// point and `loss[k]` the value after the k-th update.
pub type LossTrace = Vec<f64>;

/// Support size `n` of the n-support norm ball used by all drivers.
pub const DEFAULT_SUPPORT: usize = 2;
