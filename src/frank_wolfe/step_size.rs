//! frank_wolfe::step_size — the three interchangeable step-size rules.
//!
//! Purpose
//! -------
//! Provide the scalar step computations the drivers share: a parameter-free
//! decreasing schedule, a smooth rule based on the objective's global
//! Lipschitz constant, and a directionally smooth rule that estimates a local
//! curvature bound along the current search direction.
//!
//! Key behaviors
//! -------------
//! - Parse user-facing rule names case-insensitively into [`StepSizeRule`];
//!   unknown names return a typed configuration error.
//! - Compute smooth-type steps from the instantaneous gradient against
//!   `(x - v)`, clipped above at 1 and, for momentum drivers, below at 0
//!   (the momentum-based linear term can be negative, unlike vanilla
//!   Frank-Wolfe where it is nonnegative by duality).
//! - Treat an exactly-zero denominator (`x == v`, or a search direction in
//!   the feature matrix's null space) as a zero step: the Frank-Wolfe gap is
//!   zero there and the iterate stays put.
//!
//! Conventions
//! -----------
//! - The parameter-free schedule itself lives with the driver variants in
//!   [`run`](crate::frank_wolfe::run), since it differs per variant; this
//!   module holds the data-dependent rules.
use crate::frank_wolfe::{
    errors::FwError,
    types::{Features, Grad, Iterate, Vertex},
};
use std::str::FromStr;

/// Choice of step-size rule, parsed from a user-facing name.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"pf"`, `"s"`, `"ds"`, for parameter-free, smooth, and directionally
/// smooth). Unknown names return `FwError::UnsupportedStepSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSizeRule {
    ParameterFree,
    Smooth,
    DirectionallySmooth,
}

impl FromStr for StepSizeRule {
    type Err = FwError;

    /// Parse a step-size rule from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"pf"` (parameter-free)
    /// - `"s"` (smooth)
    /// - `"ds"` (directionally smooth)
    /// - Any case variant (e.g., `"PF"`, `"Ds"`).
    ///
    /// Any other value returns `FwError::UnsupportedStepSize` with a helpful
    /// message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pf" => Ok(StepSizeRule::ParameterFree),
            "s" => Ok(StepSizeRule::Smooth),
            "ds" => Ok(StepSizeRule::DirectionallySmooth),
            _ => Err(FwError::UnsupportedStepSize {
                name: s.to_string(),
                reason: "Valid choices are case-insensitive 'pf', 's', and 'ds'.",
            }),
        }
    }
}

/// Smooth step: `grad . (x - v) / (L * ||x - v||^2)`, clipped.
///
/// `clamp_below` is set by the momentum drivers, whose linear term can go
/// negative; vanilla Frank-Wolfe only clips above at 1. A zero denominator
/// (`x == v`) yields a zero step.
pub fn smooth_step(
    grad_x: &Grad, x: &Iterate, v: &Vertex, lipschitz: f64, clamp_below: bool,
) -> f64 {
    let diff = x - v;
    let diff_sq = diff.dot(&diff);
    if diff_sq == 0.0 {
        return 0.0;
    }
    clip(grad_x.dot(&diff) / (lipschitz * diff_sq), clamp_below)
}

/// Directionally smooth step: substitutes the local curvature bound
/// `Lk = ||feature * (v - x)||^2 / (4 * n_data * ||x - v||^2)` for the global
/// constant in the smooth formula, with the same clipping rules.
///
/// Both degenerate denominators (`x == v`, or `feature * (v - x) == 0`, i.e.
/// a direction the data cannot see) yield a zero step.
pub fn directionally_smooth_step(
    grad_x: &Grad, x: &Iterate, v: &Vertex, feature: &Features, n_data: usize, clamp_below: bool,
) -> f64 {
    let diff = x - v;
    let diff_sq = diff.dot(&diff);
    if diff_sq == 0.0 {
        return 0.0;
    }
    let mapped = feature.dot(&diff);
    let local = mapped.dot(&mapped) / (4.0 * n_data as f64 * diff_sq);
    if local == 0.0 {
        return 0.0;
    }
    clip(grad_x.dot(&diff) / (local * diff_sq), clamp_below)
}

/// Clip a raw step into [0, 1] (momentum drivers) or (-inf, 1] (vanilla).
fn clip(raw: f64, clamp_below: bool) -> f64 {
    let lr = raw.min(1.0);
    if clamp_below {
        lr.max(0.0)
    } else {
        lr
    }
}
