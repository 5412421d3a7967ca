//! frank_wolfe::run — the optimization drivers.
//!
//! Purpose
//! -------
//! Wire objective, linear minimization oracle, and step-size rule into the
//! three iteration loops: vanilla Frank-Wolfe ([`fw`]) and the weighted and
//! uniform heavy-ball variants ([`wfw`], [`ufw`]). All three share one runner
//! ([`run_frank_wolfe`]); the variants differ only in their momentum weight,
//! their parameter-free schedule, and whether smooth-type steps clamp below
//! at zero.
//!
//! Key behaviors
//! -------------
//! - Parse and validate `lr_type` and `constraint_type` at the boundary,
//!   before any objective construction or gradient work; bad names fail with
//!   a configuration error and nothing else runs.
//! - Iterate exactly `n_iter` times: (momentum) gradient, oracle vertex,
//!   step size, convex combination, recorded loss.
//! - Return a loss trace of exactly `n_iter + 1` values, index 0 holding the
//!   objective at the initial point.
//!
//! Invariants & assumptions
//! ------------------------
//! - The caller guarantees `x_init` lies in the constraint set; every update
//!   `x <- (1 - lr) * x + lr * v` with `lr` in [0, 1] and `v` an extreme
//!   point then keeps the iterate feasible by convexity.
//! - The momentum estimate starts at the zero vector; the first iteration's
//!   weight is exactly 1 for both momentum variants, so it is driven fully
//!   to the first gradient with no `k == 0` special case.
//! - Smooth-type steps are always computed from the instantaneous gradient
//!   against `(x - v)`, never from the momentum aggregate.
use crate::frank_wolfe::{
    constraint::{Constraint, ConstraintType},
    errors::FwResult,
    objective::LogisticLoss,
    step_size::{directionally_smooth_step, smooth_step, StepSizeRule},
    types::{Features, Grad, Iterate, Labels, LossTrace},
    validation::{validate_iterate, validate_loss},
};
use ndarray::Array1;

/// The three driver variants, differing only in their schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FwVariant {
    /// Vanilla Frank-Wolfe: oracle called on the instantaneous gradient.
    Vanilla,
    /// Weighted heavy-ball: momentum weight `2 / (k + 2)`.
    Weighted,
    /// Uniform heavy-ball: momentum weight `1 / (k + 1)`.
    Uniform,
}

impl FwVariant {
    /// Momentum weight `delta` at iteration `k`, or `None` for the vanilla
    /// driver (which feeds the raw gradient to the oracle).
    ///
    /// Both momentum schedules evaluate to exactly 1 at `k = 0`.
    pub fn momentum_delta(&self, k: usize) -> Option<f64> {
        match self {
            FwVariant::Vanilla => None,
            FwVariant::Weighted => Some(2.0 / (k as f64 + 2.0)),
            FwVariant::Uniform => Some(1.0 / (k as f64 + 1.0)),
        }
    }

    /// Parameter-free step at iteration `k`: `2 / (k + 2)` for the vanilla
    /// and weighted drivers, `1 / (k + 1)` for the uniform driver. Always in
    /// (0, 1], independent of the dataset.
    pub fn pf_step(&self, k: usize) -> f64 {
        match self {
            FwVariant::Vanilla | FwVariant::Weighted => 2.0 / (k as f64 + 2.0),
            FwVariant::Uniform => 1.0 / (k as f64 + 1.0),
        }
    }

    /// Whether smooth-type steps clamp below at 0. The momentum-based linear
    /// term can be negative; the vanilla one cannot.
    pub fn clamps_below(&self) -> bool {
        !matches!(self, FwVariant::Vanilla)
    }
}

/// Canonical result of a solver run.
///
/// - `loss`: objective values, index 0 at the initial point, length
///   `n_iter + 1`.
/// - `x`: final iterate, a member of the constraint set.
/// - `iterations`: number of updates performed (equals the requested
///   `n_iter`).
#[derive(Debug, Clone, PartialEq)]
pub struct FwOutcome {
    pub loss: LossTrace,
    pub x: Iterate,
    pub iterations: usize,
}

/// Run one of the Frank-Wolfe variants with typed configuration.
///
/// This is the shared runner behind [`fw`], [`wfw`], and [`ufw`]; it also
/// returns the final iterate, which the string-typed drivers discard.
///
/// # Behavior
/// - Builds the objective over the borrowed dataset (validating shapes and
///   the label domain) and the constraint for the problem dimension.
/// - Validates `x_init` against the feature dimension; feasibility itself is
///   the caller's guarantee.
/// - Iterates `n_iter` times. Momentum variants aggregate
///   `g <- delta * grad + (1 - delta) * g` starting from `g = 0` and call
///   the oracle on `g`; the vanilla variant calls it on the gradient.
/// - Records the objective after every update and validates it is finite.
///
/// # Errors
/// - Dataset, radius, and dimension problems from construction.
/// - [`FwError::DegenerateDirection`] from an L2-scaled oracle on an
///   exactly-zero direction.
/// - [`FwError::NonFiniteLoss`] if the objective ever goes non-finite.
///
/// [`FwError::DegenerateDirection`]: crate::frank_wolfe::errors::FwError::DegenerateDirection
/// [`FwError::NonFiniteLoss`]: crate::frank_wolfe::errors::FwError::NonFiniteLoss
#[allow(clippy::too_many_arguments)]
pub fn run_frank_wolfe(
    variant: FwVariant, x_init: Iterate, n_iter: usize, feature: &Features, label: &Labels,
    constraint_type: ConstraintType, radius: f64, lr_type: StepSizeRule,
) -> FwResult<FwOutcome> {
    let objective = LogisticLoss::new(feature, label)?;
    let constraint = Constraint::new(constraint_type, radius, objective.dim())?;
    validate_iterate(&x_init, objective.dim())?;

    let mut x = x_init;
    // Lazy momentum initialization: delta is 1 at k = 0, so the first update
    // overwrites the zeros with the first gradient.
    let mut g: Grad = Array1::zeros(objective.dim());
    let mut loss = Vec::with_capacity(n_iter + 1);
    let initial = objective.function_value(&x)?;
    validate_loss(initial, 0)?;
    loss.push(initial);

    for k in 0..n_iter {
        let grad_x = objective.grad(&x)?;

        let direction = match variant.momentum_delta(k) {
            Some(delta) => {
                g = &grad_x * delta + &g * (1.0 - delta);
                &g
            }
            None => &grad_x,
        };
        let v = constraint.fw_subprob(direction)?;

        let lr = match lr_type {
            StepSizeRule::ParameterFree => variant.pf_step(k),
            StepSizeRule::Smooth => {
                smooth_step(&grad_x, &x, &v, objective.lipschitz(), variant.clamps_below())
            }
            StepSizeRule::DirectionallySmooth => directionally_smooth_step(
                &grad_x,
                &x,
                &v,
                objective.feature(),
                objective.n_data(),
                variant.clamps_below(),
            ),
        };

        x = &x * (1.0 - lr) + &v * lr;
        let value = objective.function_value(&x)?;
        validate_loss(value, k + 1)?;
        loss.push(value);
    }

    Ok(FwOutcome { loss, x, iterations: n_iter })
}

/// Parse the string configuration shared by the three drivers.
///
/// The step-size rule is checked first, then the constraint name, matching
/// the driver contract that configuration failures surface before any
/// numeric work.
fn parse_config(constraint_type: &str, lr_type: &str) -> FwResult<(ConstraintType, StepSizeRule)> {
    let rule = lr_type.parse::<StepSizeRule>()?;
    let constraint = constraint_type.parse::<ConstraintType>()?;
    Ok((constraint, rule))
}

/// Vanilla Frank-Wolfe over the named constraint set.
///
/// # Parameters
/// - `x_init`: initial iterate; the caller guarantees it lies in the set.
/// - `n_iter`: number of updates; the trace has `n_iter + 1` entries.
/// - `feature`, `label`: dense dataset, labels in {-1, +1}.
/// - `constraint_type`: `"l1"`, `"l2"`, or `"n_supp"` (case-insensitive).
/// - `radius`: ball radius `R`, finite and > 0.
/// - `lr_type`: `"pf"`, `"s"`, or `"ds"` (case-insensitive).
///
/// # Errors
/// Configuration errors surface before any gradient computation; see
/// [`run_frank_wolfe`] for the runtime error set.
pub fn fw(
    x_init: Iterate, n_iter: usize, feature: &Features, label: &Labels, constraint_type: &str,
    radius: f64, lr_type: &str,
) -> FwResult<LossTrace> {
    let (constraint, rule) = parse_config(constraint_type, lr_type)?;
    let outcome =
        run_frank_wolfe(FwVariant::Vanilla, x_init, n_iter, feature, label, constraint, radius, rule)?;
    Ok(outcome.loss)
}

/// Weighted heavy-ball Frank-Wolfe: momentum weight `2 / (k + 2)`, oracle
/// called on the momentum aggregate, smooth-type steps clamped into [0, 1].
///
/// Same contract as [`fw`].
pub fn wfw(
    x_init: Iterate, n_iter: usize, feature: &Features, label: &Labels, constraint_type: &str,
    radius: f64, lr_type: &str,
) -> FwResult<LossTrace> {
    let (constraint, rule) = parse_config(constraint_type, lr_type)?;
    let outcome = run_frank_wolfe(
        FwVariant::Weighted,
        x_init,
        n_iter,
        feature,
        label,
        constraint,
        radius,
        rule,
    )?;
    Ok(outcome.loss)
}

/// Uniform heavy-ball Frank-Wolfe: momentum weight `1 / (k + 1)`, and the
/// parameter-free schedule is `1 / (k + 1)` as well.
///
/// Same contract as [`fw`].
pub fn ufw(
    x_init: Iterate, n_iter: usize, feature: &Features, label: &Labels, constraint_type: &str,
    radius: f64, lr_type: &str,
) -> FwResult<LossTrace> {
    let (constraint, rule) = parse_config(constraint_type, lr_type)?;
    let outcome = run_frank_wolfe(
        FwVariant::Uniform,
        x_init,
        n_iter,
        feature,
        label,
        constraint,
        radius,
        rule,
    )?;
    Ok(outcome.loss)
}
