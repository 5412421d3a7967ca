//! frank_wolfe — projection-free convex solvers over norm-ball constraints.
//!
//! Purpose
//! -------
//! Provide vanilla Frank-Wolfe and two heavy-ball-momentum variants for
//! minimizing the averaged logistic loss over an L1, L2, or n-support norm
//! ball. Callers pick a constraint and a step-size rule by name (or by typed
//! enum), hand over a dataset and a feasible initial point, and receive a
//! per-iteration loss trace.
//!
//! Key behaviors
//! -------------
//! - Expose three drivers with identical contracts ([`run::fw`],
//!   [`run::wfw`], [`run::ufw`]) plus the typed runner
//!   [`run::run_frank_wolfe`] that also returns the final iterate.
//! - Solve the per-iteration linear subproblem via the constraint's linear
//!   minimization oracle ([`constraint::Constraint::fw_subprob`]) instead of
//!   performing metric projections.
//! - Offer three interchangeable step-size rules ([`step_size`]): a
//!   parameter-free schedule, a smooth rule using the objective's global
//!   Lipschitz constant, and a directionally smooth rule using a local
//!   curvature bound along the search direction.
//! - Centralize configuration parsing, shape/domain validation
//!   ([`validation`]), and the error surface ([`errors`]) so downstream code
//!   can assume sane, finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every iterate is a convex combination of the previous iterate and an
//!   extreme point of the constraint set with a coefficient in [0, 1], so
//!   feasibility of the initial point is preserved for the entire run.
//! - Configuration strings are validated at the boundary, before any
//!   gradient computation; the sets of legal constraint and rule names are
//!   closed and matched exhaustively.
//! - The loop runs exactly `n_iter` times or fails fast; there are no
//!   termination criteria, suspension points, or retries.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use the canonical aliases in [`types`]
//!   (`Iterate`, `Grad`, `Vertex`, `Features`, `Labels`).
//! - Errors bubble up as [`FwResult<T>`] / [`FwError`]; this module and its
//!   children never intentionally panic or use `unsafe` in non-test code.
//! - The core performs no I/O and no logging; the loss trace is the run's
//!   observable output.
//!
//! Downstream usage
//! ----------------
//! - Most callers import the curated surface via [`prelude`] and call a
//!   driver directly; the typed runner is for callers that also need the
//!   final iterate (e.g. to inspect sparsity under the n-support ball).
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover parsing, validation branches, oracle
//!   geometry, step-size clipping, and the per-variant schedules.
//! - Integration tests exercise every driver x constraint x rule combination
//!   end to end, asserting the feasibility invariant, the trace-length
//!   contract, and monotone-ish progress on a separable toy dataset.

pub mod constraint;
pub mod errors;
pub mod objective;
pub mod run;
pub mod step_size;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::constraint::{Constraint, ConstraintType};
pub use self::errors::{FwError, FwResult};
pub use self::objective::LogisticLoss;
pub use self::run::{fw, run_frank_wolfe, ufw, wfw, FwOutcome, FwVariant};
pub use self::step_size::StepSizeRule;
pub use self::types::{Features, Grad, Iterate, Labels, LossTrace, Vertex, DEFAULT_SUPPORT};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use frank_wolfe::prelude::*;
//
// to import the main solver surface in a single line.

pub mod prelude {
    pub use super::constraint::{Constraint, ConstraintType};
    pub use super::errors::{FwError, FwResult};
    pub use super::objective::LogisticLoss;
    pub use super::run::{fw, run_frank_wolfe, ufw, wfw, FwOutcome, FwVariant};
    pub use super::step_size::StepSizeRule;
    pub use super::types::{Features, Iterate, Labels, LossTrace};
}
