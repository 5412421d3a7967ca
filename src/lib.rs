//! frank_wolfe — projection-free solvers for norm-ball constrained logistic regression.
//!
//! Purpose
//! -------
//! Serve as the crate root for a small family of first-order convex solvers:
//! vanilla Frank-Wolfe and two heavy-ball-momentum variants, specialized to
//! the averaged logistic loss over an L1, L2, or n-support norm ball. The
//! crate is a linkable numerical library; callers supply the dataset, an
//! initial feasible point, and configuration, and consume a per-iteration
//! loss trace.
//!
//! Key behaviors
//! -------------
//! - Expose the three drivers ([`fw`], [`wfw`], [`ufw`]) plus a typed
//!   entrypoint ([`run_frank_wolfe`]) that also returns the final iterate.
//! - Represent all vectors and matrices as `ndarray` containers over `f64`.
//! - Normalize configuration mistakes and numeric degeneracies into a single
//!   error enum ([`FwError`]) with a common result alias ([`FwResult`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - The caller guarantees that the initial point lies in the chosen
//!   constraint set; every subsequent iterate is a convex combination of the
//!   previous iterate and an extreme point of that set, so feasibility is
//!   preserved by construction.
//! - All heavy numerical work is pure and single-threaded; the crate performs
//!   no I/O and no logging.
//!
//! Downstream usage
//! ----------------
//! - Most callers import the curated surface via `frank_wolfe::prelude::*`
//!   or call the drivers re-exported at the crate root.

pub mod frank_wolfe;

pub use frank_wolfe::errors::{FwError, FwResult};
pub use frank_wolfe::run::{fw, run_frank_wolfe, ufw, wfw, FwOutcome, FwVariant};

/// Convenience prelude importing the main solver surface in a single line.
pub mod prelude {
    pub use crate::frank_wolfe::prelude::*;
}
