//! frank_wolfe::errors — unified error surface for the solver stack.
//!
//! Purpose
//! -------
//! Normalize configuration mistakes, dataset/shape inconsistencies, and
//! numeric degeneracies into a single enum ([`FwError`]) with a common result
//! alias ([`FwResult`]), so higher-level code never has to pattern-match on
//! ad-hoc error types or inspect `NaN`s.
//!
//! Key behaviors
//! -------------
//! - Configuration errors (`UnsupportedStepSize`, `UnsupportedConstraint`,
//!   `InvalidRadius`, `SupportExceedsDim`) are raised at the boundary, before
//!   any gradient or objective evaluation.
//! - Dataset and iterate shape problems carry the expected/found dimensions
//!   so callers can diagnose mismatches without re-deriving them.
//! - Numeric degeneracies (`DegenerateDirection`, `NonFiniteLoss`) are
//!   reported as typed errors instead of silently propagating `NaN`.
//!
//! Conventions
//! -----------
//! - Variants use struct fields with a `&'static str` reason where a short
//!   human explanation helps; `Display` renders a one-line message.
//! - Public fallible entrypoints return `FwResult<T>`; this module and its
//!   siblings never intentionally panic in non-test code.

/// Crate-wide result alias for solver operations.
pub type FwResult<T> = Result<T, FwError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FwError {
    // ---- Configuration ----
    /// Unsupported step-size rule name.
    UnsupportedStepSize {
        name: String,
        reason: &'static str,
    },

    /// Unsupported constraint set name.
    UnsupportedConstraint {
        name: String,
        reason: &'static str,
    },

    /// Radius must be finite and strictly positive.
    InvalidRadius {
        value: f64,
        reason: &'static str,
    },

    /// n-support ball requires at least `support` coordinates.
    SupportExceedsDim {
        support: usize,
        dim: usize,
    },

    // ---- Dataset / shapes ----
    /// Feature matrix has zero rows or zero columns.
    EmptyDataset {
        n_data: usize,
        dim: usize,
    },

    /// Row count of the feature matrix does not match the label count.
    FeatureLabelDimMismatch {
        rows: usize,
        labels: usize,
    },

    /// Iterate length does not match the feature dimension.
    IterateDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Labels must be exactly -1.0 or +1.0.
    InvalidLabel {
        index: usize,
        value: f64,
    },

    // ---- Numeric degeneracies ----
    /// An exactly-zero direction was handed to an L2-scaled oracle.
    DegenerateDirection,

    /// The objective produced a non-finite value during the run.
    NonFiniteLoss {
        iteration: usize,
        value: f64,
    },
}

impl std::error::Error for FwError {}

impl std::fmt::Display for FwError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Configuration ----
            FwError::UnsupportedStepSize { name, reason } => {
                write!(f, "Unsupported step-size rule '{name}': {reason}")
            }
            FwError::UnsupportedConstraint { name, reason } => {
                write!(f, "Unsupported constraint set '{name}': {reason}")
            }
            FwError::InvalidRadius { value, reason } => {
                write!(f, "Invalid radius {value}: {reason}")
            }
            FwError::SupportExceedsDim { support, dim } => {
                write!(
                    f,
                    "n-support ball needs support <= dim, got support {support} with dim {dim}"
                )
            }

            // ---- Dataset / shapes ----
            FwError::EmptyDataset { n_data, dim } => {
                write!(f, "Empty dataset: {n_data} rows x {dim} columns")
            }
            FwError::FeatureLabelDimMismatch { rows, labels } => {
                write!(f, "Feature/label mismatch: {rows} feature rows, {labels} labels")
            }
            FwError::IterateDimMismatch { expected, found } => {
                write!(f, "Iterate dimension mismatch: expected {expected}, found {found}")
            }
            FwError::InvalidLabel { index, value } => {
                write!(f, "Invalid label at index {index}: {value} (labels must be -1.0 or +1.0)")
            }

            // ---- Numeric degeneracies ----
            FwError::DegenerateDirection => {
                write!(f, "Zero-norm direction passed to an L2-scaled linear minimization oracle")
            }
            FwError::NonFiniteLoss { iteration, value } => {
                write!(f, "Non-finite objective value {value} at iteration {iteration}")
            }
        }
    }
}
