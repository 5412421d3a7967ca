//! frank_wolfe::constraint — norm-ball constraint sets and their linear
//! minimization oracles.
//!
//! Purpose
//! -------
//! Provide the three feasible sets the solvers support, each paired with its
//! linear minimization oracle (LMO): given a direction, return the extreme
//! point of the set minimizing the direction's linear functional. The set of
//! variants is closed; dispatch is an exhaustive match, so no fourth silent
//! case can exist.
//!
//! Key behaviors
//! -------------
//! - Parse user-facing constraint names case-insensitively into
//!   [`ConstraintType`]; unknown names return a typed configuration error.
//! - Construct validated [`Constraint`] values (finite positive radius;
//!   `dim >= n` for the n-support ball).
//! - Solve the Frank-Wolfe subproblem per variant via [`Constraint::fw_subprob`].
//! - Expose a membership predicate ([`Constraint::contains`]) for checking
//!   initial points and asserting the feasibility invariant in tests.
//!
//! Invariants & assumptions
//! ------------------------
//! - For any finite nonzero direction, the returned vertex lies on the ball's
//!   boundary; an exactly-zero direction handed to an L2-scaled oracle is
//!   rejected with [`FwError::DegenerateDirection`] rather than dividing by
//!   zero.
//! - Tie-breaks in index selection are deterministic: the first index (lowest
//!   position) achieving the maximum wins.
use crate::frank_wolfe::{
    errors::{FwError, FwResult},
    types::{Grad, Iterate, Vertex, DEFAULT_SUPPORT},
    validation::validate_radius,
};
use ndarray::Array1;
use std::cmp::Ordering;
use std::str::FromStr;

/// Choice of constraint set, parsed from a user-facing name.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"l1"`, `"l2"`, `"n_supp"`). Unknown names return
/// `FwError::UnsupportedConstraint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    L1,
    L2,
    NSupport,
}

impl FromStr for ConstraintType {
    type Err = FwError;

    /// Parse a constraint choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"l1"`
    /// - `"l2"`
    /// - `"n_supp"`
    /// - Any case variant (e.g., `"L1"`, `"N_SUPP"`).
    ///
    /// Any other value returns `FwError::UnsupportedConstraint` with a helpful
    /// message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l1" => Ok(ConstraintType::L1),
            "l2" => Ok(ConstraintType::L2),
            "n_supp" => Ok(ConstraintType::NSupport),
            _ => Err(FwError::UnsupportedConstraint {
                name: s.to_string(),
                reason: "Valid choices are case-insensitive 'l1', 'l2', and 'n_supp'.",
            }),
        }
    }
}

/// A norm-ball feasible set with its linear minimization oracle.
///
/// Exactly three variants exist:
/// - `L1Ball`: `||x||_1 <= radius`.
/// - `L2Ball`: `||x||_2 <= radius`.
/// - `NSupportBall`: convex hull of vectors with at most `support` nonzero
///   entries and `||x||_2 <= radius`; the drivers fix `support = 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    L1Ball { radius: f64 },
    L2Ball { radius: f64 },
    NSupportBall { radius: f64, support: usize },
}

impl Constraint {
    /// Build a validated constraint for a problem of dimension `dim`.
    ///
    /// The n-support variant uses the fixed support size
    /// [`DEFAULT_SUPPORT`]` = 2`.
    ///
    /// # Errors
    /// - [`FwError::InvalidRadius`] if `radius` is non-finite or <= 0.
    /// - [`FwError::SupportExceedsDim`] for the n-support ball when
    ///   `dim < DEFAULT_SUPPORT`.
    pub fn new(ty: ConstraintType, radius: f64, dim: usize) -> FwResult<Self> {
        validate_radius(radius)?;
        match ty {
            ConstraintType::L1 => Ok(Constraint::L1Ball { radius }),
            ConstraintType::L2 => Ok(Constraint::L2Ball { radius }),
            ConstraintType::NSupport => {
                if dim < DEFAULT_SUPPORT {
                    return Err(FwError::SupportExceedsDim { support: DEFAULT_SUPPORT, dim });
                }
                Ok(Constraint::NSupportBall { radius, support: DEFAULT_SUPPORT })
            }
        }
    }

    /// Ball radius `R`.
    pub fn radius(&self) -> f64 {
        match *self {
            Constraint::L1Ball { radius }
            | Constraint::L2Ball { radius }
            | Constraint::NSupportBall { radius, .. } => radius,
        }
    }

    /// Solve the Frank-Wolfe subproblem: the extreme point of the set
    /// minimizing `direction . v`.
    ///
    /// - L1 ball: `-sign(direction[i*]) * R` at the first index `i*` of
    ///   maximal `|direction|`, zero elsewhere.
    /// - L2 ball: `-direction * R / ||direction||_2`.
    /// - n-support ball: keep the `support` coordinates of largest absolute
    ///   value (first index wins ties), zero the rest, then scale as in the
    ///   L2 case.
    ///
    /// # Errors
    /// Returns [`FwError::DegenerateDirection`] when an L2-scaled variant
    /// receives an exactly-zero direction.
    pub fn fw_subprob(&self, direction: &Grad) -> FwResult<Vertex> {
        match *self {
            Constraint::L1Ball { radius } => Ok(l1_vertex(direction, radius)),
            Constraint::L2Ball { radius } => scale_to_boundary(direction.clone(), radius),
            Constraint::NSupportBall { radius, support } => {
                let truncated = truncate_to_support(direction, support);
                scale_to_boundary(truncated, radius)
            }
        }
    }

    /// Membership predicate, within an absolute tolerance.
    ///
    /// For the n-support ball, entries with `|x_i| <= tol` count as zero when
    /// checking the support constraint.
    pub fn contains(&self, x: &Iterate, tol: f64) -> bool {
        match *self {
            Constraint::L1Ball { radius } => {
                x.iter().map(|v| v.abs()).sum::<f64>() <= radius + tol
            }
            Constraint::L2Ball { radius } => x.dot(x).sqrt() <= radius + tol,
            Constraint::NSupportBall { radius, support } => {
                let nonzeros = x.iter().filter(|v| v.abs() > tol).count();
                nonzeros <= support && x.dot(x).sqrt() <= radius + tol
            }
        }
    }
}

/// L1-ball vertex: `+-R` at the first argmax of `|direction|`.
///
/// A zero coordinate at the argmax (only possible for the all-zero direction)
/// yields the zero vector, which is feasible but interior.
fn l1_vertex(direction: &Grad, radius: f64) -> Vertex {
    let mut best_idx = 0;
    let mut best_abs = f64::NEG_INFINITY;
    for (i, &d) in direction.iter().enumerate() {
        if d.abs() > best_abs {
            best_abs = d.abs();
            best_idx = i;
        }
    }
    let mut v = Array1::zeros(direction.len());
    let d = direction[best_idx];
    if d > 0.0 {
        v[best_idx] = -radius;
    } else if d < 0.0 {
        v[best_idx] = radius;
    }
    v
}

/// Scale `-direction` onto the L2 sphere of the given radius.
fn scale_to_boundary(direction: Grad, radius: f64) -> FwResult<Vertex> {
    let norm = direction.dot(&direction).sqrt();
    if norm == 0.0 {
        return Err(FwError::DegenerateDirection);
    }
    Ok(direction * (-radius / norm))
}

/// Zero out every coordinate except the `support` of largest absolute value.
///
/// Ordering is by descending `|direction_i|` with the lower index winning
/// ties, so selection is deterministic.
fn truncate_to_support(direction: &Grad, support: usize) -> Grad {
    let mut order: Vec<usize> = (0..direction.len()).collect();
    order.sort_by(|&a, &b| {
        direction[b]
            .abs()
            .partial_cmp(&direction[a].abs())
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    let mut truncated = Array1::zeros(direction.len());
    for &i in order.iter().take(support) {
        truncated[i] = direction[i];
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Case-insensitive parsing of constraint names and rejection of unknown
    //   names.
    // - Construction-time validation (radius, n-support vs dimension).
    // - Oracle outputs per variant, including the boundary property, the
    //   first-index tie-break, and the zero-direction rejection.
    // - The membership predicate per variant.
    //
    // They intentionally DO NOT cover:
    // - Driver-level behavior; that is exercised by run-level and integration
    //   tests.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // Verify that all three names parse case-insensitively and an unknown
    // name is rejected with `UnsupportedConstraint`.
    //
    // Expect
    // ------
    // - "L1", "l2", "N_Supp" parse to their variants.
    // - "bogus" returns `Err(FwError::UnsupportedConstraint { .. })`.
    fn constraint_type_parses_case_insensitively() {
        // Act / Assert
        assert_eq!("L1".parse::<ConstraintType>().unwrap(), ConstraintType::L1);
        assert_eq!("l2".parse::<ConstraintType>().unwrap(), ConstraintType::L2);
        assert_eq!("N_Supp".parse::<ConstraintType>().unwrap(), ConstraintType::NSupport);
        match "bogus".parse::<ConstraintType>() {
            Err(FwError::UnsupportedConstraint { name, .. }) => assert_eq!(name, "bogus"),
            other => panic!("expected UnsupportedConstraint error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure construction rejects a non-positive radius and an n-support
    // ball over a 1-dimensional problem.
    //
    // Expect
    // ------
    // - `Err(InvalidRadius)` for radius 0.
    // - `Err(SupportExceedsDim { support: 2, dim: 1 })` for n_supp with dim 1.
    // - `Ok` for n_supp with dim exactly 2.
    fn construction_validates_radius_and_support() {
        // Act / Assert
        match Constraint::new(ConstraintType::L2, 0.0, 3) {
            Err(FwError::InvalidRadius { .. }) => (),
            other => panic!("expected InvalidRadius error, got {other:?}"),
        }
        match Constraint::new(ConstraintType::NSupport, 1.0, 1) {
            Err(FwError::SupportExceedsDim { support: 2, dim: 1 }) => (),
            other => panic!("expected SupportExceedsDim error, got {other:?}"),
        }
        assert!(Constraint::new(ConstraintType::NSupport, 1.0, 2).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Check the L1 oracle on the worked example: direction [0.1, -0.9, 0.3]
    // with R = 1 must flip the sign at the argmax-abs coordinate.
    //
    // Expect
    // ------
    // - The vertex is exactly [0, 1, 0].
    fn l1_oracle_flips_sign_at_argmax() {
        // Arrange
        let constraint = Constraint::new(ConstraintType::L1, 1.0, 3).unwrap();
        let direction = array![0.1, -0.9, 0.3];

        // Act
        let v = constraint.fw_subprob(&direction).unwrap();

        // Assert
        assert_eq!(v, array![0.0, 1.0, 0.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the deterministic tie-break: when two coordinates share the
    // maximal absolute value, the first index wins.
    //
    // Given
    // -----
    // - direction [0.5, -0.5, 0.1] with R = 2.
    //
    // Expect
    // ------
    // - The vertex is [-2, 0, 0] (index 0, sign flipped).
    fn l1_oracle_breaks_ties_at_first_index() {
        // Arrange
        let constraint = Constraint::new(ConstraintType::L1, 2.0, 3).unwrap();
        let direction = array![0.5, -0.5, 0.1];

        // Act
        let v = constraint.fw_subprob(&direction).unwrap();

        // Assert
        assert_eq!(v, array![-2.0, 0.0, 0.0]);
    }

    #[test]
    // Purpose
    // -------
    // Check the L2 oracle boundary property on direction [3, 4] with R = 2:
    // the vertex must have norm exactly 2 and be antiparallel to the
    // direction.
    //
    // Expect
    // ------
    // - The vertex is [-1.2, -1.6].
    fn l2_oracle_returns_antiparallel_boundary_point() {
        // Arrange
        let constraint = Constraint::new(ConstraintType::L2, 2.0, 2).unwrap();
        let direction = array![3.0, 4.0];

        // Act
        let v = constraint.fw_subprob(&direction).unwrap();

        // Assert
        assert_relative_eq!(v[0], -1.2, epsilon = TOL);
        assert_relative_eq!(v[1], -1.6, epsilon = TOL);
        assert_relative_eq!(v.dot(&v).sqrt(), 2.0, epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // Ensure an exactly-zero direction into the L2 and n-support oracles is
    // rejected with `DegenerateDirection` instead of producing NaN.
    //
    // Expect
    // ------
    // - Both oracles return `Err(FwError::DegenerateDirection)`.
    fn l2_scaled_oracles_reject_zero_direction() {
        // Arrange
        let l2 = Constraint::new(ConstraintType::L2, 1.0, 3).unwrap();
        let n_supp = Constraint::new(ConstraintType::NSupport, 1.0, 3).unwrap();
        let zero = array![0.0, 0.0, 0.0];

        // Act / Assert
        for constraint in [l2, n_supp] {
            match constraint.fw_subprob(&zero) {
                Err(FwError::DegenerateDirection) => (),
                other => panic!("expected DegenerateDirection error, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the n-support oracle: it must keep the two coordinates of
    // largest absolute value, zero the rest, and scale onto the sphere.
    //
    // Given
    // -----
    // - direction [0.1, -0.9, 0.3] with R = 1; the top two coordinates by
    //   absolute value are indices 1 and 2.
    //
    // Expect
    // ------
    // - Index 0 of the vertex is zero.
    // - The vertex equals -[0, -0.9, 0.3] / ||[0, -0.9, 0.3]|| and has norm
    //   exactly 1.
    fn n_support_oracle_keeps_top_two_coordinates() {
        // Arrange
        let constraint = Constraint::new(ConstraintType::NSupport, 1.0, 3).unwrap();
        let direction = array![0.1, -0.9, 0.3];
        let norm = (0.9_f64 * 0.9 + 0.3 * 0.3).sqrt();

        // Act
        let v = constraint.fw_subprob(&direction).unwrap();

        // Assert
        assert_eq!(v[0], 0.0);
        assert_relative_eq!(v[1], 0.9 / norm, epsilon = TOL);
        assert_relative_eq!(v[2], -0.3 / norm, epsilon = TOL);
        assert_relative_eq!(v.dot(&v).sqrt(), 1.0, epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // Verify the membership predicate per variant, on points just inside and
    // just outside each ball.
    //
    // Expect
    // ------
    // - L1: [0.5, 0.4] is inside R = 1; [0.8, 0.4] is not.
    // - L2: [0.6, 0.8] is on the boundary of R = 1; [0.7, 0.8] is not inside.
    // - n-support: [0, 0.6, 0.8] is inside; [0.1, 0.6, 0.7] exceeds the
    //   support bound.
    fn contains_matches_each_ball_geometry() {
        // Arrange
        let l1 = Constraint::new(ConstraintType::L1, 1.0, 2).unwrap();
        let l2 = Constraint::new(ConstraintType::L2, 1.0, 2).unwrap();
        let n_supp = Constraint::new(ConstraintType::NSupport, 1.0, 3).unwrap();

        // Act / Assert
        assert!(l1.contains(&array![0.5, 0.4], TOL));
        assert!(!l1.contains(&array![0.8, 0.4], TOL));
        assert!(l2.contains(&array![0.6, 0.8], TOL));
        assert!(!l2.contains(&array![0.7, 0.8], TOL));
        assert!(n_supp.contains(&array![0.0, 0.6, 0.8], TOL));
        assert!(!n_supp.contains(&array![0.1, 0.6, 0.7], TOL));
    }
}
