//! Mathematical constraint types for optimization.
//!
//! These types represent linear constraints used by the selection model and
//! the solver interface.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single linear constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Coefficients for each variable.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a <= constraint.
    #[must_use]
    pub const fn leq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub const fn eq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Build a dense coefficient row over `num_vars` variables from sparse
    /// `(index, coefficient)` terms.
    #[must_use]
    pub fn row(num_vars: usize, terms: &[(usize, Decimal)]) -> Vec<Decimal> {
        let mut coefficients = vec![Decimal::ZERO; num_vars];
        for &(index, coefficient) in terms {
            coefficients[index] += coefficient;
        }
        coefficients
    }

    /// Evaluate the left-hand side for the given variable values.
    #[must_use]
    pub fn lhs(&self, values: &[Decimal]) -> Decimal {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, v)| *c * *v)
            .sum()
    }

    /// Return true if `values` satisfy this constraint.
    #[must_use]
    pub fn is_satisfied(&self, values: &[Decimal]) -> bool {
        let lhs = self.lhs(values);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs >= self.rhs,
            ConstraintSense::LessEqual => lhs <= self.rhs,
            ConstraintSense::Equal => lhs == self.rhs,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn row_places_sparse_terms() {
        let row = Constraint::row(4, &[(1, dec!(1)), (3, dec!(-1))]);
        assert_eq!(row, vec![dec!(0), dec!(1), dec!(0), dec!(-1)]);
    }

    #[test]
    fn satisfaction_respects_sense() {
        let c = Constraint::leq(vec![dec!(1), dec!(1)], dec!(1));
        assert!(c.is_satisfied(&[dec!(1), dec!(0)]));
        assert!(!c.is_satisfied(&[dec!(1), dec!(1)]));

        let c = Constraint::eq(vec![dec!(1), dec!(1)], dec!(2));
        assert!(c.is_satisfied(&[dec!(1), dec!(1)]));
        assert!(!c.is_satisfied(&[dec!(0), dec!(1)]));
    }
}
