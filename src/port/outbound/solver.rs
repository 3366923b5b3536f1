//! Solver port for integer linear programming.
//!
//! Defines the trait the trade selector uses to solve its 0/1 selection
//! model, independent of the backend.
//!
//! # Overview
//!
//! - [`Solver`]: Core ILP solver interface
//! - [`LpProblem`] / [`IlpProblem`]: Problem definitions
//! - [`LpSolution`]: Solution representation

use rust_decimal::Decimal;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Integer linear programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, etc.) and
/// provide a unified interface for optimization problems.
///
/// # Implementation Notes
///
/// - Solve to proven optimality; report anything else through
///   [`SolutionStatus`]
/// - A call is a single synchronous attempt with no retained state
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve an integer linear programming problem.
    ///
    /// Minimizes the objective function with integer constraints on specified
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend itself cannot be built or run.
    /// Infeasibility and time limits are reported through
    /// [`LpSolution::status`].
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    ///
    /// The solver minimizes `c^T * x` where `c` is this vector.
    pub objective: Vec<Decimal>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new LP problem with the specified number of variables.
    ///
    /// Initializes all objective coefficients to zero and all variable bounds
    /// to their defaults.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Integer linear programming problem definition.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    ///
    /// Variables not in this list are continuous (relaxed).
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP with all variables constrained to binary (0 or 1) values.
    ///
    /// Overrides every variable's bounds with [`VariableBounds::binary`].
    #[must_use]
    pub fn all_binary(mut lp: LpProblem) -> Self {
        lp.bounds = vec![VariableBounds::binary(); lp.num_vars()];
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }
}

/// Solution to an integer programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Values for each decision variable. Meaningful only when optimal.
    pub values: Vec<Decimal>,

    /// Objective function value (in the solver's minimization sense).
    pub objective: Decimal,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Build a non-optimal solution carrying only a status.
    #[must_use]
    pub fn with_status(num_vars: usize, status: SolutionStatus) -> Self {
        Self {
            values: vec![Decimal::ZERO; num_vars],
            objective: Decimal::ZERO,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// The wall-clock budget ran out before optimality was proven.
    TimeLimit,

    /// The solver stopped on a gap or work limit with an unproven incumbent.
    GapLimit,

    /// Solver encountered an internal error.
    Error,
}
