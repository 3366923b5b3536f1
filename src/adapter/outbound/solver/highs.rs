//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::time::Duration;

use good_lp::solvers::highs::highs;
use good_lp::solvers::SolutionStatus as BackendStatus;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::constraint::ConstraintSense;
use crate::error::Result;
use crate::port::outbound::solver::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// Default wall-clock budget for a single solve.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Tightest dual feasibility tolerance HiGHS accepts.
const DUAL_TOLERANCE: f64 = 1e-10;

/// HiGHS-based ILP solver.
#[derive(Debug, Clone)]
pub struct HiGHSSolver {
    time_limit: Duration,
}

impl Default for HiGHSSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance with the default time limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Set the wall-clock budget for each solve.
    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub const fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        solve_with_good_lp(problem, self.time_limit)
    }
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &IlpProblem, time_limit: Duration) -> Result<LpSolution> {
    let lp = &problem.lp;
    let n = lp.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Optimal,
        });
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in lp.bounds.iter().enumerate() {
        let mut v = variable();

        if let Some(lb) = bounds.lower {
            v = v.min(lb.to_f64().unwrap_or(0.0));
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
        }

        if problem.integer_vars.contains(&i) {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    let objective: Expression = var_list
        .iter()
        .zip(lp.objective.iter())
        .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
        .sum();

    // Zero gaps: a reported optimum must be a proven optimum. Returns that
    // differ in the eighth decimal place still have to be told apart.
    let mut model = vars
        .minimise(&objective)
        .using(highs)
        .set_option("mip_rel_gap", 0.0)
        .set_option("mip_abs_gap", 0.0)
        .set_option("dual_feasibility_tolerance", DUAL_TOLERANCE)
        .set_option("time_limit", time_limit.as_secs_f64());

    for constr in &lp.constraints {
        let lhs: Expression = var_list
            .iter()
            .zip(constr.coefficients.iter())
            .filter(|(_, c)| !c.is_zero())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        let rhs = constr.rhs.to_f64().unwrap_or(0.0);

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    match model.solve() {
        Ok(solution) => {
            let status = backend_status(solution.status());
            debug!(
                vars = n,
                constraints = lp.constraints.len(),
                status = ?status,
                "HiGHS solve finished"
            );
            if status != SolutionStatus::Optimal {
                return Ok(LpSolution::with_status(n, status));
            }

            let values: Vec<Decimal> = var_list
                .iter()
                .map(|v| Decimal::try_from(solution.value(*v)).unwrap_or(Decimal::ZERO))
                .collect();

            // Re-evaluate objective with the solved values
            let objective: Decimal = values
                .iter()
                .zip(lp.objective.iter())
                .map(|(v, c)| *v * *c)
                .sum();

            Ok(LpSolution {
                values,
                objective,
                status,
            })
        }
        Err(ResolutionError::Infeasible) => {
            Ok(LpSolution::with_status(n, SolutionStatus::Infeasible))
        }
        Err(ResolutionError::Unbounded) => {
            Ok(LpSolution::with_status(n, SolutionStatus::Unbounded))
        }
        Err(e) => {
            debug!(error = %e, "HiGHS reported an internal error");
            Ok(LpSolution::with_status(n, SolutionStatus::Error))
        }
    }
}

/// Map the backend's termination reason for a solve that produced values.
///
/// Only a proven optimum is `Optimal`; stopping on a limit or on a MIP gap
/// leaves an unproven incumbent.
fn backend_status(status: BackendStatus) -> SolutionStatus {
    match status {
        BackendStatus::Optimal => SolutionStatus::Optimal,
        BackendStatus::TimeLimit => SolutionStatus::TimeLimit,
        _ => SolutionStatus::GapLimit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraint::Constraint;
    use crate::port::outbound::solver::LpProblem;
    use rust_decimal_macros::dec;

    #[test]
    fn test_solver_name() {
        let solver = HiGHSSolver::new();
        assert_eq!(solver.name(), "highs");
        assert_eq!(solver.time_limit(), DEFAULT_TIME_LIMIT);
    }

    #[test]
    fn test_binary_ilp() {
        // Minimize: -x - 2y (maximize x + 2y)
        // Subject to: x + y <= 1
        //            x, y in {0, 1}
        let solver = HiGHSSolver::new();

        let mut lp = LpProblem::new(2);
        lp.objective = vec![-Decimal::ONE, dec!(-2)];
        lp.constraints = vec![Constraint::leq(vec![Decimal::ONE, Decimal::ONE], Decimal::ONE)];

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values[0].abs() < dec!(0.01), "x should be 0");
        assert!((solution.values[1] - Decimal::ONE).abs() < dec!(0.01), "y should be 1");
        assert!((solution.objective + dec!(2)).abs() < dec!(0.01));
    }

    #[test]
    fn test_equality_cardinality() {
        // Pick exactly two of three, maximizing value.
        let solver = HiGHSSolver::new();

        let mut lp = LpProblem::new(3);
        lp.objective = vec![dec!(-0.03), dec!(-0.01), dec!(-0.02)];
        lp.constraints = vec![Constraint::eq(vec![Decimal::ONE; 3], dec!(2))];

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values[0] > dec!(0.5));
        assert!(solution.values[1] < dec!(0.5));
        assert!(solution.values[2] > dec!(0.5));
    }

    #[test]
    fn test_infeasible_reports_status() {
        // x + y == 3 with binary x, y
        let solver = HiGHSSolver::new();

        let mut lp = LpProblem::new(2);
        lp.constraints = vec![Constraint::eq(vec![Decimal::ONE, Decimal::ONE], dec!(3))];

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert!(!solution.is_optimal());
    }

    #[test]
    fn test_backend_status_mapping() {
        assert_eq!(
            backend_status(BackendStatus::Optimal),
            SolutionStatus::Optimal
        );
        assert_eq!(
            backend_status(BackendStatus::TimeLimit),
            SolutionStatus::TimeLimit
        );
        assert_eq!(
            backend_status(BackendStatus::GapLimit),
            SolutionStatus::GapLimit
        );
    }

    #[test]
    fn test_zero_time_limit_is_not_optimal() {
        // 60 binaries, pick 20 under a cap on every block of ten
        let n = 60;
        let mut lp = LpProblem::new(n);
        for (i, c) in lp.objective.iter_mut().enumerate() {
            *c = -Decimal::new(1000 + ((i * 37) % 101) as i64, 6);
        }
        lp.constraints.push(Constraint::eq(vec![Decimal::ONE; n], dec!(20)));
        for block in 0..6 {
            let terms: Vec<(usize, Decimal)> =
                (block * 10..block * 10 + 10).map(|i| (i, Decimal::ONE)).collect();
            lp.constraints
                .push(Constraint::leq(Constraint::row(n, &terms), dec!(4)));
        }

        let solver = HiGHSSolver::new().with_time_limit(Duration::ZERO);
        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert_ne!(solution.status, SolutionStatus::Optimal);
        assert!(!solution.is_optimal());
    }

    #[test]
    fn test_tiny_objective_differences_are_resolved() {
        // Values differ by 1e-8, far below the default absolute MIP gap.
        let solver = HiGHSSolver::new();
        let n = 10;
        let mut lp = LpProblem::new(n);
        for (i, c) in lp.objective.iter_mut().enumerate() {
            *c = -(dec!(0.01) + Decimal::new(i as i64, 8));
        }
        lp.constraints.push(Constraint::eq(vec![Decimal::ONE; n], dec!(5)));

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert!(solution.is_optimal());
        let picked: Vec<usize> = (0..n).filter(|&i| solution.values[i] > dec!(0.5)).collect();
        assert_eq!(picked, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_empty_problem() {
        let solver = HiGHSSolver::new();
        let problem = IlpProblem::all_binary(LpProblem::new(0));
        let solution = solver.solve_ilp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values.is_empty());
    }
}
