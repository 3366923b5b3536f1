//! Trade selection model.
//!
//! Translates candidates and a [`SelectionPolicy`] into a 0/1 integer program:
//!
//! ```text
//! maximize    sum(x_i * r_i)
//! subject to  sum(x_i)            == max_trades
//!             x_i <= s_sector(i)         for each candidate with a known sector
//!             sum(s_k)            <= max_sectors
//!             x_i == 0                   for each candidate with v_i > max_volatility
//!             x_i, s_k in {0, 1}
//! ```
//!
//! Volatility is a hard gate, never a term of the objective. Candidates in
//! the `"Unknown"` sector have no indicator and do not count toward the
//! sector budget.
//!
//! Variables are laid out as candidates first (input order), then sector
//! indicators in lexicographic order. The solver port minimizes, so the
//! objective is emitted negated.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::candidate::Candidate;
use crate::domain::constraint::Constraint;
use crate::domain::id::Sector;
use crate::domain::policy::SelectionPolicy;
use crate::domain::selection::SelectedTrade;
use crate::port::outbound::solver::{IlpProblem, LpProblem, LpSolution};

/// Threshold above which a relaxed binary value counts as selected.
const SELECTED_THRESHOLD: Decimal = rust_decimal_macros::dec!(0.5);

/// A built selection model over borrowed candidates.
#[derive(Debug)]
pub struct SelectionModel<'a> {
    candidates: &'a [Candidate],
    /// Sector -> variable index.
    sectors: BTreeMap<Sector, usize>,
    gated: usize,
    problem: IlpProblem,
}

impl<'a> SelectionModel<'a> {
    /// Build the integer program for `candidates` under `policy`.
    #[must_use]
    pub fn build(candidates: &'a [Candidate], policy: &SelectionPolicy) -> Self {
        let n = candidates.len();

        let mut sectors = BTreeMap::new();
        for candidate in candidates.iter().filter(|c| !c.sector.is_unknown()) {
            sectors.entry(candidate.sector.clone()).or_insert(0);
        }
        for (offset, index) in sectors.values_mut().enumerate() {
            *index = n + offset;
        }

        let num_vars = n + sectors.len();
        let mut lp = LpProblem::new(num_vars);

        for (i, candidate) in candidates.iter().enumerate() {
            lp.objective[i] = -candidate.expected_return;
        }

        // Exact cardinality
        let terms: Vec<(usize, Decimal)> = (0..n).map(|i| (i, Decimal::ONE)).collect();
        lp.constraints.push(Constraint::eq(
            Constraint::row(num_vars, &terms),
            Decimal::from(policy.max_trades),
        ));

        // Sector linkage: x_i - s_k <= 0
        for (i, candidate) in candidates.iter().enumerate() {
            if let Some(&k) = sectors.get(&candidate.sector) {
                lp.constraints.push(Constraint::leq(
                    Constraint::row(num_vars, &[(i, Decimal::ONE), (k, -Decimal::ONE)]),
                    Decimal::ZERO,
                ));
            }
        }

        // Sector budget
        if !sectors.is_empty() {
            let terms: Vec<(usize, Decimal)> =
                sectors.values().map(|&k| (k, Decimal::ONE)).collect();
            lp.constraints.push(Constraint::leq(
                Constraint::row(num_vars, &terms),
                Decimal::from(policy.max_sectors),
            ));
        }

        // Volatility gate
        let mut gated = 0;
        for (i, candidate) in candidates.iter().enumerate() {
            if !candidate.within_volatility(policy.max_volatility) {
                lp.constraints.push(Constraint::eq(
                    Constraint::row(num_vars, &[(i, Decimal::ONE)]),
                    Decimal::ZERO,
                ));
                gated += 1;
            }
        }

        Self {
            candidates,
            sectors,
            gated,
            problem: IlpProblem::all_binary(lp),
        }
    }

    /// The integer program to hand to a solver.
    #[must_use]
    pub const fn problem(&self) -> &IlpProblem {
        &self.problem
    }

    /// Number of candidate selection variables.
    #[must_use]
    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Number of known-sector indicator variables.
    #[must_use]
    pub fn num_sectors(&self) -> usize {
        self.sectors.len()
    }

    /// Number of candidates excluded by the volatility gate.
    #[must_use]
    pub const fn gated(&self) -> usize {
        self.gated
    }

    /// Candidates left selectable after the volatility gate.
    #[must_use]
    pub fn eligible(&self) -> usize {
        self.candidates.len() - self.gated
    }

    /// Variable index of a sector's indicator, if it has one.
    #[must_use]
    pub fn sector_index(&self, sector: &Sector) -> Option<usize> {
        self.sectors.get(sector).copied()
    }

    /// Read the selected candidates out of a solution.
    #[must_use]
    pub fn extract(&self, solution: &LpSolution) -> Vec<SelectedTrade> {
        self.candidates
            .iter()
            .zip(&solution.values)
            .filter(|(_, value)| **value > SELECTED_THRESHOLD)
            .map(|(candidate, _)| SelectedTrade::from(candidate))
            .collect()
    }

    /// Round every variable of a solution to 0 or 1.
    #[must_use]
    pub fn assignment(&self, solution: &LpSolution) -> Vec<Decimal> {
        solution
            .values
            .iter()
            .map(|value| {
                if *value > SELECTED_THRESHOLD {
                    Decimal::ONE
                } else {
                    Decimal::ZERO
                }
            })
            .collect()
    }

    /// Check a full variable assignment against every constraint.
    #[must_use]
    pub fn is_feasible(&self, values: &[Decimal]) -> bool {
        values.len() == self.problem.lp.num_vars()
            && self
                .problem
                .lp
                .constraints
                .iter()
                .all(|c| c.is_satisfied(values))
    }
}
