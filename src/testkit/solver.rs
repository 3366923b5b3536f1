//! Scripted solver and provider stand-ins.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::candidate::Candidate;
use crate::error::{Error, Result};
use crate::port::outbound::feature::{FeatureProvider, InstrumentQuery};
use crate::port::outbound::solver::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// Solver that reports a fixed status with all-zero values.
#[derive(Debug, Clone, Copy)]
pub struct StatusSolver(pub SolutionStatus);

impl Solver for StatusSolver {
    fn name(&self) -> &'static str {
        "status"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        Ok(LpSolution::with_status(problem.lp.num_vars(), self.0))
    }
}

/// Solver whose backend cannot be reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSolver;

impl Solver for FailingSolver {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn solve_ilp(&self, _problem: &IlpProblem) -> Result<LpSolution> {
        Err(Error::Solver("backend not installed".to_string()))
    }
}

/// Solver that panics on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingSolver;

impl Solver for PanickingSolver {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn solve_ilp(&self, _problem: &IlpProblem) -> Result<LpSolution> {
        panic!("solver crashed")
    }
}

/// Wraps a solver and counts calls.
#[derive(Debug, Default)]
pub struct CountingSolver<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S> CountingSolver<S> {
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: Solver> Solver for CountingSolver<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.solve_ilp(problem)
    }
}

/// Provider that always fails with a parse error.
#[derive(Debug, Clone, Default)]
pub struct FailingProvider {
    pub message: String,
}

impl FailingProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FeatureProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn candidates(&self, _query: &InstrumentQuery) -> Result<Vec<Candidate>> {
        Err(Error::Parse(self.message.clone()))
    }
}
