//! Trade selection service.
//!
//! Runs the pipeline: validate → build model → solve → extract. Failures are
//! reported as typed [`SelectionError`]s by [`TradeSelector::optimize`] and
//! collapse into the fallback basket only in [`TradeSelector::select`] and
//! [`TradeSelector::select_from`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, info, warn};

use super::model::SelectionModel;
use crate::domain::candidate::{validate_candidates, Candidate};
use crate::domain::fallback::fallback_basket;
use crate::domain::policy::SelectionPolicy;
use crate::domain::selection::{SelectedTrade, Selection};
use crate::error::SelectionError;
use crate::port::outbound::feature::{FeatureProvider, InstrumentQuery};
use crate::port::outbound::solver::{SolutionStatus, Solver};

/// Picks a fixed-size, sector-diversified, volatility-capped basket.
#[derive(Debug, Clone, Default)]
pub struct TradeSelector<S> {
    solver: S,
}

impl<S: Solver> TradeSelector<S> {
    pub const fn new(solver: S) -> Self {
        Self { solver }
    }

    pub const fn solver(&self) -> &S {
        &self.solver
    }

    /// Solve for the optimal selection.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] describing why no optimal selection
    /// exists. Panics inside the solver are caught and reported as
    /// [`SelectionError::Unexpected`].
    pub fn optimize(
        &self,
        candidates: &[Candidate],
        policy: &SelectionPolicy,
    ) -> Result<Vec<SelectedTrade>, SelectionError> {
        policy.validate().map_err(SelectionError::InvalidPolicy)?;
        validate_candidates(candidates)?;

        if candidates.len() < policy.max_trades {
            return Err(SelectionError::InsufficientCandidates {
                available: candidates.len(),
                required: policy.max_trades,
            });
        }

        panic::catch_unwind(AssertUnwindSafe(|| self.solve(candidates, policy)))
            .unwrap_or_else(|payload| Err(SelectionError::Unexpected(panic_message(&*payload))))
    }

    fn solve(
        &self,
        candidates: &[Candidate],
        policy: &SelectionPolicy,
    ) -> Result<Vec<SelectedTrade>, SelectionError> {
        let model = SelectionModel::build(candidates, policy);
        debug!(
            solver = self.solver.name(),
            candidates = model.num_candidates(),
            sectors = model.num_sectors(),
            gated = model.gated(),
            eligible = model.eligible(),
            max_trades = policy.max_trades,
            max_sectors = policy.max_sectors,
            max_volatility = %policy.max_volatility,
            "Built selection model"
        );

        let solution = self
            .solver
            .solve_ilp(model.problem())
            .map_err(|e| SelectionError::BackendUnavailable(e.to_string()))?;

        match solution.status {
            SolutionStatus::Optimal => {}
            SolutionStatus::Infeasible => return Err(SelectionError::Infeasible),
            SolutionStatus::Unbounded => return Err(SelectionError::Unbounded),
            SolutionStatus::TimeLimit => return Err(SelectionError::TimedOut),
            SolutionStatus::GapLimit => return Err(SelectionError::Unproven),
            SolutionStatus::Error => {
                return Err(SelectionError::BackendUnavailable(format!(
                    "{} reported an internal error",
                    self.solver.name()
                )))
            }
        }

        let trades = model.extract(&solution);
        if trades.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        if trades.len() != policy.max_trades {
            return Err(SelectionError::CardinalityMismatch {
                selected: trades.len(),
                required: policy.max_trades,
            });
        }
        if !model.is_feasible(&model.assignment(&solution)) {
            return Err(SelectionError::ConstraintViolation);
        }
        Ok(trades)
    }

    /// Select trades, degrading to the fallback basket on any failure.
    #[must_use]
    pub fn select(&self, candidates: &[Candidate], policy: &SelectionPolicy) -> Selection {
        match self.optimize(candidates, policy) {
            Ok(trades) => {
                let selection = Selection::optimal(trades);
                info!(
                    trades = selection.len(),
                    sectors = selection.sector_count(),
                    expected_return = %selection.total_expected_return(),
                    "Selected optimal trades"
                );
                selection
            }
            Err(err) => fallback_selection(&err),
        }
    }

    /// Fetch candidates from `provider`, then [`select`](Self::select).
    #[must_use]
    pub fn select_from<P: FeatureProvider + ?Sized>(
        &self,
        provider: &P,
        query: &InstrumentQuery,
        policy: &SelectionPolicy,
    ) -> Selection {
        let candidates = match panic::catch_unwind(AssertUnwindSafe(|| provider.candidates(query)))
        {
            Ok(Ok(candidates)) => candidates,
            Ok(Err(e)) => {
                return fallback_selection(&SelectionError::ProviderFailed(format!(
                    "{}: {e}",
                    provider.name()
                )))
            }
            Err(payload) => {
                return fallback_selection(&SelectionError::Unexpected(panic_message(&*payload)))
            }
        };

        debug!(
            provider = provider.name(),
            candidates = candidates.len(),
            "Fetched candidates"
        );
        self.select(&candidates, policy)
    }
}

/// Log `err` and return the fallback basket tagged with its reason.
#[must_use]
pub fn fallback_selection(err: &SelectionError) -> Selection {
    match err {
        SelectionError::BackendUnavailable(_)
        | SelectionError::ProviderFailed(_)
        | SelectionError::ConstraintViolation
        | SelectionError::Unexpected(_) => {
            error!(error = %err, "Trade selection failed, using fallback basket");
        }
        _ => {
            warn!(error = %err, "No optimal selection, using fallback basket");
        }
    }
    Selection::fallback(fallback_basket(), err.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
