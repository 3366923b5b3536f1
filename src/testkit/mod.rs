//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for candidates and candidate pools.
//! - [`solver`] - Scripted [`Solver`](crate::port::outbound::solver::Solver)
//!   and [`FeatureProvider`](crate::port::outbound::feature::FeatureProvider)
//!   stand-ins for driving the fallback paths.

pub mod domain;
pub mod solver;
