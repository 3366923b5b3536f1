//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (quote catalogs, optimization backends).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────┐                                         ┌───────────┐
//! │ Feature  │                                         │  Solver   │
//! │ Provider │                                         │  Adapter  │
//! └──────────┘                                         └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`FeatureProvider`] - Scored instrument candidates
//! - [`Solver`] - ILP optimization backend

pub mod outbound;

pub use outbound::feature::{AssetCategory, FeatureProvider, InstrumentQuery};
pub use outbound::solver::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};
