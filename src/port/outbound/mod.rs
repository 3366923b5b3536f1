//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the selector's infrastructure dependencies: the
//! source of instrument features and the optimization backend.

pub mod feature;
pub mod solver;
