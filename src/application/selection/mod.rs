//! Trade selection use case.
//!
//! [`SelectionModel`] builds the 0/1 integer program; [`TradeSelector`]
//! solves it and applies the fallback policy.

mod model;
mod selector;

pub use model::SelectionModel;
pub use selector::{fallback_selection, TradeSelector};
