//! Selection domain: candidates, policy limits, results and the fallback
//! basket.

pub mod candidate;
pub mod constraint;
pub mod error;
pub mod fallback;
pub mod id;
pub mod policy;
pub mod selection;

pub use candidate::Candidate;
pub use id::{Sector, Symbol};
pub use policy::SelectionPolicy;
pub use selection::{SelectedTrade, Selection, SelectionSource};
