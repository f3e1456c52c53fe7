//! Gaussian elimination stages
//!
//! - [`forward_eliminate`]: reduction to upper-triangular form with zero-pivot repair
//! - [`backward_substitute`]: solution of the reduced system
//! - [`EliminationController`]: runs both stages on one system and keeps the trace

mod backward;
mod controller;
mod forward;

pub use backward::backward_substitute;
pub use controller::{EliminationController, SolveState};
pub use forward::forward_eliminate;
