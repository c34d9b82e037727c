//! Trial simulation.
//!
//! - [`engine`]: Core simulation (perturb every ballot N times, count flips)

pub mod engine;

// Re-export commonly used items
pub use engine::{simulate_batch, simulate_trial, SimulationResult};
