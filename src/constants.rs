//! Simulation constants and input ranges.

/// Number of simulated elections per run.
///
/// Compiled-in constant: the interactive program always runs exactly this many
/// trials. [`crate::simulation::engine::simulate_batch`] takes the count as a
/// parameter so sweeps and tests can vary it.
pub const NUM_TRIALS: u32 = 500;

/// Smallest accepted electorate size.
pub const MIN_VOTERS: u32 = 1;

/// Largest accepted electorate size.
pub const MAX_VOTERS: u32 = 10_000;
