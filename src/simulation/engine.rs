//! Trial runner — perturbs every ballot N times and counts flipped outcomes.
//!
//! Each trial re-records the full electorate: every ballot independently lands
//! on the wrong candidate with probability `error_rate` (a Bernoulli draw,
//! implemented as a uniform f64 in [0,1) compared against the rate). A trial
//! counts as an "invalid election" when the perturbed tally contradicts the
//! clean winner's direction, exact ties included (see
//! [`TrialOutcome::invalidates`]).
//!
//! Trials are independent, so [`simulate_batch`] runs them on the rayon pool
//! with one `SmallRng` per trial, seeded `base_seed + trial_index`. The
//! invalid count is an order-insensitive sum, so the parallel reduction is
//! exact; a fixed base seed reproduces the result bit-for-bit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

use crate::types::{CleanTally, TrialOutcome};

/// Results of a batch simulation.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Trials whose perturbed tally contradicted the clean winner.
    pub invalid_trials: u32,
    /// Total trials run.
    pub trials: u32,
    /// `100 * invalid_trials / trials`, in [0, 100].
    pub invalid_pct: f64,
    pub elapsed: std::time::Duration,
}

/// Re-record every ballot once with independent per-ballot error.
///
/// Ballots that were truly for A stay with A unless the error fires, in which
/// case they are recorded for B; symmetric for B's ballots.
pub fn simulate_trial(clean: &CleanTally, error_rate: f64, rng: &mut SmallRng) -> TrialOutcome {
    let mut skew_a = 0u32;
    let mut skew_b = 0u32;
    for _ in 0..clean.cand_a {
        if rng.random::<f64>() < error_rate {
            skew_b += 1;
        } else {
            skew_a += 1;
        }
    }
    for _ in 0..clean.cand_b {
        if rng.random::<f64>() < error_rate {
            skew_a += 1;
        } else {
            skew_b += 1;
        }
    }
    TrialOutcome {
        cand_a: skew_a,
        cand_b: skew_b,
    }
}

/// Run `trials` independent trials in parallel and aggregate the flip rate.
///
/// The caller owns `seed`; trial `i` uses `SmallRng::seed_from_u64(seed + i)`,
/// so results are reproducible for a fixed seed regardless of thread count.
pub fn simulate_batch(
    clean: &CleanTally,
    error_rate: f64,
    trials: u32,
    seed: u64,
) -> SimulationResult {
    let start = Instant::now();

    let invalid_trials: u32 = (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let outcome = simulate_trial(clean, error_rate, &mut rng);
            outcome.invalidates(clean) as u32
        })
        .sum();

    let elapsed = start.elapsed();

    let invalid_pct = if trials == 0 {
        0.0
    } else {
        100.0 * f64::from(invalid_trials) / f64::from(trials)
    };

    SimulationResult {
        invalid_trials,
        trials,
        invalid_pct,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_conserves_ballots() {
        let clean = CleanTally {
            cand_a: 550,
            cand_b: 450,
        };
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let outcome = simulate_trial(&clean, 0.3, &mut rng);
            assert_eq!(outcome.cand_a + outcome.cand_b, 1000);
        }
    }

    #[test]
    fn near_zero_error_barely_perturbs() {
        let clean = CleanTally {
            cand_a: 550,
            cand_b: 450,
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let outcome = simulate_trial(&clean, 1e-12, &mut rng);
        assert_eq!(outcome.cand_a, 550);
        assert_eq!(outcome.cand_b, 450);
    }

    #[test]
    fn batch_is_deterministic_for_fixed_seed() {
        let clean = CleanTally {
            cand_a: 505,
            cand_b: 495,
        };
        let a = simulate_batch(&clean, 0.3, 500, 1234);
        let b = simulate_batch(&clean, 0.3, 500, 1234);
        assert_eq!(a.invalid_trials, b.invalid_trials);
        assert_eq!(a.invalid_pct, b.invalid_pct);
    }

    #[test]
    fn zero_trials_yields_zero_pct() {
        let clean = CleanTally {
            cand_a: 550,
            cand_b: 450,
        };
        let result = simulate_batch(&clean, 0.3, 0, 0);
        assert_eq!(result.invalid_trials, 0);
        assert_eq!(result.invalid_pct, 0.0);
    }

    #[test]
    fn empty_electorate_is_a_dead_heat_every_trial() {
        // 0/0 clean tally satisfies both inclusive comparisons in every trial.
        let clean = CleanTally {
            cand_a: 0,
            cand_b: 0,
        };
        let result = simulate_batch(&clean, 0.3, 100, 9);
        assert_eq!(result.invalid_trials, 100);
        assert_eq!(result.invalid_pct, 100.0);
    }
}
