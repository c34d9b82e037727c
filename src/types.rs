//! Core data model: validated election parameters and vote tallies.

use thiserror::Error;

use crate::constants::{MAX_VOTERS, MIN_VOTERS};

/// Out-of-range (or unparseable) user input.
///
/// The `Display` text names the accepted range and doubles as the re-prompt
/// diagnostic printed by the boundary layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    #[error("enter a number between 1 and 10000")]
    VoterCountOutOfRange,
    #[error("enter a number between 0 to 1")]
    ErrorRateOutOfRange,
    #[error("enter a number between 0 to 1")]
    SpreadOutOfRange,
}

/// The three user-supplied simulation parameters. Immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectionParams {
    /// Electorate size, in `1..=10000`.
    pub voters: u32,
    /// True vote-share spread in A's favor, in (0, 1) exclusive.
    pub spread: f64,
    /// Per-ballot probability of the vote being recorded for the wrong
    /// candidate, in (0, 1) exclusive.
    pub error_rate: f64,
}

impl ElectionParams {
    /// Validate and construct. Ranges: voters `1..=10000`, spread and
    /// error rate strictly inside (0, 1).
    pub fn new(voters: u32, spread: f64, error_rate: f64) -> Result<Self, ParamError> {
        if !(MIN_VOTERS..=MAX_VOTERS).contains(&voters) {
            return Err(ParamError::VoterCountOutOfRange);
        }
        if !(spread > 0.0 && spread < 1.0) {
            return Err(ParamError::SpreadOutOfRange);
        }
        if !(error_rate > 0.0 && error_rate < 1.0) {
            return Err(ParamError::ErrorRateOutOfRange);
        }
        Ok(Self {
            voters,
            spread,
            error_rate,
        })
    }
}

/// Error-free vote counts, derived once from [`ElectionParams`].
///
/// `cand_a + cand_b` may undershoot `voters` by one: the two counts are
/// floored independently (see [`crate::split::clean_split`]). The spread is
/// always treated as A's advantage, so `cand_a >= cand_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanTally {
    pub cand_a: u32,
    pub cand_b: u32,
}

/// Perturbed vote counts for a single trial. Ephemeral: produced, checked
/// against the clean tally, and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    pub cand_a: u32,
    pub cand_b: u32,
}

impl TrialOutcome {
    /// Does this perturbed tally contradict the clean result?
    ///
    /// Inclusive comparisons on both sides, matching the original tie policy:
    /// a clean winner whose perturbed margin collapses to an exact tie counts
    /// as invalid, and a clean dead heat is invalid in every trial.
    pub fn invalidates(&self, clean: &CleanTally) -> bool {
        (clean.cand_a >= clean.cand_b && self.cand_b >= self.cand_a)
            || (clean.cand_a <= clean.cand_b && self.cand_b <= self.cand_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_accept_valid_ranges() {
        let p = ElectionParams::new(1000, 0.1, 0.3).unwrap();
        assert_eq!(p.voters, 1000);
        assert_eq!(p.spread, 0.1);
        assert_eq!(p.error_rate, 0.3);
        assert!(ElectionParams::new(1, 0.001, 0.999).is_ok());
        assert!(ElectionParams::new(10_000, 0.999, 0.001).is_ok());
    }

    #[test]
    fn params_reject_out_of_range() {
        assert_eq!(
            ElectionParams::new(0, 0.1, 0.3),
            Err(ParamError::VoterCountOutOfRange)
        );
        assert_eq!(
            ElectionParams::new(10_001, 0.1, 0.3),
            Err(ParamError::VoterCountOutOfRange)
        );
        assert_eq!(
            ElectionParams::new(1000, 0.0, 0.3),
            Err(ParamError::SpreadOutOfRange)
        );
        assert_eq!(
            ElectionParams::new(1000, 1.0, 0.3),
            Err(ParamError::SpreadOutOfRange)
        );
        assert_eq!(
            ElectionParams::new(1000, 0.1, 0.0),
            Err(ParamError::ErrorRateOutOfRange)
        );
        assert_eq!(
            ElectionParams::new(1000, 0.1, 1.0),
            Err(ParamError::ErrorRateOutOfRange)
        );
    }

    #[test]
    fn invalidates_uses_inclusive_comparisons() {
        let clean = CleanTally {
            cand_a: 550,
            cand_b: 450,
        };
        // Perturbed A still ahead: valid.
        let ahead = TrialOutcome {
            cand_a: 540,
            cand_b: 460,
        };
        assert!(!ahead.invalidates(&clean));
        // Perturbed B ahead: invalid.
        let flipped = TrialOutcome {
            cand_a: 460,
            cand_b: 540,
        };
        assert!(flipped.invalidates(&clean));
        // Perturbed exact tie: invalid (the clean winner's margin is gone).
        let tie = TrialOutcome {
            cand_a: 500,
            cand_b: 500,
        };
        assert!(tie.invalidates(&clean));
    }

    #[test]
    fn clean_dead_heat_is_always_invalid() {
        let clean = CleanTally {
            cand_a: 5,
            cand_b: 5,
        };
        for (a, b) in [(10, 0), (0, 10), (5, 5), (6, 4)] {
            let outcome = TrialOutcome {
                cand_a: a,
                cand_b: b,
            };
            assert!(outcome.invalidates(&clean), "outcome {a}/{b}");
        }
    }
}
