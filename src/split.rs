//! Split calculator: (voters, spread) → clean vote counts.

use crate::types::{CleanTally, ElectionParams};

/// Derive the error-free vote split from the electorate size and spread.
///
/// `cand_a = floor(voters/2 + spread*voters/2)` and
/// `cand_b = floor(voters/2 - spread*voters/2)`, both in f64.
///
/// The two floors are taken independently, so `cand_a + cand_b` can come up
/// one short of `voters` (e.g. voters=1001, spread=0.1 gives 550 + 450). The
/// drift is deliberate: the split formula is kept exactly as specified rather
/// than renormalized.
pub fn clean_split(params: &ElectionParams) -> CleanTally {
    let half = params.voters as f64 / 2.0;
    let lead = params.spread * params.voters as f64 / 2.0;
    CleanTally {
        cand_a: (half + lead).floor() as u32,
        cand_b: (half - lead).floor() as u32,
    }
}
