//! Interactive election-error simulator.
//!
//! Asks for the electorate size, the per-vote error percentage, and the
//! vote-share spread, then reports the chance of the recorded outcome
//! contradicting the true winner over [`NUM_TRIALS`] simulated elections.

use std::io;

use rand::Rng;

use elections::constants::NUM_TRIALS;
use elections::prompt::read_params;
use elections::simulation::simulate_batch;
use elections::split::clean_split;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let params = match read_params(&mut input, &mut out) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            std::process::exit(1);
        }
    };

    let clean = clean_split(&params);
    // Seeded once per run; tests inject fixed seeds through simulate_batch.
    let seed: u64 = rand::rng().random();
    let result = simulate_batch(&clean, params.error_rate, NUM_TRIALS, seed);

    println!(
        "Chance of invalid elections after {NUM_TRIALS} trials = {}%",
        result.invalid_pct
    );
}
