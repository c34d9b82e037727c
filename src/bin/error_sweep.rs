//! Flip-rate sweep over a grid of error probabilities.
//!
//! Runs the batch simulation at a fixed electorate and spread for each error
//! rate in [`ERROR_RATES`] and prints a JSON report on stdout. Useful for
//! eyeballing how fast a given margin dissolves as recording noise grows.
//!
//! Usage: `error_sweep [--voters N] [--spread S] [--trials T] [--seed X]`

use std::time::Instant;

use serde::Serialize;

use elections::constants::NUM_TRIALS;
use elections::simulation::simulate_batch;
use elections::split::clean_split;
use elections::types::ElectionParams;

/// Error-rate grid: dense near zero where the flip rate takes off, plus
/// points approaching the 0.5 coin-flip ceiling.
const ERROR_RATES: &[f64] = &[
    0.01, 0.02, 0.05, 0.10, 0.15, 0.20, 0.25, 0.30, 0.35, 0.40, 0.45, 0.49,
];

#[derive(Serialize)]
struct SweepRow {
    error_rate: f64,
    invalid_trials: u32,
    invalid_pct: f64,
}

#[derive(Serialize)]
struct SweepReport {
    voters: u32,
    spread: f64,
    cand_a_clean: u32,
    cand_b_clean: u32,
    trials: u32,
    seed: u64,
    rows: Vec<SweepRow>,
}

fn parse_args() -> (u32, f64, u32, u64) {
    let args: Vec<String> = std::env::args().collect();
    let mut voters = 1000u32;
    let mut spread = 0.01f64;
    let mut trials = NUM_TRIALS;
    let mut seed = 42u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--voters" => {
                i += 1;
                if i < args.len() {
                    voters = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --voters value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--spread" => {
                i += 1;
                if i < args.len() {
                    spread = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --spread value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--trials" => {
                i += 1;
                if i < args.len() {
                    trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            other => {
                eprintln!("Unknown argument: {other}");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (voters, spread, trials, seed)
}

fn main() {
    let (voters, spread, trials, seed) = parse_args();

    // Any in-range error rate validates; the sweep substitutes its own grid.
    let params = ElectionParams::new(voters, spread, 0.5).unwrap_or_else(|err| {
        eprintln!("Invalid parameters: {err}");
        std::process::exit(1);
    });
    let clean = clean_split(&params);

    eprintln!(
        "Sweeping {} error rates: voters={voters} spread={spread} clean={}:{} trials={trials} seed={seed}",
        ERROR_RATES.len(),
        clean.cand_a,
        clean.cand_b,
    );

    let start = Instant::now();
    let rows: Vec<SweepRow> = ERROR_RATES
        .iter()
        .map(|&error_rate| {
            let result = simulate_batch(&clean, error_rate, trials, seed);
            SweepRow {
                error_rate,
                invalid_trials: result.invalid_trials,
                invalid_pct: result.invalid_pct,
            }
        })
        .collect();
    eprintln!("Sweep finished in {:.2?}", start.elapsed());

    let report = SweepReport {
        voters,
        spread,
        cand_a_clean: clean.cand_a,
        cand_b_clean: clean.cand_b,
        trials,
        seed,
        rows,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize report: {err}");
            std::process::exit(1);
        }
    }
}
