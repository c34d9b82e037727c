//! # Elections — vote-error Monte Carlo simulator
//!
//! Estimates the probability that independent per-ballot recording errors flip
//! the outcome of a two-candidate election. Given an electorate size, the true
//! vote-share spread between the candidates, and a per-vote error probability,
//! the simulation:
//!
//! 1. Builds the error-free ("clean") vote split — [`split::clean_split`].
//! 2. Runs [`constants::NUM_TRIALS`] independent trials; in each trial every
//!    ballot is re-recorded with probability `error_rate` of landing on the
//!    wrong candidate — [`simulation::engine`].
//! 3. Reports the percentage of trials whose perturbed tally contradicts the
//!    clean winner ("invalid elections").
//!
//! | Component | Module | Share of work |
//! |-----------|--------|---------------|
//! | Split calculator | [`split`] | one-shot, derives the clean tally |
//! | Trial runner | [`simulation`] | the repeated-trial loop |
//! | Prompt boundary | [`prompt`] | interactive input with re-prompting |
//!
//! Trials are embarrassingly parallel (each ballot draw is independent), so
//! [`simulation::engine::simulate_batch`] fans them out with rayon, one
//! deterministically-seeded `SmallRng` per trial. The caller owns the base
//! seed, which makes every run reproducible under test.

pub mod constants;
pub mod prompt;
pub mod simulation;
pub mod split;
pub mod types;
