//! Monte-Carlo comparison of ε-greedy and UCB arm selection on Gaussian bandits.
//!
//! Each policy is run for many independent trials; the per-step rewards are
//! averaged into one curve per policy and handed to a [`report::Reporter`].

pub mod config;
pub mod errors;
pub mod policies;
pub mod report;
pub mod rewards;
pub mod simulation;
