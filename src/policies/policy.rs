use super::arm::ArmStats;
use super::epsilon_greedy::EpsilonGreedy;
use super::rng::TrialRng;
use super::ucb::Ucb;

use crate::errors::SimulationError;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct PolicyStats {
    pub arms: Vec<ArmStats>,
}

impl PolicyStats {
    pub fn total_pulls(&self) -> u64 {
        self.arms.iter().map(|arm| arm.pulls).sum()
    }
}

/// Action-selection rule plus the trial-local tables it owns.
pub trait Policy {
    /// Smallest step budget a trial with this policy accepts.
    fn min_steps(&self) -> usize {
        1
    }
    /// Choose an arm for `step`, the 1-indexed step number within the trial.
    fn select(&mut self, step: usize, rng: &mut TrialRng) -> usize;
    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), SimulationError>;
    fn stats(&self) -> PolicyStats;
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum PolicyType {
    EpsilonGreedy { epsilon: f64 },
    Ucb { c: f64 },
}

impl PolicyType {
    pub fn validate(&self) -> Result<(), SimulationError> {
        match *self {
            PolicyType::EpsilonGreedy { epsilon } => {
                if (0.0..=1.0).contains(&epsilon) {
                    Ok(())
                } else {
                    Err(SimulationError::InvalidEpsilon(epsilon))
                }
            }
            PolicyType::Ucb { c } => {
                if c.is_finite() && c >= 0.0 {
                    Ok(())
                } else {
                    Err(SimulationError::InvalidExplorationConstant(c))
                }
            }
        }
    }

    /// Fresh policy with empty tables for `num_arms` arms.
    pub fn build(&self, num_arms: usize) -> Result<Box<dyn Policy>, SimulationError> {
        match *self {
            PolicyType::EpsilonGreedy { epsilon } => {
                Ok(Box::new(EpsilonGreedy::new(num_arms, epsilon)?))
            }
            PolicyType::Ucb { c } => Ok(Box::new(Ucb::new(num_arms, c)?)),
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolicyType::EpsilonGreedy { epsilon } => write!(f, "ε-greedy (ε={})", epsilon),
            PolicyType::Ucb { c } => write!(f, "UCB (c={})", c),
        }
    }
}
