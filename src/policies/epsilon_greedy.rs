use super::arm::Arm;
use super::argmax;
use super::policy::{Policy, PolicyStats};
use super::rng::TrialRng;

use crate::errors::SimulationError;

use rand::Rng;

/// Optimistic starting estimate for every arm.
pub const INITIAL_VALUE: f64 = 0.5;

#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    arms: Vec<Arm>,
    epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(num_arms: usize, epsilon: f64) -> Result<Self, SimulationError> {
        if num_arms == 0 {
            return Err(SimulationError::NoArms);
        }
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(SimulationError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            arms: vec![Arm::new(INITIAL_VALUE); num_arms],
            epsilon,
        })
    }
}

impl Policy for EpsilonGreedy {
    fn select(&mut self, _step: usize, rng: &mut TrialRng) -> usize {
        if rng.random::<f64>() > self.epsilon {
            argmax(self.arms.iter().map(|arm| arm.value)).unwrap_or_default()
        } else {
            // the current best arm stays a candidate
            rng.random_range(0..self.arms.len())
        }
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), SimulationError> {
        self.arms
            .get_mut(arm_id)
            .ok_or(SimulationError::ArmNotFound(arm_id))?
            .update(reward);

        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(|arm| arm.stats()).collect(),
        }
    }
}
