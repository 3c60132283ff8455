use super::arm::Arm;
use super::argmax;
use super::policy::{Policy, PolicyStats};
use super::rng::TrialRng;

use crate::errors::SimulationError;

#[derive(Clone, Debug)]
pub struct Ucb {
    arms: Vec<Arm>,
    c: f64,
}

impl Ucb {
    pub fn new(num_arms: usize, c: f64) -> Result<Self, SimulationError> {
        if num_arms == 0 {
            return Err(SimulationError::NoArms);
        }
        if !c.is_finite() || c < 0.0 {
            return Err(SimulationError::InvalidExplorationConstant(c));
        }

        Ok(Self {
            arms: vec![Arm::new(0.0); num_arms],
            c,
        })
    }

    /// Upper confidence bound of every arm at 1-indexed step `step`.
    ///
    /// Only meaningful once each arm has been pulled.
    fn scores(&self, step: usize) -> impl Iterator<Item = f64> + '_ {
        let ln_t = (step as f64).ln();
        self.arms
            .iter()
            .map(move |arm| arm.value + self.c * (ln_t / arm.pulls as f64).sqrt())
    }
}

impl Policy for Ucb {
    fn min_steps(&self) -> usize {
        self.arms.len()
    }

    fn select(&mut self, step: usize, _rng: &mut TrialRng) -> usize {
        // forced initialization: every arm once, in index order
        if let Some(arm_id) = self.arms.iter().position(|arm| arm.pulls == 0) {
            return arm_id;
        }

        argmax(self.scores(step)).unwrap_or_default()
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
