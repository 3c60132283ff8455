use crate::errors::SimulationError;
use crate::policies::epsilon_greedy::EpsilonGreedy;
use crate::policies::rng::TrialRng;
use crate::policies::ucb::Ucb;
use crate::policies::Policy;
use crate::rewards::GaussianArms;

use tracing::trace;

/// Per-step rewards of one trial, in step order.
pub type RewardSequence = Vec<f64>;

/// Run `policy` against `arms` for `steps` steps.
///
/// The policy is expected to be freshly built; its tables are left in their
/// end-of-trial state so callers can inspect `policy.stats()`.
pub fn run_trial(
    policy: &mut dyn Policy,
    arms: &GaussianArms,
    steps: usize,
    rng: &mut TrialRng,
) -> Result<RewardSequence, SimulationError> {
    if steps == 0 {
        return Err(SimulationError::NoSteps);
    }
    if steps < policy.min_steps() {
        return Err(SimulationError::NotEnoughSteps {
            steps,
            arms: arms.len(),
        });
    }

    (1..=steps)
        .map(|step| {
            let arm_id = policy.select(step, rng);
            let reward = arms.pull(arm_id, rng)?;
            policy.update(arm_id, reward)?;
            trace!(step, arm_id, reward, "Pulled arm");

            Ok(reward)
        })
        .collect()
}

pub fn run_epsilon_greedy(
    arm_means: &[f64],
    noise_scale: f64,
    epsilon: f64,
    steps: usize,
    rng: &mut TrialRng,
) -> Result<RewardSequence, SimulationError> {
    let arms = GaussianArms::new(arm_means, noise_scale)?;
    let mut policy = EpsilonGreedy::new(arms.len(), epsilon)?;

    run_trial(&mut policy, &arms, steps, rng)
}

pub fn run_ucb(
    arm_means: &[f64],
    noise_scale: f64,
    c: f64,
    steps: usize,
    rng: &mut TrialRng,
) -> Result<RewardSequence, SimulationError> {
    let arms = GaussianArms::new(arm_means, noise_scale)?;
    let mut policy = Ucb::new(arms.len(), c)?;

    run_trial(&mut policy, &arms, steps, rng)
}
