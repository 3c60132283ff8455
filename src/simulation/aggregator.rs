use super::trial::{run_trial, RewardSequence};

use crate::errors::SimulationError;
use crate::policies::rng::{SeedSequence, TrialRng};
use crate::policies::PolicyType;
use crate::rewards::GaussianArms;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Parameters shared by every policy in one experiment.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExperimentSettings {
    pub arm_means: Vec<f64>,
    pub noise_scale: f64,
    pub steps: usize,
    pub runs: usize,
    pub seed: Option<u64>,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            arm_means: vec![0.6, 0.58, 0.55, 0.62],
            noise_scale: 0.05,
            steps: 1000,
            runs: 500,
            seed: None,
        }
    }
}

impl ExperimentSettings {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.steps == 0 {
            return Err(SimulationError::NoSteps);
        }
        if self.runs == 0 {
            return Err(SimulationError::NoRuns);
        }
        GaussianArms::new(&self.arm_means, self.noise_scale).map(|_| ())
    }

    pub fn arms(&self) -> Result<GaussianArms, SimulationError> {
        GaussianArms::new(&self.arm_means, self.noise_scale)
    }
}

/// Element-wise mean of `runs` reward sequences.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregateCurve {
    values: Vec<f64>,
    runs: usize,
}

impl AggregateCurve {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Running element-wise sum of reward sequences.
///
/// Sequences are folded in as they arrive and then dropped. Two partial sums can
/// be merged, so trials may be split across workers.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveAccumulator {
    sums: Vec<f64>,
    runs: usize,
}

impl CurveAccumulator {
    pub fn new(steps: usize) -> Self {
        Self {
            sums: vec![0.0; steps],
            runs: 0,
        }
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn add(&mut self, rewards: &[f64]) -> Result<(), SimulationError> {
        if rewards.len() != self.sums.len() {
            return Err(SimulationError::CurveLengthMismatch {
                expected: self.sums.len(),
                actual: rewards.len(),
            });
        }

        self.sums
            .iter_mut()
            .zip(rewards)
            .for_each(|(sum, reward)| *sum += reward);
        self.runs += 1;

        Ok(())
    }

    pub fn merge(mut self, other: CurveAccumulator) -> Result<Self, SimulationError> {
        if other.sums.len() != self.sums.len() {
            return Err(SimulationError::CurveLengthMismatch {
                expected: self.sums.len(),
                actual: other.sums.len(),
            });
        }

        self.sums
            .iter_mut()
            .zip(other.sums)
            .for_each(|(sum, partial)| *sum += partial);
        self.runs += other.runs;

        Ok(self)
    }

    pub fn finish(self) -> Result<AggregateCurve, SimulationError> {
        if self.runs == 0 {
            return Err(SimulationError::NoRuns);
        }

        let runs = self.runs;
        let values = self.sums.into_iter().map(|sum| sum / runs as f64).collect();

        Ok(AggregateCurve { values, runs })
    }
}

/// Run `simulate` `runs` times, each with its own random stream, and average
/// the resulting reward sequences step by step.
pub fn aggregate<F>(
    steps: usize,
    runs: usize,
    seeds: &mut SeedSequence,
    mut simulate: F,
) -> Result<AggregateCurve, SimulationError>
where
    F: FnMut(&mut TrialRng) -> Result<RewardSequence, SimulationError>,
{
    if steps == 0 {
        return Err(SimulationError::NoSteps);
    }
    if runs == 0 {
        return Err(SimulationError::NoRuns);
    }

    let mut accumulator = CurveAccumulator::new(steps);
    for run in 0..runs {
        let mut rng = seeds.next_rng();
        let rewards = simulate(&mut rng)?;
        accumulator.add(&rewards)?;
        debug!(run, "Completed trial");
    }

    accumulator.finish()
}

/// Aggregate curve of `policy_type` under `settings`.
///
/// Parameters are validated before the first step; every trial builds a fresh
/// policy so no estimate crosses a trial boundary.
pub fn aggregate_policy(
    policy_type: &PolicyType,
    settings: &ExperimentSettings,
) -> Result<AggregateCurve, SimulationError> {
    settings.validate()?;
    policy_type.validate()?;

    let arms = settings.arms()?;
    let min_steps = policy_type.build(arms.len())?.min_steps();
    if settings.steps < min_steps {
        return Err(SimulationError::NotEnoughSteps {
            steps: settings.steps,
            arms: arms.len(),
        });
    }

    let mut seeds = SeedSequence::new(settings.seed);
    info!(
        policy = %policy_type,
        arms = arms.len(),
        steps = settings.steps,
        runs = settings.runs,
        seed = ?seeds.seed(),
        "Aggregating trials"
    );

    let curve = aggregate(settings.steps, settings.runs, &mut seeds, |rng| {
        let mut policy = policy_type.build(arms.len())?;
        let rewards = run_trial(policy.as_mut(), &arms, settings.steps, rng)?;
        debug!(
            policy = %policy_type,
            pulls = ?policy.stats().arms.iter().map(|arm| arm.pulls).collect::<Vec<_>>(),
            "Trial finished"
        );
        Ok(rewards)
    })?;

    info!(policy = %policy_type, runs = curve.runs(), "Aggregation complete");
    Ok(curve)
}
