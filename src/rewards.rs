use crate::errors::SimulationError;

use rand::Rng;
use rand_distr::{Distribution, Normal};

fn check_noise_scale(noise_scale: f64) -> Result<(), SimulationError> {
    if noise_scale.is_finite() && noise_scale >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidNoiseScale(noise_scale))
    }
}

/// Draw one reward from N(true_mean, noise_scale^2).
pub fn sample<R: Rng + ?Sized>(
    true_mean: f64,
    noise_scale: f64,
    rng: &mut R,
) -> Result<f64, SimulationError> {
    // `Normal::new` only rejects a non-finite deviation
    check_noise_scale(noise_scale)?;
    let normal = Normal::new(true_mean, noise_scale)
        .map_err(|_| SimulationError::InvalidNoiseScale(noise_scale))?;

    Ok(normal.sample(rng))
}

/// Fixed set of Gaussian arms sharing one noise scale.
#[derive(Clone, Debug)]
pub struct GaussianArms {
    means: Vec<f64>,
    noise_scale: f64,
}

impl GaussianArms {
    pub fn new(means: &[f64], noise_scale: f64) -> Result<Self, SimulationError> {
        if means.is_empty() {
            return Err(SimulationError::NoArms);
        }
        check_noise_scale(noise_scale)?;
        if let Some((arm_id, &mean)) = means
            .iter()
            .enumerate()
            .find(|(_, mean)| !mean.is_finite())
        {
            return Err(SimulationError::InvalidArmMean { arm_id, mean });
        }

        Ok(Self {
            means: means.to_vec(),
            noise_scale,
        })
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Index of the arm with the highest true mean, lowest index on ties.
    pub fn best_arm(&self) -> usize {
        crate::policies::argmax(self.means.iter().copied()).unwrap_or_default()
    }

    pub fn pull<R: Rng + ?Sized>(
        &self,
        arm_id: usize,
        rng: &mut R,
    ) -> Result<f64, SimulationError> {
        let mean = self
            .means
            .get(arm_id)
            .ok_or(SimulationError::ArmNotFound(arm_id))?;

        sample(*mean, self.noise_scale, rng)
    }
}
