use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Random stream owned by a single trial. Coin flips, uniform arm choices and
/// reward noise are all drawn from it.
pub type TrialRng = SmallRng;

/// Hands out one independent `TrialRng` per trial.
///
/// With a seed the whole sequence of trial streams is reproducible; without one
/// the master stream is seeded from OS entropy.
#[derive(Debug)]
pub struct SeedSequence {
    seed: Option<u64>,
    rng: SmallRng,
}

impl SeedSequence {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn next_rng(&mut self) -> TrialRng {
        SmallRng::seed_from_u64(self.rng.random::<u64>())
    }
}
