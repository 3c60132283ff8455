/// Per-arm bookkeeping for one trial: pull count, reward total and the mean estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    pub(super) value: f64,
    pub(super) pulls: u64,
    pub(super) rewards: f64,
}

impl Arm {
    pub fn new(initial_value: f64) -> Self {
        Self {
            value: initial_value,
            pulls: 0,
            rewards: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn pulls(&self) -> u64 {
        self.pulls
    }

    // the estimate is always total / count, never an incremental update
    pub fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.rewards += reward;
        self.value = self.rewards / self.pulls as f64;
    }

    pub fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            rewards: self.rewards,
            mean_reward: self.value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArmStats {
    pub pulls: u64,
    pub rewards: f64,
    pub mean_reward: f64,
}
