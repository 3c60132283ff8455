use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("At least one arm is required")]
    NoArms,
    #[error("Arm {arm_id} has a non-finite mean {mean}")]
    InvalidArmMean { arm_id: usize, mean: f64 },
    #[error("Noise scale must be finite and non-negative, got {0}")]
    InvalidNoiseScale(f64),
    #[error("Epsilon must lie in [0, 1], got {0}")]
    InvalidEpsilon(f64),
    #[error("Exploration constant must be finite and non-negative, got {0}")]
    InvalidExplorationConstant(f64),
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Step budget must be positive")]
    NoSteps,
    #[error("Number of runs must be positive")]
    NoRuns,
    #[error("UCB needs at least one step per arm: {steps} steps for {arms} arms")]
    NotEnoughSteps { steps: usize, arms: usize },
    #[error("Reward sequence has length {actual}, expected {expected}")]
    CurveLengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
