pub mod aggregator;
pub mod trial;

pub use aggregator::{
    aggregate, aggregate_policy, AggregateCurve, CurveAccumulator, ExperimentSettings,
};
pub use trial::{run_epsilon_greedy, run_trial, run_ucb, RewardSequence};
