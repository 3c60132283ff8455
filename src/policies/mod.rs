pub mod arm;
pub mod epsilon_greedy;
mod policy;
pub mod rng;
pub mod ucb;

pub use policy::{Policy, PolicyStats, PolicyType};

/// Index of the first maximum, `None` for an empty input.
///
/// NaN never displaces an existing maximum.
pub fn argmax<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, value)| match best {
            Some((_, current)) if value > current || current.is_nan() => Some((idx, value)),
            Some(_) => best,
            None => Some((idx, value)),
        })
        .map(|(idx, _)| idx)
}
