use bandit_sim::config::AppConfig;
use bandit_sim::errors::{AppError, ReportError};
use bandit_sim::report::{JsonReporter, NamedCurve, Reporter, SummaryReporter};
use bandit_sim::simulation::aggregate_policy;

use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(log_level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}

fn main() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::from_env()?,
    };
    init_logging(&config.log_level)?;

    config.experiment.validate()?;
    config
        .policies
        .iter()
        .try_for_each(|policy_type| policy_type.validate())?;

    info!(
        arms = ?config.experiment.arm_means,
        noise_scale = config.experiment.noise_scale,
        policies = config.policies.len(),
        "Starting experiment"
    );

    let curves = config
        .policies
        .iter()
        .map(|policy_type| {
            aggregate_policy(policy_type, &config.experiment)
                .map(|curve| NamedCurve::new(policy_type.to_string(), curve.into_values()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    SummaryReporter::new(config.report.summary_window).report(&curves)?;

    let transform = config.report.transform;
    let curves: Vec<NamedCurve> = curves
        .into_iter()
        .map(|curve| NamedCurve::new(curve.label, transform.apply(&curve.values)))
        .collect();

    match &config.report.output {
        Some(path) => {
            let file = File::create(path).map_err(ReportError::from)?;
            JsonReporter::new(BufWriter::new(file), transform).report(&curves)?;
            info!(path = ?path, "Report written");
        }
        None => JsonReporter::new(io::stdout().lock(), transform).report(&curves)?,
    }

    Ok(())
}
