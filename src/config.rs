use crate::policies::PolicyType;
use crate::report::CurveTransform;
use crate::simulation::ExperimentSettings;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub transform: CurveTransform,
    pub summary_window: usize,
    /// Write the JSON report here instead of stdout.
    pub output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            transform: CurveTransform::PerStep,
            summary_window: 100,
            output: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_policies() -> Vec<PolicyType> {
    vec![
        PolicyType::EpsilonGreedy { epsilon: 0.1 },
        PolicyType::Ucb { c: 2.0 },
    ]
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub experiment: ExperimentSettings,
    #[serde(default = "default_policies")]
    pub policies: Vec<PolicyType>,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            experiment: ExperimentSettings::default(),
            policies: default_policies(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read `config.{toml,json,yaml,..}` if present, then `APP__*` overrides,
    /// e.g. `APP__EXPERIMENT__RUNS=100` or `APP__EXPERIMENT__ARM_MEANS=0.1,0.9`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(File::with_name("config").required(false));
        Self::from_builder(builder)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::with_name(path)))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let builder = builder
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("experiment.arm_means"),
            )
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(source: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .unwrap()
    }

    #[test]
    fn empty_source_uses_defaults() {
        assert_eq!(from_toml(""), AppConfig::default());
    }

    #[test]
    fn defaults_match_reference_experiment() {
        let config = AppConfig::default();
        assert_eq!(config.experiment.arm_means, vec![0.6, 0.58, 0.55, 0.62]);
        assert_eq!(config.experiment.noise_scale, 0.05);
        assert_eq!(config.experiment.steps, 1000);
        assert_eq!(config.experiment.runs, 500);
        assert_eq!(config.policies.len(), 2);
    }

    #[test]
    fn parse_full_config() {
        let config = from_toml(
            r#"
            log_level = "debug"

            [experiment]
            arm_means = [0.6, 0.5, 0.1, 0.8]
            noise_scale = 0.05
            steps = 200
            runs = 20
            seed = 7

            [[policies]]
            type = "EpsilonGreedy"
            epsilon = 0.0

            [[policies]]
            type = "EpsilonGreedy"
            epsilon = 0.01

            [[policies]]
            type = "Ucb"
            c = 2.0

            [report]
            transform = "RunningAverage"
            summary_window = 50
            "#,
        );

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.experiment.arm_means, vec![0.6, 0.5, 0.1, 0.8]);
        assert_eq!(config.experiment.seed, Some(7));
        assert_eq!(
            config.policies,
            vec![
                PolicyType::EpsilonGreedy { epsilon: 0.0 },
                PolicyType::EpsilonGreedy { epsilon: 0.01 },
                PolicyType::Ucb { c: 2.0 },
            ]
        );
        assert_eq!(config.report.transform, CurveTransform::RunningAverage);
        assert_eq!(config.report.summary_window, 50);
        assert_eq!(config.report.output, None);
    }

    #[test]
    fn partial_experiment_keeps_other_defaults() {
        let config = from_toml(
            r#"
            [experiment]
            runs = 3
            "#,
        );
        assert_eq!(config.experiment.runs, 3);
        assert_eq!(config.experiment.steps, 1000);
        assert_eq!(config.policies.len(), 2);
    }
}
