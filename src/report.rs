use crate::errors::ReportError;

use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;

/// View applied to per-step curves on their way out of the simulation.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum CurveTransform {
    #[default]
    PerStep,
    Cumulative,
    /// Cumulative reward divided by the number of steps so far.
    RunningAverage,
}

impl CurveTransform {
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        match self {
            CurveTransform::PerStep => values.to_vec(),
            CurveTransform::Cumulative => values
                .iter()
                .scan(0.0, |total, value| {
                    *total += value;
                    Some(*total)
                })
                .collect(),
            CurveTransform::RunningAverage => CurveTransform::Cumulative
                .apply(values)
                .into_iter()
                .enumerate()
                .map(|(idx, total)| total / (idx + 1) as f64)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedCurve {
    pub label: String,
    pub values: Vec<f64>,
}

impl NamedCurve {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Consumer of finished curves. Simulation output does not depend on it.
pub trait Reporter {
    fn report(&mut self, curves: &[NamedCurve]) -> Result<(), ReportError>;
}

#[derive(Serialize)]
struct Report<'a> {
    x_label: &'a str,
    y_label: &'a str,
    curves: &'a [NamedCurve],
}

/// Writes all curves as one JSON document, ready for an external plotter.
pub struct JsonReporter<W: Write> {
    writer: W,
    y_label: String,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W, transform: CurveTransform) -> Self {
        let y_label = match transform {
            CurveTransform::PerStep => "average reward",
            CurveTransform::Cumulative => "cumulative reward",
            CurveTransform::RunningAverage => "running average reward",
        };

        Self {
            writer,
            y_label: y_label.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, curves: &[NamedCurve]) -> Result<(), ReportError> {
        let report = Report {
            x_label: "step",
            y_label: &self.y_label,
            curves,
        };
        serde_json::to_writer(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurveSummary {
    pub label: String,
    pub steps: usize,
    pub tail_mean: Option<f64>,
    pub overall_mean: Option<f64>,
}

/// Mean over the last `window` values, `None` when there is nothing to average.
pub fn tail_mean(values: &[f64], window: usize) -> Option<f64> {
    let window = window.min(values.len());
    if window == 0 {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

pub fn summarize(curves: &[NamedCurve], window: usize) -> Vec<CurveSummary> {
    curves
        .iter()
        .map(|curve| CurveSummary {
            label: curve.label.clone(),
            steps: curve.values.len(),
            tail_mean: tail_mean(&curve.values, window),
            overall_mean: tail_mean(&curve.values, curve.values.len()),
        })
        .collect()
}

/// Logs the long-run mean of each per-step curve.
pub struct SummaryReporter {
    window: usize,
}

impl SummaryReporter {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Reporter for SummaryReporter {
    fn report(&mut self, curves: &[NamedCurve]) -> Result<(), ReportError> {
        summarize(curves, self.window).into_iter().for_each(|summary| {
            info!(
                label = %summary.label,
                steps = summary.steps,
                window = self.window,
                tail_mean = ?summary.tail_mean,
                overall_mean = ?summary.overall_mean,
                "Curve summary"
            );
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_step_is_identity() {
        let values = vec![0.5, 0.25, 1.0];
        assert_eq!(CurveTransform::PerStep.apply(&values), values);
    }

    #[test]
    fn cumulative() {
        assert_eq!(
            CurveTransform::Cumulative.apply(&[1.0, 2.0, 3.0]),
            vec![1.0, 3.0, 6.0]
        );
        assert!(CurveTransform::Cumulative.apply(&[]).is_empty());
    }

    #[test]
    fn running_average() {
        assert_eq!(
            CurveTransform::RunningAverage.apply(&[1.0, 3.0, 2.0, 6.0]),
            vec![1.0, 2.0, 2.0, 3.0]
        );
    }

    #[test]
    fn json_report() {
        let curves = vec![
            NamedCurve::new("UCB (c=2)", vec![0.5, 0.75]),
            NamedCurve::new("ε-greedy (ε=0.1)", vec![0.25, 1.0]),
        ];
        let mut reporter = JsonReporter::new(Vec::new(), CurveTransform::PerStep);
        assert!(reporter.report(&curves).is_ok());

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["x_label"], "step");
        assert_eq!(parsed["y_label"], "average reward");
        assert_eq!(parsed["curves"][0]["label"], "UCB (c=2)");
        assert_eq!(parsed["curves"][1]["values"][1], 1.0);
    }

    #[test]
    fn tail_mean_window() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(tail_mean(&values, 2), Some(3.5));
        assert_eq!(tail_mean(&values, 10), Some(2.5));
        assert_eq!(tail_mean(&values, 0), None);
        assert_eq!(tail_mean(&[], 5), None);
    }

    #[test]
    fn summary_uses_tail_window() {
        let curves = vec![NamedCurve::new("a", vec![0.0, 0.0, 1.0, 1.0])];
        let summary = summarize(&curves, 2);
        assert_eq!(summary[0].tail_mean, Some(1.0));
        assert_eq!(summary[0].overall_mean, Some(0.5));
        assert_eq!(summary[0].steps, 4);

        let empty = summarize(&[NamedCurve::new("b", vec![])], 2);
        assert_eq!(empty[0].tail_mean, None);
    }

    #[test]
    fn summary_reporter_never_fails() {
        let curves = vec![NamedCurve::new("a", vec![0.5; 10])];
        assert!(SummaryReporter::new(100).report(&curves).is_ok());
    }
}
