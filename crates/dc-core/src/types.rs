//! Common data types for distcalc

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Distribution family handled by one evaluation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionFamily {
    /// Continuous Normal distribution.
    Normal,
    /// Discrete Binomial distribution.
    Binomial,
}

impl DistributionFamily {
    /// Stable lowercase name, used in file names and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionFamily::Normal => "normal",
            DistributionFamily::Binomial => "binomial",
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "n" => Ok(DistributionFamily::Normal),
            "binomial" | "b" => Ok(DistributionFamily::Binomial),
            other => Err(Error::Validation(format!("unknown distribution family: '{other}'"))),
        }
    }
}

/// Single `(x, y)` sample of a density or mass function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Abscissa.
    pub x: f64,
    /// Density (Normal) or probability mass (Binomial) at `x`.
    pub y: f64,
}

impl SeriesPoint {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plot-friendly outcome of one evaluation.
///
/// Produced by an evaluator, consumed once by the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Schema identifier for the JSON form.
    pub schema_version: String,
    /// Distribution family that produced this result.
    pub family: DistributionFamily,
    /// Requested probability, in `[0, 1]`.
    pub probability: f64,
    /// Human-readable summary, e.g. `P(X = 5) = 0.2461`.
    pub label: String,
    /// Plot title describing the distribution parameters.
    pub title: String,
    /// Full curve (Normal) or full support (Binomial).
    pub series: Vec<SeriesPoint>,
    /// Queried sub-region, rendered distinctly.
    pub highlight_series: Vec<SeriesPoint>,
}

/// Schema identifier written into every [`EvaluationResult`].
pub const EVALUATION_SCHEMA_VERSION: &str = "distcalc_evaluation_v0";

impl EvaluationResult {
    /// Largest `y` across both series (0 for empty series).
    pub fn y_max(&self) -> f64 {
        self.series.iter().chain(self.highlight_series.iter()).map(|p| p.y).fold(0.0, f64::max)
    }

    /// Pretty JSON form.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a result previously written with [`EvaluationResult::to_json_pretty`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EvaluationResult {
        EvaluationResult {
            schema_version: EVALUATION_SCHEMA_VERSION.to_string(),
            family: DistributionFamily::Binomial,
            probability: 0.5,
            label: "P(X = 1) = 0.5000".into(),
            title: "Binomial distribution (n=1, p=0.5)".into(),
            series: vec![SeriesPoint::new(0.0, 0.5), SeriesPoint::new(1.0, 0.5)],
            highlight_series: vec![SeriesPoint::new(1.0, 0.5)],
        }
    }

    #[test]
    fn family_names() {
        assert_eq!(DistributionFamily::Normal.to_string(), "normal");
        assert_eq!("Binomial".parse::<DistributionFamily>().unwrap(), DistributionFamily::Binomial);
        assert_eq!("n".parse::<DistributionFamily>().unwrap(), DistributionFamily::Normal);
        assert!("poisson".parse::<DistributionFamily>().is_err());
    }

    #[test]
    fn json_uses_lowercase_family() {
        let json = sample().to_json_pretty().unwrap();
        assert!(json.contains("\"family\": \"binomial\""));
        assert_eq!(EvaluationResult::from_json(&json).unwrap(), sample());
    }

    #[test]
    fn y_max_covers_both_series() {
        assert_eq!(sample().y_max(), 0.5);
    }
}
