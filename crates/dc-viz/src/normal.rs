use dc_core::{
    DistributionFamily, EVALUATION_SCHEMA_VERSION, Error, EvaluationResult, NormalQuery, Result,
    SeriesPoint,
};
use dc_prob::math::linspace;
use dc_prob::normal;
use serde::{Deserialize, Serialize};

use crate::{format_number, format_probability};

/// Sampling grid for the Normal plotting window.
///
/// The window spans `mean ± half_width_sigmas * stddev`; the default of four
/// standard deviations covers more than 99.99% of the mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalGrid {
    /// Half-width of the plotting window in units of `stddev`.
    pub half_width_sigmas: f64,
    /// Number of samples for both the curve and the highlighted area.
    pub points: usize,
}

/// Upper bound on [`NormalGrid::points`].
pub const MAX_GRID_POINTS: usize = 100_000;

impl Default for NormalGrid {
    fn default() -> Self {
        Self { half_width_sigmas: 4.0, points: 1000 }
    }
}

impl NormalGrid {
    /// Check that the grid can produce a drawable curve.
    pub fn validate(&self) -> Result<()> {
        if !self.half_width_sigmas.is_finite() || self.half_width_sigmas <= 0.0 {
            return Err(Error::Validation(format!(
                "window half-width must be finite and > 0, got {}",
                self.half_width_sigmas
            )));
        }
        if !(2..=MAX_GRID_POINTS).contains(&self.points) {
            return Err(Error::Validation(format!(
                "number of grid points must be in 2..={MAX_GRID_POINTS}, got {}",
                self.points
            )));
        }
        Ok(())
    }
}

/// Evaluate `P(lower <= X <= upper)` with the default grid.
pub fn evaluate_normal(query: &NormalQuery) -> Result<EvaluationResult> {
    evaluate_normal_with(query, &NormalGrid::default())
}

/// Evaluate `P(lower <= X <= upper)` and sample the density on `grid`.
pub fn evaluate_normal_with(query: &NormalQuery, grid: &NormalGrid) -> Result<EvaluationResult> {
    grid.validate()?;
    let (mu, sigma) = (query.mean(), query.stddev());
    let (a, b) = (query.lower(), query.upper());

    let probability = normal::interval_probability(a, b, mu, sigma)?;

    let half = grid.half_width_sigmas * sigma;
    if !((mu - half).is_finite() && (mu + half).is_finite() && (2.0 * half).is_finite()) {
        return Err(Error::Validation(format!(
            "plot window mean \u{00B1} {}\u{03C3} overflows for mean={} stddev={}",
            format_number(grid.half_width_sigmas),
            format_number(mu),
            format_number(sigma)
        )));
    }
    let series = sample_pdf(&linspace(mu - half, mu + half, grid.points), mu, sigma)?;
    let highlight_series = sample_pdf(&linspace(a, b, grid.points), mu, sigma)?;

    let label = format!(
        "P({} \u{2264} X \u{2264} {}) = {}",
        format_number(a),
        format_number(b),
        format_probability(probability)
    );
    tracing::debug!(mu, sigma, lower = a, upper = b, probability, "normal evaluated");

    Ok(EvaluationResult {
        schema_version: EVALUATION_SCHEMA_VERSION.to_string(),
        family: DistributionFamily::Normal,
        probability,
        label,
        title: format!(
            "Normal distribution N(\u{03BC}={}, \u{03C3}={}): area between a and b",
            format_number(mu),
            format_number(sigma)
        ),
        series,
        highlight_series,
    })
}

fn sample_pdf(xs: &[f64], mu: f64, sigma: f64) -> Result<Vec<SeriesPoint>> {
    xs.iter()
        .map(|&x| {
            let y = normal::pdf(x, mu, sigma)?;
            if !(x.is_finite() && y.is_finite()) {
                return Err(Error::Computation(format!("non-finite density sample at x={x}")));
            }
            Ok(SeriesPoint::new(x, y))
        })
        .collect()
}
