//! Raw text in, rendered and saved result out.

use std::path::PathBuf;

use anyhow::Result;
use dc_core::{BinomialQuery, EvaluationResult, NormalQuery};
use dc_viz::NormalGrid;
use dc_viz_render::config::VizConfig;

use crate::store::ArtifactStore;

/// Unparsed Normal form fields.
#[derive(Debug, Clone, Default)]
pub struct NormalInput {
    pub mean: String,
    pub stddev: String,
    pub lower: String,
    pub upper: String,
}

/// Unparsed Binomial form fields.
#[derive(Debug, Clone, Default)]
pub struct BinomialInput {
    pub trials: String,
    pub success_prob: String,
    pub target_count: String,
}

/// Validate and evaluate a Normal interval query.
pub fn evaluate_normal(input: &NormalInput, grid: &NormalGrid) -> dc_core::Result<EvaluationResult> {
    let query = NormalQuery::parse(&input.mean, &input.stddev, &input.lower, &input.upper)?;
    dc_viz::evaluate_normal_with(&query, grid)
}

/// Validate and evaluate a Binomial point query.
pub fn evaluate_binomial(input: &BinomialInput) -> dc_core::Result<EvaluationResult> {
    let query = BinomialQuery::parse(&input.trials, &input.success_prob, &input.target_count)?;
    dc_viz::evaluate_binomial(&query)
}

/// An evaluation plus where its image went, if anywhere.
#[derive(Debug)]
pub struct Presented {
    pub result: EvaluationResult,
    pub saved: Option<PathBuf>,
}

impl Presented {
    /// Label line followed by the saved path.
    pub fn summary(&self) -> String {
        match &self.saved {
            Some(path) => format!("{}\nImage saved to: {}", self.result.label, path.display()),
            None => self.result.label.clone(),
        }
    }
}

/// Renders results with one config and saves them into one store.
pub struct Presenter {
    config: VizConfig,
    format: String,
    store: Option<ArtifactStore>,
}

impl Presenter {
    /// `store = None` renders nothing and saves nothing.
    pub fn new(config: VizConfig, format: impl Into<String>, store: Option<ArtifactStore>) -> Self {
        Self { config, format: format.into(), store }
    }

    pub fn present(&self, result: EvaluationResult) -> Result<Presented> {
        let Some(store) = &self.store else {
            return Ok(Presented { result, saved: None });
        };
        let bytes = dc_viz_render::render_to_bytes(&result, &self.format, &self.config)?;
        let path = store.save(result.family, &self.format, &bytes)?;
        Ok(Presented { result, saved: Some(path) })
    }
}
