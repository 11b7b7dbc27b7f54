pub mod canvas;
pub mod color;
pub mod config;
pub mod font;
pub mod header;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use std::path::Path;

use config::VizConfig;
use dc_core::{DistributionFamily, EvaluationResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("font error: {0}")]
    Font(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render an evaluation result to an SVG string.
pub fn render_svg(result: &EvaluationResult, config: &VizConfig) -> Result<String> {
    match result.family {
        DistributionFamily::Normal => plots::normal::render(result, config),
        DistributionFamily::Binomial => plots::binomial::render(result, config),
    }
}

/// Render an evaluation result to bytes in the specified format.
pub fn render_to_bytes(
    result: &EvaluationResult,
    format: &str,
    config: &VizConfig,
) -> Result<Vec<u8>> {
    let svg = render_svg(result, config)?;
    match format {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        other => Err(RenderError::UnknownFormat(other.to_string())),
    }
}

/// Render an evaluation result to a file (format inferred from extension).
pub fn render_to_file(result: &EvaluationResult, path: &Path, config: &VizConfig) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    let bytes = render_to_bytes(result, ext, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
