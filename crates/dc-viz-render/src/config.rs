use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use crate::RenderError;
use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Output formats understood by [`crate::render_to_bytes`].
pub const SUPPORTED_FORMATS: &[&str] = &["svg", "png"];

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
    pub legend: LegendConfig,
    pub output: OutputConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Classic.base_config()
    }
}

impl VizConfig {
    pub fn validate(&self) -> crate::Result<()> {
        let fig = &self.figure;
        if !(fig.width.is_finite() && fig.height.is_finite() && fig.width > 0.0 && fig.height > 0.0)
        {
            return Err(RenderError::Config(format!(
                "figure size must be positive, got {}x{}",
                fig.width, fig.height
            )));
        }
        if self.output.dpi == 0 || self.output.dpi > 1200 {
            return Err(RenderError::Config(format!(
                "output.dpi must be in 1..=1200, got {}",
                self.output.dpi
            )));
        }
        if !SUPPORTED_FORMATS.contains(&self.output.format.as_str()) {
            return Err(RenderError::Config(format!(
                "output.format must be one of {:?}, got '{}'",
                SUPPORTED_FORMATS, self.output.format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 576.0,  // 8" * 72
            height: 360.0, // 5" * 72
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub title_size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub legend_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { title_size: 12.0, label_size: 10.0, tick_size: 8.5, legend_size: 9.0 }
    }
}

/// Which side of the frame ticks are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: TickDirection,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub tick_length: f64,
    pub minor_tick_length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: TickDirection::Out,
            show_top_ticks: false,
            show_right_ticks: false,
            tick_length: 4.0,
            minor_tick_length: 2.0,
        }
    }
}

impl AxesConfig {
    pub fn ticks_outward(&self) -> bool {
        self.tick_direction == TickDirection::Out
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, color: Color::hex("#b0b0b0"), alpha: 0.6 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Normal density curve.
    pub curve: Color,
    /// Shaded area under the queried Normal interval.
    pub area: Color,
    /// Binomial bars outside the query.
    pub bars: Color,
    /// The queried Binomial bar.
    pub highlight_bar: Color,
    pub text: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            curve: Color::hex("#0000ff"),
            area: Color::hex("#87ceeb").with_alpha(0.5),
            bars: Color::hex("#90ee90"),
            highlight_bar: Color::hex("#008000"),
            text: Color::hex("#000000"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub show: bool,
    pub frame: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { show: true, frame: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: "png".into(), dpi: 100 }
    }
}

/// Resolve a VizConfig from an optional theme name and optional YAML string.
///
/// Priority: user YAML keys → theme base config. The theme is taken from
/// `theme` if given, else from the YAML `theme:` key, else the default.
pub fn resolve_config(theme: Option<&str>, user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    let user: Option<Value> = user_yaml
        .map(serde_yaml_ng::from_str)
        .transpose()
        .map_err(|e| RenderError::Config(e.to_string()))?;

    let theme_name = theme.map(str::to_string).or_else(|| {
        user.as_ref().and_then(|v| v.get("theme")).and_then(Value::as_str).map(str::to_string)
    });
    let base_theme = match theme_name {
        Some(name) => BuiltinTheme::parse(&name)
            .ok_or_else(|| RenderError::Config(format!("unknown theme: '{name}'")))?,
        None => BuiltinTheme::Classic,
    };

    let base = base_theme.base_config();
    let Some(user) = user else {
        return Ok(base);
    };

    let mut merged =
        serde_yaml_ng::to_value(&base).map_err(|e| RenderError::Config(e.to_string()))?;
    merge_yaml(&mut merged, user);
    let mut config: VizConfig =
        serde_yaml_ng::from_value(merged).map_err(|e| RenderError::Config(e.to_string()))?;
    config.theme = base_theme.name().to_string();
    config.validate()?;
    Ok(config)
}

fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(b), Value::Mapping(o)) => {
            for (k, v) in o {
                match b.get_mut(&k) {
                    Some(slot) => merge_yaml(slot, v),
                    None => {
                        b.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}
