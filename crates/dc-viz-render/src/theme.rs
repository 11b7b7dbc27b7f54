use crate::color::Color;
use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    Classic,
    Minimal,
    Print,
}

impl BuiltinTheme {
    pub const ALL: [BuiltinTheme; 3] = [Self::Classic, Self::Minimal, Self::Print];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "default" => Some(Self::Classic),
            "minimal" => Some(Self::Minimal),
            "print" => Some(Self::Print),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Minimal => "minimal",
            Self::Print => "print",
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Classic => classic(),
            Self::Minimal => minimal(),
            Self::Print => print(),
        }
    }
}

fn classic() -> VizConfig {
    VizConfig {
        theme: "classic".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        colors: ColorsConfig::default(),
        legend: LegendConfig::default(),
        output: OutputConfig::default(),
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 432.0, height: 288.0 },
        font: FontConfig { title_size: 11.0, label_size: 9.0, tick_size: 8.0, legend_size: 8.0 },
        grid: GridConfig { show: false, ..GridConfig::default() },
        colors: ColorsConfig {
            curve: Color::hex("#4e79a7"),
            area: Color::hex("#4e79a7").with_alpha(0.25),
            bars: Color::hex("#bab0ab"),
            highlight_bar: Color::hex("#e15759"),
            ..ColorsConfig::default()
        },
        legend: LegendConfig { show: true, frame: false },
        ..classic()
    }
}

fn print() -> VizConfig {
    VizConfig {
        theme: "print".into(),
        axes: AxesConfig {
            tick_direction: TickDirection::In,
            show_top_ticks: true,
            show_right_ticks: true,
            tick_length: 5.0,
            minor_tick_length: 3.0,
        },
        grid: GridConfig { show: false, ..GridConfig::default() },
        colors: ColorsConfig {
            curve: Color::rgb(0, 0, 0),
            area: Color::rgb(0, 0, 0).with_alpha(0.2),
            bars: Color::hex("#d0d0d0"),
            highlight_bar: Color::hex("#404040"),
            ..ColorsConfig::default()
        },
        output: OutputConfig { format: "png".into(), dpi: 300 },
        ..classic()
    }
}
