//! Paint styles shared by the canvas and the plots.

use crate::color::Color;

/// Fill and optional outline for rectangles and closed paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<(Color, f64)>,
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color), stroke: None }
    }

    pub fn outline(color: Color, width: f64) -> Self {
        Self { fill: None, stroke: Some((color, width)) }
    }

    pub fn with_outline(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some((color, width));
        self
    }
}

/// Stroke pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dash {
    #[default]
    Solid,
    /// Long dashes, used for interval bounds.
    Dashed,
    /// Short dashes, used for grid lines.
    Dotted,
}

impl Dash {
    /// `stroke-dasharray` value, `None` for solid lines.
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            Dash::Solid => None,
            Dash::Dashed => Some("6 3"),
            Dash::Dotted => Some("3 3"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Dash,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::rgb(0, 0, 0), 1.0)
    }
}

impl LineStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: Dash::Solid }
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self { color, width, dash: Dash::Dashed }
    }

    pub fn dotted(color: Color, width: f64) -> Self {
        Self { color, width, dash: Dash::Dotted }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Horizontal alignment relative to the anchor point (`text-anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Middle,
    End,
}

/// Vertical alignment relative to the anchor point (`dominant-baseline`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Baseline,
    Center,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub weight: FontWeight,
    pub align: Align,
    pub valign: VAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0, Color::rgb(0, 0, 0))
    }
}

impl TextStyle {
    pub fn new(size: f64, color: Color) -> Self {
        Self { size, color, weight: FontWeight::Regular, align: Align::Start, valign: VAlign::Baseline }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn aligned(mut self, align: Align, valign: VAlign) -> Self {
        self.align = align;
        self.valign = valign;
        self
    }

    pub(crate) fn svg_anchor(&self) -> &'static str {
        match self.align {
            Align::Start => "start",
            Align::Middle => "middle",
            Align::End => "end",
        }
    }

    pub(crate) fn svg_baseline(&self) -> &'static str {
        match self.valign {
            VAlign::Baseline => "auto",
            VAlign::Center => "central",
            VAlign::Top => "hanging",
        }
    }
}
