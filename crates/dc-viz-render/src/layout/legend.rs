use crate::canvas::Canvas;
use crate::color::Color;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Marker drawn to the left of a legend label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swatch {
    /// Filled box, for bars and shaded areas.
    Patch(Color),
    /// Short stroke, for curves.
    Stroke(Color),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch: Swatch,
    pub label: String,
}

impl LegendEntry {
    pub fn patch(label: impl Into<String>, color: Color) -> Self {
        Self { swatch: Swatch::Patch(color), label: label.into() }
    }

    pub fn stroke(label: impl Into<String>, color: Color) -> Self {
        Self { swatch: Swatch::Stroke(color), label: label.into() }
    }
}

const PAD: f64 = 6.0;
const SWATCH_W: f64 = 16.0;
const INSET: f64 = 6.0;

/// Draw `entries` boxed in the upper-right corner of `area`.
pub fn draw_legend(
    canvas: &mut Canvas,
    area: &PlotArea,
    entries: &[LegendEntry],
    font_size: f64,
    framed: bool,
) {
    if entries.is_empty() {
        return;
    }
    let text = TextStyle::new(font_size, crate::canvas::INK).aligned(Align::Start, VAlign::Center);
    let row = font_size * 1.5;
    let label_w = entries
        .iter()
        .map(|e| canvas.measure_text(&e.label, &text).width)
        .fold(0.0, f64::max);

    let w = PAD + SWATCH_W + PAD + label_w + PAD;
    let h = 2.0 * PAD + row * entries.len() as f64;
    let x = (area.right() - INSET - w).max(area.left);
    let y = area.top + INSET;

    let mut backdrop = Style::filled(Color::rgba(255, 255, 255, 0.85));
    if framed {
        backdrop = backdrop.with_outline(Color::rgb(200, 200, 200), 0.5);
    }
    canvas.rect(x, y, w, h, &backdrop);

    for (i, entry) in entries.iter().enumerate() {
        let cy = y + PAD + row * (i as f64 + 0.5);
        let sx = x + PAD;
        match entry.swatch {
            Swatch::Patch(color) => {
                let sh = font_size * 0.8;
                canvas.rect(sx, cy - sh / 2.0, SWATCH_W, sh, &Style::filled(color));
            }
            Swatch::Stroke(color) => {
                canvas.line(sx, cy, sx + SWATCH_W, cy, &LineStyle::solid(color, 1.5));
            }
        }
        canvas.text(sx + SWATCH_W + PAD, cy, &entry.label, &text);
    }
}
