use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::primitives::TextStyle;

/// Padding between the figure edge and anything drawn.
const EDGE: f64 = 12.0;
/// Gap between tick labels and the axis title.
const LABEL_GAP: f64 = 6.0;

/// Data rectangle inside the figure, in canvas points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Reserve room for tick labels, axis titles and the plot title, and
    /// give the rest to the data.
    pub fn fit(canvas: &Canvas, x: &Axis, y: &Axis, title: bool, config: &VizConfig) -> Self {
        let font = &config.font;
        let ticks_out = config.axes.ticks_outward();
        let tick_room = if ticks_out { config.axes.tick_length } else { 0.0 };
        let tick_style = TextStyle::new(font.tick_size, config.colors.text);

        let widest_y_tick = y
            .major
            .iter()
            .map(|t| canvas.measure_text(&t.label, &tick_style).width)
            .fold(0.0, f64::max);
        let y_title = if y.label.is_empty() { 0.0 } else { font.label_size + LABEL_GAP };
        let x_title = if x.label.is_empty() { 0.0 } else { font.label_size + LABEL_GAP };

        let left = EDGE + y_title + widest_y_tick + LABEL_GAP + tick_room;
        let bottom = EDGE + x_title + font.tick_size + LABEL_GAP + tick_room;
        let top = if title { EDGE + font.title_size * 1.2 + 4.0 } else { EDGE };
        let right = EDGE + 3.0;

        Self {
            left,
            top,
            width: (canvas.width - left - right).max(50.0),
            height: (canvas.height - top - bottom).max(50.0),
        }
    }
}
