use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::margins::PlotArea;
use crate::primitives::{Align, TextStyle, VAlign};

/// Bold title centred over the plot area. Empty titles draw nothing.
pub fn draw_title(canvas: &mut Canvas, area: &PlotArea, title: &str, config: &VizConfig) {
    if title.is_empty() {
        return;
    }
    let style = TextStyle::new(config.font.title_size, config.colors.text)
        .bold()
        .aligned(Align::Middle, VAlign::Baseline);
    canvas.text(area.center_x(), area.top - 8.0, title, &style);
}
