use dc_core::EvaluationResult;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::header::draw_title;
use crate::layout::axes::Axis;
use crate::layout::legend::{LegendEntry, draw_legend};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::plots::empty_svg;
use crate::primitives::*;

/// Bar width in data units, centred on each count.
const BAR_WIDTH: f64 = 0.8;

/// Mass-function bars with the queried count drawn in the highlight colour.
pub fn render(result: &EvaluationResult, config: &VizConfig) -> crate::Result<String> {
    if result.series.is_empty() {
        return Ok(empty_svg("No mass data"));
    }

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?;

    let x_lo = result.series.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_hi = result.series.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let x_axis = Axis::counts(x_lo - 0.5, x_hi + 0.5, 8).with_label("x");
    let y_axis = Axis::linear(0.0, result.y_max() * 1.08, 5).with_label("P(X = x)");

    let area = PlotArea::fit(&canvas, &x_axis, &y_axis, !result.title.is_empty(), config);
    draw_title(&mut canvas, &area, &result.title, config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    canvas.push_clip(area.left, area.top, area.width, area.height);

    let mut bar = |x: f64, y: f64, style: &Style| {
        let left = x_axis.project(x - BAR_WIDTH / 2.0, area.left, area.right());
        let right = x_axis.project(x + BAR_WIDTH / 2.0, area.left, area.right());
        let top = y_axis.project(y, area.bottom(), area.top);
        let bottom = y_axis.project(0.0, area.bottom(), area.top);
        canvas.rect(left, top, (right - left).max(0.5), (bottom - top).max(0.0), style);
    };

    let bar_style = Style::filled(config.colors.bars);
    for p in &result.series {
        bar(p.x, p.y, &bar_style);
    }
    let highlight_style = Style::filled(config.colors.highlight_bar);
    for p in &result.highlight_series {
        bar(p.x, p.y, &highlight_style);
    }

    canvas.pop_clip();

    if config.legend.show {
        let entries = [
            LegendEntry::patch("Binomial distribution", config.colors.bars),
            LegendEntry::patch(result.label.clone(), config.colors.highlight_bar),
        ];
        draw_legend(&mut canvas, &area, &entries, config.font.legend_size, config.legend.frame);
    }

    Ok(canvas.finish_svg())
}
