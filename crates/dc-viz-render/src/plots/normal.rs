use dc_core::EvaluationResult;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::header::draw_title;
use crate::layout::axes::Axis;
use crate::layout::legend::{LegendEntry, draw_legend};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::{draw_axes, reference_line_color};
use crate::plots::empty_svg;
use crate::primitives::*;

/// Density curve with the queried interval shaded.
pub fn render(result: &EvaluationResult, config: &VizConfig) -> crate::Result<String> {
    if result.series.is_empty() {
        return Ok(empty_svg("No density data"));
    }

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?;

    // The shaded interval may reach outside the curve window.
    let (x_min, x_max) = result
        .series
        .iter()
        .chain(result.highlight_series.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
    let x_axis = Axis::linear(x_min, x_max, 7).with_label("x");
    let y_axis = Axis::linear(0.0, result.y_max() * 1.08, 5).with_label("f(x)");

    let area = PlotArea::fit(&canvas, &x_axis, &y_axis, !result.title.is_empty(), config);
    draw_title(&mut canvas, &area, &result.title, config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    let to_px = |x: f64| x_axis.project(x, area.left, area.right());
    let to_py = |y: f64| y_axis.project(y, area.bottom(), area.top);

    canvas.push_clip(area.left, area.top, area.width, area.height);

    // Shaded interval
    let hx: Vec<f64> = result.highlight_series.iter().map(|p| to_px(p.x)).collect();
    let hy: Vec<f64> = result.highlight_series.iter().map(|p| to_py(p.y)).collect();
    canvas.area(&hx, to_py(0.0), &hy, &Style::filled(config.colors.area));

    // Interval bounds
    if let (Some(first), Some(last)) = (result.highlight_series.first(), result.highlight_series.last()) {
        let bound_style = LineStyle::dashed(reference_line_color(), 0.7);
        for p in [first, last] {
            canvas.line(to_px(p.x), to_py(0.0), to_px(p.x), to_py(p.y), &bound_style);
        }
    }

    // Density curve
    let points: Vec<(f64, f64)> = result.series.iter().map(|p| (to_px(p.x), to_py(p.y))).collect();
    canvas.polyline(&points, &LineStyle::solid(config.colors.curve, 1.5));

    canvas.pop_clip();

    if config.legend.show {
        let entries = [
            LegendEntry::stroke("Normal distribution", config.colors.curve),
            LegendEntry::patch(format!("Area {}", result.label), config.colors.area),
        ];
        draw_legend(&mut canvas, &area, &entries, config.font.legend_size, config.legend.frame);
    }

    Ok(canvas.finish_svg())
}
