use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Tolerance, in points, for ticks sitting on the frame edge.
const EDGE_SLACK: f64 = 0.5;

/// Frame, grid, ticks, tick labels and axis titles around `area`.
pub fn draw_axes(canvas: &mut Canvas, area: &PlotArea, x: &Axis, y: &Axis, config: &VizConfig) {
    let ink = config.colors.text;
    let outward = config.axes.ticks_outward();
    // Positive lengths point into the plot.
    let sign = if outward { -1.0 } else { 1.0 };
    let major_len = sign * config.axes.tick_length;
    let minor_len = sign * config.axes.minor_tick_length;
    let tick_room = if outward { config.axes.tick_length } else { 0.0 };

    let major = LineStyle::solid(ink, 0.6);
    let minor = LineStyle::solid(ink, 0.4);
    let grid = LineStyle::dotted(config.grid.color.with_alpha(config.grid.alpha), 0.5);

    let xs: Vec<(f64, Option<&str>)> = visible(x, area.left, area.right());
    let ys: Vec<(f64, Option<&str>)> = visible(y, area.bottom(), area.top);

    if config.grid.show {
        for &(px, _) in xs.iter().filter(|(_, l)| l.is_some()) {
            canvas.line(px, area.top, px, area.bottom(), &grid);
        }
        for &(py, _) in ys.iter().filter(|(_, l)| l.is_some()) {
            canvas.line(area.left, py, area.right(), py, &grid);
        }
    }

    canvas.rect(area.left, area.top, area.width, area.height, &Style::outline(ink, 0.8));

    let x_text = TextStyle::new(config.font.tick_size, ink).aligned(Align::Middle, VAlign::Top);
    for &(px, label) in &xs {
        let (len, style) = if label.is_some() { (major_len, &major) } else { (minor_len, &minor) };
        canvas.line(px, area.bottom(), px, area.bottom() - len, style);
        if label.is_some() && config.axes.show_top_ticks {
            canvas.line(px, area.top, px, area.top + len, style);
        }
        if let Some(label) = label {
            canvas.text(px, area.bottom() + tick_room + 3.0, label, &x_text);
        }
    }

    let y_text = TextStyle::new(config.font.tick_size, ink).aligned(Align::End, VAlign::Center);
    let y_label_x = area.left - tick_room - 4.0;
    let mut widest = 0.0_f64;
    for &(py, label) in &ys {
        let (len, style) = if label.is_some() { (major_len, &major) } else { (minor_len, &minor) };
        canvas.line(area.left, py, area.left + len, py, style);
        if label.is_some() && config.axes.show_right_ticks {
            canvas.line(area.right(), py, area.right() - len, py, style);
        }
        if let Some(label) = label {
            widest = widest.max(canvas.measure_text(label, &y_text).width);
            canvas.text(y_label_x, py, label, &y_text);
        }
    }

    let title = TextStyle::new(config.font.label_size, ink).aligned(Align::Middle, VAlign::Baseline);
    if !x.label.is_empty() {
        let baseline = area.bottom() + tick_room + config.font.tick_size + config.font.label_size + 8.0;
        canvas.text(area.center_x(), baseline, &x.label, &title);
    }
    if !y.label.is_empty() {
        let cx = y_label_x - widest - 6.0 - config.font.label_size / 2.0;
        canvas.text_rotated(cx, area.top + area.height / 2.0, &y.label, &title, -90.0);
    }
}

/// Tick pixel positions inside the frame: majors carry their label, minors `None`.
fn visible(axis: &Axis, px_lo: f64, px_hi: f64) -> Vec<(f64, Option<&str>)> {
    let (lo, hi) = (px_lo.min(px_hi) - EDGE_SLACK, px_lo.max(px_hi) + EDGE_SLACK);
    let majors = axis.major.iter().map(|t| (axis.project(t.value, px_lo, px_hi), Some(t.label.as_str())));
    let minors = axis.minor.iter().map(|&v| (axis.project(v, px_lo, px_hi), None));
    majors.chain(minors).filter(|(p, _)| (lo..=hi).contains(p)).collect()
}

/// Grey for reference lines drawn over the data.
pub fn reference_line_color() -> Color {
    Color::rgb(110, 110, 110)
}
