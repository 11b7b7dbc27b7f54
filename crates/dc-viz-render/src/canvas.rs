use std::fmt::Write as _;

use crate::color::Color;
use crate::font::FontHandle;
use crate::primitives::{FontWeight, LineStyle, Style, TextStyle};
use crate::text::{TextMetrics, measure_styled};

/// Font stack written on every text element.
pub const FONT_FAMILY: &str = "Ubuntu, sans-serif";

/// Black, the default for frames and text.
pub const INK: Color = Color::rgb(0, 0, 0);

/// SVG canvas in points (1pt = 1/72"), origin top-left.
///
/// Drawing calls append markup straight away. Calls made between
/// [`Canvas::push_clip`] and [`Canvas::pop_clip`] land in a `<g>` clipped to
/// that rectangle.
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    defs: String,
    // Innermost open layer last; layer 0 is the document body.
    layers: Vec<(Option<String>, String)>,
    clips: usize,
    fonts: FontHandle,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> crate::Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(crate::RenderError::Layout(format!(
                "canvas size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            defs: String::new(),
            layers: vec![(None, String::new())],
            clips: 0,
            fonts: FontHandle::embedded()?,
        })
    }

    fn body(&mut self) -> &mut String {
        // layers is never empty: pop_clip keeps layer 0.
        let last = self.layers.len() - 1;
        &mut self.layers[last].1
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        let out = self.body();
        let _ = write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#);
        paint_attrs(out, style);
        out.push_str(" />\n");
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        let out = self.body();
        let _ = write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#);
        stroke_attrs(out, style);
        out.push_str(" />\n");
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        if points.is_empty() {
            return;
        }
        let out = self.body();
        out.push_str(r#"<polyline points=""#);
        for (i, (x, y)) in points.iter().enumerate() {
            let sep = if i == 0 { "" } else { " " };
            let _ = write!(out, "{sep}{x:.2},{y:.2}");
        }
        out.push_str(r#"" fill="none""#);
        stroke_attrs(out, style);
        out.push_str(" />\n");
    }

    /// Closed region between a baseline and a curve sampled at the same x.
    pub fn area(&mut self, xs: &[f64], base: f64, ys: &[f64], style: &Style) {
        let n = xs.len().min(ys.len());
        if n < 2 {
            return;
        }
        let out = self.body();
        let _ = write!(out, r#"<path d="M{:.2},{base:.2}"#, xs[0]);
        for (x, y) in xs.iter().zip(ys).take(n) {
            let _ = write!(out, " L{x:.2},{y:.2}");
        }
        let _ = write!(out, r#" L{:.2},{base:.2}Z""#, xs[n - 1]);
        paint_attrs(out, style);
        out.push_str(" />\n");
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.text_element(x, y, content, style, None);
    }

    /// Text rotated by `angle` degrees about its anchor point.
    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.text_element(x, y, content, style, Some(angle));
    }

    fn text_element(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: Option<f64>) {
        let out = self.body();
        let _ = write!(
            out,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="{:.1}" fill="{}" text-anchor="{}" dominant-baseline="{}""#,
            style.size,
            style.color.to_svg_fill(),
            style.svg_anchor(),
            style.svg_baseline(),
        );
        if style.weight == FontWeight::Bold {
            out.push_str(r#" font-weight="bold""#);
        }
        if let Some(angle) = angle {
            let _ = write!(out, r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#);
        }
        out.push('>');
        escape_into(out, content);
        out.push_str("</text>\n");
    }

    /// Open a layer clipped to the given rectangle. Returns the clip id.
    pub fn push_clip(&mut self, x: f64, y: f64, w: f64, h: f64) -> String {
        let id = format!("clip{}", self.clips);
        self.clips += 1;
        let _ = writeln!(
            self.defs,
            r#"<clipPath id="{id}"><rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" /></clipPath>"#
        );
        self.layers.push((Some(id.clone()), String::new()));
        id
    }

    /// Close the innermost clip layer. No-op when none is open.
    pub fn pop_clip(&mut self) {
        if self.layers.len() < 2 {
            return;
        }
        if let Some((Some(id), inner)) = self.layers.pop() {
            let out = self.body();
            let _ = writeln!(out, r#"<g clip-path="url(#{id})">"#);
            out.push_str(&inner);
            out.push_str("</g>\n");
        }
    }

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_styled(&self.fonts, content, style)
    }

    /// Serialize the document, closing any open clip layers.
    pub fn finish_svg(mut self) -> String {
        while self.layers.len() > 1 {
            self.pop_clip();
        }
        let (w, h) = (self.width, self.height);
        let mut out = String::with_capacity(self.defs.len() + self.body().len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if !self.defs.is_empty() {
            let _ = write!(out, "<defs>\n{}</defs>\n", self.defs);
        }
        let _ = writeln!(out, r#"<rect width="{w}" height="{h}" fill="white" />"#);
        out.push_str(self.body());
        out.push_str("</svg>\n");
        out
    }
}

fn paint_attrs(out: &mut String, style: &Style) {
    let fill = style.fill.map_or_else(|| "none".to_string(), |c| c.to_svg_fill());
    let _ = write!(out, r#" fill="{fill}""#);
    if let Some((color, width)) = style.stroke {
        let _ = write!(out, r#" stroke="{}" stroke-width="{width:.2}""#, color.to_svg_fill());
    }
}

fn stroke_attrs(out: &mut String, style: &LineStyle) {
    let _ = write!(out, r#" stroke="{}" stroke-width="{:.2}""#, style.color.to_svg_fill(), style.width);
    if let Some(dash) = style.dash.dasharray() {
        let _ = write!(out, r#" stroke-dasharray="{dash}""#);
    }
}

fn escape_into(out: &mut String, content: &str) {
    for ch in content.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
