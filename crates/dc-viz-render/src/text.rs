use ab_glyph::{Font, FontRef, PxScale, ScaleFont};

use crate::font::FontHandle;
use crate::primitives::TextStyle;

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Advance width (with kerning) and line extent of `text` at `size_pt`.
pub fn measure_text(font: &FontRef<'_>, text: &str, size_pt: f64) -> TextMetrics {
    let scaled = font.as_scaled(PxScale::from(size_pt as f32));

    let mut width = 0.0_f32;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = prev {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }

    let ascent = scaled.ascent();
    TextMetrics {
        width: f64::from(width),
        height: f64::from(ascent - scaled.descent()),
        ascent: f64::from(ascent),
    }
}

pub fn measure_styled(fonts: &FontHandle, text: &str, style: &TextStyle) -> TextMetrics {
    measure_text(&fonts.regular, text, style.size)
}
