use ab_glyph::FontRef;

/// Family name the embedded face registers under in a font database.
pub const FAMILY: &str = "Ubuntu";

static UBUNTU_LIGHT: &[u8] = epaint_default_fonts::UBUNTU_LIGHT;

/// The face every label is measured and rasterized with.
///
/// One face serves all weights: bold text is requested in the SVG, and
/// renderers without a bold face fall back to this one at the same advance.
pub struct FontHandle {
    pub regular: FontRef<'static>,
}

impl FontHandle {
    pub fn embedded() -> crate::Result<Self> {
        Ok(Self {
            regular: FontRef::try_from_slice(UBUNTU_LIGHT)
                .map_err(|e| crate::RenderError::Font(e.to_string()))?,
        })
    }

    pub fn regular_bytes() -> &'static [u8] {
        UBUNTU_LIGHT
    }
}
