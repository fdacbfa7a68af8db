use std::collections::HashMap;
use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// A rasterized glyph positioned relative to the text anchor.
///
/// `x`/`y` are the top-left of the coverage bitmap, where the anchor is the
/// left end of the baseline.
#[derive(Debug, Clone)]
pub struct PlacedGlyph {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
    /// Row-major 8-bit coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

/// Owns loaded fonts and the family names they answer to.
///
/// Fonts are immutable after loading. Family lookup is case-insensitive; an
/// unknown family falls back to the first font loaded so text never silently
/// disappears once any font is available.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    families: HashMap<String, FontId>,
    glyph_cache: HashMap<GlyphRasterConfig, (fontdue::Metrics, Vec<u8>)>,
    layout: Layout<()>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            families: HashMap::new(),
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes and
    /// registers it under `family`.
    pub fn load_font(&mut self, family: &str, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(format!("{family}: {e}")))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        self.alias(family, id);
        log::debug!("font loaded: {family} -> {id:?}");
        Ok(id)
    }

    /// Makes `family` resolve to an already loaded font.
    pub fn alias(&mut self, family: &str, id: FontId) {
        self.families.insert(family.to_ascii_lowercase(), id);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Resolves a family name, falling back to the first loaded font.
    pub fn resolve(&self, family: &str) -> Option<FontId> {
        self.families
            .get(&family.to_ascii_lowercase())
            .copied()
            .or_else(|| (!self.fonts.is_empty()).then_some(FontId(0)))
    }

    /// Advance width of a single line of text in logical pixels.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> f32 {
        let Some(font) = self.fonts.get(id.0) else {
            return 0.0;
        };
        text.chars()
            .filter(|c| !c.is_control())
            .map(|c| font.metrics(c, size).advance_width)
            .sum()
    }

    /// Lays out one line and rasterizes every visible glyph.
    ///
    /// Glyph bitmaps are cached by font, glyph and pixel size.
    pub fn shape_line(&mut self, text: &str, id: FontId, size: f32) -> Vec<PlacedGlyph> {
        let Some(font) = self.fonts.get(id.0) else {
            return Vec::new();
        };
        let ascent = font.horizontal_line_metrics(size).map(|m| m.ascent).unwrap_or(size * 0.8);

        self.layout.reset(&LayoutSettings::default());
        self.layout.append(&self.fonts[..], &TextStyle::new(text, size, id.0));

        let mut out = Vec::with_capacity(self.layout.glyphs().len());
        for g in self.layout.glyphs() {
            if g.width == 0 || g.height == 0 {
                continue;
            }
            let (_, coverage) = self
                .glyph_cache
                .entry(g.key)
                .or_insert_with(|| self.fonts[g.font_index].rasterize_config(g.key));
            out.push(PlacedGlyph {
                x: g.x,
                // Layout y is measured from the line top; shift so the anchor is the baseline.
                y: g.y - ascent,
                width: g.width,
                height: g.height,
                coverage: coverage.clone(),
            });
        }
        out
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
