use crate::constants::{GLYPH_COUNT, SEPARATOR_GLYPH};
use crate::error::AtlasError;
use crate::geometry::GlyphRect;
use log::info;
use std::path::Path;

/// Embedded default digit strip: 11 white glyphs on a transparent background
const EMBEDDED_ATLAS: &[u8] = include_bytes!("../assets/digits.png");

/// Index of a glyph in the atlas strip (0-9 for digits, 10 for ':')
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphIndex(u8);

impl GlyphIndex {
    pub const SEPARATOR: GlyphIndex = GlyphIndex(SEPARATOR_GLYPH);

    /// Map a display character to its glyph
    ///
    /// Characters without a glyph yield `None`; callers skip them silently.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self(c as u8 - b'0')),
            ':' => Some(Self::SEPARATOR),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Free-function form of [`GlyphIndex::from_char`]
pub fn char_to_index(c: char) -> Option<GlyphIndex> {
    GlyphIndex::from_char(c)
}

/// Unscaled size of one glyph cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSize {
    pub width: u32,
    pub height: u32,
}

/// Decoded digit atlas
///
/// The atlas is a horizontal strip of `GLYPH_COUNT` equal-width glyphs. It is
/// decoded once at startup into RGBA8 pixels and never mutated afterwards.
pub struct DigitAtlas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DigitAtlas {
    /// Decode the atlas bundled with the binary
    pub fn embedded() -> Result<Self, AtlasError> {
        Self::from_png_bytes(EMBEDDED_ATLAS)
    }

    /// Decode an atlas image from disk
    pub fn from_path(path: &Path) -> Result<Self, AtlasError> {
        info!("Loading digit atlas from: {}", path.display());
        let bytes = std::fs::read(path).map_err(|source| AtlasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_png_bytes(&bytes)
    }

    /// Load from `path` when given, otherwise fall back to the embedded strip
    pub fn load(path: Option<&Path>) -> Result<Self, AtlasError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Decode an encoded image (PNG) held in memory
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, AtlasError> {
        let img = image::load_from_memory(bytes)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw())
    }

    /// Wrap already-decoded RGBA8 pixels
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, AtlasError> {
        let expected = width as usize * height as usize * 4;
        if width < GLYPH_COUNT || height == 0 || pixels.len() != expected {
            return Err(AtlasError::Dimensions { width, height });
        }

        info!(
            "Digit atlas ready: {}x{} ({}x{} per glyph)",
            width,
            height,
            width / GLYPH_COUNT,
            height
        );

        Ok(Self { width, height, pixels })
    }

    pub fn glyph_width(&self) -> u32 {
        self.width / GLYPH_COUNT
    }

    pub fn glyph_height(&self) -> u32 {
        self.height
    }

    pub fn glyph_size(&self) -> GlyphSize {
        GlyphSize {
            width: self.glyph_width(),
            height: self.glyph_height(),
        }
    }

    /// Source rectangle of a glyph inside the strip
    pub fn glyph_rect(&self, index: GlyphIndex) -> GlyphRect {
        let glyph_width = self.glyph_width();
        GlyphRect {
            x: u32::from(index.get()) * glyph_width,
            y: 0,
            width: glyph_width,
            height: self.height,
        }
    }

    /// Full strip dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA8 pixels, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
