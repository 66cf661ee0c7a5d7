//! Digit layout engine
//!
//! Turns a display string and the current viewport into one uniform scale
//! and a destination rectangle per glyph. The block of glyphs is centered in
//! the viewport and sized so that it fits, capped by a maximum scale.
//!
//! Layout is a pure function of its inputs. The viewport can change between
//! any two frames, so results are never cached.

use crate::atlas::{GlyphIndex, GlyphSize};
use crate::error::LayoutError;
use crate::geometry::{Rect, Viewport};

/// One glyph positioned on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub glyph: GlyphIndex,
    pub dst: Rect,
}

/// Output of [`compute_layout`]
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Scale applied to every glyph
    pub scale: f32,
    /// Placed glyphs in display-string order
    pub glyphs: Vec<PlacedGlyph>,
}

/// Compute the scale and destination rectangles for `text`
///
/// # Algorithm
/// - Pick the constraining axis by comparing the text block's aspect ratio
///   with the viewport's, and scale so the block fills that axis
/// - Clamp the scale to `max_scale`
/// - Center the scaled block; the origin may go negative when `max_scale`
///   lets the block overflow, clipping is left to the renderer
/// - Walk the characters, advancing one scaled glyph width per character.
///   Characters without a glyph emit nothing but still take up their slot
///
/// # Errors
/// `LayoutError::DegenerateViewport` when either viewport dimension is zero.
pub fn compute_layout(
    text: &str,
    glyph: GlyphSize,
    viewport: Viewport,
    max_scale: f32,
) -> Result<LayoutResult, LayoutError> {
    if viewport.is_degenerate() {
        return Err(LayoutError::DegenerateViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let char_count = text.chars().count();
    let total_unscaled_width = char_count as f32 * glyph.width as f32;
    if total_unscaled_width == 0.0 || glyph.height == 0 {
        return Ok(LayoutResult {
            scale: max_scale,
            glyphs: Vec::new(),
        });
    }

    let glyph_width = glyph.width as f32;
    let glyph_height = glyph.height as f32;
    let viewport_width = viewport.width as f32;
    let viewport_height = viewport.height as f32;

    let aspect_text = total_unscaled_width / glyph_height;
    let aspect_viewport = viewport_width / viewport_height;

    let scale = if aspect_text > aspect_viewport {
        viewport_width / total_unscaled_width
    } else {
        viewport_height / glyph_height
    };
    let scale = scale.min(max_scale);

    let scaled_glyph_width = glyph_width * scale;
    let scaled_total_width = char_count as f32 * scaled_glyph_width;
    let scaled_height = glyph_height * scale;

    let origin_x = viewport_width / 2.0 - scaled_total_width / 2.0;
    let origin_y = viewport_height / 2.0 - scaled_height / 2.0;

    let glyphs = text
        .chars()
        .enumerate()
        .filter_map(|(slot, c)| {
            GlyphIndex::from_char(c).map(|glyph| PlacedGlyph {
                glyph,
                dst: Rect::new(
                    origin_x + slot as f32 * scaled_glyph_width,
                    origin_y,
                    scaled_glyph_width,
                    scaled_height,
                ),
            })
        })
        .collect();

    Ok(LayoutResult { scale, glyphs })
}
