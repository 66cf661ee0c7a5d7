//! Viewport geometry and coordinate conversion utilities
//!
//! This module provides the small set of geometric types shared between the
//! layout engine and the GPU renderer:
//! - Pixel coordinates (screen space, origin top-left, y down)
//! - Atlas source rectangles (integer texel space)
//! - NDC (Normalized Device Coordinates for GPU rendering)

/// Current drawable area in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A viewport with a zero dimension cannot be laid out or drawn into
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert pixel coordinates to NDC (Normalized Device Coordinates)
    ///
    /// NDC is the coordinate system used by GPU shaders:
    /// - X: -1.0 (left) to +1.0 (right)
    /// - Y: +1.0 (top) to -1.0 (bottom)  [inverted from screen space]
    #[inline]
    pub fn pixels_to_ndc(&self, pixel_x: f32, pixel_y: f32) -> (f32, f32) {
        let ndc_x = (pixel_x / self.width as f32) * 2.0 - 1.0;
        let ndc_y = -((pixel_y / self.height as f32) * 2.0 - 1.0);
        (ndc_x, ndc_y)
    }

    /// Convert pixel dimensions to NDC dimensions
    #[inline]
    pub fn pixel_size_to_ndc(&self, width: f32, height: f32) -> (f32, f32) {
        let ndc_width = (width / self.width as f32) * 2.0;
        let ndc_height = -((height / self.height as f32) * 2.0);
        (ndc_width, ndc_height)
    }
}

/// Destination rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Source rectangle inside the digit atlas, in texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GlyphRect {
    /// Normalized texture coordinates `(u_min, v_min, u_max, v_max)` for an
    /// atlas of the given size
    #[inline]
    pub fn to_uv(&self, atlas_width: u32, atlas_height: u32) -> [f32; 4] {
        let aw = atlas_width as f32;
        let ah = atlas_height as f32;
        [
            self.x as f32 / aw,
            self.y as f32 / ah,
            (self.x + self.width) as f32 / aw,
            (self.y + self.height) as f32 / ah,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_to_ndc() {
        let vp = Viewport::new(800, 600);

        // Top-left corner (0, 0) -> NDC (-1, 1)
        let (ndc_x, ndc_y) = vp.pixels_to_ndc(0.0, 0.0);
        assert_eq!(ndc_x, -1.0);
        assert_eq!(ndc_y, 1.0);

        // Bottom-right corner (800, 600) -> NDC (1, -1)
        let (ndc_x, ndc_y) = vp.pixels_to_ndc(800.0, 600.0);
        assert_eq!(ndc_x, 1.0);
        assert_eq!(ndc_y, -1.0);

        // Center (400, 300) -> NDC (0, 0)
        let (ndc_x, ndc_y) = vp.pixels_to_ndc(400.0, 300.0);
        assert_eq!(ndc_x, 0.0);
        assert_eq!(ndc_y, 0.0);
    }

    #[test]
    fn test_pixel_size_to_ndc() {
        let vp = Viewport::new(800, 600);
        let (w, h) = vp.pixel_size_to_ndc(400.0, 300.0);
        assert_eq!(w, 1.0);
        assert_eq!(h, -1.0);
    }

    #[test]
    fn test_degenerate_viewport() {
        assert!(Viewport::new(0, 480).is_degenerate());
        assert!(Viewport::new(640, 0).is_degenerate());
        assert!(!Viewport::new(1, 1).is_degenerate());
    }

    #[test]
    fn test_glyph_rect_uv() {
        let rect = GlyphRect { x: 100, y: 0, width: 100, height: 50 };
        let uv = rect.to_uv(1100, 50);
        assert!((uv[0] - 100.0 / 1100.0).abs() < f32::EPSILON);
        assert_eq!(uv[1], 0.0);
        assert!((uv[2] - 200.0 / 1100.0).abs() < f32::EPSILON);
        assert_eq!(uv[3], 1.0);
    }
}
