use crate::frame::FrameOutcome;
use crate::geometry::{GlyphRect, Rect, Viewport};
use crate::palette::Rgb;
use anyhow::Result;

/// Drawing surface the clock paints through
///
/// The core never owns windows or textures. Every frame it issues `clear`,
/// optional grid points, glyph copies and a final `present` through this
/// trait, with values computed from the clock state and the layout engine.
pub trait RenderDriver {
    /// Current drawable size in physical pixels, read fresh every frame
    fn viewport_size(&self) -> Viewport;

    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Rgb);

    /// Draw a single-pixel grid dot
    fn draw_rect_point(&mut self, x: u32, y: u32, color: Rgb);

    /// Copy the atlas region `src` to `dst`, color-modulated by `tint`
    fn draw_glyph(&mut self, src: GlyphRect, dst: Rect, tint: Rgb);

    /// Submit everything drawn since `clear`
    ///
    /// Returns `FrameOutcome::Dropped` when the surface could not take the
    /// frame; the next frame retries.
    fn present(&mut self) -> Result<FrameOutcome>;

    fn set_window_title(&mut self, title: &str);

    /// Fullscreen state lives entirely in the driver
    fn toggle_fullscreen(&mut self);
}
