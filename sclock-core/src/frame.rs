use crate::atlas::DigitAtlas;
use crate::clock::ClockState;
use crate::config::Config;
use crate::driver::RenderDriver;
use crate::layout::compute_layout;
use crate::palette::ColorRole;
use anyhow::Result;
use log::{debug, trace};

/// What happened to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// Viewport was degenerate; nothing was drawn, retry next frame
    Skipped,
    /// Drawn but the surface was unavailable, so nothing reached the screen
    Dropped,
}

/// Paints one frame of the clock through a [`RenderDriver`]
///
/// Holds the only cross-frame view state: the last title pushed to the
/// driver, so the title is set only when it changes.
#[derive(Debug, Clone)]
pub struct FrameComposer {
    grid_step: u32,
    max_digit_scale: f32,
    last_title: Option<String>,
}

impl FrameComposer {
    pub fn new(grid_step: u32, max_digit_scale: f32) -> Self {
        Self {
            grid_step: grid_step.max(1),
            max_digit_scale,
            last_title: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.appearance.grid_step, config.appearance.max_digit_scale)
    }

    /// Paint background, grid and digits for the current state
    pub fn render<D: RenderDriver + ?Sized>(
        &mut self,
        state: &ClockState,
        atlas: &DigitAtlas,
        driver: &mut D,
    ) -> Result<FrameOutcome> {
        self.update_title(state, driver);

        let viewport = driver.viewport_size();
        let text = state.display_time().to_string();
        let layout = match compute_layout(&text, atlas.glyph_size(), viewport, self.max_digit_scale) {
            Ok(layout) => layout,
            Err(e) => {
                debug!("Skipping frame: {}", e);
                return Ok(FrameOutcome::Skipped);
            }
        };

        let palette = state.palette();
        driver.clear(palette.color_for(ColorRole::Background));

        if state.grid_visible() {
            let grid = palette.color_for(ColorRole::Grid);
            for y in (0..viewport.height).step_by(self.grid_step as usize) {
                for x in (0..viewport.width).step_by(self.grid_step as usize) {
                    driver.draw_rect_point(x, y, grid);
                }
            }
        }

        let tint = palette.color_for(state.digit_role());
        for placed in &layout.glyphs {
            driver.draw_glyph(atlas.glyph_rect(placed.glyph), placed.dst, tint);
        }
        trace!(
            "Frame '{}' at scale {:.3} ({} glyphs)",
            text,
            layout.scale,
            layout.glyphs.len()
        );

        let outcome = driver.present()?;
        if outcome == FrameOutcome::Dropped {
            debug!("Frame dropped by the surface");
        }
        Ok(outcome)
    }

    fn update_title<D: RenderDriver + ?Sized>(&mut self, state: &ClockState, driver: &mut D) {
        let title = state.title();
        if self.last_title.as_deref() != Some(title.as_str()) {
            driver.set_window_title(&title);
            self.last_title = Some(title);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clock::Mode;
    use crate::geometry::{GlyphRect, Rect, Viewport};
    use crate::palette::{Palette, Rgb};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DriverCall {
        Clear(Rgb),
        Point(u32, u32, Rgb),
        Glyph(GlyphRect, Rect, Rgb),
        Present,
        Title(String),
    }

    /// Render driver that records every call
    pub(crate) struct RecordingDriver {
        pub viewport: Viewport,
        pub calls: Vec<DriverCall>,
        pub fullscreen_toggles: usize,
        /// Report every present as dropped
        pub surface_unavailable: bool,
    }

    impl RecordingDriver {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                viewport: Viewport::new(width, height),
                calls: Vec::new(),
                fullscreen_toggles: 0,
                surface_unavailable: false,
            }
        }

        fn count(&self, pred: impl Fn(&DriverCall) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }

        fn titles(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DriverCall::Title(t) => Some(t.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl RenderDriver for RecordingDriver {
        fn viewport_size(&self) -> Viewport {
            self.viewport
        }

        fn clear(&mut self, color: Rgb) {
            self.calls.push(DriverCall::Clear(color));
        }

        fn draw_rect_point(&mut self, x: u32, y: u32, color: Rgb) {
            self.calls.push(DriverCall::Point(x, y, color));
        }

        fn draw_glyph(&mut self, src: GlyphRect, dst: Rect, tint: Rgb) {
            self.calls.push(DriverCall::Glyph(src, dst, tint));
        }

        fn present(&mut self) -> Result<FrameOutcome> {
            self.calls.push(DriverCall::Present);
            if self.surface_unavailable {
                return Ok(FrameOutcome::Dropped);
            }
            Ok(FrameOutcome::Presented)
        }

        fn set_window_title(&mut self, title: &str) {
            self.calls.push(DriverCall::Title(title.to_string()));
        }

        fn toggle_fullscreen(&mut self) {
            self.fullscreen_toggles += 1;
        }
    }

    fn atlas() -> DigitAtlas {
        DigitAtlas::from_rgba(110, 20, vec![255; 110 * 20 * 4]).unwrap()
    }

    #[test]
    fn test_frame_sequence() {
        let state = ClockState::new(Mode::Clock, Palette::Dark, false, 3661);
        let mut composer = FrameComposer::new(10, 0.75);
        let mut driver = RecordingDriver::new(640, 480);

        let outcome = composer.render(&state, &atlas(), &mut driver).unwrap();
        assert_eq!(outcome, FrameOutcome::Presented);

        assert_eq!(driver.calls[0], DriverCall::Title("01:01:01 - sclock".to_string()));
        assert_eq!(driver.calls[1], DriverCall::Clear(Rgb::from_hex(0x000000)));
        assert_eq!(driver.count(|c| matches!(c, DriverCall::Glyph(..))), 8);
        assert_eq!(driver.calls.last(), Some(&DriverCall::Present));
        assert_eq!(driver.count(|c| matches!(c, DriverCall::Point(..))), 0);
    }

    #[test]
    fn test_glyph_sources_match_text() {
        let state = ClockState::new(Mode::Clock, Palette::Light, false, 3661);
        let mut composer = FrameComposer::new(10, 0.75);
        let mut driver = RecordingDriver::new(640, 480);
        composer.render(&state, &atlas(), &mut driver).unwrap();

        let xs: Vec<u32> = driver
            .calls
            .iter()
            .filter_map(|c| match c {
                DriverCall::Glyph(src, _, tint) => {
                    assert_eq!(*tint, Rgb::from_hex(0x000000));
                    Some(src.x)
                }
                _ => None,
            })
            .collect();
        // "01:01:01" with 10px glyphs
        assert_eq!(xs, vec![0, 10, 100, 0, 10, 100, 0, 10]);
    }

    #[test]
    fn test_grid_lattice() {
        let state = ClockState::new(Mode::Clock, Palette::Light, true, 0);
        let mut composer = FrameComposer::new(10, 0.75);
        let mut driver = RecordingDriver::new(95, 40);
        composer.render(&state, &atlas(), &mut driver).unwrap();

        let grid = Rgb::from_hex(0xAAAAAA);
        let points: Vec<(u32, u32)> = driver
            .calls
            .iter()
            .filter_map(|c| match c {
                DriverCall::Point(x, y, color) => {
                    assert_eq!(*color, grid);
                    Some((*x, *y))
                }
                _ => None,
            })
            .collect();
        assert_eq!(points.len(), 10 * 4);
        assert!(points.iter().all(|(x, y)| x % 10 == 0 && y % 10 == 0));
        assert!(points.contains(&(90, 30)));
    }

    #[test]
    fn test_title_only_set_when_changed() {
        let mut state = ClockState::new(Mode::Stopwatch, Palette::Light, false, 0);
        let mut composer = FrameComposer::new(10, 0.75);
        let mut driver = RecordingDriver::new(640, 480);
        let atlas = atlas();

        composer.render(&state, &atlas, &mut driver).unwrap();
        composer.render(&state, &atlas, &mut driver).unwrap();
        state.advance(1);
        composer.render(&state, &atlas, &mut driver).unwrap();
        state.toggle_pause();
        composer.render(&state, &atlas, &mut driver).unwrap();
        composer.render(&state, &atlas, &mut driver).unwrap();

        assert_eq!(
            driver.titles(),
            vec![
                "00:00:00 - sclock".to_string(),
                "00:00:01 - sclock".to_string(),
                "00:00:01 - sclock (paused)".to_string(),
            ]
        );
    }

    #[test]
    fn test_paused_tint() {
        let mut state = ClockState::new(Mode::Stopwatch, Palette::Dark, false, 0);
        state.toggle_pause();
        let mut composer = FrameComposer::new(10, 0.75);
        let mut driver = RecordingDriver::new(640, 480);
        composer.render(&state, &atlas(), &mut driver).unwrap();

        let paused = Rgb::from_hex(0xBBBBBB);
        assert!(driver
            .calls
            .iter()
            .all(|c| !matches!(c, DriverCall::Glyph(_, _, tint) if *tint != paused)));
    }

    #[test]
    fn test_degenerate_viewport_skips_drawing() {
        let state = ClockState::new(Mode::Clock, Palette::Dark, true, 0);
        let mut composer = FrameComposer::new(10, 0.75);
        let mut driver = RecordingDriver::new(640, 0);
        let atlas = atlas();

        let outcome = composer.render(&state, &atlas, &mut driver).unwrap();
        assert_eq!(outcome, FrameOutcome::Skipped);
        assert!(driver.calls.iter().all(|c| matches!(c, DriverCall::Title(_))));

        // Recovers once the viewport is valid again
        driver.viewport = Viewport::new(640, 480);
        let outcome = composer.render(&state, &atlas, &mut driver).unwrap();
        assert_eq!(outcome, FrameOutcome::Presented);
    }

    #[test]
    fn test_unavailable_surface_reports_dropped() {
        let state = ClockState::new(Mode::Clock, Palette::Dark, false, 0);
        let mut composer = FrameComposer::new(10, 0.75);
        let mut driver = RecordingDriver::new(640, 480);
        driver.surface_unavailable = true;
        let atlas = atlas();

        let outcome = composer.render(&state, &atlas, &mut driver).unwrap();
        assert_eq!(outcome, FrameOutcome::Dropped);

        driver.surface_unavailable = false;
        let outcome = composer.render(&state, &atlas, &mut driver).unwrap();
        assert_eq!(outcome, FrameOutcome::Presented);
    }
}
