use log::{debug, error};
use sclock_core::{ClockState, DigitAtlas, FrameComposer, Renderer, TimeSource};
use winit::dpi::PhysicalSize;

/// Handle window resize events
pub(super) fn handle_resize(size: PhysicalSize<u32>, renderer: &mut Renderer) {
    debug!("Window resized: {:?}", size);
    renderer.resize(size.width, size.height);
}

/// Advance the clock to the current time and paint one frame
///
/// Render failures are logged and the loop carries on with the next frame.
pub(super) fn render_frame(
    time_source: &impl TimeSource,
    clock_state: &mut ClockState,
    composer: &mut FrameComposer,
    atlas: &DigitAtlas,
    renderer: &mut Renderer,
) {
    clock_state.advance(time_source.now());
    if let Err(e) = composer.render(clock_state, atlas, renderer) {
        error!("Render error: {:#}", e);
    }
}
