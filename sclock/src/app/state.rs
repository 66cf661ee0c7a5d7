use sclock_core::{ClockState, Config, DigitAtlas, FrameComposer, LocalClock, Renderer};
use winit::event_loop::EventLoop;

/// Main application state
///
/// Everything here moves into the event-loop closure in [`App::run`]; there
/// is no shared or global state.
pub struct App {
    pub(super) config: Config,
    pub(super) event_loop: EventLoop<()>,
    pub(super) renderer: Renderer,
    pub(super) atlas: DigitAtlas,
    pub(super) clock_state: ClockState,
    pub(super) composer: FrameComposer,
    pub(super) time_source: LocalClock,
}
