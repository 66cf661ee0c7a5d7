use super::App;
use anyhow::{Context, Result};
use log::info;
use sclock_core::{
    ClockState, Config, DigitAtlas, FrameComposer, LocalClock, Mode, PomodoroDurations, Renderer,
    TimeSource,
};
use std::sync::Arc;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

impl App {
    /// Create the window, GPU renderer and initial clock state
    pub fn new(config: Config, mode: Mode) -> Result<Self> {
        info!("Initializing application");

        let event_loop = EventLoop::new().context("Failed to create event loop")?;

        let window = WindowBuilder::new()
            .with_title(sclock_core::constants::APP_NAME)
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height))
            .with_resizable(true)
            .build(&event_loop)
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let atlas = DigitAtlas::load(config.appearance.atlas_path.as_deref())
            .context("Failed to load digit atlas")?;

        let renderer = pollster::block_on(Renderer::new(window, &atlas))?;

        let time_source = LocalClock;
        let pomodoro = PomodoroDurations::from_minutes(
            config.pomodoro.work_minutes,
            config.pomodoro.rest_minutes,
        );
        let clock_state = ClockState::new(
            mode,
            config.appearance.palette,
            config.appearance.grid,
            time_source.now(),
        )
        .with_pomodoro(pomodoro);

        let composer = FrameComposer::from_config(&config);

        Ok(Self {
            config,
            event_loop,
            renderer,
            atlas,
            clock_state,
            composer,
            time_source,
        })
    }
}
