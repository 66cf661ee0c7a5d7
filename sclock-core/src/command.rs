use crate::clock::{ClockState, Mode};
use crate::driver::RenderDriver;
use log::info;

/// Discrete user commands, applied between frames in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePalette,
    ToggleGrid,
    TogglePause,
    /// Forwarded to the render driver untouched
    ToggleFullscreen,
    SwitchMode(Mode),
}

/// Whether the event loop keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Quit,
}

/// Apply one command to the clock state or the driver
pub fn dispatch<D: RenderDriver + ?Sized>(
    command: Command,
    state: &mut ClockState,
    driver: &mut D,
) -> Dispatch {
    match command {
        Command::Quit => {
            info!("Quit requested");
            return Dispatch::Quit;
        }
        Command::TogglePalette => state.toggle_palette(),
        Command::ToggleGrid => state.toggle_grid(),
        Command::TogglePause => state.toggle_pause(),
        Command::ToggleFullscreen => driver.toggle_fullscreen(),
        Command::SwitchMode(mode) => state.switch_mode(mode),
    }
    Dispatch::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::tests::RecordingDriver;
    use crate::palette::Palette;

    fn state() -> ClockState {
        ClockState::new(Mode::Stopwatch, Palette::Dark, false, 0)
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        let mut driver = RecordingDriver::new(640, 480);
        assert_eq!(dispatch(Command::Quit, &mut state, &mut driver), Dispatch::Quit);
    }

    #[test]
    fn test_state_commands() {
        let mut state = state();
        let mut driver = RecordingDriver::new(640, 480);

        assert_eq!(dispatch(Command::TogglePalette, &mut state, &mut driver), Dispatch::Continue);
        assert_eq!(state.palette(), Palette::Light);

        dispatch(Command::ToggleGrid, &mut state, &mut driver);
        assert!(state.grid_visible());

        dispatch(Command::TogglePause, &mut state, &mut driver);
        assert!(state.paused());

        dispatch(Command::SwitchMode(Mode::Clock), &mut state, &mut driver);
        assert_eq!(state.mode(), Mode::Clock);

        assert!(driver.calls.is_empty());
    }

    #[test]
    fn test_fullscreen_goes_to_driver() {
        let mut state = state();
        let mut driver = RecordingDriver::new(640, 480);
        dispatch(Command::ToggleFullscreen, &mut state, &mut driver);
        dispatch(Command::ToggleFullscreen, &mut state, &mut driver);
        assert_eq!(driver.fullscreen_toggles, 2);
        assert_eq!(state.mode(), Mode::Stopwatch);
    }
}
