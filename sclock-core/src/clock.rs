use crate::constants::{APP_NAME, MAX_DISPLAY_HOURS};
use crate::palette::{ColorRole, Palette};
use crate::time_source::Timestamp;
use log::{debug, info};
use std::fmt;

/// What the digits show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Wall-clock time of day
    #[default]
    Clock,
    /// Elapsed time since the mode was entered, pausable
    Stopwatch,
    /// Countdown alternating between work and rest phases, pausable
    Pomodoro,
}

impl Mode {
    /// Parse the startup mode from a command line argument
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "clock" => Some(Mode::Clock),
            "stopwatch" => Some(Mode::Stopwatch),
            "pomodoro" => Some(Mode::Pomodoro),
            _ => None,
        }
    }

    /// Whether `toggle_pause` has any effect in this mode
    pub fn is_pausable(self) -> bool {
        !matches!(self, Mode::Clock)
    }
}

/// Current pomodoro period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PomodoroPhase {
    Work,
    Rest,
}

impl PomodoroPhase {
    pub fn next(self) -> Self {
        match self {
            PomodoroPhase::Work => PomodoroPhase::Rest,
            PomodoroPhase::Rest => PomodoroPhase::Work,
        }
    }
}

/// Phase lengths in seconds, both non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroDurations {
    work_secs: u64,
    rest_secs: u64,
}

impl PomodoroDurations {
    /// Zero-length phases are bumped to one second
    pub fn new(work_secs: u64, rest_secs: u64) -> Self {
        Self {
            work_secs: work_secs.max(1),
            rest_secs: rest_secs.max(1),
        }
    }

    pub fn from_minutes(work_minutes: u32, rest_minutes: u32) -> Self {
        Self::new(u64::from(work_minutes) * 60, u64::from(rest_minutes) * 60)
    }

    pub fn length(&self, phase: PomodoroPhase) -> u64 {
        match phase {
            PomodoroPhase::Work => self.work_secs,
            PomodoroPhase::Rest => self.rest_secs,
        }
    }

    fn cycle(&self) -> u64 {
        self.work_secs + self.rest_secs
    }
}

impl Default for PomodoroDurations {
    fn default() -> Self {
        Self::from_minutes(
            crate::constants::DEFAULT_POMODORO_WORK_MINUTES,
            crate::constants::DEFAULT_POMODORO_REST_MINUTES,
        )
    }
}

/// Hours/minutes/seconds split of a displayed value
///
/// The hour field is two digits wide; values past 99 hours are clamped to
/// 99 rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl DisplayTime {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: (total / 3600).min(MAX_DISPLAY_HOURS) as u8,
            minutes: (total / 60 % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Time and mode state of the clock
///
/// Owned by the event loop and mutated only by [`ClockState::advance`] once
/// per frame and by the discrete toggle/switch commands in between.
#[derive(Debug, Clone)]
pub struct ClockState {
    mode: Mode,
    palette: Palette,
    grid_visible: bool,
    paused: bool,
    /// Wall-clock reading seen by the previous `advance`
    last_observed: Timestamp,
    /// Value produced by the last `advance` (or mode switch)
    displayed: u64,
    /// Stopwatch elapsed time, or elapsed time within the pomodoro phase
    elapsed: u64,
    phase: PomodoroPhase,
    pomodoro: PomodoroDurations,
}

impl ClockState {
    /// Create the startup state; `now` seeds the last observed time
    pub fn new(mode: Mode, palette: Palette, grid_visible: bool, now: impl Into<Timestamp>) -> Self {
        let mut state = Self {
            mode,
            palette,
            grid_visible,
            paused: false,
            last_observed: now.into(),
            displayed: 0,
            elapsed: 0,
            phase: PomodoroPhase::Work,
            pomodoro: PomodoroDurations::default(),
        };
        state.displayed = state.initial_display();
        state
    }

    /// Replace the pomodoro phase lengths; restarts the current phase
    pub fn with_pomodoro(mut self, durations: PomodoroDurations) -> Self {
        self.pomodoro = durations;
        self.elapsed = 0;
        self.phase = PomodoroPhase::Work;
        self.displayed = self.initial_display();
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    pub fn displayed_seconds(&self) -> u64 {
        self.displayed
    }

    /// Epoch seconds of the previous `advance`
    pub fn last_observed(&self) -> u64 {
        self.last_observed.epoch_secs
    }

    pub fn toggle_palette(&mut self) {
        self.palette = self.palette.next();
        debug!("Palette: {}", self.palette.name());
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
        debug!("Grid visible: {}", self.grid_visible);
    }

    /// Pause or resume; no-op in clock mode
    pub fn toggle_pause(&mut self) {
        if !self.mode.is_pausable() {
            return;
        }
        self.paused = !self.paused;
        debug!("Paused: {}", self.paused);
    }

    /// Change mode, restarting the new mode's counter
    ///
    /// Selecting the mode that is already active changes nothing.
    pub fn switch_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }

        info!("Switching mode: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.paused = false;
        self.elapsed = 0;
        self.phase = PomodoroPhase::Work;
        self.displayed = self.initial_display();
    }

    /// Advance to wall-clock time `now` and return the displayed seconds
    ///
    /// Stopwatch and pomodoro are credited the epoch difference since the
    /// last call, only while running and only when time moved forward, so a
    /// clock rollback never produces negative time. UTC offset changes are
    /// not credited; they only move the clock-mode time of day.
    pub fn advance(&mut self, now: impl Into<Timestamp>) -> u64 {
        let now = now.into();
        let credit = if self.paused {
            0
        } else {
            now.epoch_secs.saturating_sub(self.last_observed.epoch_secs)
        };

        self.displayed = match self.mode {
            Mode::Clock => now.time_of_day(),
            Mode::Stopwatch => {
                self.elapsed = self.elapsed.saturating_add(credit);
                self.elapsed
            }
            Mode::Pomodoro => {
                self.credit_pomodoro(credit);
                self.pomodoro.length(self.phase) - self.elapsed
            }
        };

        self.last_observed = now;
        self.displayed
    }

    fn credit_pomodoro(&mut self, credit: u64) {
        self.elapsed = self.elapsed.saturating_add(credit);

        // A full cycle lands back on the same phase
        let cycle = self.pomodoro.cycle();
        if self.elapsed >= cycle {
            self.elapsed %= cycle;
        }

        while self.elapsed >= self.pomodoro.length(self.phase) {
            self.elapsed -= self.pomodoro.length(self.phase);
            self.phase = self.phase.next();
            info!("Pomodoro phase: {:?}", self.phase);
        }
    }

    fn initial_display(&self) -> u64 {
        match self.mode {
            Mode::Clock => self.last_observed.time_of_day(),
            Mode::Stopwatch => self.elapsed,
            Mode::Pomodoro => self.pomodoro.length(self.phase) - self.elapsed,
        }
    }

    pub fn display_time(&self) -> DisplayTime {
        DisplayTime::from_seconds(self.displayed)
    }

    /// Role used to tint the digits
    pub fn digit_role(&self) -> ColorRole {
        if self.paused {
            return ColorRole::Paused;
        }
        match (self.mode, self.phase) {
            (Mode::Pomodoro, PomodoroPhase::Work) => ColorRole::PomodoroWork,
            (Mode::Pomodoro, PomodoroPhase::Rest) => ColorRole::PomodoroRest,
            _ => ColorRole::Foreground,
        }
    }

    /// Window title, e.g. `"01:02:03 - sclock (paused)"`
    pub fn title(&self) -> String {
        let status = if self.paused { " (paused)" } else { "" };
        format!("{} - {}{}", self.display_time(), APP_NAME, status)
    }
}
