//! Compiled-in defaults and fixed limits
//!
//! Values marked "default" seed `Config::default()` and can be overridden
//! from the config file. The rest are properties of the display format and
//! the digit atlas and never change at runtime.

/// Application name, used for the window title and the config directory
pub const APP_NAME: &str = "sclock";

/// Number of glyphs in the digit atlas strip ('0'-'9' and ':')
pub const GLYPH_COUNT: u32 = 11;

/// Atlas index of the ':' separator glyph
pub const SEPARATOR_GLYPH: u8 = 10;

/// Default window width in logical pixels
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;

/// Default window height in logical pixels
pub const DEFAULT_WINDOW_HEIGHT: u32 = 480;

/// Default frame rate cap
pub const DEFAULT_FPS: u32 = 60;

/// Highest accepted frame rate; keeps the frame interval at 1ms or more
pub const MAX_FPS: u32 = 1000;

/// Default space in pixels between dots in the background grid
pub const DEFAULT_GRID_STEP: u32 = 10;

/// Default maximum scale for the digits when rendering
pub const DEFAULT_MAX_DIGIT_SCALE: f32 = 0.75;

/// Default pomodoro work phase length in minutes
pub const DEFAULT_POMODORO_WORK_MINUTES: u32 = 25;

/// Default pomodoro rest phase length in minutes
pub const DEFAULT_POMODORO_REST_MINUTES: u32 = 5;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Largest hour value the two-digit hour field can show
pub const MAX_DISPLAY_HOURS: u64 = 99;
