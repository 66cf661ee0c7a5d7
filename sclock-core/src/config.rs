use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_NAME, DEFAULT_FPS, DEFAULT_GRID_STEP, DEFAULT_MAX_DIGIT_SCALE,
    DEFAULT_POMODORO_REST_MINUTES, DEFAULT_POMODORO_WORK_MINUTES, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, MAX_FPS,
};
use crate::error::ConfigError;
use crate::palette::Palette;

/// Configuration for sclock
///
/// Every key is optional; missing keys fall back to the compiled-in
/// defaults in `constants`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub appearance: AppearanceConfig,
    pub pomodoro: PomodoroConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels
    pub width: u32,
    /// Initial window height in logical pixels
    pub height: u32,
    /// Frame rate cap
    pub fps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Palette selected at startup
    pub palette: Palette,
    /// Show the background dot-grid at startup
    pub grid: bool,
    /// Space in pixels between grid dots
    pub grid_step: u32,
    /// Upper bound for the digit scale
    pub max_digit_scale: f32,
    /// Alternative digit strip (PNG, 11 glyphs wide); None = built-in
    pub atlas_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroConfig {
    pub work_minutes: u32,
    pub rest_minutes: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            fps: DEFAULT_FPS,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            grid: true,
            grid_step: DEFAULT_GRID_STEP,
            max_digit_scale: DEFAULT_MAX_DIGIT_SCALE,
            atlas_path: None,
        }
    }
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_POMODORO_WORK_MINUTES,
            rest_minutes: DEFAULT_POMODORO_REST_MINUTES,
        }
    }
}

impl Config {
    /// Load configuration from file, or fall back to defaults if it does not exist
    ///
    /// With `path` = None the default location is used. The file is only
    /// ever read; a missing file is not created.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let Some(config_path) = path.or_else(default_config_path) else {
            log::debug!("No config directory available, using defaults");
            return Ok(Config::default());
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("Loading config from {}", config_path.display());
        let contents = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        Self::from_toml(&contents, &config_path)
    }

    /// Parse and validate TOML text; `origin` is only used in error messages
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the clock cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.fps == 0 || self.window.fps > MAX_FPS {
            return Err(invalid("window.fps", "must be between 1 and 1000"));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window.width/height", "must be non-zero"));
        }
        if self.appearance.grid_step == 0 {
            return Err(invalid("appearance.grid_step", "must be at least 1"));
        }
        let scale = self.appearance.max_digit_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(invalid("appearance.max_digit_scale", "must be a positive number"));
        }
        if self.pomodoro.work_minutes == 0 || self.pomodoro.rest_minutes == 0 {
            return Err(invalid("pomodoro", "phase lengths must be at least 1 minute"));
        }
        Ok(())
    }

    /// Delay between frames, never shorter than 1ms
    pub fn frame_interval(&self) -> std::time::Duration {
        let fps = self.window.fps.clamp(1, MAX_FPS);
        std::time::Duration::from_nanos(1_000_000_000 / u64::from(fps))
    }
}

fn invalid(key: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
    }
}

/// `$XDG_CONFIG_HOME/sclock/config.toml`, else `$HOME/.config/sclock/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_NAME);
    path.push("config.toml");
    Some(path)
}

mod dirs {
    use std::ffi::OsString;
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        resolve(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
    }

    /// A non-empty `XDG_CONFIG_HOME` wins over `$HOME/.config`
    pub(super) fn resolve(xdg: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
        if let Some(xdg) = xdg.filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(xdg));
        }
        home.map(|home| {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path
        })
    }
}
