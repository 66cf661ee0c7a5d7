pub mod atlas;
pub mod clock;
pub mod command;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod time_source;

pub use atlas::{char_to_index, DigitAtlas, GlyphIndex, GlyphSize};
pub use clock::{ClockState, DisplayTime, Mode, PomodoroDurations, PomodoroPhase};
pub use command::{dispatch, Command, Dispatch};
pub use config::Config;
pub use driver::RenderDriver;
pub use error::{AtlasError, ConfigError, LayoutError};
pub use frame::{FrameComposer, FrameOutcome};
pub use geometry::{GlyphRect, Rect, Viewport};
pub use input::{key_to_command, InputModifiers};
pub use layout::{compute_layout, LayoutResult, PlacedGlyph};
pub use palette::{color_for, ColorRole, Palette, Rgb};
pub use renderer::Renderer;
pub use time_source::{LocalClock, TimeSource, Timestamp};
