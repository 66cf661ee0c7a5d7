use serde::{Deserialize, Serialize};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Normalized RGBA (0.0-1.0), fully opaque
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Semantic color slots every palette fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Grid,
    Foreground,
    Paused,
    PomodoroWork,
    PomodoroRest,
}

/// Selectable color palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Dark,
    #[default]
    Light,
}

impl Palette {
    pub const COUNT: usize = 2;

    /// Cycle order for `next()`
    pub const ALL: [Palette; Self::COUNT] = [Palette::Dark, Palette::Light];

    /// Position of this palette in `ALL`
    pub fn index(self) -> usize {
        match self {
            Palette::Dark => 0,
            Palette::Light => 1,
        }
    }

    /// The palette after this one, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Dark => "dark",
            Palette::Light => "light",
        }
    }

    /// Look up the color for a role
    pub fn color_for(self, role: ColorRole) -> Rgb {
        let colors = self.colors();
        match role {
            ColorRole::Background => colors.background,
            ColorRole::Grid => colors.grid,
            ColorRole::Foreground => colors.foreground,
            ColorRole::Paused => colors.paused,
            ColorRole::PomodoroWork => colors.pomodoro_work,
            ColorRole::PomodoroRest => colors.pomodoro_rest,
        }
    }

    fn colors(self) -> &'static PaletteColors {
        match self {
            Palette::Dark => &DARK,
            Palette::Light => &LIGHT,
        }
    }
}

/// Free-function form of [`Palette::color_for`]
pub fn color_for(palette: Palette, role: ColorRole) -> Rgb {
    palette.color_for(role)
}

struct PaletteColors {
    background: Rgb,
    grid: Rgb,
    foreground: Rgb,
    paused: Rgb,
    pomodoro_work: Rgb,
    pomodoro_rest: Rgb,
}

const DARK: PaletteColors = PaletteColors {
    background: Rgb::from_hex(0x000000),
    grid: Rgb::from_hex(0x333333),
    foreground: Rgb::from_hex(0xFFFFFF),
    paused: Rgb::from_hex(0xBBBBBB),
    pomodoro_work: Rgb::from_hex(0xAB3131),
    pomodoro_rest: Rgb::from_hex(0x507B58),
};

const LIGHT: PaletteColors = PaletteColors {
    background: Rgb::from_hex(0xFFFFFF),
    grid: Rgb::from_hex(0xAAAAAA),
    foreground: Rgb::from_hex(0x000000),
    paused: Rgb::from_hex(0x444444),
    pomodoro_work: Rgb::from_hex(0xAB3131),
    pomodoro_rest: Rgb::from_hex(0x507B58),
};
