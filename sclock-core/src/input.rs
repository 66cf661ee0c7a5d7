/// Keyboard input handling - converts key presses to clock commands
///
/// Keys are matched by physical position so the bindings stay put across
/// keyboard layouts.

use crate::clock::Mode;
use crate::command::Command;
use winit::keyboard::{KeyCode, ModifiersState};

/// Modifier key states at the time of a key press
///
/// Shift is not tracked; it never blocks a binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl InputModifiers {
    pub fn from_winit(mods: ModifiersState) -> Self {
        Self {
            ctrl: mods.control_key(),
            alt: mods.alt_key(),
            meta: mods.super_key(),
        }
    }

    /// Check if any modifiers are active
    pub fn has_modifiers(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Convert a key press to a command
///
/// Returns None for unbound keys and for chords with Ctrl/Alt/Meta held, so
/// system shortcuts keep working.
pub fn key_to_command(physical_key: KeyCode, mods: InputModifiers) -> Option<Command> {
    if mods.has_modifiers() {
        return None;
    }

    match physical_key {
        KeyCode::Escape | KeyCode::KeyQ => Some(Command::Quit),
        KeyCode::KeyC => Some(Command::TogglePalette),
        KeyCode::KeyG => Some(Command::ToggleGrid),
        KeyCode::Space | KeyCode::KeyP => Some(Command::TogglePause),
        KeyCode::KeyF | KeyCode::F11 => Some(Command::ToggleFullscreen),
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(Command::SwitchMode(Mode::Clock)),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(Command::SwitchMode(Mode::Stopwatch)),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(Command::SwitchMode(Mode::Pomodoro)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let mods = InputModifiers::default();
        assert_eq!(key_to_command(KeyCode::Escape, mods), Some(Command::Quit));
        assert_eq!(key_to_command(KeyCode::KeyQ, mods), Some(Command::Quit));
    }

    #[test]
    fn test_toggle_keys() {
        let mods = InputModifiers::default();
        assert_eq!(key_to_command(KeyCode::KeyC, mods), Some(Command::TogglePalette));
        assert_eq!(key_to_command(KeyCode::KeyG, mods), Some(Command::ToggleGrid));
        assert_eq!(key_to_command(KeyCode::Space, mods), Some(Command::TogglePause));
        assert_eq!(key_to_command(KeyCode::F11, mods), Some(Command::ToggleFullscreen));
    }

    #[test]
    fn test_mode_keys() {
        let mods = InputModifiers::default();
        assert_eq!(
            key_to_command(KeyCode::Digit2, mods),
            Some(Command::SwitchMode(Mode::Stopwatch))
        );
        assert_eq!(
            key_to_command(KeyCode::Numpad3, mods),
            Some(Command::SwitchMode(Mode::Pomodoro))
        );
    }

    #[test]
    fn test_modified_chords_ignored() {
        let ctrl = InputModifiers {
            ctrl: true,
            ..Default::default()
        };
        assert_eq!(key_to_command(KeyCode::KeyQ, ctrl), None);

        let meta = InputModifiers {
            meta: true,
            ..Default::default()
        };
        assert_eq!(key_to_command(KeyCode::KeyG, meta), None);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(key_to_command(KeyCode::KeyZ, InputModifiers::default()), None);
    }
}
