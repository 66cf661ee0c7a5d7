use log::debug;
use sclock_core::{dispatch, key_to_command, ClockState, Dispatch, InputModifiers, Renderer};
use winit::{
    event::{ElementState, KeyEvent, Modifiers},
    keyboard::PhysicalKey,
};

/// Handle keyboard input events
///
/// Only presses are acted on; releases and unbound keys continue the loop.
pub(super) fn handle_keyboard_input(
    event: &KeyEvent,
    modifiers_state: &Modifiers,
    clock_state: &mut ClockState,
    renderer: &mut Renderer,
) -> Dispatch {
    if event.state != ElementState::Pressed {
        return Dispatch::Continue;
    }

    let PhysicalKey::Code(code) = event.physical_key else {
        return Dispatch::Continue;
    };

    let mods = InputModifiers::from_winit(modifiers_state.state());
    match key_to_command(code, mods) {
        Some(command) => {
            debug!("{:?} -> {:?}", code, command);
            dispatch(command, clock_state, renderer)
        }
        None => Dispatch::Continue,
    }
}
