use super::App;
use anyhow::Result;
use log::info;
use sclock_core::Dispatch;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

impl App {
    /// Run the application event loop
    ///
    /// Frames are paced by waking at the next frame deadline; input between
    /// deadlines is applied immediately and shows up in the next frame.
    pub fn run(self) -> Result<()> {
        let event_loop = self.event_loop;
        let mut renderer = self.renderer;
        let mut clock_state = self.clock_state;
        let mut composer = self.composer;
        let atlas = self.atlas;
        let time_source = self.time_source;
        let frame_interval = self.config.frame_interval();
        let mut modifiers_state = winit::event::Modifiers::default();
        let mut next_frame = Instant::now();

        info!("Starting event loop ({:?} per frame)", frame_interval);

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested");
                elwt.exit();
            }

            Event::WindowEvent {
                event: WindowEvent::ModifiersChanged(new_modifiers),
                ..
            } => {
                modifiers_state = new_modifiers;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                super::window::handle_resize(size, &mut renderer);
            }

            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                let outcome = super::input::handle_keyboard_input(
                    &event,
                    &modifiers_state,
                    &mut clock_state,
                    &mut renderer,
                );
                if outcome == Dispatch::Quit {
                    elwt.exit();
                }
            }

            Event::AboutToWait => {
                let now = Instant::now();
                if now >= next_frame {
                    super::window::render_frame(
                        &time_source,
                        &mut clock_state,
                        &mut composer,
                        &atlas,
                        &mut renderer,
                    );
                    next_frame = now + frame_interval;
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
            }

            _ => {}
        })?;

        info!("Event loop finished");
        Ok(())
    }
}
