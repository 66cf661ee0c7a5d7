mod event_loop;
mod init;
mod input;
mod state;
mod window;

pub use state::App;
