mod app;

use anyhow::Result;
use log::info;
use sclock_core::Mode;
use std::env;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mode = env::args()
        .nth(1)
        .and_then(|arg| Mode::from_arg(&arg))
        .unwrap_or_default();
    info!("Starting sclock in {:?} mode", mode);

    // Load configuration
    let config = sclock_core::Config::load(None)?;
    info!("Loaded configuration: {:?}", config);

    // Create and run the application
    let app = app::App::new(config, mode)?;
    app.run()?;

    Ok(())
}
