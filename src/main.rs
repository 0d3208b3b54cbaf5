//! Application entry point.

use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};
use log::{error, info};

use gocraft::game::screenshot;
use gocraft::{App, Cli, GameError};

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
    info!("Logger initialized");

    let config = cli.to_config().map_err(|e| {
        error!("{}", e);
        e
    })?;

    if let Some(path) = &cli.screenshot {
        return screenshot::save(&config, path).map_err(|e| {
            error!("Screenshot failed: {}", e);
            e
        });
    }

    let event_loop = EventLoop::new().map_err(|e| {
        error!("Failed to create event loop: {:?}", e);
        e
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    info!("Starting {:?} scene", config.scene);
    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Application error: {:?}", e);
        return Err(e.into());
    }

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
