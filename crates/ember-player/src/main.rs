//! Ember Player - demo binary for the Ember runtime
//!
//! Opens a window, seeds the state stack with the main menu, and runs the
//! fixed-timestep loop until the window closes or the stack runs empty.

use anyhow::{Context, Result};
use clap::Parser;
use ember_player::PlayerApp;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "ember-player")]
#[command(about = "Ember demo player - state stack and fixed-timestep loop")]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Window title
    #[arg(long, default_value = "Ember Player")]
    title: String,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Fixed simulation rate in Hz
    #[arg(long, default_value_t = 60.0)]
    fixed_hz: f64,
}

fn main() -> Result<()> {
    // Default to info-level logging, suppressing noisy GPU backend logs;
    // RUST_LOG overrides.
    let default = "info,wgpu_hal=off,wgpu_core=off,wgpu=off,naga=off";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PlayerApp::new(
        args.title,
        (args.width, args.height),
        args.fullscreen,
        args.fixed_hz,
    );
    event_loop.run_app(&mut app).context("Event loop failed")?;

    if let Some(e) = app.take_error() {
        return Err(e).context("Player terminated with an error");
    }

    Ok(())
}
