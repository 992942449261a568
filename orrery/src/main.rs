//! Solar System Simulation
//!
//! The Sun, eight planets, the Moon and Deimos under Newtonian gravity,
//! rendered with wgpu and an egui text overlay.
//!
//! Controls:
//! - T: Toggle name labels
//! - L: Toggle orbit trails
//! - Left/Right: Slow down / speed up
//! - A/D: Previous / next reference body
//! - Up/Down (hold): Zoom in / out
//! - Escape: Quit

mod app;
mod hud;
mod renderer;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use common::GraphicsContext;
use winit::{
    event::{Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::PhysicalKey,
};

use app::App;
use orrery::config::load_scenario;
use orrery::{scenario, AppConfig, Controls, Flow, SystemBuilder};

const CONTROLS: &str = "\
Controls:
  T          Toggle name labels
  L          Toggle orbit trails
  Left/Right Slow down / speed up
  A/D        Previous / next reference body
  Up/Down    Zoom in / out (hold)
  Escape     Quit";

#[derive(Parser, Debug)]
#[command(version, about = "Interactive 2D solar system simulation", after_help = CONTROLS)]
struct Cli {
    /// YAML file overriding window and initial control settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML list of bodies replacing the built-in solar system
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let builder = match &cli.scenario {
        Some(path) => SystemBuilder::new().extend(load_scenario(path)?),
        None => scenario::solar_system(),
    };
    let simulator = builder.build().context("invalid body description")?;
    simulator
        .change_reference(&config.reference, 0)
        .context("invalid initial reference body")?;
    log::info!(
        "Loaded {} bodies ({} moons), centered on {}",
        simulator.bodies().len(),
        simulator.moons().len(),
        config.reference
    );

    log::info!("Keys: T labels, L trails, Left/Right rate, A/D reference, Up/Down zoom, Escape quit");

    let controls = Controls::from_config(&config);
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        &config.title,
        config.width,
        config.height,
    ))
    .context("failed to initialise graphics")?;

    let mut app = App::new(ctx, simulator, controls, &config);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { ref event, .. } => {
            if app.handle_window_event(event) {
                return;
            }

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => app.resize(*size),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key),
                            state,
                            repeat,
                            ..
                        },
                    ..
                } => {
                    if app.handle_key(*key, *state, *repeat) == Flow::Quit {
                        elwt.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if app.update() == Flow::Quit {
                        elwt.exit();
                        return;
                    }
                    match app.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            log::warn!("Surface lost, reconfiguring");
                            app.resize(app.size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, exiting");
                            elwt.exit();
                        }
                        Err(e) => log::error!("Render error: {:?}", e),
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            let deadline = app.pace(std::time::Instant::now());
            elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
        _ => {}
    })?;

    Ok(())
}
