use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use bounce_sim::engine::game_loop::{LoopConfig, SimulationLoop};
use bounce_sim::engine::renderer::{AsciiRenderer, CLEAR_SCREEN};
use bounce_sim::game::Scenario;
use bounce_sim::SimulationParams;

const USAGE: &str = "usage: bounce-sim [FRAMES] [two-balls | pit | pit:<count>]";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let mut config = LoopConfig::default();
    if let Some(frames) = args.next() {
        if frames == "-h" || frames == "--help" {
            println!("{}", USAGE);
            return Ok(());
        }
        config.frames = frames
            .parse()
            .with_context(|| format!("Invalid frame count '{}'\n{}", frames, USAGE))?;
    }
    let scenario: Scenario = match args.next() {
        Some(name) => name.parse().context(USAGE)?,
        None => Scenario::default(),
    };

    info!("Starting bounce-sim ({})...", scenario);

    let params = SimulationParams::default();
    let mut world = scenario
        .build(params)
        .context("Failed to set up scenario")?;
    let renderer = AsciiRenderer::for_bounds(&params.bounds);

    let stdout = io::stdout();
    let mut sim = SimulationLoop::new(config);
    sim.run(&mut world, |world, _frame| -> io::Result<()> {
        let mut out = stdout.lock();
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        out.write_all(renderer.frame(world.bodies()).as_bytes())?;
        out.flush()
    })
    .context("Failed to draw frame")?;

    info!(
        "Done: {} frames, {} collisions, kinetic energy {:.3}",
        sim.frame_count(),
        sim.collision_count(),
        world.kinetic_energy()
    );

    Ok(())
}
