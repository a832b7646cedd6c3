//! Terminal Game of Life
//!
//! Runs Conway's Game of Life on a grid sized to the terminal, redrawing
//! each generation until interrupted.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod terminal;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{initialize_grid, next_generation, Grid, Rule};
pub use simulation::{CancellationToken, RunSummary};

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulation::{Driver, Simulation, ThreadPacer};
use terminal::{DisplaySurface, TerminalSurface};

/// Run the simulation on stdout until `cancel` is set or the generation limit is hit
pub fn run_simulation(settings: &Settings, cancel: &CancellationToken) -> Result<RunSummary> {
    let surface = TerminalSurface::stdout();
    let mut rng = match settings.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut simulation = Simulation::from_settings(settings, surface.size(), &mut rng);
    let (rows, cols) = simulation.grid().dimensions();
    info!(
        "Starting {}x{} simulation with rule {} ({} living)",
        rows,
        cols,
        simulation.rule(),
        simulation.grid().living_count()
    );

    let mut driver = Driver::new(surface, ThreadPacer::default(), &settings.display)
        .with_generation_limit(settings.simulation.max_generations);
    driver.run(&mut simulation, cancel)
}
