//! Simulation state and the render loop

use super::{CancellationToken, Pacer};
use crate::config::{DisplayConfig, Settings};
use crate::game_of_life::{Grid, Rule};
use crate::terminal::{determine_dimensions, DisplaySurface};
use crate::utils::{render_frame, FrameStyle};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;
use std::mem;
use std::time::Duration;

/// Current grid plus a same-shaped spare buffer the next generation is written into
#[derive(Debug, Clone)]
pub struct Simulation {
    rule: Rule,
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid, rule: Rule) -> Self {
        let next = Grid::new(grid.rows(), grid.cols());
        Self {
            rule,
            current: grid,
            next,
            generation: 0,
        }
    }

    /// Size a random grid for the given display and seed it from `rng`
    pub fn from_settings<R: Rng + ?Sized>(
        settings: &Settings,
        display_size: Option<(u16, u16)>,
        rng: &mut R,
    ) -> Self {
        let (rows, cols) = determine_dimensions(display_size, &settings.display);
        let sim = &settings.simulation;
        let grid = Grid::random(rows, cols, sim.density, rng);
        Self::new(grid, sim.rule.clone())
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Number of generations advanced so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation
    pub fn step(&mut self) -> Result<()> {
        self.rule
            .evolve_into(&self.current, &mut self.next)
            .context("Failed to compute next generation")?;
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    GenerationLimit,
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_rendered: u64,
    pub generation: u64,
    pub population: usize,
    pub stop_reason: StopReason,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.stop_reason {
            StopReason::Cancelled => "interrupted",
            StopReason::GenerationLimit => "generation limit reached",
        };
        write!(
            f,
            "Stopped ({}) after {} frame(s); generation {} has {} living cell(s)",
            reason, self.frames_rendered, self.generation, self.population
        )
    }
}

/// Drives the clear, render, advance, pause cycle on a surface
pub struct Driver<S: DisplaySurface, P: Pacer> {
    surface: S,
    pacer: P,
    style: FrameStyle,
    frame_delay: Duration,
    max_generations: Option<u64>,
}

impl<S: DisplaySurface, P: Pacer> Driver<S, P> {
    pub fn new(surface: S, pacer: P, display: &DisplayConfig) -> Self {
        Self {
            surface,
            pacer,
            style: FrameStyle::from(display),
            frame_delay: display.frame_delay(),
            max_generations: None,
        }
    }

    /// Stop after rendering `limit` frames
    pub fn with_generation_limit(mut self, limit: Option<u64>) -> Self {
        self.max_generations = limit;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Run until `cancel` is set or the generation limit is reached
    pub fn run(
        &mut self,
        simulation: &mut Simulation,
        cancel: &CancellationToken,
    ) -> Result<RunSummary> {
        self.surface.enter().context("Failed to prepare display")?;
        let result = self.cycle(simulation, cancel);
        if let Err(err) = self.surface.leave() {
            warn!("Failed to restore display: {}", err);
        }
        result
    }

    fn cycle(
        &mut self,
        simulation: &mut Simulation,
        cancel: &CancellationToken,
    ) -> Result<RunSummary> {
        let mut frames_rendered = 0u64;
        let mut clear_failed = false;

        let stop_reason = loop {
            if cancel.is_cancelled() {
                break StopReason::Cancelled;
            }

            if let Err(err) = self.surface.clear() {
                if !clear_failed {
                    warn!("Failed to clear display, continuing without clearing: {}", err);
                    clear_failed = true;
                }
            }

            let frame = render_frame(simulation.grid(), &self.style);
            self.surface.write_frame(&frame).context("Failed to write frame")?;
            frames_rendered += 1;
            debug!(
                "Rendered generation {} ({} living)",
                simulation.generation(),
                simulation.grid().living_count()
            );

            simulation.step()?;

            if self.max_generations.is_some_and(|limit| frames_rendered >= limit) {
                break StopReason::GenerationLimit;
            }
            if cancel.is_cancelled() {
                break StopReason::Cancelled;
            }

            self.pacer.pause(self.frame_delay, cancel);
        };

        info!("Simulation stopped: {:?} after {} frame(s)", stop_reason, frames_rendered);

        Ok(RunSummary {
            frames_rendered,
            generation: simulation.generation(),
            population: simulation.grid().living_count(),
            stop_reason,
        })
    }
}
