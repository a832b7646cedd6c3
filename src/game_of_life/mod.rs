//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod rules;

pub use error::LifeError;
pub use grid::{initialize_grid, Grid};
pub use rules::{next_generation, Rule};
