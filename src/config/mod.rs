//! Configuration management for the terminal Game of Life

pub mod settings;

pub use settings::{CliOverrides, DisplayConfig, Settings, SimulationConfig};
