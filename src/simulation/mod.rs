//! Render/advance/pause loop driving a simulation on a display surface

pub mod control;
pub mod driver;

pub use control::{CancellationToken, Pacer, RecordingPacer, ThreadPacer};
pub use driver::{Driver, RunSummary, Simulation, StopReason};
