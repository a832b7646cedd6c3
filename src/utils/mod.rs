//! Frame formatting helpers

pub mod display;

pub use display::{render_frame, FrameStyle};
