//! Display surfaces the simulation draws onto
//!
//! The driver only talks to [`DisplaySurface`], so the loop runs the same
//! against a real terminal ([`TerminalSurface`]) or an in-memory recorder
//! ([`RecordingSurface`]).

pub mod recording;
pub mod surface;

pub use recording::{RecordingSurface, SurfaceEvent};
pub use surface::TerminalSurface;

use crate::config::DisplayConfig;
use std::io;

/// Something that can be sized, cleared and written a frame at a time
pub trait DisplaySurface {
    /// Current `(lines, columns)`, or `None` when the size cannot be queried
    fn size(&self) -> Option<(u16, u16)>;

    /// Clear previously written output
    fn clear(&mut self) -> io::Result<()>;

    /// Write a complete frame and flush it
    fn write_frame(&mut self, frame: &str) -> io::Result<()>;

    /// Called once before the first frame
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called once after the last frame, even when the run failed
    fn leave(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Grid `(rows, cols)` for a display of `(lines, columns)`.
///
/// Falls back to the configured size when the display size is unknown,
/// subtracts the margin from both dimensions and never returns less than 1x1.
pub fn determine_dimensions(
    display_size: Option<(u16, u16)>,
    config: &DisplayConfig,
) -> (usize, usize) {
    let (lines, columns) = display_size.unwrap_or_else(|| config.fallback_size());
    let rows = lines.saturating_sub(config.margin).max(1);
    let cols = columns.saturating_sub(config.margin).max(1);
    (rows as usize, cols as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_display() {
        let config = DisplayConfig::default();
        assert_eq!(determine_dimensions(Some((24, 80)), &config), (22, 78));
        assert_eq!(determine_dimensions(Some((50, 200)), &config), (48, 198));
    }

    #[test]
    fn test_dimensions_fallback() {
        let config = DisplayConfig::default();
        assert_eq!(determine_dimensions(None, &config), (18, 78));
    }

    #[test]
    fn test_dimensions_clamped() {
        let config = DisplayConfig::default();
        assert_eq!(determine_dimensions(Some((2, 1)), &config), (1, 1));
        assert_eq!(determine_dimensions(Some((0, 0)), &config), (1, 1));
        assert_eq!(determine_dimensions(Some((3, 10)), &config), (1, 8));
    }

    #[test]
    fn test_dimensions_custom_margin() {
        let config = DisplayConfig {
            margin: 0,
            fallback_lines: 5,
            fallback_columns: 7,
            ..DisplayConfig::default()
        };
        assert_eq!(determine_dimensions(None, &config), (5, 7));
        assert_eq!(determine_dimensions(Some((30, 90)), &config), (30, 90));
    }
}
