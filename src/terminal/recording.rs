//! In-memory display surface for headless runs and tests

use super::DisplaySurface;
use crate::simulation::CancellationToken;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Clear,
    Frame(String),
}

/// Records every clear and frame with a fixed reported size
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Option<(u16, u16)>,
    events: Vec<SurfaceEvent>,
    fail_clear: bool,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl RecordingSurface {
    /// A surface reporting `(lines, columns)`
    pub fn new(lines: u16, columns: u16) -> Self {
        Self {
            size: Some((lines, columns)),
            ..Self::default()
        }
    }

    /// A surface whose size cannot be queried
    pub fn without_size() -> Self {
        Self::default()
    }

    /// Make every `clear` call fail
    pub fn with_failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    /// Cancel `token` once `frames` frames have been written
    pub fn cancel_after(mut self, frames: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((frames, token));
        self
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn frames(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Frame(frame) => Some(frame.as_str()),
                SurfaceEvent::Clear => None,
            })
            .collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.fail_clear {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "clear not supported"));
        }
        self.events.push(SurfaceEvent::Clear);
        Ok(())
    }

    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.events.push(SurfaceEvent::Frame(frame.to_string()));
        if let Some((frames, token)) = &self.cancel_after {
            if self.frames().len() >= *frames {
                token.cancel();
            }
        }
        Ok(())
    }
}
