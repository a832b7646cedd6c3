//! Terminal-backed display surface using crossterm

use super::DisplaySurface;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};

/// Writes frames to a terminal stream, stdout by default
pub struct TerminalSurface<W: Write = io::Stdout> {
    out: W,
}

impl TerminalSurface {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn size(&self) -> Option<(u16, u16)> {
        // crossterm reports (columns, rows)
        match terminal::size() {
            Ok((columns, lines)) if columns > 0 && lines > 0 => Some((lines, columns)),
            _ => None,
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    fn enter(&mut self) -> io::Result<()> {
        queue!(self.out, Hide)?;
        self.out.flush()
    }

    fn leave(&mut self) -> io::Result<()> {
        queue!(self.out, Show)?;
        self.out.flush()
    }
}
