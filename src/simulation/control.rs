//! Cancellation and frame pacing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Shared flag telling the loop to stop at its next check
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Suspends the loop between frames
pub trait Pacer {
    /// Wait for `duration`, returning early once `cancel` is set
    fn pause(&mut self, duration: Duration, cancel: &CancellationToken);
}

/// Sleeps the current thread in short slices so cancellation is noticed mid-pause
#[derive(Debug, Clone)]
pub struct ThreadPacer {
    slice: Duration,
}

impl Default for ThreadPacer {
    fn default() -> Self {
        Self {
            slice: Duration::from_millis(25),
        }
    }
}

impl ThreadPacer {
    pub fn with_slice(slice: Duration) -> Self {
        Self {
            slice: slice.max(Duration::from_millis(1)),
        }
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration, cancel: &CancellationToken) {
        let deadline = Instant::now() + duration;
        while !cancel.is_cancelled() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep((deadline - now).min(self.slice));
        }
    }
}

/// Returns immediately and remembers each requested pause
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration, _cancel: &CancellationToken) {
        self.pauses.push(duration);
    }
}
