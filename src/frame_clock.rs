//! Frame-rate bookkeeping for the viewer loop.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts the frames presented during the last second.
#[derive(Debug, Default)]
pub struct FrameClock {
    stamps: VecDeque<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame finished now.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Record a frame finished at `now` (monotonic across calls).
    pub fn tick_at(&mut self, now: Instant) {
        while let Some(&front) = self.stamps.front() {
            if now.duration_since(front) >= WINDOW {
                self.stamps.pop_front();
            } else {
                break;
            }
        }
        self.stamps.push_back(now);
    }

    /// Frames in the trailing one-second window.
    #[inline]
    pub fn fps(&self) -> usize {
        self.stamps.len()
    }
}
