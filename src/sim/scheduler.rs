//! Cooperative auto-play timer
//!
//! The scheduler is the only source of unsolicited operations: once armed it
//! asks for one removal per cadence tick. It never fires while an operation
//! is in flight (the engine checks busy before polling it), and toggling it
//! off is accepted immediately without aborting the in-flight operation.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AutoScheduler {
    armed: bool,
    cadence: Duration,
    last_fire: Option<Instant>,
}

impl AutoScheduler {
    pub fn new(cadence: Duration) -> Self {
        AutoScheduler {
            armed: false,
            cadence,
            last_fire: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Idempotent. A freshly armed scheduler fires on the next poll.
    pub fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.last_fire = None;
        }
    }

    /// Idempotent, accepted mid-delay.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Returns the new armed state.
    pub fn toggle(&mut self) -> bool {
        if self.armed {
            self.disarm();
        } else {
            self.arm();
        }
        self.armed
    }

    /// True when a step should fire now; advances the cadence clock.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.armed {
            return false;
        }
        let fire = match self.last_fire {
            None => true,
            Some(last) => now.duration_since(last) >= self.cadence,
        };
        if fire {
            self.last_fire = Some(now);
        }
        fire
    }
}
