//! Fixed-interval step counter
//!
//! Turns arbitrary frame deltas into whole steps at a fixed cadence, carrying
//! the remainder so that uneven frames never drift.

/// Counts whole intervals elapsed across calls to [`Cadence::advance`]
#[derive(Clone, Debug, PartialEq)]
pub struct Cadence {
    interval_ms: f32,
    carried_ms: f32,
}

impl Cadence {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            carried_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    /// Time accumulated towards the next step
    pub fn carried_ms(&self) -> f32 {
        self.carried_ms
    }

    /// Add `dt_ms` and return the number of steps that elapsed
    ///
    /// A zero interval steps once per call.
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if self.interval_ms <= 0.0 {
            return 1;
        }
        self.carried_ms += dt_ms.max(0.0);
        let steps = (self.carried_ms / self.interval_ms).floor();
        self.carried_ms -= steps * self.interval_ms;
        steps as u32
    }

    /// Discard carried time
    pub fn reset(&mut self) {
        self.carried_ms = 0.0;
    }
}
