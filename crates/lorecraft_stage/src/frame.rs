//! Per-frame driving of sequencers
//!
//! The host loop ticks the scheduler once per frame and hands the resulting
//! [`Frame`] to every sequencer, which reacts to the runs that completed.

use lorecraft_animation::{AnimationScheduler, RunId};
use smallvec::SmallVec;

/// One frame's worth of elapsed time and completed runs
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub dt_ms: f32,
    pub finished: SmallVec<[RunId; 4]>,
}

impl Frame {
    /// Tick the scheduler by `dt_ms` and capture what completed
    pub fn advance(scheduler: &mut AnimationScheduler, dt_ms: f32) -> Self {
        let finished = scheduler.tick(dt_ms);
        tracing::trace!(dt_ms, completed = finished.len(), "frame");
        Self { dt_ms, finished }
    }

    pub fn completed(&self, run: RunId) -> bool {
        self.finished.contains(&run)
    }

    /// Clear `slot` and return true if the run it holds completed this frame
    pub fn take(&self, slot: &mut Option<RunId>) -> bool {
        match *slot {
            Some(run) if self.completed(run) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }
}

/// A component that advances with the frame loop
pub trait Sequencer {
    fn update(&mut self, scheduler: &mut AnimationScheduler, frame: &Frame);
}

/// Tick `scheduler` and update `sequencer` in fixed steps until `total_ms` has elapsed
pub fn run_for<S: Sequencer + ?Sized>(
    scheduler: &mut AnimationScheduler,
    sequencer: &mut S,
    step_ms: f32,
    total_ms: f32,
) {
    if step_ms <= 0.0 {
        return;
    }
    let mut elapsed = 0.0;
    while elapsed < total_ms {
        let dt = step_ms.min(total_ms - elapsed);
        let frame = Frame::advance(scheduler, dt);
        sequencer.update(scheduler, &frame);
        elapsed += dt;
    }
}
