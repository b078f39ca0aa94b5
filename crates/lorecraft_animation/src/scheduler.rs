//! Animation scheduler
//!
//! Owns every animated value and every running sequence, and advances them
//! when the host loop calls [`AnimationScheduler::tick`] with the elapsed time.
//! Nothing here reads a wall clock, so feeding synthetic deltas is enough to
//! drive and test a whole choreography.

use crate::interpolate::Interpolation;
use crate::sequence::{Node, Sequence, ValueContext};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a value owned by the scheduler
    pub struct ValueId;
    /// Handle to one started run of a sequence
    pub struct RunId;
}

/// An animated scalar and the tween currently allowed to write it
#[derive(Clone, Debug)]
pub(crate) struct ValueSlot {
    pub current: f32,
    pub writer: Option<u64>,
}

impl ValueSlot {
    pub(crate) fn new(current: f32) -> Self {
        Self {
            current,
            writer: None,
        }
    }
}

struct Run {
    root: Node,
    started_at_ms: f64,
}

/// The animation scheduler that ticks all running sequences
pub struct AnimationScheduler {
    values: SlotMap<ValueId, ValueSlot>,
    runs: SlotMap<RunId, Run>,
    next_token: u64,
    /// Runs that completed outside of `tick` (e.g. empty trees)
    completed: SmallVec<[RunId; 4]>,
    elapsed_ms: f64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            values: SlotMap::with_key(),
            runs: SlotMap::with_key(),
            next_token: 0,
            completed: SmallVec::new(),
            elapsed_ms: 0.0,
        }
    }

    // ========== Values ==========

    pub fn create_value(&mut self, initial: f32) -> ValueId {
        self.values.insert(ValueSlot::new(initial))
    }

    pub fn value(&self, id: ValueId) -> Option<f32> {
        self.values.get(id).map(|slot| slot.current)
    }

    /// Jump a value to `current`, superseding any tween writing it
    pub fn set_value(&mut self, id: ValueId, current: f32) {
        match self.values.get_mut(id) {
            Some(slot) => {
                slot.current = current;
                slot.writer = None;
            }
            None => tracing::warn!(value = ?id, "set_value on a removed value"),
        }
    }

    pub fn remove_value(&mut self, id: ValueId) -> Option<f32> {
        self.values.remove(id).map(|slot| slot.current)
    }

    /// Map a value's current position through an interpolation
    pub fn sample(&self, id: ValueId, interpolation: &Interpolation) -> Option<f32> {
        self.value(id).map(|v| interpolation.map(v))
    }

    /// Check whether a tween currently owns the value
    pub fn is_animating(&self, id: ValueId) -> bool {
        self.values
            .get(id)
            .is_some_and(|slot| slot.writer.is_some())
    }

    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    // ========== Runs ==========

    /// Start a fresh run of `sequence`
    ///
    /// The run begins at the current logical instant: tweens at the head of
    /// the tree claim their values before this returns. A tree that finishes
    /// immediately is reported by the next [`tick`](Self::tick).
    pub fn start(&mut self, sequence: impl Into<Sequence>) -> RunId {
        let root = Node::build(sequence.into());
        let id = self.runs.insert(Run {
            root,
            started_at_ms: self.elapsed_ms,
        });

        let mut values = ValueContext {
            slots: &mut self.values,
            next_token: &mut self.next_token,
        };
        let done = self
            .runs
            .get_mut(id)
            .and_then(|run| run.root.advance(0.0, &mut values))
            .is_some();

        if done {
            self.runs.remove(id);
            self.completed.push(id);
            tracing::debug!(run = ?id, "sequence completed on start");
        } else {
            tracing::debug!(run = ?id, at_ms = self.elapsed_ms, "sequence started");
        }
        id
    }

    /// Advance every run by `dt_ms` and return the runs that completed
    pub fn tick(&mut self, dt_ms: f32) -> SmallVec<[RunId; 4]> {
        let dt_ms = dt_ms.max(0.0);
        self.elapsed_ms += dt_ms as f64;

        let mut finished = std::mem::take(&mut self.completed);
        let mut values = ValueContext {
            slots: &mut self.values,
            next_token: &mut self.next_token,
        };
        for (id, run) in self.runs.iter_mut() {
            if run.root.advance(dt_ms, &mut values).is_some() {
                finished.push(id);
            }
        }

        for id in &finished {
            if let Some(run) = self.runs.remove(*id) {
                tracing::debug!(
                    run = ?id,
                    took_ms = self.elapsed_ms - run.started_at_ms,
                    "sequence completed"
                );
            }
        }
        finished
    }

    pub fn is_running(&self, id: RunId) -> bool {
        self.runs.contains_key(id)
    }

    /// Check if any sequences are still running
    pub fn has_active_runs(&self) -> bool {
        !self.runs.is_empty()
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Total time fed through `tick` so far
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
