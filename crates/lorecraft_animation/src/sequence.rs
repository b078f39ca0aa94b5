//! Timed tweens and their composition into sequences
//!
//! A [`Sequence`] is a plain description. Each call to
//! [`AnimationScheduler::start`](crate::AnimationScheduler::start) builds a
//! fresh runtime tree from it, so the same description can be started any
//! number of times without sharing state between runs.

use crate::easing::Easing;
use crate::scheduler::{ValueId, ValueSlot};
use slotmap::SlotMap;

/// Tween one value to a target over a duration
#[derive(Clone, Debug, PartialEq)]
pub struct Timing {
    pub value: ValueId,
    /// Start value; `None` starts from wherever the value is when the tween begins
    pub from: Option<f32>,
    pub to: f32,
    pub duration_ms: f32,
    pub easing: Easing,
}

impl Timing {
    /// Tween from the value's current position to `to`
    pub fn to(value: ValueId, to: f32, duration_ms: f32) -> Self {
        Self {
            value,
            from: None,
            to,
            duration_ms: duration_ms.max(0.0),
            easing: Easing::Linear,
        }
    }

    /// Builder: start from an explicit value instead of the current one
    pub fn from(mut self, from: f32) -> Self {
        self.from = Some(from);
        self
    }

    /// Builder: set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// A sequence tree node
#[derive(Clone, Debug, PartialEq)]
pub enum Sequence {
    /// Wait without touching any value
    Delay(f32),
    /// Run a single tween
    Animate(Timing),
    /// Start every child at once; complete when all of them have
    Parallel(Vec<Sequence>),
    /// Run children one after another
    Series(Vec<Sequence>),
}

impl Sequence {
    pub fn delay(ms: f32) -> Self {
        Sequence::Delay(ms.max(0.0))
    }

    pub fn timing(timing: Timing) -> Self {
        Sequence::Animate(timing)
    }

    pub fn parallel(children: impl IntoIterator<Item = Sequence>) -> Self {
        Sequence::Parallel(children.into_iter().collect())
    }

    pub fn series(children: impl IntoIterator<Item = Sequence>) -> Self {
        Sequence::Series(children.into_iter().collect())
    }

    /// Total wall time of the sequence, assuming nothing gets superseded
    pub fn duration_ms(&self) -> f32 {
        match self {
            Sequence::Delay(ms) => *ms,
            Sequence::Animate(timing) => timing.duration_ms,
            Sequence::Parallel(children) => children
                .iter()
                .map(Sequence::duration_ms)
                .fold(0.0, f32::max),
            Sequence::Series(children) => children.iter().map(Sequence::duration_ms).sum(),
        }
    }
}

impl From<Timing> for Sequence {
    fn from(timing: Timing) -> Self {
        Sequence::Animate(timing)
    }
}

/// Mutable access to the scheduler's values while a tree advances
pub(crate) struct ValueContext<'a> {
    pub slots: &'a mut SlotMap<ValueId, ValueSlot>,
    pub next_token: &'a mut u64,
}

impl ValueContext<'_> {
    fn claim(&mut self, value: ValueId) -> Option<(&mut ValueSlot, u64)> {
        *self.next_token += 1;
        let token = *self.next_token;
        let slot = self.slots.get_mut(value)?;
        if slot.writer.is_some() {
            tracing::trace!(?value, "superseding in-flight tween");
        }
        slot.writer = Some(token);
        Some((slot, token))
    }
}

#[derive(Debug)]
pub(crate) enum TweenState {
    Pending,
    Running { from: f32, elapsed: f32, token: u64 },
    Done,
    /// Another writer took the value before the tween finished
    Superseded,
}

/// Runtime state for one run of a [`Sequence`]
#[derive(Debug)]
pub(crate) enum Node {
    Delay {
        remaining: f32,
    },
    Animate {
        timing: Timing,
        state: TweenState,
    },
    Parallel {
        children: Vec<Node>,
        finished: Vec<bool>,
    },
    Series {
        children: Vec<Node>,
        cursor: usize,
    },
}

impl Node {
    pub(crate) fn build(sequence: Sequence) -> Self {
        match sequence {
            Sequence::Delay(ms) => Node::Delay { remaining: ms },
            Sequence::Animate(timing) => Node::Animate {
                timing,
                state: TweenState::Pending,
            },
            Sequence::Parallel(children) => Node::Parallel {
                finished: vec![false; children.len()],
                children: children.into_iter().map(Node::build).collect(),
            },
            Sequence::Series(children) => Node::Series {
                children: children.into_iter().map(Node::build).collect(),
                cursor: 0,
            },
        }
    }

    /// Advance by `dt` milliseconds.
    ///
    /// Returns `Some(leftover)` once the node has completed, where `leftover`
    /// is the part of `dt` that remained after completion.
    pub(crate) fn advance(&mut self, dt: f32, values: &mut ValueContext<'_>) -> Option<f32> {
        match self {
            Node::Delay { remaining } => {
                if dt >= *remaining {
                    let leftover = dt - *remaining;
                    *remaining = 0.0;
                    Some(leftover)
                } else {
                    *remaining -= dt;
                    None
                }
            }
            Node::Animate { timing, state } => advance_tween(timing, state, dt, values),
            Node::Parallel { children, finished } => {
                let mut leftover: Option<f32> = None;
                let mut all_done = true;
                for (child, done) in children.iter_mut().zip(finished.iter_mut()) {
                    if *done {
                        continue;
                    }
                    match child.advance(dt, values) {
                        Some(rest) => {
                            *done = true;
                            leftover = Some(leftover.map_or(rest, |l| l.min(rest)));
                        }
                        None => all_done = false,
                    }
                }
                all_done.then(|| leftover.unwrap_or(dt))
            }
            Node::Series { children, cursor } => {
                let mut dt = dt;
                while let Some(child) = children.get_mut(*cursor) {
                    dt = child.advance(dt, values)?;
                    *cursor += 1;
                    if child.was_superseded() {
                        // later steps must not reclaim values a newer run owns
                        tracing::trace!(skipped = children.len() - *cursor, "series interrupted");
                        *cursor = children.len();
                    }
                }
                Some(dt)
            }
        }
    }
}

impl Node {
    /// Check whether a tween in this subtree lost its value to another writer
    fn was_superseded(&self) -> bool {
        match self {
            Node::Delay { .. } => false,
            Node::Animate { state, .. } => matches!(state, TweenState::Superseded),
            Node::Parallel { children, .. } | Node::Series { children, .. } => {
                children.iter().any(Node::was_superseded)
            }
        }
    }
}

fn advance_tween(
    timing: &Timing,
    state: &mut TweenState,
    dt: f32,
    values: &mut ValueContext<'_>,
) -> Option<f32> {
    if let TweenState::Pending = state {
        let Some((slot, token)) = values.claim(timing.value) else {
            tracing::warn!(value = ?timing.value, "tween targets a removed value");
            *state = TweenState::Done;
            return Some(dt);
        };
        let from = timing.from.unwrap_or(slot.current);
        slot.current = from;
        *state = TweenState::Running {
            from,
            elapsed: 0.0,
            token,
        };
    }

    let TweenState::Running {
        from,
        elapsed,
        token,
    } = state
    else {
        return Some(dt);
    };

    let Some(slot) = values.slots.get_mut(timing.value) else {
        *state = TweenState::Done;
        return Some(dt);
    };
    if slot.writer != Some(*token) {
        // a newer tween or a direct set took over this value
        *state = TweenState::Superseded;
        return Some(dt);
    }

    *elapsed += dt;
    if *elapsed >= timing.duration_ms {
        let leftover = *elapsed - timing.duration_ms;
        slot.current = timing.to;
        slot.writer = None;
        *state = TweenState::Done;
        return Some(leftover);
    }

    let progress = timing.easing.apply(*elapsed / timing.duration_ms);
    slot.current = *from + (timing.to - *from) * progress;
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_sums_series_and_maxes_parallel() {
        let mut values: SlotMap<ValueId, ValueSlot> = SlotMap::with_key();
        let v = values.insert(ValueSlot::new(0.0));

        let seq = Sequence::series([
            Sequence::delay(100.0),
            Sequence::parallel([
                Sequence::timing(Timing::to(v, 1.0, 100.0)),
                Sequence::timing(Timing::to(v, 1.0, 300.0)),
            ]),
            Sequence::delay(50.0),
        ]);
        assert_eq!(seq.duration_ms(), 450.0);
        assert_eq!(Sequence::series([]).duration_ms(), 0.0);
    }

    #[test]
    fn negative_durations_are_clamped() {
        let mut values: SlotMap<ValueId, ValueSlot> = SlotMap::with_key();
        let v = values.insert(ValueSlot::new(0.0));
        assert_eq!(Sequence::delay(-5.0), Sequence::Delay(0.0));
        assert_eq!(Timing::to(v, 1.0, -5.0).duration_ms, 0.0);
    }
}
