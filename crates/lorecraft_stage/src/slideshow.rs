//! Leapfrogging two-slot slideshow
//!
//! Two image slots take turns: while one fades out, the other fades in,
//! slides up and grows to full size. Each slot only ever shows every other
//! asset (slot 0 the even indices, slot 1 the odd ones), so between them they
//! walk the whole list.

use crate::frame::{Frame, Sequencer};
use lorecraft_animation::{AnimationScheduler, Easing, RunId, Sequence, Timing, ValueId};
use lorecraft_theme::Theme;
use smallvec::SmallVec;

/// Length of one crossfade
pub const TRANSITION_MS: f32 = 600.0;
/// Wait after a crossfade before the hidden slot is reset
pub const SETTLE_MS: f32 = 500.0;
/// Index step of a slot per cycle
pub const STRIDE: usize = 2;

/// Offset a hidden slot waits at, before scaling by card height
const START_OFFSET: f32 = 250.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideshowEvent {
    /// The first crossfade finished; the arrival image is no longer needed
    FirstCycleComplete,
    /// A slot moved on to a new asset
    Advanced { slot: usize, list: usize, index: usize },
}

struct Slot {
    origin: usize,
    list: usize,
    index: usize,
    opacity: ValueId,
    top: ValueId,
    scale: ValueId,
    z_index: i32,
}

/// A pending run and the slots it reveals and hides
///
/// Used both for crossfades and for the settle timers that follow them.
/// Cycles shorter than a crossfade keep several in flight at once.
#[derive(Clone, Copy)]
struct Handoff {
    run: RunId,
    shown: usize,
    hidden: usize,
}

/// Theme tokens a cycle reads when it starts
#[derive(Clone, Copy, Debug, PartialEq)]
struct CyclePose {
    cycle_ms: f32,
    start_top: f32,
    start_scale: f32,
}

impl CyclePose {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            cycle_ms: theme.app_cycle_ms(),
            start_top: START_OFFSET * theme.card_height_ratio(),
            start_scale: theme.app_scale_initial,
        }
    }
}

/// Snapshot of one slot for rendering
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotView<'a, A> {
    pub asset: Option<&'a A>,
    pub list: usize,
    pub index: usize,
    pub opacity: f32,
    pub top: f32,
    pub scale: f32,
    pub z_index: i32,
}

pub struct Slideshow<A> {
    lists: Vec<Vec<A>>,
    /// List the next cycle boundary binds to
    selected: usize,
    slots: [Slot; 2],
    active: usize,
    cycling: bool,
    arrival_opacity: ValueId,
    pose: CyclePose,
    /// Theme change waiting for the next cycle boundary
    pending_pose: Option<CyclePose>,
    transitions: SmallVec<[Handoff; 2]>,
    timer: Option<RunId>,
    settles: SmallVec<[Handoff; 2]>,
    events: SmallVec<[SlideshowEvent; 4]>,
}

impl<A> Slideshow<A> {
    /// Create both slots bound to list `selected` and start the first crossfade
    pub fn new(
        scheduler: &mut AnimationScheduler,
        theme: &Theme,
        lists: Vec<Vec<A>>,
        selected: usize,
    ) -> Self {
        let pose = CyclePose::from_theme(theme);
        let selected = selected.min(lists.len().saturating_sub(1));
        for (i, list) in lists.iter().enumerate() {
            debug_assert!(list.len() >= STRIDE, "asset list {i} is shorter than the stride");
        }

        let mut slot = |origin: usize, z_index: i32| Slot {
            origin,
            list: selected,
            index: origin,
            opacity: scheduler.create_value(0.0),
            top: scheduler.create_value(pose.start_top),
            scale: scheduler.create_value(pose.start_scale),
            z_index,
        };
        let slots = [slot(0, 1), slot(1, 2)];

        let mut slideshow = Self {
            lists,
            selected,
            slots,
            active: 0,
            cycling: false,
            arrival_opacity: scheduler.create_value(1.0),
            pose,
            pending_pose: None,
            transitions: SmallVec::new(),
            timer: None,
            settles: SmallVec::new(),
            events: SmallVec::new(),
        };
        slideshow.start_cycle(scheduler);
        slideshow
    }

    /// Choose the list slots bind to at their next cycle boundary
    pub fn select_list(&mut self, list: usize) {
        if list >= self.lists.len() {
            tracing::warn!(list, lists = self.lists.len(), "ignoring unknown asset list");
            return;
        }
        self.selected = list;
    }

    /// Pick up a new theme's cadence and start pose from the next cycle on
    ///
    /// Runs already in flight finish with the tokens they started with.
    pub fn set_theme(&mut self, theme: &Theme) {
        let pose = CyclePose::from_theme(theme);
        if pose == self.pose {
            self.pending_pose = None;
            return;
        }
        tracing::debug!(theme = %theme.name, cycle_ms = pose.cycle_ms, "slideshow theme queued");
        self.pending_pose = Some(pose);
    }

    /// Interval between cycle boundaries currently in use
    pub fn cycle_ms(&self) -> f32 {
        self.pose.cycle_ms
    }

    pub fn selected_list(&self) -> usize {
        self.selected
    }

    /// Slot being faded out by the current cycle
    pub fn active_slot(&self) -> usize {
        self.active
    }

    /// Whether the first crossfade has completed
    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    pub fn indices(&self) -> [usize; 2] {
        [self.slots[0].index, self.slots[1].index]
    }

    /// Opacity of the arrival image shown underneath until the first crossfade
    pub fn arrival_opacity(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.arrival_opacity).unwrap_or_default()
    }

    pub fn slot(&self, scheduler: &AnimationScheduler, slot: usize) -> Option<SlotView<'_, A>> {
        let s = self.slots.get(slot)?;
        Some(SlotView {
            asset: self.lists.get(s.list).and_then(|list| list.get(s.index)),
            list: s.list,
            index: s.index,
            opacity: scheduler.value(s.opacity).unwrap_or_default(),
            top: scheduler.value(s.top).unwrap_or_default(),
            scale: scheduler.value(s.scale).unwrap_or_default(),
            z_index: s.z_index,
        })
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = SlideshowEvent> + '_ {
        self.events.drain(..)
    }

    /// Free every slot value
    pub fn release(self, scheduler: &mut AnimationScheduler) {
        scheduler.remove_value(self.arrival_opacity);
        for slot in &self.slots {
            scheduler.remove_value(slot.opacity);
            scheduler.remove_value(slot.top);
            scheduler.remove_value(slot.scale);
        }
    }

    fn start_cycle(&mut self, scheduler: &mut AnimationScheduler) {
        let current = &self.slots[self.active];
        let next = &self.slots[1 - self.active];

        let mut steps: SmallVec<[Sequence; 5]> = SmallVec::new();
        if !self.cycling {
            steps.push(Sequence::timing(Timing::to(self.arrival_opacity, 0.0, TRANSITION_MS)));
        }
        steps.extend([
            Sequence::timing(Timing::to(current.opacity, 0.0, TRANSITION_MS)),
            Sequence::timing(Timing::to(next.opacity, 1.0, TRANSITION_MS)),
            Sequence::timing(Timing::to(next.top, 0.0, TRANSITION_MS).easing(Easing::back_out())),
            Sequence::timing(Timing::to(next.scale, 1.0, TRANSITION_MS)),
        ]);

        tracing::debug!(
            showing = 1 - self.active,
            list = next.list,
            index = next.index,
            "slideshow cycle"
        );
        let run = scheduler.start(Sequence::parallel(steps));
        self.transitions.push(Handoff {
            run,
            shown: 1 - self.active,
            hidden: self.active,
        });
        self.timer = Some(scheduler.start(Sequence::delay(self.pose.cycle_ms)));
    }

    fn finish_transition(&mut self, scheduler: &mut AnimationScheduler, transition: Handoff) {
        if !self.cycling {
            self.cycling = true;
            self.events.push(SlideshowEvent::FirstCycleComplete);
        }
        self.settles.push(Handoff {
            run: scheduler.start(Sequence::delay(SETTLE_MS)),
            ..transition
        });
    }

    /// Lower the shown slot, raise the hidden one and put it back at its start pose
    fn settle(&mut self, scheduler: &mut AnimationScheduler, shown: usize, hidden: usize) {
        self.slots[shown].z_index = 1;
        let hidden = &mut self.slots[hidden];
        hidden.z_index = 2;
        scheduler.set_value(hidden.scale, self.pose.start_scale);
        scheduler.set_value(hidden.top, self.pose.start_top);
    }

    /// Rebind the active slot, step its index and hand over to the other slot
    fn advance(&mut self, scheduler: &mut AnimationScheduler) {
        let active = self.active;
        let slot = &mut self.slots[active];
        slot.list = self.selected;
        let len = self.lists.get(slot.list).map_or(0, Vec::len);
        debug_assert!(len >= STRIDE, "asset list {} is shorter than the stride", slot.list);

        if slot.index + STRIDE > len.saturating_sub(1) || len == 0 {
            tracing::debug!(slot = active, index = slot.index, len, "slot reset to its origin");
            slot.index = slot.origin;
        } else {
            slot.index += STRIDE;
        }
        self.events.push(SlideshowEvent::Advanced {
            slot: active,
            list: slot.list,
            index: slot.index,
        });

        self.active = 1 - active;
        if let Some(pose) = self.pending_pose.take() {
            tracing::debug!(cycle_ms = pose.cycle_ms, "slideshow theme applied");
            self.pose = pose;
        }
        self.start_cycle(scheduler);
    }
}

impl<A> Sequencer for Slideshow<A> {
    fn update(&mut self, scheduler: &mut AnimationScheduler, frame: &Frame) {
        for transition in take_completed(&mut self.transitions, frame) {
            self.finish_transition(scheduler, transition);
        }
        for settle in take_completed(&mut self.settles, frame) {
            self.settle(scheduler, settle.shown, settle.hidden);
        }

        if frame.take(&mut self.timer) {
            self.advance(scheduler);
        }
    }
}

/// Remove and return the hand-offs whose run completed this frame, oldest first
fn take_completed(pending: &mut SmallVec<[Handoff; 2]>, frame: &Frame) -> SmallVec<[Handoff; 2]> {
    let mut due = SmallVec::new();
    pending.retain(|handoff| {
        let done = frame.completed(handoff.run);
        if done {
            due.push(*handoff);
        }
        !done
    });
    due
}
