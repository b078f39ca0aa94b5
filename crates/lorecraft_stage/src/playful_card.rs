//! Playful card entrance
//!
//! The card peeks up from below the fold twice, slides into place while
//! shrinking to its resting scale, then flips to reveal its face. Every
//! distance is proportional to the theme's card height.

use crate::card_flip::{CardFlip, CardFlipConfig, FlipCommand, FlipEvent};
use crate::frame::{Frame, Sequencer};
use lorecraft_animation::{
    AnimationError, AnimationScheduler, Easing, RunId, Sequence, Timing, ValueId,
};
use lorecraft_theme::{Theme, Viewport};
use smallvec::SmallVec;

/// Wait between the end of the flip and the completion signal
pub const HANDOFF_DELAY_MS: f32 = 1500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayfulEvent {
    /// The entrance finished and the card began to flip
    Flipping,
    /// The card has flipped and had time to settle
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Entering,
    Flipping,
    HandingOff,
    Done,
}

/// Stage timings of one entrance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTimings {
    pub slide_off_ms: f32,
    pub pre_bounce_delay_ms: f32,
    pub pre_settle_delay_ms: f32,
}

impl EntranceTimings {
    /// Fast mode only shortens the long slide-off and the delays around the small bounce
    pub fn new(fast: bool) -> Self {
        if fast {
            Self {
                slide_off_ms: 3000.0,
                pre_bounce_delay_ms: 400.0,
                pre_settle_delay_ms: 500.0,
            }
        } else {
            Self {
                slide_off_ms: 4000.0,
                pre_bounce_delay_ms: 800.0,
                pre_settle_delay_ms: 1000.0,
            }
        }
    }
}

/// Build the entrance choreography for a card whose position and scale live in `top` and `scale`
pub fn entrance_sequence(
    theme: &Theme,
    viewport: Viewport,
    fast: bool,
    top: ValueId,
    scale: ValueId,
) -> Sequence {
    let ratio = theme.card_height_ratio();
    let offscreen = viewport.half_height();
    let timings = EntranceTimings::new(fast);

    Sequence::series([
        Sequence::delay(1000.0),
        // peek up
        Sequence::timing(Timing::to(top, offscreen - 500.0 * ratio, 1000.0)),
        Sequence::delay(500.0),
        // and slowly back down
        Sequence::timing(Timing::to(top, offscreen, timings.slide_off_ms)),
        Sequence::delay(timings.pre_bounce_delay_ms),
        // small quick bounce
        Sequence::timing(Timing::to(top, offscreen - 350.0 * ratio, 500.0)),
        Sequence::delay(100.0),
        Sequence::timing(Timing::to(top, offscreen, 300.0)),
        Sequence::delay(timings.pre_settle_delay_ms),
        Sequence::parallel([
            Sequence::timing(
                Timing::to(top, -theme.card_height / 2.0, 1000.0).easing(Easing::back_out()),
            ),
            Sequence::timing(Timing::to(scale, theme.card_scale_final, 1000.0)),
        ]),
        Sequence::delay(500.0),
    ])
}

pub struct PlayfulCard {
    card: CardFlip,
    top: ValueId,
    scale: ValueId,
    phase: Phase,
    entrance: Option<RunId>,
    handoff: Option<RunId>,
    events: SmallVec<[PlayfulEvent; 2]>,
}

impl PlayfulCard {
    /// Create the card below the fold and start its entrance
    pub fn new(
        scheduler: &mut AnimationScheduler,
        theme: &Theme,
        viewport: Viewport,
        fast: bool,
    ) -> Result<Self, AnimationError> {
        let card = CardFlip::new(scheduler, CardFlipConfig::new(theme.card_width()))?;
        let top = scheduler.create_value(viewport.half_height());
        let scale = scheduler.create_value(theme.card_scale_initial);

        let entrance =
            scheduler.start(entrance_sequence(theme, viewport, fast, top, scale));
        tracing::debug!(fast, card_height = theme.card_height, "playful card entering");

        Ok(Self {
            card,
            top,
            scale,
            phase: Phase::Entering,
            entrance: Some(entrance),
            handoff: None,
            events: SmallVec::new(),
        })
    }

    pub fn card(&self) -> &CardFlip {
        &self.card
    }

    /// Vertical offset of the card
    pub fn top(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.top).unwrap_or_default()
    }

    pub fn scale(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.scale).unwrap_or(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = PlayfulEvent> + '_ {
        self.events.drain(..)
    }

    /// Free the card's values
    pub fn release(self, scheduler: &mut AnimationScheduler) {
        scheduler.remove_value(self.top);
        scheduler.remove_value(self.scale);
        self.card.release(scheduler);
    }
}

impl Sequencer for PlayfulCard {
    fn update(&mut self, scheduler: &mut AnimationScheduler, frame: &Frame) {
        self.card.update(scheduler, frame);
        let flip_ended = self
            .card
            .drain_events()
            .any(|event| matches!(event, FlipEvent::End(_)));

        let phase = self.phase;
        match phase {
            Phase::Entering if frame.take(&mut self.entrance) => {
                self.card.flip(scheduler);
                // flip/start notifications are of no interest here
                self.card.drain_events().for_each(drop);
                self.phase = Phase::Flipping;
                self.events.push(PlayfulEvent::Flipping);
            }
            Phase::Flipping if flip_ended => {
                self.handoff = Some(scheduler.start(Sequence::delay(HANDOFF_DELAY_MS)));
                self.phase = Phase::HandingOff;
            }
            Phase::HandingOff if frame.take(&mut self.handoff) => {
                tracing::debug!("playful card complete");
                self.phase = Phase::Done;
                self.events.push(PlayfulEvent::Complete);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorecraft_theme::ThemeName;

    #[test]
    fn fast_mode_shortens_only_specific_stages() {
        let theme = Theme::resolve(ThemeName::Dark, Viewport::default());
        let mut scheduler = AnimationScheduler::new();
        let top = scheduler.create_value(0.0);
        let scale = scheduler.create_value(0.0);

        let slow = entrance_sequence(&theme, Viewport::default(), false, top, scale);
        let fast = entrance_sequence(&theme, Viewport::default(), true, top, scale);
        assert_eq!(slow.duration_ms(), 10_700.0);
        assert_eq!(fast.duration_ms(), 8_800.0);
    }

    #[test]
    fn distances_scale_with_card_height() {
        let mut theme = Theme::resolve(ThemeName::Dark, Viewport::default());
        theme.card_height = 466.5;
        let viewport = Viewport::new(1984.0, 1000.0);
        let mut scheduler = AnimationScheduler::new();
        let mut card = PlayfulCard::new(&mut scheduler, &theme, viewport, false).unwrap();
        assert_eq!(card.top(&scheduler), 500.0);

        // first delay, then the full peek
        crate::frame::run_for(&mut scheduler, &mut card, 100.0, 2000.0);
        assert_eq!(card.top(&scheduler), 250.0);
    }
}
