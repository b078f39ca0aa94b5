//! Showcase buttons with idle flourishes
//!
//! Each button sits still, then every 5 to 30 seconds plays a short
//! flourish: the Android icon whips sideways, the Apple icon jumps and
//! bounces back down, and the pill link bulges and twists. A flourish is
//! a single progress value fanned out through several interpolations, and
//! the value snaps back to rest once the flourish ends.
//!
//! Pressing a button either hands an external URL to the host or fades the
//! current screen out and pushes an in-site route.

use crate::fade_in_image::FadeInImage;
use crate::frame::Frame;
use crate::navigation::Navigator;
use lorecraft_animation::{
    AnimationError, AnimationScheduler, Easing, Interpolation, RunId, Sequence, Timing, ValueId,
};
use lorecraft_theme::Theme;
use rand::Rng;
use smallvec::SmallVec;

/// Shortest wait between flourishes
pub const IDLE_MIN_MS: f32 = 5_000.0;
/// Longest wait between flourishes
pub const IDLE_MAX_MS: f32 = 30_000.0;

pub const WHIP_END: f32 = 115.0;
pub const WHIP_MS: f32 = 1000.0;

pub const JUMP_HEIGHT: f32 = -100.0;
pub const JUMP_RISE_MS: f32 = 500.0;
pub const JUMP_FALL_MS: f32 = 750.0;

pub const BULGE_END: f32 = 100.0;
pub const BULGE_MS: f32 = 1000.0;

const WHIP_STEPS: [f32; 9] = [0.0, 10.0, 20.0, 50.0, 65.0, 75.0, 100.0, 107.0, 115.0];
const BULGE_STEPS: [f32; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseKind {
    Android,
    Apple,
    /// The pill-shaped text link
    Link,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShowcaseLink {
    /// Opened by the host, outside the site
    External(String),
    /// A path inside the site
    Route(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShowcaseEvent {
    FlourishStarted,
    OpenExternal(String),
    Navigated(String),
}

/// Where a button is in its flourish
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShowcasePose {
    Android {
        rotation_deg: f32,
        translate_x: f32,
    },
    Apple {
        translate_y: f32,
    },
    Pill {
        scale_x: f32,
        scale_y: f32,
        radius: f32,
        rotation_deg: f32,
        /// Keeps the label upright against the pill's twist
        label_rotation_deg: f32,
        label_scale_x: f32,
        label_scale_y: f32,
    },
}

enum Motion {
    Whip {
        rotation: Interpolation,
        translate_x: Interpolation,
    },
    Jump,
    Bulge {
        scale_x: Interpolation,
        scale_y: Interpolation,
        radius: Interpolation,
        rotation: Interpolation,
        label_rotation: Interpolation,
    },
}

impl Motion {
    fn for_kind(kind: ShowcaseKind) -> Result<Self, AnimationError> {
        let motion = match kind {
            ShowcaseKind::Android => Motion::Whip {
                rotation: Interpolation::new(
                    WHIP_STEPS,
                    [0.0, -10.0, -20.0, -20.0, 10.0, 20.0, 20.0, -10.0, 0.0],
                )?,
                translate_x: Interpolation::new([0.0, 50.0, 55.0, 115.0], [0.0, 144.0, 150.0, 0.0])?,
            },
            ShowcaseKind::Apple => Motion::Jump,
            ShowcaseKind::Link => Motion::Bulge {
                scale_x: Interpolation::new(BULGE_STEPS, [1.0, 0.75, 1.0, 1.25, 1.5, 1.0])?,
                scale_y: Interpolation::new(BULGE_STEPS, [1.0, 1.2, 1.5, 1.2, 1.8, 1.0])?,
                radius: Interpolation::new(BULGE_STEPS, [35.0, 10.0, 20.0, 50.0, 20.0, 35.0])?,
                rotation: Interpolation::new(BULGE_STEPS, [0.0, -10.0, 10.0, -20.0, 30.0, 0.0])?,
                label_rotation: Interpolation::new(
                    BULGE_STEPS,
                    [0.0, 10.0, -10.0, 20.0, -30.0, 0.0],
                )?,
            },
        };
        Ok(motion)
    }

    fn sequence(&self, progress: ValueId) -> Sequence {
        match self {
            Motion::Whip { .. } => Sequence::timing(Timing::to(progress, WHIP_END, WHIP_MS)),
            Motion::Jump => Sequence::series([
                Sequence::timing(
                    Timing::to(progress, JUMP_HEIGHT, JUMP_RISE_MS).easing(Easing::SineOut),
                ),
                Sequence::timing(Timing::to(progress, 0.0, JUMP_FALL_MS).easing(Easing::Bounce)),
            ]),
            Motion::Bulge { .. } => Sequence::timing(Timing::to(progress, BULGE_END, BULGE_MS)),
        }
    }

    fn pose(&self, p: f32) -> ShowcasePose {
        match self {
            Motion::Whip {
                rotation,
                translate_x,
            } => ShowcasePose::Android {
                rotation_deg: rotation.map(p),
                translate_x: translate_x.map(p),
            },
            Motion::Jump => ShowcasePose::Apple { translate_y: p },
            Motion::Bulge {
                scale_x,
                scale_y,
                radius,
                rotation,
                label_rotation,
            } => {
                let (sx, sy) = (scale_x.map(p), scale_y.map(p));
                ShowcasePose::Pill {
                    scale_x: sx,
                    scale_y: sy,
                    radius: radius.map(p),
                    rotation_deg: rotation.map(p),
                    label_rotation_deg: label_rotation.map(p),
                    label_scale_x: sx.recip(),
                    label_scale_y: sy.recip(),
                }
            }
        }
    }
}

pub struct ShowcaseButton<R> {
    kind: ShowcaseKind,
    link: ShowcaseLink,
    progress: ValueId,
    motion: Motion,
    icon: Option<FadeInImage>,
    flourish: Option<RunId>,
    idle: Option<RunId>,
    navigation: Option<(RunId, String)>,
    navigate_delay_ms: f32,
    rng: R,
    events: SmallVec<[ShowcaseEvent; 2]>,
}

impl<R: Rng> ShowcaseButton<R> {
    /// Mount the button and schedule its first flourish
    pub fn new(
        scheduler: &mut AnimationScheduler,
        theme: &Theme,
        kind: ShowcaseKind,
        link: ShowcaseLink,
        rng: R,
    ) -> Result<Self, AnimationError> {
        let motion = Motion::for_kind(kind)?;
        let icon = (kind != ShowcaseKind::Link).then(|| FadeInImage::new(scheduler, false));
        let mut button = Self {
            kind,
            link,
            progress: scheduler.create_value(0.0),
            motion,
            icon,
            flourish: None,
            idle: None,
            navigation: None,
            navigate_delay_ms: theme.side_menu_speed_ms / 2.0,
            rng,
            events: SmallVec::new(),
        };
        button.schedule_idle(scheduler);
        Ok(button)
    }

    pub fn kind(&self) -> ShowcaseKind {
        self.kind
    }

    pub fn link(&self) -> &ShowcaseLink {
        &self.link
    }

    /// Icon image of the store buttons; the pill link has none
    pub fn icon(&self) -> Option<&FadeInImage> {
        self.icon.as_ref()
    }

    pub fn icon_loaded(&mut self, scheduler: &mut AnimationScheduler) {
        if let Some(icon) = &mut self.icon {
            icon.loaded(scheduler);
        }
    }

    pub fn pose(&self, scheduler: &AnimationScheduler) -> ShowcasePose {
        self.motion.pose(scheduler.value(self.progress).unwrap_or_default())
    }

    /// Track the theme's menu speed for in-site navigation
    pub fn set_theme(&mut self, theme: &Theme) {
        self.navigate_delay_ms = theme.side_menu_speed_ms / 2.0;
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = ShowcaseEvent> + '_ {
        self.events.drain(..)
    }

    /// Play the flourish now and schedule the next one
    pub fn trigger(&mut self, scheduler: &mut AnimationScheduler) {
        self.flourish = Some(scheduler.start(self.motion.sequence(self.progress)));
        self.events.push(ShowcaseEvent::FlourishStarted);
        tracing::debug!(kind = ?self.kind, "showcase flourish");
        self.schedule_idle(scheduler);
    }

    /// Follow the button's link
    pub fn press(&mut self, scheduler: &mut AnimationScheduler, navigator: &mut impl Navigator) {
        match &self.link {
            ShowcaseLink::External(url) => {
                tracing::info!(url = %url, "opening external link");
                self.events.push(ShowcaseEvent::OpenExternal(url.clone()));
            }
            ShowcaseLink::Route(path) => {
                navigator.set_fade_out(true);
                let run = scheduler.start(Sequence::delay(self.navigate_delay_ms));
                self.navigation = Some((run, path.clone()));
            }
        }
    }

    pub fn update(
        &mut self,
        scheduler: &mut AnimationScheduler,
        frame: &Frame,
        navigator: &mut impl Navigator,
    ) {
        if frame.take(&mut self.flourish) {
            scheduler.set_value(self.progress, 0.0);
        }
        if frame.take(&mut self.idle) {
            self.trigger(scheduler);
        }

        let arrived = self
            .navigation
            .as_ref()
            .is_some_and(|(run, _)| frame.completed(*run));
        if arrived {
            if let Some((_, path)) = self.navigation.take() {
                navigator.push(&path);
                self.events.push(ShowcaseEvent::Navigated(path));
            }
        }
    }

    /// Free the progress value and the icon
    pub fn release(self, scheduler: &mut AnimationScheduler) {
        scheduler.remove_value(self.progress);
        if let Some(icon) = self.icon {
            icon.release(scheduler);
        }
    }

    fn schedule_idle(&mut self, scheduler: &mut AnimationScheduler) {
        let wait = self.rng.gen_range(IDLE_MIN_MS..IDLE_MAX_MS);
        self.idle = Some(scheduler.start(Sequence::delay(wait)));
    }
}
