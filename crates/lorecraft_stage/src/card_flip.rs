//! Two-sided card flip
//!
//! A single progress value drives both faces' opacity with a hard cut at its
//! midpoint, while one rotation value per axis drives each face's rotation
//! through a four-point mapping. Flipping "there" and "back" both land on
//! control points where each face is upright, so repeated flips never snap.

use crate::frame::{Frame, Sequencer};
use lorecraft_animation::{
    AnimationError, AnimationScheduler, Interpolation, RunId, Sequence, Timing, ValueId,
};
use smallvec::SmallVec;

/// Rotation value at rest, before and after every flip
const ROTATION_REST: f32 = 50.0;
/// Rotation value reached by flipping away from side A
const ROTATION_TURNED: f32 = 100.0;
/// Progress/zoom extreme
const PROGRESS_FULL: f32 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlipAxis {
    X,
    #[default]
    Y,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardFlipConfig {
    pub duration_ms: f32,
    /// Extra scale at the peak of the flip
    pub flip_zoom: f32,
    pub axis: FlipAxis,
    /// Authored width of the card; each face is shifted left by half of it
    pub expected_width: f32,
}

impl CardFlipConfig {
    pub fn new(expected_width: f32) -> Self {
        Self {
            duration_ms: 750.0,
            flip_zoom: 0.2,
            axis: FlipAxis::Y,
            expected_width,
        }
    }

    pub fn axis(mut self, axis: FlipAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipEvent {
    /// A flip towards this side was requested
    Flip(Side),
    /// The flip towards this side began
    Start(Side),
    /// The card came to rest on this side
    End(Side),
}

/// Ask a card to turn over
pub trait FlipCommand {
    fn flip(&mut self, scheduler: &mut AnimationScheduler);
}

/// Resolved 2D transform for one face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceTransform {
    pub opacity: f32,
    pub z_index: i32,
    pub axis: FlipAxis,
    pub rotation_deg: f32,
    pub translate_x: f32,
}

struct FlipMappings {
    opacity_a: Interpolation,
    opacity_b: Interpolation,
    rotation_a: Interpolation,
    rotation_b_x: Interpolation,
    rotation_b_y: Interpolation,
    zoom: Interpolation,
}

impl FlipMappings {
    fn new(flip_zoom: f32) -> Result<Self, AnimationError> {
        let rotation_domain = [0.0, 50.0, 100.0, 150.0];
        Ok(Self {
            opacity_a: Interpolation::new([50.0, 51.0], [1.0, 0.0])?,
            opacity_b: Interpolation::new([50.0, 51.0], [0.0, 1.0])?,
            rotation_a: Interpolation::new(rotation_domain, [-180.0, 0.0, 180.0, 0.0])?,
            rotation_b_x: Interpolation::new(rotation_domain, [0.0, -180.0, -360.0, 180.0])?,
            rotation_b_y: Interpolation::new(rotation_domain, [0.0, -180.0, 0.0, 180.0])?,
            zoom: Interpolation::new([0.0, PROGRESS_FULL], [1.0, 1.0 + flip_zoom])?,
        })
    }
}

pub struct CardFlip {
    config: CardFlipConfig,
    mappings: FlipMappings,
    /// Side the card is resting on, or was resting on when the flip began
    side: Side,
    /// Side the latest flip is heading towards
    target: Side,
    progress: ValueId,
    zoom: ValueId,
    rotation_x: ValueId,
    rotation_y: ValueId,
    run: Option<RunId>,
    events: SmallVec<[FlipEvent; 4]>,
}

impl CardFlip {
    pub fn new(
        scheduler: &mut AnimationScheduler,
        config: CardFlipConfig,
    ) -> Result<Self, AnimationError> {
        let mappings = FlipMappings::new(config.flip_zoom)?;
        Ok(Self {
            config,
            mappings,
            side: Side::A,
            target: Side::A,
            progress: scheduler.create_value(0.0),
            zoom: scheduler.create_value(0.0),
            rotation_x: scheduler.create_value(ROTATION_REST),
            rotation_y: scheduler.create_value(ROTATION_REST),
            run: None,
            events: SmallVec::new(),
        })
    }

    pub fn config(&self) -> &CardFlipConfig {
        &self.config
    }

    /// Side the card rests on
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_flipping(&self) -> bool {
        self.run.is_some()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = FlipEvent> + '_ {
        self.events.drain(..)
    }

    /// Scale of the whole card, bulging during a flip
    pub fn scale(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler
            .sample(self.zoom, &self.mappings.zoom)
            .unwrap_or(1.0)
    }

    pub fn face(&self, scheduler: &AnimationScheduler, face: Side) -> FaceTransform {
        let (opacity_map, rotation_map) = match (face, self.config.axis) {
            (Side::A, _) => (&self.mappings.opacity_a, &self.mappings.rotation_a),
            (Side::B, FlipAxis::X) => (&self.mappings.opacity_b, &self.mappings.rotation_b_x),
            (Side::B, FlipAxis::Y) => (&self.mappings.opacity_b, &self.mappings.rotation_b_y),
        };
        let rotation = match self.config.axis {
            FlipAxis::X => self.rotation_x,
            FlipAxis::Y => self.rotation_y,
        };

        FaceTransform {
            opacity: scheduler.sample(self.progress, opacity_map).unwrap_or(0.0),
            z_index: if face == self.side { 1 } else { 0 },
            axis: self.config.axis,
            rotation_deg: scheduler.sample(rotation, rotation_map).unwrap_or(0.0),
            translate_x: -self.config.expected_width / 2.0,
        }
    }

    /// Free the card's values
    pub fn release(self, scheduler: &mut AnimationScheduler) {
        for id in [self.progress, self.zoom, self.rotation_x, self.rotation_y] {
            scheduler.remove_value(id);
        }
    }

    fn flip_sequence(&self, towards: Side) -> Sequence {
        let duration = self.config.duration_ms;
        let leaving_a = towards == Side::B;
        let turned = if leaving_a {
            ROTATION_TURNED
        } else {
            ROTATION_REST
        };
        let (rotate_x, rotate_y) = match self.config.axis {
            FlipAxis::X => (turned, ROTATION_REST),
            FlipAxis::Y => (ROTATION_REST, turned),
        };

        Sequence::parallel([
            Sequence::timing(Timing::to(
                self.progress,
                if leaving_a { PROGRESS_FULL } else { 0.0 },
                duration,
            )),
            Sequence::series([
                Sequence::timing(Timing::to(self.zoom, PROGRESS_FULL, duration / 2.0)),
                Sequence::timing(Timing::to(self.zoom, 0.0, duration / 2.0)),
            ]),
            Sequence::timing(Timing::to(self.rotation_x, rotate_x, duration)),
            Sequence::timing(Timing::to(self.rotation_y, rotate_y, duration)),
        ])
    }
}

impl FlipCommand for CardFlip {
    fn flip(&mut self, scheduler: &mut AnimationScheduler) {
        let next = self.target.other();
        self.events.push(FlipEvent::Flip(next));
        self.events.push(FlipEvent::Start(next));

        if self.run.is_some() {
            tracing::debug!(towards = ?next, "retargeting flip in flight");
        }
        self.target = next;
        self.run = Some(scheduler.start(self.flip_sequence(next)));
    }
}

impl Sequencer for CardFlip {
    fn update(&mut self, _scheduler: &mut AnimationScheduler, frame: &Frame) {
        if frame.take(&mut self.run) {
            self.side = self.target;
            tracing::debug!(side = ?self.side, "card flip ended");
            self.events.push(FlipEvent::End(self.side));
        }
    }
}
