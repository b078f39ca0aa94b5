//! Image that fades in once it has loaded, optionally over a spinner

use lorecraft_animation::{AnimationScheduler, RunId, Sequence, Timing, ValueId};

pub const SPINNER_FADE_MS: f32 = 200.0;
pub const IMAGE_FADE_MS: f32 = 350.0;

pub struct FadeInImage {
    opacity: ValueId,
    spinner_opacity: ValueId,
    loaded: bool,
}

impl FadeInImage {
    /// Create the image hidden, with the spinner showing if `spinner` is set
    pub fn new(scheduler: &mut AnimationScheduler, spinner: bool) -> Self {
        Self {
            opacity: scheduler.create_value(0.0),
            spinner_opacity: scheduler.create_value(if spinner { 1.0 } else { 0.0 }),
            loaded: false,
        }
    }

    /// Fade the spinner out and the image in
    ///
    /// Returns `None` if the image already loaded.
    pub fn loaded(&mut self, scheduler: &mut AnimationScheduler) -> Option<RunId> {
        if self.loaded {
            tracing::trace!("image already loaded");
            return None;
        }
        self.loaded = true;
        Some(scheduler.start(Sequence::parallel([
            Sequence::timing(Timing::to(self.spinner_opacity, 0.0, SPINNER_FADE_MS)),
            Sequence::timing(Timing::to(self.opacity, 1.0, IMAGE_FADE_MS)),
        ])))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn opacity(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.opacity).unwrap_or_default()
    }

    pub fn spinner_opacity(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.spinner_opacity).unwrap_or_default()
    }

    pub fn release(self, scheduler: &mut AnimationScheduler) {
        scheduler.remove_value(self.opacity);
        scheduler.remove_value(self.spinner_opacity);
    }
}
