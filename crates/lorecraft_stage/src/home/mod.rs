//! The landing screen
//!
//! Wide screens show the caption carousel next to the card and slideshow.
//! Small screens show one half per visit, alternating between visits.

pub mod captions;
pub mod flags;
pub mod images;

pub use captions::{landing_captions, Caption, CaptionAction, CaptionCarousel, CaptionEvent};
pub use flags::HomeFlags;
pub use images::{HomeImages, HomeImagesEvent};

use crate::frame::{Frame, Sequencer};
use crate::navigation::Navigator;
use crate::screen::AnimatedScreen;
use crate::storage::KeyValueStore;
use lorecraft_animation::{AnimationError, AnimationScheduler};
use lorecraft_theme::{Theme, Viewport};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeEvent {
    Caption(CaptionEvent),
    Images(HomeImagesEvent),
}

pub struct HomeScreen<A> {
    flags: HomeFlags,
    screen: AnimatedScreen,
    captions: Option<CaptionCarousel>,
    images: Option<HomeImages<A>>,
    events: SmallVec<[HomeEvent; 4]>,
}

impl<A> HomeScreen<A> {
    /// Mount the screen and run its enter transition
    pub fn new(
        scheduler: &mut AnimationScheduler,
        theme: &Theme,
        viewport: Viewport,
        store: &mut impl KeyValueStore,
        first_visit_coin: bool,
        app_assets: Vec<A>,
        cat_assets: Vec<A>,
    ) -> Result<Self, AnimationError> {
        let flags = HomeFlags::load(store, first_visit_coin);
        let small = viewport.is_small();
        let show_message = !small || flags.show_message;
        let show_images = !small || !flags.show_message;

        let captions = show_message
            .then(|| CaptionCarousel::new(scheduler, landing_captions(), flags.cat_mode));
        let images = if show_images {
            Some(HomeImages::new(
                scheduler,
                theme,
                viewport,
                app_assets,
                cat_assets,
                flags.cat_mode,
                !show_message,
            )?)
        } else {
            None
        };
        tracing::debug!(small, show_message, show_images, "home screen mounted");

        let mut screen = AnimatedScreen::new(scheduler, theme);
        screen.focus(scheduler, theme);

        Ok(Self {
            flags,
            screen,
            captions,
            images,
            events: SmallVec::new(),
        })
    }

    pub fn set_theme(&mut self, theme: &Theme) {
        if let Some(images) = &mut self.images {
            images.set_theme(theme);
        }
    }

    pub fn flags(&self) -> HomeFlags {
        self.flags
    }

    pub fn screen(&self) -> &AnimatedScreen {
        &self.screen
    }

    pub fn captions(&self) -> Option<&CaptionCarousel> {
        self.captions.as_ref()
    }

    pub fn images(&self) -> Option<&HomeImages<A>> {
        self.images.as_ref()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = HomeEvent> + '_ {
        self.events.drain(..)
    }

    pub fn update(
        &mut self,
        scheduler: &mut AnimationScheduler,
        frame: &Frame,
        theme: &Theme,
        store: &mut impl KeyValueStore,
        navigator: &mut impl Navigator,
    ) {
        self.screen.update(scheduler, frame, theme, navigator);

        if let Some(captions) = &mut self.captions {
            captions.update(scheduler, frame);
            for event in captions.drain_events() {
                match event {
                    CaptionEvent::PersistCatMode => HomeFlags::persist_cat_mode(store),
                    CaptionEvent::CatModeEnabled => {
                        self.flags.cat_mode = true;
                        if let Some(images) = &mut self.images {
                            images.set_cat_mode(true);
                        }
                    }
                    CaptionEvent::CaptionChanged(_) => {}
                }
                self.events.push(HomeEvent::Caption(event));
            }
        }

        if let Some(images) = &mut self.images {
            images.update(scheduler, frame);
            self.events
                .extend(images.drain_events().map(HomeEvent::Images));
        }
    }
}
