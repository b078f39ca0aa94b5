//! The image half of the home screen
//!
//! The playful card enters and flips, then hands over to the slideshow. The
//! card stays mounted until the slideshow's first crossfade has covered it.

use crate::frame::{Frame, Sequencer};
use crate::playful_card::{PlayfulCard, PlayfulEvent};
use crate::slideshow::{Slideshow, SlideshowEvent};
use lorecraft_animation::{AnimationError, AnimationScheduler, RunId, Sequence, Timing, ValueId};
use lorecraft_theme::{Theme, Viewport};
use smallvec::SmallVec;

/// When the title is hidden, as the card passes over it on small screens
pub const TITLE_HIDE_AT_MS: f32 = 7600.0;

/// Index of the regular asset list
pub const APP_LIST: usize = 0;
/// Index of the cat asset list
pub const CAT_LIST: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeImagesEvent {
    /// The card finished flipping and the slideshow took over
    CardDone,
    /// The slideshow covered the card, which is now gone
    CyclingStarted,
    TitleHidden,
    Slideshow(SlideshowEvent),
}

struct Title {
    opacity: ValueId,
    timer: Option<RunId>,
}

pub struct HomeImages<A> {
    theme: Theme,
    card: Option<PlayfulCard>,
    slideshow: Option<Slideshow<A>>,
    /// Asset lists waiting for the slideshow to be created
    pending_lists: Option<Vec<Vec<A>>>,
    cat_mode: bool,
    title: Option<Title>,
    events: SmallVec<[HomeImagesEvent; 4]>,
}

impl<A> HomeImages<A> {
    /// Start the card entrance
    ///
    /// `show_title` is set when this half is shown alone; the card then enters
    /// faster and the title above it is hidden as the card moves over it.
    pub fn new(
        scheduler: &mut AnimationScheduler,
        theme: &Theme,
        viewport: Viewport,
        app_assets: Vec<A>,
        cat_assets: Vec<A>,
        cat_mode: bool,
        show_title: bool,
    ) -> Result<Self, AnimationError> {
        let card = PlayfulCard::new(scheduler, theme, viewport, show_title)?;
        let title = show_title.then(|| Title {
            opacity: scheduler.create_value(1.0),
            timer: Some(scheduler.start(Sequence::delay(TITLE_HIDE_AT_MS))),
        });

        Ok(Self {
            theme: theme.clone(),
            card: Some(card),
            slideshow: None,
            pending_lists: Some(vec![app_assets, cat_assets]),
            cat_mode,
            title,
            events: SmallVec::new(),
        })
    }

    /// Switch between the regular and the cat assets from the next cycle on
    pub fn set_cat_mode(&mut self, cat_mode: bool) {
        self.cat_mode = cat_mode;
        if let Some(slideshow) = &mut self.slideshow {
            slideshow.select_list(Self::list_for(cat_mode));
        }
    }

    /// Follow a theme switch; the slideshow picks it up at its next cycle
    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        if let Some(slideshow) = &mut self.slideshow {
            slideshow.set_theme(theme);
        }
    }

    pub fn cat_mode(&self) -> bool {
        self.cat_mode
    }

    pub fn title_text(&self) -> &'static str {
        if self.cat_mode {
            "LaCat Apps :3"
        } else {
            "LaPlante Apps"
        }
    }

    /// Title opacity, if the title is shown at all
    pub fn title_opacity(&self, scheduler: &AnimationScheduler) -> Option<f32> {
        let title = self.title.as_ref()?;
        scheduler.value(title.opacity)
    }

    pub fn card(&self) -> Option<&PlayfulCard> {
        self.card.as_ref()
    }

    pub fn slideshow(&self) -> Option<&Slideshow<A>> {
        self.slideshow.as_ref()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = HomeImagesEvent> + '_ {
        self.events.drain(..)
    }

    fn list_for(cat_mode: bool) -> usize {
        if cat_mode {
            CAT_LIST
        } else {
            APP_LIST
        }
    }

    fn start_slideshow(&mut self, scheduler: &mut AnimationScheduler) {
        let Some(lists) = self.pending_lists.take() else {
            return;
        };
        tracing::debug!(cat_mode = self.cat_mode, "handing over to the slideshow");
        self.slideshow = Some(Slideshow::new(
            scheduler,
            &self.theme,
            lists,
            Self::list_for(self.cat_mode),
        ));
        self.events.push(HomeImagesEvent::CardDone);
    }
}

impl<A> Sequencer for HomeImages<A> {
    fn update(&mut self, scheduler: &mut AnimationScheduler, frame: &Frame) {
        if let Some(title) = &mut self.title {
            if frame.take(&mut title.timer) {
                scheduler.start(Timing::to(title.opacity, 0.0, 1.0));
                self.events.push(HomeImagesEvent::TitleHidden);
            }
        }

        let mut card_done = false;
        if let Some(card) = &mut self.card {
            card.update(scheduler, frame);
            card_done = card
                .drain_events()
                .any(|event| event == PlayfulEvent::Complete);
        }
        if card_done {
            self.start_slideshow(scheduler);
        }

        let mut covered = false;
        if let Some(slideshow) = &mut self.slideshow {
            slideshow.update(scheduler, frame);
            for event in slideshow.drain_events() {
                covered |= event == SlideshowEvent::FirstCycleComplete;
                self.events.push(HomeImagesEvent::Slideshow(event));
            }
        }
        if covered {
            if let Some(card) = self.card.take() {
                card.release(scheduler);
            }
            self.events.push(HomeImagesEvent::CyclingStarted);
        }
    }
}
