//! The message half of the home screen
//!
//! A title typewriter above a carousel of captions that type out and delete
//! one after another. Reaching the end of the carousel switches the site to
//! its cat product, which replaces the title.

use crate::frame::{Frame, Sequencer};
use crate::typewriter::{TextKind, Typewriter, TypewriterConfig, TypewriterEvent};
use lorecraft_animation::{AnimationScheduler, RunId, Sequence};
use smallvec::SmallVec;

/// Caption the carousel resumes at for visitors already in cat mode
pub const CAT_CAPTION: usize = 12;
/// Wait before the cat caption is clarified
pub const CAT_CLARIFICATION_DELAY_MS: f32 = 60_000.0;

pub const TITLE: &str = "LoreCraft";
pub const CAT_TITLE: &str = "LoreCat :3";

/// What happens once a caption has finished
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionAction {
    /// Show the next caption
    Advance,
    /// Show the next caption and remember the visitor reached the cats
    AdvanceAndPersistCatMode,
    /// Delete the title in favour of the cat product
    ChangeProduct,
    /// Stay on this caption
    Hold,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: String,
    pub config: TypewriterConfig,
    pub action: CaptionAction,
}

impl Caption {
    /// A caption with the carousel's shared timings
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            config: TypewriterConfig {
                speed_ms: 50.0,
                delete_speed_ms: Some(20.0),
                pause_ms: 500.0,
                delete_after: true,
                start_full: false,
            },
            action: CaptionAction::Advance,
        }
    }

    /// A caption shown in full with no animation
    pub fn still(text: impl Into<String>) -> Self {
        let mut caption = Self::new(text).action(CaptionAction::Hold);
        caption.config.start_full = true;
        caption.config.delete_after = false;
        caption
    }

    pub fn pause_ms(mut self, pause_ms: f32) -> Self {
        self.config.pause_ms = pause_ms;
        self
    }

    pub fn speed_ms(mut self, speed_ms: f32) -> Self {
        self.config.speed_ms = speed_ms;
        self
    }

    pub fn delete_after(mut self, delete_after: bool) -> Self {
        self.config.delete_after = delete_after;
        self
    }

    pub fn action(mut self, action: CaptionAction) -> Self {
        self.action = action;
        self
    }
}

/// The landing page's captions, in order
pub fn landing_captions() -> Vec<Caption> {
    let hairs = "\u{200A}".repeat(20);
    vec![
        Caption::new(
            "This is a caption that I'll make informative and interesting and everything :). \
             Not that you're reading it. Oh, you are? Ok, here we go!",
        )
        .pause_ms(1000.0),
        Caption::new(
            "This site is dedicated to LoreCraft (well, I guess that's obvious), a fun little \
             party/story/co-op card game that I've been working on for a couple years! Wanna \
             hear a couple taglines?",
        )
        .pause_ms(1000.0),
        Caption::new(
            "\"Cards come alive, but never in the way you expect!\" One cool thing is how cards \
             interact naturally in this game, as if they were real! However because you don't \
             control your own story (the other players do), things often take twists and turns \
             that you didn't plan for...",
        )
        .pause_ms(1000.0),
        Caption::new(
            "\"LoreCraft lets players get deeply creative in a casual setting with unique and \
             memorable payoffs.\" Anyone can be creative, and this game lets you unleash your \
             imagination as much or as little as you like, getting rewarded either way!",
        )
        .pause_ms(1000.0),
        Caption::new(format!(
            "\"Takes free association to a whole new level as players scramble to predict each \
             other.\" Or don't bother predicting! Set your story up however you think is best; \
             leave the rest up to your friends! {hairs} . . . Happy?"
        ))
        .pause_ms(1000.0),
        Caption::new(
            ". . . You're still here? I mean, it's just a landing page. Not much to see . . .",
        )
        .pause_ms(1000.0),
        Caption::new("Navigate to Cool Stuff in the menu, wierdo."),
        Caption::new("FOR REAL NOW"),
        Caption::new("I CANT KEEP DOING THIS FOREVER"),
        Caption::new("Or can I?"),
        Caption::new("Jk I can't. But I can refuse to cooperate.")
            .action(CaptionAction::AdvanceAndPersistCatMode),
        Caption::new(["meow"; 64].join(" ").replacen('m', "M", 1)).speed_ms(25.0),
        Caption::new("I like cats.")
            .delete_after(false)
            .action(CaptionAction::ChangeProduct),
        Caption::still("I like cats."),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionEvent {
    CaptionChanged(usize),
    /// The visitor reached the cat captions; remember it for later visits
    PersistCatMode,
    /// The title switched to the cat product
    CatModeEnabled,
}

pub struct CaptionCarousel {
    captions: Vec<Caption>,
    current: usize,
    caption: Option<Typewriter>,
    title: Typewriter,
    /// Whether the LoreCraft title should be deleted in favour of the cat one
    delete_title: bool,
    title_changed: bool,
    clarification: Option<RunId>,
    events: SmallVec<[CaptionEvent; 4]>,
}

impl CaptionCarousel {
    pub fn new(
        scheduler: &mut AnimationScheduler,
        captions: Vec<Caption>,
        cat_mode: bool,
    ) -> Self {
        let title = Typewriter::from_text(
            TITLE,
            Some(TextKind::Header),
            TypewriterConfig {
                start_full: true,
                delete_after: cat_mode,
                ..Default::default()
            },
        );
        let current = if cat_mode { CAT_CAPTION } else { 0 };
        let clarification =
            cat_mode.then(|| scheduler.start(Sequence::delay(CAT_CLARIFICATION_DELAY_MS)));

        let mut carousel = Self {
            captions,
            current,
            caption: None,
            title,
            delete_title: cat_mode,
            title_changed: false,
            clarification,
            events: SmallVec::new(),
        };
        carousel.show(current);
        carousel
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn caption(&self) -> Option<&Typewriter> {
        self.caption.as_ref()
    }

    pub fn title(&self) -> &Typewriter {
        &self.title
    }

    pub fn title_changed(&self) -> bool {
        self.title_changed
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = CaptionEvent> + '_ {
        self.events.drain(..)
    }

    fn show(&mut self, index: usize) {
        self.current = index;
        self.caption = self.captions.get(index).map(|entry| {
            Typewriter::from_text(&entry.text, Some(TextKind::Caption), entry.config.clone())
        });
        tracing::debug!(caption = index, "caption shown");
        self.events.push(CaptionEvent::CaptionChanged(index));
    }

    fn change_product(&mut self, scheduler: &mut AnimationScheduler) {
        self.delete_title = true;
        if !self.title_changed {
            self.title.set_delete_after(true);
        }
        self.show(self.current + 1);
        self.clarification = Some(scheduler.start(Sequence::delay(CAT_CLARIFICATION_DELAY_MS)));
    }

    fn update_title(&mut self, dt_ms: f32) {
        self.title.advance(dt_ms);
        let finished = self
            .title
            .drain_events()
            .any(|event| event == TypewriterEvent::Finished);
        if finished && self.delete_title && !self.title_changed {
            tracing::info!("switching to the cat product");
            self.title = Typewriter::from_text(
                CAT_TITLE,
                Some(TextKind::Header),
                TypewriterConfig::default(),
            );
            self.title_changed = true;
            self.events.push(CaptionEvent::CatModeEnabled);
        }
    }
}

impl Sequencer for CaptionCarousel {
    fn update(&mut self, scheduler: &mut AnimationScheduler, frame: &Frame) {
        self.update_title(frame.dt_ms);

        let finished = self.caption.as_mut().is_some_and(|caption| {
            caption.advance(frame.dt_ms);
            caption
                .drain_events()
                .any(|event| event == TypewriterEvent::Finished)
        });
        if finished {
            let action = self
                .captions
                .get(self.current)
                .map_or(CaptionAction::Hold, |entry| entry.action);
            match action {
                CaptionAction::Advance => self.show(self.current + 1),
                CaptionAction::AdvanceAndPersistCatMode => {
                    self.events.push(CaptionEvent::PersistCatMode);
                    self.show(self.current + 1);
                }
                CaptionAction::ChangeProduct => self.change_product(scheduler),
                CaptionAction::Hold => {}
            }
        }

        if frame.take(&mut self.clarification) {
            self.show(self.current + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::run_for;

    #[test]
    fn landing_captions_end_with_the_cat_product() {
        let captions = landing_captions();
        assert_eq!(captions.len(), 14);
        assert_eq!(captions[CAT_CAPTION].action, CaptionAction::ChangeProduct);
        assert_eq!(captions[10].action, CaptionAction::AdvanceAndPersistCatMode);
        assert_eq!(captions[11].config.speed_ms, 25.0);
        assert!(captions[11].text.starts_with("Meow meow"));
        assert_eq!(captions[0].config.pause_ms, 1000.0);
        assert_eq!(captions[6].config.pause_ms, 500.0);
    }

    #[test]
    fn finished_caption_advances_to_the_next() {
        let mut scheduler = AnimationScheduler::new();
        let captions = vec![Caption::new("ab"), Caption::new("cd")];
        let mut carousel = CaptionCarousel::new(&mut scheduler, captions, false);
        assert_eq!(carousel.title().text(), TITLE);

        // 2 glyphs at 50, pause 500, 2 deletions at 20
        run_for(&mut scheduler, &mut carousel, 10.0, 640.0);
        assert_eq!(carousel.current(), 1);
        assert_eq!(carousel.caption().unwrap().text(), "");
    }

    #[test]
    fn change_product_deletes_title_and_swaps_in_cat_title() {
        let mut scheduler = AnimationScheduler::new();
        let captions = vec![
            Caption::new("x")
                .delete_after(false)
                .action(CaptionAction::ChangeProduct),
            Caption::still("x"),
        ];
        let mut carousel = CaptionCarousel::new(&mut scheduler, captions, false);

        // type "x", then delete the 9-glyph title at 100 per glyph
        run_for(&mut scheduler, &mut carousel, 10.0, 50.0);
        assert_eq!(carousel.current(), 1);
        run_for(&mut scheduler, &mut carousel, 10.0, 900.0);

        let events: Vec<_> = carousel.drain_events().collect();
        assert!(events.contains(&CaptionEvent::CatModeEnabled));
        assert!(carousel.title_changed());
        assert_eq!(carousel.title().glyphs().len(), CAT_TITLE.chars().count());
    }

    #[test]
    fn cat_mode_starts_at_the_cat_caption() {
        let mut scheduler = AnimationScheduler::new();
        let carousel = CaptionCarousel::new(&mut scheduler, landing_captions(), true);
        assert_eq!(carousel.current(), CAT_CAPTION);
        assert_eq!(carousel.title().text(), TITLE);
        assert!(scheduler.has_active_runs());
    }
}
