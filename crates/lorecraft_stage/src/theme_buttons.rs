//! Theme-break easter egg
//!
//! Three header buttons. Pressing them left to right switches between the
//! regular and the broken theme, after which the buttons scream for a while.
//! Every press floats a word up from its button.

use crate::frame::{Frame, Sequencer};
use lorecraft_animation::{
    AnimationError, AnimationScheduler, Interpolation, RunId, Sequence, Timing, ValueId,
};
use lorecraft_theme::{Theme, ThemeName};
use smallvec::SmallVec;

/// How long a floating word takes to rise and fade
pub const FLOAT_MS: f32 = 1000.0;
/// Distance a floating word rises
pub const FLOAT_RISE: f32 = 200.0;

const SCREAM_ROUNDS: usize = 20;
const SCREAM_INTERVAL_MS: f32 = 200.0;
const UNBLOCK_AFTER_MS: f32 = 800.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavButton {
    One,
    Two,
    Three,
}

impl NavButton {
    pub const ALL: [NavButton; 3] = [NavButton::One, NavButton::Two, NavButton::Three];

    /// Word floated by a plain press
    fn word(self, broken: bool) -> &'static str {
        match (self, broken) {
            (NavButton::One, false) => "Do",
            (NavButton::Two, false) => "Not",
            (NavButton::Three, false) => "Touch",
            (NavButton::One, true) => "Please",
            (NavButton::Two, true) => "Fix",
            (NavButton::Three, true) => "Me",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ThemeButtonsEvent {
    /// The host should switch to this theme and hand it back via [`ThemeButtons::set_theme`]
    SwitchTheme(ThemeName),
    /// Presses are accepted again
    Unblocked,
}

struct FloatingText {
    button: NavButton,
    word: &'static str,
    width: f32,
    progress: ValueId,
    run: RunId,
}

/// Rendered state of a floating word
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingTextView {
    pub button: NavButton,
    pub word: &'static str,
    pub top: f32,
    pub opacity: f32,
    /// Width to center the word over its button
    pub width: f32,
}

pub struct ThemeButtons {
    theme: ThemeName,
    /// Centering width of floating words, from the active theme
    span_width: f32,
    /// 1 after the first button, halved by the second; 0.5 means "pressed in order"
    register: f32,
    blocked: bool,
    floating: Vec<FloatingText>,
    scheduled: Vec<(RunId, NavButton, &'static str)>,
    unblock: Option<RunId>,
    top: Interpolation,
    opacity: Interpolation,
    events: SmallVec<[ThemeButtonsEvent; 2]>,
}

impl ThemeButtons {
    pub fn new(theme: &Theme) -> Result<Self, AnimationError> {
        Ok(Self {
            theme: theme.name,
            span_width: theme.nav_button_span(),
            register: 0.0,
            blocked: false,
            floating: Vec::new(),
            scheduled: Vec::new(),
            unblock: None,
            top: Interpolation::new([0.0, 1.0], [0.0, FLOAT_RISE])?,
            opacity: Interpolation::new([0.0, 1.0], [1.0, 0.0])?,
            events: SmallVec::new(),
        })
    }

    /// Adopt the active theme
    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme = theme.name;
        self.span_width = theme.nav_button_span();
    }

    pub fn is_broken(&self) -> bool {
        self.theme == ThemeName::Broken
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Press a button; returns false if presses are blocked
    pub fn press(&mut self, scheduler: &mut AnimationScheduler, button: NavButton) -> bool {
        if self.blocked {
            tracing::trace!(?button, "press ignored while screaming");
            return false;
        }

        let broken = self.is_broken();
        match button {
            NavButton::One => self.register = 1.0,
            NavButton::Two => self.register /= 2.0,
            NavButton::Three => {
                if self.register == 0.5 {
                    self.toggle_theme(scheduler);
                }
                self.register = 0.0;
            }
        }
        self.spawn(scheduler, button, button.word(broken));
        true
    }

    pub fn floating_texts<'a>(
        &'a self,
        scheduler: &'a AnimationScheduler,
    ) -> impl Iterator<Item = FloatingTextView> + 'a {
        self.floating.iter().map(move |text| FloatingTextView {
            button: text.button,
            word: text.word,
            top: scheduler.sample(text.progress, &self.top).unwrap_or_default(),
            opacity: scheduler
                .sample(text.progress, &self.opacity)
                .unwrap_or_default(),
            width: text.width,
        })
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = ThemeButtonsEvent> + '_ {
        self.events.drain(..)
    }

    fn toggle_theme(&mut self, scheduler: &mut AnimationScheduler) {
        let was_broken = self.is_broken();
        let next = self.theme.toggled();
        tracing::info!(theme = %next, "theme buttons pressed in order");
        self.events.push(ThemeButtonsEvent::SwitchTheme(next));
        self.theme = next;
        self.blocked = true;

        let mut delay = 400.0;
        self.schedule(scheduler, delay, NavButton::One, "Oh");
        delay += 100.0;
        self.schedule(scheduler, delay, NavButton::Two, "My");
        delay += 100.0;
        self.schedule(scheduler, delay, NavButton::Three, "God");
        delay += 750.0;
        self.schedule(scheduler, delay, NavButton::One, "You");
        let verdict = if was_broken { "Fixed" } else { "Broke" };
        self.schedule(scheduler, delay, NavButton::Two, verdict);
        delay += 100.0;
        self.schedule(scheduler, delay, NavButton::Three, "It");
        delay += 500.0;

        let scream = if was_broken {
            ["Yaaa", "aaaa", "aaay"]
        } else {
            ["Aaaa", "aaaa", "aaaa"]
        };
        for _ in 0..SCREAM_ROUNDS {
            for (button, word) in NavButton::ALL.into_iter().zip(scream) {
                self.schedule(scheduler, delay, button, word);
            }
            delay += SCREAM_INTERVAL_MS;
        }

        self.unblock = Some(scheduler.start(Sequence::delay(delay + UNBLOCK_AFTER_MS)));
    }

    fn schedule(
        &mut self,
        scheduler: &mut AnimationScheduler,
        delay_ms: f32,
        button: NavButton,
        word: &'static str,
    ) {
        let run = scheduler.start(Sequence::delay(delay_ms));
        self.scheduled.push((run, button, word));
    }

    fn spawn(&mut self, scheduler: &mut AnimationScheduler, button: NavButton, word: &'static str) {
        let progress = scheduler.create_value(0.0);
        let run = scheduler.start(Timing::to(progress, 1.0, FLOAT_MS));
        self.floating.push(FloatingText {
            button,
            word,
            width: self.span_width,
            progress,
            run,
        });
    }
}

impl Sequencer for ThemeButtons {
    fn update(&mut self, scheduler: &mut AnimationScheduler, frame: &Frame) {
        self.floating.retain(|text| {
            let done = frame.completed(text.run);
            if done {
                scheduler.remove_value(text.progress);
            }
            !done
        });

        let mut due: SmallVec<[(NavButton, &'static str); 3]> = SmallVec::new();
        self.scheduled.retain(|(run, button, word)| {
            let done = frame.completed(*run);
            if done {
                due.push((*button, *word));
            }
            !done
        });
        for (button, word) in due {
            self.spawn(scheduler, button, word);
        }

        if frame.take(&mut self.unblock) {
            self.blocked = false;
            tracing::debug!("theme buttons accepting presses");
            self.events.push(ThemeButtonsEvent::Unblocked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorecraft_theme::Viewport;

    fn dark() -> Theme {
        Theme::resolve(ThemeName::Dark, Viewport::default())
    }

    fn words(buttons: &ThemeButtons, scheduler: &AnimationScheduler) -> Vec<&'static str> {
        buttons.floating_texts(scheduler).map(|t| t.word).collect()
    }

    #[test]
    fn out_of_order_presses_only_float_words() {
        let mut scheduler = AnimationScheduler::new();
        let mut buttons = ThemeButtons::new(&dark()).unwrap();

        for button in [NavButton::Two, NavButton::One, NavButton::Three] {
            assert!(buttons.press(&mut scheduler, button));
        }
        assert_eq!(words(&buttons, &scheduler), ["Not", "Do", "Touch"]);
        assert_eq!(buttons.drain_events().count(), 0);
        assert!(!buttons.is_blocked());
    }

    #[test]
    fn floating_word_rises_and_fades() {
        let mut scheduler = AnimationScheduler::new();
        let mut buttons = ThemeButtons::new(&dark()).unwrap();
        buttons.press(&mut scheduler, NavButton::One);

        crate::frame::run_for(&mut scheduler, &mut buttons, 100.0, 500.0);
        let text = buttons.floating_texts(&scheduler).next().unwrap();
        assert_eq!(text.top, 100.0);
        assert_eq!(text.opacity, 0.5);
        assert_eq!(text.width, 150.0);

        crate::frame::run_for(&mut scheduler, &mut buttons, 100.0, 500.0);
        assert_eq!(buttons.floating_texts(&scheduler).count(), 0);
    }

    #[test]
    fn in_order_presses_switch_theme_and_block() {
        let mut scheduler = AnimationScheduler::new();
        let mut buttons = ThemeButtons::new(&dark()).unwrap();

        buttons.press(&mut scheduler, NavButton::One);
        buttons.press(&mut scheduler, NavButton::Two);
        buttons.press(&mut scheduler, NavButton::Three);

        let events: Vec<_> = buttons.drain_events().collect();
        assert_eq!(events, [ThemeButtonsEvent::SwitchTheme(ThemeName::Broken)]);
        assert!(buttons.is_blocked());
        assert!(buttons.is_broken());
        // the press itself still floats the pre-switch word
        assert_eq!(words(&buttons, &scheduler).last(), Some(&"Touch"));
        assert!(!buttons.press(&mut scheduler, NavButton::One));
    }

    #[test]
    fn second_button_twice_breaks_the_order() {
        let mut scheduler = AnimationScheduler::new();
        let mut buttons = ThemeButtons::new(&dark()).unwrap();
        for button in [NavButton::One, NavButton::Two, NavButton::Two, NavButton::Three] {
            buttons.press(&mut scheduler, button);
        }
        assert_eq!(buttons.drain_events().count(), 0);
    }
}
