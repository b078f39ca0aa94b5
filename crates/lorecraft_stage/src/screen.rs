//! Screen enter and fade-out transitions

use crate::frame::Frame;
use crate::navigation::Navigator;
use lorecraft_animation::{AnimationScheduler, Easing, RunId, Sequence, Timing, ValueId};
use lorecraft_theme::Theme;

/// Wraps a screen's content: slides it up while fading it in, fades it out on request
pub struct AnimatedScreen {
    opacity: ValueId,
    top: ValueId,
    enter: Option<RunId>,
    exit: Option<RunId>,
}

impl AnimatedScreen {
    pub fn new(scheduler: &mut AnimationScheduler, theme: &Theme) -> Self {
        Self {
            opacity: scheduler.create_value(0.0),
            top: scheduler.create_value(theme.screen_animation_y),
            enter: None,
            exit: None,
        }
    }

    /// Run the enter transition, as when the screen gains focus
    pub fn focus(&mut self, scheduler: &mut AnimationScheduler, theme: &Theme) {
        let duration = theme.screen_animation_speed_ms;
        self.enter = Some(scheduler.start(Sequence::parallel([
            Sequence::timing(Timing::to(self.opacity, 1.0, duration)),
            Sequence::timing(Timing::to(self.top, 0.0, duration).easing(Easing::back_out())),
        ])));
    }

    /// Honour a pending fade-out request, clearing it on the navigator
    pub fn update(
        &mut self,
        scheduler: &mut AnimationScheduler,
        frame: &Frame,
        theme: &Theme,
        navigator: &mut impl Navigator,
    ) {
        frame.take(&mut self.enter);
        frame.take(&mut self.exit);

        if navigator.fade_out_requested() {
            navigator.set_fade_out(false);
            tracing::debug!("screen fading out");
            self.exit = Some(scheduler.start(Timing::to(
                self.opacity,
                0.0,
                theme.screen_animation_out_speed_ms,
            )));
        }
    }

    pub fn opacity(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.opacity).unwrap_or_default()
    }

    pub fn top(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.top).unwrap_or_default()
    }

    pub fn is_transitioning(&self) -> bool {
        self.enter.is_some() || self.exit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::StackNavigator;
    use lorecraft_theme::{ThemeName, Viewport};

    #[test]
    fn enters_then_fades_out_on_request() {
        let theme = Theme::resolve(ThemeName::Dark, Viewport::default());
        let mut scheduler = AnimationScheduler::new();
        let mut navigator = StackNavigator::new("Home");
        let mut screen = AnimatedScreen::new(&mut scheduler, &theme);
        assert_eq!(screen.top(&scheduler), 200.0);

        screen.focus(&mut scheduler, &theme);
        for _ in 0..17 {
            let frame = Frame::advance(&mut scheduler, 50.0);
            screen.update(&mut scheduler, &frame, &theme, &mut navigator);
        }
        assert_eq!(screen.opacity(&scheduler), 1.0);
        assert_eq!(screen.top(&scheduler), 0.0);
        assert!(!screen.is_transitioning());

        navigator.set_fade_out(true);
        let frame = Frame::advance(&mut scheduler, 0.0);
        screen.update(&mut scheduler, &frame, &theme, &mut navigator);
        assert!(!navigator.fade_out_requested());

        let frame = Frame::advance(&mut scheduler, 125.0);
        screen.update(&mut scheduler, &frame, &theme, &mut navigator);
        assert_eq!(screen.opacity(&scheduler), 0.5);
    }
}
