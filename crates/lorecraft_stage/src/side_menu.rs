//! Slide-in navigation menu

use crate::frame::Frame;
use crate::navigation::Navigator;
use lorecraft_animation::{AnimationScheduler, Easing, RunId, Sequence, Timing, ValueId};
use lorecraft_theme::Theme;
use smallvec::SmallVec;

/// Wait after pushing a route before the menu becomes opaque again
pub const RESTORE_DELAY_MS: f32 = 100.0;

/// Open or close the menu
pub trait MenuCommand {
    fn toggle_menu(&mut self, scheduler: &mut AnimationScheduler, fast: bool);
}

pub struct SideMenu {
    left: ValueId,
    opacity: ValueId,
    width: f32,
    speed_ms: f32,
    shown: bool,
    /// Slides still in flight; each one flips `shown` when it completes
    toggles: SmallVec<[RunId; 2]>,
    fade: Option<(RunId, String)>,
    restore: Option<RunId>,
}

impl SideMenu {
    /// Create the menu hidden off-screen to the left
    pub fn new(scheduler: &mut AnimationScheduler, theme: &Theme) -> Self {
        Self {
            left: scheduler.create_value(-theme.side_menu_width),
            opacity: scheduler.create_value(1.0),
            width: theme.side_menu_width,
            speed_ms: theme.side_menu_speed_ms,
            shown: false,
            toggles: SmallVec::new(),
            fade: None,
            restore: None,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn left(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.left).unwrap_or_default()
    }

    pub fn opacity(&self, scheduler: &AnimationScheduler) -> f32 {
        scheduler.value(self.opacity).unwrap_or_default()
    }

    /// Fade the current screen and the menu out, then push `path`
    pub fn navigate(
        &mut self,
        scheduler: &mut AnimationScheduler,
        navigator: &mut impl Navigator,
        path: impl Into<String>,
    ) {
        navigator.set_fade_out(true);
        self.toggle_menu(scheduler, true);
        let fade = scheduler.start(Timing::to(self.opacity, 0.0, self.speed_ms / 2.0));
        self.fade = Some((fade, path.into()));
    }

    /// Pick up a new theme, snapping the menu closed
    pub fn reset(&mut self, scheduler: &mut AnimationScheduler, theme: &Theme) {
        self.width = theme.side_menu_width;
        self.speed_ms = theme.side_menu_speed_ms;
        scheduler.set_value(self.left, -self.width);
        self.shown = false;
        self.toggles.clear();
        tracing::debug!(width = self.width, "side menu reset");
    }

    pub fn update(
        &mut self,
        scheduler: &mut AnimationScheduler,
        frame: &Frame,
        navigator: &mut impl Navigator,
    ) {
        let before = self.toggles.len();
        self.toggles.retain(|run| !frame.completed(*run));
        for _ in self.toggles.len()..before {
            self.shown = !self.shown;
        }

        let faded = self
            .fade
            .as_ref()
            .is_some_and(|(run, _)| frame.completed(*run));
        if faded {
            if let Some((_, path)) = self.fade.take() {
                navigator.push(&path);
                self.restore = Some(scheduler.start(Sequence::delay(RESTORE_DELAY_MS)));
            }
        }

        if frame.take(&mut self.restore) {
            scheduler.set_value(self.opacity, 1.0);
        }
    }
}

impl MenuCommand for SideMenu {
    fn toggle_menu(&mut self, scheduler: &mut AnimationScheduler, fast: bool) {
        let target = if self.shown { -self.width } else { 0.0 };
        let duration = if fast {
            self.speed_ms / 2.0
        } else {
            self.speed_ms
        };
        let run = scheduler.start(Timing::to(self.left, target, duration).easing(Easing::SineOut));
        self.toggles.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::StackNavigator;
    use lorecraft_theme::{ThemeName, Viewport};

    fn step(
        scheduler: &mut AnimationScheduler,
        menu: &mut SideMenu,
        navigator: &mut StackNavigator,
        dt: f32,
    ) {
        let frame = Frame::advance(scheduler, dt);
        menu.update(scheduler, &frame, navigator);
    }

    #[test]
    fn toggle_slides_in_and_marks_shown_on_completion() {
        let theme = Theme::resolve(ThemeName::Dark, Viewport::default());
        let mut scheduler = AnimationScheduler::new();
        let mut navigator = StackNavigator::new("Home");
        let mut menu = SideMenu::new(&mut scheduler, &theme);
        assert_eq!(menu.left(&scheduler), -350.0);

        menu.toggle_menu(&mut scheduler, false);
        step(&mut scheduler, &mut menu, &mut navigator, 400.0);
        assert!(!menu.is_shown());
        step(&mut scheduler, &mut menu, &mut navigator, 50.0);
        assert!(menu.is_shown());
        assert_eq!(menu.left(&scheduler), 0.0);
    }

    #[test]
    fn navigate_pushes_after_fade_and_restores_opacity() {
        let theme = Theme::resolve(ThemeName::Dark, Viewport::default());
        let mut scheduler = AnimationScheduler::new();
        let mut navigator = StackNavigator::new("Home");
        let mut menu = SideMenu::new(&mut scheduler, &theme);
        menu.toggle_menu(&mut scheduler, false);
        step(&mut scheduler, &mut menu, &mut navigator, 450.0);

        menu.navigate(&mut scheduler, &mut navigator, "Videos & Links");
        assert!(navigator.fade_out_requested());
        assert_eq!(navigator.current(), Some("Home"));

        step(&mut scheduler, &mut menu, &mut navigator, 225.0);
        assert_eq!(navigator.current(), Some("Videos & Links"));
        assert!(!menu.is_shown());
        assert_eq!(menu.opacity(&scheduler), 0.0);

        step(&mut scheduler, &mut menu, &mut navigator, 100.0);
        assert_eq!(menu.opacity(&scheduler), 1.0);
    }

    #[test]
    fn reset_snaps_closed_with_new_width() {
        let dark = Theme::resolve(ThemeName::Dark, Viewport::default());
        let broken = Theme::resolve(ThemeName::Broken, Viewport::default());
        let mut scheduler = AnimationScheduler::new();
        let mut navigator = StackNavigator::new("Home");
        let mut menu = SideMenu::new(&mut scheduler, &dark);
        menu.toggle_menu(&mut scheduler, true);
        step(&mut scheduler, &mut menu, &mut navigator, 225.0);
        assert!(menu.is_shown());

        menu.reset(&mut scheduler, &broken);
        assert!(!menu.is_shown());
        assert_eq!(menu.left(&scheduler), -75.0);
    }
}
