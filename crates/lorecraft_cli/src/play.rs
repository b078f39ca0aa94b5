//! Headless frame loop

use crate::config::StageConfig;
use anyhow::{Context, Result};
use lorecraft_animation::AnimationScheduler;
use lorecraft_stage::home::HomeImages;
use lorecraft_stage::{
    Frame, HomeFlags, HomeScreen, KeyValueStore, MemoryStore, NavButton, Navigator, Sequencer,
    ShowcaseButton, ShowcaseKind, ShowcaseLink, SideMenu, StackNavigator, ThemeButtons,
    ThemeButtonsEvent,
};
use lorecraft_theme::Theme;

const APP_ASSETS: [&str; 15] = [
    "card1.png",
    "card2.png",
    "card3.png",
    "card8.png",
    "card10.png",
    "card6.png",
    "card12.png",
    "card5.png",
    "card13.png",
    "card7.png",
    "card11.png",
    "card9.png",
    "card14.png",
    "card4.png",
    "card0.png",
];

const CAT_ASSETS: [&str; 15] = [
    "cat14.png",
    "cat15.png",
    "cat1.png",
    "cat2.png",
    "cat3.png",
    "cat4.png",
    "cat5.png",
    "cat6.png",
    "cat7.png",
    "cat8.png",
    "cat9.png",
    "cat10.png",
    "cat11.png",
    "cat12.png",
    "cat13.png",
];

const HOME_ROUTE: &str = "Home";
const MENU_ROUTE: &str = "Videos & Links";

/// Buttons of the page behind the menu route
fn showcase_row(
    scheduler: &mut AnimationScheduler,
    theme: &Theme,
) -> Result<Vec<ShowcaseButton<rand::rngs::ThreadRng>>> {
    let buttons = [
        (
            ShowcaseKind::Apple,
            ShowcaseLink::External("https://apps.apple.com/app/lorecraft".into()),
        ),
        (
            ShowcaseKind::Android,
            ShowcaseLink::External("https://play.google.com/store/apps/lorecraft".into()),
        ),
        (ShowcaseKind::Link, ShowcaseLink::Route(HOME_ROUTE.into())),
    ];
    buttons
        .into_iter()
        .map(|(kind, link)| -> Result<_> {
            let mut button =
                ShowcaseButton::new(scheduler, theme, kind, link, rand::thread_rng())?;
            button.icon_loaded(scheduler);
            Ok(button)
        })
        .collect()
}

/// Scripted interactions during a run
#[derive(Debug, Default)]
pub struct Script {
    pub returning_cat: bool,
    pub break_theme_at_ms: Option<f32>,
    pub navigate_at_ms: Option<f32>,
}

enum Scene {
    Home(HomeScreen<&'static str>),
    Images(HomeImages<&'static str>),
}

impl Scene {
    fn mount(
        scheduler: &mut AnimationScheduler,
        config: &StageConfig,
        theme: &Theme,
        store: &mut impl KeyValueStore,
    ) -> Result<Self> {
        let scene = if config.fast {
            let cat_mode = HomeFlags::load(store, rand::random()).cat_mode;
            Scene::Images(HomeImages::new(
                scheduler,
                theme,
                config.viewport,
                APP_ASSETS.to_vec(),
                CAT_ASSETS.to_vec(),
                cat_mode,
                true,
            )?)
        } else {
            Scene::Home(HomeScreen::new(
                scheduler,
                theme,
                config.viewport,
                store,
                rand::random(),
                APP_ASSETS.to_vec(),
                CAT_ASSETS.to_vec(),
            )?)
        };
        Ok(scene)
    }

    fn set_theme(&mut self, theme: &Theme) {
        match self {
            Scene::Home(home) => home.set_theme(theme),
            Scene::Images(images) => images.set_theme(theme),
        }
    }

    fn update(
        &mut self,
        scheduler: &mut AnimationScheduler,
        frame: &Frame,
        theme: &Theme,
        store: &mut impl KeyValueStore,
        navigator: &mut impl Navigator,
        at_ms: f32,
    ) {
        match self {
            Scene::Home(home) => {
                home.update(scheduler, frame, theme, store, navigator);
                for event in home.drain_events() {
                    tracing::info!(at_ms, ?event, "home");
                }
            }
            Scene::Images(images) => {
                images.update(scheduler, frame);
                for event in images.drain_events() {
                    tracing::info!(at_ms, ?event, "images");
                }
            }
        }
    }
}

pub fn run(config: &StageConfig, script: Script) -> Result<()> {
    let mut theme = config.resolve_theme(config.theme);
    let mut scheduler = AnimationScheduler::new();
    let mut store = MemoryStore::new();
    if script.returning_cat {
        HomeFlags::persist_cat_mode(&mut store);
    }
    let mut navigator = StackNavigator::new(HOME_ROUTE);

    let mut scene = Scene::mount(&mut scheduler, config, &theme, &mut store)
        .context("Failed to mount the home screen")?;
    let mut buttons = ThemeButtons::new(&theme).context("Failed to build the theme buttons")?;
    let mut menu = SideMenu::new(&mut scheduler, &theme);
    let mut showcase = Vec::new();

    let frame_ms = config.frame_ms();
    let total_ms = config.seconds * 1000.0;
    let mut break_theme_at = script.break_theme_at_ms;
    let mut navigate_at = script.navigate_at_ms;
    tracing::info!(
        theme = %theme.name,
        width = config.viewport.width,
        height = config.viewport.height,
        fps = config.fps,
        seconds = config.seconds,
        "playing"
    );

    let mut elapsed = 0.0;
    while elapsed < total_ms {
        let frame = Frame::advance(&mut scheduler, frame_ms);
        elapsed += frame_ms;

        if break_theme_at.is_some_and(|at| elapsed >= at) {
            break_theme_at = None;
            for button in NavButton::ALL {
                buttons.press(&mut scheduler, button);
            }
        }
        if navigate_at.is_some_and(|at| elapsed >= at) {
            navigate_at = None;
            menu.navigate(&mut scheduler, &mut navigator, MENU_ROUTE);
        }

        scene.update(
            &mut scheduler,
            &frame,
            &theme,
            &mut store,
            &mut navigator,
            elapsed,
        );
        menu.update(&mut scheduler, &frame, &mut navigator);
        buttons.update(&mut scheduler, &frame);

        if showcase.is_empty() && navigator.current() == Some(MENU_ROUTE) {
            showcase = showcase_row(&mut scheduler, &theme)
                .context("Failed to build the showcase buttons")?;
        }
        for button in &mut showcase {
            button.update(&mut scheduler, &frame, &mut navigator);
            let kind = button.kind();
            for event in button.drain_events() {
                tracing::info!(at_ms = elapsed, ?kind, ?event, "showcase");
            }
        }

        let events: Vec<_> = buttons.drain_events().collect();
        for event in events {
            tracing::info!(at_ms = elapsed, ?event, "theme buttons");
            if let ThemeButtonsEvent::SwitchTheme(name) = event {
                theme = config.resolve_theme(name);
                menu.reset(&mut scheduler, &theme);
                buttons.set_theme(&theme);
                scene.set_theme(&theme);
                for button in &mut showcase {
                    button.set_theme(&theme);
                }
            }
        }
    }

    tracing::info!(
        route = navigator.current().unwrap_or(HOME_ROUTE),
        values = scheduler.value_count(),
        runs = scheduler.run_count(),
        "run finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_run_completes() {
        let config = StageConfig {
            fps: 30,
            seconds: 16.0,
            ..Default::default()
        };
        let script = Script {
            returning_cat: true,
            break_theme_at_ms: Some(1000.0),
            navigate_at_ms: Some(14_000.0),
        };
        run(&config, script).unwrap();
    }

    #[test]
    fn test_showcase_row_mounts_every_kind() {
        let config = StageConfig::default();
        let theme = config.resolve_theme(config.theme);
        let mut scheduler = AnimationScheduler::new();
        let row = showcase_row(&mut scheduler, &theme).unwrap();
        let kinds: Vec<_> = row.iter().map(ShowcaseButton::kind).collect();
        assert_eq!(
            kinds,
            vec![ShowcaseKind::Apple, ShowcaseKind::Android, ShowcaseKind::Link]
        );
        assert!(row[0].icon().is_some_and(|icon| icon.is_loaded()));
    }

    #[test]
    fn test_fast_run_plays_images_alone() {
        let config = StageConfig {
            fast: true,
            seconds: 12.0,
            ..Default::default()
        };
        run(&config, Script::default()).unwrap();
    }
}
