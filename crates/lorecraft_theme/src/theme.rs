//! Theme presets and token resolution

use crate::error::ThemeError;
use crate::viewport::{SmallerDimension, Viewport};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The available presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Broken,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Dark, ThemeName::Broken]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Broken => "broken",
        }
    }

    /// The preset the easter egg switches to from this one
    pub fn toggled(&self) -> ThemeName {
        match self {
            ThemeName::Dark => ThemeName::Broken,
            ThemeName::Broken => ThemeName::Dark,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::all()
            .iter()
            .copied()
            .find(|name| name.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

/// Resolved theme tokens, in pixels, scale factors, seconds and milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: ThemeName,
    /// Authored height of the card art
    pub card_height: f32,
    /// Card scale while it bounces in from off-screen
    pub card_scale_initial: f32,
    /// Card scale once it settles
    pub card_scale_final: f32,
    /// Scale of a slideshow image before it grows into place
    pub app_scale_initial: f32,
    /// Seconds between slideshow cycles
    pub app_cycle_time_s: f32,
    /// Vertical offset a screen slides up from when it enters
    pub screen_animation_y: f32,
    pub screen_animation_speed_ms: f32,
    pub screen_animation_out_speed_ms: f32,
    pub side_menu_width: f32,
    pub side_menu_speed_ms: f32,
    pub nav_button_width: f32,
    pub nav_button_margin_left: f32,
}

impl Theme {
    /// Resolve a preset for the given window
    pub fn resolve(name: ThemeName, viewport: Viewport) -> Self {
        let (scale, smaller) = viewport.scale();
        tracing::debug!(theme = %name, scale, ?smaller, "resolving theme");
        match name {
            ThemeName::Dark => Self::dark(scale, smaller),
            ThemeName::Broken => Self::broken(scale),
        }
    }

    fn dark(scale: f32, smaller: SmallerDimension) -> Self {
        let card_height = match smaller {
            SmallerDimension::Height => clamp(400.0, 933.0, 800.0 * scale),
            SmallerDimension::Width => clamp(600.0, 933.0, 1000.0 * scale),
        };
        Self {
            name: ThemeName::Dark,
            card_height,
            card_scale_initial: 1.25,
            card_scale_final: 0.65,
            app_scale_initial: 0.5,
            app_cycle_time_s: 5.0,
            screen_animation_y: clamp(150.0, 200.0, 300.0 * scale),
            screen_animation_speed_ms: 850.0,
            screen_animation_out_speed_ms: 250.0,
            side_menu_width: 350.0,
            side_menu_speed_ms: 450.0,
            nav_button_width: clamp(35.0, 50.0, 100.0 * scale),
            nav_button_margin_left: clamp(35.0, 50.0, 100.0 * scale),
        }
    }

    fn broken(scale: f32) -> Self {
        Self {
            name: ThemeName::Broken,
            card_height: clamp(1000.0, 1300.0, 1600.0 * scale),
            card_scale_initial: 1.5,
            card_scale_final: 0.65,
            app_scale_initial: 1.5,
            app_cycle_time_s: 0.5,
            screen_animation_y: clamp(-300.0, -100.0, -300.0 * scale),
            screen_animation_speed_ms: 1500.0,
            screen_animation_out_speed_ms: 1.0,
            side_menu_width: 75.0,
            side_menu_speed_ms: 5000.0,
            nav_button_width: clamp(70.0, 100.0, 200.0 * scale),
            nav_button_margin_left: 0.0,
        }
    }

    /// Ratio of the configured card height to the authored art height
    pub fn card_height_ratio(&self) -> f32 {
        self.card_height / AUTHORED_CARD_HEIGHT
    }

    /// Card width at its authored aspect ratio
    pub fn card_width(&self) -> f32 {
        AUTHORED_CARD_WIDTH * self.card_height_ratio()
    }

    pub fn app_cycle_ms(&self) -> f32 {
        self.app_cycle_time_s * 1000.0
    }

    /// Width used to center text over a nav button (button plus both margins)
    pub fn nav_button_span(&self) -> f32 {
        self.nav_button_width + 2.0 * self.nav_button_margin_left
    }
}

/// Height of the card art every proportional distance is authored against
pub const AUTHORED_CARD_HEIGHT: f32 = 933.0;
/// Width of the card art at [`AUTHORED_CARD_HEIGHT`]
pub const AUTHORED_CARD_WIDTH: f32 = 600.0;

/// Clamp `value` into `[min, max]` and round half up
fn clamp(min: f32, max: f32, value: f32) -> f32 {
    (value.max(min).min(max) + 0.5).floor()
}
