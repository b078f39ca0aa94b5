//! Partial token overrides layered over a resolved theme

use crate::error::ThemeError;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Any subset of the numeric tokens
///
/// ```toml
/// card_height = 700
/// app_cycle_time_s = 2.5
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    pub card_height: Option<f32>,
    pub card_scale_initial: Option<f32>,
    pub card_scale_final: Option<f32>,
    pub app_scale_initial: Option<f32>,
    pub app_cycle_time_s: Option<f32>,
    pub screen_animation_y: Option<f32>,
    pub screen_animation_speed_ms: Option<f32>,
    pub screen_animation_out_speed_ms: Option<f32>,
    pub side_menu_width: Option<f32>,
    pub side_menu_speed_ms: Option<f32>,
    pub nav_button_width: Option<f32>,
    pub nav_button_margin_left: Option<f32>,
}

impl ThemeOverrides {
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every set token into `theme`
    pub fn apply(&self, theme: &mut Theme) {
        let fields = [
            (&mut theme.card_height, self.card_height),
            (&mut theme.card_scale_initial, self.card_scale_initial),
            (&mut theme.card_scale_final, self.card_scale_final),
            (&mut theme.app_scale_initial, self.app_scale_initial),
            (&mut theme.app_cycle_time_s, self.app_cycle_time_s),
            (&mut theme.screen_animation_y, self.screen_animation_y),
            (
                &mut theme.screen_animation_speed_ms,
                self.screen_animation_speed_ms,
            ),
            (
                &mut theme.screen_animation_out_speed_ms,
                self.screen_animation_out_speed_ms,
            ),
            (&mut theme.side_menu_width, self.side_menu_width),
            (&mut theme.side_menu_speed_ms, self.side_menu_speed_ms),
            (&mut theme.nav_button_width, self.nav_button_width),
            (&mut theme.nav_button_margin_left, self.nav_button_margin_left),
        ];

        let mut applied = 0;
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
                applied += 1;
            }
        }
        if applied > 0 {
            tracing::debug!(theme = %theme.name, applied, "applied theme overrides");
        }
    }

    /// Apply to a copy of `theme`
    pub fn applied_to(&self, theme: &Theme) -> Theme {
        let mut theme = theme.clone();
        self.apply(&mut theme);
        theme
    }
}
