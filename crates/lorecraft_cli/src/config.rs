//! Stage configuration file handling

use anyhow::{Context, Result};
use lorecraft_theme::{Theme, ThemeName, ThemeOverrides, Viewport};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "lorecraft.toml";

/// Headless stage configuration (lorecraft.toml)
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct StageConfig {
    pub viewport: Viewport,
    pub theme: ThemeName,
    /// Tokens replaced after the theme is resolved
    pub overrides: ThemeOverrides,
    /// Play the images alone with the fast card entrance, as small screens do
    pub fast: bool,
    pub fps: u32,
    pub seconds: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            theme: ThemeName::default(),
            overrides: ThemeOverrides::default(),
            fast: false,
            fps: 60,
            seconds: 30.0,
        }
    }
}

impl StageConfig {
    /// Load `path`, or lorecraft.toml in the working directory if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("No config found at {}", path.display());
                }
                path
            }
            None => {
                let default = Path::new(CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {CONFIG_FILE}, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the configured theme for the configured viewport
    pub fn resolve_theme(&self, name: ThemeName) -> Theme {
        self.overrides
            .applied_to(&Theme::resolve(name, self.viewport))
    }

    /// Milliseconds per frame
    pub fn frame_ms(&self) -> f32 {
        1000.0 / self.fps.max(1) as f32
    }
}
