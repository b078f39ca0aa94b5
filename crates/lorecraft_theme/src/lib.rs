//! LoreCraft Theme Tokens
//!
//! The numeric configuration every sequencer reads: card sizes and scales,
//! slideshow cadence, screen and menu transition timings, and the nav-button
//! geometry used to center floating text.
//!
//! Themes are plain values. Resolve one for the current window and pass it
//! explicitly to whatever needs it; there is no process-wide theme.
//!
//! ```rust
//! use lorecraft_theme::{Theme, ThemeName, Viewport};
//!
//! let theme = Theme::resolve(ThemeName::Dark, Viewport::new(1984.0, 1003.0));
//! assert_eq!(theme.card_height, 933.0);
//! assert_eq!(theme.app_cycle_ms(), 5000.0);
//! ```
//!
//! # Presets
//!
//! - [`ThemeName::Dark`]: the regular landing page
//! - [`ThemeName::Broken`]: what the theme-break easter egg switches to
//!
//! # Overrides
//!
//! [`ThemeOverrides`] can be parsed from TOML and layered over a resolved
//! theme, e.g. to speed up the slideshow while iterating on it.

pub mod error;
pub mod overrides;
pub mod theme;
pub mod viewport;

pub use error::ThemeError;
pub use overrides::ThemeOverrides;
pub use theme::{Theme, ThemeName};
pub use viewport::{SmallerDimension, Viewport};
