//! Window dimensions and the scale factor derived from them

use serde::{Deserialize, Serialize};

/// Reference window the token values were authored against
pub const REFERENCE_WIDTH: f32 = 1984.0;
pub const REFERENCE_HEIGHT: f32 = 1003.0;

/// Below this width only one half of the home screen is shown
pub const SMALL_SCREEN_WIDTH: f32 = 650.0;

/// Which window dimension limits the scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmallerDimension {
    Width,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale relative to the reference window and the dimension that set it
    ///
    /// Height is weighted with an exponent of 1.2 so short windows shrink
    /// faster than narrow ones.
    pub fn scale(&self) -> (f32, SmallerDimension) {
        let height = (self.height / REFERENCE_HEIGHT).powf(1.2);
        let width = self.width / REFERENCE_WIDTH;
        if height < width {
            (height, SmallerDimension::Height)
        } else {
            (width, SmallerDimension::Width)
        }
    }

    pub fn is_small(&self) -> bool {
        self.width < SMALL_SCREEN_WIDTH
    }

    /// Vertical midpoint, where off-screen card entrances start
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(REFERENCE_WIDTH, REFERENCE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_window_has_unit_scale() {
        let (scale, _) = Viewport::default().scale();
        assert!((scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn short_window_is_limited_by_height() {
        let (scale, dim) = Viewport::new(1984.0, 500.0).scale();
        assert_eq!(dim, SmallerDimension::Height);
        assert!(scale < 0.5);
    }

    #[test]
    fn narrow_window_is_small() {
        let viewport = Viewport::new(400.0, 800.0);
        assert!(viewport.is_small());
        assert_eq!(viewport.scale().1, SmallerDimension::Width);
    }
}
