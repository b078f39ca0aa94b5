//! Easing curves for timed animations

use std::f32::consts::FRAC_PI_2;

/// Overshoot used by [`Easing::BackOut`] when no explicit amount is wanted.
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.70158;

/// Easing function type
///
/// Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0`. `BackOut` overshoots past
/// `1.0` in between before settling. `Bounce` reaches `1.0` early and
/// rebounds off it with shrinking hops.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    /// Overshoot then settle; the value is the overshoot amount
    BackOut(f32),
    SineOut,
    /// Fall onto the target and bounce off it three times
    Bounce,
}

impl Easing {
    /// The standard "back-out" curve
    pub const fn back_out() -> Self {
        Easing::BackOut(DEFAULT_BACK_OVERSHOOT)
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
            Easing::SineOut => (t * FRAC_PI_2).sin(),
            Easing::Bounce => bounce_out(t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const K: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        K * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        K * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        K * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        K * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::back_out(),
        Easing::SineOut,
        Easing::Bounce,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::back_out().apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.05, "peak was {peak}");
        assert!(peak < 1.2, "peak was {peak}");
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn sine_out_is_front_loaded() {
        assert!(Easing::SineOut.apply(0.5) > 0.7);
    }

    #[test]
    fn bounce_touches_down_and_rebounds() {
        // first touchdown at 1/2.75
        assert!((Easing::Bounce.apply(1.0 / 2.75) - 1.0).abs() < 1e-5);
        let rebound = Easing::Bounce.apply(1.5 / 2.75);
        assert!((rebound - 0.75).abs() < 1e-5, "rebound was {rebound}");
        for i in 0..=100 {
            let v = Easing::Bounce.apply(i as f32 / 100.0);
            assert!((0.0..=1.0 + 1e-5).contains(&v), "{v} at {i}");
        }
    }
}
