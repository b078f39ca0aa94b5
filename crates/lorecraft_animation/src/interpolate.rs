//! Piecewise-linear mappings from an animated value to an output range
//!
//! One underlying value can drive any number of mappings (opacity, rotation,
//! z-order, ...). A mapping is stateless and depends only on its input.

use crate::error::AnimationError;
use smallvec::SmallVec;

/// Behavior outside the mapping's domain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Hold the nearest endpoint's output
    #[default]
    Clamp,
    /// Continue the outermost segment's slope
    Extend,
}

/// A piecewise-linear mapping `domain[i] -> range[i]`
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    domain: SmallVec<[f32; 4]>,
    range: SmallVec<[f32; 4]>,
    below: Extrapolate,
    above: Extrapolate,
}

impl Interpolation {
    /// Create a mapping, clamped on both sides
    ///
    /// The domain must be strictly increasing and the same length as the range.
    pub fn new(
        domain: impl IntoIterator<Item = f32>,
        range: impl IntoIterator<Item = f32>,
    ) -> Result<Self, AnimationError> {
        let domain: SmallVec<[f32; 4]> = domain.into_iter().collect();
        let range: SmallVec<[f32; 4]> = range.into_iter().collect();

        if domain.len() != range.len() {
            return Err(AnimationError::LengthMismatch {
                domain: domain.len(),
                range: range.len(),
            });
        }
        if domain.len() < 2 {
            return Err(AnimationError::TooFewPoints(domain.len()));
        }
        if let Some(index) = domain.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AnimationError::DomainNotIncreasing { index: index + 1 });
        }

        Ok(Self {
            domain,
            range,
            below: Extrapolate::Clamp,
            above: Extrapolate::Clamp,
        })
    }

    /// Set the extrapolation on both sides
    pub fn extrapolate(mut self, mode: Extrapolate) -> Self {
        self.below = mode;
        self.above = mode;
        self
    }

    /// Set the extrapolation below the first domain point
    pub fn extrapolate_below(mut self, mode: Extrapolate) -> Self {
        self.below = mode;
        self
    }

    /// Set the extrapolation above the last domain point
    pub fn extrapolate_above(mut self, mode: Extrapolate) -> Self {
        self.above = mode;
        self
    }

    pub fn domain(&self) -> &[f32] {
        &self.domain
    }

    pub fn range(&self) -> &[f32] {
        &self.range
    }

    /// Map an input through the control points
    ///
    /// NaN has no place among the control points and maps to the first output.
    pub fn map(&self, input: f32) -> f32 {
        let last = self.domain.len() - 1;

        if input.is_nan() {
            return self.range[0];
        }

        if input <= self.domain[0] {
            return match self.below {
                Extrapolate::Clamp => self.range[0],
                Extrapolate::Extend => self.segment(0, input),
            };
        }
        if input >= self.domain[last] {
            return match self.above {
                Extrapolate::Clamp => self.range[last],
                Extrapolate::Extend => self.segment(last - 1, input),
            };
        }

        // first control point strictly above the input; always in 1..=last here
        let upper = self.domain.partition_point(|d| *d <= input);
        self.segment(upper - 1, input)
    }

    fn segment(&self, lower: usize, input: f32) -> f32 {
        let (d0, d1) = (self.domain[lower], self.domain[lower + 1]);
        let (r0, r1) = (self.range[lower], self.range[lower + 1]);
        r0 + (r1 - r0) * (input - d0) / (d1 - d0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_and_beyond_endpoints() {
        let cases: [(&[f32], &[f32]); 3] = [
            (&[0.0, 1.0], &[10.0, 20.0]),
            (&[0.0, 50.0, 100.0, 150.0], &[-180.0, 0.0, 180.0, 0.0]),
            (&[50.0, 51.0], &[1.0, 0.0]),
        ];
        for (domain, range) in cases {
            let interp = Interpolation::new(domain.iter().copied(), range.iter().copied()).unwrap();
            let first = *range.first().unwrap();
            let last = *range.last().unwrap();
            assert_eq!(interp.map(domain[0]), first);
            assert_eq!(interp.map(domain[0] - 1000.0), first);
            assert_eq!(interp.map(*domain.last().unwrap()), last);
            assert_eq!(interp.map(*domain.last().unwrap() + 1000.0), last);
        }
    }

    #[test]
    fn interpolates_within_bracketing_segment() {
        let interp = Interpolation::new([0.0, 50.0, 100.0, 150.0], [-180.0, 0.0, 180.0, 0.0]).unwrap();
        assert_eq!(interp.map(25.0), -90.0);
        assert_eq!(interp.map(50.0), 0.0);
        assert_eq!(interp.map(75.0), 90.0);
        assert_eq!(interp.map(125.0), 90.0);
    }

    #[test]
    fn extend_continues_outer_slope() {
        let interp = Interpolation::new([0.0, 1.0], [0.0, 200.0])
            .unwrap()
            .extrapolate(Extrapolate::Extend);
        assert_eq!(interp.map(2.0), 400.0);
        assert_eq!(interp.map(-1.0), -200.0);

        let one_sided = Interpolation::new([0.0, 1.0], [0.0, 200.0])
            .unwrap()
            .extrapolate_above(Extrapolate::Extend);
        assert_eq!(one_sided.map(-1.0), 0.0);
        assert_eq!(one_sided.map(1.5), 300.0);
    }

    #[test]
    fn nan_input_maps_to_first_output() {
        let interp = Interpolation::new([0.0, 50.0, 100.0], [3.0, 7.0, 11.0]).unwrap();
        assert_eq!(interp.map(f32::NAN), 3.0);

        let extended = interp.extrapolate(Extrapolate::Extend);
        assert_eq!(extended.map(f32::NAN), 3.0);
    }

    #[test]
    fn rejects_invalid_control_points() {
        assert_eq!(
            Interpolation::new([0.0], [1.0]),
            Err(AnimationError::TooFewPoints(1))
        );
        assert_eq!(
            Interpolation::new([0.0, 1.0], [1.0]),
            Err(AnimationError::LengthMismatch { domain: 2, range: 1 })
        );
        assert_eq!(
            Interpolation::new([0.0, 1.0, 1.0], [0.0, 1.0, 2.0]),
            Err(AnimationError::DomainNotIncreasing { index: 2 })
        );
    }
}
