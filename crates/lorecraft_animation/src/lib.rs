//! LoreCraft Animation System
//!
//! Interpolated values, timed tweens, and sequence orchestration driven by an
//! explicit per-frame `tick`.
//!
//! # Features
//!
//! - **Values**: scalars owned by the scheduler, addressed by [`ValueId`]
//! - **Interpolation**: piecewise-linear mappings with clamped extrapolation
//! - **Timings**: tweens from a start to a target with an easing curve
//! - **Sequences**: `Series`, `Parallel` and `Delay` composition with join semantics
//! - **Supersession**: a newer tween on a value replaces the one in flight
//!
//! # Example
//!
//! ```rust
//! use lorecraft_animation::{AnimationScheduler, Sequence, Timing};
//!
//! let mut scheduler = AnimationScheduler::new();
//! let opacity = scheduler.create_value(0.0);
//!
//! let run = scheduler.start(Sequence::series([
//!     Sequence::delay(100.0),
//!     Sequence::timing(Timing::to(opacity, 1.0, 200.0)),
//! ]));
//!
//! scheduler.tick(200.0);
//! assert_eq!(scheduler.value(opacity), Some(0.5));
//!
//! let finished = scheduler.tick(100.0);
//! assert!(finished.contains(&run));
//! ```

pub mod cadence;
pub mod easing;
pub mod error;
pub mod interpolate;
pub mod scheduler;
pub mod sequence;

pub use cadence::Cadence;
pub use easing::Easing;
pub use error::AnimationError;
pub use interpolate::{Extrapolate, Interpolation};
pub use scheduler::{AnimationScheduler, RunId, ValueId};
pub use sequence::{Sequence, Timing};
