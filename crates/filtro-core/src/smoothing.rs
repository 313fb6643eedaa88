//! Click-free coefficient transitions.
//!
//! Installing a new cascade while audio is running produces a discontinuity.
//! [`CascadeSmoother`] instead blends every coefficient linearly from the
//! coefficients in use when the change arrived to the new target, over a
//! fixed number of samples configured at construction.
//!
//! The controller is an explicit two-state machine:
//!
//! ```text
//!            retarget()                 elapsed == total
//!   Stable ─────────────► Transitioning ─────────────────► Stable
//!                           │      ▲
//!                           └──────┘ retarget(): restart from the
//!                                    current interpolated coefficients
//! ```
//!
//! All three cascades are preallocated, so transitions never allocate.

use crate::cascade::Cascade;
use crate::channels::{ChannelStates, Sample};
use crate::state::StateRealization;

/// Phase of a [`CascadeSmoother`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Holding the target cascade.
    Stable,
    /// Blending; `elapsed` samples of `total` have been processed.
    Transitioning {
        /// Samples processed since the transition started.
        elapsed: usize,
        /// Length of the transition in samples.
        total: usize,
    },
}

/// Linear coefficient interpolation between successive cascades.
///
/// # Example
///
/// ```rust
/// use filtro_core::{BiquadCoefficients, Cascade, CascadeSmoother, Transition};
///
/// let mut smoother = CascadeSmoother::new(1, 4);
/// let mut target = Cascade::with_max_stages(1);
/// target.set_single(BiquadCoefficients::new(0.5, 0.0, 0.0, 1.0, 0.0, 0.0));
///
/// smoother.retarget(&target);
/// assert!(smoother.is_transitioning());
/// for _ in 0..4 {
///     smoother.advance();
/// }
/// assert_eq!(smoother.phase(), Transition::Stable);
/// assert_eq!(smoother.active(), &target);
/// ```
#[derive(Debug, Clone)]
pub struct CascadeSmoother {
    transition_samples: usize,
    from: Cascade,
    to: Cascade,
    active: Cascade,
    phase: Transition,
}

impl CascadeSmoother {
    /// Creates a stable smoother holding an empty (passthrough) cascade.
    pub fn new(max_stages: usize, transition_samples: usize) -> Self {
        Self {
            transition_samples,
            from: Cascade::with_max_stages(max_stages),
            to: Cascade::with_max_stages(max_stages),
            active: Cascade::with_max_stages(max_stages),
            phase: Transition::Stable,
        }
    }

    /// Transition length in samples.
    pub fn transition_samples(&self) -> usize {
        self.transition_samples
    }

    /// Current phase.
    pub fn phase(&self) -> Transition {
        self.phase
    }

    /// Returns `true` while blending.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Transition::Transitioning { .. })
    }

    /// Coefficients the next processed sample will use.
    pub fn active(&self) -> &Cascade {
        &self.active
    }

    /// The most recently committed target.
    pub fn target(&self) -> &Cascade {
        &self.to
    }

    /// Installs `target` immediately, abandoning any transition.
    pub fn install(&mut self, target: &Cascade) {
        self.to.copy_from(target);
        self.active.copy_from(target);
        self.phase = Transition::Stable;
    }

    /// Starts blending from the coefficients currently in use toward `target`.
    ///
    /// A transition already in progress restarts from its current
    /// interpolated coefficients; the previous target is dropped.
    pub fn retarget(&mut self, target: &Cascade) {
        if self.transition_samples == 0 {
            self.install(target);
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            samples = self.transition_samples,
            stages = target.num_stages(),
            restarted = self.is_transitioning(),
            "smoothing toward new cascade"
        );

        self.from.copy_from(&self.active);
        self.to.copy_from(target);
        self.phase = Transition::Transitioning {
            elapsed: 0,
            total: self.transition_samples,
        };
    }

    /// Moves the transition forward by one sample.
    pub fn advance(&mut self) {
        if let Transition::Transitioning { elapsed, total } = self.phase {
            let elapsed = elapsed + 1;
            if elapsed >= total {
                self.active.copy_from(&self.to);
                self.phase = Transition::Stable;
            } else {
                let t = elapsed as f64 / total as f64;
                self.active.lerp_from(&self.from, &self.to, t);
                self.phase = Transition::Transitioning { elapsed, total };
            }
        }
    }

    /// Processes a block, interpolating per sample while transitioning.
    ///
    /// Once the transition completes mid-block the remainder runs through
    /// the plain block loop.
    pub fn process<S: StateRealization, T: Sample>(
        &mut self,
        states: &mut ChannelStates<S>,
        num_samples: usize,
        channels: &mut [&mut [T]],
    ) {
        let mut i = 0;
        while i < num_samples {
            if self.phase == Transition::Stable {
                states.process_range(&self.active, channels, i, num_samples);
                return;
            }
            states.process_frame(&self.active, channels, i);
            self.advance();
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biquad::BiquadCoefficients;

    fn gain(g: f64) -> Cascade {
        let mut c = Cascade::with_max_stages(2);
        c.set_single(BiquadCoefficients::new(g, 0.0, 0.0, 1.0, 0.0, 0.0));
        c
    }

    #[test]
    fn test_zero_length_installs_immediately() {
        let mut smoother = CascadeSmoother::new(2, 0);
        smoother.retarget(&gain(0.25));
        assert_eq!(smoother.phase(), Transition::Stable);
        assert_eq!(smoother.active(), &gain(0.25));
    }

    #[test]
    fn test_start_and_end_points() {
        let mut smoother = CascadeSmoother::new(2, 8);
        smoother.install(&gain(1.0));
        smoother.retarget(&gain(0.0));
        assert_eq!(smoother.active(), &gain(1.0));
        for step in 1..8 {
            smoother.advance();
            let b0 = smoother.active().stages()[0].b0;
            assert!((b0 - (1.0 - step as f64 / 8.0)).abs() < 1e-12);
        }
        smoother.advance();
        assert_eq!(smoother.phase(), Transition::Stable);
        assert_eq!(smoother.active(), &gain(0.0));
    }

    #[test]
    fn test_retarget_restarts_from_current() {
        let mut smoother = CascadeSmoother::new(2, 4);
        smoother.install(&gain(1.0));
        smoother.retarget(&gain(0.0));
        smoother.advance();
        smoother.advance();
        // halfway at 0.5
        smoother.retarget(&gain(1.0));
        assert_eq!(
            smoother.phase(),
            Transition::Transitioning { elapsed: 0, total: 4 }
        );
        assert!((smoother.active().stages()[0].b0 - 0.5).abs() < 1e-12);
        smoother.advance();
        assert!((smoother.active().stages()[0].b0 - 0.625).abs() < 1e-12);
        assert_eq!(smoother.target(), &gain(1.0));
    }

    #[test]
    fn test_process_ramps_gain() {
        use crate::state::DirectFormII;

        let mut smoother = CascadeSmoother::new(2, 4);
        smoother.install(&gain(1.0));
        smoother.retarget(&gain(0.0));
        let mut states = ChannelStates::<DirectFormII>::new(1, 2);
        let mut buf = [1.0f64; 6];
        smoother.process(&mut states, 6, &mut [&mut buf[..]]);
        assert_eq!(buf, [1.0, 0.75, 0.5, 0.25, 0.0, 0.0]);
    }
}
