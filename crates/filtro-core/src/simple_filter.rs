//! Raw filter plus channel state.

use core::ops::{Deref, DerefMut};

use crate::channels::{ChannelStates, Sample};
use crate::error::FilterError;
use crate::filter::RawFilter;
use crate::state::{DirectFormII, StateRealization};

/// Binds a raw filter to per-channel state for the selected realization.
///
/// Dereferences to the raw filter, so its family-specific `setup(...)` is
/// called directly. Setup changes take effect on the next processed sample;
/// there is no smoothing at this layer.
///
/// ```rust,ignore
/// use filtro_core::SimpleFilter;
/// use filtro_design::butterworth::LowPass;
///
/// let mut filter: SimpleFilter<LowPass> = SimpleFilter::new(LowPass::new(4), 2);
/// filter.setup(4, 44100.0, 1000.0)?;
/// filter.process(block.len(), &mut [&mut left, &mut right]);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleFilter<F: RawFilter, S: StateRealization = DirectFormII> {
    filter: F,
    states: ChannelStates<S>,
}

impl<F: RawFilter, S: StateRealization> SimpleFilter<F, S> {
    /// Wraps `filter` with state for `num_channels` channels.
    pub fn new(filter: F, num_channels: usize) -> Self {
        let max_stages = filter.cascade().max_stages();
        Self {
            filter,
            states: ChannelStates::new(num_channels, max_stages),
        }
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.states.num_channels()
    }

    /// Clears every delay register.
    pub fn reset(&mut self) {
        self.states.reset();
    }

    /// Unwraps the raw filter.
    pub fn into_inner(self) -> F {
        self.filter
    }

    /// Processes `num_samples` samples of every channel in place.
    pub fn try_process<T: Sample>(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [T]],
    ) -> Result<(), FilterError> {
        self.states.validate(num_samples, channels)?;
        self.states
            .process(self.filter.cascade(), num_samples, channels);
        Ok(())
    }

    /// Processes in place.
    ///
    /// # Panics
    ///
    /// On a zero-channel filter, fewer buffers than channels, or a buffer
    /// shorter than `num_samples`.
    pub fn process<T: Sample>(&mut self, num_samples: usize, channels: &mut [&mut [T]]) {
        if let Err(err) = self.try_process(num_samples, channels) {
            panic!("{err}");
        }
    }
}

impl<F: RawFilter, S: StateRealization> Deref for SimpleFilter<F, S> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.filter
    }
}

impl<F: RawFilter, S: StateRealization> DerefMut for SimpleFilter<F, S> {
    fn deref_mut(&mut self) -> &mut F {
        &mut self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biquad::BiquadCoefficients;
    use crate::cascade::Cascade;
    use crate::state::TransposedDirectFormII;

    struct Delay {
        cascade: Cascade,
    }

    impl Delay {
        fn new() -> Self {
            let mut cascade = Cascade::with_max_stages(1);
            cascade.set_single(BiquadCoefficients::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0));
            Self { cascade }
        }
    }

    impl RawFilter for Delay {
        fn cascade(&self) -> &Cascade {
            &self.cascade
        }
    }

    #[test]
    fn test_channels_are_independent() {
        let mut filter: SimpleFilter<Delay, TransposedDirectFormII> =
            SimpleFilter::new(Delay::new(), 2);
        let mut left = [1.0f32, 2.0, 3.0];
        let mut right = [5.0f32, 0.0, 0.0];
        filter.process(3, &mut [&mut left[..], &mut right[..]]);
        assert_eq!(left, [0.0, 1.0, 2.0]);
        assert_eq!(right, [0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_deref_reaches_raw_filter() {
        let filter: SimpleFilter<Delay> = SimpleFilter::new(Delay::new(), 1);
        assert_eq!(filter.num_stages(), 1);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let mut filter: SimpleFilter<Delay> = SimpleFilter::new(Delay::new(), 1);
        let mut buf = [1.0f64; 2];
        assert!(filter.try_process(4, &mut [&mut buf[..]]).is_err());
        assert_eq!(buf, [1.0, 1.0]);
    }
}
