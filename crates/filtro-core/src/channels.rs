//! Per-channel section state and the processing loops.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::cascade::Cascade;
use crate::error::FilterError;
use crate::state::StateRealization;

/// Sample types the runtime can process. State is always kept in `f64`.
pub trait Sample: Copy {
    /// Widens to `f64`.
    fn to_f64(self) -> f64;
    /// Narrows from `f64`.
    fn from_f64(value: f64) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Delay registers for every section of every channel.
///
/// Allocated once for `num_channels × max_stages` sections; processing and
/// [`reset`](Self::reset) never allocate.
#[derive(Debug, Clone)]
pub struct ChannelStates<S: StateRealization> {
    states: Vec<S>,
    num_channels: usize,
    max_stages: usize,
}

impl<S: StateRealization> ChannelStates<S> {
    /// Creates zeroed state. Zero channels yields an analysis-only container.
    pub fn new(num_channels: usize, max_stages: usize) -> Self {
        let mut states = Vec::with_capacity(num_channels * max_stages);
        states.resize(num_channels * max_stages, S::default());
        Self {
            states,
            num_channels,
            max_stages,
        }
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Zeroes every register.
    pub fn reset(&mut self) {
        self.states.iter_mut().for_each(StateRealization::reset);
    }

    /// Section state of one channel.
    pub fn channel(&self, channel: usize) -> &[S] {
        let start = channel * self.max_stages;
        &self.states[start..start + self.max_stages]
    }

    /// Checks that `channels` can be processed for `num_samples` samples.
    ///
    /// Never touches state.
    pub fn validate<T: Sample>(
        &self,
        num_samples: usize,
        channels: &[&mut [T]],
    ) -> Result<(), FilterError> {
        if self.num_channels == 0 {
            return Err(FilterError::NoChannels);
        }
        if channels.len() < self.num_channels {
            return Err(FilterError::ChannelCountMismatch {
                expected: self.num_channels,
                got: channels.len(),
            });
        }
        for (channel, buffer) in channels.iter().take(self.num_channels).enumerate() {
            if buffer.len() < num_samples {
                return Err(FilterError::BufferTooShort {
                    channel,
                    len: buffer.len(),
                    needed: num_samples,
                });
            }
        }
        Ok(())
    }

    /// Runs `num_samples` samples of every channel through the cascade, in place.
    ///
    /// Callers validate first; extra buffers beyond the channel count are ignored.
    pub fn process<T: Sample>(
        &mut self,
        cascade: &Cascade,
        num_samples: usize,
        channels: &mut [&mut [T]],
    ) {
        self.process_range(cascade, channels, 0, num_samples);
    }

    /// Processes samples `start..end` of every channel.
    pub fn process_range<T: Sample>(
        &mut self,
        cascade: &Cascade,
        channels: &mut [&mut [T]],
        start: usize,
        end: usize,
    ) {
        let stages = cascade.stages();
        for (ch, buffer) in channels.iter_mut().take(self.num_channels).enumerate() {
            let base = ch * self.max_stages;
            let states = &mut self.states[base..base + self.max_stages];
            for sample in &mut buffer[start..end] {
                let mut x = sample.to_f64();
                for (state, c) in states.iter_mut().zip(stages) {
                    x = state.process_section(x, c);
                }
                *sample = T::from_f64(x);
            }
        }
    }

    /// Processes the sample at `index` of every channel.
    #[inline]
    pub fn process_frame<T: Sample>(
        &mut self,
        cascade: &Cascade,
        channels: &mut [&mut [T]],
        index: usize,
    ) {
        self.process_range(cascade, channels, index, index + 1);
    }
}
