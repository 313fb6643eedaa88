//! [`Filter`] implementations over a [`Design`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::cascade::Cascade;
use crate::channels::{ChannelStates, Sample};
use crate::error::FilterError;
use crate::filter::{Design, Filter, Kind};
use crate::layout::PoleZeroPair;
use crate::math::Complex64;
use crate::param_info::ParamInfo;
use crate::params::Params;
use crate::smoothing::CascadeSmoother;
use crate::state::{DirectFormII, StateRealization};

/// Checks every slot against its metadata, then runs the design.
fn apply<D: Design>(design: &mut D, params: &Params) -> Result<(), FilterError> {
    for index in 0..design.num_params() {
        if let Some(info) = design.param_info(index) {
            info.check(params[index])?;
        }
    }
    let result = design.apply_params(params);

    #[cfg(feature = "tracing")]
    match &result {
        Ok(()) => tracing::debug!(
            filter = design.name(),
            stages = design.cascade().num_stages(),
            "design recomputed"
        ),
        Err(err) => tracing::debug!(filter = design.name(), %err, "parameter update rejected"),
    }

    result
}

/// A [`Design`] with per-channel state, installing new coefficients immediately.
///
/// The realization is a type parameter, resolved at compile time.
///
/// # Example
///
/// ```rust,ignore
/// use filtro_core::{Filter, FilterDesign, ParamId};
/// use filtro_design::butterworth;
///
/// let mut filter = FilterDesign::new(butterworth::design::LowPass::new(8), 2);
/// filter.set_param_by_id(ParamId::Frequency, 2000.0)?;
/// filter.process(left.len(), &mut [&mut left, &mut right]);
/// ```
pub struct FilterDesign<D: Design, S: StateRealization = DirectFormII> {
    design: D,
    params: Params,
    channels: ChannelStates<S>,
}

impl<D: Design, S: StateRealization> FilterDesign<D, S> {
    /// Wraps `design` with state for `num_channels` channels and applies its defaults.
    ///
    /// Zero channels builds an analysis-only filter.
    pub fn new(design: D, num_channels: usize) -> Self {
        let channels = ChannelStates::new(num_channels, design.max_stages());
        let mut filter = Self {
            design,
            params: Params::new(),
            channels,
        };
        let defaults = filter.design.default_params();
        if apply(&mut filter.design, &defaults).is_ok() {
            filter.params = defaults;
        }
        filter
    }

    /// The wrapped design.
    pub fn design(&self) -> &D {
        &self.design
    }

    /// The installed cascade.
    pub fn cascade(&self) -> &Cascade {
        self.design.cascade()
    }

    fn run<T: Sample>(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [T]],
    ) -> Result<(), FilterError> {
        self.channels.validate(num_samples, channels)?;
        self.channels
            .process(self.design.cascade(), num_samples, channels);
        Ok(())
    }
}

impl<D: Design, S: StateRealization> Filter for FilterDesign<D, S> {
    fn kind(&self) -> Kind {
        self.design.kind()
    }

    fn name(&self) -> &'static str {
        self.design.name()
    }

    fn num_params(&self) -> usize {
        self.design.num_params()
    }

    fn param_info(&self, index: usize) -> Option<ParamInfo> {
        self.design.param_info(index)
    }

    fn default_params(&self) -> Params {
        self.design.default_params()
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn set_params(&mut self, params: &Params) -> Result<(), FilterError> {
        apply(&mut self.design, params)?;
        self.params = *params;
        Ok(())
    }

    fn pole_zeros(&self) -> Vec<PoleZeroPair> {
        self.design.cascade().pole_zeros()
    }

    fn response(&self, normalized_frequency: f64) -> Complex64 {
        self.design.cascade().response(normalized_frequency)
    }

    fn num_channels(&self) -> usize {
        self.channels.num_channels()
    }

    fn reset(&mut self) {
        self.channels.reset();
    }

    fn try_process(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [f32]],
    ) -> Result<(), FilterError> {
        self.run(num_samples, channels)
    }

    fn try_process_f64(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [f64]],
    ) -> Result<(), FilterError> {
        self.run(num_samples, channels)
    }
}

/// A [`Design`] whose parameter changes glide over a fixed number of samples.
///
/// Analysis ([`pole_zeros`](Filter::pole_zeros), [`response`](Filter::response))
/// always reports the committed target, never the interpolated coefficients.
pub struct SmoothedFilterDesign<D: Design, S: StateRealization = DirectFormII> {
    design: D,
    params: Params,
    channels: ChannelStates<S>,
    smoother: CascadeSmoother,
}

impl<D: Design, S: StateRealization> SmoothedFilterDesign<D, S> {
    /// Wraps `design`, applying its defaults without a transition.
    pub fn new(design: D, num_channels: usize, transition_samples: usize) -> Self {
        let max_stages = design.max_stages();
        let mut filter = Self {
            design,
            params: Params::new(),
            channels: ChannelStates::new(num_channels, max_stages),
            smoother: CascadeSmoother::new(max_stages, transition_samples),
        };
        let defaults = filter.design.default_params();
        if apply(&mut filter.design, &defaults).is_ok() {
            filter.params = defaults;
            filter.smoother.install(filter.design.cascade());
        }
        filter
    }

    /// The wrapped design.
    pub fn design(&self) -> &D {
        &self.design
    }

    /// The transition state machine.
    pub fn smoother(&self) -> &CascadeSmoother {
        &self.smoother
    }

    /// Coefficients the next processed sample will use.
    pub fn active_cascade(&self) -> &Cascade {
        self.smoother.active()
    }

    fn run<T: Sample>(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [T]],
    ) -> Result<(), FilterError> {
        self.channels.validate(num_samples, channels)?;
        self.smoother
            .process(&mut self.channels, num_samples, channels);
        Ok(())
    }
}

impl<D: Design, S: StateRealization> Filter for SmoothedFilterDesign<D, S> {
    fn kind(&self) -> Kind {
        self.design.kind()
    }

    fn name(&self) -> &'static str {
        self.design.name()
    }

    fn num_params(&self) -> usize {
        self.design.num_params()
    }

    fn param_info(&self, index: usize) -> Option<ParamInfo> {
        self.design.param_info(index)
    }

    fn default_params(&self) -> Params {
        self.design.default_params()
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn set_params(&mut self, params: &Params) -> Result<(), FilterError> {
        apply(&mut self.design, params)?;
        self.params = *params;
        self.smoother.retarget(self.design.cascade());
        Ok(())
    }

    fn pole_zeros(&self) -> Vec<PoleZeroPair> {
        self.design.cascade().pole_zeros()
    }

    fn response(&self, normalized_frequency: f64) -> Complex64 {
        self.design.cascade().response(normalized_frequency)
    }

    fn num_channels(&self) -> usize {
        self.channels.num_channels()
    }

    fn reset(&mut self) {
        self.channels.reset();
    }

    fn try_process(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [f32]],
    ) -> Result<(), FilterError> {
        self.run(num_samples, channels)
    }

    fn try_process_f64(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [f64]],
    ) -> Result<(), FilterError> {
        self.run(num_samples, channels)
    }
}
