//! Filter abstractions.
//!
//! Two layers share one computational core:
//!
//! - a **raw filter** (in `filtro-design`) owns a [`Cascade`] and exposes a
//!   family-specific `setup(...)`; [`RawFilter`] gives uniform access to its
//!   coefficients
//! - a [`Design`] wraps a raw filter with a parameter table, so any family can
//!   be driven through [`Params`]
//!
//! [`Filter`] is the object-safe interface over a design plus channel state,
//! implemented by [`FilterDesign`](crate::FilterDesign) and
//! [`SmoothedFilterDesign`](crate::SmoothedFilterDesign). Filters can be
//! boxed and swapped at runtime:
//!
//! ```rust,ignore
//! let filters: Vec<Box<dyn Filter>> = vec![
//!     Box::new(FilterDesign::new(butterworth::design::LowPass::new(8), 2)),
//!     Box::new(FilterDesign::new(rbj::design::HighShelf::new(), 2)),
//! ];
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::biquad::BiquadCoefficients;
use crate::cascade::Cascade;
use crate::error::FilterError;
use crate::layout::PoleZeroPair;
use crate::math::Complex64;
use crate::param_info::{ParamId, ParamInfo};
use crate::params::Params;

/// Response shape of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Passes frequencies below the cutoff.
    LowPass,
    /// Passes frequencies above the cutoff.
    HighPass,
    /// Passes a band around the centre frequency.
    BandPass,
    /// Rejects a band around the centre frequency.
    BandStop,
    /// Gain below the corner frequency.
    LowShelf,
    /// Gain above the corner frequency.
    HighShelf,
    /// Gain inside a band.
    BandShelf,
    /// Flat magnitude, frequency-dependent phase.
    AllPass,
    /// Anything else (custom sections).
    Other,
}

impl Kind {
    /// Stable identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::LowPass => "lowpass",
            Kind::HighPass => "highpass",
            Kind::BandPass => "bandpass",
            Kind::BandStop => "bandstop",
            Kind::LowShelf => "lowshelf",
            Kind::HighShelf => "highshelf",
            Kind::BandShelf => "bandshelf",
            Kind::AllPass => "allpass",
            Kind::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coefficient access for raw (statically bound) filters.
pub trait RawFilter {
    /// The designed cascade.
    fn cascade(&self) -> &Cascade;

    /// Number of active sections.
    fn num_stages(&self) -> usize {
        self.cascade().num_stages()
    }

    /// Section at `index`.
    fn stage(&self, index: usize) -> Option<&BiquadCoefficients> {
        self.cascade().stage(index)
    }

    /// Complex response at a normalized frequency in cycles per sample.
    fn response(&self, normalized_frequency: f64) -> Complex64 {
        self.cascade().response(normalized_frequency)
    }

    /// Poles and zeros of every section.
    fn pole_zeros(&self) -> Vec<PoleZeroPair> {
        self.cascade().pole_zeros()
    }
}

/// A filter family and shape driven by positional parameters.
///
/// Implementations publish one [`ParamInfo`] per slot and recompute their
/// cascade in [`apply_params`](Self::apply_params). A failed `apply_params`
/// must leave the previous cascade installed.
pub trait Design: Send + 'static {
    /// Response shape.
    fn kind(&self) -> Kind;

    /// Human-readable name, e.g. `"Butterworth Low Pass"`.
    fn name(&self) -> &'static str;

    /// Number of parameter slots.
    fn num_params(&self) -> usize;

    /// Metadata for slot `index`.
    fn param_info(&self, index: usize) -> Option<ParamInfo>;

    /// Recomputes the cascade from `params`.
    fn apply_params(&mut self, params: &Params) -> Result<(), FilterError>;

    /// The designed cascade.
    fn cascade(&self) -> &Cascade;

    /// Every slot at its published default.
    fn default_params(&self) -> Params {
        let mut params = Params::new();
        for index in 0..self.num_params() {
            if let Some(info) = self.param_info(index) {
                // num_params never exceeds MAX_PARAMETERS
                let _ = params.set(index, info.default);
            }
        }
        params
    }

    /// Section capacity reserved at construction.
    fn max_stages(&self) -> usize {
        self.cascade().max_stages()
    }
}

/// Runtime-dispatched filter with introspectable parameters and channel state.
///
/// Processing works in place on one buffer per channel. [`process`](Self::process)
/// treats a structurally wrong call (analysis-only filter, too few buffers,
/// short buffers) as a programming error and panics; [`try_process`](Self::try_process)
/// reports the same conditions as errors. Neither touches state on failure.
pub trait Filter: Send {
    /// Response shape.
    fn kind(&self) -> Kind;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Number of parameter slots.
    fn num_params(&self) -> usize;

    /// Metadata for slot `index`.
    fn param_info(&self, index: usize) -> Option<ParamInfo>;

    /// Every slot at its published default.
    fn default_params(&self) -> Params;

    /// The last successfully applied parameters.
    fn params(&self) -> &Params;

    /// Validates `params` and recomputes the design.
    ///
    /// On error nothing changes: the previous parameters and cascade stay in place.
    fn set_params(&mut self, params: &Params) -> Result<(), FilterError>;

    /// Poles and zeros of the committed cascade.
    fn pole_zeros(&self) -> Vec<PoleZeroPair>;

    /// Response of the committed cascade at a normalized frequency in cycles per sample.
    fn response(&self, normalized_frequency: f64) -> Complex64;

    /// Number of channels; zero for analysis-only filters.
    fn num_channels(&self) -> usize;

    /// Clears every delay register.
    fn reset(&mut self);

    /// Processes `num_samples` samples of every channel in place.
    fn try_process(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [f32]],
    ) -> Result<(), FilterError>;

    /// `f64` variant of [`try_process`](Self::try_process).
    fn try_process_f64(
        &mut self,
        num_samples: usize,
        channels: &mut [&mut [f64]],
    ) -> Result<(), FilterError>;

    /// Processes in place, panicking on a structurally invalid call.
    fn process(&mut self, num_samples: usize, channels: &mut [&mut [f32]]) {
        if let Err(err) = self.try_process(num_samples, channels) {
            panic!("{}: {err}", self.name());
        }
    }

    /// `f64` variant of [`process`](Self::process).
    fn process_f64(&mut self, num_samples: usize, channels: &mut [&mut [f64]]) {
        if let Err(err) = self.try_process_f64(num_samples, channels) {
            panic!("{}: {err}", self.name());
        }
    }

    /// Value of slot `index`.
    fn param(&self, index: usize) -> Result<f64, FilterError> {
        if index >= self.num_params() {
            return Err(FilterError::InvalidParamIndex {
                index,
                count: self.num_params(),
            });
        }
        Ok(self.params()[index])
    }

    /// Sets slot `index`, recomputing the design.
    fn set_param(&mut self, index: usize, value: f64) -> Result<(), FilterError> {
        if index >= self.num_params() {
            return Err(FilterError::InvalidParamIndex {
                index,
                count: self.num_params(),
            });
        }
        let mut params = *self.params();
        params.set(index, value)?;
        self.set_params(&params)
    }

    /// Slot holding the parameter with identity `id`.
    fn find_param_index(&self, id: ParamId) -> Option<usize> {
        (0..self.num_params()).find(|&i| self.param_info(i).is_some_and(|info| info.id == id))
    }

    /// Value of the parameter with identity `id`.
    fn param_by_id(&self, id: ParamId) -> Result<f64, FilterError> {
        let index = self
            .find_param_index(id)
            .ok_or(FilterError::UnknownParamId(id))?;
        self.param(index)
    }

    /// Sets the parameter with identity `id`.
    fn set_param_by_id(&mut self, id: ParamId, value: f64) -> Result<(), FilterError> {
        let index = self
            .find_param_index(id)
            .ok_or(FilterError::UnknownParamId(id))?;
        self.set_param(index, value)
    }

    /// Copies every parameter `other` shares with this filter, by identity.
    ///
    /// Parameters this filter has but `other` lacks keep their current
    /// values. The update is applied as one [`set_params`](Self::set_params).
    fn copy_params_from(&mut self, other: &dyn Filter) -> Result<(), FilterError> {
        let mut params = *self.params();
        for i in 0..other.num_params() {
            if let Some(info) = other.param_info(i)
                && let Some(j) = self.find_param_index(info.id)
            {
                params.set(j, other.params()[i])?;
            }
        }
        self.set_params(&params)
    }
}
