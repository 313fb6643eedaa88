//! Error types for filter design and processing.

use crate::param_info::ParamId;
use thiserror::Error;

/// Errors reported by filter setup, parameter updates and checked processing.
///
/// Design-time errors are returned before any installed cascade is touched,
/// so a filter that rejects an update keeps producing its previous response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Order is zero or exceeds the capacity declared at construction.
    #[error("filter order {order} outside 1..={max}")]
    InvalidOrder {
        /// Requested order.
        order: usize,
        /// Maximum order this instance was built for.
        max: usize,
    },

    /// Sample rate is not a positive finite number.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f64),

    /// Cutoff or centre frequency outside the open interval (0, Nyquist).
    #[error("frequency {frequency} Hz outside (0, {nyquist}) Hz")]
    FrequencyOutOfRange {
        /// Requested frequency in Hz.
        frequency: f64,
        /// Nyquist frequency for the requested sample rate.
        nyquist: f64,
    },

    /// A shape parameter (ripple, Q, slope, bandwidth, pole radius...) is out of its domain.
    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Value outside the range published by the parameter's metadata.
    #[error("parameter '{name}' value {value} outside [{min}, {max}]")]
    ParamOutOfRange {
        /// Parameter label.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Minimum accepted value.
        min: f64,
        /// Maximum accepted value.
        max: f64,
    },

    /// Positional parameter index past the family's parameter count.
    #[error("parameter index {index} out of range (count {count})")]
    InvalidParamIndex {
        /// Requested index.
        index: usize,
        /// Number of parameters the filter exposes.
        count: usize,
    },

    /// The filter has no parameter with this identity.
    #[error("filter has no parameter '{0}'")]
    UnknownParamId(ParamId),

    /// The design produced non-finite coefficients.
    #[error("design produced non-finite coefficients")]
    NumericalFailure,

    /// Processing was requested on an analysis-only (zero channel) filter.
    #[error("filter was built without channel state")]
    NoChannels,

    /// Fewer channel buffers than the filter has channels.
    #[error("expected {expected} channel buffers, got {got}")]
    ChannelCountMismatch {
        /// Channels the filter was built with.
        expected: usize,
        /// Buffers supplied.
        got: usize,
    },

    /// A channel buffer is shorter than the requested sample count.
    #[error("channel {channel} holds {len} samples, {needed} requested")]
    BufferTooShort {
        /// Offending channel index.
        channel: usize,
        /// Buffer length.
        len: usize,
        /// Requested sample count.
        needed: usize,
    },
}
