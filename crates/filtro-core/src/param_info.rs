//! Parameter metadata for introspectable filters.
//!
//! Every [`Design`](crate::Design) publishes one [`ParamInfo`] per positional
//! slot. The metadata carries:
//!
//! - [`ParamId`] — stable identity, so callers can address "the cutoff" or
//!   "the ripple" without knowing a family's slot layout
//! - the valid range and default
//! - [`ParamScale`] — the mapping between native values and a normalized
//!   `[0, 1]` control coordinate (linear, logarithmic or power curve)
//! - [`ParamUnit`] and [`ParamFlags`] for display
//!
//! Gains are carried in dB with a linear control mapping, which is
//! logarithmic in linear gain.
//!
//! # Example
//!
//! ```rust
//! use filtro_core::{ParamId, ParamInfo};
//!
//! let cutoff = ParamInfo::frequency();
//! assert_eq!(cutoff.id, ParamId::Frequency);
//! let control = cutoff.to_control_value(1000.0);
//! assert!((cutoff.to_native_value(control) - 1000.0).abs() < 1e-6);
//! assert!(cutoff.check(5.0).is_err());
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use core::fmt;
use core::str::FromStr;

use crate::error::FilterError;
use crate::math::PI;

/// Stable identity of a parameter across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    /// Sample rate in Hz.
    SampleRate,
    /// Filter order.
    Order,
    /// Cutoff or centre frequency in Hz.
    Frequency,
    /// Resonance / quality factor.
    Q,
    /// Bandwidth in octaves.
    Bandwidth,
    /// Bandwidth in Hz.
    BandwidthHz,
    /// Shelf or peak gain in dB.
    Gain,
    /// Shelf slope.
    Slope,
    /// Passband ripple in dB.
    RippleDb,
    /// Stopband attenuation in dB.
    StopDb,
    /// Overall linear gain factor.
    Scale,
    /// Real pole position.
    PoleReal,
    /// Real zero position.
    ZeroReal,
    /// Pole radius.
    PoleRho,
    /// Pole angle in radians.
    PoleTheta,
    /// Zero radius.
    ZeroRho,
    /// Zero angle in radians.
    ZeroTheta,
}

impl ParamId {
    /// Every identity.
    pub const ALL: [ParamId; 17] = [
        ParamId::SampleRate,
        ParamId::Order,
        ParamId::Frequency,
        ParamId::Q,
        ParamId::Bandwidth,
        ParamId::BandwidthHz,
        ParamId::Gain,
        ParamId::Slope,
        ParamId::RippleDb,
        ParamId::StopDb,
        ParamId::Scale,
        ParamId::PoleReal,
        ParamId::ZeroReal,
        ParamId::PoleRho,
        ParamId::PoleTheta,
        ParamId::ZeroRho,
        ParamId::ZeroTheta,
    ];

    /// Stable string form, used as preset keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamId::SampleRate => "sample_rate",
            ParamId::Order => "order",
            ParamId::Frequency => "frequency",
            ParamId::Q => "q",
            ParamId::Bandwidth => "bandwidth",
            ParamId::BandwidthHz => "bandwidth_hz",
            ParamId::Gain => "gain",
            ParamId::Slope => "slope",
            ParamId::RippleDb => "ripple_db",
            ParamId::StopDb => "stop_db",
            ParamId::Scale => "scale",
            ParamId::PoleReal => "pole_real",
            ParamId::ZeroReal => "zero_real",
            ParamId::PoleRho => "pole_rho",
            ParamId::PoleTheta => "pole_theta",
            ParamId::ZeroRho => "zero_rho",
            ParamId::ZeroTheta => "zero_theta",
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParamName;

impl fmt::Display for UnknownParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown parameter name")
    }
}

impl FromStr for ParamId {
    type Err = UnknownParamName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(UnknownParamName)
    }
}

/// Mapping between native values and the `[0, 1]` control coordinate.
///
/// - **Linear**: `control = (value - min) / (max - min)`
/// - **Logarithmic**: `control = ln(value/min) / ln(max/min)`, requires `min > 0`
/// - **Decibel**: linear in dB, so logarithmic in amplitude; for gain and
///   attenuation slots whose native unit is already dB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values; frequencies, Q, ripple.
    Logarithmic,
    /// Gains and attenuations stored in dB.
    Decibel,
}

/// Display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels.
    Decibels,
    /// Hertz.
    Hertz,
    /// Octaves.
    Octaves,
    /// Radians.
    Radians,
    /// Dimensionless.
    None,
}

impl ParamUnit {
    /// Unit suffix for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Hertz => " Hz",
            ParamUnit::Octaves => " oct",
            ParamUnit::Radians => " rad",
            ParamUnit::None => "",
        }
    }
}

/// Capability flags. Combine with [`union`](Self::union).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Safe to automate while processing.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Integer-valued.
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Metadata for one positional parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamInfo {
    /// Stable identity.
    pub id: ParamId,
    /// Display label.
    pub name: &'static str,
    /// Label for narrow displays, max 8 characters.
    pub short_name: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Minimum accepted value.
    pub min: f64,
    /// Maximum accepted value.
    pub max: f64,
    /// Value used by [`Design::default_params`](crate::Design::default_params).
    pub default: f64,
    /// Control mapping.
    pub scale: ParamScale,
    /// Capability flags.
    pub flags: ParamFlags,
}

impl ParamInfo {
    const fn base(id: ParamId, name: &'static str, short_name: &'static str) -> Self {
        Self {
            id,
            name,
            short_name,
            unit: ParamUnit::None,
            min: 0.0,
            max: 1.0,
            default: 0.0,
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Sample rate, 8 kHz to 192 kHz.
    pub const fn sample_rate() -> Self {
        Self {
            unit: ParamUnit::Hertz,
            min: 8000.0,
            max: 192_000.0,
            default: 44100.0,
            flags: ParamFlags::NONE,
            ..Self::base(ParamId::SampleRate, "Sample Rate", "Rate")
        }
    }

    /// Filter order from 1 to `max_order`.
    pub fn order(max_order: usize) -> Self {
        let max = max_order.max(1) as f64;
        Self {
            min: 1.0,
            max,
            default: max.min(2.0),
            flags: ParamFlags::STEPPED,
            ..Self::base(ParamId::Order, "Order", "Order")
        }
    }

    /// Cutoff or centre frequency.
    pub const fn frequency() -> Self {
        Self {
            unit: ParamUnit::Hertz,
            min: 10.0,
            max: 22040.0,
            default: 1000.0,
            scale: ParamScale::Logarithmic,
            ..Self::base(ParamId::Frequency, "Frequency", "Freq")
        }
    }

    /// Resonance.
    pub const fn q() -> Self {
        Self {
            min: 0.025,
            max: 40.0,
            default: core::f64::consts::FRAC_1_SQRT_2,
            scale: ParamScale::Logarithmic,
            ..Self::base(ParamId::Q, "Resonance", "Q")
        }
    }

    /// Bandwidth in octaves.
    pub const fn bandwidth() -> Self {
        Self {
            unit: ParamUnit::Octaves,
            min: 0.05,
            max: 8.0,
            default: 1.0,
            scale: ParamScale::Logarithmic,
            ..Self::base(ParamId::Bandwidth, "Bandwidth", "BW")
        }
    }

    /// Bandwidth in Hz.
    pub const fn bandwidth_hz() -> Self {
        Self {
            unit: ParamUnit::Hertz,
            min: 1.0,
            max: 22040.0,
            default: 720.0,
            scale: ParamScale::Logarithmic,
            ..Self::base(ParamId::BandwidthHz, "Bandwidth", "BW")
        }
    }

    /// Shelf gain in dB.
    pub const fn gain() -> Self {
        Self {
            unit: ParamUnit::Decibels,
            min: -36.0,
            max: 36.0,
            default: -6.0,
            scale: ParamScale::Decibel,
            ..Self::base(ParamId::Gain, "Gain", "Gain")
        }
    }

    /// Shelf slope.
    pub const fn slope() -> Self {
        Self {
            min: 0.01,
            max: 1.0,
            default: 1.0,
            ..Self::base(ParamId::Slope, "Slope", "Slope")
        }
    }

    /// Passband ripple in dB.
    pub const fn ripple() -> Self {
        Self {
            unit: ParamUnit::Decibels,
            min: 0.001,
            max: 12.0,
            default: 1.0,
            scale: ParamScale::Logarithmic,
            ..Self::base(ParamId::RippleDb, "Passband Ripple", "Ripple")
        }
    }

    /// Stopband attenuation in dB.
    pub const fn stop_band() -> Self {
        Self {
            unit: ParamUnit::Decibels,
            min: 3.0,
            max: 120.0,
            default: 48.0,
            scale: ParamScale::Decibel,
            ..Self::base(ParamId::StopDb, "Stopband Attenuation", "Stop")
        }
    }

    /// Linear gain factor.
    pub const fn scale() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
            default: 1.0,
            ..Self::base(ParamId::Scale, "Scale", "Scale")
        }
    }

    /// Real pole, strictly inside the unit circle.
    pub const fn pole_real() -> Self {
        Self {
            min: -0.9999,
            max: 0.9999,
            default: 0.9,
            ..Self::base(ParamId::PoleReal, "Pole", "Pole")
        }
    }

    /// Real zero.
    pub const fn zero_real() -> Self {
        Self {
            min: -2.0,
            max: 2.0,
            default: -1.0,
            ..Self::base(ParamId::ZeroReal, "Zero", "Zero")
        }
    }

    /// Pole radius, strictly inside the unit circle.
    pub const fn pole_rho() -> Self {
        Self {
            max: 0.9999,
            default: 0.9,
            ..Self::base(ParamId::PoleRho, "Pole Radius", "Pole R")
        }
    }

    /// Pole angle.
    pub const fn pole_theta() -> Self {
        Self {
            unit: ParamUnit::Radians,
            max: PI,
            default: PI / 4.0,
            ..Self::base(ParamId::PoleTheta, "Pole Angle", "Pole A")
        }
    }

    /// Zero radius.
    pub const fn zero_rho() -> Self {
        Self {
            max: 2.0,
            default: 1.0,
            ..Self::base(ParamId::ZeroRho, "Zero Radius", "Zero R")
        }
    }

    /// Zero angle.
    pub const fn zero_theta() -> Self {
        Self {
            unit: ParamUnit::Radians,
            max: PI,
            default: PI / 2.0,
            ..Self::base(ParamId::ZeroTheta, "Zero Angle", "Zero A")
        }
    }

    /// Returns a copy with a different default.
    pub const fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    /// Returns `true` if `value` is finite and inside `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// [`contains`](Self::contains) as a `Result`.
    pub fn check(&self, value: f64) -> Result<(), FilterError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(FilterError::ParamOutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Maps a native value to the `[0, 1]` control coordinate.
    pub fn to_control_value(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let value = self.clamp(value);
        match self.scale {
            ParamScale::Linear | ParamScale::Decibel => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return (value - self.min) / range;
                }
                libm::log(value / self.min) / libm::log(self.max / self.min)
            }
        }
    }

    /// Maps a `[0, 1]` control coordinate back to a native value.
    ///
    /// Stepped parameters round to the nearest integer.
    pub fn to_native_value(&self, control: f64) -> f64 {
        let control = control.clamp(0.0, 1.0);
        let value = match self.scale {
            ParamScale::Linear | ParamScale::Decibel => {
                self.min + control * (self.max - self.min)
            }
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    self.min + control * (self.max - self.min)
                } else {
                    self.min * libm::pow(self.max / self.min, control)
                }
            }
        }
        .clamp(self.min, self.max);
        if self.flags.contains(ParamFlags::STEPPED) {
            libm::round(value)
        } else {
            value
        }
    }

    /// Formats a value with its unit.
    ///
    /// ```rust
    /// use filtro_core::ParamInfo;
    ///
    /// assert_eq!(ParamInfo::frequency().format_value(440.0), "440.0 Hz");
    /// assert_eq!(ParamInfo::frequency().format_value(2500.0), "2.50 kHz");
    /// assert_eq!(ParamInfo::order(8).format_value(4.0), "4");
    /// assert_eq!(ParamInfo::gain().format_value(-6.0), "-6.0 dB");
    /// ```
    pub fn format_value(&self, value: f64) -> String {
        match self.unit {
            ParamUnit::Hertz if value >= 1000.0 => format!("{:.2} kHz", value / 1000.0),
            ParamUnit::Hertz | ParamUnit::Decibels => format!("{value:.1}{}", self.unit.suffix()),
            ParamUnit::Octaves => format!("{value:.2}{}", self.unit.suffix()),
            ParamUnit::Radians => format!("{value:.3}{}", self.unit.suffix()),
            ParamUnit::None if self.flags.contains(ParamFlags::STEPPED) => {
                format!("{value:.0}")
            }
            ParamUnit::None => format!("{value:.3}"),
        }
    }
}
