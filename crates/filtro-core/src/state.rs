//! Section state realizations.
//!
//! Every realization computes the same transfer function; they differ only in
//! which intermediate values are kept in the delay registers. The realization
//! is a type parameter on the processing containers, so the hot loop is
//! monomorphized and never dispatches per sample.
//!
//! | Realization | Registers | Notes |
//! |-------------|-----------|-------|
//! | [`DirectFormI`] | 4 | Input and output history; robust to coefficient changes |
//! | [`DirectFormII`] | 2 | Shared delay line (default) |
//! | [`TransposedDirectFormII`] | 2 | Good floating-point behaviour at low cutoffs |

use core::fmt;
use core::str::FromStr;

use crate::biquad::BiquadCoefficients;
use crate::math::flush_denormal;

/// Per-section delay registers for one realization.
pub trait StateRealization: Clone + Default + Send + 'static {
    /// Which realization this is.
    const KIND: Realization;

    /// Advances one sample through one section.
    fn process_section(&mut self, input: f64, c: &BiquadCoefficients) -> f64;

    /// Zeroes the registers.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Direct Form I: `y = b0·x + b1·x₁ + b2·x₂ − a1·y₁ − a2·y₂`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectFormI {
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl StateRealization for DirectFormI {
    const KIND: Realization = Realization::DirectFormI;

    #[inline]
    fn process_section(&mut self, input: f64, c: &BiquadCoefficients) -> f64 {
        let output =
            c.b0 * input + c.b1 * self.x1 + c.b2 * self.x2 - c.a1 * self.y1 - c.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = flush_denormal(output);
        output
    }
}

/// Direct Form II: one delay line shared by numerator and denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectFormII {
    v1: f64,
    v2: f64,
}

impl StateRealization for DirectFormII {
    const KIND: Realization = Realization::DirectFormII;

    #[inline]
    fn process_section(&mut self, input: f64, c: &BiquadCoefficients) -> f64 {
        let w = input - c.a1 * self.v1 - c.a2 * self.v2;
        let output = c.b0 * w + c.b1 * self.v1 + c.b2 * self.v2;
        self.v2 = self.v1;
        self.v1 = flush_denormal(w);
        output
    }
}

/// Transposed Direct Form II.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransposedDirectFormII {
    s1: f64,
    s2: f64,
}

impl StateRealization for TransposedDirectFormII {
    const KIND: Realization = Realization::TransposedDirectFormII;

    #[inline]
    fn process_section(&mut self, input: f64, c: &BiquadCoefficients) -> f64 {
        let output = c.b0 * input + self.s1;
        self.s1 = flush_denormal(c.b1 * input - c.a1 * output + self.s2);
        self.s2 = flush_denormal(c.b2 * input - c.a2 * output);
        output
    }
}

/// Runtime name for a realization, for factories and presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Realization {
    /// [`DirectFormI`].
    DirectFormI,
    /// [`DirectFormII`].
    #[default]
    DirectFormII,
    /// [`TransposedDirectFormII`].
    TransposedDirectFormII,
}

impl Realization {
    /// Every realization.
    pub const ALL: [Realization; 3] = [
        Realization::DirectFormI,
        Realization::DirectFormII,
        Realization::TransposedDirectFormII,
    ];

    /// Stable identifier used in presets.
    pub const fn as_str(self) -> &'static str {
        match self {
            Realization::DirectFormI => "direct_form_i",
            Realization::DirectFormII => "direct_form_ii",
            Realization::TransposedDirectFormII => "transposed_direct_form_ii",
        }
    }

    /// Delay registers per section.
    pub const fn registers(self) -> usize {
        match self {
            Realization::DirectFormI => 4,
            Realization::DirectFormII | Realization::TransposedDirectFormII => 2,
        }
    }
}

impl fmt::Display for Realization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown realization name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRealization;

impl fmt::Display for UnknownRealization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown realization")
    }
}

impl FromStr for Realization {
    type Err = UnknownRealization;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Realization::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or(UnknownRealization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> BiquadCoefficients {
        BiquadCoefficients::new(0.2, 0.4, 0.2, 1.0, -0.6, 0.25)
    }

    fn impulse<S: StateRealization>() -> [f64; 32] {
        let mut state = S::default();
        let c = section();
        let mut out = [0.0; 32];
        for (i, y) in out.iter_mut().enumerate() {
            *y = state.process_section(if i == 0 { 1.0 } else { 0.0 }, &c);
        }
        out
    }

    #[test]
    fn test_realizations_agree() {
        let df1 = impulse::<DirectFormI>();
        let df2 = impulse::<DirectFormII>();
        let tdf2 = impulse::<TransposedDirectFormII>();
        for i in 0..32 {
            assert!((df1[i] - df2[i]).abs() < 1e-12, "sample {i}");
            assert!((df1[i] - tdf2[i]).abs() < 1e-12, "sample {i}");
        }
        assert_eq!(df1[0], 0.2);
    }

    #[test]
    fn test_reset_clears_registers() {
        let mut state = DirectFormII::default();
        state.process_section(1.0, &section());
        assert_ne!(state, DirectFormII::default());
        state.reset();
        assert_eq!(state, DirectFormII::default());
    }

    #[test]
    fn test_realization_names_roundtrip() {
        for r in Realization::ALL {
            assert_eq!(r.as_str().parse::<Realization>(), Ok(r));
        }
        assert!("direct_form_iii".parse::<Realization>().is_err());
        assert_eq!(Realization::default(), Realization::DirectFormII);
        assert_eq!(DirectFormI::KIND.registers(), 4);
    }
}
