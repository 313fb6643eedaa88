//! Biquad (bi-quadratic) section coefficients.
//!
//! One second-order section of a cascade:
//!
//! ```text
//!         b0 + b1 z⁻¹ + b2 z⁻²
//! H(z) = ----------------------
//!          1 + a1 z⁻¹ + a2 z⁻²
//! ```
//!
//! Coefficients are always stored normalized by `a0`. First-order sections
//! use the same layout with `b2 = a2 = 0`.

use crate::layout::{PoleZeroPair, RootPair};
use crate::math::{Complex64, TWO_PI, infinity, lerp, quadratic_roots};

/// Coefficients of one second-order section, normalized so `a0 = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    /// Feedforward coefficient for `x[n]`.
    pub b0: f64,
    /// Feedforward coefficient for `x[n-1]`.
    pub b1: f64,
    /// Feedforward coefficient for `x[n-2]`.
    pub b2: f64,
    /// Feedback coefficient for `y[n-1]`.
    pub a1: f64,
    /// Feedback coefficient for `y[n-2]`.
    pub a2: f64,
}

impl BiquadCoefficients {
    /// Passthrough section: `y[n] = x[n]`.
    pub const IDENTITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Creates coefficients from an unnormalized transfer function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filtro_core::BiquadCoefficients;
    ///
    /// let c = BiquadCoefficients::new(2.0, 4.0, 2.0, 2.0, 1.0, 0.5);
    /// assert_eq!(c.a0(), 1.0);
    /// assert_eq!(c.b1, 2.0);
    /// assert_eq!(c.a2, 0.25);
    /// ```
    pub fn new(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> Self {
        let mut c = Self::IDENTITY;
        c.set_coefficients(b0, b1, b2, a0, a1, a2);
        c
    }

    /// Sets the coefficients, normalizing by `a0`.
    pub fn set_coefficients(&mut self, b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) {
        let a0_inv = 1.0 / a0;
        self.b0 = b0 * a0_inv;
        self.b1 = b1 * a0_inv;
        self.b2 = b2 * a0_inv;
        self.a1 = a1 * a0_inv;
        self.a2 = a2 * a0_inv;
    }

    /// The leading denominator coefficient, always 1 after normalization.
    #[inline]
    pub fn a0(&self) -> f64 {
        1.0
    }

    /// First-order section with a real pole and a real zero.
    pub fn set_one_pole(&mut self, pole: f64, zero: f64) {
        self.set_coefficients(1.0, -zero, 0.0, 1.0, -pole, 0.0);
    }

    /// Second-order section from two poles and two zeros.
    ///
    /// Complex roots must come with their conjugate as the other root; only
    /// the first of each is inspected in that case.
    pub fn set_two_pole(
        &mut self,
        pole1: Complex64,
        zero1: Complex64,
        pole2: Complex64,
        zero2: Complex64,
    ) {
        let (a1, a2) = if pole1.im == 0.0 {
            (-(pole1.re + pole2.re), pole1.re * pole2.re)
        } else {
            (-2.0 * pole1.re, pole1.norm_sqr())
        };
        let (b1, b2) = if zero1.im == 0.0 {
            (-(zero1.re + zero2.re), zero1.re * zero2.re)
        } else {
            (-2.0 * zero1.re, zero1.norm_sqr())
        };
        self.set_coefficients(1.0, b1, b2, 1.0, a1, a2);
    }

    /// Builds the section realizing one digital pole/zero pair.
    pub fn from_pair(pair: &PoleZeroPair) -> Self {
        let mut c = Self::IDENTITY;
        match (pair.poles, pair.zeros) {
            (RootPair::Single(p), RootPair::Single(z)) => c.set_one_pole(p, z),
            (poles, zeros) => c.set_two_pole(
                poles.first(),
                zeros.first(),
                poles.second().unwrap_or(poles.first()),
                zeros.second().unwrap_or(zeros.first()),
            ),
        }
        c
    }

    /// Scales the numerator (overall section gain).
    pub fn apply_scale(&mut self, scale: f64) {
        self.b0 *= scale;
        self.b1 *= scale;
        self.b2 *= scale;
    }

    /// Complex response at a normalized frequency in cycles per sample.
    pub fn response(&self, normalized_frequency: f64) -> Complex64 {
        let w = TWO_PI * normalized_frequency;
        let czn1 = Complex64::from_polar(1.0, -w);
        let czn2 = Complex64::from_polar(1.0, -2.0 * w);
        let num = czn1 * self.b1 + czn2 * self.b2 + self.b0;
        let den = czn1 * self.a1 + czn2 * self.a2 + 1.0;
        num / den
    }

    /// Recovers the section's poles and zeros from its coefficients.
    pub fn pole_zeros(&self) -> PoleZeroPair {
        if self.a2 == 0.0 && self.b2 == 0.0 {
            let zero = if self.b0 == 0.0 {
                f64::INFINITY
            } else {
                -self.b1 / self.b0
            };
            return PoleZeroPair::single(-self.a1, zero);
        }

        let one = Complex64::new(1.0, 0.0);
        let (p1, p2) = quadratic_roots(one, Complex64::new(self.a1, 0.0), Complex64::new(self.a2, 0.0));
        let zeros = if self.b0 != 0.0 {
            let (z1, z2) = quadratic_roots(
                Complex64::new(self.b0, 0.0),
                Complex64::new(self.b1, 0.0),
                Complex64::new(self.b2, 0.0),
            );
            RootPair::from_roots(z1, z2)
        } else if self.b1 != 0.0 {
            RootPair::from_roots(Complex64::new(-self.b2 / self.b1, 0.0), infinity())
        } else {
            RootPair::Real(f64::INFINITY, f64::INFINITY)
        };
        PoleZeroPair::new(RootPair::from_roots(p1, p2), zeros)
    }

    /// Coefficient-wise linear interpolation, `t = 0` yields `from`, `t = 1` yields `to`.
    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            b0: lerp(from.b0, to.b0, t),
            b1: lerp(from.b1, to.b1, t),
            b2: lerp(from.b2, to.b2, t),
            a1: lerp(from.a1, to.a1, t),
            a2: lerp(from.a2, to.a2, t),
        }
    }

    /// Returns `true` if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.b0.is_finite()
            && self.b1.is_finite()
            && self.b2.is_finite()
            && self.a1.is_finite()
            && self.a2.is_finite()
    }

    /// Returns `true` if the denominator lies inside the stability triangle.
    ///
    /// `|a2| < 1` and `|a1| < 1 + a2`. The triangle is convex, so any
    /// interpolation between two stable sections is stable as well.
    pub fn is_stable(&self) -> bool {
        self.a2.abs() < 1.0 && self.a1.abs() < 1.0 + self.a2
    }

    /// Magnitude at DC.
    pub fn dc_gain(&self) -> f64 {
        self.response(0.0).norm()
    }

    /// Magnitude at Nyquist.
    pub fn nyquist_gain(&self) -> f64 {
        self.response(0.5).norm()
    }
}

impl Default for BiquadCoefficients {
    fn default() -> Self {
        Self::IDENTITY
    }
}
