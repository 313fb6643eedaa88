//! Elliptic (Cauer) prototype.
//!
//! Jacobi elliptic functions are evaluated with descending Landen
//! transformations of the modulus, following Orfanidis' formulation:
//! `cd`/`sn` by ascending recursion from the trigonometric limit, the inverse
//! `sn` by descending recursion, and the degree equation solved exactly from
//! the selectivity and discrimination moduli.

use filtro_core::{Complex64, FilterError, PI, PoleZeroLayout, db_to_linear};

use super::AnalogPrototype;
use crate::validate;

/// Longest Landen sequence evaluated; moduli below `1e-15` end it early.
const LANDEN_STEPS: usize = 16;

/// Equiripple passband and stopband.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elliptic {
    /// Peak-to-peak passband ripple in dB.
    pub ripple_db: f64,
    /// Minimum stopband attenuation in dB, greater than the ripple.
    pub stop_db: f64,
}

impl AnalogPrototype for Elliptic {
    fn validate(&self) -> Result<(), FilterError> {
        validate::positive("ripple", self.ripple_db)?;
        validate::positive("stopband", self.stop_db)?;
        if self.stop_db <= self.ripple_db {
            return Err(FilterError::InvalidParameter {
                name: "stopband",
                value: self.stop_db,
            });
        }
        Ok(())
    }

    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        layout.clear();
        let n = order as f64;
        let ep = libm::sqrt(libm::pow(10.0, self.ripple_db / 10.0) - 1.0);
        let es = libm::sqrt(libm::pow(10.0, self.stop_db / 10.0) - 1.0);

        // Discrimination modulus and its complement.
        let k1 = ep / es;
        let k1c = libm::sqrt((1.0 - k1) * (1.0 + k1));
        let (k, kc) = degree_equation(order, k1, k1c);

        let selectivity = Landen::new(k, kc);
        let discrimination = Landen::new(k1, k1c);
        let v0 = discrimination.asne_imag(1.0 / ep) / n;

        for i in 1..=order / 2 {
            let u = (2 * i - 1) as f64 / n;
            let zeta = selectivity.cde(Complex64::new(u, 0.0)).re;
            let zero = Complex64::new(0.0, 1.0 / (k * zeta));
            let pole = Complex64::i() * selectivity.cde(Complex64::new(u, -v0));
            layout.add_conjugate_pairs(pole, zero);
        }
        if order % 2 == 1 {
            let pole = Complex64::i() * selectivity.sne(Complex64::new(0.0, v0));
            layout.add_single(pole.re, f64::INFINITY);
        }

        let gain = if order % 2 == 1 {
            1.0
        } else {
            db_to_linear(-self.ripple_db)
        };
        layout.set_normal(0.0, gain);
    }
}

/// Solves the degree equation for the selectivity modulus `k`.
///
/// Returns `(k, k')` with the complement computed directly, which stays
/// accurate when `k` is close to one.
fn degree_equation(order: usize, k1: f64, k1c: f64) -> (f64, f64) {
    let n = order as f64;
    // sne on the complementary modulus k1', whose own complement is k1.
    let complement = Landen::new(k1c, k1);
    let mut product = 1.0;
    for i in 1..=order / 2 {
        let u = (2 * i - 1) as f64 / n;
        product *= complement.sne(Complex64::new(u, 0.0)).re;
    }
    let kc = libm::pow(k1c, n) * libm::pow(product, 4.0);
    let k = libm::sqrt((1.0 - kc) * (1.0 + kc));
    (k, kc)
}

/// Descending Landen sequence of a modulus.
#[derive(Debug, Clone, Copy)]
struct Landen {
    k: f64,
    moduli: [f64; LANDEN_STEPS],
    len: usize,
}

impl Landen {
    /// Builds the sequence from `k` and its complement `kc = sqrt(1 - k²)`.
    fn new(k: f64, kc: f64) -> Self {
        let mut moduli = [0.0; LANDEN_STEPS];
        let mut len = 0;
        let (mut current, mut kc) = (k, kc);
        while len < LANDEN_STEPS && current > 1e-15 {
            // k_n = (k_{n-1} / (1 + k'_{n-1}))², k'_n = 2 sqrt(k'_{n-1}) / (1 + k'_{n-1})
            let ratio = current / (1.0 + kc);
            current = ratio * ratio;
            kc = 2.0 * libm::sqrt(kc) / (1.0 + kc);
            moduli[len] = current;
            len += 1;
        }
        Self { k, moduli, len }
    }

    fn moduli(&self) -> &[f64] {
        &self.moduli[..self.len]
    }

    /// Ascending recursion from the trigonometric limit.
    fn ascend(&self, mut w: Complex64) -> Complex64 {
        let one = Complex64::new(1.0, 0.0);
        for &v in self.moduli().iter().rev() {
            w = w * (1.0 + v) / (one + w * w * v);
        }
        w
    }

    /// `cd(u·K, k)` for `u` in units of the quarter period.
    fn cde(&self, u: Complex64) -> Complex64 {
        self.ascend((u * (PI / 2.0)).cos())
    }

    /// `sn(u·K, k)` for `u` in units of the quarter period.
    fn sne(&self, u: Complex64) -> Complex64 {
        self.ascend((u * (PI / 2.0)).sin())
    }

    /// Inverse `sn` of the purely imaginary argument `j·x`, returning the
    /// imaginary part of `u` (in quarter-period units).
    fn asne_imag(&self, x: f64) -> f64 {
        let mut x = x;
        let mut previous = self.k;
        for &v in self.moduli() {
            x = x / (1.0 + libm::sqrt(1.0 + x * x * previous * previous)) * 2.0 / (1.0 + v);
            previous = v;
        }
        2.0 / PI * libm::asinh(x)
    }
}
