use filtro_core::{Complex64, FilterError, PI, PoleZeroLayout, infinity};

use super::{AnalogPrototype, ChebyshevIShelf};
use crate::validate;

/// Inverse Chebyshev: monotonic passband, equiripple stopband.
///
/// The cutoff marks the stopband edge, where the attenuation first reaches
/// `stop_db`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevII {
    /// Minimum stopband attenuation in dB.
    pub stop_db: f64,
}

impl AnalogPrototype for ChebyshevII {
    fn validate(&self) -> Result<(), FilterError> {
        validate::positive("stopband", self.stop_db)
    }

    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        layout.clear();
        let n = order as f64;
        let eps = libm::sqrt(1.0 / (libm::pow(10.0, self.stop_db / 10.0) - 1.0));
        let v0 = libm::asinh(1.0 / eps) / n;
        let sinh_v0 = -libm::sinh(v0);
        let cosh_v0 = libm::cosh(v0);
        let fn_ = PI / (2.0 * n);

        for i in 0..order / 2 {
            let k = (2 * i + 1) as f64;
            let a = sinh_v0 * libm::cos((k - n) * fn_);
            let b = cosh_v0 * libm::sin((k - n) * fn_);
            let d2 = a * a + b * b;
            let zero = Complex64::new(0.0, 1.0 / libm::cos(k * fn_));
            layout.add_conjugate_pairs(Complex64::new(a / d2, b / d2), zero);
        }
        if order % 2 == 1 {
            layout.add_single(1.0 / sinh_v0, f64::INFINITY);
        }
        layout.set_normal(0.0, 1.0);
    }
}

/// Chebyshev II low shelf: ripple confined to the band opposite the shelf.
///
/// Built as the reciprocal-root image of a [`ChebyshevIShelf`] with negated
/// gain: `s → 1/s` swaps the rippled and flat bands and inverts the shelf,
/// the negation restores its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevIIShelf {
    /// Shelf gain in dB.
    pub gain_db: f64,
    /// Ripple outside the shelf in dB.
    pub stop_db: f64,
}

impl AnalogPrototype for ChebyshevIIShelf {
    fn validate(&self) -> Result<(), FilterError> {
        validate::finite("gain", self.gain_db)?;
        validate::positive("stopband", self.stop_db)
    }

    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        let inverse = ChebyshevIShelf {
            gain_db: -self.gain_db,
            ripple_db: self.stop_db,
        };
        inverse.design(order, layout);
        let one = Complex64::new(1.0, 0.0);
        layout.map_roots(|root| {
            if root.norm_sqr() == 0.0 {
                infinity()
            } else {
                one / root
            }
        });
        layout.set_normal(PI, 1.0);
    }
}
