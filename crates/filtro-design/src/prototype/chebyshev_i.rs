use filtro_core::{Complex64, FilterError, PI, PoleZeroLayout, db_to_linear, infinity};

use super::{AnalogPrototype, ButterworthShelf};
use crate::validate;

/// Equiripple passband, monotonic stopband.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevI {
    /// Peak-to-peak passband ripple in dB.
    pub ripple_db: f64,
}

impl AnalogPrototype for ChebyshevI {
    fn validate(&self) -> Result<(), FilterError> {
        validate::positive("ripple", self.ripple_db)
    }

    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        layout.clear();
        let n = order as f64;
        let eps = libm::sqrt(libm::pow(10.0, self.ripple_db / 10.0) - 1.0);
        let v0 = libm::asinh(1.0 / eps) / n;
        let sinh_v0 = -libm::sinh(v0);
        let cosh_v0 = libm::cosh(v0);

        let n2 = 2.0 * n;
        for i in 0..order / 2 {
            let k = (2 * i + 1) as f64 - n;
            let a = sinh_v0 * libm::cos(k * PI / n2);
            let b = cosh_v0 * libm::sin(k * PI / n2);
            layout.add_conjugate_pairs(Complex64::new(a, b), infinity());
        }
        if order % 2 == 1 {
            layout.add_single(sinh_v0, f64::INFINITY);
        }

        let gain = if order % 2 == 1 {
            1.0
        } else {
            db_to_linear(-self.ripple_db)
        };
        layout.set_normal(0.0, gain);
    }
}

/// Chebyshev I low shelf with ripple in the shelf region.
///
/// The ripple is held strictly below `|gain_db|`; a flat (0 dB) shelf
/// degenerates to a flat Butterworth shelf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevIShelf {
    /// Shelf gain in dB.
    pub gain_db: f64,
    /// Ripple in dB.
    pub ripple_db: f64,
}

/// Largest fraction of `|gain|` the ripple may occupy.
const RIPPLE_LIMIT: f64 = 0.99;

/// Below this the shelf is treated as flat.
const FLAT_GAIN_DB: f64 = 1e-6;

impl AnalogPrototype for ChebyshevIShelf {
    fn validate(&self) -> Result<(), FilterError> {
        validate::finite("gain", self.gain_db)?;
        validate::positive("ripple", self.ripple_db)
    }

    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        if self.gain_db.abs() < FLAT_GAIN_DB {
            ButterworthShelf { gain_db: 0.0 }.design(order, layout);
            return;
        }
        layout.clear();
        let n = order as f64;

        // The construction yields the inverse shelf, so design for -gain.
        let gain_db = -self.gain_db;
        let mut ripple_db = self.ripple_db.min(gain_db.abs() * RIPPLE_LIMIT);
        if gain_db < 0.0 {
            ripple_db = -ripple_db;
        }

        let g = db_to_linear(gain_db);
        let gb = db_to_linear(gain_db - ripple_db);
        let eps = libm::sqrt((g * g - gb * gb) / (gb * gb - 1.0));
        let inv_eps = 1.0 / eps;
        let root = libm::sqrt(1.0 + inv_eps * inv_eps);
        let b = libm::pow(g / eps + gb * root, 1.0 / n);
        let u = libm::log(b);
        let v = libm::log(libm::pow(inv_eps + root, 1.0 / n));

        let (sinh_u, cosh_u) = (libm::sinh(u), libm::cosh(u));
        let (sinh_v, cosh_v) = (libm::sinh(v), libm::cosh(v));

        let n2 = 2.0 * n;
        for i in 1..=order / 2 {
            let a = PI * (2 * i - 1) as f64 / n2;
            let (sn, cs) = (libm::sin(a), libm::cos(a));
            layout.add_conjugate_pairs(
                Complex64::new(-sn * sinh_u, cs * cosh_u),
                Complex64::new(-sn * sinh_v, cs * cosh_v),
            );
        }
        if order % 2 == 1 {
            layout.add_single(-sinh_u, -sinh_v);
        }
        layout.set_normal(PI, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dc_gain(layout: &PoleZeroLayout) -> f64 {
        let num: f64 = layout.zeros().filter(|z| z.re.is_finite()).map(|z| z.norm()).product();
        let den: f64 = layout.poles().map(|p| p.norm()).product();
        num / den
    }

    #[test]
    fn test_ripple_ellipse() {
        let mut layout = PoleZeroLayout::with_max_poles(4);
        ChebyshevI { ripple_db: 1.0 }.design(4, &mut layout);
        // All-pole DC magnitude times the normal gain ratio.
        assert!((layout.normal_gain() - db_to_linear(-1.0)).abs() < 1e-12);
        for pole in layout.poles() {
            assert!(pole.re < 0.0);
            assert!(pole.norm() < 1.0);
        }
    }

    #[test]
    fn test_shelf_gain_sign() {
        for gain in [-12.0, -3.0, 6.0, 18.0] {
            for n in 1..=5 {
                let mut layout = PoleZeroLayout::with_max_poles(n);
                ChebyshevIShelf { gain_db: gain, ripple_db: 1.0 }.design(n, &mut layout);
                let dc = filtro_core::linear_to_db(dc_gain(&layout));
                assert!((dc - gain).abs() < 1.1, "gain {gain} order {n}: {dc}");
            }
        }
    }

    #[test]
    fn test_flat_shelf() {
        let mut layout = PoleZeroLayout::with_max_poles(3);
        ChebyshevIShelf { gain_db: 0.0, ripple_db: 1.0 }.design(3, &mut layout);
        assert!((dc_gain(&layout) - 1.0).abs() < 1e-12);
    }
}
