use filtro_core::{Complex64, FilterError, PI, PoleZeroLayout, db_to_linear, infinity};

use super::AnalogPrototype;
use crate::validate;

/// Maximally flat magnitude: poles evenly spaced on the left unit half-circle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Butterworth;

impl AnalogPrototype for Butterworth {
    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        layout.clear();
        let n2 = 2.0 * order as f64;
        for i in 0..order / 2 {
            let theta = PI * (0.5 + (2 * i + 1) as f64 / n2);
            layout.add_conjugate_pairs(Complex64::from_polar(1.0, theta), infinity());
        }
        if order % 2 == 1 {
            layout.add_single(-1.0, f64::INFINITY);
        }
        layout.set_normal(0.0, 1.0);
    }
}

/// Butterworth low shelf: `gain_db` below the corner, unity above.
///
/// Poles sit on a circle of radius `1/g` and zeros on radius `g`, with
/// `g = 10^(gain/20)^(1/2n)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButterworthShelf {
    /// Shelf gain in dB.
    pub gain_db: f64,
}

impl AnalogPrototype for ButterworthShelf {
    fn validate(&self) -> Result<(), FilterError> {
        validate::finite("gain", self.gain_db)
    }

    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        layout.clear();
        let n2 = 2.0 * order as f64;
        let g = libm::pow(db_to_linear(self.gain_db), 1.0 / n2);
        let (gp, gz) = (-1.0 / g, -g);
        for i in 0..order / 2 {
            let theta = PI * (0.5 - (2 * i + 1) as f64 / n2);
            layout.add_conjugate_pairs(
                Complex64::from_polar(gp, theta),
                Complex64::from_polar(gz, theta),
            );
        }
        if order % 2 == 1 {
            layout.add_single(gp, gz);
        }
        layout.set_normal(PI, 1.0);
    }
}
