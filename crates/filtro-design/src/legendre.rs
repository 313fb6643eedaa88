//! Legendre (Optimum-L) filters: the steepest roll-off a monotonic
//! passband allows.
//!
//! Sits between Butterworth and Chebyshev I: no ripple, but a sharper knee
//! than Butterworth at the same order.

use filtro_core::FilterError;

use crate::pole_filter::BandShape;
use crate::prototype::Legendre;

pole_filter! {
    /// Legendre low-pass.
    LowPass
}

impl LowPass {
    /// Designs an order-`order` low-pass at `cutoff` Hz.
    pub fn setup(&mut self, order: usize, sample_rate: f64, cutoff: f64) -> Result<(), FilterError> {
        self.base
            .setup(&Legendre, order, sample_rate, BandShape::LowPass { cutoff })
    }
}

pole_filter! {
    /// Legendre high-pass.
    HighPass
}

impl HighPass {
    /// Designs an order-`order` high-pass at `cutoff` Hz.
    pub fn setup(&mut self, order: usize, sample_rate: f64, cutoff: f64) -> Result<(), FilterError> {
        self.base
            .setup(&Legendre, order, sample_rate, BandShape::HighPass { cutoff })
    }
}

pole_filter! {
    /// Legendre band-pass.
    BandPass
}

impl BandPass {
    /// Designs an order-`order` band-pass over `center ∓ width/2` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        center: f64,
        width: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &Legendre,
            order,
            sample_rate,
            BandShape::BandPass { center, width },
        )
    }
}

pole_filter! {
    /// Legendre band-stop.
    BandStop
}

impl BandStop {
    /// Designs an order-`order` band-stop over `center ∓ width/2` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        center: f64,
        width: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &Legendre,
            order,
            sample_rate,
            BandShape::BandStop { center, width },
        )
    }
}

/// [`Design`](filtro_core::Design) adapters for the Legendre shapes.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// Legendre low-pass: sample rate, order, frequency.
        LowPass(super::LowPass) {
            new(max_order: usize) => super::LowPass::new(max_order),
            kind: Kind::LowPass,
            name: "Legendre Low Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2])
            }
        }
    }

    design_class! {
        /// Legendre high-pass: sample rate, order, frequency.
        HighPass(super::HighPass) {
            new(max_order: usize) => super::HighPass::new(max_order),
            kind: Kind::HighPass,
            name: "Legendre High Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2])
            }
        }
    }

    design_class! {
        /// Legendre band-pass: sample rate, order, frequency, bandwidth.
        BandPass(super::BandPass) {
            new(max_order: usize) => super::BandPass::new(max_order),
            kind: Kind::BandPass,
            name: "Legendre Band Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }

    design_class! {
        /// Legendre band-stop: sample rate, order, frequency, bandwidth.
        BandStop(super::BandStop) {
            new(max_order: usize) => super::BandStop::new(max_order),
            kind: Kind::BandStop,
            name: "Legendre Band Stop",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::butterworth;
    use filtro_core::{RawFilter, linear_to_db};

    #[test]
    fn test_half_power_at_cutoff() {
        let mut f = LowPass::new(8);
        for order in 1..=8 {
            f.setup(order, 44100.0, 3000.0).unwrap();
            let db = linear_to_db(f.response(3000.0 / 44100.0).norm());
            assert!((db + 3.0103).abs() < 0.01, "order {order}: {db} dB");
            assert!((f.response(0.0).norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_steeper_than_butterworth() {
        let mut legendre = LowPass::new(5);
        legendre.setup(5, 44100.0, 1000.0).unwrap();
        let mut reference = butterworth::LowPass::new(5);
        reference.setup(5, 44100.0, 1000.0).unwrap();
        let probe = 2000.0 / 44100.0;
        assert!(legendre.response(probe).norm() < reference.response(probe).norm());
    }

    #[test]
    fn test_monotonic_passband() {
        let mut f = HighPass::new(4);
        f.setup(4, 48000.0, 1000.0).unwrap();
        let mags: Vec<f64> = (0..=100)
            .map(|i| f.response(0.5 * f64::from(i) / 100.0).norm())
            .collect();
        assert!(mags.windows(2).all(|w| w[1] + 1e-12 >= w[0]));
    }
}
