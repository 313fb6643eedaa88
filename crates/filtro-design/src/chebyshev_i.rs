//! Chebyshev type I filters: equiripple passband, monotonic stopband.
//!
//! `ripple_db` is the peak-to-peak passband ripple. Even orders start the
//! passband at `-ripple_db` at DC; odd orders start at 0 dB. The shelves
//! confine the ripple to the shelf band, clamped below the shelf gain.

use filtro_core::FilterError;

use crate::pole_filter::BandShape;
use crate::prototype::{ChebyshevI, ChebyshevIShelf};

pole_filter! {
    /// Chebyshev I low-pass.
    LowPass
}

impl LowPass {
    /// Designs an order-`order` low-pass whose ripple band ends at `cutoff` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        ripple_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevI { ripple_db },
            order,
            sample_rate,
            BandShape::LowPass { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev I high-pass.
    HighPass
}

impl HighPass {
    /// Designs an order-`order` high-pass whose ripple band starts at `cutoff` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        ripple_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevI { ripple_db },
            order,
            sample_rate,
            BandShape::HighPass { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev I band-pass.
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
        ripple_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevI { ripple_db },
            order,
            sample_rate,
            BandShape::BandPass { center, width },
        )
    }
}

pole_filter! {
    /// Chebyshev I band-stop.
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
        ripple_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevI { ripple_db },
            order,
            sample_rate,
            BandShape::BandStop { center, width },
        )
    }
}

pole_filter! {
    /// Chebyshev I low shelf.
    LowShelf
}

impl LowShelf {
    /// Designs a shelf of `gain_db` below `cutoff` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        gain_db: f64,
        ripple_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevIShelf { gain_db, ripple_db },
            order,
            sample_rate,
            BandShape::LowShelf { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev I high shelf.
    HighShelf
}

impl HighShelf {
    /// Designs a shelf of `gain_db` above `cutoff` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        gain_db: f64,
        ripple_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevIShelf { gain_db, ripple_db },
            order,
            sample_rate,
            BandShape::HighShelf { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev I band shelf.
    BandShelf
}

impl BandShelf {
    /// Designs a band shelf of `gain_db` over `center ∓ width/2` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        center: f64,
        width: f64,
        gain_db: f64,
        ripple_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevIShelf { gain_db, ripple_db },
            order,
            sample_rate,
            BandShape::BandShelf { center, width },
        )
    }
}

/// [`Design`](filtro_core::Design) adapters for the Chebyshev I shapes.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// Chebyshev I low-pass: sample rate, order, frequency, ripple.
        LowPass(super::LowPass) {
            new(max_order: usize) => super::LowPass::new(max_order),
            kind: Kind::LowPass,
            name: "Chebyshev I Low Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::ripple(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }

    design_class! {
        /// Chebyshev I high-pass: sample rate, order, frequency, ripple.
        HighPass(super::HighPass) {
            new(max_order: usize) => super::HighPass::new(max_order),
            kind: Kind::HighPass,
            name: "Chebyshev I High Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::ripple(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }

    design_class! {
        /// Chebyshev I band-pass: sample rate, order, frequency, bandwidth, ripple.
        BandPass(super::BandPass) {
            new(max_order: usize) => super::BandPass::new(max_order),
            kind: Kind::BandPass,
            name: "Chebyshev I Band Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
                ParamInfo::ripple(),
            ],
            apply(params) {
                this.setup(
                    params.order(1)?,
                    params.sample_rate(),
                    params[2],
                    params[3],
                    params[4],
                )
            }
        }
    }

    design_class! {
        /// Chebyshev I band-stop: sample rate, order, frequency, bandwidth, ripple.
        BandStop(super::BandStop) {
            new(max_order: usize) => super::BandStop::new(max_order),
            kind: Kind::BandStop,
            name: "Chebyshev I Band Stop",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
                ParamInfo::ripple(),
            ],
            apply(params) {
                this.setup(
                    params.order(1)?,
                    params.sample_rate(),
                    params[2],
                    params[3],
                    params[4],
                )
            }
        }
    }

    design_class! {
        /// Chebyshev I low shelf: sample rate, order, frequency, gain, ripple.
        LowShelf(super::LowShelf) {
            new(max_order: usize) => super::LowShelf::new(max_order),
            kind: Kind::LowShelf,
            name: "Chebyshev I Low Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::gain(),
                ParamInfo::ripple(),
            ],
            apply(params) {
                this.setup(
                    params.order(1)?,
                    params.sample_rate(),
                    params[2],
                    params[3],
                    params[4],
                )
            }
        }
    }

    design_class! {
        /// Chebyshev I high shelf: sample rate, order, frequency, gain, ripple.
        HighShelf(super::HighShelf) {
            new(max_order: usize) => super::HighShelf::new(max_order),
            kind: Kind::HighShelf,
            name: "Chebyshev I High Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::gain(),
                ParamInfo::ripple(),
            ],
            apply(params) {
                this.setup(
                    params.order(1)?,
                    params.sample_rate(),
                    params[2],
                    params[3],
                    params[4],
                )
            }
        }
    }

    design_class! {
        /// Chebyshev I band shelf: sample rate, order, frequency, bandwidth, gain, ripple.
        BandShelf(super::BandShelf) {
            new(max_order: usize) => super::BandShelf::new(max_order),
            kind: Kind::BandShelf,
            name: "Chebyshev I Band Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
                ParamInfo::gain(),
                ParamInfo::ripple(),
            ],
            apply(params) {
                this.setup(
                    params.order(1)?,
                    params.sample_rate(),
                    params[2],
                    params[3],
                    params[4],
                    params[5],
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtro_core::{RawFilter, linear_to_db};

    #[test]
    fn test_passband_ripple_bounds() {
        let mut f = LowPass::new(6);
        for order in [3, 4, 5, 6] {
            f.setup(order, 44100.0, 2000.0, 1.0).unwrap();
            for i in 0..=50 {
                let freq = 2000.0 * f64::from(i) / 50.0 / 44100.0;
                let db = linear_to_db(f.response(freq).norm());
                assert!(db < 1e-6 && db > -1.0 - 1e-6, "order {order} at {freq}: {db} dB");
            }
            // The ripple band ends exactly at the cutoff.
            let edge = linear_to_db(f.response(2000.0 / 44100.0).norm());
            assert!((edge + 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_band_stop_scenario() {
        let mut f = BandStop::new(3);
        f.setup(3, 44100.0, 4000.0, 880.0, 1.0).unwrap();
        assert_eq!(f.num_stages(), 2);
        assert!(linear_to_db(f.response(4000.0 / 44100.0).norm()) < -1.0);
        assert!(linear_to_db(f.response(100.0 / 44100.0).norm()).abs() <= 1.0);
    }

    #[test]
    fn test_high_pass_stopband_falls() {
        let mut f = HighPass::new(4);
        f.setup(4, 48000.0, 1000.0, 0.5).unwrap();
        assert!(f.response(100.0 / 48000.0).norm() < 1e-3);
        assert!(f.response(0.0).norm() < 1e-9);
    }

    #[test]
    fn test_shelf_levels() {
        let mut f = LowShelf::new(4);
        f.setup(4, 44100.0, 500.0, 12.0, 0.5).unwrap();
        assert!((f.response(0.5).norm() - 1.0).abs() < 1e-9);
        let dc = linear_to_db(f.response(0.0).norm());
        assert!((dc - 12.0).abs() < 0.6, "{dc} dB");
    }
}
