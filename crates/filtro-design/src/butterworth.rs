//! Butterworth filters: maximally flat passband, monotonic response.
//!
//! Every shape is the same prototype pushed through a different band
//! mapping; the shelves use [`ButterworthShelf`], whose poles and zeros sit
//! on circles of radius `1/g` and `g`.

use filtro_core::FilterError;

use crate::pole_filter::BandShape;
use crate::prototype::{Butterworth, ButterworthShelf};

pole_filter! {
    /// Butterworth low-pass, -3 dB at the cutoff.
    LowPass
}

impl LowPass {
    /// Designs an order-`order` low-pass at `cutoff` Hz.
    pub fn setup(&mut self, order: usize, sample_rate: f64, cutoff: f64) -> Result<(), FilterError> {
        self.base
            .setup(&Butterworth, order, sample_rate, BandShape::LowPass { cutoff })
    }
}

pole_filter! {
    /// Butterworth high-pass, -3 dB at the cutoff.
    HighPass
}

impl HighPass {
    /// Designs an order-`order` high-pass at `cutoff` Hz.
    pub fn setup(&mut self, order: usize, sample_rate: f64, cutoff: f64) -> Result<(), FilterError> {
        self.base
            .setup(&Butterworth, order, sample_rate, BandShape::HighPass { cutoff })
    }
}

pole_filter! {
    /// Butterworth band-pass.
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
            &Butterworth,
            order,
            sample_rate,
            BandShape::BandPass { center, width },
        )
    }
}

pole_filter! {
    /// Butterworth band-stop.
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
            &Butterworth,
            order,
            sample_rate,
            BandShape::BandStop { center, width },
        )
    }
}

pole_filter! {
    /// Butterworth low shelf.
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
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ButterworthShelf { gain_db },
            order,
            sample_rate,
            BandShape::LowShelf { cutoff },
        )
    }
}

pole_filter! {
    /// Butterworth high shelf.
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
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ButterworthShelf { gain_db },
            order,
            sample_rate,
            BandShape::HighShelf { cutoff },
        )
    }
}

pole_filter! {
    /// Butterworth band shelf: `gain_db` inside the band, unity outside.
    BandShelf
}

impl BandShelf {
    /// Designs a band shelf over `center ∓ width/2` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        center: f64,
        width: f64,
        gain_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ButterworthShelf { gain_db },
            order,
            sample_rate,
            BandShape::BandShelf { center, width },
        )
    }
}

/// [`Design`](filtro_core::Design) adapters for the Butterworth shapes.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// Butterworth low-pass: sample rate, order, frequency.
        LowPass(super::LowPass) {
            new(max_order: usize) => super::LowPass::new(max_order),
            kind: Kind::LowPass,
            name: "Butterworth Low Pass",
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
        /// Butterworth high-pass: sample rate, order, frequency.
        HighPass(super::HighPass) {
            new(max_order: usize) => super::HighPass::new(max_order),
            kind: Kind::HighPass,
            name: "Butterworth High Pass",
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
        /// Butterworth band-pass: sample rate, order, frequency, bandwidth.
        BandPass(super::BandPass) {
            new(max_order: usize) => super::BandPass::new(max_order),
            kind: Kind::BandPass,
            name: "Butterworth Band Pass",
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
        /// Butterworth band-stop: sample rate, order, frequency, bandwidth.
        BandStop(super::BandStop) {
            new(max_order: usize) => super::BandStop::new(max_order),
            kind: Kind::BandStop,
            name: "Butterworth Band Stop",
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
        /// Butterworth low shelf: sample rate, order, frequency, gain.
        LowShelf(super::LowShelf) {
            new(max_order: usize) => super::LowShelf::new(max_order),
            kind: Kind::LowShelf,
            name: "Butterworth Low Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::gain(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }

    design_class! {
        /// Butterworth high shelf: sample rate, order, frequency, gain.
        HighShelf(super::HighShelf) {
            new(max_order: usize) => super::HighShelf::new(max_order),
            kind: Kind::HighShelf,
            name: "Butterworth High Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::gain(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }

    design_class! {
        /// Butterworth band shelf: sample rate, order, frequency, bandwidth, gain.
        BandShelf(super::BandShelf) {
            new(max_order: usize) => super::BandShelf::new(max_order),
            kind: Kind::BandShelf,
            name: "Butterworth Band Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
                ParamInfo::gain(),
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::BandEdges;
    use filtro_core::{RawFilter, TWO_PI, db_to_linear, linear_to_db};

    /// Normalized frequency the analog band centre lands on.
    fn band_centre(center: f64, width: f64, sample_rate: f64) -> f64 {
        BandEdges::new(center, width, sample_rate)
            .unwrap()
            .geometric_center()
            / TWO_PI
    }

    #[test]
    fn test_low_pass_half_power_at_cutoff() {
        let mut f = LowPass::new(8);
        for order in 1..=8 {
            f.setup(order, 44100.0, 1000.0).unwrap();
            let db = linear_to_db(f.response(1000.0 / 44100.0).norm());
            assert!((db + 3.0103).abs() < 0.05, "order {order}: {db} dB");
            assert!((f.response(0.0).norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_high_pass_half_power_at_cutoff() {
        let mut f = HighPass::new(5);
        f.setup(5, 48000.0, 3000.0).unwrap();
        let db = linear_to_db(f.response(3000.0 / 48000.0).norm());
        assert!((db + 3.0103).abs() < 0.05);
        assert!((f.response(0.5).norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_pass_unity_at_centre() {
        let mut f = BandPass::new(6);
        f.setup(6, 44100.0, 2000.0, 400.0).unwrap();
        assert_eq!(f.num_stages(), 3);
        let peak = f.response(band_centre(2000.0, 400.0, 44100.0));
        assert!((peak.norm() - 1.0).abs() < 1e-9);
        assert!(f.response(0.0).norm() < 1e-9);
        assert!(f.response(0.5).norm() < 1e-9);
    }

    #[test]
    fn test_band_stop_rejects_centre() {
        let mut f = BandStop::new(4);
        f.setup(4, 44100.0, 5000.0, 1000.0).unwrap();
        assert!(f.response(band_centre(5000.0, 1000.0, 44100.0)).norm() < 1e-9);
        assert!(f.response(5000.0 / 44100.0).norm() < 0.01);
        assert!((f.response(0.0).norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_shelf_gains() {
        let mut low = LowShelf::new(4);
        low.setup(4, 44100.0, 300.0, 6.0).unwrap();
        assert!((low.response(0.0).norm() - db_to_linear(6.0)).abs() < 1e-6);
        assert!((low.response(0.5).norm() - 1.0).abs() < 1e-9);

        let mut high = HighShelf::new(3);
        high.setup(3, 44100.0, 5000.0, -12.0).unwrap();
        assert!((high.response(0.5).norm() - db_to_linear(-12.0)).abs() < 1e-6);
        assert!((high.response(0.0).norm() - 1.0).abs() < 1e-9);

        let mut band = BandShelf::new(4);
        band.setup(4, 44100.0, 3000.0, 1000.0, 9.0).unwrap();
        assert!((band.response(0.5).norm() - 1.0).abs() < 1e-9);
        let centre = band.response(band_centre(3000.0, 1000.0, 44100.0)).norm();
        assert!((centre - db_to_linear(9.0)).abs() < 1e-6);
    }
}
