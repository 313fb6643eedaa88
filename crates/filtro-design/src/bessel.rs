//! Bessel filters: maximally flat group delay.
//!
//! The prototype is normalized so the magnitude is -3 dB at the cutoff,
//! which puts its phase linearity slightly off unity frequency. The step
//! response barely overshoots, at the cost of a slow roll-off.

use filtro_core::FilterError;

use crate::pole_filter::BandShape;
use crate::prototype::Bessel;

pole_filter! {
    /// Bessel low-pass.
    LowPass
}

impl LowPass {
    /// Designs an order-`order` low-pass at `cutoff` Hz.
    pub fn setup(&mut self, order: usize, sample_rate: f64, cutoff: f64) -> Result<(), FilterError> {
        self.base
            .setup(&Bessel, order, sample_rate, BandShape::LowPass { cutoff })
    }
}

pole_filter! {
    /// Bessel high-pass.
    HighPass
}

impl HighPass {
    /// Designs an order-`order` high-pass at `cutoff` Hz.
    pub fn setup(&mut self, order: usize, sample_rate: f64, cutoff: f64) -> Result<(), FilterError> {
        self.base
            .setup(&Bessel, order, sample_rate, BandShape::HighPass { cutoff })
    }
}

pole_filter! {
    /// Bessel band-pass.
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
            &Bessel,
            order,
            sample_rate,
            BandShape::BandPass { center, width },
        )
    }
}

pole_filter! {
    /// Bessel band-stop.
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
            &Bessel,
            order,
            sample_rate,
            BandShape::BandStop { center, width },
        )
    }
}

/// [`Design`](filtro_core::Design) adapters for the Bessel shapes.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// Bessel low-pass: sample rate, order, frequency.
        LowPass(super::LowPass) {
            new(max_order: usize) => super::LowPass::new(max_order),
            kind: Kind::LowPass,
            name: "Bessel Low Pass",
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
        /// Bessel high-pass: sample rate, order, frequency.
        HighPass(super::HighPass) {
            new(max_order: usize) => super::HighPass::new(max_order),
            kind: Kind::HighPass,
            name: "Bessel High Pass",
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
        /// Bessel band-pass: sample rate, order, frequency, bandwidth.
        BandPass(super::BandPass) {
            new(max_order: usize) => super::BandPass::new(max_order),
            kind: Kind::BandPass,
            name: "Bessel Band Pass",
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
        /// Bessel band-stop: sample rate, order, frequency, bandwidth.
        BandStop(super::BandStop) {
            new(max_order: usize) => super::BandStop::new(max_order),
            kind: Kind::BandStop,
            name: "Bessel Band Stop",
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
