//! Elliptic (Cauer) filters: equiripple in both passband and stopband.
//!
//! For a given order these have the narrowest transition band of any family.
//! The cutoff is the passband edge; the stopband starts wherever the degree
//! equation puts it for the requested ripple and attenuation.

use filtro_core::FilterError;

use crate::pole_filter::BandShape;
use crate::prototype::Elliptic;

pole_filter! {
    /// Elliptic low-pass, passband edge at the cutoff.
    LowPass
}

impl LowPass {
    /// Designs an order-`order` low-pass with `ripple_db` of passband ripple up to
    /// `cutoff` Hz and at least `stop_db` of attenuation past the transition band.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        ripple_db: f64,
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &Elliptic { ripple_db, stop_db },
            order,
            sample_rate,
            BandShape::LowPass { cutoff },
        )
    }
}

pole_filter! {
    /// Elliptic high-pass.
    HighPass
}

impl HighPass {
    /// Designs an order-`order` high-pass at `cutoff` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        ripple_db: f64,
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &Elliptic { ripple_db, stop_db },
            order,
            sample_rate,
            BandShape::HighPass { cutoff },
        )
    }
}

pole_filter! {
    /// Elliptic band-pass.
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
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &Elliptic { ripple_db, stop_db },
            order,
            sample_rate,
            BandShape::BandPass { center, width },
        )
    }
}

pole_filter! {
    /// Elliptic band-stop.
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
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &Elliptic { ripple_db, stop_db },
            order,
            sample_rate,
            BandShape::BandStop { center, width },
        )
    }
}

/// [`Design`](filtro_core::Design) adapters for the Elliptic shapes.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// Elliptic low-pass: sample rate, order, frequency, ripple, stopband.
        LowPass(super::LowPass) {
            new(max_order: usize) => super::LowPass::new(max_order),
            kind: Kind::LowPass,
            name: "Elliptic Low Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::ripple(),
                ParamInfo::stop_band(),
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
        /// Elliptic high-pass: sample rate, order, frequency, ripple, stopband.
        HighPass(super::HighPass) {
            new(max_order: usize) => super::HighPass::new(max_order),
            kind: Kind::HighPass,
            name: "Elliptic High Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::ripple(),
                ParamInfo::stop_band(),
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
        /// Elliptic band-pass: sample rate, order, frequency, bandwidth, ripple, stopband.
        BandPass(super::BandPass) {
            new(max_order: usize) => super::BandPass::new(max_order),
            kind: Kind::BandPass,
            name: "Elliptic Band Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
                ParamInfo::ripple(),
                ParamInfo::stop_band(),
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

    design_class! {
        /// Elliptic band-stop: sample rate, order, frequency, bandwidth, ripple, stopband.
        BandStop(super::BandStop) {
            new(max_order: usize) => super::BandStop::new(max_order),
            kind: Kind::BandStop,
            name: "Elliptic Band Stop",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
                ParamInfo::ripple(),
                ParamInfo::stop_band(),
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
