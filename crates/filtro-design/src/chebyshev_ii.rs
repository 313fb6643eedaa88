//! Chebyshev type II (inverse Chebyshev) filters: flat passband, equiripple stopband.
//!
//! The frequency control marks the stopband edge, where the response first
//! reaches `-stop_db`. The shelves keep the shelf band flat and put the
//! ripple on the other side of the corner.

use filtro_core::FilterError;

use crate::pole_filter::BandShape;
use crate::prototype::{ChebyshevII, ChebyshevIIShelf};

pole_filter! {
    /// Chebyshev II low-pass.
    LowPass
}

impl LowPass {
    /// Designs an order-`order` low-pass whose stopband starts at `cutoff` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevII { stop_db },
            order,
            sample_rate,
            BandShape::LowPass { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev II high-pass.
    HighPass
}

impl HighPass {
    /// Designs an order-`order` high-pass whose stopband ends at `cutoff` Hz.
    pub fn setup(
        &mut self,
        order: usize,
        sample_rate: f64,
        cutoff: f64,
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevII { stop_db },
            order,
            sample_rate,
            BandShape::HighPass { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev II band-pass.
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
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevII { stop_db },
            order,
            sample_rate,
            BandShape::BandPass { center, width },
        )
    }
}

pole_filter! {
    /// Chebyshev II band-stop.
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
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevII { stop_db },
            order,
            sample_rate,
            BandShape::BandStop { center, width },
        )
    }
}

pole_filter! {
    /// Chebyshev II low shelf.
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
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevIIShelf { gain_db, stop_db },
            order,
            sample_rate,
            BandShape::LowShelf { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev II high shelf.
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
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevIIShelf { gain_db, stop_db },
            order,
            sample_rate,
            BandShape::HighShelf { cutoff },
        )
    }
}

pole_filter! {
    /// Chebyshev II band shelf.
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
        stop_db: f64,
    ) -> Result<(), FilterError> {
        self.base.setup(
            &ChebyshevIIShelf { gain_db, stop_db },
            order,
            sample_rate,
            BandShape::BandShelf { center, width },
        )
    }
}

/// [`Design`](filtro_core::Design) adapters for the Chebyshev II shapes.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// Chebyshev II low-pass: sample rate, order, frequency, stopband.
        LowPass(super::LowPass) {
            new(max_order: usize) => super::LowPass::new(max_order),
            kind: Kind::LowPass,
            name: "Chebyshev II Low Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::stop_band(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }

    design_class! {
        /// Chebyshev II high-pass: sample rate, order, frequency, stopband.
        HighPass(super::HighPass) {
            new(max_order: usize) => super::HighPass::new(max_order),
            kind: Kind::HighPass,
            name: "Chebyshev II High Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::stop_band(),
            ],
            apply(params) {
                this.setup(params.order(1)?, params.sample_rate(), params[2], params[3])
            }
        }
    }

    design_class! {
        /// Chebyshev II band-pass: sample rate, order, frequency, bandwidth, stopband.
        BandPass(super::BandPass) {
            new(max_order: usize) => super::BandPass::new(max_order),
            kind: Kind::BandPass,
            name: "Chebyshev II Band Pass",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
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
        /// Chebyshev II band-stop: sample rate, order, frequency, bandwidth, stopband.
        BandStop(super::BandStop) {
            new(max_order: usize) => super::BandStop::new(max_order),
            kind: Kind::BandStop,
            name: "Chebyshev II Band Stop",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
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
        /// Chebyshev II low shelf: sample rate, order, frequency, gain, stopband.
        LowShelf(super::LowShelf) {
            new(max_order: usize) => super::LowShelf::new(max_order),
            kind: Kind::LowShelf,
            name: "Chebyshev II Low Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::gain(),
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
        /// Chebyshev II high shelf: sample rate, order, frequency, gain, stopband.
        HighShelf(super::HighShelf) {
            new(max_order: usize) => super::HighShelf::new(max_order),
            kind: Kind::HighShelf,
            name: "Chebyshev II High Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::gain(),
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
        /// Chebyshev II band shelf: sample rate, order, frequency, bandwidth, gain, stopband.
        BandShelf(super::BandShelf) {
            new(max_order: usize) => super::BandShelf::new(max_order),
            kind: Kind::BandShelf,
            name: "Chebyshev II Band Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::order(this.max_order()),
                ParamInfo::frequency(),
                ParamInfo::bandwidth_hz(),
                ParamInfo::gain(),
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
