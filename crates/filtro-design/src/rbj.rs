//! Robert Bristow-Johnson's audio EQ cookbook biquads.
//!
//! Every filter here is a single second-order section computed in closed
//! form from `w0 = 2π·f/f_s`. Coefficients are checked for finiteness
//! before they replace the installed section, so a rejected setup leaves
//! the previous response in place.
//!
//! | Filter | Shape | Controls |
//! |---|---|---|
//! | [`LowPass`] / [`HighPass`] | 12 dB/oct | cutoff, Q |
//! | [`BandPass1`] | constant skirt, peak gain Q | centre, Q |
//! | [`BandPass2`] | constant 0 dB peak | centre, Q |
//! | [`BandStop`] | notch | centre, Q |
//! | [`LowShelf`] / [`HighShelf`] | shelf | corner, gain dB, slope |
//! | [`BandShelf`] | peaking EQ | centre, gain dB, bandwidth (octaves) |
//! | [`AllPass`] | flat magnitude | centre, Q |

use core::f64::consts::LN_2;

use filtro_core::{BiquadCoefficients, Cascade, FilterError, TWO_PI};

use crate::validate;

macro_rules! rbj_filter {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            cascade: Cascade,
        }

        impl $name {
            /// Creates an unconfigured (passthrough) filter.
            pub fn new() -> Self {
                Self {
                    cascade: Cascade::with_max_stages(1),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl filtro_core::RawFilter for $name {
            fn cascade(&self) -> &Cascade {
                &self.cascade
            }
        }
    };
}

/// `cos(w0)`, `sin(w0)` after validating the sample rate and frequency.
fn angle(sample_rate: f64, frequency: f64) -> Result<(f64, f64, f64), FilterError> {
    validate::sample_rate(sample_rate)?;
    validate::frequency(frequency, sample_rate)?;
    let w0 = TWO_PI * frequency / sample_rate;
    Ok((w0, libm::cos(w0), libm::sin(w0)))
}

/// Installs `coefficients` unless any of them is non-finite.
fn install(cascade: &mut Cascade, coefficients: BiquadCoefficients) -> Result<(), FilterError> {
    if !coefficients.is_finite() {
        return Err(FilterError::NumericalFailure);
    }
    cascade.set_single(coefficients);
    Ok(())
}

/// `sin(w0) / 2Q`, the cookbook's `α` for Q-controlled shapes.
fn alpha_q(sn: f64, q: f64) -> Result<f64, FilterError> {
    validate::positive("Q", q)?;
    Ok(sn / (2.0 * q))
}

/// Shelf amplitude `A = 10^(gain/40)`.
fn shelf_amplitude(gain_db: f64) -> Result<f64, FilterError> {
    validate::finite("gain", gain_db)?;
    Ok(libm::pow(10.0, gain_db / 40.0))
}

/// Shelf `α` from the slope `S`; `S = 1` is the steepest monotonic shelf.
fn alpha_slope(sn: f64, a: f64, slope: f64) -> Result<f64, FilterError> {
    validate::positive("slope", slope)?;
    let radicand = (a + 1.0 / a) * (1.0 / slope - 1.0) + 2.0;
    if radicand < 0.0 {
        return Err(FilterError::InvalidParameter {
            name: "slope",
            value: slope,
        });
    }
    Ok(0.5 * sn * libm::sqrt(radicand))
}

rbj_filter! {
    /// Second-order low-pass.
    LowPass
}

impl LowPass {
    /// Designs the low-pass with cutoff `cutoff` Hz and resonance `q`.
    pub fn setup(&mut self, sample_rate: f64, cutoff: f64, q: f64) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, cutoff)?;
        let al = alpha_q(sn, q)?;
        let b1 = 1.0 - cs;
        let b0 = 0.5 * b1;
        install(
            &mut self.cascade,
            BiquadCoefficients::new(b0, b1, b0, 1.0 + al, -2.0 * cs, 1.0 - al),
        )
    }
}

rbj_filter! {
    /// Second-order high-pass.
    HighPass
}

impl HighPass {
    /// Designs the high-pass with cutoff `cutoff` Hz and resonance `q`.
    pub fn setup(&mut self, sample_rate: f64, cutoff: f64, q: f64) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, cutoff)?;
        let al = alpha_q(sn, q)?;
        let b1 = -(1.0 + cs);
        let b0 = -0.5 * b1;
        install(
            &mut self.cascade,
            BiquadCoefficients::new(b0, b1, b0, 1.0 + al, -2.0 * cs, 1.0 - al),
        )
    }
}

rbj_filter! {
    /// Band-pass with constant skirt gain; the peak gain equals Q.
    BandPass1
}

impl BandPass1 {
    /// Designs the band-pass around `center` Hz.
    pub fn setup(&mut self, sample_rate: f64, center: f64, q: f64) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, center)?;
        let al = alpha_q(sn, q)?;
        let b0 = 0.5 * sn;
        install(
            &mut self.cascade,
            BiquadCoefficients::new(b0, 0.0, -b0, 1.0 + al, -2.0 * cs, 1.0 - al),
        )
    }
}

rbj_filter! {
    /// Band-pass with a constant 0 dB peak.
    BandPass2
}

impl BandPass2 {
    /// Designs the band-pass around `center` Hz.
    pub fn setup(&mut self, sample_rate: f64, center: f64, q: f64) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, center)?;
        let al = alpha_q(sn, q)?;
        install(
            &mut self.cascade,
            BiquadCoefficients::new(al, 0.0, -al, 1.0 + al, -2.0 * cs, 1.0 - al),
        )
    }
}

rbj_filter! {
    /// Notch.
    BandStop
}

impl BandStop {
    /// Designs the notch at `center` Hz.
    pub fn setup(&mut self, sample_rate: f64, center: f64, q: f64) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, center)?;
        let al = alpha_q(sn, q)?;
        install(
            &mut self.cascade,
            BiquadCoefficients::new(1.0, -2.0 * cs, 1.0, 1.0 + al, -2.0 * cs, 1.0 - al),
        )
    }
}

rbj_filter! {
    /// Low shelf.
    LowShelf
}

impl LowShelf {
    /// Designs a shelf of `gain_db` below `cutoff` Hz.
    pub fn setup(
        &mut self,
        sample_rate: f64,
        cutoff: f64,
        gain_db: f64,
        slope: f64,
    ) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, cutoff)?;
        let a = shelf_amplitude(gain_db)?;
        let sq = 2.0 * libm::sqrt(a) * alpha_slope(sn, a, slope)?;
        let (ap, am) = (a + 1.0, a - 1.0);
        install(
            &mut self.cascade,
            BiquadCoefficients::new(
                a * (ap - am * cs + sq),
                2.0 * a * (am - ap * cs),
                a * (ap - am * cs - sq),
                ap + am * cs + sq,
                -2.0 * (am + ap * cs),
                ap + am * cs - sq,
            ),
        )
    }
}

rbj_filter! {
    /// High shelf.
    HighShelf
}

impl HighShelf {
    /// Designs a shelf of `gain_db` above `cutoff` Hz.
    pub fn setup(
        &mut self,
        sample_rate: f64,
        cutoff: f64,
        gain_db: f64,
        slope: f64,
    ) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, cutoff)?;
        let a = shelf_amplitude(gain_db)?;
        let sq = 2.0 * libm::sqrt(a) * alpha_slope(sn, a, slope)?;
        let (ap, am) = (a + 1.0, a - 1.0);
        install(
            &mut self.cascade,
            BiquadCoefficients::new(
                a * (ap + am * cs + sq),
                -2.0 * a * (am + ap * cs),
                a * (ap + am * cs - sq),
                ap - am * cs + sq,
                2.0 * (am - ap * cs),
                ap - am * cs - sq,
            ),
        )
    }
}

rbj_filter! {
    /// Peaking band shelf.
    BandShelf
}

impl BandShelf {
    /// Designs a bell of `gain_db` at `center` Hz, `bandwidth` octaves wide.
    pub fn setup(
        &mut self,
        sample_rate: f64,
        center: f64,
        gain_db: f64,
        bandwidth: f64,
    ) -> Result<(), FilterError> {
        let (w0, cs, sn) = angle(sample_rate, center)?;
        let a = shelf_amplitude(gain_db)?;
        validate::positive("bandwidth", bandwidth)?;
        let al = sn * libm::sinh(0.5 * LN_2 * bandwidth * w0 / sn);
        install(
            &mut self.cascade,
            BiquadCoefficients::new(
                1.0 + al * a,
                -2.0 * cs,
                1.0 - al * a,
                1.0 + al / a,
                -2.0 * cs,
                1.0 - al / a,
            ),
        )
    }
}

rbj_filter! {
    /// Second-order all-pass.
    AllPass
}

impl AllPass {
    /// Designs the all-pass with its 180° phase point at `center` Hz.
    pub fn setup(&mut self, sample_rate: f64, center: f64, q: f64) -> Result<(), FilterError> {
        let (_, cs, sn) = angle(sample_rate, center)?;
        let al = alpha_q(sn, q)?;
        install(
            &mut self.cascade,
            BiquadCoefficients::new(1.0 - al, -2.0 * cs, 1.0 + al, 1.0 + al, -2.0 * cs, 1.0 - al),
        )
    }
}

/// [`Design`](filtro_core::Design) adapters for the cookbook filters.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// RBJ low-pass: sample rate, frequency, Q.
        LowPass(super::LowPass) {
            new() => super::LowPass::new(),
            kind: Kind::LowPass,
            name: "RBJ Low Pass",
            params(this): [ParamInfo::sample_rate(), ParamInfo::frequency(), ParamInfo::q()],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2])
            }
        }
    }

    design_class! {
        /// RBJ high-pass: sample rate, frequency, Q.
        HighPass(super::HighPass) {
            new() => super::HighPass::new(),
            kind: Kind::HighPass,
            name: "RBJ High Pass",
            params(this): [ParamInfo::sample_rate(), ParamInfo::frequency(), ParamInfo::q()],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2])
            }
        }
    }

    design_class! {
        /// RBJ constant-skirt band-pass: sample rate, frequency, Q.
        BandPass1(super::BandPass1) {
            new() => super::BandPass1::new(),
            kind: Kind::BandPass,
            name: "RBJ Band Pass 1",
            params(this): [ParamInfo::sample_rate(), ParamInfo::frequency(), ParamInfo::q()],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2])
            }
        }
    }

    design_class! {
        /// RBJ 0 dB peak band-pass: sample rate, frequency, Q.
        BandPass2(super::BandPass2) {
            new() => super::BandPass2::new(),
            kind: Kind::BandPass,
            name: "RBJ Band Pass 2",
            params(this): [ParamInfo::sample_rate(), ParamInfo::frequency(), ParamInfo::q()],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2])
            }
        }
    }

    design_class! {
        /// RBJ notch: sample rate, frequency, Q.
        BandStop(super::BandStop) {
            new() => super::BandStop::new(),
            kind: Kind::BandStop,
            name: "RBJ Band Stop",
            params(this): [ParamInfo::sample_rate(), ParamInfo::frequency(), ParamInfo::q()],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2])
            }
        }
    }

    design_class! {
        /// RBJ low shelf: sample rate, frequency, gain, slope.
        LowShelf(super::LowShelf) {
            new() => super::LowShelf::new(),
            kind: Kind::LowShelf,
            name: "RBJ Low Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::frequency(),
                ParamInfo::gain(),
                ParamInfo::slope(),
            ],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2], params[3])
            }
        }
    }

    design_class! {
        /// RBJ high shelf: sample rate, frequency, gain, slope.
        HighShelf(super::HighShelf) {
            new() => super::HighShelf::new(),
            kind: Kind::HighShelf,
            name: "RBJ High Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::frequency(),
                ParamInfo::gain(),
                ParamInfo::slope(),
            ],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2], params[3])
            }
        }
    }

    design_class! {
        /// RBJ peaking shelf: sample rate, frequency, gain, bandwidth in octaves.
        BandShelf(super::BandShelf) {
            new() => super::BandShelf::new(),
            kind: Kind::BandShelf,
            name: "RBJ Band Shelf",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::frequency(),
                ParamInfo::gain(),
                ParamInfo::bandwidth(),
            ],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2], params[3])
            }
        }
    }

    design_class! {
        /// RBJ all-pass: sample rate, frequency, Q.
        AllPass(super::AllPass) {
            new() => super::AllPass::new(),
            kind: Kind::AllPass,
            name: "RBJ All Pass",
            params(this): [ParamInfo::sample_rate(), ParamInfo::frequency(), ParamInfo::q()],
            apply(params) {
                this.setup(params.sample_rate(), params[1], params[2])
            }
        }
    }
}
