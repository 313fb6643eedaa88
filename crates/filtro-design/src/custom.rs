//! Filters built from caller-supplied poles and zeros.
//!
//! [`CustomLayout`] sends an analog layout through the regular band mapping
//! and bilinear pipeline. [`OnePole`] and [`TwoPole`] place digital roots
//! directly and skip design entirely.

use filtro_core::{BiquadCoefficients, Cascade, Complex64, FilterError, PoleZeroLayout};

use crate::pole_filter::BandShape;
use crate::prototype::CustomPrototype;
use crate::validate;

pole_filter! {
    /// An arbitrary analog layout mapped like any other prototype.
    CustomLayout
}

impl CustomLayout {
    /// Maps `layout` (unity-cutoff, `s`-plane) to `shape` and installs it.
    ///
    /// The layout's own pole count sets the order; band shapes double it.
    /// Poles must lie in the left half plane for a stable result.
    pub fn setup(
        &mut self,
        layout: &PoleZeroLayout,
        sample_rate: f64,
        shape: BandShape,
    ) -> Result<(), FilterError> {
        let poles = layout.num_poles();
        let order = if shape.is_band() { 2 * poles } else { poles };
        self.base
            .setup(&CustomPrototype(layout), order, sample_rate, shape)
    }
}

fn install(cascade: &mut Cascade, coefficients: BiquadCoefficients) -> Result<(), FilterError> {
    if !coefficients.is_finite() {
        return Err(FilterError::NumericalFailure);
    }
    cascade.set_single(coefficients);
    Ok(())
}

fn inside_unit_circle(name: &'static str, radius: f64) -> Result<(), FilterError> {
    validate::finite(name, radius)?;
    if radius.abs() < 1.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidParameter {
            name,
            value: radius,
        })
    }
}

/// First-order section with one real pole and one real zero.
#[derive(Debug, Clone)]
pub struct OnePole {
    cascade: Cascade,
}

impl OnePole {
    /// Creates an unconfigured (passthrough) section.
    pub fn new() -> Self {
        Self {
            cascade: Cascade::with_max_stages(1),
        }
    }

    /// `H(z) = scale · (1 − zero·z⁻¹) / (1 − pole·z⁻¹)`.
    pub fn setup(&mut self, scale: f64, pole: f64, zero: f64) -> Result<(), FilterError> {
        validate::finite("scale", scale)?;
        validate::finite("zero", zero)?;
        inside_unit_circle("pole", pole)?;
        let mut c = BiquadCoefficients::IDENTITY;
        c.set_one_pole(pole, zero);
        c.apply_scale(scale);
        install(&mut self.cascade, c)
    }
}

impl Default for OnePole {
    fn default() -> Self {
        Self::new()
    }
}

impl filtro_core::RawFilter for OnePole {
    fn cascade(&self) -> &Cascade {
        &self.cascade
    }
}

/// Second-order section with a conjugate pole pair and a conjugate zero pair.
#[derive(Debug, Clone)]
pub struct TwoPole {
    cascade: Cascade,
}

impl TwoPole {
    /// Creates an unconfigured (passthrough) section.
    pub fn new() -> Self {
        Self {
            cascade: Cascade::with_max_stages(1),
        }
    }

    /// Poles at `pole_rho·e^{±j·pole_theta}`, zeros at `zero_rho·e^{±j·zero_theta}`,
    /// numerator scaled by `scale`.
    pub fn setup(
        &mut self,
        scale: f64,
        pole_rho: f64,
        pole_theta: f64,
        zero_rho: f64,
        zero_theta: f64,
    ) -> Result<(), FilterError> {
        validate::finite("scale", scale)?;
        inside_unit_circle("pole radius", pole_rho)?;
        validate::finite("pole angle", pole_theta)?;
        validate::finite("zero radius", zero_rho)?;
        validate::finite("zero angle", zero_theta)?;

        let pole = Complex64::from_polar(pole_rho, pole_theta);
        let zero = Complex64::from_polar(zero_rho, zero_theta);
        let mut c = BiquadCoefficients::IDENTITY;
        c.set_two_pole(pole, zero, pole.conj(), zero.conj());
        c.apply_scale(scale);
        install(&mut self.cascade, c)
    }
}

impl Default for TwoPole {
    fn default() -> Self {
        Self::new()
    }
}

impl filtro_core::RawFilter for TwoPole {
    fn cascade(&self) -> &Cascade {
        &self.cascade
    }
}

/// [`Design`](filtro_core::Design) adapters for the digital custom sections.
pub mod design {
    use filtro_core::{Kind, ParamInfo};

    design_class! {
        /// One-pole section: sample rate, scale, pole, zero.
        OnePole(super::OnePole) {
            new() => super::OnePole::new(),
            kind: Kind::Other,
            name: "Custom One Pole",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::scale(),
                ParamInfo::pole_real(),
                ParamInfo::zero_real(),
            ],
            apply(params) {
                this.setup(params[1], params[2], params[3])
            }
        }
    }

    design_class! {
        /// Two-pole section: sample rate, scale, pole radius and angle, zero radius and angle.
        TwoPole(super::TwoPole) {
            new() => super::TwoPole::new(),
            kind: Kind::Other,
            name: "Custom Two Pole",
            params(this): [
                ParamInfo::sample_rate(),
                ParamInfo::scale(),
                ParamInfo::pole_rho(),
                ParamInfo::pole_theta(),
                ParamInfo::zero_rho(),
                ParamInfo::zero_theta(),
            ],
            apply(params) {
                this.setup(params[1], params[2], params[3], params[4], params[5])
            }
        }
    }
}
