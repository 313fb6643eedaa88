//! Bilinear mapping from the analog plane to the digital plane.
//!
//! The analog design works in units of the sample rate, so the map is
//! `z = (2 + s) / (2 - s)`. Band edges are prewarped beforehand with
//! [`prewarp`] so they land exactly where requested.

use filtro_core::{Cascade, Complex64, FilterError, PoleZeroLayout, is_infinite};

pub use filtro_core::prewarp;

/// Maps one analog root to the z-plane. Infinity maps to Nyquist (`z = -1`).
pub fn s_to_z(s: Complex64) -> Complex64 {
    if is_infinite(s) {
        Complex64::new(-1.0, 0.0)
    } else {
        (2.0 + s) / (2.0 - s)
    }
}

/// Prewarped analog frequency for a digital angle in radians per sample.
pub fn prewarp_angle(w: f64) -> f64 {
    2.0 * libm::tan(0.5 * w)
}

/// Digital angle an analog frequency lands on.
pub fn unwarp(analog: f64) -> f64 {
    2.0 * libm::atan(0.5 * analog)
}

/// Maps an analog layout into the z-plane in place.
pub fn to_digital(layout: &mut PoleZeroLayout) {
    layout.map_roots(s_to_z);
}

/// Maps, orders, and realizes an analog layout into `cascade`.
///
/// Each pair becomes one section; the first section absorbs the gain that
/// makes the response match the layout's reference. Fails with
/// [`FilterError::NumericalFailure`] on non-finite coefficients, leaving
/// `cascade` cleared.
pub fn realize(layout: &mut PoleZeroLayout, cascade: &mut Cascade) -> Result<(), FilterError> {
    to_digital(layout);
    layout.sort_sections();
    cascade.set_layout(layout)
}
