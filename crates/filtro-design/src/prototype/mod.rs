//! Normalized analog prototypes.
//!
//! Every prototype writes a unity-cutoff low-pass (or low-shelf) layout in
//! the s-plane together with its gain reference. The reference frequency is
//! expressed as the digital angle it will land on after a low-pass mapping:
//! `0` for DC-referenced designs, `π` for designs referenced at `s = ∞`
//! (the shelves).
//!
//! | Prototype | Zeros | Reference |
//! |---|---|---|
//! | [`Butterworth`] | all at infinity | DC, 1 |
//! | [`ButterworthShelf`] | circle of radius `g` | ∞, 1 |
//! | [`ChebyshevI`] | all at infinity | DC, 1 or `10^{-r/20}` |
//! | [`ChebyshevIShelf`] | ripple ellipse | ∞, 1 |
//! | [`ChebyshevII`] | imaginary axis | DC, 1 |
//! | [`ChebyshevIIShelf`] | reciprocal ellipse | ∞, 1 |
//! | [`Elliptic`] | imaginary axis | DC, as Chebyshev I |
//! | [`Bessel`] | all at infinity | DC, 1 |
//! | [`Legendre`] | all at infinity | DC, 1 |
//! | [`CustomPrototype`] | caller's | caller's |

mod bessel;
mod butterworth;
mod chebyshev_i;
mod chebyshev_ii;
mod custom;
mod elliptic;
mod legendre;
pub(crate) mod roots;

pub use bessel::Bessel;
pub use butterworth::{Butterworth, ButterworthShelf};
pub use chebyshev_i::{ChebyshevI, ChebyshevIShelf};
pub use chebyshev_ii::{ChebyshevII, ChebyshevIIShelf};
pub use custom::CustomPrototype;
pub use elliptic::Elliptic;
pub use legendre::Legendre;

use filtro_core::{Complex64, FilterError, PoleZeroLayout};

/// Highest order any prototype supports.
///
/// Root finding and elliptic-function evaluation work in fixed-size arrays
/// of this length.
pub const MAX_ORDER: usize = 32;

/// A normalized analog low-pass or low-shelf design.
pub trait AnalogPrototype {
    /// Checks the prototype's own parameters (ripple, attenuation, gain).
    fn validate(&self) -> Result<(), FilterError> {
        Ok(())
    }

    /// Writes the order-`order` layout into `layout`, replacing its contents.
    ///
    /// `order` has been checked against the layout capacity and
    /// [`MAX_ORDER`]; [`validate`](Self::validate) has succeeded.
    fn design(&self, order: usize, layout: &mut PoleZeroLayout);
}

/// Splits `n` roots of a real polynomial into conjugate pairs and the leftover real root.
///
/// Roots are ordered by descending imaginary part, so the first `n / 2` are
/// the upper-half-plane representatives and, for odd `n`, the middle one is
/// the real root.
pub(crate) fn add_roots_with_zeros_at_infinity(
    roots: &mut [Complex64],
    layout: &mut PoleZeroLayout,
) {
    let infinity = filtro_core::infinity();
    roots.sort_unstable_by(|a, b| b.im.total_cmp(&a.im));
    let n = roots.len();
    for root in &roots[..n / 2] {
        layout.add_conjugate_pairs(*root, infinity);
    }
    if n % 2 == 1 {
        layout.add_single(roots[n / 2].re, f64::INFINITY);
    }
}
