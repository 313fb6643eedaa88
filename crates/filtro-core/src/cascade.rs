//! Ordered chain of biquad sections.
//!
//! A [`Cascade`] is the realized digital filter: the product of its sections'
//! transfer functions. Storage for the sections is reserved once, from the
//! maximum order the owning filter declares, so redesigning never allocates.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::biquad::BiquadCoefficients;
use crate::error::FilterError;
use crate::layout::{PoleZeroLayout, PoleZeroPair};
use crate::math::{Complex64, TWO_PI};

/// A fixed-capacity sequence of [`BiquadCoefficients`].
///
/// # Example
///
/// ```rust
/// use filtro_core::{BiquadCoefficients, Cascade};
///
/// let mut cascade = Cascade::for_order(4);
/// assert_eq!(cascade.max_stages(), 2);
/// cascade.set_single(BiquadCoefficients::new(0.5, 0.5, 0.0, 1.0, 0.0, 0.0));
/// assert_eq!(cascade.num_stages(), 1);
/// assert!((cascade.response(0.0).norm() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Cascade {
    stages: Vec<BiquadCoefficients>,
    max_stages: usize,
}

impl Cascade {
    /// Creates an empty cascade with room for `max_stages` sections.
    pub fn with_max_stages(max_stages: usize) -> Self {
        Self {
            stages: Vec::with_capacity(max_stages),
            max_stages,
        }
    }

    /// Creates an empty cascade able to realize filters up to `max_order`.
    pub fn for_order(max_order: usize) -> Self {
        Self::with_max_stages(max_order.div_ceil(2))
    }

    /// Maximum number of sections.
    pub fn max_stages(&self) -> usize {
        self.max_stages
    }

    /// Number of active sections.
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Section at `index`, if present.
    pub fn stage(&self, index: usize) -> Option<&BiquadCoefficients> {
        self.stages.get(index)
    }

    /// All active sections, in processing order.
    pub fn stages(&self) -> &[BiquadCoefficients] {
        &self.stages
    }

    /// Removes every section; an empty cascade passes its input through.
    pub fn clear(&mut self) {
        self.stages.clear();
    }

    /// Installs a single section.
    pub fn set_single(&mut self, coefficients: BiquadCoefficients) {
        debug_assert!(self.max_stages >= 1);
        self.stages.clear();
        self.stages.push(coefficients);
    }

    /// Realizes a digital pole/zero layout.
    ///
    /// Each pair becomes one section, in layout order. The first section's
    /// numerator is then scaled so the cascade's magnitude at the layout's
    /// gain reference equals its reference gain. On error the cascade is left
    /// cleared; callers that need the previous contents design into a
    /// staging cascade first.
    pub fn set_layout(&mut self, layout: &PoleZeroLayout) -> Result<(), FilterError> {
        if layout.len() > self.max_stages {
            return Err(FilterError::InvalidOrder {
                order: layout.num_poles(),
                max: 2 * self.max_stages,
            });
        }

        self.stages.clear();
        self.stages
            .extend(layout.pairs().iter().map(BiquadCoefficients::from_pair));

        let magnitude = self.response(layout.normal_w() / TWO_PI).norm();
        let scale = layout.normal_gain() / magnitude;
        self.apply_scale(scale);

        if self.is_finite() {
            Ok(())
        } else {
            self.stages.clear();
            Err(FilterError::NumericalFailure)
        }
    }

    /// Scales the overall gain through the first section.
    pub fn apply_scale(&mut self, scale: f64) {
        if let Some(first) = self.stages.first_mut() {
            first.apply_scale(scale);
        }
    }

    /// Complex response at a normalized frequency in cycles per sample.
    pub fn response(&self, normalized_frequency: f64) -> Complex64 {
        self.stages
            .iter()
            .fold(Complex64::new(1.0, 0.0), |acc, stage| {
                acc * stage.response(normalized_frequency)
            })
    }

    /// Poles and zeros of every section.
    pub fn pole_zeros(&self) -> Vec<PoleZeroPair> {
        self.stages.iter().map(BiquadCoefficients::pole_zeros).collect()
    }

    /// Copies another cascade's sections without reallocating.
    pub fn copy_from(&mut self, other: &Cascade) {
        debug_assert!(other.num_stages() <= self.max_stages);
        self.stages.clear();
        self.stages.extend_from_slice(&other.stages);
    }

    /// Overwrites `self` with the coefficient-wise blend of `from` and `to`.
    ///
    /// Cascades with different section counts are blended against the
    /// identity section, so the result has the larger of the two counts.
    pub fn lerp_from(&mut self, from: &Cascade, to: &Cascade, t: f64) {
        let count = from.num_stages().max(to.num_stages());
        debug_assert!(count <= self.max_stages);
        self.stages.clear();
        for i in 0..count {
            let a = from.stages.get(i).unwrap_or(&BiquadCoefficients::IDENTITY);
            let b = to.stages.get(i).unwrap_or(&BiquadCoefficients::IDENTITY);
            self.stages.push(BiquadCoefficients::lerp(a, b, t));
        }
    }

    /// Returns `true` if every coefficient of every section is finite.
    pub fn is_finite(&self) -> bool {
        self.stages.iter().all(BiquadCoefficients::is_finite)
    }

    /// Returns `true` if every section's poles lie inside the unit circle.
    pub fn is_stable(&self) -> bool {
        self.stages.iter().all(BiquadCoefficients::is_stable)
    }
}

impl PartialEq for Cascade {
    fn eq(&self, other: &Self) -> bool {
        self.stages == other.stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    fn two_pole_layout() -> PoleZeroLayout {
        let mut layout = PoleZeroLayout::with_max_poles(3);
        layout.add_conjugate_pairs(Complex64::from_polar(0.8, 0.4), Complex64::new(-1.0, 0.0));
        layout.add_single(0.3, -1.0);
        layout
    }

    #[test]
    fn test_set_layout_normalizes_dc() {
        let mut cascade = Cascade::for_order(3);
        cascade.set_layout(&two_pole_layout()).unwrap();
        assert_eq!(cascade.num_stages(), 2);
        assert!((cascade.response(0.0).norm() - 1.0).abs() < 1e-12);
        assert!(cascade.stages().iter().all(|s| s.a0() == 1.0));
    }

    #[test]
    fn test_set_layout_normalizes_at_reference() {
        let mut layout = two_pole_layout();
        layout.set_normal(PI / 2.0, 0.5);
        let mut cascade = Cascade::for_order(3);
        cascade.set_layout(&layout).unwrap();
        assert!((cascade.response(0.25).norm() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_set_layout_rejects_overflow() {
        let mut cascade = Cascade::for_order(2);
        let err = cascade.set_layout(&two_pole_layout()).unwrap_err();
        assert!(matches!(err, FilterError::InvalidOrder { .. }));
    }

    #[test]
    fn test_set_layout_reference_on_zero_fails() {
        let mut layout = PoleZeroLayout::with_max_poles(1);
        layout.add_single(0.5, 1.0);
        // zero at DC, reference at DC
        let mut cascade = Cascade::for_order(1);
        assert_eq!(cascade.set_layout(&layout), Err(FilterError::NumericalFailure));
        assert_eq!(cascade.num_stages(), 0);
    }

    #[test]
    fn test_pole_zeros_match_layout() {
        let mut cascade = Cascade::for_order(3);
        cascade.set_layout(&two_pole_layout()).unwrap();
        let pz = cascade.pole_zeros();
        assert_eq!(pz.len(), 2);
        assert!((pz[0].poles.first() - Complex64::from_polar(0.8, 0.4)).norm() < 1e-9);
        assert!(pz[1].is_single());
    }

    #[test]
    fn test_lerp_pads_with_identity() {
        let mut long = Cascade::for_order(4);
        long.set_layout(&two_pole_layout()).unwrap();
        let short = Cascade::for_order(4);
        let mut out = Cascade::for_order(4);
        out.lerp_from(&long, &short, 1.0);
        assert_eq!(out.num_stages(), 2);
        assert!(out.stages().iter().all(|s| *s == BiquadCoefficients::IDENTITY));
    }
}
