//! Property-based tests for filtro-design.
//!
//! Randomized orders, frequencies and shape parameters across families,
//! checking stability, section counts and gain references. Orders run up to
//! [`MAX_ORDER`] and frequencies across the whole published range, edges
//! near DC and Nyquist included.

use filtro_core::{
    Design, Filter, FilterDesign, FilterError, PI, ParamId, RawFilter, linear_to_db,
};
use filtro_design::{
    BandEdges, MAX_ORDER, bessel, butterworth, chebyshev_i, chebyshev_ii, elliptic, legendre,
};
use proptest::prelude::*;

const SAMPLE_RATE: f64 = 44100.0;

/// Published frequency range of every cutoff and centre slot.
const MIN_FREQUENCY: f64 = 10.0;
const MAX_FREQUENCY: f64 = 22040.0;

fn stable<F: RawFilter>(filter: &F) -> bool {
    filter.cascade().is_stable() && filter.cascade().is_finite()
}

fn boxed<D: Design>(design: D) -> Box<dyn Filter> {
    Box::new(FilterDesign::<D>::new(design, 1))
}

/// Every band-shaped design, at full capacity.
fn band_designs() -> Vec<Box<dyn Filter>> {
    vec![
        boxed(butterworth::design::BandPass::new(MAX_ORDER)),
        boxed(butterworth::design::BandStop::new(MAX_ORDER)),
        boxed(butterworth::design::BandShelf::new(MAX_ORDER)),
        boxed(chebyshev_i::design::BandPass::new(MAX_ORDER)),
        boxed(chebyshev_i::design::BandStop::new(MAX_ORDER)),
        boxed(chebyshev_i::design::BandShelf::new(MAX_ORDER)),
        boxed(chebyshev_ii::design::BandPass::new(MAX_ORDER)),
        boxed(chebyshev_ii::design::BandStop::new(MAX_ORDER)),
        boxed(chebyshev_ii::design::BandShelf::new(MAX_ORDER)),
        boxed(elliptic::design::BandPass::new(MAX_ORDER)),
        boxed(elliptic::design::BandStop::new(MAX_ORDER)),
        boxed(bessel::design::BandPass::new(MAX_ORDER)),
        boxed(bessel::design::BandStop::new(MAX_ORDER)),
        boxed(legendre::design::BandPass::new(MAX_ORDER)),
        boxed(legendre::design::BandStop::new(MAX_ORDER)),
    ]
}

fn poles_inside(filter: &dyn Filter) -> bool {
    filter.pole_zeros().iter().all(|pair| {
        core::iter::once(pair.poles.first())
            .chain(pair.poles.second())
            .all(|p| p.norm() < 1.0)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Low-pass designs of every monotonic family are stable with unity DC gain.
    #[test]
    fn low_pass_stable_with_unity_dc(
        order in 1usize..=MAX_ORDER,
        cutoff in MIN_FREQUENCY..MAX_FREQUENCY,
    ) {
        let mut bw = butterworth::LowPass::new(MAX_ORDER);
        bw.setup(order, SAMPLE_RATE, cutoff).unwrap();
        prop_assert!(stable(&bw));
        prop_assert!((bw.response(0.0).norm() - 1.0).abs() < 1e-6);

        let mut smooth = bessel::LowPass::new(MAX_ORDER);
        smooth.setup(order, SAMPLE_RATE, cutoff).unwrap();
        prop_assert!(stable(&smooth));
        prop_assert!((smooth.response(0.0).norm() - 1.0).abs() < 1e-6);

        let mut steep = legendre::LowPass::new(MAX_ORDER);
        steep.setup(order, SAMPLE_RATE, cutoff).unwrap();
        prop_assert!(stable(&steep));
        prop_assert!((steep.response(0.0).norm() - 1.0).abs() < 1e-6);
    }

    /// Rippled families are stable whenever accepted and never exceed 0 dB
    /// in the passband.
    #[test]
    fn rippled_families_bounded(
        order in 1usize..=MAX_ORDER,
        cutoff in MIN_FREQUENCY..MAX_FREQUENCY,
        ripple in 0.1f64..3.0,
        stop in 20.0f64..90.0,
    ) {
        let mut cheby = chebyshev_i::LowPass::new(MAX_ORDER);
        let cheby_ok = cheby.setup(order, SAMPLE_RATE, cutoff, ripple).is_ok();
        prop_assert!(!cheby_ok || stable(&cheby));

        let mut ellip = elliptic::LowPass::new(MAX_ORDER);
        let ellip_ok = ellip.setup(order, SAMPLE_RATE, cutoff, ripple, stop).is_ok();
        prop_assert!(!ellip_ok || stable(&ellip));

        let mut inverse = chebyshev_ii::LowPass::new(MAX_ORDER);
        let inverse_ok = inverse.setup(order, SAMPLE_RATE, cutoff, stop).is_ok();
        prop_assert!(!inverse_ok || stable(&inverse));

        // Peak heights of high-order resonances are too sensitive to rounding
        // for a tight bound, so the passband ceiling is checked at moderate order.
        if order <= 10 && (100.0..15000.0).contains(&cutoff) {
            prop_assert!(cheby_ok && ellip_ok);
            for i in 0..=10 {
                let f = cutoff * f64::from(i) / 10.0 / SAMPLE_RATE;
                prop_assert!(linear_to_db(cheby.response(f).norm()) < 1e-6);
                prop_assert!(linear_to_db(ellip.response(f).norm()) < 1e-6);
            }
        }
    }

    /// Band shapes realize ⌈order/2⌉ stable sections, or refuse a band
    /// squeezed so hard against DC or Nyquist that a pole would reach the circle.
    #[test]
    fn band_shapes_section_count(
        order in 1usize..=MAX_ORDER,
        center in MIN_FREQUENCY..MAX_FREQUENCY,
        width in 1.0f64..MAX_FREQUENCY,
    ) {
        let mut bp = butterworth::BandPass::new(MAX_ORDER);
        match bp.setup(order, SAMPLE_RATE, center, width) {
            Ok(()) => {
                prop_assert_eq!(bp.num_stages(), order.div_ceil(2));
                prop_assert!(stable(&bp));
            }
            Err(e) => {
                prop_assert_eq!(e, FilterError::NumericalFailure);
            }
        }

        let mut bs = chebyshev_i::BandStop::new(MAX_ORDER);
        match bs.setup(order, SAMPLE_RATE, center, width, 1.0) {
            Ok(()) => {
                prop_assert_eq!(bs.num_stages(), order.div_ceil(2));
                prop_assert!(stable(&bs));
            }
            Err(e) => {
                prop_assert_eq!(e, FilterError::NumericalFailure);
            }
        }
    }

    /// Any accepted band design of any family has every pole inside the circle.
    #[test]
    fn accepted_band_designs_are_stable(
        order in 1usize..=MAX_ORDER,
        center in MIN_FREQUENCY..MAX_FREQUENCY,
        width in 1.0f64..MAX_FREQUENCY,
    ) {
        for mut filter in band_designs() {
            let mut params = filter.default_params();
            params.set(filter.find_param_index(ParamId::Order).unwrap(), order as f64).unwrap();
            params.set(filter.find_param_index(ParamId::Frequency).unwrap(), center).unwrap();
            params.set(filter.find_param_index(ParamId::BandwidthHz).unwrap(), width).unwrap();
            let before = filter.pole_zeros();
            match filter.set_params(&params) {
                Ok(()) => {
                    prop_assert!(poles_inside(filter.as_ref()), "{}", filter.name());
                }
                Err(e) => {
                    prop_assert_eq!(e, FilterError::NumericalFailure, "{}", filter.name());
                    prop_assert_eq!(filter.pole_zeros(), before);
                }
            }
        }
    }

    /// Band edges stay ordered and inside (0, π) whatever the width.
    #[test]
    fn band_edges_clamped(
        center in 1.0f64..22049.0,
        width in 0.01f64..50000.0,
    ) {
        if let Ok(edges) = BandEdges::new(center, width, SAMPLE_RATE) {
            prop_assert!(edges.low() > 0.0);
            prop_assert!(edges.high() < PI);
            prop_assert!(edges.low() < edges.high());
            let g = edges.geometric_center();
            prop_assert!(g > edges.low() && g < edges.high());
        }
    }

    /// A setup past Nyquist is rejected and leaves the cascade alone.
    #[test]
    fn rejected_setup_is_atomic(
        order in 1usize..=MAX_ORDER,
        cutoff in MIN_FREQUENCY..MAX_FREQUENCY,
        bad in 22050.0f64..100000.0,
    ) {
        let mut f = butterworth::HighPass::new(MAX_ORDER);
        f.setup(order, SAMPLE_RATE, cutoff).unwrap();
        let before = f.cascade().clone();
        prop_assert!(f.setup(order, SAMPLE_RATE, bad).is_err());
        prop_assert_eq!(f.cascade(), &before);
    }
}
