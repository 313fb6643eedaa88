//! Integration tests for filtro-design.
//!
//! Drives every family through the parameter layer and checks the
//! resulting cascades at the signal level.

use filtro_core::{
    Design, DirectFormI, DirectFormII, Filter, FilterDesign, FilterError, Kind, ParamId, Params,
    RawFilter, SimpleFilter, SmoothedFilterDesign, TWO_PI, TransposedDirectFormII, db_to_linear,
    linear_to_db,
};
use filtro_design::{
    bessel, butterworth, chebyshev_i, chebyshev_ii, custom, elliptic, legendre, rbj,
};

const MAX_ORDER: usize = 10;

fn boxed<D: Design>(design: D) -> Box<dyn Filter> {
    Box::new(FilterDesign::<D>::new(design, 1))
}

/// Every family/shape with an order parameter.
fn pole_designs() -> Vec<Box<dyn Filter>> {
    pole_designs_up_to(MAX_ORDER)
}

fn pole_designs_up_to(max_order: usize) -> Vec<Box<dyn Filter>> {
    vec![
        boxed(butterworth::design::LowPass::new(max_order)),
        boxed(butterworth::design::HighPass::new(max_order)),
        boxed(butterworth::design::BandPass::new(max_order)),
        boxed(butterworth::design::BandStop::new(max_order)),
        boxed(butterworth::design::LowShelf::new(max_order)),
        boxed(butterworth::design::HighShelf::new(max_order)),
        boxed(butterworth::design::BandShelf::new(max_order)),
        boxed(chebyshev_i::design::LowPass::new(max_order)),
        boxed(chebyshev_i::design::HighPass::new(max_order)),
        boxed(chebyshev_i::design::BandPass::new(max_order)),
        boxed(chebyshev_i::design::BandStop::new(max_order)),
        boxed(chebyshev_i::design::LowShelf::new(max_order)),
        boxed(chebyshev_i::design::HighShelf::new(max_order)),
        boxed(chebyshev_i::design::BandShelf::new(max_order)),
        boxed(chebyshev_ii::design::LowPass::new(max_order)),
        boxed(chebyshev_ii::design::HighPass::new(max_order)),
        boxed(chebyshev_ii::design::BandPass::new(max_order)),
        boxed(chebyshev_ii::design::BandStop::new(max_order)),
        boxed(chebyshev_ii::design::LowShelf::new(max_order)),
        boxed(chebyshev_ii::design::HighShelf::new(max_order)),
        boxed(chebyshev_ii::design::BandShelf::new(max_order)),
        boxed(elliptic::design::LowPass::new(max_order)),
        boxed(elliptic::design::HighPass::new(max_order)),
        boxed(elliptic::design::BandPass::new(max_order)),
        boxed(elliptic::design::BandStop::new(max_order)),
        boxed(bessel::design::LowPass::new(max_order)),
        boxed(bessel::design::HighPass::new(max_order)),
        boxed(bessel::design::BandPass::new(max_order)),
        boxed(bessel::design::BandStop::new(max_order)),
        boxed(legendre::design::LowPass::new(max_order)),
        boxed(legendre::design::HighPass::new(max_order)),
        boxed(legendre::design::BandPass::new(max_order)),
        boxed(legendre::design::BandStop::new(max_order)),
    ]
}

/// Fixed-order designs.
fn biquad_designs() -> Vec<Box<dyn Filter>> {
    vec![
        boxed(rbj::design::LowPass::new()),
        boxed(rbj::design::HighPass::new()),
        boxed(rbj::design::BandPass1::new()),
        boxed(rbj::design::BandPass2::new()),
        boxed(rbj::design::BandStop::new()),
        boxed(rbj::design::LowShelf::new()),
        boxed(rbj::design::HighShelf::new()),
        boxed(rbj::design::BandShelf::new()),
        boxed(rbj::design::AllPass::new()),
        boxed(custom::design::OnePole::new()),
        boxed(custom::design::TwoPole::new()),
    ]
}

fn all_poles_inside(filter: &dyn Filter) -> bool {
    filter.pole_zeros().iter().all(|pair| {
        core::iter::once(pair.poles.first())
            .chain(pair.poles.second())
            .all(|p| p.norm() < 1.0)
    })
}

// ============================================================================
// 1. Reference scenarios
// ============================================================================

#[test]
fn chebyshev_i_band_stop_scenario() {
    let mut filter = FilterDesign::<_>::new(chebyshev_i::design::BandStop::new(3), 1);
    filter
        .set_params(&Params::from_slice(&[44100.0, 3.0, 4000.0, 880.0, 1.0]).unwrap())
        .unwrap();
    assert_eq!(filter.cascade().num_stages(), 2);
    assert!(linear_to_db(filter.response(4000.0 / 44100.0).norm()) < -1.0);
    assert!(linear_to_db(filter.response(100.0 / 44100.0).norm()).abs() <= 1.0);
}

#[test]
fn rbj_low_pass_scenario() {
    let mut filter = FilterDesign::<_>::new(rbj::design::LowPass::new(), 1);
    filter
        .set_params(&Params::from_slice(&[44100.0, 440.0, 1.0]).unwrap())
        .unwrap();
    assert_eq!(filter.cascade().num_stages(), 1);
    let c = filter.cascade().stage(0).unwrap();
    assert_eq!(c.a0(), 1.0);

    let w0 = TWO_PI * 440.0 / 44100.0;
    let (cs, sn) = (w0.cos(), w0.sin());
    let al = sn / 2.0;
    let a0 = 1.0 + al;
    let expected = [
        (1.0 - cs) / 2.0 / a0,
        (1.0 - cs) / a0,
        (1.0 - cs) / 2.0 / a0,
        -2.0 * cs / a0,
        (1.0 - al) / a0,
    ];
    for (got, want) in [c.b0, c.b1, c.b2, c.a1, c.a2].into_iter().zip(expected) {
        assert!(((got - want) / want).abs() < 1e-6, "{got} vs {want}");
    }
}

#[test]
fn butterworth_half_power_point() {
    let mut filter = FilterDesign::<_>::new(butterworth::design::LowPass::new(MAX_ORDER), 1);
    for order in 1..=MAX_ORDER {
        filter.set_param_by_id(ParamId::Order, order as f64).unwrap();
        filter.set_param_by_id(ParamId::Frequency, 2500.0).unwrap();
        let db = linear_to_db(filter.response(2500.0 / 44100.0).norm());
        assert!((db + 3.01).abs() < 0.05, "order {order}: {db} dB");
    }
}

// ============================================================================
// 2. Structural properties across families
// ============================================================================

#[test]
fn section_count_is_half_the_order() {
    for mut filter in pole_designs() {
        for order in 1..=MAX_ORDER {
            filter.set_param_by_id(ParamId::Order, order as f64).unwrap();
            assert_eq!(
                filter.pole_zeros().len(),
                order.div_ceil(2),
                "{} order {order}",
                filter.name()
            );
        }
    }
}

#[test]
fn digital_poles_inside_unit_circle() {
    for mut filter in pole_designs() {
        for order in 1..=MAX_ORDER {
            filter.set_param_by_id(ParamId::Order, order as f64).unwrap();
            assert!(all_poles_inside(filter.as_ref()), "{} order {order}", filter.name());
        }
        for frequency in [400.0, 5000.0, 18000.0] {
            filter.set_param_by_id(ParamId::Frequency, frequency).unwrap();
            assert!(all_poles_inside(filter.as_ref()), "{} at {frequency} Hz", filter.name());
        }
    }
    for filter in biquad_designs() {
        assert!(all_poles_inside(filter.as_ref()), "{}", filter.name());
    }
}

#[test]
fn every_family_designs_up_to_max_order() {
    let max_order = filtro_design::MAX_ORDER;
    for mut filter in pole_designs_up_to(max_order) {
        let order_index = filter.find_param_index(ParamId::Order).unwrap();
        let frequency_index = filter.find_param_index(ParamId::Frequency).unwrap();
        for order in 1..=max_order {
            for frequency in [20.0, 1000.0, 15000.0, 22000.0] {
                let mut params = filter.default_params();
                params.set(order_index, order as f64).unwrap();
                params.set(frequency_index, frequency).unwrap();
                let context = format!("{} order {order} at {frequency} Hz", filter.name());
                match filter.set_params(&params) {
                    Ok(()) => assert!(all_poles_inside(filter.as_ref()), "{context}"),
                    // Only a band squeezed against DC or Nyquist may be refused.
                    Err(e) => {
                        assert_ne!(filter.kind(), Kind::LowPass, "{context}: {e}");
                        assert_eq!(e, FilterError::NumericalFailure, "{context}");
                    }
                }
            }
        }
    }
}

#[test]
fn band_edge_collapsed_onto_dc_is_rejected() {
    let mut filter = FilterDesign::<_>::new(chebyshev_i::design::BandPass::new(8), 1);
    filter
        .set_params(&Params::from_slice(&[44100.0, 3.0, 1000.0, 300.0, 1.0]).unwrap())
        .unwrap();
    let cascade = filter.cascade().clone();
    let params = *filter.params();

    // 20 Hz ∓ 50 Hz puts the low edge below DC.
    let near_dc = Params::from_slice(&[44100.0, 3.0, 20.0, 100.0, 1.0]).unwrap();
    assert_eq!(filter.set_params(&near_dc), Err(FilterError::NumericalFailure));
    assert_eq!(filter.cascade(), &cascade);
    assert_eq!(filter.params(), &params);
    assert!(filter.cascade().is_stable());

    let mut wide = FilterDesign::<_>::new(butterworth::design::BandPass::new(8), 1);
    let near_dc = Params::from_slice(&[44100.0, 4.0, 20.0, 100.0]).unwrap();
    assert_eq!(wide.set_params(&near_dc), Err(FilterError::NumericalFailure));
    assert!(wide.cascade().is_stable());
}

#[test]
fn order_errors_report_requested_order() {
    let mut design = butterworth::design::LowPass::new(8);
    assert_eq!(
        design.apply_params(&Params::from_slice(&[44100.0, 40.0, 1000.0]).unwrap()),
        Err(FilterError::InvalidOrder { order: 40, max: 8 })
    );
    assert_eq!(
        design.apply_params(&Params::from_slice(&[44100.0, 0.2, 1000.0]).unwrap()),
        Err(FilterError::InvalidOrder { order: 0, max: 8 })
    );
    assert_eq!(
        design.apply_params(&Params::from_slice(&[44100.0, -3.0, 1000.0]).unwrap()),
        Err(FilterError::InvalidParameter {
            name: "order",
            value: -3.0
        })
    );
}

#[test]
fn params_round_trip() {
    for mut filter in pole_designs().into_iter().chain(biquad_designs()) {
        let mut params = filter.default_params();
        params.set(0, 48000.0).unwrap();
        if let Some(i) = filter.find_param_index(ParamId::Frequency) {
            params.set(i, 1234.5).unwrap();
        }
        filter.set_params(&params).unwrap();
        assert_eq!(filter.params(), &params, "{}", filter.name());
    }
}

#[test]
fn rejected_update_leaves_cascade_identical() {
    let mut filter = FilterDesign::<_>::new(elliptic::design::LowPass::new(8), 1);
    filter
        .set_params(&Params::from_slice(&[44100.0, 6.0, 2000.0, 0.5, 60.0]).unwrap())
        .unwrap();
    let cascade = filter.cascade().clone();
    let params = *filter.params();

    // Outside the published range.
    assert!(matches!(
        filter.set_param(2, 30000.0),
        Err(FilterError::ParamOutOfRange { .. })
    ));
    // In range, but above Nyquist for this sample rate.
    let mut low_rate = params;
    low_rate.set(0, 8000.0).unwrap();
    low_rate.set(2, 5000.0).unwrap();
    assert!(matches!(
        filter.set_params(&low_rate),
        Err(FilterError::FrequencyOutOfRange { .. })
    ));
    // Stopband not above the ripple.
    let mut inverted = params;
    inverted.set(3, 10.0).unwrap();
    inverted.set(4, 5.0).unwrap();
    assert!(matches!(
        filter.set_params(&inverted),
        Err(FilterError::InvalidParameter { .. })
    ));
    // Order beyond capacity.
    assert!(filter.set_param(1, 9.0).is_err());

    assert_eq!(filter.cascade(), &cascade);
    assert_eq!(filter.params(), &params);
}

#[test]
fn every_family_publishes_sample_rate_first() {
    for filter in pole_designs().into_iter().chain(biquad_designs()) {
        let info = filter.param_info(0).unwrap();
        assert_eq!(info.id, ParamId::SampleRate, "{}", filter.name());
        assert!(filter.num_params() <= filtro_core::MAX_PARAMETERS);
        assert!(filter.param_info(filter.num_params()).is_none());
    }
}

// ============================================================================
// 3. Signal level
// ============================================================================

fn sine(freq: f64, sample_rate: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (TWO_PI * freq * i as f64 / sample_rate).sin())
        .collect()
}

fn rms(buf: &[f64]) -> f64 {
    (buf.iter().map(|x| x * x).sum::<f64>() / buf.len() as f64).sqrt()
}

#[test]
fn low_pass_attenuates_stopband_tone() {
    let mut filter: SimpleFilter<butterworth::LowPass> =
        SimpleFilter::new(butterworth::LowPass::new(8), 1);
    filter.setup(8, 44100.0, 500.0).unwrap();

    let mut pass = sine(100.0, 44100.0, 8192);
    let mut stop = sine(5000.0, 44100.0, 8192);
    filter.process(pass.len(), &mut [&mut pass[..]]);
    filter.reset();
    filter.process(stop.len(), &mut [&mut stop[..]]);

    // Skip the transient.
    let pass_rms = rms(&pass[4096..]);
    let stop_rms = rms(&stop[4096..]);
    assert!((pass_rms - core::f64::consts::FRAC_1_SQRT_2).abs() < 0.01);
    assert!(stop_rms < 1e-6);
}

#[test]
fn realizations_agree_on_designed_filter() {
    let mut raw = chebyshev_ii::BandPass::new(8);
    raw.setup(8, 48000.0, 3000.0, 1500.0, 50.0).unwrap();

    let mut df1: SimpleFilter<_, DirectFormI> = SimpleFilter::new(raw.clone(), 1);
    let mut df2: SimpleFilter<_, DirectFormII> = SimpleFilter::new(raw.clone(), 1);
    let mut tdf2: SimpleFilter<_, TransposedDirectFormII> = SimpleFilter::new(raw, 1);

    let input = sine(2900.0, 48000.0, 2048);
    let (mut a, mut b, mut c) = (input.clone(), input.clone(), input);
    df1.process(a.len(), &mut [&mut a[..]]);
    df2.process(b.len(), &mut [&mut b[..]]);
    tdf2.process(c.len(), &mut [&mut c[..]]);

    for i in 0..a.len() {
        assert!((a[i] - b[i]).abs() < 1e-9, "sample {i}");
        assert!((a[i] - c[i]).abs() < 1e-9, "sample {i}");
    }
}

#[test]
fn smoothed_sweep_reaches_target() {
    let mut filter =
        SmoothedFilterDesign::<_>::new(rbj::design::HighShelf::new(), 2, 256);
    filter.set_param_by_id(ParamId::Gain, 12.0).unwrap();
    assert!(filter.smoother().is_transitioning());
    // Analysis reports the target straight away.
    assert!((filter.response(0.5).norm() - db_to_linear(12.0)).abs() < 1e-6);

    let mut left = vec![0.1f32; 512];
    let mut right = vec![-0.1f32; 512];
    filter.process(512, &mut [&mut left[..], &mut right[..]]);
    assert!(!filter.smoother().is_transitioning());
    assert_eq!(filter.active_cascade(), filter.design().cascade());
    assert!(left.iter().chain(&right).all(|s| s.is_finite()));
}

#[test]
fn analysis_only_filter_faults_without_touching_buffers() {
    let mut filter = FilterDesign::<_>::new(bessel::design::LowPass::new(4), 0);
    let mut buf = [0.5f64; 16];
    for _ in 0..3 {
        assert_eq!(
            filter.try_process_f64(16, &mut [&mut buf[..]]),
            Err(FilterError::NoChannels)
        );
    }
    assert_eq!(buf, [0.5; 16]);
    assert_eq!(filter.pole_zeros().len(), 1);
}

#[test]
fn legendre_design_matches_raw_setup() {
    let mut design = FilterDesign::<_>::new(legendre::design::HighPass::new(6), 1);
    design
        .set_params(&Params::from_slice(&[48000.0, 5.0, 800.0]).unwrap())
        .unwrap();
    let mut raw = legendre::HighPass::new(6);
    raw.setup(5, 48000.0, 800.0).unwrap();
    assert_eq!(design.cascade(), raw.cascade());
}
