use filtro_core::{Complex64, PoleZeroLayout};

use super::roots::aberth;
use super::{AnalogPrototype, MAX_ORDER, add_roots_with_zeros_at_infinity};

/// Maximally flat group delay.
///
/// Poles are the roots of the reverse Bessel polynomial, rescaled so the
/// magnitude response crosses -3 dB at unity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bessel;

impl AnalogPrototype for Bessel {
    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        let n = order;
        let mut roots = [Complex64::new(0.0, 0.0); MAX_ORDER];
        let origin = Complex64::new(0.0, 0.0);
        aberth(|s| reverse_bessel(n, s), origin, root_radius(n), &mut roots[..n]);

        let w3 = half_power_frequency(&roots[..n]);
        for root in &mut roots[..n] {
            *root /= w3;
        }

        layout.clear();
        add_roots_with_zeros_at_infinity(&mut roots[..n], layout);
        layout.set_normal(0.0, 1.0);
    }
}

/// `θ_n(s)` and `θ_n'(s)` by `θ_k = (2k − 1)·θ_{k−1} + s²·θ_{k−2}`.
///
/// This is the forward recurrence of the modified Bessel function of the
/// second kind, which stays accurate near the roots where the expanded
/// coefficients cancel catastrophically.
fn reverse_bessel(n: usize, s: Complex64) -> (Complex64, Complex64) {
    let one = Complex64::new(1.0, 0.0);
    if n == 0 {
        return (one, Complex64::new(0.0, 0.0));
    }
    let s2 = s * s;
    let (mut prev, mut dprev) = (one, Complex64::new(0.0, 0.0));
    let (mut cur, mut dcur) = (s + 1.0, one);
    for k in 2..=n {
        let c = (2 * k - 1) as f64;
        let next = cur * c + s2 * prev;
        let dnext = dcur * c + s * prev * 2.0 + s2 * dprev;
        (prev, dprev) = (cur, dcur);
        (cur, dcur) = (next, dnext);
    }
    (cur, dcur)
}

/// Geometric mean root magnitude `θ_n(0)^(1/n)`, with `θ_n(0) = (2n)! / (2ⁿ n!)`.
fn root_radius(n: usize) -> f64 {
    let log_theta0: f64 = (n + 1..=2 * n).map(|k| libm::log(k as f64)).sum::<f64>()
        - n as f64 * core::f64::consts::LN_2;
    libm::exp(log_theta0 / n as f64)
}

/// Squared magnitude of the all-pole response `Π|p| / Π|jω - p|`.
fn magnitude_squared(poles: &[Complex64], w: f64) -> f64 {
    let jw = Complex64::new(0.0, w);
    poles
        .iter()
        .map(|&p| p.norm_sqr() / (jw - p).norm_sqr())
        .product()
}

/// Frequency at which an all-pole response falls to half power.
fn half_power_frequency(poles: &[Complex64]) -> f64 {
    let mut hi = 1.0;
    while magnitude_squared(poles, hi) > 0.5 && hi < 1e6 {
        hi *= 2.0;
    }
    let mut lo = 0.0;
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if magnitude_squared(poles, mid) > 0.5 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_matches_coefficients() {
        // θ₃(s) = s³ + 6s² + 15s + 15
        let s = Complex64::new(-0.7, 1.3);
        let (p, dp) = reverse_bessel(3, s);
        let expected = s * s * s + s * s * 6.0 + s * 15.0 + 15.0;
        let expected_d = s * s * 3.0 + s * 12.0 + 15.0;
        assert!((p - expected).norm() < 1e-12);
        assert!((dp - expected_d).norm() < 1e-12);
        assert!((root_radius(3) - libm::cbrt(15.0)).abs() < 1e-12);
    }

    #[test]
    fn test_second_order_poles() {
        // θ₂(s) = s² + 3s + 3, roots -1.5 ± j√3/2, then -3 dB scaling.
        let mut layout = PoleZeroLayout::with_max_poles(2);
        Bessel.design(2, &mut layout);
        let pole = layout.poles().next().unwrap();
        let ratio = pole.im.abs() / pole.re.abs();
        assert!((ratio - (0.75f64).sqrt() / 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_roots_at_every_order() {
        // Σ roots = −n(n+1)/2 and Π |roots| = θ_n(0) for the unscaled polynomial.
        for n in 1..=MAX_ORDER {
            let mut roots = [Complex64::new(0.0, 0.0); MAX_ORDER];
            let origin = Complex64::new(0.0, 0.0);
            aberth(|s| reverse_bessel(n, s), origin, root_radius(n), &mut roots[..n]);

            let sum: Complex64 = roots[..n].iter().sum();
            let expected_sum = -((n * (n + 1)) as f64) / 2.0;
            assert!((sum.re - expected_sum).abs() < 1e-6 * expected_sum.abs(), "order {n}");
            assert!(sum.im.abs() < 1e-6 * expected_sum.abs(), "order {n}");

            let log_product: f64 = roots[..n].iter().map(|r| libm::log(r.norm())).sum();
            let expected_log = n as f64 * libm::log(root_radius(n));
            let tolerance = 1e-6 * expected_log.max(1.0);
            assert!((log_product - expected_log).abs() < tolerance, "order {n}");

            assert!(roots[..n].iter().all(|r| r.re < 0.0), "order {n}");
        }
    }

    #[test]
    fn test_half_power_at_unity() {
        for n in 1..=MAX_ORDER {
            let mut layout = PoleZeroLayout::with_max_poles(n);
            Bessel.design(n, &mut layout);
            let poles: Vec<_> = layout.poles().collect();
            assert_eq!(poles.len(), n);
            assert!((magnitude_squared(&poles, 1.0) - 0.5).abs() < 1e-9, "order {n}");
            assert!(poles.iter().all(|p| p.re < 0.0 && p.re.is_finite()), "order {n}");
        }
    }
}
