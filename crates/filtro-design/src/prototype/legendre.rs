use filtro_core::{Complex64, PI, PoleZeroLayout};

use super::roots::aberth;
use super::{AnalogPrototype, MAX_ORDER, add_roots_with_zeros_at_infinity};

/// Gauss–Legendre nodes needed to integrate `L_n` exactly at [`MAX_ORDER`].
const MAX_NODES: usize = MAX_ORDER / 2 + 1;

/// Optimum-L (Papoulis): steepest monotonic roll-off at the cutoff.
///
/// `|H(jω)|² = 1 / (1 + L_n(ω²))` with `L_n(1) = 1`, so the response crosses
/// -3 dB at unity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Legendre;

impl AnalogPrototype for Legendre {
    fn design(&self, order: usize, layout: &mut PoleZeroLayout) {
        let n = order;
        let l = OptimumL::new(n);

        // Denominator D(s)D(-s) = 1 + L_n(-s²); solve Q(u) = 1 + L_n(-u) for u = s².
        let mut u_roots = [Complex64::new(0.0, 0.0); MAX_ORDER];
        let q = |u: Complex64| {
            let (value, slope) = l.eval(-u);
            (value + 1.0, -slope)
        };
        aberth(q, Complex64::new(-0.5, 0.0), 0.75, &mut u_roots[..n]);

        // Left half-plane square root of each u.
        let mut roots = [Complex64::new(0.0, 0.0); MAX_ORDER];
        for (s, u) in roots[..n].iter_mut().zip(&u_roots[..n]) {
            *s = -u.sqrt();
        }

        layout.clear();
        add_roots_with_zeros_at_infinity(&mut roots[..n], layout);
        layout.set_normal(0.0, 1.0);
    }
}

/// `L_n(y)` in integral form.
///
/// `L_n(ω²) = ∫_{-1}^{2ω²-1} w(x) [Σ aᵢ Pᵢ(x)]² dx`, where `w(x) = 1` for odd
/// `n` and `x + 1` for even `n`, and the weights `aᵢ` make `L_n(1) = 1`.
/// Expanding this into powers of `y` cancels to nothing well before the top
/// orders, so it is integrated numerically along the segment `0 → y`, where
/// the Legendre series stays small.
#[derive(Debug, Clone, Copy)]
struct OptimumL {
    even: bool,
    terms: usize,
    weights: [f64; MAX_ORDER],
    nodes: [f64; MAX_NODES],
    node_weights: [f64; MAX_NODES],
    num_nodes: usize,
}

impl OptimumL {
    fn new(n: usize) -> Self {
        let (k, even) = if n % 2 == 1 {
            ((n - 1) / 2, false)
        } else {
            ((n - 2) / 2, true)
        };

        let mut weights = [0.0; MAX_ORDER];
        for (i, a) in weights[..=k].iter_mut().enumerate() {
            *a = if !even {
                (2 * i + 1) as f64 / (core::f64::consts::SQRT_2 * (k + 1) as f64)
            } else if i % 2 == k % 2 {
                (2 * i + 1) as f64 / libm::sqrt(((k + 1) * (k + 2)) as f64)
            } else {
                0.0
            };
        }

        // The integrand has degree n - 1 in the path parameter.
        let num_nodes = n / 2 + 1;
        let mut nodes = [0.0; MAX_NODES];
        let mut node_weights = [0.0; MAX_NODES];
        gauss_legendre(&mut nodes[..num_nodes], &mut node_weights[..num_nodes]);

        Self {
            even,
            terms: k + 1,
            weights,
            nodes,
            node_weights,
            num_nodes,
        }
    }

    /// `w(x)·S(x)²`, with `S(x) = Σ aᵢ Pᵢ(x)` summed by the Legendre recurrence.
    fn integrand(&self, x: Complex64) -> Complex64 {
        let mut prev = Complex64::new(0.0, 0.0);
        let mut cur = Complex64::new(1.0, 0.0);
        let mut sum = Complex64::new(0.0, 0.0);
        for (i, &a) in self.weights[..self.terms].iter().enumerate() {
            sum += cur * a;
            // P_{i+1} = ((2i+1) x P_i - i P_{i-1}) / (i+1)
            let next = (x * cur * (2 * i + 1) as f64 - prev * i as f64) / (i + 1) as f64;
            prev = cur;
            cur = next;
        }
        let weight = if self.even { x + 1.0 } else { Complex64::new(1.0, 0.0) };
        weight * sum * sum
    }

    /// `L_n(y)` and `L_n'(y)`.
    ///
    /// With `x = 2t - 1`, `L_n(y) = ∫_0^y 2·w(x)·S(x)² dt`; on the path
    /// `t = y·τ` Gauss–Legendre is exact for this degree.
    fn eval(&self, y: Complex64) -> (Complex64, Complex64) {
        let mut value = Complex64::new(0.0, 0.0);
        for (&xi, &weight) in self.nodes[..self.num_nodes]
            .iter()
            .zip(&self.node_weights[..self.num_nodes])
        {
            let x = y * (1.0 + xi) - 1.0;
            value += self.integrand(x) * weight;
        }
        (value * y, self.integrand(y * 2.0 - 1.0) * 2.0)
    }
}

/// Nodes and weights of the Gauss–Legendre rule on `[-1, 1]`, sized by the slices.
fn gauss_legendre(nodes: &mut [f64], weights: &mut [f64]) {
    let m = nodes.len();
    for (i, (node, weight)) in nodes.iter_mut().zip(weights.iter_mut()).enumerate() {
        let mut x = libm::cos(PI * (i as f64 + 0.75) / (m as f64 + 0.5));
        for _ in 0..100 {
            let (p, dp) = legendre_with_derivative(m, x);
            let dx = p / dp;
            x -= dx;
            if dx.abs() < 1e-15 {
                break;
            }
        }
        let (_, dp) = legendre_with_derivative(m, x);
        *node = x;
        *weight = 2.0 / ((1.0 - x * x) * dp * dp);
    }
}

/// `P_m(x)` and `P_m'(x)` for `m ≥ 1` and `|x| < 1`.
fn legendre_with_derivative(m: usize, x: f64) -> (f64, f64) {
    let (mut prev, mut cur) = (1.0, x);
    for k in 2..=m {
        let next = ((2 * k - 1) as f64 * x * cur - (k - 1) as f64 * prev) / k as f64;
        prev = cur;
        cur = next;
    }
    (cur, m as f64 * (x * cur - prev) / (x * x - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monomial coefficients of `L_n(y)`, lowest power first. Only accurate
    /// at low orders, which is all the tests need.
    fn optimum_l_coefficients(n: usize) -> Vec<f64> {
        let l = OptimumL::new(n);

        // Legendre polynomials in x, accumulated with weights.
        let mut sum = vec![0.0; n + 2];
        let mut prev = vec![0.0; n + 2];
        let mut cur = vec![0.0; n + 2];
        cur[0] = 1.0;
        for i in 0..l.terms {
            for (s, c) in sum.iter_mut().zip(&cur) {
                *s += l.weights[i] * c;
            }
            let mut next = vec![0.0; n + 2];
            for d in 0..=i {
                next[d + 1] += (2 * i + 1) as f64 * cur[d];
                next[d] -= i as f64 * prev[d];
            }
            for c in &mut next {
                *c /= (i + 1) as f64;
            }
            prev = cur;
            cur = next;
        }

        let mut integrand = multiply(&sum, &sum);
        if l.even {
            integrand = multiply(&integrand, &[1.0, 1.0]);
        }
        let mut antiderivative = vec![0.0; integrand.len() + 1];
        for (d, &c) in integrand.iter().enumerate() {
            antiderivative[d + 1] = c / (d + 1) as f64;
        }
        antiderivative[0] = -evaluate(&antiderivative, -1.0);

        // Substitute x = 2y - 1 by Horner composition.
        let mut result = vec![0.0; antiderivative.len() + 1];
        for &c in antiderivative.iter().rev() {
            let mut next = vec![0.0; result.len()];
            for d in 0..result.len() - 1 {
                next[d + 1] += 2.0 * result[d];
                next[d] -= result[d];
            }
            next[0] += c;
            result = next;
        }
        result.truncate(n + 1);
        result
    }

    fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                out[i + j] += x * y;
            }
        }
        out
    }

    fn evaluate(coeffs: &[f64], x: f64) -> f64 {
        coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    fn assert_coeffs(n: usize, expected: &[f64]) {
        let l = optimum_l_coefficients(n);
        for (d, &e) in expected.iter().enumerate() {
            assert!((l[d] - e).abs() < 1e-9, "L_{n}: y^{d} = {}, expected {e}", l[d]);
        }
    }

    #[test]
    fn test_low_orders() {
        assert_coeffs(1, &[0.0, 1.0]);
        assert_coeffs(2, &[0.0, 0.0, 1.0]);
        assert_coeffs(3, &[0.0, 1.0, -3.0, 3.0]);
        assert_coeffs(4, &[0.0, 0.0, 3.0, -8.0, 6.0]);
    }

    #[test]
    fn test_quadrature_matches_expansion() {
        let points = [
            Complex64::new(0.3, 0.0),
            Complex64::new(0.8, 0.05),
            Complex64::new(-0.2, 0.4),
        ];
        for n in 1..=8 {
            let l = OptimumL::new(n);
            let coeffs = optimum_l_coefficients(n);
            for &y in &points {
                let expected = coeffs
                    .iter()
                    .rev()
                    .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * y + c);
                let (value, _) = l.eval(y);
                let tolerance = 1e-8 * (1.0 + expected.norm());
                assert!((value - expected).norm() < tolerance, "L_{n}({y})");
            }
        }
    }

    #[test]
    fn test_unity_at_cutoff() {
        for n in 1..=MAX_ORDER {
            let l = OptimumL::new(n);
            let (at_cutoff, _) = l.eval(Complex64::new(1.0, 0.0));
            let (at_dc, _) = l.eval(Complex64::new(0.0, 0.0));
            assert!((at_cutoff.re - 1.0).abs() < 1e-9, "order {n}");
            assert!(at_dc.norm() < 1e-12, "order {n}");
        }
    }

    #[test]
    fn test_second_order_matches_butterworth() {
        let mut layout = PoleZeroLayout::with_max_poles(2);
        Legendre.design(2, &mut layout);
        let pole = layout.poles().next().unwrap();
        let expected = Complex64::from_polar(1.0, 0.75 * PI);
        assert!((pole - expected).norm() < 1e-9);
    }

    #[test]
    fn test_response_at_every_order() {
        // |H(jω)|² = Π|p|² / Π|jω - p|² must equal 1 / (1 + L_n(ω²)).
        for n in 1..=MAX_ORDER {
            let mut layout = PoleZeroLayout::with_max_poles(n);
            Legendre.design(n, &mut layout);
            let poles: Vec<_> = layout.poles().collect();
            assert_eq!(poles.len(), n);
            assert!(poles.iter().all(|p| p.re < 0.0), "order {n}");

            let l = OptimumL::new(n);
            for w in [0.5, 0.9, 1.0, 1.5] {
                let jw = Complex64::new(0.0, w);
                let response: f64 =
                    poles.iter().map(|&p| p.norm_sqr() / (jw - p).norm_sqr()).product();
                let (lw, _) = l.eval(Complex64::new(w * w, 0.0));
                let expected = 1.0 / (1.0 + lw.re);
                assert!(
                    (response - expected).abs() < 1e-6 * expected.max(1e-3),
                    "order {n} at {w}: {response} vs {expected}"
                );
            }
        }
    }
}
