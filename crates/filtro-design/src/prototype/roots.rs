//! Polynomial root finding for the Bessel and Legendre prototypes.
//!
//! Aberth–Ehrlich simultaneous iteration. The caller supplies the value and
//! derivative of the polynomial at a point, so each family can evaluate in
//! whatever form stays accurate at high order; monomial coefficients lose
//! every significant digit long before [`MAX_ORDER`](super::MAX_ORDER).

use filtro_core::{Complex64, PI};

const MAX_ITERATIONS: usize = 500;
const TOLERANCE: f64 = 1e-12;

/// Finds the `roots.len()` roots of a polynomial of that degree.
///
/// `eval` returns `(p(z), p'(z))`. Iteration starts on the circle of radius
/// `radius` around `center`, which should roughly enclose the roots. A root
/// stops moving once its correction falls below a relative tolerance, and
/// the solver returns when every root has settled.
pub(crate) fn aberth<F>(eval: F, center: Complex64, radius: f64, roots: &mut [Complex64])
where
    F: Fn(Complex64) -> (Complex64, Complex64),
{
    let n = roots.len();
    if n == 0 {
        return;
    }

    // The offset keeps starting points off the real axis and out of conjugate
    // symmetry, so iterates can still land on real roots.
    for (k, root) in roots.iter_mut().enumerate() {
        let angle = 2.0 * PI * k as f64 / n as f64 + 0.4;
        *root = center + Complex64::from_polar(radius, angle);
    }

    let scale = radius.max(center.norm()).max(f64::MIN_POSITIVE);
    let mut settled = [false; super::MAX_ORDER];
    let settled = &mut settled[..n];

    for _ in 0..MAX_ITERATIONS {
        for i in 0..n {
            if settled[i] {
                continue;
            }
            let zi = roots[i];
            let (p, dp) = eval(zi);
            if p.norm_sqr() == 0.0 {
                settled[i] = true;
                continue;
            }
            if dp.norm_sqr() == 0.0 {
                continue;
            }
            let newton = p / dp;

            let mut repulsion = Complex64::new(0.0, 0.0);
            for (j, &zj) in roots.iter().enumerate() {
                let diff = zi - zj;
                if j != i && diff.norm_sqr() > 0.0 {
                    repulsion += diff.inv();
                }
            }

            let step = newton / (Complex64::new(1.0, 0.0) - newton * repulsion);
            if !step.re.is_finite() || !step.im.is_finite() {
                continue;
            }
            roots[i] = zi - step;
            if step.norm() <= TOLERANCE * roots[i].norm().max(scale * 1e-3) {
                settled[i] = true;
            }
        }
        if settled.iter().all(|&s| s) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Horner evaluation of ascending coefficients and their derivative.
    fn horner(coeffs: &[f64]) -> impl Fn(Complex64) -> (Complex64, Complex64) + '_ {
        move |z| {
            let mut p = Complex64::new(0.0, 0.0);
            let mut dp = Complex64::new(0.0, 0.0);
            for &c in coeffs.iter().rev() {
                dp = dp * z + p;
                p = p * z + c;
            }
            (p, dp)
        }
    }

    fn contains(roots: &[Complex64], target: Complex64, tol: f64) -> bool {
        roots.iter().any(|r| (r - target).norm() < tol)
    }

    const ORIGIN: Complex64 = Complex64::new(0.0, 0.0);

    #[test]
    fn test_quadratic() {
        // s² + 2s + 5 = 0 → -1 ± 2j
        let mut roots = [ORIGIN; 2];
        aberth(horner(&[5.0, 2.0, 1.0]), ORIGIN, 2.0, &mut roots);
        assert!(contains(&roots, Complex64::new(-1.0, 2.0), 1e-12));
        assert!(contains(&roots, Complex64::new(-1.0, -2.0), 1e-12));
    }

    #[test]
    fn test_cubic_with_real_roots() {
        // (x - 1)(x - 2)(x + 3) = x³ - 7x + 6
        let mut roots = [ORIGIN; 3];
        aberth(horner(&[6.0, -7.0, 0.0, 1.0]), ORIGIN, 2.0, &mut roots);
        for r in [1.0, 2.0, -3.0] {
            assert!(contains(&roots, Complex64::new(r, 0.0), 1e-12), "missing {r}");
        }
    }

    #[test]
    fn test_non_monic_linear() {
        let mut roots = [ORIGIN; 1];
        aberth(horner(&[3.0, 2.0]), ORIGIN, 1.0, &mut roots);
        assert!((roots[0] - Complex64::new(-1.5, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_roots_of_unity_at_full_degree() {
        // z³² + 1: roots on the unit circle at odd multiples of π/32.
        let mut coeffs = [0.0; 33];
        coeffs[0] = 1.0;
        coeffs[32] = 1.0;
        let mut roots = [ORIGIN; 32];
        aberth(horner(&coeffs), ORIGIN, 1.0, &mut roots);
        for k in 0..32 {
            let expected = Complex64::from_polar(1.0, PI * (2 * k + 1) as f64 / 32.0);
            assert!(contains(&roots, expected, 1e-10), "missing root {k}");
        }
    }

    #[test]
    fn test_off_center_cluster() {
        // (z - 10)(z - 10.5)(z - 11)
        let mut roots = [ORIGIN; 3];
        let center = Complex64::new(10.0, 0.0);
        aberth(horner(&[-1155.0, 330.5, -31.5, 1.0]), center, 2.0, &mut roots);
        for r in [10.0, 10.5, 11.0] {
            assert!(contains(&roots, Complex64::new(r, 0.0), 1e-9), "missing {r}");
        }
    }
}
