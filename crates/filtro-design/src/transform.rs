//! Frequency transformations of a normalized prototype.
//!
//! Each transform maps every root of a unity-cutoff prototype to the roots
//! of the target shape, in the analog plane with `f_s = 1`, and rewrites
//! the gain reference as the digital angle it corresponds to.
//!
//! | Transform | Root map | Sections |
//! |---|---|---|
//! | [`low_pass`] | `p → ωc·p` | unchanged |
//! | [`high_pass`] | `p → ωc/p` | unchanged |
//! | [`band_pass`] | roots of `s² − p·B·s + ω0² = 0` | one per prototype root |
//! | [`band_stop`] | roots of `s² − (B/p)·s + ω0² = 0` | one per prototype root |
//!
//! Shelves reuse these: a low shelf goes through [`low_pass`], a high shelf
//! through [`high_pass`], a band shelf through [`band_pass`].

use filtro_core::{
    Complex64, FilterError, PI, PoleZeroLayout, PoleZeroPair, RootPair, TWO_PI, infinity,
    is_infinite, quadratic_roots,
};

use crate::bilinear::{prewarp_angle, unwarp};
use crate::validate;

/// Distance kept between band edges and DC or Nyquist, in radians per sample.
pub const EDGE_MARGIN: f64 = 1e-8;

/// A band in digital angles, clamped inside `(0, π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandEdges {
    low: f64,
    high: f64,
    center: f64,
}

impl BandEdges {
    /// Band `center ∓ width/2` in Hz.
    ///
    /// The centre must lie strictly inside `(0, Nyquist)` and the width must
    /// be positive; edges falling outside are clamped.
    pub fn new(center: f64, width: f64, sample_rate: f64) -> Result<Self, FilterError> {
        validate::frequency(center, sample_rate)?;
        validate::positive("bandwidth", width)?;
        let low = (TWO_PI * (center - 0.5 * width) / sample_rate).max(EDGE_MARGIN);
        let high = (TWO_PI * (center + 0.5 * width) / sample_rate).min(PI - EDGE_MARGIN);
        if high <= low {
            return Err(FilterError::InvalidParameter {
                name: "bandwidth",
                value: width,
            });
        }
        Ok(Self {
            low,
            high,
            center: TWO_PI * center / sample_rate,
        })
    }

    /// Lower edge in radians per sample.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper edge in radians per sample.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Requested centre in radians per sample.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Digital image of the analog geometric centre.
    pub fn geometric_center(&self) -> f64 {
        let (w0, _) = self.analog();
        unwarp(w0)
    }

    /// Prewarped analog centre `ω0 = sqrt(W1·W2)` and width `B = W2 − W1`.
    pub fn analog(&self) -> (f64, f64) {
        let w1 = prewarp_angle(self.low);
        let w2 = prewarp_angle(self.high);
        (libm::sqrt(w1 * w2), w2 - w1)
    }

    /// Nyquist or DC, whichever is farther from the centre.
    fn far_edge(&self) -> f64 {
        if self.center < 0.5 * PI { PI } else { 0.0 }
    }
}

/// `true` when the prototype is referenced at DC rather than at `s = ∞`.
fn dc_referenced(analog: &PoleZeroLayout) -> bool {
    analog.normal_w() < 0.5 * PI
}

/// Low-pass to low-pass with cutoff `w` (prewarped, `f_s = 1`).
pub fn low_pass(analog: &PoleZeroLayout, w: f64, out: &mut PoleZeroLayout) {
    out.clear();
    let scale = |r: Complex64| if is_infinite(r) { r } else { r * w };
    for pair in analog.pairs() {
        out.push(PoleZeroPair::new(pair.poles.map(scale), pair.zeros.map(scale)));
    }
    out.set_normal(analog.normal_w(), analog.normal_gain());
}

/// Low-pass to high-pass with cutoff `w` (prewarped, `f_s = 1`).
pub fn high_pass(analog: &PoleZeroLayout, w: f64, out: &mut PoleZeroLayout) {
    out.clear();
    let invert = |r: Complex64| {
        if is_infinite(r) {
            Complex64::new(0.0, 0.0)
        } else if r.norm_sqr() == 0.0 {
            infinity()
        } else {
            Complex64::new(w, 0.0) / r
        }
    };
    for pair in analog.pairs() {
        out.push(PoleZeroPair::new(pair.poles.map(invert), pair.zeros.map(invert)));
    }
    out.set_normal(PI - analog.normal_w(), analog.normal_gain());
}

/// Low-pass to band-pass over `edges`.
pub fn band_pass(analog: &PoleZeroLayout, edges: &BandEdges, out: &mut PoleZeroLayout) {
    let (w0, bw) = edges.analog();
    let one = Complex64::new(1.0, 0.0);
    let split = |r: Complex64| {
        if is_infinite(r) {
            (Complex64::new(0.0, 0.0), infinity())
        } else {
            quadratic_roots(one, -r * bw, Complex64::new(w0 * w0, 0.0))
        }
    };
    split_layout(analog, split, out);

    let normal_w = if dc_referenced(analog) {
        edges.geometric_center()
    } else {
        edges.far_edge()
    };
    out.set_normal(normal_w, analog.normal_gain());
}

/// Low-pass to band-stop over `edges`.
pub fn band_stop(analog: &PoleZeroLayout, edges: &BandEdges, out: &mut PoleZeroLayout) {
    let (w0, bw) = edges.analog();
    let one = Complex64::new(1.0, 0.0);
    let split = |r: Complex64| {
        if is_infinite(r) {
            (Complex64::new(0.0, w0), Complex64::new(0.0, -w0))
        } else if r.norm_sqr() == 0.0 {
            (Complex64::new(0.0, 0.0), infinity())
        } else {
            quadratic_roots(one, -(Complex64::new(bw, 0.0) / r), Complex64::new(w0 * w0, 0.0))
        }
    };
    split_layout(analog, split, out);

    let normal_w = if dc_referenced(analog) {
        edges.far_edge()
    } else {
        edges.geometric_center()
    };
    out.set_normal(normal_w, analog.normal_gain());
}

/// Applies a one-to-two root map, emitting one section per prototype root.
fn split_layout(
    analog: &PoleZeroLayout,
    split: impl Fn(Complex64) -> (Complex64, Complex64),
    out: &mut PoleZeroLayout,
) {
    out.clear();
    for pair in analog.pairs() {
        let (p1, p2) = split_roots(pair.poles, &split);
        let (z1, z2) = split_roots(pair.zeros, &split);
        out.push(PoleZeroPair::new(p1, z1));
        if let (Some(p2), Some(z2)) = (p2, z2) {
            out.push(PoleZeroPair::new(p2, z2));
        }
    }
}

/// Section root pairs produced by one prototype root pair.
///
/// A conjugate pair `{c, c̄}` maps to `{s1, s2, s̄1, s̄2}`, regrouped as the
/// conjugate pairs `{s1, s̄1}` and `{s2, s̄2}`. Each real root maps to the two
/// roots of a real quadratic, which form one section on their own.
fn split_roots(
    roots: RootPair,
    split: &impl Fn(Complex64) -> (Complex64, Complex64),
) -> (RootPair, Option<RootPair>) {
    match roots {
        RootPair::Conjugate(c) => {
            let (s1, s2) = split(c);
            (RootPair::conjugate(s1), Some(RootPair::conjugate(s2)))
        }
        RootPair::Real(a, b) => {
            let (a1, a2) = split(real(a));
            let (b1, b2) = split(real(b));
            (RootPair::from_roots(a1, a2), Some(RootPair::from_roots(b1, b2)))
        }
        RootPair::Single(a) => {
            let (a1, a2) = split(real(a));
            (RootPair::from_roots(a1, a2), None)
        }
    }
}

fn real(x: f64) -> Complex64 {
    if x.is_infinite() {
        infinity()
    } else {
        Complex64::new(x, 0.0)
    }
}
