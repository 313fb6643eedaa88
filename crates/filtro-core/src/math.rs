//! Scalar and complex helpers shared by the design and runtime code.
//!
//! All transcendental functions go through `libm` so the crate stays
//! `no_std`. Complex arithmetic uses [`num_complex::Complex64`].

pub use num_complex::Complex64;

/// π as used throughout the design code.
pub const PI: f64 = core::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Marker for a root at infinity.
///
/// Zeros at infinity are stored explicitly so that every layout keeps equal
/// pole and zero counts.
#[inline]
pub fn infinity() -> Complex64 {
    Complex64::new(f64::INFINITY, 0.0)
}

/// Returns `true` for the [`infinity`] marker (or any non-finite component).
#[inline]
pub fn is_infinite(c: Complex64) -> bool {
    c.re.is_infinite() || c.im.is_infinite()
}

/// Converts decibels to linear gain.
///
/// # Example
///
/// ```rust
/// use filtro_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
/// assert!((db_to_linear(20.0) - 10.0).abs() < 1e-12);
/// ```
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    libm::pow(10.0, db / 20.0)
}

/// Converts linear gain to decibels. Values at or below `1e-30` clamp to -600 dB.
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    if linear <= 1e-30 {
        -600.0
    } else {
        20.0 * libm::log10(linear)
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Flush denormal numbers to zero.
///
/// Decaying IIR tails otherwise settle into the subnormal range, which is
/// dramatically slower on most FPUs.
#[inline]
pub fn flush_denormal(x: f64) -> f64 {
    if x.abs() < 1e-30 { 0.0 } else { x }
}

/// Roots of `a·x² + b·x + c = 0` for complex coefficients, `a ≠ 0`.
///
/// Uses the cancellation-free form `q = -(b ± √Δ)/2`, `x₁ = q/a`, `x₂ = c/q`.
pub fn quadratic_roots(a: Complex64, b: Complex64, c: Complex64) -> (Complex64, Complex64) {
    let disc = (b * b - a * c * 4.0).sqrt();
    let q = if (b.conj() * disc).re >= 0.0 {
        -(b + disc) * 0.5
    } else {
        -(b - disc) * 0.5
    };
    if q.norm_sqr() == 0.0 {
        return (Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0));
    }
    (q / a, c / q)
}

/// Prewarped analog angular frequency for a digital frequency in Hz.
///
/// The analog design works in units of the sample rate (`f_s = 1`), so this
/// returns `2·tan(π·f/f_s)`.
#[inline]
pub fn prewarp(frequency: f64, sample_rate: f64) -> f64 {
    2.0 * libm::tan(PI * frequency / sample_rate)
}
