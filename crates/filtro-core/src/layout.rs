//! Pole/zero layouts shared by the analog and digital design stages.
//!
//! Physical filters have conjugate-symmetric root sets, so only one
//! representative of each conjugate pair is stored. A [`RootPair`] holds the
//! two roots a second-order section needs (or the one root of the first-order
//! section an odd order leaves over), and a [`PoleZeroLayout`] is the ordered
//! collection of those pairs plus the gain reference the bilinear mapper
//! normalizes against.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::math::{Complex64, infinity, is_infinite};
use core::cmp::Ordering;

/// Relative tolerance under which an imaginary part is treated as zero.
const REAL_TOLERANCE: f64 = 1e-12;

/// The roots of one section: a conjugate pair, two real roots, or one real root.
///
/// Conjugate pairs are always stored in the upper half plane. Roots at
/// infinity are represented by [`infinity()`](crate::math::infinity) and only
/// appear as real roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootPair {
    /// `c` and `conj(c)`, with `c.im > 0`.
    Conjugate(Complex64),
    /// Two real roots.
    Real(f64, f64),
    /// A single real root (first-order section).
    Single(f64),
}

impl RootPair {
    /// Builds the pair `{c, conj(c)}` in canonical form.
    ///
    /// A real or infinite `c` becomes a double real root.
    pub fn conjugate(c: Complex64) -> Self {
        if is_infinite(c) {
            RootPair::Real(f64::INFINITY, f64::INFINITY)
        } else if c.im.abs() <= REAL_TOLERANCE * c.norm().max(1.0) {
            RootPair::Real(c.re, c.re)
        } else if c.im < 0.0 {
            RootPair::Conjugate(c.conj())
        } else {
            RootPair::Conjugate(c)
        }
    }

    /// Builds a pair from the two roots of a real quadratic.
    ///
    /// The roots are either both real (or infinite) or each other's conjugate.
    pub fn from_roots(a: Complex64, b: Complex64) -> Self {
        let real = |c: Complex64| is_infinite(c) || c.im.abs() <= REAL_TOLERANCE * c.norm().max(1.0);
        if real(a) && real(b) {
            let re = |c: Complex64| if is_infinite(c) { f64::INFINITY } else { c.re };
            RootPair::Real(re(a), re(b))
        } else {
            RootPair::conjugate(a)
        }
    }

    /// Number of roots held: 2, or 1 for [`RootPair::Single`].
    pub fn count(&self) -> usize {
        match self {
            RootPair::Single(_) => 1,
            _ => 2,
        }
    }

    /// Returns `true` for a first-order root.
    pub fn is_single(&self) -> bool {
        matches!(self, RootPair::Single(_))
    }

    /// The stored representative root.
    pub fn first(&self) -> Complex64 {
        match *self {
            RootPair::Conjugate(c) => c,
            RootPair::Real(a, _) | RootPair::Single(a) => real_root(a),
        }
    }

    /// The second root, `None` for a single root.
    pub fn second(&self) -> Option<Complex64> {
        match *self {
            RootPair::Conjugate(c) => Some(c.conj()),
            RootPair::Real(_, b) => Some(real_root(b)),
            RootPair::Single(_) => None,
        }
    }

    /// Applies a real-coefficient root mapping to every root.
    ///
    /// The mapping must commute with conjugation (true for every frequency
    /// transform and the bilinear transform), so a conjugate pair stays one.
    pub fn map(self, f: impl Fn(Complex64) -> Complex64) -> Self {
        match self {
            RootPair::Conjugate(c) => RootPair::conjugate(f(c)),
            RootPair::Real(a, b) => {
                RootPair::Real(real_part(f(real_root(a))), real_part(f(real_root(b))))
            }
            RootPair::Single(a) => RootPair::Single(real_part(f(real_root(a)))),
        }
    }

    /// Returns `true` if every root is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            RootPair::Conjugate(c) => c.re.is_finite() && c.im.is_finite(),
            RootPair::Real(a, b) => a.is_finite() && b.is_finite(),
            RootPair::Single(a) => a.is_finite(),
        }
    }
}

fn real_root(x: f64) -> Complex64 {
    if x.is_infinite() {
        infinity()
    } else {
        Complex64::new(x, 0.0)
    }
}

fn real_part(c: Complex64) -> f64 {
    if is_infinite(c) { f64::INFINITY } else { c.re }
}

/// Matched poles and zeros of one section. Both sides hold the same number of roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoleZeroPair {
    /// Section poles.
    pub poles: RootPair,
    /// Section zeros.
    pub zeros: RootPair,
}

impl PoleZeroPair {
    /// Pairs poles with zeros of the same arity.
    pub fn new(poles: RootPair, zeros: RootPair) -> Self {
        debug_assert_eq!(poles.count(), zeros.count());
        Self { poles, zeros }
    }

    /// Conjugate pole pair with conjugate zero pair.
    pub fn conjugate(pole: Complex64, zero: Complex64) -> Self {
        Self::new(RootPair::conjugate(pole), RootPair::conjugate(zero))
    }

    /// First-order pole/zero.
    pub fn single(pole: f64, zero: f64) -> Self {
        Self::new(RootPair::Single(pole), RootPair::Single(zero))
    }

    /// Returns `true` for a first-order pair.
    pub fn is_single(&self) -> bool {
        self.poles.is_single()
    }
}

/// An ordered, fixed-capacity set of pole/zero pairs plus the gain reference.
///
/// The gain reference `(normal_w, normal_gain)` names a digital angular
/// frequency in `[0, π]` and the magnitude the realized cascade must have
/// there. Capacity is reserved once; design code never pushes past it.
#[derive(Debug, Clone)]
pub struct PoleZeroLayout {
    pairs: Vec<PoleZeroPair>,
    normal_w: f64,
    normal_gain: f64,
}

impl PoleZeroLayout {
    /// Creates an empty layout able to hold `max_poles` poles.
    pub fn with_max_poles(max_poles: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(max_poles.div_ceil(2)),
            normal_w: 0.0,
            normal_gain: 1.0,
        }
    }

    /// Removes every pair and resets the gain reference to unity at DC.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.normal_w = 0.0;
        self.normal_gain = 1.0;
    }

    /// Number of pairs that fit without reallocating.
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Appends a pair.
    ///
    /// A single (first-order) pair must be the last one added.
    pub fn push(&mut self, pair: PoleZeroPair) {
        debug_assert!(self.pairs.len() < self.pairs.capacity(), "layout capacity exceeded");
        debug_assert!(
            self.pairs.last().is_none_or(|last| !last.is_single()),
            "single pole/zero must be last"
        );
        self.pairs.push(pair);
    }

    /// Appends a conjugate pole pair with its conjugate zero pair.
    pub fn add_conjugate_pairs(&mut self, pole: Complex64, zero: Complex64) {
        self.push(PoleZeroPair::conjugate(pole, zero));
    }

    /// Appends a first-order real pole and zero.
    pub fn add_single(&mut self, pole: f64, zero: f64) {
        self.push(PoleZeroPair::single(pole, zero));
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Total number of poles (equal to the number of zeros).
    pub fn num_poles(&self) -> usize {
        self.pairs.iter().map(|p| p.poles.count()).sum()
    }

    /// The stored pairs.
    pub fn pairs(&self) -> &[PoleZeroPair] {
        &self.pairs
    }

    /// Every pole, conjugates included.
    pub fn poles(&self) -> impl Iterator<Item = Complex64> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| core::iter::once(p.poles.first()).chain(p.poles.second()))
    }

    /// Every zero, conjugates and zeros at infinity included.
    pub fn zeros(&self) -> impl Iterator<Item = Complex64> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| core::iter::once(p.zeros.first()).chain(p.zeros.second()))
    }

    /// Sets the gain reference.
    pub fn set_normal(&mut self, w: f64, gain: f64) {
        self.normal_w = w;
        self.normal_gain = gain;
    }

    /// Digital angular frequency of the gain reference.
    pub fn normal_w(&self) -> f64 {
        self.normal_w
    }

    /// Magnitude required at [`normal_w`](Self::normal_w).
    pub fn normal_gain(&self) -> f64 {
        self.normal_gain
    }

    /// Replaces the contents with a copy of `other` without reallocating.
    pub fn copy_from(&mut self, other: &PoleZeroLayout) {
        debug_assert!(other.len() <= self.capacity(), "layout capacity exceeded");
        self.pairs.clear();
        self.pairs.extend_from_slice(&other.pairs);
        self.normal_w = other.normal_w;
        self.normal_gain = other.normal_gain;
    }

    /// Applies a real-coefficient root mapping to every pole and zero in place.
    ///
    /// The gain reference is left unchanged.
    pub fn map_roots(&mut self, f: impl Fn(Complex64) -> Complex64) {
        for pair in &mut self.pairs {
            pair.poles = pair.poles.map(&f);
            pair.zeros = pair.zeros.map(&f);
        }
    }

    /// Orders sections by ascending pole angle with the first-order section last.
    ///
    /// The ordering is a pure function of the roots, so identical designs
    /// always produce identical cascades.
    pub fn sort_sections(&mut self) {
        self.pairs.sort_unstable_by(|a, b| match (a.is_single(), b.is_single()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => {
                let (pa, pb) = (a.poles.first(), b.poles.first());
                pa.arg()
                    .abs()
                    .total_cmp(&pb.arg().abs())
                    .then(pa.norm().total_cmp(&pb.norm()))
            }
        });
    }

    /// Returns `true` if every root except zeros at infinity is finite.
    pub fn is_finite(&self) -> bool {
        self.pairs.iter().all(|p| p.poles.is_finite())
    }
}
