//! The shared design pipeline behind every pole/zero family.
//!
//! ```text
//! prototype ──► analog layout ──► transform ──► bilinear ──► staging ──swap──► cascade
//! ```
//!
//! Every buffer along the way is sized once in [`PoleFilterBase::new`].
//! Each stage writes into the next one's storage, and the installed
//! cascade is only replaced once the whole chain has succeeded.

use filtro_core::{Cascade, FilterError, Kind, PoleZeroLayout, prewarp};

use crate::bilinear;
use crate::prototype::{AnalogPrototype, MAX_ORDER};
use crate::transform::{self, BandEdges};
use crate::validate;

/// Target shape of a pole filter, with its frequencies in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandShape {
    /// Passes below `cutoff`.
    LowPass {
        /// Cutoff frequency.
        cutoff: f64,
    },
    /// Passes above `cutoff`.
    HighPass {
        /// Cutoff frequency.
        cutoff: f64,
    },
    /// Passes `center ∓ width/2`.
    BandPass {
        /// Centre frequency.
        center: f64,
        /// Bandwidth.
        width: f64,
    },
    /// Rejects `center ∓ width/2`.
    BandStop {
        /// Centre frequency.
        center: f64,
        /// Bandwidth.
        width: f64,
    },
    /// Shelf prototype through the low-pass mapping.
    LowShelf {
        /// Corner frequency.
        cutoff: f64,
    },
    /// Shelf prototype through the high-pass mapping.
    HighShelf {
        /// Corner frequency.
        cutoff: f64,
    },
    /// Shelf prototype through the band-pass mapping.
    BandShelf {
        /// Centre frequency.
        center: f64,
        /// Bandwidth.
        width: f64,
    },
}

impl BandShape {
    /// Returns `true` for shapes that double the prototype order.
    pub fn is_band(&self) -> bool {
        matches!(
            self,
            BandShape::BandPass { .. } | BandShape::BandStop { .. } | BandShape::BandShelf { .. }
        )
    }

    /// The response shape this produces.
    pub fn kind(&self) -> Kind {
        match self {
            BandShape::LowPass { .. } => Kind::LowPass,
            BandShape::HighPass { .. } => Kind::HighPass,
            BandShape::BandPass { .. } => Kind::BandPass,
            BandShape::BandStop { .. } => Kind::BandStop,
            BandShape::LowShelf { .. } => Kind::LowShelf,
            BandShape::HighShelf { .. } => Kind::HighShelf,
            BandShape::BandShelf { .. } => Kind::BandShelf,
        }
    }

    /// Prototype order needed for a result of order `order`.
    pub fn prototype_order(&self, order: usize) -> usize {
        if self.is_band() { order.div_ceil(2) } else { order }
    }
}

/// A [`BandShape`] resolved against a sample rate.
enum Mapping {
    LowPass(f64),
    HighPass(f64),
    BandPass(BandEdges),
    BandStop(BandEdges),
}

impl Mapping {
    fn resolve(shape: BandShape, sample_rate: f64) -> Result<Self, FilterError> {
        Ok(match shape {
            BandShape::LowPass { cutoff } | BandShape::LowShelf { cutoff } => {
                validate::frequency(cutoff, sample_rate)?;
                Mapping::LowPass(prewarp(cutoff, sample_rate))
            }
            BandShape::HighPass { cutoff } | BandShape::HighShelf { cutoff } => {
                validate::frequency(cutoff, sample_rate)?;
                Mapping::HighPass(prewarp(cutoff, sample_rate))
            }
            BandShape::BandPass { center, width } | BandShape::BandShelf { center, width } => {
                Mapping::BandPass(BandEdges::new(center, width, sample_rate)?)
            }
            BandShape::BandStop { center, width } => {
                Mapping::BandStop(BandEdges::new(center, width, sample_rate)?)
            }
        })
    }

    fn apply(&self, analog: &PoleZeroLayout, out: &mut PoleZeroLayout) {
        match self {
            Mapping::LowPass(w) => transform::low_pass(analog, *w, out),
            Mapping::HighPass(w) => transform::high_pass(analog, *w, out),
            Mapping::BandPass(edges) => transform::band_pass(analog, edges, out),
            Mapping::BandStop(edges) => transform::band_stop(analog, edges, out),
        }
    }
}

/// Storage and orchestration shared by every pole/zero family.
///
/// A failed [`setup`](Self::setup) leaves the installed cascade untouched;
/// the scratch layouts may hold partial results, which are never read.
#[derive(Debug, Clone)]
pub struct PoleFilterBase {
    max_order: usize,
    analog: PoleZeroLayout,
    digital: PoleZeroLayout,
    cascade: Cascade,
    staging: Cascade,
}

impl PoleFilterBase {
    /// Reserves storage for designs up to `max_order` (clamped to `1..=MAX_ORDER`).
    ///
    /// The cascade starts empty and passes input through unchanged.
    pub fn new(max_order: usize) -> Self {
        let max_order = max_order.clamp(1, MAX_ORDER);
        Self {
            max_order,
            analog: PoleZeroLayout::with_max_poles(max_order),
            digital: PoleZeroLayout::with_max_poles(max_order),
            cascade: Cascade::for_order(max_order),
            staging: Cascade::for_order(max_order),
        }
    }

    /// Highest order [`setup`](Self::setup) accepts.
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// The installed cascade.
    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    /// Analog layout of the most recent design attempt, after the prototype stage.
    pub fn analog_layout(&self) -> &PoleZeroLayout {
        &self.analog
    }

    /// Digital layout of the most recent successful design.
    pub fn digital_layout(&self) -> &PoleZeroLayout {
        &self.digital
    }

    /// Runs the full pipeline and installs the result.
    ///
    /// `order` is the order of the final filter; band shapes design a
    /// prototype of half that order (rounded up).
    pub fn setup<P: AnalogPrototype + ?Sized>(
        &mut self,
        prototype: &P,
        order: usize,
        sample_rate: f64,
        shape: BandShape,
    ) -> Result<(), FilterError> {
        validate::order(order, self.max_order)?;
        validate::sample_rate(sample_rate)?;
        prototype.validate()?;
        let mapping = Mapping::resolve(shape, sample_rate)?;

        prototype.design(shape.prototype_order(order), &mut self.analog);
        if !self.analog.is_finite() {
            return Err(FilterError::NumericalFailure);
        }
        mapping.apply(&self.analog, &mut self.digital);
        bilinear::realize(&mut self.digital, &mut self.staging)?;
        // Band edges clamped against DC or Nyquist can round a pole onto the circle.
        if !self.staging.is_stable() {
            return Err(FilterError::NumericalFailure);
        }
        core::mem::swap(&mut self.cascade, &mut self.staging);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = %shape.kind(),
            order,
            sample_rate,
            stages = self.cascade.num_stages(),
            "pole filter designed"
        );

        Ok(())
    }
}
