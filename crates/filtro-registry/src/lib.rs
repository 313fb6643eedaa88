//! Filter registry and factory for filtro designs.
//!
//! This crate provides a centralized registry for discovering and instantiating
//! every filter design in `filtro-design` by a stable string id, so presets,
//! hosts and tools can pick a filter at runtime.
//!
//! # Features
//!
//! - **Filter Discovery**: List all available designs with metadata
//! - **Factory Pattern**: Create filters by id at runtime
//! - **Family System**: Designs grouped by family (Butterworth, Elliptic, ...)
//! - **Realization Choice**: Pick the state form and smoothing once, at creation
//!
//! Ids have the form `"<family>/<shape>"`, for example `"butterworth/lowpass"`,
//! `"chebyshev_ii/bandshelf"` or `"rbj/allpass"`.
//!
//! # Example
//!
//! ```rust
//! use filtro_core::{Filter, ParamId, Realization};
//! use filtro_registry::{Family, FilterOptions, FilterRegistry};
//!
//! let registry = FilterRegistry::new();
//!
//! // List all filters
//! for filter in registry.all_filters() {
//!     println!("{}: {}", filter.id, filter.name);
//! }
//!
//! // Create a filter by id
//! let options = FilterOptions {
//!     channels: 2,
//!     realization: Realization::TransposedDirectFormII,
//!     ..FilterOptions::default()
//! };
//! if let Some(mut filter) = registry.create("elliptic/lowpass", &options) {
//!     filter.set_param_by_id(ParamId::Frequency, 2000.0).unwrap();
//!     let mut left = [0.5f32; 64];
//!     let mut right = [0.5f32; 64];
//!     filter.process(64, &mut [&mut left, &mut right]);
//! }
//!
//! // Filter by family
//! for filter in registry.filters_in_family(Family::Bessel) {
//!     println!("Bessel design: {}", filter.name);
//! }
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the default
//! `std` feature:
//!
//! ```toml
//! [dependencies]
//! filtro-registry = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use core::fmt;

use filtro_core::{
    Design, DirectFormI, DirectFormII, Filter, FilterDesign, Kind, ParamId, Realization,
    SmoothedFilterDesign, StateRealization, TransposedDirectFormII,
};
use filtro_design::{
    bessel, butterworth, chebyshev_i, chebyshev_ii, custom, elliptic, legendre, rbj,
};

pub use filtro_design::MAX_ORDER;

/// Design family, the part of an id before the slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Robert Bristow-Johnson cookbook biquads
    Rbj,
    /// Maximally flat passband
    Butterworth,
    /// Equiripple passband
    ChebyshevI,
    /// Equiripple stopband
    ChebyshevII,
    /// Equiripple in both bands (Cauer)
    Elliptic,
    /// Maximally flat group delay
    Bessel,
    /// Steepest monotonic rolloff (Papoulis "optimum L")
    Legendre,
    /// Hand-placed poles and zeros
    Custom,
}

impl Family {
    /// Every family, in registration order.
    pub const ALL: [Family; 8] = [
        Family::Rbj,
        Family::Butterworth,
        Family::ChebyshevI,
        Family::ChebyshevII,
        Family::Elliptic,
        Family::Bessel,
        Family::Legendre,
        Family::Custom,
    ];

    /// Id prefix used in registry ids.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Family::Rbj => "rbj",
            Family::Butterworth => "butterworth",
            Family::ChebyshevI => "chebyshev_i",
            Family::ChebyshevII => "chebyshev_ii",
            Family::Elliptic => "elliptic",
            Family::Bessel => "bessel",
            Family::Legendre => "legendre",
            Family::Custom => "custom",
        }
    }

    /// Returns a human-readable name for the family.
    pub const fn name(&self) -> &'static str {
        match self {
            Family::Rbj => "RBJ",
            Family::Butterworth => "Butterworth",
            Family::ChebyshevI => "Chebyshev I",
            Family::ChebyshevII => "Chebyshev II",
            Family::Elliptic => "Elliptic",
            Family::Bessel => "Bessel",
            Family::Legendre => "Legendre",
            Family::Custom => "Custom",
        }
    }

    /// Returns a description of the family.
    pub const fn description(&self) -> &'static str {
        match self {
            Family::Rbj => {
                "Single-section cookbook filters set by frequency, Q, slope or bandwidth"
            }
            Family::Butterworth => "Maximally flat passband, no ripple anywhere",
            Family::ChebyshevI => "Steeper rolloff traded for passband ripple",
            Family::ChebyshevII => "Flat passband with an equiripple stopband floor",
            Family::Elliptic => "Steepest transition, ripple in both passband and stopband",
            Family::Bessel => "Near-linear phase, gentle rolloff",
            Family::Legendre => "Steepest rolloff with a monotonic passband",
            Family::Custom => "One- and two-pole sections placed directly in the z-plane",
        }
    }

    /// Whether designs of this family take an order parameter.
    pub const fn has_order(&self) -> bool {
        !matches!(self, Family::Rbj | Family::Custom)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes a filter design in the registry.
#[derive(Debug, Clone)]
pub struct FilterDescriptor {
    /// Unique identifier, `"<family>/<shape>"`.
    pub id: &'static str,
    /// Human-readable name, identical to the design's [`Filter::name`].
    pub name: &'static str,
    /// Design family.
    pub family: Family,
    /// Response shape.
    pub kind: Kind,
    /// Number of parameters.
    pub param_count: usize,
    /// Whether slot 1 is the filter order.
    pub has_order: bool,
}

/// How a registry filter is instantiated.
///
/// The realization and smoothing choice are resolved once, at creation; the
/// returned filter runs a statically dispatched state form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    /// Channel count. Zero builds an analysis-only filter.
    pub channels: usize,
    /// State realization for processing.
    pub realization: Realization,
    /// Capacity for designs with an order parameter. Ignored by RBJ and custom sections.
    pub max_order: usize,
    /// Coefficient transition length in samples. Zero installs updates immediately.
    pub smoothing_samples: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            channels: 2,
            realization: Realization::default(),
            max_order: 8,
            smoothing_samples: 0,
        }
    }
}

/// Factory function type for creating filters.
type FilterFactory = fn(&FilterOptions) -> Box<dyn Filter>;

/// Internal entry in the registry.
struct RegistryEntry {
    descriptor: FilterDescriptor,
    factory: FilterFactory,
}

/// Wraps `design` in the adapter and state form named by `options`.
fn build<D: Design>(design: D, options: &FilterOptions) -> Box<dyn Filter> {
    fn wrap<D: Design, S: StateRealization>(
        design: D,
        options: &FilterOptions,
    ) -> Box<dyn Filter> {
        if options.smoothing_samples == 0 {
            Box::new(FilterDesign::<D, S>::new(design, options.channels))
        } else {
            Box::new(SmoothedFilterDesign::<D, S>::new(
                design,
                options.channels,
                options.smoothing_samples,
            ))
        }
    }

    match options.realization {
        Realization::DirectFormI => wrap::<D, DirectFormI>(design, options),
        Realization::DirectFormII => wrap::<D, DirectFormII>(design, options),
        Realization::TransposedDirectFormII => wrap::<D, TransposedDirectFormII>(design, options),
    }
}

/// Registry of all available filter designs.
///
/// The registry provides a centralized way to discover and instantiate
/// filters by id. All built-in designs are registered on construction.
pub struct FilterRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRegistry {
    /// Create a new registry with all built-in designs registered.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(44),
        };
        registry.register_rbj();
        registry.register_butterworth();
        registry.register_chebyshev_i();
        registry.register_chebyshev_ii();
        registry.register_elliptic();
        registry.register_bessel();
        registry.register_legendre();
        registry.register_custom();
        registry
    }

    fn register_rbj(&mut self) {
        let family = Family::Rbj;
        self.register(family, "rbj/lowpass", "RBJ Low Pass", Kind::LowPass, 3, |o| {
            build(rbj::design::LowPass::new(), o)
        });
        self.register(family, "rbj/highpass", "RBJ High Pass", Kind::HighPass, 3, |o| {
            build(rbj::design::HighPass::new(), o)
        });
        self.register(family, "rbj/bandpass1", "RBJ Band Pass 1", Kind::BandPass, 3, |o| {
            build(rbj::design::BandPass1::new(), o)
        });
        self.register(family, "rbj/bandpass2", "RBJ Band Pass 2", Kind::BandPass, 3, |o| {
            build(rbj::design::BandPass2::new(), o)
        });
        self.register(family, "rbj/bandstop", "RBJ Band Stop", Kind::BandStop, 3, |o| {
            build(rbj::design::BandStop::new(), o)
        });
        self.register(family, "rbj/lowshelf", "RBJ Low Shelf", Kind::LowShelf, 4, |o| {
            build(rbj::design::LowShelf::new(), o)
        });
        self.register(family, "rbj/highshelf", "RBJ High Shelf", Kind::HighShelf, 4, |o| {
            build(rbj::design::HighShelf::new(), o)
        });
        self.register(family, "rbj/bandshelf", "RBJ Band Shelf", Kind::BandShelf, 4, |o| {
            build(rbj::design::BandShelf::new(), o)
        });
        self.register(family, "rbj/allpass", "RBJ All Pass", Kind::AllPass, 3, |o| {
            build(rbj::design::AllPass::new(), o)
        });
    }

    fn register_butterworth(&mut self) {
        use butterworth::design as d;
        let family = Family::Butterworth;
        self.register(family, "butterworth/lowpass", "Butterworth Low Pass", Kind::LowPass, 3, |o| {
            build(d::LowPass::new(o.max_order), o)
        });
        self.register(
            family,
            "butterworth/highpass",
            "Butterworth High Pass",
            Kind::HighPass,
            3,
            |o| build(d::HighPass::new(o.max_order), o),
        );
        self.register(
            family,
            "butterworth/bandpass",
            "Butterworth Band Pass",
            Kind::BandPass,
            4,
            |o| build(d::BandPass::new(o.max_order), o),
        );
        self.register(
            family,
            "butterworth/bandstop",
            "Butterworth Band Stop",
            Kind::BandStop,
            4,
            |o| build(d::BandStop::new(o.max_order), o),
        );
        self.register(
            family,
            "butterworth/lowshelf",
            "Butterworth Low Shelf",
            Kind::LowShelf,
            4,
            |o| build(d::LowShelf::new(o.max_order), o),
        );
        self.register(
            family,
            "butterworth/highshelf",
            "Butterworth High Shelf",
            Kind::HighShelf,
            4,
            |o| build(d::HighShelf::new(o.max_order), o),
        );
        self.register(
            family,
            "butterworth/bandshelf",
            "Butterworth Band Shelf",
            Kind::BandShelf,
            5,
            |o| build(d::BandShelf::new(o.max_order), o),
        );
    }

    fn register_chebyshev_i(&mut self) {
        use chebyshev_i::design as d;
        let family = Family::ChebyshevI;
        self.register(family, "chebyshev_i/lowpass", "Chebyshev I Low Pass", Kind::LowPass, 4, |o| {
            build(d::LowPass::new(o.max_order), o)
        });
        self.register(
            family,
            "chebyshev_i/highpass",
            "Chebyshev I High Pass",
            Kind::HighPass,
            4,
            |o| build(d::HighPass::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_i/bandpass",
            "Chebyshev I Band Pass",
            Kind::BandPass,
            5,
            |o| build(d::BandPass::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_i/bandstop",
            "Chebyshev I Band Stop",
            Kind::BandStop,
            5,
            |o| build(d::BandStop::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_i/lowshelf",
            "Chebyshev I Low Shelf",
            Kind::LowShelf,
            5,
            |o| build(d::LowShelf::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_i/highshelf",
            "Chebyshev I High Shelf",
            Kind::HighShelf,
            5,
            |o| build(d::HighShelf::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_i/bandshelf",
            "Chebyshev I Band Shelf",
            Kind::BandShelf,
            6,
            |o| build(d::BandShelf::new(o.max_order), o),
        );
    }

    fn register_chebyshev_ii(&mut self) {
        use chebyshev_ii::design as d;
        let family = Family::ChebyshevII;
        self.register(
            family,
            "chebyshev_ii/lowpass",
            "Chebyshev II Low Pass",
            Kind::LowPass,
            4,
            |o| build(d::LowPass::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_ii/highpass",
            "Chebyshev II High Pass",
            Kind::HighPass,
            4,
            |o| build(d::HighPass::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_ii/bandpass",
            "Chebyshev II Band Pass",
            Kind::BandPass,
            5,
            |o| build(d::BandPass::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_ii/bandstop",
            "Chebyshev II Band Stop",
            Kind::BandStop,
            5,
            |o| build(d::BandStop::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_ii/lowshelf",
            "Chebyshev II Low Shelf",
            Kind::LowShelf,
            5,
            |o| build(d::LowShelf::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_ii/highshelf",
            "Chebyshev II High Shelf",
            Kind::HighShelf,
            5,
            |o| build(d::HighShelf::new(o.max_order), o),
        );
        self.register(
            family,
            "chebyshev_ii/bandshelf",
            "Chebyshev II Band Shelf",
            Kind::BandShelf,
            6,
            |o| build(d::BandShelf::new(o.max_order), o),
        );
    }

    fn register_elliptic(&mut self) {
        use elliptic::design as d;
        let family = Family::Elliptic;
        self.register(family, "elliptic/lowpass", "Elliptic Low Pass", Kind::LowPass, 5, |o| {
            build(d::LowPass::new(o.max_order), o)
        });
        self.register(family, "elliptic/highpass", "Elliptic High Pass", Kind::HighPass, 5, |o| {
            build(d::HighPass::new(o.max_order), o)
        });
        self.register(family, "elliptic/bandpass", "Elliptic Band Pass", Kind::BandPass, 6, |o| {
            build(d::BandPass::new(o.max_order), o)
        });
        self.register(family, "elliptic/bandstop", "Elliptic Band Stop", Kind::BandStop, 6, |o| {
            build(d::BandStop::new(o.max_order), o)
        });
    }

    fn register_bessel(&mut self) {
        use bessel::design as d;
        let family = Family::Bessel;
        self.register(family, "bessel/lowpass", "Bessel Low Pass", Kind::LowPass, 3, |o| {
            build(d::LowPass::new(o.max_order), o)
        });
        self.register(family, "bessel/highpass", "Bessel High Pass", Kind::HighPass, 3, |o| {
            build(d::HighPass::new(o.max_order), o)
        });
        self.register(family, "bessel/bandpass", "Bessel Band Pass", Kind::BandPass, 4, |o| {
            build(d::BandPass::new(o.max_order), o)
        });
        self.register(family, "bessel/bandstop", "Bessel Band Stop", Kind::BandStop, 4, |o| {
            build(d::BandStop::new(o.max_order), o)
        });
    }

    fn register_legendre(&mut self) {
        use legendre::design as d;
        let family = Family::Legendre;
        self.register(family, "legendre/lowpass", "Legendre Low Pass", Kind::LowPass, 3, |o| {
            build(d::LowPass::new(o.max_order), o)
        });
        self.register(family, "legendre/highpass", "Legendre High Pass", Kind::HighPass, 3, |o| {
            build(d::HighPass::new(o.max_order), o)
        });
        self.register(family, "legendre/bandpass", "Legendre Band Pass", Kind::BandPass, 4, |o| {
            build(d::BandPass::new(o.max_order), o)
        });
        self.register(family, "legendre/bandstop", "Legendre Band Stop", Kind::BandStop, 4, |o| {
            build(d::BandStop::new(o.max_order), o)
        });
    }

    fn register_custom(&mut self) {
        let family = Family::Custom;
        self.register(family, "custom/onepole", "Custom One Pole", Kind::Other, 4, |o| {
            build(custom::design::OnePole::new(), o)
        });
        self.register(family, "custom/twopole", "Custom Two Pole", Kind::Other, 6, |o| {
            build(custom::design::TwoPole::new(), o)
        });
    }

    /// Register a design with the registry.
    fn register(
        &mut self,
        family: Family,
        id: &'static str,
        name: &'static str,
        kind: Kind,
        param_count: usize,
        factory: FilterFactory,
    ) {
        self.entries.push(RegistryEntry {
            descriptor: FilterDescriptor {
                id,
                name,
                family,
                kind,
                param_count,
                has_order: family.has_order(),
            },
            factory,
        });
    }

    /// Returns descriptors for all registered filters.
    pub fn all_filters(&self) -> Vec<&FilterDescriptor> {
        self.entries.iter().map(|e| &e.descriptor).collect()
    }

    /// Returns descriptors for filters in a specific family.
    pub fn filters_in_family(&self, family: Family) -> Vec<&FilterDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.descriptor.family == family)
            .map(|e| &e.descriptor)
            .collect()
    }

    /// Returns descriptors for filters with a given response shape.
    pub fn filters_of_kind(&self, kind: Kind) -> Vec<&FilterDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.descriptor.kind == kind)
            .map(|e| &e.descriptor)
            .collect()
    }

    /// Get a descriptor by filter id.
    pub fn get(&self, id: &str) -> Option<&FilterDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.id == id)
            .map(|e| &e.descriptor)
    }

    /// Create a filter instance by id.
    ///
    /// Returns `None` if the id is not found. The filter starts with its
    /// design's default parameters applied.
    pub fn create(&self, id: &str, options: &FilterOptions) -> Option<Box<dyn Filter>> {
        let entry = self.entries.iter().find(|e| e.descriptor.id == id)?;
        let filter = (entry.factory)(options);
        tracing::debug!(
            id,
            channels = options.channels,
            realization = options.realization.as_str(),
            smoothing = options.smoothing_samples,
            "filter created"
        );
        Some(filter)
    }

    /// Find a parameter slot by its stable name (see [`ParamId::as_str`]).
    ///
    /// Creates a temporary analysis-only filter to scan its parameter table.
    /// Returns `None` if the filter id or parameter name is not found.
    pub fn param_index(&self, filter_id: &str, param_name: &str) -> Option<usize> {
        let id: ParamId = param_name.parse().ok()?;
        let options = FilterOptions {
            channels: 0,
            ..FilterOptions::default()
        };
        self.create(filter_id, &options)?.find_param_index(id)
    }

    /// Returns the number of registered filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no filters are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
