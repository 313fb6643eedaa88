//! Filtro Design - IIR filter design on top of `filtro-core`
//!
//! Turns a family, a shape and a handful of parameters into a cascade of
//! second-order sections.
//!
//! # Pipeline
//!
//! ```text
//! AnalogPrototype ─► transform ─► bilinear ─► Cascade
//!  (unity cutoff)    (LP/HP/BP/BS) (z = (2+s)/(2-s))
//! ```
//!
//! - [`prototype`] - Normalized analog layouts for every family
//! - [`transform`] - Band mappings in the analog plane
//! - [`bilinear`] - s-plane to z-plane mapping and realization
//! - [`pole_filter::PoleFilterBase`] - Shared storage and orchestration
//!
//! # Families
//!
//! Each family module holds raw filters with a family-specific `setup(...)`
//! plus a `design` submodule of [`Design`](filtro_core::Design) adapters:
//!
//! - [`rbj`] - Cookbook biquads (low/high/band-pass, notch, shelves, all-pass)
//! - [`butterworth`] - Maximally flat, with shelves
//! - [`chebyshev_i`] - Passband ripple, with shelves
//! - [`chebyshev_ii`] - Stopband ripple, with shelves
//! - [`elliptic`] - Ripple in both bands
//! - [`bessel`] - Maximally flat group delay
//! - [`legendre`] - Steepest monotonic roll-off
//! - [`custom`] - Caller-supplied analog layouts and digital one/two-pole sections
//!
//! # Example
//!
//! ```rust
//! use filtro_core::{Filter, FilterDesign, RawFilter, SimpleFilter};
//! use filtro_design::butterworth;
//!
//! // Statically bound
//! let mut lp: SimpleFilter<butterworth::LowPass> =
//!     SimpleFilter::new(butterworth::LowPass::new(4), 1);
//! lp.setup(4, 44100.0, 1000.0).unwrap();
//! assert_eq!(lp.num_stages(), 2);
//!
//! // Parameter driven
//! let mut hp = FilterDesign::<_>::new(butterworth::design::HighPass::new(8), 2);
//! hp.set_param(2, 250.0).unwrap();
//! assert_eq!(hp.param(2), Ok(250.0));
//! ```
//!
//! # no_std Support
//!
//! Like `filtro-core`, this crate builds without `std`:
//!
//! ```toml
//! [dependencies]
//! filtro-design = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod macros;

pub mod bilinear;
pub mod pole_filter;
pub mod prototype;
pub mod transform;
pub mod validate;

pub mod bessel;
pub mod butterworth;
pub mod chebyshev_i;
pub mod chebyshev_ii;
pub mod custom;
pub mod elliptic;
pub mod legendre;
pub mod rbj;

// Re-export main types at crate root
pub use pole_filter::{BandShape, PoleFilterBase};
pub use prototype::{AnalogPrototype, MAX_ORDER};
pub use transform::BandEdges;
