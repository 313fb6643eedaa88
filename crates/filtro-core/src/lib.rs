//! Filtro Core - realization layer for cascaded IIR filters
//!
//! This crate holds everything downstream of filter design: the pole/zero
//! representation designs produce, the second-order sections they compile
//! to, and the state machinery that runs those sections over audio.
//!
//! # Core Abstractions
//!
//! ## Design Output
//!
//! - [`PoleZeroLayout`] - Conjugate-closed set of pole/zero pairs plus a gain reference
//! - [`BiquadCoefficients`] - One normalized second-order section
//! - [`Cascade`] - Ordered sections with a bounded capacity
//!
//! ## Realizations
//!
//! Three difference-equation forms share the same coefficients:
//!
//! - [`DirectFormI`] - Four registers, tolerant of coefficient jumps
//! - [`DirectFormII`] - Two registers, the default
//! - [`TransposedDirectFormII`] - Two registers, good float behaviour
//!
//! ## Filters
//!
//! - [`RawFilter`] - Coefficient access for statically bound filters
//! - [`SimpleFilter`] - Raw filter plus channel state
//! - [`Design`] - Family/shape driven by positional [`Params`]
//! - [`Filter`] - Object-safe filter with parameter introspection
//! - [`FilterDesign`] / [`SmoothedFilterDesign`] - Concrete [`Filter`]s
//!
//! ## Parameter Smoothing
//!
//! - [`CascadeSmoother`] - Linear per-sample coefficient blending
//!
//! ## Utilities
//!
//! - Math functions: [`db_to_linear`], [`linear_to_db`], [`prewarp`], [`quadratic_roots`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! filtro-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: Storage sized at construction, no allocation while processing
//! - **Atomic updates**: A rejected design never disturbs the installed cascade
//! - **Object-safe traits**: Dynamic dispatch when needed
//! - **Static realizations**: The state form is a type parameter, not a runtime branch

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod cascade;
pub mod channels;
pub mod error;
pub mod filter;
pub mod filter_design;
pub mod layout;
pub mod math;
pub mod param_info;
pub mod params;
pub mod simple_filter;
pub mod smoothing;
pub mod state;

// Re-export main types at crate root
pub use biquad::BiquadCoefficients;
pub use cascade::Cascade;
pub use channels::{ChannelStates, Sample};
pub use error::FilterError;
pub use filter::{Design, Filter, Kind, RawFilter};
pub use filter_design::{FilterDesign, SmoothedFilterDesign};
pub use layout::{PoleZeroLayout, PoleZeroPair, RootPair};
pub use math::{
    Complex64, PI, TWO_PI, db_to_linear, flush_denormal, infinity, is_infinite, lerp,
    linear_to_db, prewarp, quadratic_roots,
};
pub use param_info::{ParamFlags, ParamId, ParamInfo, ParamScale, ParamUnit, UnknownParamName};
pub use params::{MAX_PARAMETERS, Params};
pub use simple_filter::SimpleFilter;
pub use smoothing::{CascadeSmoother, Transition};
pub use state::{
    DirectFormI, DirectFormII, Realization, StateRealization, TransposedDirectFormII,
    UnknownRealization,
};
