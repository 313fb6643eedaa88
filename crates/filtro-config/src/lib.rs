//! Preset management for filtro filters.
//!
//! A preset names a registry filter (`"elliptic/lowpass"`), the options it is
//! instantiated with, and its parameter values by stable name. Presets live
//! in TOML files and rebuild into a ready-to-run [`Filter`](filtro_core::Filter)
//! through the [`FilterRegistry`].
//!
//! # Features
//!
//! - **Preset System**: Load and save filter presets from TOML files
//! - **Validation**: Check filter ids, parameter names and values before use
//! - **Capture**: Snapshot a live filter back into a preset
//! - **Factory Presets**: Built-in presets for common filtering jobs
//!
//! # Example
//!
//! ```rust,no_run
//! use filtro_config::{FilterPreset, FilterRegistry};
//! use filtro_core::{Filter, ParamId, Realization};
//!
//! let registry = FilterRegistry::new();
//!
//! // Load a preset from file and build its filter
//! let preset = FilterPreset::load("rumble.toml").unwrap();
//! let filter = preset.build(&registry).unwrap();
//! println!("{} with {} stages", filter.name(), filter.pole_zeros().len());
//!
//! // Create a preset programmatically
//! let mut preset = FilterPreset::new("Presence", "chebyshev_i/bandshelf")
//!     .with_description("Upper-mid lift")
//!     .with_param(ParamId::SampleRate, 48000.0)
//!     .with_param(ParamId::Frequency, 3000.0)
//!     .with_param(ParamId::Gain, 3.0);
//! preset.realization = Realization::TransposedDirectFormII;
//! preset.validate(&registry).unwrap();
//! preset.save("presets/presence.toml").unwrap();
//! ```

mod error;
mod preset;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    factory_preset_names, factory_presets, get_factory_preset, is_factory_preset,
};
pub use preset::FilterPreset;

/// Re-export commonly used types from filtro-registry
pub use filtro_registry::{Family, FilterDescriptor, FilterOptions, FilterRegistry};
