//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use filtro_core::{Filter, ParamId, Realization};
use filtro_registry::{FilterOptions, FilterRegistry, MAX_ORDER};

use crate::error::ConfigError;

/// A saved filter: registry id, instantiation options and parameter values.
///
/// Parameters are keyed by their stable names (`"frequency"`, `"ripple_db"`,
/// ...), so a preset stays valid when slot positions differ between families.
/// Parameters the preset does not name keep the design's defaults.
///
/// # TOML Format
///
/// ```toml
/// name = "Rumble Filter"
/// description = "Removes subsonic rumble"
/// filter = "butterworth/highpass"
/// channels = 2
/// realization = "transposed_direct_form_ii"
/// max_order = 8
/// smoothing_samples = 256
///
/// [params]
/// sample_rate = 48000.0
/// order = 4.0
/// frequency = 30.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Registry id, e.g. `"chebyshev_i/bandpass"`.
    pub filter: String,

    /// Channel count (defaults to 2).
    #[serde(default = "default_channels")]
    pub channels: usize,

    /// State realization, by its stable name.
    #[serde(default, with = "realization_name")]
    pub realization: Realization,

    /// Order capacity (defaults to 8).
    #[serde(default = "default_max_order")]
    pub max_order: usize,

    /// Coefficient transition length; zero installs changes immediately.
    #[serde(default)]
    pub smoothing_samples: usize,

    /// Parameter values by stable name.
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
}

fn default_channels() -> usize {
    2
}

fn default_max_order() -> usize {
    8
}

mod realization_name {
    use filtro_core::Realization;
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(realization: &Realization, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(realization.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Realization, D::Error> {
        let name = String::deserialize(d)?;
        name.parse()
            .map_err(|_| de::Error::custom(format!("unknown realization '{name}'")))
    }
}

impl FilterPreset {
    /// Create a preset for `filter` with default options and no parameters.
    pub fn new(name: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            filter: filter.into(),
            channels: default_channels(),
            realization: Realization::default(),
            max_order: default_max_order(),
            smoothing_samples: 0,
            params: BTreeMap::new(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a parameter value.
    pub fn with_param(mut self, id: ParamId, value: f64) -> Self {
        self.params.insert(id.as_str().to_string(), value);
        self
    }

    /// Apply instantiation options.
    pub fn with_options(mut self, options: &FilterOptions) -> Self {
        self.channels = options.channels;
        self.realization = options.realization;
        self.max_order = options.max_order;
        self.smoothing_samples = options.smoothing_samples;
        self
    }

    /// Instantiation options stored in the preset.
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            channels: self.channels,
            realization: self.realization,
            max_order: self.max_order,
            smoothing_samples: self.smoothing_samples,
        }
    }

    /// Get a parameter value by id.
    pub fn param(&self, id: ParamId) -> Option<f64> {
        self.params.get(id.as_str()).copied()
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "preset loaded");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "preset saved");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the preset against the registry without keeping the filter.
    ///
    /// Fails on an unknown filter id, an unknown or foreign parameter name, an
    /// out-of-range order capacity, or parameters the design rejects.
    pub fn validate(&self, registry: &FilterRegistry) -> Result<(), ConfigError> {
        let options = FilterOptions {
            channels: 0,
            smoothing_samples: 0,
            ..self.options()
        };
        self.instantiate(registry, &options).map(|_| ())
    }

    /// Build the filter this preset describes.
    pub fn build(&self, registry: &FilterRegistry) -> Result<Box<dyn Filter>, ConfigError> {
        let filter = self.instantiate(registry, &self.options())?;
        tracing::debug!(name = %self.name, filter = %self.filter, "preset built");
        Ok(filter)
    }

    fn instantiate(
        &self,
        registry: &FilterRegistry,
        options: &FilterOptions,
    ) -> Result<Box<dyn Filter>, ConfigError> {
        if !(1..=MAX_ORDER).contains(&self.max_order) {
            return Err(ConfigError::invalid_preset(
                &self.name,
                format!("max_order {} outside 1..={MAX_ORDER}", self.max_order),
            ));
        }

        let mut filter = registry
            .create(&self.filter, options)
            .ok_or_else(|| ConfigError::UnknownFilter(self.filter.clone()))?;

        let mut params = filter.default_params();
        for (name, &value) in &self.params {
            let index = name
                .parse::<ParamId>()
                .ok()
                .and_then(|id| filter.find_param_index(id))
                .ok_or_else(|| ConfigError::UnknownParam {
                    filter: self.filter.clone(),
                    param: name.clone(),
                })?;
            params.set(index, value)?;
        }
        filter.set_params(&params)?;
        Ok(filter)
    }

    /// Snapshot a live filter into a preset.
    ///
    /// `filter_id` and `options` are recorded as given; every parameter the
    /// filter exposes is stored under its stable name.
    pub fn capture(
        name: impl Into<String>,
        filter_id: impl Into<String>,
        filter: &dyn Filter,
        options: &FilterOptions,
    ) -> Self {
        let mut preset = Self::new(name, filter_id).with_options(options);
        let values = filter.params();
        for index in 0..filter.num_params() {
            if let Some(info) = filter.param_info(index) {
                preset = preset.with_param(info.id, values[index]);
            }
        }
        preset
    }
}
