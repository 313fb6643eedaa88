//! Error types for preset operations.

use filtro_core::FilterError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or building presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No registry entry with this id
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Parameter name is unknown or not exposed by the filter
    #[error("filter '{filter}' has no parameter '{param}'")]
    UnknownParam {
        /// Registry id of the filter.
        filter: String,
        /// Rejected parameter name.
        param: String,
    },

    /// Structurally invalid preset
    #[error("invalid preset '{name}': {reason}")]
    InvalidPreset {
        /// Preset name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The filter rejected the preset's parameters
    #[error("filter rejected preset parameters: {0}")]
    Filter(#[from] FilterError),

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid preset error.
    pub fn invalid_preset(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidPreset {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    // --- factory methods ---

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = ConfigError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
    }

    #[test]
    fn create_dir_factory_produces_correct_variant() {
        let err = ConfigError::create_dir("/dir/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::CreateDir { ref path, .. } if path == std::path::Path::new("/dir/path"))
        );
    }

    // --- Display formatting ---

    #[test]
    fn write_file_display() {
        let err = ConfigError::write_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
    }

    #[test]
    fn unknown_param_display() {
        let err = ConfigError::UnknownParam {
            filter: "rbj/lowpass".to_string(),
            param: "order".to_string(),
        };
        assert_eq!(err.to_string(), "filter 'rbj/lowpass' has no parameter 'order'");
    }

    #[test]
    fn invalid_preset_display() {
        let err = ConfigError::invalid_preset("Rumble", "max_order must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid preset 'Rumble': max_order must be at least 1"
        );
    }

    #[test]
    fn filter_error_converts() {
        let err: ConfigError = FilterError::NumericalFailure.into();
        assert!(matches!(err, ConfigError::Filter(FilterError::NumericalFailure)));
        assert!(err.to_string().contains("non-finite"));
    }

    // --- Error::source() chain ---

    #[test]
    fn io_variants_expose_source() {
        assert!(ConfigError::read_file("/x", mock_io_err()).source().is_some());
        assert!(ConfigError::write_file("/x", mock_io_err()).source().is_some());
        assert!(ConfigError::create_dir("/x", mock_io_err()).source().is_some());
    }

    #[test]
    fn unknown_filter_source_is_none() {
        let err = ConfigError::UnknownFilter("nope/lowpass".to_string());
        assert!(err.source().is_none());
    }
}
