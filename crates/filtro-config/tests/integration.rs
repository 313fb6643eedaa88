//! Integration tests for filtro-config.
//!
//! These tests verify end-to-end functionality across modules.

use filtro_config::{
    ConfigError, FilterOptions, FilterPreset, FilterRegistry, factory_presets, get_factory_preset,
};
use filtro_core::{Filter, ParamId, Realization, linear_to_db};
use tempfile::TempDir;

fn sine(frequency: f64, sample_rate: f64, len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| (2.0 * core::f64::consts::PI * frequency * n as f64 / sample_rate).sin() as f32)
        .collect()
}

fn rms(samples: &[f32]) -> f64 {
    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt()
}

/// Save a preset, load it back, and check the rebuilt filter matches.
#[test]
fn test_save_load_build() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("notch.toml");
    let registry = FilterRegistry::new();

    let preset = FilterPreset::new("Notch", "elliptic/bandstop")
        .with_description("Narrow notch")
        .with_options(&FilterOptions {
            channels: 1,
            realization: Realization::DirectFormI,
            max_order: 6,
            smoothing_samples: 64,
        })
        .with_param(ParamId::SampleRate, 48000.0)
        .with_param(ParamId::Order, 4.0)
        .with_param(ParamId::Frequency, 1000.0)
        .with_param(ParamId::BandwidthHz, 200.0);

    preset.save(&path).unwrap();
    assert!(path.exists());

    let loaded = FilterPreset::load(&path).unwrap();
    assert_eq!(loaded, preset);

    let direct = preset.build(&registry).unwrap();
    let reloaded = loaded.build(&registry).unwrap();
    assert_eq!(reloaded.num_channels(), 1);
    assert_eq!(reloaded.params(), direct.params());
    assert_eq!(reloaded.response(1000.0 / 48000.0), direct.response(1000.0 / 48000.0));
}

/// Loading a missing file reports the path.
#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let err = FilterPreset::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

/// Malformed TOML surfaces as a parse error.
#[test]
fn test_load_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "name = \"Broken\"\nfilter = ").unwrap();
    assert!(matches!(FilterPreset::load(&path), Err(ConfigError::TomlParse(_))));
}

/// Every factory preset builds and processes audio.
#[test]
fn test_factory_presets_process() {
    let registry = FilterRegistry::new();

    for preset in factory_presets() {
        let mut filter = preset
            .build(&registry)
            .unwrap_or_else(|e| panic!("factory preset '{}' failed: {e}", preset.name));

        let channels = filter.num_channels();
        let mut buffers: Vec<Vec<f32>> =
            (0..channels).map(|_| sine(440.0, 48000.0, 512)).collect();
        let mut slices: Vec<&mut [f32]> = buffers.iter_mut().map(Vec::as_mut_slice).collect();
        filter.try_process(512, &mut slices).unwrap();

        assert!(
            buffers.iter().flatten().all(|s| s.is_finite()),
            "preset '{}' produced non-finite output",
            preset.name
        );
    }
}

/// The rumble preset passes the mid band and kills subsonics.
#[test]
fn test_rumble_preset_response() {
    let registry = FilterRegistry::new();
    let preset = get_factory_preset("rumble").expect("rumble preset should exist");
    let mut filter = preset.build(&registry).unwrap();

    let low_in = sine(8.0, 48000.0, 48000);
    let mid_in = sine(1000.0, 48000.0, 48000);
    let mut low = low_in.clone();
    let mut mid = mid_in.clone();
    filter.process(48000, &mut [&mut low, &mut mid]);

    // Skip the settling tail.
    let low_db = linear_to_db(rms(&low[24000..]) / rms(&low_in[24000..]));
    let mid_db = linear_to_db(rms(&mid[24000..]) / rms(&mid_in[24000..]));
    assert!(low_db < -40.0, "8 Hz: {low_db} dB");
    assert!(mid_db.abs() < 0.1, "1 kHz: {mid_db} dB");
}

/// Capturing a tweaked factory filter and saving it round-trips through disk.
#[test]
fn test_capture_tweaked_filter() {
    let temp_dir = TempDir::new().unwrap();
    let registry = FilterRegistry::new();
    let base = get_factory_preset("air").expect("air preset should exist");

    let mut filter = base.build(&registry).unwrap();
    filter.set_param_by_id(ParamId::Gain, 6.0).unwrap();

    let captured =
        FilterPreset::capture("More Air", &base.filter, filter.as_ref(), &base.options());
    assert_eq!(captured.param(ParamId::Gain), Some(6.0));
    assert_eq!(captured.param(ParamId::Frequency), Some(10000.0));

    let path = temp_dir.path().join("more_air.toml");
    captured.save(&path).unwrap();
    let rebuilt = FilterPreset::load(&path).unwrap().build(&registry).unwrap();

    let nyquist = rebuilt.response(0.5).norm();
    assert!((linear_to_db(nyquist) - 6.0).abs() < 0.01);
}

/// A preset whose values the design rejects fails to build.
#[test]
fn test_rejected_values() {
    let registry = FilterRegistry::new();
    let preset = FilterPreset::new("Too High", "butterworth/lowpass")
        .with_param(ParamId::SampleRate, 8000.0)
        .with_param(ParamId::Frequency, 6000.0);
    assert!(matches!(preset.build(&registry), Err(ConfigError::Filter(_))));
}
