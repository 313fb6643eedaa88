//! Factory presets bundled with the filtro library.
//!
//! Built-in presets are always available without external files. They cover
//! common filtering jobs and double as a catalogue of the preset format.

use crate::FilterPreset;

/// TOML content for factory presets, keyed by internal name.
///
/// These are embedded at compile time and always available.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("rumble", RUMBLE_PRESET),
    ("telephone", TELEPHONE_PRESET),
    ("hum_notch", HUM_NOTCH_PRESET),
    ("anti_alias", ANTI_ALIAS_PRESET),
    ("warm_low_shelf", WARM_LOW_SHELF_PRESET),
    ("air", AIR_PRESET),
    ("gentle_sweep", GENTLE_SWEEP_PRESET),
    ("dc_blocker", DC_BLOCKER_PRESET),
];

/// Subsonic rumble removal.
const RUMBLE_PRESET: &str = r#"
name = "Rumble"
description = "4th order Butterworth high-pass at 30 Hz for subsonic rumble"
filter = "butterworth/highpass"

[params]
sample_rate = 48000.0
order = 4.0
frequency = 30.0
"#;

/// Narrow voice band.
const TELEPHONE_PRESET: &str = r#"
name = "Telephone"
description = "Chebyshev I band-pass around the 300-3400 Hz voice band"
filter = "chebyshev_i/bandpass"

[params]
sample_rate = 48000.0
order = 4.0
frequency = 1850.0
bandwidth_hz = 3100.0
ripple_db = 0.5
"#;

/// Mains hum notch.
const HUM_NOTCH_PRESET: &str = r#"
name = "Hum Notch"
description = "Chebyshev II band-stop centred on 50 Hz mains hum"
filter = "chebyshev_ii/bandstop"
channels = 1

[params]
sample_rate = 48000.0
order = 2.0
frequency = 50.0
bandwidth_hz = 6.0
stop_db = 40.0
"#;

/// Steep band limit before resampling.
const ANTI_ALIAS_PRESET: &str = r#"
name = "Anti Alias"
description = "8th order elliptic low-pass with 80 dB rejection above 18 kHz"
filter = "elliptic/lowpass"
realization = "transposed_direct_form_ii"

[params]
sample_rate = 48000.0
order = 8.0
frequency = 18000.0
ripple_db = 0.1
stop_db = 80.0
"#;

/// Low-end warmth.
const WARM_LOW_SHELF_PRESET: &str = r#"
name = "Warm Low Shelf"
description = "Gentle +4 dB Butterworth shelf below 200 Hz"
filter = "butterworth/lowshelf"

[params]
sample_rate = 48000.0
order = 2.0
frequency = 200.0
gain = 4.0
"#;

/// Top-end lift.
const AIR_PRESET: &str = r#"
name = "Air"
description = "RBJ high shelf adding 3 dB of air above 10 kHz"
filter = "rbj/highshelf"

[params]
sample_rate = 48000.0
frequency = 10000.0
gain = 3.0
slope = 1.0
"#;

/// Phase-friendly low-pass meant for automation.
const GENTLE_SWEEP_PRESET: &str = r#"
name = "Gentle Sweep"
description = "Bessel low-pass with coefficient smoothing for cutoff sweeps"
filter = "bessel/lowpass"
realization = "direct_form_i"
smoothing_samples = 256

[params]
sample_rate = 48000.0
order = 4.0
frequency = 2000.0
"#;

/// First-order DC removal.
const DC_BLOCKER_PRESET: &str = r#"
name = "DC Blocker"
description = "Zero at DC, pole just inside the unit circle"
filter = "custom/onepole"

[params]
sample_rate = 48000.0
scale = 1.0
pole_real = 0.995
zero_real = 1.0
"#;

/// Get all factory presets.
///
/// Presets are parsed from embedded TOML on each call.
pub fn factory_presets() -> Vec<FilterPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| FilterPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by name.
///
/// Matches either the internal name (`"hum_notch"`) or the display name
/// (`"Hum Notch"`), case-insensitively.
///
/// # Example
///
/// ```rust
/// use filtro_config::get_factory_preset;
///
/// if let Some(preset) = get_factory_preset("rumble") {
///     println!("{} uses {}", preset.name, preset.filter);
/// }
/// ```
pub fn get_factory_preset(name: &str) -> Option<FilterPreset> {
    let name_lower = name.to_lowercase();

    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(preset_name, _)| preset_name.to_lowercase() == name_lower)
    {
        return FilterPreset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Get the internal names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a preset name is a factory preset (case-insensitive).
///
/// # Example
///
/// ```rust
/// use filtro_config::is_factory_preset;
///
/// assert!(is_factory_preset("anti_alias"));
/// assert!(is_factory_preset("Anti Alias"));
/// assert!(!is_factory_preset("my_custom_preset"));
/// ```
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtro_core::{ParamId, Realization};
    use filtro_registry::FilterRegistry;

    #[test]
    fn test_all_factory_presets_parse() {
        for (name, toml) in FACTORY_PRESETS_TOML {
            let result = FilterPreset::from_toml(toml);
            assert!(result.is_ok(), "factory preset '{}' should parse: {:?}", name, result);

            let preset = result.unwrap();
            assert!(!preset.name.is_empty(), "preset '{}' should have a name", name);
            assert!(preset.description.is_some(), "preset '{}' should have a description", name);
        }
        assert_eq!(factory_presets().len(), FACTORY_PRESETS_TOML.len());
    }

    #[test]
    fn test_all_factory_presets_validate() {
        let registry = FilterRegistry::new();
        for preset in factory_presets() {
            let result = preset.validate(&registry);
            assert!(result.is_ok(), "preset '{}' invalid: {:?}", preset.name, result);
        }
    }

    #[test]
    fn test_get_factory_preset() {
        // By internal name
        let preset = get_factory_preset("hum_notch").expect("hum_notch should exist");
        assert_eq!(preset.name, "Hum Notch");
        assert_eq!(preset.channels, 1);

        // By display name, case insensitive
        let preset = get_factory_preset("ANTI ALIAS").expect("Anti Alias should exist");
        assert_eq!(preset.realization, Realization::TransposedDirectFormII);
        assert_eq!(preset.param(ParamId::StopDb), Some(80.0));

        assert!(get_factory_preset("nonexistent").is_none());
    }

    #[test]
    fn test_factory_preset_names() {
        let names = factory_preset_names();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"rumble"));
        assert!(names.contains(&"dc_blocker"));
    }

    #[test]
    fn test_sweep_preset_is_smoothed() {
        let preset = get_factory_preset("gentle_sweep").expect("gentle_sweep should exist");
        assert_eq!(preset.smoothing_samples, 256);
        assert_eq!(preset.realization, Realization::DirectFormI);
    }
}
