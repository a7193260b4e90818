//! User-tunable lens settings.
//!
//! The launcher stores four numeric settings that feed the engine and four
//! boolean UI toggles.  Each setting is addressed by a key whose string form is
//! what gets written to disk, and each has a default used when nothing has been
//! stored yet.
//!
//! The numeric settings also carry the limits the settings screen lets the
//! user choose from.  The engine itself does not enforce them: a hand-edited
//! file with an out-of-range value still produces a (possibly odd) layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LENS_DIAMETER: f32 = 600.0;
pub const DEFAULT_MIN_ICON_SIZE: f32 = 18.0;
pub const DEFAULT_DISTORTION_FACTOR: f32 = 2.5;
pub const DEFAULT_SCALE_FACTOR: f32 = 1.5;
pub const DEFAULT_VIBRATE_APP_HOVER: bool = false;
pub const DEFAULT_VIBRATE_APP_LAUNCH: bool = true;
pub const DEFAULT_SHOW_NAME_APP_HOVER: bool = true;
pub const DEFAULT_SHOW_TOUCH_SELECTION: bool = false;

/// Fallback for float lookups by an unknown key name: the smallest positive
/// `f32` (the subnormal with bit pattern `1`).
pub const DEFAULT_FLOAT: f32 = 1.4e-45;
/// Fallback for boolean lookups by an unknown key name.
pub const DEFAULT_BOOL: bool = false;

pub const MIN_LENS_DIAMETER: f32 = 100.0;
pub const MAX_LENS_DIAMETER: f32 = 1500.0;
pub const MIN_MIN_ICON_SIZE: f32 = 10.0;
pub const MAX_MIN_ICON_SIZE: f32 = 20.0;
pub const MAX_DISTORTION_FACTOR: f32 = 10.0;
pub const MAX_SCALE_FACTOR: f32 = 10.0;

/// Errors raised when addressing or updating a setting.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    /// The key name does not match any known setting.
    #[error("unknown setting key: {0}")]
    UnknownKey(String),

    /// The value lies outside the setting's allowed range.
    #[error("{key} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        key: FloatKey,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Keys of the numeric settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKey {
    /// Side of the square the lens distorts, in pixels.
    LensDiameter,
    /// Icon side in density-independent pixels.
    MinIconSize,
    /// Shape of the fisheye response curve.
    DistortionFactor,
    /// How strongly icons grow near the lens.
    ScaleFactor,
}

impl FloatKey {
    pub const ALL: [FloatKey; 4] = [
        FloatKey::LensDiameter,
        FloatKey::MinIconSize,
        FloatKey::DistortionFactor,
        FloatKey::ScaleFactor,
    ];

    /// Storage name of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            FloatKey::LensDiameter => "lens_diameter",
            FloatKey::MinIconSize => "min_icon_size",
            FloatKey::DistortionFactor => "distortion_factor",
            FloatKey::ScaleFactor => "scale_factor",
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            FloatKey::LensDiameter => DEFAULT_LENS_DIAMETER,
            FloatKey::MinIconSize => DEFAULT_MIN_ICON_SIZE,
            FloatKey::DistortionFactor => DEFAULT_DISTORTION_FACTOR,
            FloatKey::ScaleFactor => DEFAULT_SCALE_FACTOR,
        }
    }

    /// Inclusive `(min, max)` range offered to the user.
    pub fn limits(self) -> (f32, f32) {
        match self {
            FloatKey::LensDiameter => (MIN_LENS_DIAMETER, MAX_LENS_DIAMETER),
            FloatKey::MinIconSize => (MIN_MIN_ICON_SIZE, MAX_MIN_ICON_SIZE),
            FloatKey::DistortionFactor => (0.0, MAX_DISTORTION_FACTOR),
            FloatKey::ScaleFactor => (0.0, MAX_SCALE_FACTOR),
        }
    }

    /// Checks `value` against [`FloatKey::limits`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::OutOfRange`] when the value is outside the
    /// limits or is NaN.
    pub fn validate(self, value: f32) -> Result<f32, SettingsError> {
        let (min, max) = self.limits();
        if value >= min && value <= max {
            Ok(value)
        } else {
            Err(SettingsError::OutOfRange {
                key: self,
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloatKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FloatKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownKey(s.to_string()))
    }
}

/// Keys of the boolean UI toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolKey {
    VibrateAppHover,
    VibrateAppLaunch,
    ShowNameAppHover,
    ShowTouchSelection,
}

impl BoolKey {
    pub const ALL: [BoolKey; 4] = [
        BoolKey::VibrateAppHover,
        BoolKey::VibrateAppLaunch,
        BoolKey::ShowNameAppHover,
        BoolKey::ShowTouchSelection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BoolKey::VibrateAppHover => "vibrate_app_hover",
            BoolKey::VibrateAppLaunch => "vibrate_app_launch",
            BoolKey::ShowNameAppHover => "show_name_app_hover",
            BoolKey::ShowTouchSelection => "show_touch_selection",
        }
    }

    pub fn default_value(self) -> bool {
        match self {
            BoolKey::VibrateAppHover => DEFAULT_VIBRATE_APP_HOVER,
            BoolKey::VibrateAppLaunch => DEFAULT_VIBRATE_APP_LAUNCH,
            BoolKey::ShowNameAppHover => DEFAULT_SHOW_NAME_APP_HOVER,
            BoolKey::ShowTouchSelection => DEFAULT_SHOW_TOUCH_SELECTION,
        }
    }
}

impl fmt::Display for BoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoolKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownKey(s.to_string()))
    }
}

/// All lens settings as one value.
///
/// Missing fields deserialize to their defaults, so an empty or partial
/// settings file is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensSettings {
    #[serde(default = "default_lens_diameter")]
    pub lens_diameter: f32,
    /// Icon side in density-independent pixels; convert with
    /// [`Density::dp_to_px`](crate::Density::dp_to_px) before laying out.
    #[serde(default = "default_min_icon_size")]
    pub min_icon_size: f32,
    #[serde(default = "default_distortion_factor")]
    pub distortion_factor: f32,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    #[serde(default = "default_vibrate_app_hover")]
    pub vibrate_app_hover: bool,
    #[serde(default = "default_vibrate_app_launch")]
    pub vibrate_app_launch: bool,
    #[serde(default = "default_show_name_app_hover")]
    pub show_name_app_hover: bool,
    #[serde(default = "default_show_touch_selection")]
    pub show_touch_selection: bool,
}

impl LensSettings {
    pub fn get_float(&self, key: FloatKey) -> f32 {
        match key {
            FloatKey::LensDiameter => self.lens_diameter,
            FloatKey::MinIconSize => self.min_icon_size,
            FloatKey::DistortionFactor => self.distortion_factor,
            FloatKey::ScaleFactor => self.scale_factor,
        }
    }

    /// Stores `value` without range checks.  Use [`FloatKey::validate`]
    /// first when the value comes from the user.
    pub fn set_float(&mut self, key: FloatKey, value: f32) {
        let slot = match key {
            FloatKey::LensDiameter => &mut self.lens_diameter,
            FloatKey::MinIconSize => &mut self.min_icon_size,
            FloatKey::DistortionFactor => &mut self.distortion_factor,
            FloatKey::ScaleFactor => &mut self.scale_factor,
        };
        *slot = value;
    }

    pub fn get_bool(&self, key: BoolKey) -> bool {
        match key {
            BoolKey::VibrateAppHover => self.vibrate_app_hover,
            BoolKey::VibrateAppLaunch => self.vibrate_app_launch,
            BoolKey::ShowNameAppHover => self.show_name_app_hover,
            BoolKey::ShowTouchSelection => self.show_touch_selection,
        }
    }

    pub fn set_bool(&mut self, key: BoolKey, value: bool) {
        let slot = match key {
            BoolKey::VibrateAppHover => &mut self.vibrate_app_hover,
            BoolKey::VibrateAppLaunch => &mut self.vibrate_app_launch,
            BoolKey::ShowNameAppHover => &mut self.show_name_app_hover,
            BoolKey::ShowTouchSelection => &mut self.show_touch_selection,
        };
        *slot = value;
    }

    /// Looks a float up by its storage name, falling back to
    /// [`DEFAULT_FLOAT`] for names that are not settings.
    pub fn get_float_by_name(&self, name: &str) -> f32 {
        name.parse::<FloatKey>()
            .map(|key| self.get_float(key))
            .unwrap_or(DEFAULT_FLOAT)
    }

    /// Looks a toggle up by its storage name, falling back to
    /// [`DEFAULT_BOOL`] for names that are not settings.
    pub fn get_bool_by_name(&self, name: &str) -> bool {
        name.parse::<BoolKey>()
            .map(|key| self.get_bool(key))
            .unwrap_or(DEFAULT_BOOL)
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_lens_diameter() -> f32 {
    DEFAULT_LENS_DIAMETER
}
fn default_min_icon_size() -> f32 {
    DEFAULT_MIN_ICON_SIZE
}
fn default_distortion_factor() -> f32 {
    DEFAULT_DISTORTION_FACTOR
}
fn default_scale_factor() -> f32 {
    DEFAULT_SCALE_FACTOR
}
fn default_vibrate_app_hover() -> bool {
    DEFAULT_VIBRATE_APP_HOVER
}
fn default_vibrate_app_launch() -> bool {
    DEFAULT_VIBRATE_APP_LAUNCH
}
fn default_show_name_app_hover() -> bool {
    DEFAULT_SHOW_NAME_APP_HOVER
}
fn default_show_touch_selection() -> bool {
    DEFAULT_SHOW_TOUCH_SELECTION
}

impl Default for LensSettings {
    fn default() -> Self {
        Self {
            lens_diameter: default_lens_diameter(),
            min_icon_size: default_min_icon_size(),
            distortion_factor: default_distortion_factor(),
            scale_factor: default_scale_factor(),
            vibrate_app_hover: default_vibrate_app_hover(),
            vibrate_app_launch: default_vibrate_app_launch(),
            show_name_app_hover: default_show_name_app_hover(),
            show_touch_selection: default_show_touch_selection(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_lens_settings_default_numeric_values() {
        let settings = LensSettings::default();
        assert_eq!(settings.min_icon_size, 18.0);
        assert_eq!(settings.distortion_factor, 2.5);
        assert_eq!(settings.scale_factor, 1.5);
        assert_eq!(settings.lens_diameter, 600.0);
    }

    #[test]
    fn test_lens_settings_default_toggles() {
        let settings = LensSettings::default();
        assert!(!settings.vibrate_app_hover);
        assert!(settings.vibrate_app_launch);
        assert!(settings.show_name_app_hover);
        assert!(!settings.show_touch_selection);
    }

    #[test]
    fn test_key_default_values_match_struct_defaults() {
        let settings = LensSettings::default();
        for key in FloatKey::ALL {
            assert_eq!(settings.get_float(key), key.default_value(), "{key}");
        }
        for key in BoolKey::ALL {
            assert_eq!(settings.get_bool(key), key.default_value(), "{key}");
        }
    }

    // ── Keys ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_float_key_parses_from_storage_name() {
        assert_eq!("lens_diameter".parse::<FloatKey>(), Ok(FloatKey::LensDiameter));
        assert_eq!("scale_factor".parse::<FloatKey>(), Ok(FloatKey::ScaleFactor));
    }

    #[test]
    fn test_float_key_rejects_unknown_name() {
        assert_eq!(
            "zoom".parse::<FloatKey>(),
            Err(SettingsError::UnknownKey("zoom".to_string()))
        );
    }

    #[test]
    fn test_bool_key_round_trips_through_display() {
        for key in BoolKey::ALL {
            assert_eq!(key.to_string().parse::<BoolKey>(), Ok(key));
        }
    }

    // ── Limits ────────────────────────────────────────────────────────────────

    #[test]
    fn test_validate_accepts_inclusive_bounds() {
        assert_eq!(FloatKey::LensDiameter.validate(100.0), Ok(100.0));
        assert_eq!(FloatKey::LensDiameter.validate(1500.0), Ok(1500.0));
        assert_eq!(FloatKey::DistortionFactor.validate(0.0), Ok(0.0));
    }

    #[test]
    fn test_validate_rejects_values_outside_limits() {
        assert!(matches!(
            FloatKey::MinIconSize.validate(25.0),
            Err(SettingsError::OutOfRange { key: FloatKey::MinIconSize, .. })
        ));
        assert!(FloatKey::ScaleFactor.validate(-0.1).is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(FloatKey::DistortionFactor.validate(f32::NAN).is_err());
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[test]
    fn test_set_float_updates_matching_field_only() {
        let mut settings = LensSettings::default();
        settings.set_float(FloatKey::DistortionFactor, 7.0);
        assert_eq!(settings.distortion_factor, 7.0);
        assert_eq!(settings.scale_factor, DEFAULT_SCALE_FACTOR);
    }

    #[test]
    fn test_set_bool_updates_matching_field_only() {
        let mut settings = LensSettings::default();
        settings.set_bool(BoolKey::ShowTouchSelection, true);
        assert!(settings.show_touch_selection);
        assert!(!settings.vibrate_app_hover);
    }

    #[test]
    fn test_lookup_by_unknown_name_falls_back() {
        let settings = LensSettings::default();
        assert_eq!(settings.get_float_by_name("nope"), DEFAULT_FLOAT);
        assert_eq!(DEFAULT_FLOAT.to_bits(), 1);
        assert_eq!(settings.get_float_by_name("nope"), f32::from_bits(1));
        assert!(!settings.get_bool_by_name("nope"));
        assert_eq!(settings.get_float_by_name("lens_diameter"), 600.0);
    }

    // ── TOML ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_partial_toml_fills_missing_fields_with_defaults() {
        let settings: LensSettings = toml::from_str("lens_diameter = 900.0\n").expect("parse");
        assert_eq!(settings.lens_diameter, 900.0);
        assert_eq!(settings.min_icon_size, DEFAULT_MIN_ICON_SIZE);
        assert!(settings.vibrate_app_launch);
    }
}
