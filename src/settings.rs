//! Game settings and preferences
//!
//! Read from LocalStorage on the web so tuning can be overridden without a
//! rebuild. Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::LOW_TIME_WARNING;
use crate::error::Error;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation parameters
    pub tuning: Tuning,

    // === HUD ===
    /// Countdown warning threshold (seconds)
    pub low_time_warning: f32,

    // === Debug ===
    /// Allow the Shift+D level skip
    pub debug_skip: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            low_time_warning: LOW_TIME_WARNING,
            debug_skip: cfg!(debug_assertions),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "starhopper_settings";

    /// Parse and validate settings JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check tuning plus the HUD threshold
    pub fn validate(&self) -> Result<(), Error> {
        self.tuning.validate()?;
        if self.low_time_warning.is_finite() && self.low_time_warning >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidTuning {
                name: "low_time_warning",
                value: self.low_time_warning,
                expected: ">= 0",
            })
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::MovementTiming;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "low_time_warning": 3.0, "tuning": { "ship": { "base_speed": 4.0 } } }"#)
                .unwrap();
        assert_eq!(settings.low_time_warning, 3.0);
        assert_eq!(settings.tuning.ship.base_speed, 4.0);
        assert_eq!(settings.tuning.ship.boost_multiplier, 1.5);
        assert_eq!(settings.tuning.field_width, 800.0);
        assert_eq!(settings.tuning.movement, MovementTiming::PerStep);
    }

    #[test]
    fn test_movement_timing_from_json() {
        let settings =
            Settings::from_json(r#"{ "tuning": { "movement": { "PerSecond": { "reference_hz": 60.0 } } } }"#)
                .unwrap();
        assert_eq!(
            settings.tuning.movement,
            MovementTiming::PerSecond { reference_hz: 60.0 }
        );
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let result = Settings::from_json(r#"{ "tuning": { "connection_radius": 0.0 } }"#);
        assert!(matches!(result, Err(Error::InvalidTuning { .. })));
    }

    #[test]
    fn test_negative_warning_threshold_rejected() {
        let result = Settings::from_json(r#"{ "low_time_warning": -1.0 }"#);
        assert!(matches!(
            result,
            Err(Error::InvalidTuning {
                name: "low_time_warning",
                ..
            })
        ));
        assert!(Settings::from_json(r#"{ "low_time_warning": 0.0 }"#).is_ok());
    }

    #[test]
    fn test_nan_warning_threshold_rejected() {
        let settings = Settings {
            low_time_warning: f32::NAN,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_garbage_is_parse_error() {
        assert!(matches!(Settings::from_json("{"), Err(Error::Parse(_))));
    }
}
