//! Bot settings
//!
//! Loaded from a JSON file named by `AGAR_BOT_SETTINGS`; defaults otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{SAFE_ATTACK_RADIUS, SPLIT_MASS};
use crate::error::StrategyError;

/// Strategy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Force the current action to reset every N ticks (disabled when `None`)
    pub reset_action_interval: Option<u64>,
    /// How much bigger our radius must be before we chase a rival
    pub safe_attack_radius: f64,
    /// Mass above which splitting is considered
    pub split_mass: f64,
    /// Fixed RNG seed (entropy-seeded when `None`)
    pub seed: Option<u64>,
    /// Write trace lines to this file (truncated at startup)
    pub debug_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reset_action_interval: None,
            safe_attack_radius: SAFE_ATTACK_RADIUS,
            split_mass: SPLIT_MASS,
            seed: None,
            debug_file: None,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_VAR: &'static str = "AGAR_BOT_SETTINGS";

    /// Load settings from the file named by `AGAR_BOT_SETTINGS`, or defaults
    pub fn load() -> Result<Self, StrategyError> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a JSON file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, StrategyError> {
        let settings_err = |source: Box<dyn std::error::Error + Send + Sync>| {
            StrategyError::Settings {
                path: path.to_path_buf(),
                source,
            }
        };

        let json = fs::read_to_string(path).map_err(|e| settings_err(e.into()))?;
        let settings = serde_json::from_str(&json).map_err(|e| settings_err(e.into()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.reset_action_interval, None);
        assert_eq!(settings.safe_attack_radius, 3.0);
        assert_eq!(settings.split_mass, 140.0);
        assert!(settings.debug_file.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"reset_action_interval": 50, "seed": 7}"#).unwrap();
        assert_eq!(settings.reset_action_interval, Some(50));
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.split_mass, 140.0);
    }

    #[test]
    fn test_from_file_missing() {
        let err = Settings::from_file(Path::new("/nonexistent/agar-bot.json")).unwrap_err();
        assert!(matches!(err, StrategyError::Settings { .. }));
    }
}
