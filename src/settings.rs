//! User settings
//!
//! Persisted as JSON next to the executable's working directory. Anything that
//! fails to load falls back to defaults with a logged warning; game state
//! itself is never persisted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::EMOJI_COUNT;
use crate::speech::SpeechConfig;

/// Settings file name
const SETTINGS_FILE: &str = "emoji_hiragana_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// How many emoji float on screen at once
    pub entity_count: usize,
    /// Voice parameters for the hiragana readout
    pub speech: SpeechConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entity_count: EMOJI_COUNT,
            speech: SpeechConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default file, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to the default file; failures are logged, not fatal
    pub fn save(&self) {
        self.save_to(Path::new(SETTINGS_FILE));
    }

    fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to write {}: {err}", path.display());
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}
