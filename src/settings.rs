//! Host settings
//!
//! How the host drives the game (seed, timer cadence, autopilot). Game rules
//! are fixed in `consts` and never read from here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ELAPSED_MS, TICK_INTERVAL_MS};
use crate::sim::TickOptions;

/// Host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` derives one from the clock
    pub seed: Option<u64>,
    /// Host timer period in milliseconds
    pub tick_interval_ms: u32,
    /// Longest elapsed time a single tick integrates
    pub max_elapsed_ms: f32,
    /// AI plays the left paddle too
    pub autopilot: bool,
    /// Ticks the native headless runner simulates
    pub native_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_elapsed_ms: MAX_ELAPSED_MS,
            autopilot: false,
            native_ticks: 6000,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_court_settings";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Options the simulation tick needs
    pub fn tick_options(&self) -> TickOptions {
        TickOptions {
            autopilot: self.autopilot,
            max_elapsed_ms: self.max_elapsed_ms,
        }
    }

    /// Seed to use, falling back to `fallback` (usually the clock)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
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
