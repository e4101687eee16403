//! Host settings
//!
//! Loaded from a JSON file on native and from LocalStorage on the web.
//! Anything missing or malformed falls back to defaults.

use serde::{Deserialize, Serialize};

/// Environment variable naming the native settings file
pub const SETTINGS_ENV: &str = "BRICK_BREAKER_SETTINGS";
/// Settings file looked up in the working directory when the variable is unset
pub const SETTINGS_FILE: &str = "brick_breaker.json";

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Optional frame cap. `None` runs as fast as surface locking allows.
    pub max_fps: Option<u32>,
    /// Log frames-per-second once a second at debug level
    pub log_frame_stats: bool,

    // === Headless host ===
    /// Software surface width in pixels
    pub surface_width: u32,
    /// Software surface height in pixels
    pub surface_height: u32,
    /// How long the headless host runs before tearing the surface down
    pub run_millis: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_fps: None,
            log_frame_stats: true,

            surface_width: 1080,
            surface_height: 1920,
            run_millis: 2000,
        }
    }
}

impl Settings {
    /// Minimum frame duration implied by `max_fps`
    pub fn min_frame_time(&self) -> Option<std::time::Duration> {
        self.max_fps
            .filter(|&fps| fps > 0)
            .map(|fps| std::time::Duration::from_nanos(1_000_000_000 / fps as u64))
    }

    /// Parse settings JSON, keeping defaults for absent fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from `$BRICK_BREAKER_SETTINGS` or `./brick_breaker.json`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(SETTINGS_FILE));
        Self::load_from(&path)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
