//! Game settings
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Environment variable naming an alternate settings file
pub const SETTINGS_ENV: &str = "PLANETE_SETTINGS";
/// Settings file used when the environment variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "planete.json";

/// Pixel sizes behind the three text sizes the screens use
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub large: u16,
    pub medium: u16,
    pub small: u16,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            large: 56,
            medium: 40,
            small: 24,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// JSON array of student notes
    pub notes_path: PathBuf,
    /// Slideshow images, shown in order
    pub slide_paths: Vec<PathBuf>,
    /// TrueType fonts to try in order before the built-in font
    pub font_paths: Vec<PathBuf>,
    pub font_sizes: FontSizes,
    /// Fixed RNG seed for the dodge challenge (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notes_path: PathBuf::from("student_notes.json"),
            slide_paths: (1..=crate::sim::slideshow::SLIDE_COUNT)
                .map(|i| PathBuf::from(format!("pics/{i}.png")))
                .collect(),
            font_paths: vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                PathBuf::from("/usr/share/fonts/TTF/DejaVuSans-Bold.ttf"),
            ],
            font_sizes: FontSizes::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Path named by `PLANETE_SETTINGS`, or `planete.json`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load() -> Self {
        let path = Self::path();
        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Read a settings file. `Ok(None)` means the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| SettingsError::Malformed {
                path: path.to_path_buf(),
                source,
            })
    }
}
