//! User configuration file handling
//!
//! Manages settings from ~/.config/spacing-audit/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::geometry::Direction;

/// User configuration from ~/.config/spacing-audit/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    /// Master names to analyze, in ranking order
    pub weights: Option<Vec<String>>,
    /// Stroke label file used when --labels is not given
    pub labels: Option<PathBuf>,
    /// Directions to compute ranking scores for
    pub rank_directions: Option<Vec<Direction>>,
    /// Report ranges in every direction
    pub all_ranges: Option<bool>,
    /// Pretty-print the JSON report
    pub pretty: Option<bool>,
}

impl ConfigFile {
    /// Get the path to the spacing-audit config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("spacing-audit")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, logging and ignoring a broken file
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Settings written by --new-config
    pub fn with_defaults() -> Self {
        Self {
            weights: Some(
                super::settings::DEFAULT_WEIGHTS
                    .iter()
                    .map(|w| w.to_string())
                    .collect(),
            ),
            labels: None,
            rank_directions: Some(vec![Direction::Lsb]),
            all_ranges: Some(false),
            pretty: Some(true),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/spacing-audit directory with its logs/ folder
    /// 2. A settings.json file with default values, unless one exists
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(config_dir.join("logs"))?;
        println!("Created config directory: {:?}", config_dir);

        let settings_path = Self::config_path();
        if settings_path.exists() {
            println!("Settings file already exists: {:?}", settings_path);
        } else {
            Self::with_defaults().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - Logs written with --log-file go to: {:?}", config_dir.join("logs"));
        Ok(())
    }
}
