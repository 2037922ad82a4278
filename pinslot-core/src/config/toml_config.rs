//! TOML configuration file I/O
//!
//! Handles loading and saving slot and display settings to/from TOML files
//! in the user's configuration directory.

use crate::config::{DisplayConfig, SlotConfig};
use crate::error::{ConfigError, PinslotError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Complete TOML configuration structure
///
/// Contains the controller settings and the optional display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Controller settings
    #[serde(rename = "slots", default)]
    pub slot_config: SlotConfig,

    /// Display settings (optional)
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl TomlConfig {
    /// Create a new TOML configuration
    pub fn new(slot_config: SlotConfig, display: Option<DisplayConfig>) -> Self {
        Self {
            slot_config,
            display,
        }
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<(), PinslotError> {
        self.slot_config
            .validate()
            .map_err(|e| ConfigError::ValidationError { message: e })?;

        if let Some(display) = &self.display {
            display.validate().map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid display settings: {}", e),
            })?;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PinslotError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::LoadFailed {
                path: path.to_string_lossy().to_string(),
            },
            _ => ConfigError::IoError {
                message: format!("Failed to read config file: {}", e),
            },
        })?;

        let config: TomlConfig = toml::from_str(&contents)?;

        config.validate()?;

        debug!(
            slot_count = config.slot_config.slot_count,
            has_display = config.display.is_some(),
            "Loaded configuration from {:?}",
            path
        );

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), PinslotError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        let contents = toml::to_string_pretty(self)?;

        std::fs::write(path, contents).map_err(|_e| ConfigError::SaveFailed {
            path: path.to_string_lossy().to_string(),
        })?;

        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the controller settings
    pub fn slot_config(&self) -> &SlotConfig {
        &self.slot_config
    }

    /// Get the display settings, or defaults if not configured
    pub fn display_config(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }
}

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV_VAR: &str = "PINSLOT_CONFIG_DIR";

/// Get the default configuration directory
///
/// Returns ~/.config/pinslot, or PINSLOT_CONFIG_DIR if set
pub fn get_config_dir() -> Result<PathBuf, PinslotError> {
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| ConfigError::IoError {
        message: "HOME environment variable not set".to_string(),
    })?;

    Ok(PathBuf::from(home).join(".config").join("pinslot"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, PinslotError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default TOML file
///
/// A missing file is not an error here; defaults are returned instead.
pub fn load_config() -> Result<TomlConfig, PinslotError> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        debug!("No configuration at {:?}, using defaults", config_path);
        return Ok(TomlConfig::default());
    }
    load_config_from_path(&config_path)
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<TomlConfig, PinslotError> {
    TomlConfig::from_file(path.as_ref())
}

/// Save configuration to the default TOML file
pub fn save_config(config: &TomlConfig) -> Result<PathBuf, PinslotError> {
    let config_path = get_config_path()?;
    save_config_to_path(config, &config_path)?;
    Ok(config_path)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(
    config: &TomlConfig,
    path: P,
) -> Result<(), PinslotError> {
    config.to_file(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClearNavigation;
    use tempfile::tempdir;

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let original = TomlConfig::new(
            SlotConfig::new(4)
                .with_initial_code("12")
                .with_clear_navigation(ClearNavigation::Retreat),
            Some(DisplayConfig {
                mask: true,
                ..DisplayConfig::default()
            }),
        );

        save_config_to_path(&original, &config_path).unwrap();
        let loaded = load_config_from_path(&config_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_missing_file_is_load_failed() {
        let temp_dir = tempdir().unwrap();
        let result = load_config_from_path(temp_dir.path().join("absent.toml"));

        assert!(matches!(
            result,
            Err(PinslotError::Config(ConfigError::LoadFailed { .. }))
        ));
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let result = save_config_to_path(&TomlConfig::new(SlotConfig::new(0), None), &config_path);

        assert!(result.is_err());
        assert!(!config_path.exists());
    }
}
