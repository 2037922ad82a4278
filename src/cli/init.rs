//! Init command implementation
//!
//! Writes a configuration file holding the default settings.

use pinslot_core::config::toml_config::{self, TomlConfig};
use pinslot_core::config::{DisplayConfig, SlotConfig};
use pinslot_core::error::PinslotError;
use std::path::Path;
use tracing::info;

/// Run the init command
///
/// Writes to `path` when given, otherwise to the default location. An
/// existing file is left alone unless `force` is set.
pub fn run_init(path: Option<&Path>, force: bool) -> Result<(), PinslotError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => toml_config::get_config_path()?,
    };

    if path.exists() && !force {
        println!("⚠️  Configuration already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    let config = TomlConfig::new(SlotConfig::default(), Some(DisplayConfig::default()));
    toml_config::save_config_to_path(&config, &path)?;

    info!("Initialized configuration at {:?}", path);
    println!("💾 Configuration written to {}", path.display());
    Ok(())
}
