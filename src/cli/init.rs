use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use clausewise::config::CONFIG_FILE_NAME;

use crate::presets::{PRESET_BALANCED, PRESET_FINANCIAL, PRESET_HEALTHCARE, PRESET_PRIVACY};

pub fn run_init(preset: &str, force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{CONFIG_FILE_NAME} already exists. Use --force to overwrite the existing configuration."
        );
    }

    let contents = match preset {
        "privacy" => PRESET_PRIVACY,
        "financial" => PRESET_FINANCIAL,
        "healthcare" => PRESET_HEALTHCARE,
        _ => PRESET_BALANCED,
    };

    fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write configuration to {}", config_path.display()))?;

    println!(
        "{CONFIG_FILE_NAME} created with '{}' preset at {}",
        preset,
        config_path.display()
    );

    Ok(())
}
