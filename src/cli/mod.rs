pub mod analyze;
pub mod init;
pub mod rules;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use clausewise::config::ClausewiseConfig;
use clausewise::utils::decode_text;

use crate::CommonArgs;

/// Read a whole input file, `-` meaning stdin, and check it is UTF-8.
pub fn read_input(input: &Path) -> Result<String> {
    let bytes = if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Read stdin")?;
        buf
    } else {
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?
    };

    let text = decode_text(&bytes).with_context(|| format!("Rejected {}", input.display()))?;
    Ok(text.to_string())
}

/// Load `--config` (or `./clausewise.toml`), apply `--profile` and settle
/// whether output is colored.
pub fn load_config(common: &CommonArgs) -> Result<ClausewiseConfig> {
    let mut config = match &common.config {
        Some(path) => ClausewiseConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ClausewiseConfig::load().context("Failed to load clausewise.toml")?,
    };

    if let Some(profile) = &common.profile {
        config = config.with_profile(profile);
    }

    if common.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    Ok(config)
}
