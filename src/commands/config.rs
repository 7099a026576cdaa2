use anyhow::{Context, Result};
use tracing::info;

use crate::configtool::{GenConfig, config_file_path};

pub fn show_config() -> Result<()> {
    let config = GenConfig::load().context("Failed to load configuration")?;
    let rendered = serde_json::to_string_pretty(&config)?;
    println!("{}", rendered);
    Ok(())
}

pub fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = GenConfig::load().context("Failed to load configuration")?;
    config.set_value(key, value)?;
    config.save().context("Failed to save configuration")?;
    info!(key, "config updated");
    println!("Set {} = {}", key, value);
    Ok(())
}

pub fn reset_config() -> Result<()> {
    GenConfig::default().save().context("Failed to save configuration")?;
    println!("Configuration reset to defaults");
    Ok(())
}

pub fn print_config_path() -> Result<()> {
    println!("{}", config_file_path()?.display());
    Ok(())
}
