//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fmt, fs, path::{Path, PathBuf}};
use tracing::debug;

use crate::charset::{CharacterClass, CharacterPools};
use crate::passgen::IndexSampling;
use crate::selection::SelectionConfig;
use crate::shell::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// 生成器默认设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub length: usize,
    pub include_numbers: bool,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_symbols: bool,
    /// Replaces the built-in symbol pool when set.
    pub special_characters: Option<String>,
    pub sampling: IndexSampling,
    /// Seconds before a copied password is wiped; 0 keeps it.
    pub clear_clipboard_after: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_numbers: true,
            include_uppercase: true,
            include_lowercase: true,
            include_symbols: true,
            special_characters: None,
            sampling: IndexSampling::default(),
            clear_clipboard_after: 30,
        }
    }
}

impl GenConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ConfigError::InvalidValue(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.length
            )));
        }
        if let Some(symbols) = &self.special_characters {
            if symbols.chars().any(|c| c.is_whitespace() || c.is_control()) {
                return Err(ConfigError::InvalidValue(
                    "special_characters must not contain whitespace or control characters".to_string(),
                ));
            }
            // Disjoint from the other pools, no repeats.
            if let Some(c) = symbols.chars().find(|c| c.is_alphanumeric()) {
                return Err(ConfigError::InvalidValue(format!(
                    "special_characters must not contain letters or digits, found '{}'",
                    c
                )));
            }
            let mut seen = HashSet::new();
            if let Some(c) = symbols.chars().find(|c| !seen.insert(*c)) {
                return Err(ConfigError::InvalidValue(format!(
                    "special_characters contains '{}' more than once",
                    c
                )));
            }
        }
        Ok(())
    }

    pub fn selection(&self) -> SelectionConfig {
        SelectionConfig {
            length: self.length,
            include_numbers: self.include_numbers,
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_symbols: self.include_symbols,
        }
    }

    pub fn pools(&self) -> CharacterPools {
        match &self.special_characters {
            Some(symbols) => CharacterPools::default().with_symbols(symbols),
            None => CharacterPools::default(),
        }
    }

    fn set_flag(&mut self, class: CharacterClass, value: &str) -> Result<(), ConfigError> {
        let enabled = parse_bool(value)?;
        match class {
            CharacterClass::Numbers => self.include_numbers = enabled,
            CharacterClass::Uppercase => self.include_uppercase = enabled,
            CharacterClass::Lowercase => self.include_lowercase = enabled,
            CharacterClass::Symbols => self.include_symbols = enabled,
        }
        Ok(())
    }

    /// Update a single setting from its textual form, as typed on the command line.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "length" => {
                updated.length = value.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue(format!("'{}' is not a valid length", value))
                })?;
            }
            "numbers" => updated.set_flag(CharacterClass::Numbers, value)?,
            "uppercase" => updated.set_flag(CharacterClass::Uppercase, value)?,
            "lowercase" => updated.set_flag(CharacterClass::Lowercase, value)?,
            "symbols" => updated.set_flag(CharacterClass::Symbols, value)?,
            "special-characters" => {
                updated.special_characters = if value.is_empty() || value == "default" {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "sampling" => {
                updated.sampling = value.parse().map_err(ConfigError::InvalidValue)?;
            }
            "clear-after" => {
                updated.clear_clipboard_after = value.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue(format!("'{}' is not a number of seconds", value))
                })?;
            }
            other => {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown key '{}' (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Read the config at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path).map_err(ConfigError::IoError)?;
        let config: Self = serde_json::from_str(&config_data).map_err(ConfigError::JsonError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::IoError)?;
        }
        let config_file = fs::File::create(path).map_err(ConfigError::IoError)?;
        serde_json::to_writer_pretty(config_file, &self).map_err(ConfigError::JsonError)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path()?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path()?)
    }
}

pub const CONFIG_KEYS: [&str; 8] = [
    "length",
    "numbers",
    "uppercase",
    "lowercase",
    "symbols",
    "special-characters",
    "sampling",
    "clear-after",
];

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(ConfigError::InvalidValue(format!("'{}' is not a boolean", other))),
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}
