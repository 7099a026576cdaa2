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
// Selection controller

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::debug;

use crate::charset::{CharacterClass, CharacterPools};
use crate::passgen::{self, IndexSampling};

/// Which character classes are enabled, and how long the password should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    pub length: usize,
    pub include_numbers: bool,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_symbols: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            length: 26,
            include_numbers: false,
            include_uppercase: false,
            include_lowercase: false,
            include_symbols: false,
        }
    }
}

impl SelectionConfig {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Numbers => self.include_numbers = enabled,
            CharacterClass::Uppercase => self.include_uppercase = enabled,
            CharacterClass::Lowercase => self.include_lowercase = enabled,
            CharacterClass::Symbols => self.include_symbols = enabled,
        }
    }

    pub fn any_enabled(&self) -> bool {
        CharacterClass::ALL.iter().any(|c| self.is_enabled(*c))
    }

    /// Enabled classes in assembly order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NoClassSelected,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoClassSelected => write!(
                f,
                "To generate a password, you must select at least one character class"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Concatenate the enabled pools in the fixed order.
pub fn assemble_pool(config: &SelectionConfig, pools: &CharacterPools) -> Result<String, ValidationError> {
    if !config.any_enabled() {
        return Err(ValidationError::NoClassSelected);
    }

    let pool: String = config
        .enabled_classes()
        .into_iter()
        .map(|class| pools.get(class))
        .collect();

    // A selected pool may itself be empty (e.g. an empty symbol override).
    if pool.is_empty() {
        return Err(ValidationError::NoClassSelected);
    }
    Ok(pool)
}

pub fn build_password_with<R>(
    config: &SelectionConfig,
    pools: &CharacterPools,
    sampling: IndexSampling,
    rng: &mut R,
) -> Result<String, ValidationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let pool = assemble_pool(config, pools)?;
    debug!(
        classes = ?config.enabled_classes(),
        pool_size = pool.chars().count(),
        length = config.length,
        %sampling,
        "generating password"
    );
    Ok(passgen::generate_with(&pool, config.length, sampling, rng))
}

/// Build a password from the built-in pools using the OS generator.
pub fn build_password(config: &SelectionConfig) -> Result<String, ValidationError> {
    let mut rng = OsRng;
    build_password_with(config, &CharacterPools::default(), IndexSampling::default(), &mut rng)
}
